//! Diary note domain model.
//!
//! # Responsibility
//! - Define the dated note record and the ordinal mood scale.
//! - Define the tolerant load shape (`RawNote`) old snapshots are read
//!   through.
//!
//! # Invariants
//! - `text` is trimmed-non-empty at save time (store boundary).
//! - `date` and `created_at` are immutable after creation; `updated_at`
//!   refreshes on every edit.
//! - A mood level is always inside `1..=5`.

use crate::model::date_key::DateKey;
use crate::model::wire;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note record.
pub type NoteId = Uuid;

/// Soft cap on note length, enforced by shells at input time, not here.
pub const NOTE_TEXT_SOFT_CAP: usize = 1000;

/// Ordinal mood level on a 1..=5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Mood(u8);

impl Mood {
    pub const MIN_LEVEL: u8 = 1;
    pub const MAX_LEVEL: u8 = 5;

    /// Returns `None` for levels outside the scale.
    pub fn new(level: u8) -> Option<Self> {
        (Self::MIN_LEVEL..=Self::MAX_LEVEL)
            .contains(&level)
            .then_some(Self(level))
    }

    pub fn level(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Mood {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Mood::new(level).ok_or_else(|| {
            format!(
                "mood level {level} is outside {}..={}",
                Mood::MIN_LEVEL,
                Mood::MAX_LEVEL
            )
        })
    }
}

impl From<Mood> for u8 {
    fn from(mood: Mood) -> Self {
        mood.0
    }
}

/// Dated diary note.
///
/// `date` is the calendar day the note is *about*, distinct from
/// `created_at`. Several notes may share a day; lookup order is storage
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub date: DateKey,
    pub text: String,
    #[serde(default)]
    pub mood: Option<Mood>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Creates a note with a fresh stable ID; both timestamps start at `now`.
    pub fn new(
        date: DateKey,
        text: impl Into<String>,
        mood: Option<Mood>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            text: text.into(),
            mood,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Tolerant deserialization shape for note records.
///
/// Old snapshots stored `date` as a full ISO-8601 timestamp and ids as
/// numbers; moods outside the scale are dropped rather than failing the
/// whole load. Unparsable field values decode to `None` so one damaged
/// record never takes the rest of the snapshot down with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNote {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "wire::lenient")]
    pub date: Option<DateKey>,
    #[serde(default)]
    pub text: String,
    #[serde(default, deserialize_with = "wire::lenient")]
    pub mood: Option<u8>,
    #[serde(default, deserialize_with = "wire::lenient")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "wire::lenient")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&Note> for RawNote {
    fn from(note: &Note) -> Self {
        Self {
            id: Some(serde_json::Value::String(note.id.to_string())),
            date: Some(note.date),
            text: note.text.clone(),
            mood: note.mood.map(u8::from),
            created_at: Some(note.created_at),
            updated_at: Some(note.updated_at),
        }
    }
}
