//! Snapshot persistence for the full application aggregate.
//!
//! # Responsibility
//! - Encode/decode the single JSON blob that captures all persisted state.
//! - Define the storage boundary (`SnapshotStore`) and its file-backed and
//!   in-memory implementations.
//!
//! # Invariants
//! - Decoding is tolerant: missing top-level fields default, legacy habit
//!   records are migrated, and invalid per-record data is dropped with a
//!   warning rather than failing the load.
//! - Unparsable JSON surfaces as `SnapshotError::Corrupt`; callers degrade
//!   to a cold start instead of crashing.

use crate::model::date_key::DateKey;
use crate::model::habit::{Habit, RawHabit};
use crate::model::note::{Mood, Note, RawNote};
use crate::store::habit_store::{raw_record_id, HabitStore};
use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Fixed namespace the snapshot is stored under.
pub const SNAPSHOT_NAMESPACE: &str = "moodlog";

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Storage-layer error for snapshot load/save.
#[derive(Debug)]
pub enum SnapshotError {
    Io(std::io::Error),
    /// Payload is not parsable JSON; treated as "no saved data" upstream.
    Corrupt(serde_json::Error),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "snapshot io failure: {err}"),
            Self::Corrupt(err) => write!(f, "snapshot payload is corrupt: {err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Corrupt(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SnapshotError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Corrupt(value)
    }
}

/// Validated in-memory form of the persisted aggregate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub habits: Vec<Habit>,
    pub notes: Vec<Note>,
    pub current_mood: Option<Mood>,
    /// Cached derived value; recomputed from the habit sets after load.
    pub streak: u32,
    pub dark_theme: bool,
    pub last_save: Option<DateTime<Utc>>,
}

/// On-disk shape; every field defaults so partial blobs still load.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct WireSnapshot {
    habits: Vec<RawHabit>,
    notes: Vec<RawNote>,
    current_mood: Option<u8>,
    streak: u32,
    dark_theme: bool,
    last_save: Option<DateTime<Utc>>,
}

/// Decodes a snapshot payload, migrating legacy records.
///
/// `today` feeds habit migration (a legacy `completed` flag means
/// "completed today"); `now` backfills missing timestamps.
pub fn decode(payload: &str, today: DateKey, now: DateTime<Utc>) -> SnapshotResult<Snapshot> {
    let wire: WireSnapshot = serde_json::from_str(payload)?;

    let habits = HabitStore::migrate(wire.habits, today, now);
    let notes = wire
        .notes
        .into_iter()
        .filter_map(|record| upgrade_note(record, now))
        .collect();

    Ok(Snapshot {
        habits,
        notes,
        current_mood: wire.current_mood.and_then(Mood::new),
        streak: wire.streak,
        dark_theme: wire.dark_theme,
        last_save: wire.last_save,
    })
}

/// Encodes a snapshot to its JSON payload.
pub fn encode(snapshot: &Snapshot) -> SnapshotResult<String> {
    let wire = WireSnapshot {
        habits: snapshot.habits.iter().map(RawHabit::from).collect(),
        notes: snapshot.notes.iter().map(RawNote::from).collect(),
        current_mood: snapshot.current_mood.map(u8::from),
        streak: snapshot.streak,
        dark_theme: snapshot.dark_theme,
        last_save: snapshot.last_save,
    };
    Ok(serde_json::to_string(&wire)?)
}

/// Upgrades one raw note record; records that cannot satisfy the note
/// invariants (no day, blank text) are dropped with a warning.
fn upgrade_note(record: RawNote, now: DateTime<Utc>) -> Option<Note> {
    let text = record.text.trim();
    if text.is_empty() {
        warn!("event=note_upgrade module=snapshot status=dropped reason=empty_text");
        return None;
    }
    let Some(date) = record.date else {
        warn!("event=note_upgrade module=snapshot status=dropped reason=missing_date");
        return None;
    };

    let created_at = record.created_at.unwrap_or(now);
    Some(Note {
        id: raw_record_id(record.id.as_ref()),
        date,
        text: text.to_string(),
        mood: record.mood.and_then(Mood::new),
        created_at,
        updated_at: record.updated_at.unwrap_or(created_at),
    })
}

/// Storage boundary for the serialized snapshot blob.
pub trait SnapshotStore {
    /// Returns the raw payload, or `None` when no snapshot exists yet.
    fn load(&self) -> SnapshotResult<Option<String>>;
    fn save(&self, payload: &str) -> SnapshotResult<()>;
}

/// JSON-file-backed snapshot store.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Stores the snapshot as `<dir>/moodlog.json`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(format!("{SNAPSHOT_NAMESPACE}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> SnapshotResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SnapshotError::Io(err)),
        }
    }

    fn save(&self, payload: &str) -> SnapshotResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

/// In-memory snapshot store for tests and throwaway sessions, the analog of
/// an in-memory database connection.
///
/// Clones share the same underlying slot, so a test can keep a handle while
/// the service owns another. Single-threaded by design, like the rest of
/// the aggregate.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds the stored payload, e.g. with a legacy or corrupt blob.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(payload.into()))),
        }
    }

    /// Current stored payload, if any.
    pub fn payload(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> SnapshotResult<Option<String>> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, payload: &str) -> SnapshotResult<()> {
        *self.slot.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}
