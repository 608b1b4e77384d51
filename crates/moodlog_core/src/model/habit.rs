//! Habit domain model.
//!
//! # Responsibility
//! - Define the tracked-habit record and its per-day completion set.
//! - Define the tolerant load shape (`RawHabit`) old snapshots are read
//!   through before migration.
//!
//! # Invariants
//! - `id` is stable and never reused for another habit.
//! - `completed_dates` holds at most one entry per calendar day; membership
//!   is the only completion state.
//! - `created_at` is immutable after creation.

use crate::model::date_key::DateKey;
use crate::model::wire;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Stable identifier for a habit record.
pub type HabitId = Uuid;

/// Tracked habit with its set of completed days.
///
/// Field names are serialized in camelCase to match the external snapshot
/// schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: HabitId,
    /// Non-blank display title; validated at the store boundary.
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Days on which this habit was completed. A day is either present
    /// (completed) or absent; nothing in between.
    pub completed_dates: HashSet<DateKey>,
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Creates a habit with a fresh stable ID and an empty completion set.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description,
            completed_dates: HashSet::new(),
            created_at,
        }
    }

    /// Whether this habit was completed on the given day.
    pub fn is_completed_on(&self, day: DateKey) -> bool {
        self.completed_dates.contains(&day)
    }

    /// Total number of distinct completed days.
    pub fn completed_day_count(&self) -> usize {
        self.completed_dates.len()
    }
}

/// Tolerant deserialization shape for habit records.
///
/// Snapshots written before the date-set model carried a boolean `completed`
/// flag and numeric ids; every optional field here covers one of those
/// legacy gaps. Upgraded to [`Habit`] by `HabitStore::migrate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHabit {
    /// Legacy ids were epoch-millisecond numbers; only UUID strings survive
    /// migration unchanged.
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Entries that are not day keys are skipped on load, keeping the rest
    /// of the set.
    #[serde(default, deserialize_with = "wire::lenient_date_set")]
    pub completed_dates: Option<HashSet<DateKey>>,
    /// Pre-date-set completion flag, meaning "completed today".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, deserialize_with = "wire::lenient")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&Habit> for RawHabit {
    fn from(habit: &Habit) -> Self {
        Self {
            id: Some(serde_json::Value::String(habit.id.to_string())),
            title: habit.title.clone(),
            description: habit.description.clone(),
            completed_dates: Some(habit.completed_dates.clone()),
            completed: None,
            created_at: Some(habit.created_at),
        }
    }
}
