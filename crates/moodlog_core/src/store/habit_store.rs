//! Habit store: ownership of the habit sequence and its completion sets.
//!
//! # Responsibility
//! - Provide add/toggle/remove/count operations over the habit sequence.
//! - Upgrade legacy habit records (`migrate`) at snapshot load time.
//!
//! # Invariants
//! - Insertion order of habits is preserved; it is the display order.
//! - `toggle` flips exactly one day's membership; toggling the same
//!   (habit, day) pair twice restores the original set.
//! - `migrate` is idempotent: already-upgraded records pass through
//!   unchanged.

use crate::model::date_key::DateKey;
use crate::model::habit::{Habit, HabitId, RawHabit};
use crate::store::{StoreError, StoreResult};
use chrono::{DateTime, Utc};
use log::warn;
use std::collections::HashSet;
use uuid::Uuid;

/// Result of flipping one habit's completion for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Whether the day is completed after the toggle.
    pub completed: bool,
}

/// Owner of the habit sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HabitStore {
    habits: Vec<Habit>,
}

impl HabitStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_habits(habits: Vec<Habit>) -> Self {
        Self { habits }
    }

    /// Habits in insertion (display) order.
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    pub fn get(&self, id: HabitId) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }

    /// Appends a new habit with an empty completion set.
    ///
    /// Title and description are trimmed; a blank title is rejected with
    /// `EmptyTitle` and a blank description becomes `None`.
    pub fn add(
        &mut self,
        title: &str,
        description: Option<&str>,
        now: DateTime<Utc>,
    ) -> StoreResult<Habit> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let description = description
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(String::from);

        let habit = Habit::new(title, description, now);
        self.habits.push(habit.clone());
        Ok(habit)
    }

    /// Flips membership of `day` in the habit's completion set.
    ///
    /// Callers that cache a streak must recompute it after a successful
    /// toggle; the service layer owns that side effect.
    pub fn toggle(&mut self, id: HabitId, day: DateKey) -> StoreResult<ToggleOutcome> {
        let habit = self
            .habits
            .iter_mut()
            .find(|habit| habit.id == id)
            .ok_or(StoreError::HabitNotFound(id))?;

        let completed = if habit.completed_dates.remove(&day) {
            false
        } else {
            habit.completed_dates.insert(day);
            true
        };
        Ok(ToggleOutcome { completed })
    }

    /// Removes a habit entirely, completion history included.
    pub fn remove(&mut self, id: HabitId) -> StoreResult<()> {
        let before = self.habits.len();
        self.habits.retain(|habit| habit.id != id);
        if self.habits.len() == before {
            return Err(StoreError::HabitNotFound(id));
        }
        Ok(())
    }

    /// Number of habits completed on the given day.
    pub fn completed_count(&self, day: DateKey) -> usize {
        self.habits
            .iter()
            .filter(|habit| habit.is_completed_on(day))
            .count()
    }

    /// One-way upgrade of raw snapshot records to the date-set model.
    ///
    /// A record without `completed_dates` but with `completed == true` gets
    /// `{today}` synthesized; without either it gets an empty set. UUID
    /// string ids are kept, anything else (legacy numeric ids included) is
    /// remapped to a fresh v4. Records with a blank title violate the title
    /// invariant and are dropped with a warning.
    pub fn migrate(raw: Vec<RawHabit>, today: DateKey, now: DateTime<Utc>) -> Vec<Habit> {
        raw.into_iter()
            .filter_map(|record| {
                let title = record.title.trim();
                if title.is_empty() {
                    warn!("event=habit_migrate module=store status=dropped reason=empty_title");
                    return None;
                }

                let completed_dates = match record.completed_dates {
                    Some(days) => days,
                    None if record.completed == Some(true) => HashSet::from([today]),
                    None => HashSet::new(),
                };

                Some(Habit {
                    id: raw_record_id(record.id.as_ref()),
                    title: title.to_string(),
                    description: record
                        .description
                        .as_deref()
                        .map(str::trim)
                        .filter(|text| !text.is_empty())
                        .map(String::from),
                    completed_dates,
                    created_at: record.created_at.unwrap_or(now),
                })
            })
            .collect()
    }
}

/// Keeps a parseable UUID string id, remaps everything else to a fresh v4.
pub(crate) fn raw_record_id(id: Option<&serde_json::Value>) -> Uuid {
    id.and_then(serde_json::Value::as_str)
        .and_then(|text| Uuid::parse_str(text).ok())
        .unwrap_or_else(Uuid::new_v4)
}
