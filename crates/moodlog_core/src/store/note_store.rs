//! Note store: ownership of the dated note collection.
//!
//! # Responsibility
//! - Provide create/edit/delete over the note sequence.
//! - Provide free-text search and date-indexed lookup for the calendar.
//!
//! # Invariants
//! - `text` is trimmed and non-empty for every stored note.
//! - `date` and `created_at` never change after creation; `updated_at`
//!   refreshes on every edit.
//! - Several notes may share a day; day lookup returns the first in
//!   storage order, deterministically.

use crate::model::date_key::DateKey;
use crate::model::note::{Mood, Note, NoteId};
use crate::store::{StoreError, StoreResult};
use chrono::{DateTime, Utc};

/// Owner of the note collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// Notes in storage (insertion) order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Creates a note for the given day. Text is trimmed; blank text is
    /// rejected with `EmptyText`.
    pub fn add(
        &mut self,
        date: DateKey,
        text: &str,
        mood: Option<Mood>,
        now: DateTime<Utc>,
    ) -> StoreResult<Note> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }
        let note = Note::new(date, text, mood, now);
        self.notes.push(note.clone());
        Ok(note)
    }

    /// Updates text and mood in place, refreshing `updated_at`.
    ///
    /// The note's day and creation timestamp are immutable; editing never
    /// moves a note to another calendar day.
    pub fn edit(
        &mut self,
        id: NoteId,
        text: &str,
        mood: Option<Mood>,
        now: DateTime<Utc>,
    ) -> StoreResult<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }
        let note = self
            .notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(StoreError::NoteNotFound(id))?;

        note.text = text.to_string();
        note.mood = mood;
        note.updated_at = now;
        Ok(())
    }

    pub fn remove(&mut self, id: NoteId) -> StoreResult<()> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == before {
            return Err(StoreError::NoteNotFound(id));
        }
        Ok(())
    }

    /// Case-insensitive substring search over note text; an empty query
    /// matches everything. The query is matched as-is, whitespace included.
    ///
    /// Results come back newest day first. The sort is stable, so notes
    /// sharing a day keep storage order.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        let needle = query.to_lowercase();
        let mut hits: Vec<&Note> = self
            .notes
            .iter()
            .filter(|note| needle.is_empty() || note.text.to_lowercase().contains(&needle))
            .collect();
        hits.sort_by(|a, b| b.date.cmp(&a.date));
        hits
    }

    /// First note (in storage order) whose day matches.
    ///
    /// The calendar uses this to decide between opening an existing note
    /// and creating a new one.
    pub fn find_by_day(&self, day: DateKey) -> Option<&Note> {
        self.notes.iter().find(|note| note.date == day)
    }
}
