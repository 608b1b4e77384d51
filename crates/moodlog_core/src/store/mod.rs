//! In-memory record stores and their shared error taxonomy.
//!
//! # Responsibility
//! - Own the habit and note sequences inside the application aggregate.
//! - Return semantic errors (`EmptyTitle`, `EmptyText`, `*NotFound`) and
//!   leave state untouched on rejection.
//!
//! # Invariants
//! - Every rejected operation is a no-op on store state.
//! - Stores never touch persistence or notification; the service layer
//!   orchestrates those.

use crate::model::habit::HabitId;
use crate::model::note::NoteId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod habit_store;
pub mod note_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for habit and note operations.
///
/// All variants are recoverable locally: the caller surfaces a message and
/// the user retries with corrected input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Habit title is blank after trimming.
    EmptyTitle,
    /// Note text is blank after trimming.
    EmptyText,
    HabitNotFound(HabitId),
    NoteNotFound(NoteId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "habit title cannot be empty"),
            Self::EmptyText => write!(f, "note text cannot be empty"),
            Self::HabitNotFound(id) => write!(f, "habit not found: {id}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
        }
    }
}

impl Error for StoreError {}
