//! Domain model for habits, notes and calendar-day identity.
//!
//! # Responsibility
//! - Define the canonical records persisted in the snapshot.
//! - Keep day-identity semantics (`DateKey`) in one place.
//!
//! # Invariants
//! - Every record is identified by a stable UUID.
//! - A habit day is either completed (present in the set) or not; there is
//!   no partial or repeated completion state.

pub mod date_key;
pub mod habit;
pub mod note;
pub(crate) mod wire;
