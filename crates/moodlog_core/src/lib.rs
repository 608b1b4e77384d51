//! Core domain logic for MoodLog.
//! This crate is the single source of truth for habit, note and streak
//! invariants; rendering shells stay outside.

pub mod calendar;
pub mod logging;
pub mod model;
pub mod service;
pub mod snapshot;
pub mod store;
pub mod streak;

pub use calendar::{build_week, WeekDay, WeekView, WEEK_LENGTH};
pub use logging::{default_log_level, init_logging};
pub use model::date_key::DateKey;
pub use model::habit::{Habit, HabitId, RawHabit};
pub use model::note::{Mood, Note, NoteId, RawNote, NOTE_TEXT_SOFT_CAP};
pub use service::app_service::{
    AppService, AppState, LaunchTarget, Notifier, NullNotifier, StatsSummary,
};
pub use snapshot::{
    FileSnapshotStore, MemorySnapshotStore, Snapshot, SnapshotError, SnapshotResult,
    SnapshotStore, SNAPSHOT_NAMESPACE,
};
pub use store::habit_store::{HabitStore, ToggleOutcome};
pub use store::note_store::NoteStore;
pub use store::{StoreError, StoreResult};

/// Minimal health-check API for early shell integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
