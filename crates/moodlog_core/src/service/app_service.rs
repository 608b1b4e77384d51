//! Application controller service.
//!
//! # Responsibility
//! - Own the single in-process aggregate (`AppState`) and apply every
//!   user-triggered mutation to it.
//! - Recompute the cached streak after every mutation that can affect it
//!   and persist a snapshot synchronously after every mutation.
//! - Surface rejected operations and outcomes through the notification
//!   sink.
//!
//! # Invariants
//! - The aggregate has exactly one writer: this service. No locking exists
//!   and none is needed.
//! - `state.streak` is derived, never hand-edited.
//! - A failed snapshot write is logged and notified but never rolls back
//!   the in-memory mutation; at most the latest operation is lost.

use crate::calendar::{build_week, WeekView};
use crate::model::date_key::DateKey;
use crate::model::habit::{Habit, HabitId};
use crate::model::note::{Mood, Note, NoteId};
use crate::snapshot::{self, Snapshot, SnapshotStore};
use crate::store::habit_store::{HabitStore, ToggleOutcome};
use crate::store::note_store::NoteStore;
use crate::store::{StoreError, StoreResult};
use crate::streak;
use chrono::Utc;
use log::{info, warn};

/// Fire-and-forget message sink; delivery is the shell's problem.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// No-op sink for shells that surface messages elsewhere (or not at all).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _message: &str) {}
}

/// View requested by the hosting platform's deep-link launch parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchTarget {
    Home,
    Diary,
    /// Open the add-habit dialog on the home view.
    AddHabit,
    /// Open today's note, existing or new; pair with
    /// [`AppService::today_note`].
    TodayNote,
}

impl LaunchTarget {
    /// Maps a raw launch parameter; unknown values fall back to home.
    pub fn from_param(param: &str) -> Self {
        match param.trim() {
            "diary" => Self::Diary,
            "add" => Self::AddHabit,
            "note" => Self::TodayNote,
            // "today" | "start" | "home" and anything unrecognized.
            _ => Self::Home,
        }
    }
}

/// Derived counters for the home and account screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSummary {
    pub streak: u32,
    pub completed_today: usize,
    pub total_habits: usize,
    pub total_notes: usize,
}

/// The single in-process application aggregate.
#[derive(Debug, Clone)]
pub struct AppState {
    pub habits: HabitStore,
    pub notes: NoteStore,
    /// Last-selected mood, independent of any note.
    pub current_mood: Option<Mood>,
    /// Cached derived value; recomputed by the service, never hand-edited.
    pub streak: u32,
    pub dark_theme: bool,
    /// Transient navigation cursor; defaults to today on load.
    pub selected_date: DateKey,
    /// Transient week-offset cursor for the calendar.
    pub week_offset: i32,
}

impl AppState {
    pub fn new(today: DateKey) -> Self {
        Self {
            habits: HabitStore::new(),
            notes: NoteStore::new(),
            current_mood: None,
            streak: 0,
            dark_theme: false,
            selected_date: today,
            week_offset: 0,
        }
    }

    fn from_snapshot(snapshot: Snapshot, today: DateKey) -> Self {
        Self {
            habits: HabitStore::from_habits(snapshot.habits),
            notes: NoteStore::from_notes(snapshot.notes),
            current_mood: snapshot.current_mood,
            streak: snapshot.streak,
            dark_theme: snapshot.dark_theme,
            selected_date: today,
            week_offset: 0,
        }
    }

    fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            habits: self.habits.habits().to_vec(),
            notes: self.notes.notes().to_vec(),
            current_mood: self.current_mood,
            streak: self.streak,
            dark_theme: self.dark_theme,
            last_save: None,
        }
    }
}

/// Controller owning the aggregate, the snapshot store and the sink.
pub struct AppService<S: SnapshotStore, N: Notifier> {
    state: AppState,
    store: S,
    notifier: N,
}

impl<S: SnapshotStore, N: Notifier> AppService<S, N> {
    /// Loads the persisted snapshot and builds the aggregate.
    ///
    /// Missing data means a cold start; a corrupt or unreadable snapshot
    /// degrades to a cold start with a warning and a user-visible message.
    /// The streak is recomputed from the migrated habit sets, never trusted
    /// from the blob.
    pub fn load(store: S, notifier: N) -> Self {
        let today = DateKey::today();
        let snapshot = match store.load() {
            Ok(Some(payload)) => match snapshot::decode(&payload, today, Utc::now()) {
                Ok(snapshot) => snapshot,
                Err(err) => {
                    warn!("event=snapshot_load module=service status=corrupt error={err}");
                    notifier.notify("Saved data could not be read; starting fresh");
                    Snapshot::default()
                }
            },
            Ok(None) => Snapshot::default(),
            Err(err) => {
                warn!("event=snapshot_load module=service status=error error={err}");
                notifier.notify("Saved data could not be read; starting fresh");
                Snapshot::default()
            }
        };

        let mut state = AppState::from_snapshot(snapshot, today);
        state.streak = streak::recompute(state.habits.habits());
        info!(
            "event=state_load module=service status=ok habits={} notes={} streak={}",
            state.habits.len(),
            state.notes.len(),
            state.streak
        );

        Self {
            state,
            store,
            notifier,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Adds a habit from user input.
    pub fn add_habit(&mut self, title: &str, description: Option<&str>) -> StoreResult<Habit> {
        let habit = match self.state.habits.add(title, description, Utc::now()) {
            Ok(habit) => habit,
            Err(err) => return Err(self.reject(err)),
        };
        info!("event=habit_add module=service status=ok id={}", habit.id);
        self.persist();
        self.notifier.notify("Habit added");
        Ok(habit)
    }

    /// Flips today's completion for one habit.
    ///
    /// Recomputing the cached streak is a documented side effect, as is the
    /// synchronous persist.
    pub fn toggle_habit(&mut self, id: HabitId) -> StoreResult<ToggleOutcome> {
        let today = DateKey::today();
        let outcome = match self.state.habits.toggle(id, today) {
            Ok(outcome) => outcome,
            Err(err) => return Err(self.reject(err)),
        };
        self.state.streak = streak::recompute(self.state.habits.habits());
        info!(
            "event=habit_toggle module=service status=ok id={id} completed={} streak={}",
            outcome.completed, self.state.streak
        );
        self.persist();
        self.notifier
            .notify(if outcome.completed { "Done!" } else { "Unchecked" });
        Ok(outcome)
    }

    /// Removes a habit and its completion history, then recomputes the
    /// streak without it.
    pub fn remove_habit(&mut self, id: HabitId) -> StoreResult<()> {
        if let Err(err) = self.state.habits.remove(id) {
            return Err(self.reject(err));
        }
        self.state.streak = streak::recompute(self.state.habits.habits());
        info!("event=habit_remove module=service status=ok id={id}");
        self.persist();
        self.notifier.notify("Habit removed");
        Ok(())
    }

    /// Records the last-selected mood.
    pub fn set_mood(&mut self, mood: Mood) {
        self.state.current_mood = Some(mood);
        self.persist();
        self.notifier.notify("Mood saved");
    }

    pub fn set_dark_theme(&mut self, enabled: bool) {
        self.state.dark_theme = enabled;
        self.persist();
    }

    /// Creates a note for a day, typically the selected calendar day.
    pub fn add_note(
        &mut self,
        date: DateKey,
        text: &str,
        mood: Option<Mood>,
    ) -> StoreResult<Note> {
        let note = match self.state.notes.add(date, text, mood, Utc::now()) {
            Ok(note) => note,
            Err(err) => return Err(self.reject(err)),
        };
        info!("event=note_add module=service status=ok id={} day={}", note.id, note.date);
        self.persist();
        self.notifier.notify("Note saved");
        Ok(note)
    }

    /// Edits an existing note's text and mood in place.
    pub fn edit_note(&mut self, id: NoteId, text: &str, mood: Option<Mood>) -> StoreResult<()> {
        if let Err(err) = self.state.notes.edit(id, text, mood, Utc::now()) {
            return Err(self.reject(err));
        }
        info!("event=note_edit module=service status=ok id={id}");
        self.persist();
        self.notifier.notify("Note saved");
        Ok(())
    }

    pub fn remove_note(&mut self, id: NoteId) -> StoreResult<()> {
        if let Err(err) = self.state.notes.remove(id) {
            return Err(self.reject(err));
        }
        info!("event=note_remove module=service status=ok id={id}");
        self.persist();
        self.notifier.notify("Note deleted");
        Ok(())
    }

    /// Case-insensitive note search, newest day first.
    pub fn search_notes(&self, query: &str) -> Vec<&Note> {
        self.state.notes.search(query)
    }

    pub fn note_for_day(&self, day: DateKey) -> Option<&Note> {
        self.state.notes.find_by_day(day)
    }

    /// Today's note, if one exists; the deep-link `note` target pre-opens
    /// it through this query.
    pub fn today_note(&self) -> Option<&Note> {
        self.state.notes.find_by_day(DateKey::today())
    }

    /// Moves the transient selection cursor; not persisted.
    pub fn select_date(&mut self, day: DateKey) {
        self.state.selected_date = day;
    }

    /// Shifts the calendar window by whole weeks; not persisted.
    pub fn shift_week(&mut self, delta: i32) {
        self.state.week_offset = self.state.week_offset.saturating_add(delta);
    }

    /// Week window for the current cursors.
    pub fn week_view(&self) -> WeekView {
        build_week(
            self.state.week_offset,
            DateKey::today(),
            Some(self.state.selected_date),
            &self.state.notes,
        )
    }

    /// Derived counters for the stat panels.
    pub fn stats(&self) -> StatsSummary {
        StatsSummary {
            streak: self.state.streak,
            completed_today: self.state.habits.completed_count(DateKey::today()),
            total_habits: self.state.habits.len(),
            total_notes: self.state.notes.len(),
        }
    }

    /// Writes the snapshot after a mutation. Failures are logged and
    /// surfaced but never undo the mutation.
    fn persist(&mut self) {
        let mut snapshot = self.state.to_snapshot();
        snapshot.last_save = Some(Utc::now());

        let result =
            snapshot::encode(&snapshot).and_then(|payload| self.store.save(&payload));
        match result {
            Ok(()) => info!(
                "event=snapshot_save module=service status=ok habits={} notes={}",
                self.state.habits.len(),
                self.state.notes.len()
            ),
            Err(err) => {
                warn!("event=snapshot_save module=service status=error error={err}");
                self.notifier.notify("Could not save your data");
            }
        }
    }

    /// Surfaces a rejected operation; store state is untouched by contract.
    fn reject(&self, err: StoreError) -> StoreError {
        warn!("event=op_rejected module=service error={err}");
        self.notifier.notify(&err.to_string());
        err
    }
}
