//! Week-grid calendar logic.
//!
//! # Responsibility
//! - Turn a week offset into a Monday-anchored 7-day window.
//! - Decorate each day with the flags the calendar UI renders from.
//!
//! # Invariants
//! - The window always starts on Monday and holds exactly 7 sequential days.
//! - `build_week` is pure: identical inputs yield identical flags.
//! - Days outside the anchor's month are flagged, never hidden.

use crate::model::date_key::DateKey;
use crate::store::note_store::NoteStore;

pub const WEEK_LENGTH: usize = 7;

/// One rendered day of the week grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekDay {
    pub date: DateKey,
    pub is_today: bool,
    pub is_selected: bool,
    pub has_note: bool,
    /// Month differs from the anchor date's month; used for dimming.
    pub is_other_month: bool,
}

/// A Monday-anchored week window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekView {
    /// Date the window was derived from (`today + offset * 7`); its month
    /// and year drive the grid title and the other-month dimming.
    pub anchor: DateKey,
    pub days: [WeekDay; WEEK_LENGTH],
}

/// Builds the week window for `week_offset` whole weeks away from `today`.
///
/// The anchor's Monday opens the window; Sunday is treated as day 7 of its
/// week, so a Sunday anchor backs off six days rather than starting a new
/// week.
pub fn build_week(
    week_offset: i32,
    today: DateKey,
    selected_date: Option<DateKey>,
    notes: &NoteStore,
) -> WeekView {
    let anchor = today.offset_days(i64::from(week_offset) * 7);
    let monday = anchor.monday_of_week();

    let days = std::array::from_fn(|index| {
        let date = monday.offset_days(index as i64);
        WeekDay {
            date,
            is_today: DateKey::same_day(Some(date), Some(today)),
            is_selected: DateKey::same_day(Some(date), selected_date),
            has_note: notes.find_by_day(date).is_some(),
            is_other_month: date.month() != anchor.month(),
        }
    });

    WeekView { anchor, days }
}
