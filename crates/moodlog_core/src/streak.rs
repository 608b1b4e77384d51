//! Overall streak computation.
//!
//! # Responsibility
//! - Derive the cached streak value from the authoritative completion sets.
//!
//! # Invariants
//! - A day counts when *any* habit was completed on it, not all.
//! - The result is the longest run ever achieved, not the trailing run
//!   ending today; a past streak keeps its value after a gap.

use crate::model::date_key::DateKey;
use crate::model::habit::Habit;
use std::collections::BTreeSet;

/// Longest run of consecutive calendar days on which at least one habit
/// was completed.
///
/// An empty union yields 0; a single distinct day yields 1; isolated days
/// each contribute a run of length 1 and the maximum run wins.
pub fn recompute(habits: &[Habit]) -> u32 {
    let mut active_days: BTreeSet<DateKey> = BTreeSet::new();
    for habit in habits {
        active_days.extend(habit.completed_dates.iter().copied());
    }

    let mut days = active_days.into_iter();
    let Some(first) = days.next() else {
        return 0;
    };

    let mut previous = first;
    let mut run = 1u32;
    let mut best = 1u32;
    for day in days {
        if previous.days_until(day) == 1 {
            run += 1;
            best = best.max(run);
        } else {
            run = 1;
        }
        previous = day;
    }
    best
}
