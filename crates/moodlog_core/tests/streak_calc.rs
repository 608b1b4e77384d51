use chrono::Utc;
use moodlog_core::{streak, DateKey, Habit};

fn key(value: &str) -> DateKey {
    DateKey::parse(value).expect("test day key should parse")
}

fn habit_with_days(days: &[&str]) -> Habit {
    let mut habit = Habit::new("habit", None, Utc::now());
    for day in days {
        habit.completed_dates.insert(key(day));
    }
    habit
}

#[test]
fn empty_union_yields_zero() {
    assert_eq!(streak::recompute(&[]), 0);
    assert_eq!(streak::recompute(&[habit_with_days(&[])]), 0);
}

#[test]
fn single_distinct_day_yields_one() {
    let habits = [habit_with_days(&["2024-01-15"])];
    assert_eq!(streak::recompute(&habits), 1);
}

#[test]
fn three_consecutive_days_yield_three() {
    let habits = [habit_with_days(&["2024-01-01", "2024-01-02", "2024-01-03"])];
    assert_eq!(streak::recompute(&habits), 3);
}

#[test]
fn a_gap_keeps_isolated_days_at_one() {
    let habits = [habit_with_days(&["2024-01-01", "2024-01-03"])];
    assert_eq!(streak::recompute(&habits), 1);
}

#[test]
fn consecutive_days_split_across_habits_still_chain() {
    let habits = [
        habit_with_days(&["2024-01-01", "2024-01-03"]),
        habit_with_days(&["2024-01-02", "2024-01-04"]),
    ];
    assert_eq!(streak::recompute(&habits), 4);
}

#[test]
fn a_day_counts_once_no_matter_how_many_habits_hit_it() {
    let habits = [
        habit_with_days(&["2024-01-01", "2024-01-02"]),
        habit_with_days(&["2024-01-01"]),
    ];
    assert_eq!(streak::recompute(&habits), 2);
}

#[test]
fn longest_run_ever_wins_over_the_trailing_run() {
    let habits = [habit_with_days(&[
        "2024-01-01",
        "2024-01-02",
        "2024-01-03",
        "2024-01-04",
        "2024-01-05",
        "2024-02-10",
        "2024-02-11",
    ])];
    assert_eq!(streak::recompute(&habits), 5);
}

#[test]
fn runs_chain_across_month_and_year_boundaries() {
    let habits = [habit_with_days(&[
        "2023-12-30",
        "2023-12-31",
        "2024-01-01",
        "2024-01-02",
    ])];
    assert_eq!(streak::recompute(&habits), 4);
}

#[test]
fn max_run_is_found_even_when_it_is_not_last() {
    let habits = [habit_with_days(&[
        "2024-03-01",
        "2024-03-02",
        "2024-03-03",
        "2024-03-10",
    ])];
    assert_eq!(streak::recompute(&habits), 3);
}
