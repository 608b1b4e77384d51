use chrono::{Datelike, Utc, Weekday};
use moodlog_core::{build_week, DateKey, NoteStore, WEEK_LENGTH};

fn key(value: &str) -> DateKey {
    DateKey::parse(value).expect("test day key should parse")
}

#[test]
fn week_always_holds_seven_sequential_days_starting_monday() {
    let today = key("2024-02-01");
    let notes = NoteStore::new();

    for offset in -8..=8 {
        let view = build_week(offset, today, None, &notes);
        assert_eq!(view.days.len(), WEEK_LENGTH);
        assert_eq!(view.days[0].date.date().weekday(), Weekday::Mon);
        for pair in view.days.windows(2) {
            assert_eq!(pair[0].date.days_until(pair[1].date), 1);
        }
    }
}

#[test]
fn zero_offset_week_contains_today() {
    let today = key("2024-02-01");
    let view = build_week(0, today, None, &NoteStore::new());

    assert_eq!(view.days[0].date, key("2024-01-29"));
    let today_flags: Vec<bool> = view.days.iter().map(|day| day.is_today).collect();
    assert_eq!(
        today_flags,
        vec![false, false, false, true, false, false, false]
    );
}

#[test]
fn sunday_today_stays_in_the_week_it_ends() {
    let today = key("2024-02-11");
    let view = build_week(0, today, None, &NoteStore::new());

    assert_eq!(view.days[0].date, key("2024-02-05"));
    assert!(view.days[6].is_today);
}

#[test]
fn negative_offsets_walk_back_whole_weeks() {
    let today = key("2024-02-01");
    let view = build_week(-1, today, None, &NoteStore::new());

    assert_eq!(view.days[0].date, key("2024-01-22"));
    assert!(view.days.iter().all(|day| !day.is_today));
}

#[test]
fn selected_day_is_flagged_when_inside_the_window() {
    let today = key("2024-02-01");
    let selected = Some(key("2024-02-03"));
    let view = build_week(0, today, selected, &NoteStore::new());

    let selected_flags: Vec<DateKey> = view
        .days
        .iter()
        .filter(|day| day.is_selected)
        .map(|day| day.date)
        .collect();
    assert_eq!(selected_flags, vec![key("2024-02-03")]);
}

#[test]
fn note_days_are_flagged_exactly() {
    let mut notes = NoteStore::new();
    notes
        .add(key("2024-02-01"), "first", None, Utc::now())
        .unwrap();
    notes
        .add(key("2024-02-03"), "second", None, Utc::now())
        .unwrap();

    let view = build_week(0, key("2024-02-01"), None, &notes);

    let flagged: Vec<DateKey> = view
        .days
        .iter()
        .filter(|day| day.has_note)
        .map(|day| day.date)
        .collect();
    assert_eq!(flagged, vec![key("2024-02-01"), key("2024-02-03")]);
}

#[test]
fn days_outside_the_anchor_month_are_dimmed_not_hidden() {
    let view = build_week(0, key("2024-02-01"), None, &NoteStore::new());

    let other_month: Vec<bool> = view.days.iter().map(|day| day.is_other_month).collect();
    // Mon Jan 29 .. Wed Jan 31 precede the February anchor.
    assert_eq!(
        other_month,
        vec![true, true, true, false, false, false, false]
    );
}

#[test]
fn anchor_follows_the_offset() {
    let view = build_week(2, key("2024-02-01"), None, &NoteStore::new());
    assert_eq!(view.anchor, key("2024-02-15"));
}

#[test]
fn identical_inputs_yield_identical_views() {
    let mut notes = NoteStore::new();
    notes
        .add(key("2024-02-02"), "note", None, Utc::now())
        .unwrap();
    let today = key("2024-02-01");
    let selected = Some(key("2024-02-02"));

    let first = build_week(0, today, selected, &notes);
    let second = build_week(0, today, selected, &notes);
    assert_eq!(first, second);
}
