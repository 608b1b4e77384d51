//! Calendar-day identity.
//!
//! # Responsibility
//! - Provide the canonical day key used by completion sets, note lookup and
//!   the week grid.
//! - Keep day arithmetic (offsets, Monday anchoring) in one place.
//!
//! # Invariants
//! - Two keys compare equal iff calendar year, month and day-of-month match,
//!   regardless of time-of-day.
//! - `Ord` is chronological and matches lexicographic order of the
//!   `YYYY-MM-DD` key text.
//! - No timezone normalization: the whole system assumes a single local
//!   calendar.

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};

const KEY_FORMAT: &str = "%Y-%m-%d";

/// Canonical, timezone-naive identity of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today on the local calendar.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parses a `YYYY-MM-DD` key.
    ///
    /// Also accepts a full ISO-8601 timestamp and takes its date part; old
    /// snapshots stored note dates that way.
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, KEY_FORMAT) {
            return Some(Self(date));
        }
        trimmed
            .get(..10)
            .and_then(|prefix| NaiveDate::parse_from_str(prefix, KEY_FORMAT).ok())
            .map(Self)
    }

    /// The `YYYY-MM-DD` key text.
    pub fn to_key(self) -> String {
        self.0.format(KEY_FORMAT).to_string()
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Shifts by whole calendar days, clamping at the representable range
    /// instead of panicking on absurd offsets.
    pub fn offset_days(self, days: i64) -> Self {
        match self.0.checked_add_signed(Duration::days(days)) {
            Some(date) => Self(date),
            None if days < 0 => Self(NaiveDate::MIN),
            None => Self(NaiveDate::MAX),
        }
    }

    /// Signed number of calendar days from `self` to `other`.
    pub fn days_until(self, other: DateKey) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Monday of the ISO week containing this day.
    ///
    /// Sunday counts as day 7 of its week, so it backs off six days rather
    /// than starting a new one.
    pub fn monday_of_week(self) -> Self {
        let back = i64::from(self.0.weekday().num_days_from_monday());
        self.offset_days(-back)
    }

    /// Key equality over optional days; absent input is never an error and
    /// never equal to anything.
    pub fn same_day(a: Option<DateKey>, b: Option<DateKey>) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(KEY_FORMAT))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        DateKey::parse(&value)
            .ok_or_else(|| DeError::custom(format!("invalid day key `{value}`")))
    }
}
