//! Lenient field decoders for the raw snapshot shapes.
//!
//! # Responsibility
//! - Decode individual legacy fields permissively: a value that is valid
//!   JSON but not a valid field (a gibberish date, a malformed timestamp)
//!   becomes `None` instead of failing the whole snapshot load.
//!
//! # Invariants
//! - Damage never escalates past the field it sits in: a bad entry inside
//!   a completion set skips that entry, a bad record field decodes to
//!   `None` and record upgrade decides the record's fate.

use crate::model::date_key::DateKey;
use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;

/// Decodes an optional field, mapping unparsable values to `None` with a
/// warning.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) => {
            warn!("event=wire_decode module=model status=field_ignored error={err}");
            Ok(None)
        }
    }
}

/// Decodes a completion-day set, skipping entries that are not day keys.
pub(crate) fn lenient_date_set<'de, D>(
    deserializer: D,
) -> Result<Option<HashSet<DateKey>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    let Some(items) = value.as_array() else {
        warn!("event=wire_decode module=model status=field_ignored reason=not_an_array");
        return Ok(None);
    };
    let days = items
        .iter()
        .filter_map(|item| match serde_json::from_value(item.clone()) {
            Ok(day) => Some(day),
            Err(err) => {
                warn!("event=wire_decode module=model status=entry_skipped error={err}");
                None
            }
        })
        .collect();
    Ok(Some(days))
}
