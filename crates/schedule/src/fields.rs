// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lenient extraction of schedule fields from raw JSON.
//!
//! Nothing here fails: a malformed field is reported at debug level and
//! read as absent.

use serde_json::{Map, Value};
use std::ops::RangeInclusive;

pub(crate) const HOURS: RangeInclusive<u32> = 0..=23;
pub(crate) const MINUTES: RangeInclusive<u32> = 0..=59;
pub(crate) const DAYS_OF_MONTH: RangeInclusive<u32> = 1..=31;
pub(crate) const INTERVALS: RangeInclusive<u32> = 1..=u32::MAX;

/// True for values that mean "any": `*`, `?` or blank.
pub(crate) fn is_wildcard(value: &str) -> bool {
    matches!(value.trim(), "" | "*" | "?")
}

/// True when a component uses cron-only syntax (steps, ranges, `L`/`W`/`#`).
///
/// Commas are cron syntax for time fields but a plain list for weekdays,
/// so callers say whether a list is acceptable.
pub(crate) fn has_cron_syntax(value: &str, allow_list: bool) -> bool {
    let value = value.trim();
    if is_wildcard(value) {
        return false;
    }
    if value.contains(|c: char| matches!(c, '/' | '-' | '#' | '*' | '?')) {
        return true;
    }
    if !allow_list && value.contains(',') {
        return true;
    }
    value.split(',').map(str::trim).any(|part| {
        let Some(prefix) = part
            .strip_suffix('L')
            .or_else(|| part.strip_suffix('W'))
        else {
            return false;
        };
        prefix.chars().all(|c| c.is_ascii_digit())
    })
}

/// Read a scalar component as the string the platform uses on the wire.
///
/// Strings are trimmed, numbers are rendered; nulls, arrays and objects
/// yield `None`.
pub(crate) fn component_str(raw: &Map<String, Value>, key: &str) -> Option<String> {
    match raw.get(key)? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Read a plain integer field within `range`.
///
/// Wildcards are silently absent; anything else that is not a plain
/// in-range integer is logged and treated as absent.
pub(crate) fn parse_u32_field(
    raw: &Map<String, Value>,
    key: &str,
    range: RangeInclusive<u32>,
) -> Option<u32> {
    let value = raw.get(key)?;
    let parsed = match value {
        Value::Null => return None,
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) if is_wildcard(s) => return None,
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if range.contains(&n) => Some(n),
        _ => {
            tracing::debug!(field = key, %value, "ignoring malformed schedule field");
            None
        }
    }
}

/// Read an optional non-blank string field.
pub(crate) fn parse_string_field(raw: &Map<String, Value>, key: &str) -> Option<String> {
    match raw.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Null | Value::String(_) => None,
        other => {
            tracing::debug!(field = key, value = %other, "ignoring non-string schedule field");
            None
        }
    }
}

/// Format a time of day as `HH:MM`; a missing minute reads as `:00`.
pub(crate) fn format_time(hour: u32, minute: Option<u32>) -> String {
    format!("{:02}:{:02}", hour, minute.unwrap_or(0))
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;
