// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Day-of-week values

use crate::fields::is_wildcard;
use serde::{Deserialize, Serialize};

/// Day of the week.
///
/// Numeric values follow Quartz numbering: `1` is Sunday, `7` is Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Parse a full name, three-letter abbreviation or Quartz number.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Ok(n) = value.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| Self::ALL.get(i)).copied();
        }
        let upper = value.to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|day| upper == day.abbrev() || upper == day.name().to_ascii_uppercase())
    }

    /// Three-letter wire form, e.g. `"SAT"`.
    pub fn abbrev(&self) -> &'static str {
        match self {
            Weekday::Sunday => "SUN",
            Weekday::Monday => "MON",
            Weekday::Tuesday => "TUE",
            Weekday::Wednesday => "WED",
            Weekday::Thursday => "THU",
            Weekday::Friday => "FRI",
            Weekday::Saturday => "SAT",
        }
    }

    /// English display name, e.g. `"Saturday"`.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

/// Parse a simple comma-separated weekday list.
///
/// A wildcard yields an empty list (every day). Duplicates are dropped,
/// keeping first-seen order. Returns `None` if any entry is not a weekday.
pub fn parse_weekdays(value: &str) -> Option<Vec<Weekday>> {
    if is_wildcard(value) {
        return Some(Vec::new());
    }
    let mut days = Vec::new();
    for part in value.split(',') {
        let day = Weekday::parse(part)?;
        if !days.contains(&day) {
            days.push(day);
        }
    }
    Some(days)
}

#[cfg(test)]
#[path = "weekday_tests.rs"]
mod tests;
