// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cron components in Quartz order

use crate::fields::component_str;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw field names of the cron components, in expression order.
pub const CRON_COMPONENTS: [&str; 7] = [
    "second",
    "minute",
    "hour",
    "dayOfMonth",
    "month",
    "dayOfWeek",
    "year",
];

/// Structured cron components.
///
/// Serializes with the platform's camelCase component names; `year` is
/// omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CronFields {
    pub second: String,
    pub minute: String,
    pub hour: String,
    pub day_of_month: String,
    pub month: String,
    pub day_of_week: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl CronFields {
    /// Split a six- or seven-field expression into components.
    pub fn from_expression(expression: &str) -> Option<Self> {
        let parts: Vec<&str> = expression.split_whitespace().collect();
        match parts.as_slice() {
            [second, minute, hour, day_of_month, month, day_of_week, rest @ ..]
                if rest.len() <= 1 =>
            {
                Some(CronFields {
                    second: second.to_string(),
                    minute: minute.to_string(),
                    hour: hour.to_string(),
                    day_of_month: day_of_month.to_string(),
                    month: month.to_string(),
                    day_of_week: day_of_week.to_string(),
                    year: rest.first().map(|y| y.to_string()),
                })
            }
            _ => None,
        }
    }

    /// Collect components from a raw schedule object.
    ///
    /// Missing `second`/`minute` read as `0`, other missing fields as `*`.
    pub(crate) fn from_components(raw: &Map<String, Value>) -> Self {
        let or = |key: &str, default: &str| {
            component_str(raw, key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        CronFields {
            second: or("second", "0"),
            minute: or("minute", "0"),
            hour: or("hour", "*"),
            day_of_month: or("dayOfMonth", "*"),
            month: or("month", "*"),
            day_of_week: or("dayOfWeek", "*"),
            year: component_str(raw, "year").filter(|v| !v.is_empty()),
        }
    }

    /// Rebuild the expression: second, minute, hour, day of month, month,
    /// day of week, then year when present.
    pub fn expression(&self) -> String {
        let mut parts = vec![
            self.second.as_str(),
            self.minute.as_str(),
            self.hour.as_str(),
            self.day_of_month.as_str(),
            self.month.as_str(),
            self.day_of_week.as_str(),
        ];
        if let Some(ref year) = self.year {
            parts.push(year.as_str());
        }
        parts.join(" ")
    }

    /// The components as a raw schedule object.
    pub(crate) fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        for (key, value) in CRON_COMPONENTS.iter().zip(self.values()) {
            if let Some(value) = value {
                map.insert((*key).to_string(), Value::String(value.to_string()));
            }
        }
        map
    }

    fn values(&self) -> [Option<&str>; 7] {
        [
            Some(self.second.as_str()),
            Some(self.minute.as_str()),
            Some(self.hour.as_str()),
            Some(self.day_of_month.as_str()),
            Some(self.month.as_str()),
            Some(self.day_of_week.as_str()),
            self.year.as_deref(),
        ]
    }
}

#[cfg(test)]
#[path = "cron_tests.rs"]
mod tests;
