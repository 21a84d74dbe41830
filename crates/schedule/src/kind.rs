// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schedule kind classification

use crate::cron::CRON_COMPONENTS;
use crate::fields::{component_str, has_cron_syntax, is_wildcard};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Shape of a raw schedule object, which decides how it is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleKind {
    /// Fixed interval plus a plain time of day
    Simple,
    /// Cron expression or a non-trivial set of cron components
    Cron,
    /// Anything else (time windows, exclusions, list-valued fields)
    Advanced,
}

impl ScheduleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleKind::Simple => "SIMPLE",
            ScheduleKind::Cron => "CRON",
            ScheduleKind::Advanced => "ADVANCED",
        }
    }
}

impl std::fmt::Display for ScheduleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Components that only appear in cron-shaped schedules.
const CRON_ONLY_COMPONENTS: &[&str] = &["second", "month", "year"];

/// Fields that carry simple-schedule meaning.
const SIMPLE_FIELDS: &[&str] = &[
    "hour",
    "minute",
    "dayOfWeek",
    "dayOfMonth",
    "frequency",
    "interval",
];

/// Classify a raw schedule object. First match wins: CRON, SIMPLE, ADVANCED.
pub fn determine_schedule_kind(raw: &Map<String, Value>) -> ScheduleKind {
    let kind = if is_cron(raw) {
        ScheduleKind::Cron
    } else if is_simple(raw) {
        ScheduleKind::Simple
    } else {
        ScheduleKind::Advanced
    };
    tracing::debug!(%kind, "classified schedule");
    kind
}

/// A non-wildcard cron expression, or a component set that uses cron-only
/// fields or syntax and is not entirely wildcards.
fn is_cron(raw: &Map<String, Value>) -> bool {
    if let Some(expression) = raw.get("cronExpression").and_then(Value::as_str) {
        if !expression.split_whitespace().all(is_wildcard) {
            return true;
        }
    }

    let components: Vec<(&str, String)> = CRON_COMPONENTS
        .iter()
        .filter_map(|key| component_str(raw, key).map(|value| (*key, value)))
        .collect();
    let cron_shaped = components.iter().any(|(key, value)| {
        CRON_ONLY_COMPONENTS.contains(key) || has_cron_syntax(value, *key == "dayOfWeek")
    });
    let non_trivial = components.iter().any(|(_, value)| !is_wildcard(value));
    cron_shaped && non_trivial
}

/// Every key is understood, every time field is a plain scalar, and at
/// least one field says when to run.
fn is_simple(raw: &Map<String, Value>) -> bool {
    let all_plain = raw.iter().all(|(key, value)| match (key.as_str(), value) {
        (_, Value::Null) => true,
        ("hour" | "minute" | "dayOfMonth", Value::String(s)) => !has_cron_syntax(s, false),
        ("dayOfWeek", Value::String(s)) => !has_cron_syntax(s, true),
        ("hour" | "minute" | "dayOfMonth" | "dayOfWeek" | "interval", Value::Number(_)) => true,
        ("interval", Value::String(_)) => true,
        ("frequency" | "timezone" | "cronExpression", Value::String(_)) => true,
        ("second" | "month" | "year", Value::String(s)) => is_wildcard(s),
        _ => false,
    });
    all_plain
        && SIMPLE_FIELDS
            .iter()
            .any(|key| raw.get(*key).is_some_and(|v| !v.is_null()))
}

#[cfg(test)]
#[path = "kind_tests.rs"]
mod tests;
