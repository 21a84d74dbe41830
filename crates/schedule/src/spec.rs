// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved schedule

use crate::cron::CronFields;
use crate::fields::{
    component_str, is_wildcard, parse_string_field, parse_u32_field, DAYS_OF_MONTH, HOURS,
    INTERVALS, MINUTES,
};
use crate::frequency::ScheduleFrequency;
use crate::kind::{determine_schedule_kind, ScheduleKind};
use crate::weekday::{parse_weekdays, Weekday};
use serde_json::{json, Map, Value};
use std::ops::RangeInclusive;

/// One resolved schedule, uniform across the SIMPLE, CRON and ADVANCED
/// shapes.
///
/// Fields are private: `frequency` is derived from the others and
/// `cron_expression` is present exactly when the kind is CRON. Build a new
/// spec through a constructor instead of editing one in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSpec {
    kind: ScheduleKind,
    frequency: ScheduleFrequency,
    hour: Option<u32>,
    minute: Option<u32>,
    day_of_week: Vec<Weekday>,
    day_of_month: Option<u32>,
    interval: Option<u32>,
    timezone: Option<String>,
    cron: Option<CronSchedule>,
    /// Original object of an ADVANCED schedule, written back unchanged
    advanced: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CronSchedule {
    expression: String,
    /// `None` when the expression does not split into 6 or 7 fields
    fields: Option<CronFields>,
    /// Whether the raw object carried `cronExpression` rather than components
    as_expression: bool,
}

impl ScheduleSpec {
    /// Resolve a raw schedule value.
    ///
    /// Absent, null and empty objects mean "no schedule" and yield `None`.
    /// Anything that is an object with content resolves to some kind.
    pub fn parse(raw: &Value) -> Option<Self> {
        match raw {
            Value::Null => None,
            Value::Object(map) => Self::from_map(map),
            other => {
                tracing::warn!(value = %other, "schedule is not an object; treating as unresolved");
                None
            }
        }
    }

    /// Resolve a raw schedule object; `None` when it is empty.
    pub fn from_map(raw: &Map<String, Value>) -> Option<Self> {
        if raw.values().all(Value::is_null) {
            return None;
        }
        let spec = match determine_schedule_kind(raw) {
            ScheduleKind::Simple => Self::parse_simple(raw),
            ScheduleKind::Cron => Self::parse_cron(raw),
            ScheduleKind::Advanced => Self::parse_advanced(raw),
        };
        Some(spec)
    }

    /// A daily schedule at a fixed time.
    pub fn daily(hour: u32, minute: u32) -> Self {
        Self::simple(Some(hour), Some(minute), Vec::new(), None, None, None)
    }

    /// A weekly schedule on the given days at a fixed time.
    pub fn weekly(days: Vec<Weekday>, hour: u32, minute: u32) -> Self {
        Self::simple(Some(hour), Some(minute), days, None, None, None)
    }

    /// A monthly schedule on one day of the month at a fixed time.
    pub fn monthly(day_of_month: u32, hour: u32, minute: u32) -> Self {
        Self::simple(
            Some(hour),
            Some(minute),
            Vec::new(),
            Some(day_of_month),
            None,
            None,
        )
    }

    /// A schedule that fires every `interval` units of `frequency`.
    ///
    /// `CUSTOM_CRON` belongs to CRON schedules only and is stored as `CUSTOM`.
    pub fn every(frequency: ScheduleFrequency, interval: u32) -> Self {
        let frequency = match frequency {
            ScheduleFrequency::CustomCron => ScheduleFrequency::Custom,
            other => other,
        };
        Self::simple(
            None,
            None,
            Vec::new(),
            None,
            Some(interval.max(1)),
            Some(frequency),
        )
    }

    /// A CRON schedule from structured components.
    ///
    /// Returns `None` when the components would not read back as CRON,
    /// e.g. all wildcards.
    pub fn from_cron_fields(fields: CronFields) -> Option<Self> {
        if determine_schedule_kind(&fields.to_map()) != ScheduleKind::Cron {
            return None;
        }
        Some(Self::cron(
            CronSchedule {
                expression: fields.expression(),
                fields: Some(fields),
                as_expression: false,
            },
            None,
        ))
    }

    /// A CRON schedule from an expression string.
    ///
    /// Returns `None` for an expression made only of wildcards.
    pub fn from_cron_expression(expression: &str) -> Option<Self> {
        let mut raw = Map::new();
        raw.insert("cronExpression".into(), Value::String(expression.into()));
        match determine_schedule_kind(&raw) {
            ScheduleKind::Cron => Some(Self::parse_cron(&raw)),
            _ => None,
        }
    }

    /// Return the same schedule pinned to a timezone.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        let timezone = timezone.into();
        if let Some(ref mut advanced) = self.advanced {
            advanced.insert("timezone".into(), Value::String(timezone.clone()));
        }
        self.timezone = Some(timezone);
        self
    }

    pub fn kind(&self) -> ScheduleKind {
        self.kind
    }

    pub fn frequency(&self) -> ScheduleFrequency {
        self.frequency
    }

    pub fn hour(&self) -> Option<u32> {
        self.hour
    }

    pub fn minute(&self) -> Option<u32> {
        self.minute
    }

    /// Restricted weekdays; empty means every day.
    pub fn day_of_week(&self) -> &[Weekday] {
        &self.day_of_week
    }

    pub fn day_of_month(&self) -> Option<u32> {
        self.day_of_month
    }

    pub fn interval(&self) -> Option<u32> {
        self.interval
    }

    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    /// The cron expression; present exactly when the kind is CRON.
    pub fn cron_expression(&self) -> Option<&str> {
        self.cron.as_ref().map(|c| c.expression.as_str())
    }

    /// Structured cron components, when the expression has 6 or 7 fields.
    pub fn cron_fields(&self) -> Option<&CronFields> {
        self.cron.as_ref().and_then(|c| c.fields.as_ref())
    }

    /// Natural-language description, e.g. `"Every day at 09:00"`.
    pub fn human_readable(&self) -> String {
        crate::describe::describe_schedule(self)
    }

    /// Minimal form, suitable for writing back to the platform.
    ///
    /// Parsing the result yields an equal spec.
    pub fn to_value(&self) -> Value {
        let mut map = match (self.kind, &self.cron, &self.advanced) {
            (ScheduleKind::Advanced, _, Some(advanced)) => return Value::Object(advanced.clone()),
            (ScheduleKind::Cron, Some(cron), _) => match (&cron.fields, cron.as_expression) {
                (Some(fields), false) => fields.to_map(),
                _ => {
                    let mut map = Map::new();
                    map.insert("cronExpression".into(), Value::String(cron.expression.clone()));
                    map
                }
            },
            _ => self.simple_map(),
        };
        if let Some(ref timezone) = self.timezone {
            map.insert("timezone".into(), Value::String(timezone.clone()));
        }
        Value::Object(map)
    }

    /// Comprehensive form for display: every structured field (nulls
    /// included) plus the description.
    pub fn export_value(&self) -> Value {
        let mut value = json!({
            "kind": self.kind,
            "frequency": self.frequency,
            "hour": self.hour,
            "minute": self.minute,
            "dayOfWeek": self.day_of_week,
            "dayOfMonth": self.day_of_month,
            "interval": self.interval,
            "timezone": self.timezone,
            "humanReadable": self.human_readable(),
        });
        if let (Some(cron), Value::Object(map)) = (&self.cron, &mut value) {
            map.insert("cronExpression".into(), Value::String(cron.expression.clone()));
            map.insert(
                "cronFields".into(),
                cron.fields
                    .as_ref()
                    .and_then(|f| serde_json::to_value(f).ok())
                    .unwrap_or(Value::Null),
            );
        }
        value
    }

    fn simple(
        hour: Option<u32>,
        minute: Option<u32>,
        day_of_week: Vec<Weekday>,
        day_of_month: Option<u32>,
        interval: Option<u32>,
        explicit: Option<ScheduleFrequency>,
    ) -> Self {
        let frequency = explicit.unwrap_or_else(|| {
            ScheduleFrequency::derive(hour, minute, &day_of_week, day_of_month)
        });
        ScheduleSpec {
            kind: ScheduleKind::Simple,
            frequency,
            hour,
            minute,
            day_of_week,
            day_of_month,
            interval,
            timezone: None,
            cron: None,
            advanced: None,
        }
    }

    fn cron(cron: CronSchedule, timezone: Option<String>) -> Self {
        let fields = cron.fields.as_ref();
        ScheduleSpec {
            kind: ScheduleKind::Cron,
            frequency: ScheduleFrequency::CustomCron,
            hour: fields.and_then(|f| plain_u32(&f.hour, HOURS)),
            minute: fields.and_then(|f| plain_u32(&f.minute, MINUTES)),
            day_of_week: fields
                .and_then(|f| parse_weekdays(&f.day_of_week))
                .unwrap_or_default(),
            day_of_month: fields.and_then(|f| plain_u32(&f.day_of_month, DAYS_OF_MONTH)),
            interval: None,
            timezone,
            cron: Some(cron),
            advanced: None,
        }
    }

    fn parse_simple(raw: &Map<String, Value>) -> Self {
        let explicit = parse_string_field(raw, "frequency").and_then(|f| {
            let parsed = ScheduleFrequency::parse(&f);
            if parsed.is_none() {
                tracing::debug!(frequency = %f, "ignoring unknown schedule frequency");
            }
            parsed
        });
        let mut spec = Self::simple(
            parse_u32_field(raw, "hour", HOURS),
            parse_u32_field(raw, "minute", MINUTES),
            parse_day_of_week(raw),
            parse_u32_field(raw, "dayOfMonth", DAYS_OF_MONTH),
            parse_u32_field(raw, "interval", INTERVALS),
            explicit,
        );
        spec.timezone = parse_string_field(raw, "timezone");
        spec
    }

    fn parse_cron(raw: &Map<String, Value>) -> Self {
        let expression = raw
            .get("cronExpression")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|e| !e.split_whitespace().all(is_wildcard));
        let cron = match expression {
            Some(expression) => {
                let fields = CronFields::from_expression(expression);
                if fields.is_none() {
                    tracing::warn!(
                        expression,
                        "cron expression does not have 6 or 7 fields; keeping it verbatim"
                    );
                }
                CronSchedule {
                    expression: expression.to_string(),
                    fields,
                    as_expression: true,
                }
            }
            None => {
                let fields = CronFields::from_components(raw);
                CronSchedule {
                    expression: fields.expression(),
                    fields: Some(fields),
                    as_expression: false,
                }
            }
        };
        Self::cron(cron, parse_string_field(raw, "timezone"))
    }

    fn parse_advanced(raw: &Map<String, Value>) -> Self {
        let hour = parse_u32_field(raw, "hour", HOURS);
        let minute = parse_u32_field(raw, "minute", MINUTES);
        ScheduleSpec {
            kind: ScheduleKind::Advanced,
            frequency: ScheduleFrequency::Custom,
            hour,
            minute,
            day_of_week: parse_day_of_week(raw),
            day_of_month: parse_u32_field(raw, "dayOfMonth", DAYS_OF_MONTH),
            interval: parse_u32_field(raw, "interval", INTERVALS),
            timezone: parse_string_field(raw, "timezone"),
            cron: None,
            advanced: Some(raw.clone()),
        }
    }

    fn simple_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        let derived =
            ScheduleFrequency::derive(self.hour, self.minute, &self.day_of_week, self.day_of_month);
        let bare = self.hour.is_none()
            && self.minute.is_none()
            && self.day_of_week.is_empty()
            && self.day_of_month.is_none()
            && self.interval.is_none();
        if self.frequency != derived || bare {
            map.insert("frequency".into(), json!(self.frequency));
        }
        if let Some(hour) = self.hour {
            map.insert("hour".into(), Value::String(hour.to_string()));
        }
        if let Some(minute) = self.minute {
            map.insert("minute".into(), Value::String(minute.to_string()));
        }
        if !self.day_of_week.is_empty() {
            let days: Vec<&str> = self.day_of_week.iter().map(Weekday::abbrev).collect();
            map.insert("dayOfWeek".into(), Value::String(days.join(",")));
        }
        if let Some(day) = self.day_of_month {
            map.insert("dayOfMonth".into(), Value::String(day.to_string()));
        }
        if let Some(interval) = self.interval {
            map.insert("interval".into(), json!(interval));
        }
        map
    }
}

/// A cron component that is a plain in-range number, e.g. the `9` in
/// `0 0 9 ? * *`.
fn plain_u32(value: &str, range: RangeInclusive<u32>) -> Option<u32> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|n| range.contains(n))
}

fn parse_day_of_week(raw: &Map<String, Value>) -> Vec<Weekday> {
    let Some(value) = component_str(raw, "dayOfWeek") else {
        return Vec::new();
    };
    parse_weekdays(&value).unwrap_or_else(|| {
        tracing::debug!(day_of_week = %value, "ignoring malformed dayOfWeek");
        Vec::new()
    })
}

#[cfg(test)]
#[path = "spec_tests.rs"]
mod tests;
