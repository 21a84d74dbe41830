// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! English descriptions of schedules

use crate::fields::format_time;
use crate::frequency::ScheduleFrequency;
use crate::kind::ScheduleKind;
use crate::spec::ScheduleSpec;
use crate::weekday::Weekday;

pub(crate) fn describe_schedule(spec: &ScheduleSpec) -> String {
    match spec.kind() {
        ScheduleKind::Cron => format!(
            "Custom schedule: {}",
            spec.cron_expression().unwrap_or_default()
        ),
        ScheduleKind::Advanced => format!("Advanced schedule{}", at_time(spec)),
        ScheduleKind::Simple => describe_simple(spec),
    }
}

fn describe_simple(spec: &ScheduleSpec) -> String {
    let at = at_time(spec);
    match spec.frequency() {
        ScheduleFrequency::Once => format!("Once{at}"),
        ScheduleFrequency::Minutely => every(spec.interval(), "minute", "minutes"),
        ScheduleFrequency::Hourly => {
            let base = every(spec.interval(), "hour", "hours");
            match (spec.hour(), spec.minute()) {
                (None, Some(minute)) => format!("{base} at :{minute:02}"),
                _ => format!("{base}{at}"),
            }
        }
        ScheduleFrequency::Daily => format!("{}{at}", every(spec.interval(), "day", "days")),
        ScheduleFrequency::Weekly => match (spec.day_of_week(), spec.interval()) {
            ([], interval) => format!("{}{at}", every(interval, "week", "weeks")),
            (days, Some(n)) if n > 1 => format!("Every {n} weeks on {}{at}", day_names(days)),
            (days, _) => format!("Every {}{at}", day_names(days)),
        },
        ScheduleFrequency::Monthly => {
            let base = every(spec.interval(), "month", "months");
            match spec.day_of_month() {
                Some(day) => format!("{base} on day {day}{at}"),
                None => format!("{base}{at}"),
            }
        }
        ScheduleFrequency::Yearly => format!("{}{at}", every(spec.interval(), "year", "years")),
        ScheduleFrequency::CustomCron | ScheduleFrequency::Custom => "Custom schedule".to_string(),
    }
}

/// `" at HH:MM"` when an hour is known, otherwise empty.
fn at_time(spec: &ScheduleSpec) -> String {
    spec.hour()
        .map(|hour| format!(" at {}", format_time(hour, spec.minute())))
        .unwrap_or_default()
}

fn every(interval: Option<u32>, one: &str, many: &str) -> String {
    match interval {
        Some(n) if n > 1 => format!("Every {n} {many}"),
        _ => format!("Every {one}"),
    }
}

fn day_names(days: &[Weekday]) -> String {
    days.iter()
        .map(Weekday::name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "describe_tests.rs"]
mod tests;
