// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schedule frequency

use crate::weekday::Weekday;
use serde::{Deserialize, Serialize};

/// How often a schedule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleFrequency {
    Once,
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    /// Any CRON-kind schedule
    CustomCron,
    /// ADVANCED schedules, and SIMPLE ones with nothing to derive from
    Custom,
}

impl ScheduleFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleFrequency::Once => "ONCE",
            ScheduleFrequency::Minutely => "MINUTELY",
            ScheduleFrequency::Hourly => "HOURLY",
            ScheduleFrequency::Daily => "DAILY",
            ScheduleFrequency::Weekly => "WEEKLY",
            ScheduleFrequency::Monthly => "MONTHLY",
            ScheduleFrequency::Yearly => "YEARLY",
            ScheduleFrequency::CustomCron => "CUSTOM_CRON",
            ScheduleFrequency::Custom => "CUSTOM",
        }
    }

    /// Parse the platform's frequency names, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        let frequency = match value.trim().to_ascii_uppercase().as_str() {
            "ONCE" => ScheduleFrequency::Once,
            "MINUTELY" => ScheduleFrequency::Minutely,
            "HOURLY" => ScheduleFrequency::Hourly,
            "DAILY" => ScheduleFrequency::Daily,
            "WEEKLY" => ScheduleFrequency::Weekly,
            "MONTHLY" => ScheduleFrequency::Monthly,
            "YEARLY" => ScheduleFrequency::Yearly,
            "CUSTOM_CRON" => ScheduleFrequency::CustomCron,
            "CUSTOM" => ScheduleFrequency::Custom,
            _ => return None,
        };
        Some(frequency)
    }

    /// Derive the frequency implied by simple schedule fields.
    ///
    /// The most specific field wins: day of month, then a restricted set
    /// of weekdays, then hour, then minute.
    pub(crate) fn derive(
        hour: Option<u32>,
        minute: Option<u32>,
        day_of_week: &[Weekday],
        day_of_month: Option<u32>,
    ) -> Self {
        if day_of_month.is_some() {
            ScheduleFrequency::Monthly
        } else if !day_of_week.is_empty() && day_of_week.len() < Weekday::ALL.len() {
            ScheduleFrequency::Weekly
        } else if hour.is_some() {
            ScheduleFrequency::Daily
        } else if minute.is_some() {
            ScheduleFrequency::Hourly
        } else {
            ScheduleFrequency::Custom
        }
    }
}

impl std::fmt::Display for ScheduleFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
