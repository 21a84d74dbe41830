// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dft-schedule: schedule shapes attached to dataflow schedule triggers
//!
//! A raw schedule object is classified as SIMPLE, CRON or ADVANCED and
//! resolved into one uniform [`ScheduleSpec`].

mod cron;
mod describe;
mod fields;
mod frequency;
mod kind;
mod spec;
mod weekday;

pub use cron::{CronFields, CRON_COMPONENTS};
pub use frequency::ScheduleFrequency;
pub use kind::{determine_schedule_kind, ScheduleKind};
pub use spec::ScheduleSpec;
pub use weekday::{parse_weekdays, Weekday};
