// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dft-trigger: typed model of a dataflow's `triggerSettings`
//!
//! Raw JSON is parsed into [`TriggerSettings`] → [`Trigger`] →
//! [`TriggerEvent`] / [`TriggerCondition`], queried, and written back either
//! in the minimal form accepted by the platform or in a comprehensive form
//! for display.

mod condition;
mod error;
mod event;
mod options;
mod raw;
mod settings;
mod trigger;
mod validate;

pub use condition::{TriggerCondition, DATASET_ROW_COUNT};
pub use error::{IndexOutOfRange, ParseError};
pub use event::{
    DatasetUpdatedEvent, EventVariant, GenericEvent, ScheduleEvent, TriggerEvent,
    TriggerEventType,
};
pub use options::{DuplicateIdPolicy, ParseOptions};
pub use settings::{
    parse_trigger_settings, parse_trigger_settings_with_options, ParentRef, TriggerSettings,
    TriggerStats,
};
pub use trigger::Trigger;
pub use validate::ValidationWarning;

pub use dft_schedule::{ScheduleFrequency, ScheduleKind, ScheduleSpec, Weekday};
