// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trigger model errors

use thiserror::Error;

/// Errors that abort parsing of a trigger settings payload.
///
/// `location` is the JSON path of the offending element, e.g.
/// `triggerSettings.triggers[0].triggerEvents[1]`, prefixed with the owning
/// entity when one was supplied.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("missing 'type' discriminant in {location}")]
    MissingDiscriminant { location: String },

    #[error("missing required field '{field}' in {location}")]
    MissingRequiredField {
        location: String,
        field: &'static str,
    },

    #[error("invalid format for {location}: {message}")]
    InvalidFormat { location: String, message: String },

    #[error("duplicate triggerId {trigger_id} in {location}")]
    DuplicateTriggerId { location: String, trigger_id: i64 },
}

/// Positional access past the end of a trigger list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("trigger index {index} out of range for {len} triggers")]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}
