// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parse options

use crate::error::ParseError;
use serde::{Deserialize, Serialize};

/// What to do when two triggers in one payload share a `triggerId`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateIdPolicy {
    /// Keep every trigger, log a warning, and report it from `validate()`
    #[default]
    Warn,
    /// Fail the parse on the first duplicate
    Reject,
}

/// Settings that control how a trigger settings payload is parsed.
///
/// ```toml
/// default_zone_id = "UTC"
/// default_locale = "en_US"
/// duplicate_ids = "warn"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseOptions {
    /// Used when the payload has no `zoneId`
    pub default_zone_id: String,
    /// Used when the payload has no `locale`
    pub default_locale: String,
    pub duplicate_ids: DuplicateIdPolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            default_zone_id: "UTC".to_string(),
            default_locale: "en_US".to_string(),
            duplicate_ids: DuplicateIdPolicy::Warn,
        }
    }
}

impl ParseOptions {
    /// Read options from TOML text; missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ParseError> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_duplicate_ids(mut self, policy: DuplicateIdPolicy) -> Self {
        self.duplicate_ids = policy;
        self
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
