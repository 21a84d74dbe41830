// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trigger conditions: gates evaluated after an event fires

use crate::error::ParseError;
use crate::raw;
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Condition type that gates on the row count of a dataset.
pub const DATASET_ROW_COUNT: &str = "DATASET_ROW_COUNT";

/// A condition attached to a trigger.
///
/// Parameters are kept as an opaque ordered mapping; any other keys on the
/// raw object are preserved in `extra` so they are written back unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TriggerCondition {
    pub condition_type: String,
    pub parameters: IndexMap<String, Value>,
    pub extra: IndexMap<String, Value>,
}

impl TriggerCondition {
    pub fn new(condition_type: impl Into<String>, parameters: IndexMap<String, Value>) -> Self {
        TriggerCondition {
            condition_type: condition_type.into(),
            parameters,
            extra: IndexMap::new(),
        }
    }

    pub fn from_value(raw: &Value) -> Result<Self, ParseError> {
        Self::parse_at(raw, "triggerCondition")
    }

    pub(crate) fn parse_at(raw: &Value, location: &str) -> Result<Self, ParseError> {
        let map = raw::as_object(raw, location)?;
        let condition_type = raw::discriminant(map, location)?.to_string();
        let parameters: IndexMap<String, Value> = raw::optional_object(map, "parameters", location)?
            .map(|params| params.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default();
        let extra: IndexMap<String, Value> = map
            .iter()
            .filter(|(k, _)| k.as_str() != "type" && k.as_str() != "parameters")
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Ok(TriggerCondition {
            condition_type,
            parameters,
            extra,
        })
    }

    pub fn is_dataset_row_count(&self) -> bool {
        self.condition_type == DATASET_ROW_COUNT
    }

    pub fn human_readable(&self) -> String {
        format!("Condition: {}", self.condition_type)
    }

    /// `{"type", "parameters", ...extra}`.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".into(), Value::String(self.condition_type.clone()));
        map.insert(
            "parameters".into(),
            Value::Object(
                self.parameters
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            ),
        );
        for (key, value) in &self.extra {
            map.insert(key.clone(), value.clone());
        }
        Value::Object(map)
    }

    pub fn export_value(&self) -> Value {
        let mut value = self.to_value();
        if let Value::Object(ref mut map) = value {
            map.insert(
                "humanReadable".into(),
                Value::String(self.human_readable()),
            );
        }
        value
    }
}

#[cfg(test)]
#[path = "condition_tests.rs"]
mod tests;
