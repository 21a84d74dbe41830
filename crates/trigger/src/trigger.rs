// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A single trigger: events plus gating conditions under one ID

use crate::condition::TriggerCondition;
use crate::error::ParseError;
use crate::event::{DatasetUpdatedEvent, ScheduleEvent, TriggerEvent};
use crate::raw::{self, element};
use serde_json::{Map, Value};

/// One named unit of trigger configuration.
///
/// `events` keeps evaluation order. An empty event list is representable
/// (the trigger can never fire) and is reported by validation, not
/// rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Trigger {
    pub trigger_id: i64,
    pub title: String,
    pub events: Vec<TriggerEvent>,
    pub conditions: Vec<TriggerCondition>,
}

impl Trigger {
    pub fn new(
        trigger_id: i64,
        title: impl Into<String>,
        events: Vec<TriggerEvent>,
        conditions: Vec<TriggerCondition>,
    ) -> Self {
        Trigger {
            trigger_id,
            title: title.into(),
            events,
            conditions,
        }
    }

    pub fn from_value(raw: &Value) -> Result<Self, ParseError> {
        Self::parse_at(raw, "trigger")
    }

    pub(crate) fn parse_at(raw: &Value, location: &str) -> Result<Self, ParseError> {
        let map = raw::as_object(raw, location)?;
        let trigger_id = raw::required_i64(map, "triggerId", location)?;
        let title = raw::required_str(map, "title", location)?;

        let events = raw::optional_array(map, "triggerEvents", location)?
            .iter()
            .enumerate()
            .map(|(i, ev)| TriggerEvent::parse_at(ev, &element(location, "triggerEvents", i)))
            .collect::<Result<Vec<_>, _>>()?;
        if events.is_empty() {
            tracing::warn!(%location, trigger_id, "trigger has no events and can never fire");
        }

        let conditions = raw::optional_array(map, "triggerConditions", location)?
            .iter()
            .enumerate()
            .map(|(i, cond)| {
                TriggerCondition::parse_at(cond, &element(location, "triggerConditions", i))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Trigger {
            trigger_id,
            title,
            events,
            conditions,
        })
    }

    pub fn has_schedule_event(&self) -> bool {
        self.events.iter().any(|e| e.as_schedule().is_some())
    }

    pub fn has_dataset_event(&self) -> bool {
        self.events.iter().any(|e| e.as_dataset_updated().is_some())
    }

    /// Schedule events in stored order.
    pub fn schedule_events(&self) -> Vec<&ScheduleEvent> {
        self.events.iter().filter_map(TriggerEvent::as_schedule).collect()
    }

    /// Dataset events in stored order.
    pub fn dataset_events(&self) -> Vec<&DatasetUpdatedEvent> {
        self.events
            .iter()
            .filter_map(TriggerEvent::as_dataset_updated)
            .collect()
    }

    /// `'Title' | Events: a, b`; an empty list renders as `(none)`.
    pub fn human_readable(&self) -> String {
        let events = if self.events.is_empty() {
            "(none)".to_string()
        } else {
            self.events
                .iter()
                .map(TriggerEvent::human_readable)
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!("'{}' | Events: {}", self.title, events)
    }

    pub fn to_value(&self) -> Value {
        self.value_with(TriggerEvent::to_value, TriggerCondition::to_value)
    }

    pub fn export_value(&self) -> Value {
        let mut value = self.value_with(TriggerEvent::export_value, TriggerCondition::export_value);
        if let Value::Object(ref mut map) = value {
            map.insert(
                "humanReadable".into(),
                Value::String(self.human_readable()),
            );
        }
        value
    }

    fn value_with(
        &self,
        event: fn(&TriggerEvent) -> Value,
        condition: fn(&TriggerCondition) -> Value,
    ) -> Value {
        let mut map = Map::new();
        map.insert("triggerId".into(), Value::from(self.trigger_id));
        map.insert("title".into(), Value::String(self.title.clone()));
        map.insert(
            "triggerEvents".into(),
            Value::Array(self.events.iter().map(event).collect()),
        );
        map.insert(
            "triggerConditions".into(),
            Value::Array(self.conditions.iter().map(condition).collect()),
        );
        Value::Object(map)
    }
}

#[cfg(test)]
#[path = "trigger_tests.rs"]
mod tests;
