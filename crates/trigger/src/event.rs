// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trigger events
//!
//! An event is one condition under which a trigger fires. The raw `type`
//! field picks the variant; unrecognised types are kept as
//! [`GenericEvent`] so they survive a parse → write round trip.

use crate::error::ParseError;
use crate::raw;
use dft_schedule::ScheduleSpec;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::fmt;

/// Discriminant of a trigger event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TriggerEventType {
    Schedule,
    DatasetUpdated,
    /// Any type this model does not know; carries the raw tag
    Unknown(String),
}

impl TriggerEventType {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "SCHEDULE" => TriggerEventType::Schedule,
            "DATASET_UPDATED" => TriggerEventType::DatasetUpdated,
            other => TriggerEventType::Unknown(other.to_string()),
        }
    }

    /// The wire tag, e.g. `"SCHEDULE"`.
    pub fn as_str(&self) -> &str {
        match self {
            TriggerEventType::Schedule => "SCHEDULE",
            TriggerEventType::DatasetUpdated => "DATASET_UPDATED",
            TriggerEventType::Unknown(tag) => tag,
        }
    }
}

impl fmt::Display for TriggerEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Behaviour shared by every event variant.
///
/// Adding an event type means adding one struct that implements this trait
/// and one arm in [`TriggerEvent`].
pub trait EventVariant {
    fn event_type(&self) -> TriggerEventType;

    /// Minimal form: the variant's own fields plus `type`.
    fn to_value(&self) -> Value;

    fn human_readable(&self) -> String;

    /// Comprehensive form: the minimal form plus `humanReadable`.
    fn export_value(&self) -> Value {
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

/// One trigger event.
#[derive(Debug, Clone, PartialEq)]
pub enum TriggerEvent {
    Schedule(ScheduleEvent),
    DatasetUpdated(DatasetUpdatedEvent),
    Generic(GenericEvent),
}

impl TriggerEvent {
    /// Build the variant named by `raw["type"]`.
    pub fn from_value(raw: &Value) -> Result<Self, ParseError> {
        Self::parse_at(raw, "triggerEvent")
    }

    pub(crate) fn parse_at(raw: &Value, location: &str) -> Result<Self, ParseError> {
        let map = raw::as_object(raw, location)?;
        let event = match TriggerEventType::parse(raw::discriminant(map, location)?) {
            TriggerEventType::Schedule => {
                TriggerEvent::Schedule(ScheduleEvent::parse(map, location)?)
            }
            TriggerEventType::DatasetUpdated => {
                TriggerEvent::DatasetUpdated(DatasetUpdatedEvent::parse(map, location)?)
            }
            TriggerEventType::Unknown(tag) => {
                tracing::debug!(
                    %location,
                    event_type = %tag,
                    "keeping unknown trigger event as generic"
                );
                TriggerEvent::Generic(GenericEvent::from_map(tag, map))
            }
        };
        Ok(event)
    }

    pub fn as_schedule(&self) -> Option<&ScheduleEvent> {
        match self {
            TriggerEvent::Schedule(event) => Some(event),
            _ => None,
        }
    }

    pub fn as_dataset_updated(&self) -> Option<&DatasetUpdatedEvent> {
        match self {
            TriggerEvent::DatasetUpdated(event) => Some(event),
            _ => None,
        }
    }

    fn variant(&self) -> &dyn EventVariant {
        match self {
            TriggerEvent::Schedule(event) => event,
            TriggerEvent::DatasetUpdated(event) => event,
            TriggerEvent::Generic(event) => event,
        }
    }

    pub fn event_type(&self) -> TriggerEventType {
        self.variant().event_type()
    }

    pub fn to_value(&self) -> Value {
        self.variant().to_value()
    }

    pub fn export_value(&self) -> Value {
        self.variant().export_value()
    }

    pub fn human_readable(&self) -> String {
        self.variant().human_readable()
    }
}

impl From<ScheduleEvent> for TriggerEvent {
    fn from(event: ScheduleEvent) -> Self {
        TriggerEvent::Schedule(event)
    }
}

impl From<DatasetUpdatedEvent> for TriggerEvent {
    fn from(event: DatasetUpdatedEvent) -> Self {
        TriggerEvent::DatasetUpdated(event)
    }
}

// ---------------------------------------------------------------------------
// SCHEDULE
// ---------------------------------------------------------------------------

/// Fires on a time schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEvent {
    pub schedule_id: Option<String>,
    /// `None` when the raw schedule was absent or could not be resolved
    pub schedule: Option<ScheduleSpec>,
}

impl ScheduleEvent {
    pub fn new(schedule: Option<ScheduleSpec>) -> Self {
        ScheduleEvent {
            schedule_id: None,
            schedule,
        }
    }

    fn parse(map: &Map<String, Value>, location: &str) -> Result<Self, ParseError> {
        let schedule_id = raw::optional_str(map, "scheduleId", location)?;
        let schedule = map.get("schedule").and_then(ScheduleSpec::parse);
        if schedule.is_none() {
            tracing::debug!(%location, "schedule event has no resolvable schedule");
        }
        Ok(ScheduleEvent {
            schedule_id,
            schedule,
        })
    }
}

impl EventVariant for ScheduleEvent {
    fn event_type(&self) -> TriggerEventType {
        TriggerEventType::Schedule
    }

    fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".into(), Value::String("SCHEDULE".into()));
        if let Some(ref id) = self.schedule_id {
            map.insert("scheduleId".into(), Value::String(id.clone()));
        }
        if let Some(ref schedule) = self.schedule {
            map.insert("schedule".into(), schedule.to_value());
        }
        Value::Object(map)
    }

    fn human_readable(&self) -> String {
        match self.schedule {
            Some(ref schedule) => format!("Schedule: {}", schedule.human_readable()),
            None => "Schedule: unconfigured".to_string(),
        }
    }

    /// Replaces the minimal schedule with its full structured export.
    fn export_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".into(), Value::String("SCHEDULE".into()));
        if let Some(ref id) = self.schedule_id {
            map.insert("scheduleId".into(), Value::String(id.clone()));
        }
        map.insert(
            "schedule".into(),
            self.schedule
                .as_ref()
                .map(ScheduleSpec::export_value)
                .unwrap_or(Value::Null),
        );
        map.insert(
            "humanReadable".into(),
            Value::String(self.human_readable()),
        );
        Value::Object(map)
    }
}

// ---------------------------------------------------------------------------
// DATASET_UPDATED
// ---------------------------------------------------------------------------

/// Fires when a dataset is updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetUpdatedEvent {
    pub dataset_id: String,
    /// Fire only when the data content changed, not on every update
    pub trigger_on_data_changed: bool,
}

impl DatasetUpdatedEvent {
    pub fn new(dataset_id: impl Into<String>, trigger_on_data_changed: bool) -> Self {
        DatasetUpdatedEvent {
            dataset_id: dataset_id.into(),
            trigger_on_data_changed,
        }
    }

    fn parse(map: &Map<String, Value>, location: &str) -> Result<Self, ParseError> {
        Ok(DatasetUpdatedEvent {
            dataset_id: raw::required_str(map, "datasetId", location)?,
            trigger_on_data_changed: raw::optional_bool(map, "triggerOnDataChanged", location)?
                .unwrap_or(false),
        })
    }
}

impl EventVariant for DatasetUpdatedEvent {
    fn event_type(&self) -> TriggerEventType {
        TriggerEventType::DatasetUpdated
    }

    fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".into(), Value::String("DATASET_UPDATED".into()));
        map.insert("datasetId".into(), Value::String(self.dataset_id.clone()));
        map.insert(
            "triggerOnDataChanged".into(),
            Value::Bool(self.trigger_on_data_changed),
        );
        Value::Object(map)
    }

    fn human_readable(&self) -> String {
        let condition = if self.trigger_on_data_changed {
            "when data changes"
        } else {
            "on every update"
        };
        format!("Dataset {} updated ({})", self.dataset_id, condition)
    }
}

// ---------------------------------------------------------------------------
// Anything else
// ---------------------------------------------------------------------------

/// An event of a type this model does not know, kept verbatim.
///
/// The tag and the stored object always agree: `raw["type"]` is `raw_type`.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericEvent {
    raw_type: String,
    /// The whole original object, `type` included, in original key order
    raw: IndexMap<String, Value>,
}

impl GenericEvent {
    /// An event tagged `raw_type` carrying `fields`.
    ///
    /// `type` is written first; a `type` key in `fields` is ignored.
    pub fn new(raw_type: impl Into<String>, fields: IndexMap<String, Value>) -> Self {
        let raw_type = raw_type.into();
        let mut raw = IndexMap::with_capacity(fields.len() + 1);
        raw.insert("type".to_string(), Value::String(raw_type.clone()));
        raw.extend(fields.into_iter().filter(|(k, _)| k != "type"));
        GenericEvent { raw_type, raw }
    }

    fn from_map(raw_type: String, map: &Map<String, Value>) -> Self {
        GenericEvent {
            raw_type,
            raw: map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        }
    }

    pub fn raw_type(&self) -> &str {
        &self.raw_type
    }

    /// The whole object as it will be written back.
    pub fn raw(&self) -> &IndexMap<String, Value> {
        &self.raw
    }
}

impl EventVariant for GenericEvent {
    fn event_type(&self) -> TriggerEventType {
        TriggerEventType::Unknown(self.raw_type.clone())
    }

    fn to_value(&self) -> Value {
        Value::Object(
            self.raw
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    fn human_readable(&self) -> String {
        format!("Event: {}", self.raw_type)
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
