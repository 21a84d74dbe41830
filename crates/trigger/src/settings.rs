// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trigger settings: the aggregate parsed from a dataflow's `triggerSettings`
//!
//! Two output tiers are offered and are not interchangeable:
//! [`TriggerSettings::to_value`] is the minimal form for writing back to the
//! platform, [`TriggerSettings::export_value`] adds descriptions and counts
//! for display.

use crate::error::{IndexOutOfRange, ParseError};
use crate::options::{DuplicateIdPolicy, ParseOptions};
use crate::raw::{self, element};
use crate::trigger::Trigger;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Map, Value};
use std::collections::HashSet;
use std::fmt;
use std::ops::Index;

const ROOT: &str = "triggerSettings";

/// Keys of the raw payload that this model writes itself.
const MODELED_KEYS: [&str; 3] = ["triggers", "zoneId", "locale"];

/// Identifies the entity that owns a settings object.
///
/// Used only to prefix error locations; it never owns or looks up the
/// entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParentRef {
    pub kind: String,
    pub id: String,
    pub name: Option<String>,
}

impl ParentRef {
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        ParentRef {
            kind: kind.into(),
            id: id.into(),
            name: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl fmt::Display for ParentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(ref name) => write!(f, "{} '{}' ({})", self.kind, name, self.id),
            None => write!(f, "{} ({})", self.kind, self.id),
        }
    }
}

/// Trigger counts, computed on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerStats {
    pub total_triggers: usize,
    pub schedule_triggers: usize,
    pub dataset_triggers: usize,
}

/// A dataflow's trigger configuration.
///
/// An empty `triggers` list means "manual execution only". A dataflow that
/// never configured triggers has no settings at all, i.e.
/// `Option::<TriggerSettings>::None`.
///
/// Equality compares the modeled fields only; the retained raw payload and
/// the parent reference are ignored.
#[derive(Debug, Clone)]
pub struct TriggerSettings {
    pub triggers: Vec<Trigger>,
    pub zone_id: String,
    pub locale: String,
    raw: Map<String, Value>,
    parent: Option<ParentRef>,
}

impl PartialEq for TriggerSettings {
    fn eq(&self, other: &Self) -> bool {
        self.triggers == other.triggers
            && self.zone_id == other.zone_id
            && self.locale == other.locale
    }
}

impl TriggerSettings {
    pub fn new(
        triggers: Vec<Trigger>,
        zone_id: impl Into<String>,
        locale: impl Into<String>,
    ) -> Self {
        TriggerSettings {
            triggers,
            zone_id: zone_id.into(),
            locale: locale.into(),
            raw: Map::new(),
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: ParentRef) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn parent(&self) -> Option<&ParentRef> {
        self.parent.as_ref()
    }

    /// The payload this was parsed from; empty when built with [`Self::new`].
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    // -----------------------------------------------------------------------
    // Parsing
    // -----------------------------------------------------------------------

    pub fn from_value(raw: &Value) -> Result<Self, ParseError> {
        Self::from_value_with_options(raw, &ParseOptions::default(), None)
    }

    pub fn from_value_with_parent(raw: &Value, parent: ParentRef) -> Result<Self, ParseError> {
        Self::from_value_with_options(raw, &ParseOptions::default(), Some(parent))
    }

    /// `None` for an absent or null payload, i.e. triggers were never
    /// configured.
    pub fn from_optional_value(raw: Option<&Value>) -> Result<Option<Self>, ParseError> {
        match raw {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Self::from_value(value).map(Some),
        }
    }

    pub fn from_value_with_options(
        raw: &Value,
        options: &ParseOptions,
        parent: Option<ParentRef>,
    ) -> Result<Self, ParseError> {
        let location = match parent {
            Some(ref parent) => format!("{}: {}", parent, ROOT),
            None => ROOT.to_string(),
        };
        let map = raw::as_object(raw, &location)?;

        if !map.contains_key("triggers") {
            tracing::warn!(%location, "triggerSettings has no triggers array; treating as empty");
        }
        let mut seen = HashSet::new();
        let mut triggers = Vec::new();
        for (i, item) in raw::optional_array(map, "triggers", &location)?
            .iter()
            .enumerate()
        {
            let trigger_location = element(&location, "triggers", i);
            let trigger = Trigger::parse_at(item, &trigger_location)?;
            if !seen.insert(trigger.trigger_id) {
                match options.duplicate_ids {
                    DuplicateIdPolicy::Reject => {
                        return Err(ParseError::DuplicateTriggerId {
                            location: trigger_location,
                            trigger_id: trigger.trigger_id,
                        });
                    }
                    DuplicateIdPolicy::Warn => tracing::warn!(
                        location = %trigger_location,
                        trigger_id = trigger.trigger_id,
                        "duplicate triggerId; keeping both triggers"
                    ),
                }
            }
            triggers.push(trigger);
        }

        let zone_id = raw::optional_str(map, "zoneId", &location)?
            .unwrap_or_else(|| options.default_zone_id.clone());
        let locale = raw::optional_str(map, "locale", &location)?
            .unwrap_or_else(|| options.default_locale.clone());

        Ok(TriggerSettings {
            triggers,
            zone_id,
            locale,
            raw: map.clone(),
            parent,
        })
    }

    // -----------------------------------------------------------------------
    // Collection
    // -----------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trigger> {
        self.triggers.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Trigger> {
        self.triggers.get(index)
    }

    /// Positional access that reports out-of-range as an error.
    pub fn trigger_at(&self, index: usize) -> Result<&Trigger, IndexOutOfRange> {
        self.triggers.get(index).ok_or(IndexOutOfRange {
            index,
            len: self.triggers.len(),
        })
    }

    /// First trigger with the given ID, if any.
    pub fn trigger_by_id(&self, trigger_id: i64) -> Option<&Trigger> {
        self.triggers.iter().find(|t| t.trigger_id == trigger_id)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn schedule_triggers(&self) -> Vec<&Trigger> {
        self.triggers
            .iter()
            .filter(|t| t.has_schedule_event())
            .collect()
    }

    pub fn dataset_triggers(&self) -> Vec<&Trigger> {
        self.triggers
            .iter()
            .filter(|t| t.has_dataset_event())
            .collect()
    }

    pub fn has_any_schedules(&self) -> bool {
        self.triggers.iter().any(Trigger::has_schedule_event)
    }

    pub fn has_any_dataset_triggers(&self) -> bool {
        self.triggers.iter().any(Trigger::has_dataset_event)
    }

    pub fn stats(&self) -> TriggerStats {
        TriggerStats {
            total_triggers: self.len(),
            schedule_triggers: self.schedule_triggers().len(),
            dataset_triggers: self.dataset_triggers().len(),
        }
    }

    pub fn human_readable_summary(&self) -> String {
        if self.triggers.is_empty() {
            return "Triggers (0): none configured (manual execution only)".to_string();
        }
        let mut summary = format!("Triggers ({}):", self.triggers.len());
        for trigger in &self.triggers {
            summary.push_str("\n  • ");
            summary.push_str(&trigger.human_readable());
        }
        summary
    }

    // -----------------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------------

    /// Minimal form: `{triggers, zoneId, locale}`.
    pub fn to_value(&self) -> Value {
        Value::Object(self.minimal_map())
    }

    /// Minimal form plus any top-level keys of the original payload that
    /// this model does not understand.
    pub fn to_value_with_unmodeled(&self) -> Value {
        let mut map = self.minimal_map();
        for (key, value) in &self.raw {
            if !MODELED_KEYS.contains(&key.as_str()) {
                map.insert(key.clone(), value.clone());
            }
        }
        Value::Object(map)
    }

    /// Comprehensive form: `{triggers, zoneId, locale, summary, stats}`.
    pub fn export_value(&self) -> Value {
        json!({
            "triggers": self.triggers.iter().map(Trigger::export_value).collect::<Vec<_>>(),
            "zoneId": self.zone_id,
            "locale": self.locale,
            "summary": self.human_readable_summary(),
            "stats": self.stats(),
        })
    }

    /// Comprehensive form passed through `override_fn`, which may add or
    /// replace fields.
    pub fn export_value_with<F>(&self, override_fn: F) -> Value
    where
        F: FnOnce(Value) -> Value,
    {
        override_fn(self.export_value())
    }

    fn minimal_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(
            "triggers".into(),
            Value::Array(self.triggers.iter().map(Trigger::to_value).collect()),
        );
        map.insert("zoneId".into(), Value::String(self.zone_id.clone()));
        map.insert("locale".into(), Value::String(self.locale.clone()));
        map
    }
}

impl Index<usize> for TriggerSettings {
    type Output = Trigger;

    fn index(&self, index: usize) -> &Trigger {
        &self.triggers[index]
    }
}

impl<'a> IntoIterator for &'a TriggerSettings {
    type Item = &'a Trigger;
    type IntoIter = std::slice::Iter<'a, Trigger>;

    fn into_iter(self) -> Self::IntoIter {
        self.triggers.iter()
    }
}

impl IntoIterator for TriggerSettings {
    type Item = Trigger;
    type IntoIter = std::vec::IntoIter<Trigger>;

    fn into_iter(self) -> Self::IntoIter {
        self.triggers.into_iter()
    }
}

impl Serialize for TriggerSettings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TriggerSettings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        TriggerSettings::from_value(&raw).map_err(serde::de::Error::custom)
    }
}

/// Parse trigger settings from JSON text with default options.
pub fn parse_trigger_settings(content: &str) -> Result<TriggerSettings, ParseError> {
    parse_trigger_settings_with_options(content, &ParseOptions::default())
}

/// Parse trigger settings from JSON text.
pub fn parse_trigger_settings_with_options(
    content: &str,
    options: &ParseOptions,
) -> Result<TriggerSettings, ParseError> {
    let raw: Value = serde_json::from_str(content)?;
    TriggerSettings::from_value_with_options(&raw, options, None)
}

#[cfg(test)]
#[path = "settings_tests/mod.rs"]
mod tests;
