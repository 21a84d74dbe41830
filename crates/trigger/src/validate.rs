// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Non-fatal checks over parsed trigger settings

use crate::event::TriggerEvent;
use crate::settings::TriggerSettings;
use indexmap::IndexMap;
use std::fmt;

/// A configuration shape that parses but is probably a mistake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// Several triggers share one ID; `indices` lists all of them in order
    DuplicateTriggerId { trigger_id: i64, indices: Vec<usize> },
    /// A trigger with no events can never fire
    NoEvents { index: usize, trigger_id: i64 },
    /// A schedule event whose schedule could not be resolved
    UnresolvedSchedule {
        index: usize,
        trigger_id: i64,
        event_index: usize,
    },
    /// An event kept as generic because its type is not modeled
    UnknownEventType {
        index: usize,
        trigger_id: i64,
        event_index: usize,
        event_type: String,
    },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::DuplicateTriggerId {
                trigger_id,
                indices,
            } => {
                let positions: Vec<String> = indices
                    .iter()
                    .map(|i| format!("triggers[{i}]"))
                    .collect();
                write!(
                    f,
                    "triggerId {} is shared by {}",
                    trigger_id,
                    positions.join(", ")
                )
            }
            ValidationWarning::NoEvents { index, trigger_id } => write!(
                f,
                "triggers[{index}] (triggerId {trigger_id}) has no events and can never fire"
            ),
            ValidationWarning::UnresolvedSchedule {
                index,
                trigger_id,
                event_index,
            } => write!(
                f,
                "triggers[{index}].triggerEvents[{event_index}] (triggerId {trigger_id}) has no resolvable schedule"
            ),
            ValidationWarning::UnknownEventType {
                index,
                trigger_id,
                event_index,
                event_type,
            } => write!(
                f,
                "triggers[{index}].triggerEvents[{event_index}] (triggerId {trigger_id}) has unmodeled type '{event_type}'"
            ),
        }
    }
}

impl TriggerSettings {
    /// Report suspicious shapes without rejecting them.
    ///
    /// Duplicate IDs come first, then per-trigger findings in trigger order.
    pub fn validate(&self) -> Vec<ValidationWarning> {
        let mut by_id: IndexMap<i64, Vec<usize>> = IndexMap::new();
        for (index, trigger) in self.iter().enumerate() {
            by_id.entry(trigger.trigger_id).or_default().push(index);
        }
        let mut warnings: Vec<ValidationWarning> = by_id
            .into_iter()
            .filter(|(_, indices)| indices.len() > 1)
            .map(|(trigger_id, indices)| ValidationWarning::DuplicateTriggerId {
                trigger_id,
                indices,
            })
            .collect();

        for (index, trigger) in self.iter().enumerate() {
            let trigger_id = trigger.trigger_id;
            if trigger.events.is_empty() {
                warnings.push(ValidationWarning::NoEvents { index, trigger_id });
            }
            for (event_index, event) in trigger.events.iter().enumerate() {
                match event {
                    TriggerEvent::Schedule(schedule) if schedule.schedule.is_none() => {
                        warnings.push(ValidationWarning::UnresolvedSchedule {
                            index,
                            trigger_id,
                            event_index,
                        });
                    }
                    TriggerEvent::Generic(generic) => {
                        warnings.push(ValidationWarning::UnknownEventType {
                            index,
                            trigger_id,
                            event_index,
                            event_type: generic.raw_type().to_string(),
                        });
                    }
                    _ => {}
                }
            }
        }
        warnings
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
