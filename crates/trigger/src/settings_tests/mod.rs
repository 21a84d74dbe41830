// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;

mod collection;
mod parsing;
mod queries;
mod serialization;

// ---------------------------------------------------------------------------
// Shared test helpers
// ---------------------------------------------------------------------------

/// Three triggers: schedule only, dataset only, and both.
fn sample() -> TriggerSettings {
    TriggerSettings::from_value(&json!({
        "triggers": [
            {
                "triggerId": 1,
                "title": "Daily Run",
                "triggerEvents": [
                    {"type": "SCHEDULE", "schedule": {"hour": "9", "minute": "0", "dayOfWeek": "*"}}
                ],
                "triggerConditions": []
            },
            {
                "triggerId": 2,
                "title": "On Sales Update",
                "triggerEvents": [
                    {"type": "DATASET_UPDATED", "datasetId": "abc-123", "triggerOnDataChanged": true}
                ],
                "triggerConditions": [
                    {"type": "DATASET_ROW_COUNT", "parameters": {"operator": "GREATER_THAN", "threshold": 0}}
                ]
            },
            {
                "triggerId": 3,
                "title": "Both",
                "triggerEvents": [
                    {"type": "DATASET_UPDATED", "datasetId": "xyz"},
                    {"type": "SCHEDULE", "schedule": {"hour": "2", "minute": "0", "dayOfWeek": "SAT"}}
                ]
            }
        ],
        "zoneId": "America/New_York",
        "locale": "en_US"
    }))
    .unwrap()
}

fn empty() -> TriggerSettings {
    TriggerSettings::from_value(&json!({"triggers": [], "zoneId": "UTC", "locale": "en_US"}))
        .unwrap()
}
