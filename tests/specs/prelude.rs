//! Test helpers for the end-to-end behavior tests.
//!
//! Payloads mirror what the platform's dataflow API returns for
//! `triggerSettings`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use dft_trigger::{parse_trigger_settings, TriggerSettings};
use serde_json::Value;

/// A dataflow with one daily schedule, one dataset trigger and one
/// trigger of a type the model does not know.
pub const SALES_ETL: &str = r#"{
  "triggers": [
    {
      "triggerId": 1,
      "title": "Daily Run",
      "triggerEvents": [
        {"type": "SCHEDULE", "scheduleId": "sch-1", "schedule": {"hour": "9", "minute": "0"}}
      ],
      "triggerConditions": []
    },
    {
      "triggerId": 2,
      "title": "Orders landed",
      "triggerEvents": [
        {"type": "DATASET_UPDATED", "datasetId": "abc-123", "triggerOnDataChanged": true}
      ],
      "triggerConditions": [
        {"type": "DATASET_ROW_COUNT", "parameters": {"datasetId": "abc-123", "operator": "GREATER_THAN", "value": 0}}
      ]
    },
    {
      "triggerId": 3,
      "title": "External",
      "triggerEvents": [
        {"type": "WEBHOOK", "url": "https://x", "secret": {"ref": "vault:hook"}}
      ],
      "triggerConditions": []
    }
  ],
  "zoneId": "America/New_York",
  "locale": "en_US"
}"#;

pub const MANUAL_ONLY: &str = r#"{"triggers": [], "zoneId": "UTC", "locale": "en_US"}"#;

pub fn parse(input: &str) -> TriggerSettings {
    parse_trigger_settings(input).unwrap()
}

pub fn json(input: &str) -> Value {
    serde_json::from_str(input).unwrap()
}

/// Compare JSON values with a readable diff on failure.
pub fn assert_json_eq(actual: &Value, expected: &Value) {
    similar_asserts::assert_eq!(
        serde_json::to_string_pretty(actual).unwrap(),
        serde_json::to_string_pretty(expected).unwrap()
    );
}
