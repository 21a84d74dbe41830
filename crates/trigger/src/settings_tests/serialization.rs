// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn minimal_form_shape() {
    let settings = TriggerSettings::from_value(&json!({
        "triggers": [{
            "triggerId": 1,
            "title": "Daily Run",
            "triggerEvents": [
                {"type": "SCHEDULE", "schedule": {"hour": "9", "minute": "0"}}
            ],
            "triggerConditions": []
        }],
        "zoneId": "UTC",
        "locale": "en_US"
    }))
    .unwrap();

    similar_asserts::assert_eq!(
        settings.to_value(),
        json!({
            "triggers": [{
                "triggerId": 1,
                "title": "Daily Run",
                "triggerEvents": [
                    {"type": "SCHEDULE", "schedule": {"hour": "9", "minute": "0"}}
                ],
                "triggerConditions": []
            }],
            "zoneId": "UTC",
            "locale": "en_US"
        })
    );
}

#[test]
fn round_trip_preserves_modeled_fields() {
    let settings = sample();
    let reparsed = TriggerSettings::from_value(&settings.to_value()).unwrap();
    assert_eq!(reparsed, settings);
}

#[test]
fn serialize_matches_minimal_form() {
    let settings = sample();
    assert_eq!(serde_json::to_value(&settings).unwrap(), settings.to_value());
}

#[test]
fn unmodeled_top_level_keys_are_retained() {
    let settings = TriggerSettings::from_value(&json!({
        "triggers": [],
        "zoneId": "UTC",
        "locale": "en_US",
        "paused": true,
        "owner": {"id": 9}
    }))
    .unwrap();

    assert_eq!(
        settings.to_value(),
        json!({"triggers": [], "zoneId": "UTC", "locale": "en_US"})
    );
    similar_asserts::assert_eq!(
        settings.to_value_with_unmodeled(),
        json!({
            "triggers": [],
            "zoneId": "UTC",
            "locale": "en_US",
            "paused": true,
            "owner": {"id": 9}
        })
    );
}

#[test]
fn export_for_empty_settings() {
    let exported = empty().export_value();
    assert_eq!(
        exported["stats"],
        json!({"totalTriggers": 0, "scheduleTriggers": 0, "datasetTriggers": 0})
    );
    assert_eq!(
        exported["summary"],
        "Triggers (0): none configured (manual execution only)"
    );
    assert_eq!(exported["triggers"], json!([]));
}

#[test]
fn export_shape() {
    let settings = sample();
    let exported = settings.export_value();
    assert_eq!(exported["zoneId"], "America/New_York");
    assert_eq!(exported["locale"], "en_US");
    assert_eq!(exported["summary"], settings.human_readable_summary());
    assert_eq!(
        exported["stats"],
        json!({"totalTriggers": 3, "scheduleTriggers": 2, "datasetTriggers": 2})
    );
    assert_eq!(exported["triggers"][1]["humanReadable"], settings[1].human_readable());
    assert_eq!(
        exported["triggers"][0]["triggerEvents"][0]["schedule"]["frequency"],
        "DAILY"
    );
}

#[test]
fn export_is_idempotent() {
    let settings = sample();
    assert_eq!(settings.export_value(), settings.export_value());
}

#[test]
fn export_override_hook() {
    let exported = sample().export_value_with(|mut value| {
        if let Value::Object(ref mut map) = value {
            map.insert("dataflow".into(), json!("Sales ETL"));
            map.remove("summary");
        }
        value
    });
    assert_eq!(exported["dataflow"], "Sales ETL");
    assert!(exported.get("summary").is_none());
    assert!(exported.get("stats").is_some());
}

#[test]
fn export_is_not_a_write_back_form() {
    // The comprehensive form still parses, but only its modeled fields count.
    let settings = sample();
    let from_export = TriggerSettings::from_value(&settings.export_value()).unwrap();
    assert_eq!(from_export.len(), settings.len());
    assert!(from_export.raw().contains_key("summary"));
}
