// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use dft_trigger::{EventVariant, TriggerEvent, TriggerEventType};
use serde_json::json;

#[test]
fn daily_schedule_trigger() {
    let settings = super::parse(
        r#"{
  "triggers": [{
    "triggerId": 1,
    "title": "Daily Run",
    "triggerEvents": [
      {"type": "SCHEDULE", "schedule": {"hour": "9", "minute": "0", "dayOfWeek": "*"}}
    ],
    "triggerConditions": []
  }],
  "zoneId": "UTC",
  "locale": "en_US"
}"#,
    );

    assert_eq!(settings.len(), 1);
    assert_eq!(settings.schedule_triggers().len(), 1);
    let description = settings[0].human_readable();
    assert!(description.contains("Daily Run"), "{description}");
    assert!(description.contains("Schedule:"), "{description}");
    assert_eq!(
        description,
        "'Daily Run' | Events: Schedule: Every day at 09:00"
    );
}

#[test]
fn no_triggers_means_manual_execution() {
    let settings = super::parse(r#"{"triggers": [], "zoneId": "UTC", "locale": "en_US"}"#);

    assert!(!settings.has_any_schedules());
    assert!(!settings.has_any_dataset_triggers());
    assert_eq!(
        settings.export_value()["stats"],
        json!({"totalTriggers": 0, "scheduleTriggers": 0, "datasetTriggers": 0})
    );
    assert!(settings
        .human_readable_summary()
        .contains("manual execution only"));
}

#[test]
fn dataset_trigger_on_change() {
    let settings = super::parse(
        r#"{"triggers": [{
  "triggerId": 2,
  "title": "Sales refresh",
  "triggerEvents": [
    {"type": "DATASET_UPDATED", "datasetId": "abc-123", "triggerOnDataChanged": true}
  ]
}]}"#,
    );

    let event = &settings[0].events[0];
    assert_eq!(event.event_type(), TriggerEventType::DatasetUpdated);
    let description = event.human_readable();
    assert!(description.contains("abc-123"), "{description}");
    assert!(description.contains("when data changes"), "{description}");
}

#[test]
fn unknown_event_round_trips_exactly() {
    let settings = super::parse(
        r#"{"triggers": [{
  "triggerId": 3,
  "title": "Hook",
  "triggerEvents": [{"type": "WEBHOOK", "url": "https://x"}]
}]}"#,
    );

    let event = &settings[0].events[0];
    let TriggerEvent::Generic(generic) = event else {
        panic!("expected generic event, got {event:?}");
    };
    assert_eq!(generic.raw_type(), "WEBHOOK");
    assert_eq!(generic.to_value(), json!({"type": "WEBHOOK", "url": "https://x"}));
    assert_eq!(
        settings.to_value()["triggers"][0]["triggerEvents"][0],
        json!({"type": "WEBHOOK", "url": "https://x"})
    );
}

#[test]
fn lookup_miss_is_none() {
    let settings = super::parse(r#"{"triggers": [{"triggerId": 1, "title": "only"}]}"#);
    assert!(settings.trigger_by_id(999).is_none());
    assert!(settings.trigger_by_id(1).is_some());
}

#[test]
fn trigger_with_both_event_kinds_appears_in_both_queries() {
    let settings = super::parse(
        r#"{"triggers": [{
  "triggerId": 10,
  "title": "Belt and braces",
  "triggerEvents": [
    {"type": "SCHEDULE", "schedule": {"cronExpression": "0 0 6 ? * MON-FRI"}},
    {"type": "DATASET_UPDATED", "datasetId": "d"}
  ]
}]}"#,
    );

    assert_eq!(settings.schedule_triggers().len(), 1);
    assert_eq!(settings.dataset_triggers().len(), 1);
    assert_eq!(
        settings[0].human_readable(),
        "'Belt and braces' | Events: Schedule: Custom schedule: 0 0 6 ? * MON-FRI, \
         Dataset d updated (on every update)"
    );
}
