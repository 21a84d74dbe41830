// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use dft_trigger::{
    parse_trigger_settings, parse_trigger_settings_with_options, DuplicateIdPolicy, ParseError,
    ParseOptions,
};
use yare::parameterized;

#[test]
fn missing_dataset_id() {
    let err = parse_trigger_settings(
        r#"{"triggers": [{"triggerId": 1, "title": "t", "triggerEvents": [{"type": "DATASET_UPDATED"}]}]}"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ParseError::MissingRequiredField {
            field: "datasetId",
            ..
        }
    ));
    super::assert_err_contains(&err, &["datasetId", "triggers[0].triggerEvents[0]"]);
}

#[parameterized(
    event_without_type = {
        r#"{"triggers": [{"triggerId": 1, "title": "t", "triggerEvents": [{"scheduleId": "s"}]}]}"#,
        &["missing 'type' discriminant", "triggerEvents[0]"]
    },
    condition_without_type = {
        r#"{"triggers": [{"triggerId": 1, "title": "t", "triggerConditions": [{"parameters": {}}]}]}"#,
        &["missing 'type' discriminant", "triggerConditions[0]"]
    },
    trigger_without_id = {
        r#"{"triggers": [{"title": "t"}]}"#,
        &["missing required field 'triggerId'", "triggers[0]"]
    },
    trigger_without_title = {
        r#"{"triggers": [{"triggerId": 1}]}"#,
        &["missing required field 'title'"]
    },
    triggers_not_array = {
        r#"{"triggers": {"triggerId": 1}}"#,
        &["triggerSettings.triggers", "expected an array"]
    },
    zone_not_string = {
        r#"{"triggers": [], "zoneId": 5}"#,
        &["triggerSettings.zoneId", "expected a string"]
    },
    flag_not_bool = {
        r#"{"triggers": [{"triggerId": 1, "title": "t", "triggerEvents": [{"type": "DATASET_UPDATED", "datasetId": "d", "triggerOnDataChanged": "yes"}]}]}"#,
        &["triggerOnDataChanged", "expected a boolean"]
    },
    bad_json = {
        r#"{"triggers": ["#,
        &["JSON parse error"]
    },
)]
fn fatal_errors(input: &str, fragments: &[&str]) {
    crate::assert_parse_err(input, fragments);
}

#[test]
fn malformed_schedule_is_not_fatal() {
    let settings = super::parse(
        r#"{"triggers": [{"triggerId": 1, "title": "t", "triggerEvents": [
  {"type": "SCHEDULE", "schedule": "every morning"},
  {"type": "SCHEDULE", "schedule": {"hour": "nine", "minute": "0"}}
]}]}"#,
    );
    let events = settings[0].schedule_events();
    assert!(events[0].schedule.is_none());
    let second = events[1].schedule.as_ref().unwrap();
    assert_eq!(second.hour(), None);
    assert_eq!(second.minute(), Some(0));
}

#[test]
fn reject_policy_from_toml_config() {
    let options = ParseOptions::from_toml(r#"duplicate_ids = "reject""#).unwrap();
    assert_eq!(options.duplicate_ids, DuplicateIdPolicy::Reject);

    let err = parse_trigger_settings_with_options(
        r#"{"triggers": [{"triggerId": 8, "title": "a"}, {"triggerId": 8, "title": "b"}]}"#,
        &options,
    )
    .unwrap_err();
    super::assert_err_contains(&err, &["duplicate triggerId 8", "triggers[1]"]);
}
