// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn defaults_for_zone_and_locale() {
    let settings = TriggerSettings::from_value(&json!({"triggers": []})).unwrap();
    assert_eq!(settings.zone_id, "UTC");
    assert_eq!(settings.locale, "en_US");
}

#[test]
fn options_supply_defaults() {
    let options = ParseOptions {
        default_zone_id: "Europe/Paris".into(),
        default_locale: "fr_FR".into(),
        ..ParseOptions::default()
    };
    let settings =
        TriggerSettings::from_value_with_options(&json!({"triggers": []}), &options, None).unwrap();
    assert_eq!(settings.zone_id, "Europe/Paris");
    assert_eq!(settings.locale, "fr_FR");
}

#[test]
fn missing_triggers_reads_as_empty() {
    let settings = TriggerSettings::from_value(&json!({"zoneId": "UTC"})).unwrap();
    assert!(settings.is_empty());
}

#[test]
fn absent_settings_differ_from_empty_settings() {
    assert_eq!(TriggerSettings::from_optional_value(None).unwrap(), None);
    assert_eq!(
        TriggerSettings::from_optional_value(Some(&Value::Null)).unwrap(),
        None
    );
    let empty = TriggerSettings::from_optional_value(Some(&json!({"triggers": []})))
        .unwrap()
        .unwrap();
    assert!(empty.is_empty());
}

#[test]
fn non_object_payload_is_invalid() {
    let err = TriggerSettings::from_value(&json!([])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid format for triggerSettings: expected an object, found an array"
    );
}

#[test]
fn first_fatal_error_aborts_whole_parse() {
    let err = TriggerSettings::from_value(&json!({
        "triggers": [
            {"triggerId": 1, "title": "ok", "triggerEvents": [{"type": "SCHEDULE"}]},
            {"triggerId": 2, "title": "bad", "triggerEvents": [{"type": "DATASET_UPDATED"}]}
        ]
    }))
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "missing required field 'datasetId' in triggerSettings.triggers[1].triggerEvents[0]"
    );
}

#[test]
fn parent_prefixes_error_location() {
    let parent = ParentRef::new("dataflow", "42").named("Sales ETL");
    let err = TriggerSettings::from_value_with_parent(
        &json!({"triggers": [{"title": "no id"}]}),
        parent,
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "missing required field 'triggerId' in dataflow 'Sales ETL' (42): triggerSettings.triggers[0]"
    );
}

#[test]
fn parent_is_kept_but_not_compared() {
    let raw = json!({"triggers": []});
    let with_parent =
        TriggerSettings::from_value_with_parent(&raw, ParentRef::new("dataflow", "7")).unwrap();
    assert_eq!(with_parent.parent().map(ToString::to_string), Some("dataflow (7)".into()));
    assert_eq!(with_parent, TriggerSettings::from_value(&raw).unwrap());
}

#[test]
fn duplicates_are_kept_under_warn_policy() {
    let settings = TriggerSettings::from_value(&json!({"triggers": [
        {"triggerId": 1, "title": "a"},
        {"triggerId": 1, "title": "b"}
    ]}))
    .unwrap();
    assert_eq!(settings.len(), 2);
    assert_eq!(settings.trigger_by_id(1).map(|t| t.title.as_str()), Some("a"));
}

#[test]
fn duplicates_fail_under_reject_policy() {
    let options = ParseOptions::default().with_duplicate_ids(DuplicateIdPolicy::Reject);
    let err = TriggerSettings::from_value_with_options(
        &json!({"triggers": [
            {"triggerId": 1, "title": "a"},
            {"triggerId": 2, "title": "b"},
            {"triggerId": 1, "title": "c"}
        ]}),
        &options,
        None,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ParseError::DuplicateTriggerId { trigger_id: 1, ref location } if location == "triggerSettings.triggers[2]"
    ));
}

#[test]
fn parse_from_text() {
    let settings = parse_trigger_settings(r#"{"triggers": [], "locale": "de_DE"}"#).unwrap();
    assert_eq!(settings.locale, "de_DE");
    assert!(matches!(
        parse_trigger_settings("{not json").unwrap_err(),
        ParseError::Json(_)
    ));
}

#[test]
fn deserialize_through_serde() {
    let settings: TriggerSettings =
        serde_json::from_str(r#"{"triggers": [{"triggerId": 4, "title": "t"}]}"#).unwrap();
    assert_eq!(settings.len(), 1);

    let err = serde_json::from_str::<TriggerSettings>(r#"{"triggers": [{"title": "t"}]}"#)
        .unwrap_err();
    assert!(err.to_string().contains("missing required field 'triggerId'"));
}
