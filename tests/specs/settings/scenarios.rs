use crate::prelude::*;
use dft_trigger::{ParseError, TriggerEventType, TriggerSettings};

#[test]
fn daily_schedule_is_a_schedule_trigger() {
    let settings = parse(SALES_ETL);
    assert_eq!(settings.len(), 3);
    assert_eq!(settings.schedule_triggers().len(), 1);
    let description = settings[0].human_readable();
    assert!(description.contains("Daily Run"));
    assert!(description.contains("Schedule:"));
}

#[test]
fn manual_only_settings_are_empty_not_absent() {
    let settings = parse(MANUAL_ONLY);
    assert!(!settings.has_any_schedules());
    assert!(!settings.has_any_dataset_triggers());
    assert_eq!(settings.export_value()["stats"]["totalTriggers"], 0);
    assert!(settings.human_readable_summary().contains("manual execution only"));

    assert!(TriggerSettings::from_optional_value(None).unwrap().is_none());
}

#[test]
fn dataset_trigger_describes_its_dataset() {
    let settings = parse(SALES_ETL);
    let event = &settings[1].events[0];
    assert_eq!(event.event_type(), TriggerEventType::DatasetUpdated);
    assert_eq!(
        event.human_readable(),
        "Dataset abc-123 updated (when data changes)"
    );
}

#[test]
fn dataset_event_without_id_fails_the_whole_parse() {
    let err = dft_trigger::parse_trigger_settings(
        r#"{"triggers": [{"triggerId": 1, "title": "t", "triggerEvents": [{"type": "DATASET_UPDATED"}]}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ParseError::MissingRequiredField { .. }));
}

#[test]
fn unknown_event_type_is_preserved() {
    let settings = parse(SALES_ETL);
    assert_json_eq(
        &settings.to_value()["triggers"][2]["triggerEvents"][0],
        &json(r#"{"type": "WEBHOOK", "url": "https://x", "secret": {"ref": "vault:hook"}}"#),
    );
    assert_eq!(settings[2].human_readable(), "'External' | Events: Event: WEBHOOK");
}

#[test]
fn missing_trigger_id_lookup_is_none() {
    let settings = parse(SALES_ETL);
    assert!(settings.trigger_by_id(999).is_none());
    assert_eq!(settings.trigger_by_id(2).map(|t| t.title.as_str()), Some("Orders landed"));
}

#[test]
fn out_of_range_access_is_reported() {
    let settings = parse(SALES_ETL);
    let err = settings.trigger_at(3).unwrap_err();
    assert_eq!(err.to_string(), "trigger index 3 out of range for 3 triggers");
}

#[test]
fn validation_flags_unmodeled_events() {
    let warnings = parse(SALES_ETL).validate();
    let messages: Vec<String> = warnings.iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        vec!["triggers[2].triggerEvents[0] (triggerId 3) has unmodeled type 'WEBHOOK'"]
    );
}
