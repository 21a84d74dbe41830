// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use dft_trigger::{
    DatasetUpdatedEvent, ScheduleEvent, ScheduleFrequency, ScheduleSpec, Trigger,
    TriggerCondition, TriggerEvent, TriggerSettings, Weekday,
};
use dft_schedule::CronFields;
use indexmap::IndexMap;
use proptest::prelude::*;
use serde_json::{json, Value};
use similar_asserts::assert_eq;

#[test]
fn built_settings_survive_write_back() {
    let mut parameters = IndexMap::new();
    parameters.insert("operator".to_string(), json!("GREATER_THAN"));
    parameters.insert("threshold".to_string(), json!(100));

    let settings = TriggerSettings::new(
        vec![
            Trigger::new(
                1,
                "Weekend batch",
                vec![ScheduleEvent::new(Some(
                    ScheduleSpec::weekly(vec![Weekday::Saturday, Weekday::Sunday], 2, 30)
                        .with_timezone("Europe/London"),
                ))
                .into()],
                vec![TriggerCondition::new("DATASET_ROW_COUNT", parameters)],
            ),
            Trigger::new(
                2,
                "Feed",
                vec![DatasetUpdatedEvent::new("feed-1", true).into()],
                Vec::new(),
            ),
        ],
        "Europe/London",
        "en_GB",
    );

    let written = settings.to_value();
    assert_eq!(
        written["triggers"][0]["triggerEvents"][0]["schedule"],
        json!({"hour": "2", "minute": "30", "dayOfWeek": "SAT,SUN", "timezone": "Europe/London"})
    );
    assert_eq!(TriggerSettings::from_value(&written).unwrap(), settings);
}

#[test]
fn advanced_schedule_is_written_back_unchanged() {
    let schedule = json!({
        "windows": [{"start": "08:00", "end": "18:00"}],
        "exclusions": ["2026-12-25"],
        "hour": "8"
    });
    let raw = json!({
        "triggers": [{
            "triggerId": 1,
            "title": "Business hours",
            "triggerEvents": [{"type": "SCHEDULE", "schedule": schedule}],
            "triggerConditions": []
        }],
        "zoneId": "UTC",
        "locale": "en_US"
    });
    let settings = TriggerSettings::from_value(&raw).unwrap();
    assert_eq!(settings.to_value(), raw);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn schedule() -> impl Strategy<Value = Option<ScheduleSpec>> {
    let days = proptest::sample::subsequence(Weekday::ALL.to_vec(), 1..7);
    prop_oneof![
        Just(None),
        (0u32..24, 0u32..60).prop_map(|(h, m)| Some(ScheduleSpec::daily(h, m))),
        (days, 0u32..24, 0u32..60).prop_map(|(d, h, m)| Some(ScheduleSpec::weekly(d, h, m))),
        (1u32..=31, 0u32..24, 0u32..60).prop_map(|(d, h, m)| Some(ScheduleSpec::monthly(d, h, m))),
        (
            proptest::sample::select(vec![
                ScheduleFrequency::Minutely,
                ScheduleFrequency::Hourly,
                ScheduleFrequency::Daily,
                ScheduleFrequency::Weekly,
                ScheduleFrequency::Monthly,
                ScheduleFrequency::CustomCron,
            ]),
            1u32..60,
        )
            .prop_map(|(f, n)| Some(ScheduleSpec::every(f, n))),
        (0u32..60, 0u32..24).prop_map(|(m, h)| {
            ScheduleSpec::from_cron_expression(&format!("0 {m} {h} ? * MON-FRI"))
        }),
        (0u32..60, 0u32..24, 1u32..=12).prop_map(|(m, h, month)| {
            CronFields::from_expression(&format!("0 {m} {h} 1 {month} ?"))
                .and_then(ScheduleSpec::from_cron_fields)
        }),
    ]
}

fn event() -> impl Strategy<Value = TriggerEvent> {
    prop_oneof![
        (schedule(), proptest::option::of("[a-z0-9-]{1,8}")).prop_map(|(schedule, id)| {
            TriggerEvent::Schedule(ScheduleEvent {
                schedule_id: id,
                schedule,
            })
        }),
        ("[a-z0-9-]{1,12}", any::<bool>())
            .prop_map(|(id, changed)| DatasetUpdatedEvent::new(id, changed).into()),
        ("[A-Z_]{3,10}", "[a-z]{1,6}").prop_filter_map("modeled type", |(tag, key)| {
            if tag == "SCHEDULE" || tag == "DATASET_UPDATED" {
                return None;
            }
            let raw = json!({"type": tag, key: "v"});
            TriggerEvent::from_value(&raw).ok()
        }),
    ]
}

fn condition() -> impl Strategy<Value = TriggerCondition> {
    (
        proptest::sample::select(vec!["DATASET_ROW_COUNT", "CUSTOM"]),
        0i64..1000,
    )
        .prop_map(|(tag, threshold)| {
            let mut parameters = IndexMap::new();
            parameters.insert("threshold".to_string(), Value::from(threshold));
            TriggerCondition::new(tag, parameters)
        })
}

fn settings() -> impl Strategy<Value = TriggerSettings> {
    let trigger = (
        0i64..50,
        "[A-Za-z ]{0,12}",
        proptest::collection::vec(event(), 0..4),
        proptest::collection::vec(condition(), 0..2),
    )
        .prop_map(|(id, title, events, conditions)| Trigger::new(id, title, events, conditions));
    (
        proptest::collection::vec(trigger, 0..5),
        proptest::sample::select(vec!["UTC", "America/New_York", "Asia/Tokyo"]),
    )
        .prop_map(|(triggers, zone)| TriggerSettings::new(triggers, zone, "en_US"))
}

proptest! {
    #[test]
    fn write_back_round_trips(settings in settings()) {
        let reparsed = TriggerSettings::from_value(&settings.to_value()).unwrap();
        prop_assert_eq!(&reparsed, &settings);
        prop_assert_eq!(reparsed.to_value(), settings.to_value());
    }

    #[test]
    fn export_is_idempotent(settings in settings()) {
        prop_assert_eq!(settings.export_value(), settings.export_value());
    }

    #[test]
    fn queries_partition_by_event_kind(settings in settings()) {
        let schedule = settings.schedule_triggers();
        let dataset = settings.dataset_triggers();
        for trigger in &settings {
            prop_assert_eq!(
                schedule.iter().any(|t| std::ptr::eq(*t, trigger)),
                trigger.has_schedule_event()
            );
            prop_assert_eq!(
                dataset.iter().any(|t| std::ptr::eq(*t, trigger)),
                trigger.has_dataset_event()
            );
        }
        let stats = settings.stats();
        prop_assert_eq!(stats.total_triggers, settings.len());
        prop_assert_eq!(stats.schedule_triggers, schedule.len());
        prop_assert_eq!(stats.dataset_triggers, dataset.len());
    }
}
