use crate::prelude::*;
use serde_json::Value;

#[test]
fn export_adds_summary_and_stats() {
    let exported = parse(SALES_ETL).export_value();
    assert_json_eq(
        &exported["stats"],
        &json(r#"{"totalTriggers": 3, "scheduleTriggers": 1, "datasetTriggers": 1}"#),
    );
    assert_eq!(
        exported["summary"],
        "Triggers (3):\n  \
         • 'Daily Run' | Events: Schedule: Every day at 09:00\n  \
         • 'Orders landed' | Events: Dataset abc-123 updated (when data changes)\n  \
         • 'External' | Events: Event: WEBHOOK"
    );
}

#[test]
fn export_expands_schedules() {
    let exported = parse(SALES_ETL).export_value();
    assert_json_eq(
        &exported["triggers"][0]["triggerEvents"][0],
        &json(
            r#"{
  "type": "SCHEDULE",
  "scheduleId": "sch-1",
  "schedule": {
    "kind": "SIMPLE",
    "frequency": "DAILY",
    "hour": 9,
    "minute": 0,
    "dayOfWeek": [],
    "dayOfMonth": null,
    "interval": null,
    "timezone": null,
    "humanReadable": "Every day at 09:00"
  },
  "humanReadable": "Schedule: Every day at 09:00"
}"#,
        ),
    );
}

#[test]
fn export_describes_conditions() {
    let exported = parse(SALES_ETL).export_value();
    assert_eq!(
        exported["triggers"][1]["triggerConditions"][0]["humanReadable"],
        "Condition: DATASET_ROW_COUNT"
    );
}

#[test]
fn export_is_stable() {
    let settings = parse(SALES_ETL);
    assert_json_eq(&settings.export_value(), &settings.export_value());
}

#[test]
fn export_hook_can_extend_output() {
    let exported = parse(MANUAL_ONLY).export_value_with(|mut value| {
        if let Value::Object(ref mut map) = value {
            map.insert("dataflowName".into(), Value::String("Sales ETL".into()));
        }
        value
    });
    assert_eq!(exported["dataflowName"], "Sales ETL");
    assert_eq!(exported["stats"]["totalTriggers"], 0);
}
