use crate::prelude::*;
use dft_schedule::{determine_schedule_kind, ScheduleKind, ScheduleSpec};
use serde_json::Value;

fn kind(input: &str) -> ScheduleKind {
    match json(input) {
        Value::Object(map) => determine_schedule_kind(&map),
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn classification_priority() {
    assert_eq!(
        kind(r#"{"second": "0", "minute": "0", "hour": "9", "dayOfMonth": "?", "month": "*", "dayOfWeek": "MON-FRI"}"#),
        ScheduleKind::Cron
    );
    assert_eq!(kind(r#"{"cronExpression": "0 0/15 * * * ?"}"#), ScheduleKind::Cron);
    assert_eq!(kind(r#"{"hour": "9", "minute": "0", "dayOfWeek": "MON,WED"}"#), ScheduleKind::Simple);
    assert_eq!(
        kind(r#"{"windows": [{"start": "09:00", "end": "17:00"}], "exclusions": ["2026-01-01"]}"#),
        ScheduleKind::Advanced
    );
}

#[test]
fn classification_is_deterministic() {
    let input = r#"{"hour": "6", "minute": "30", "dayOfWeek": "1,7"}"#;
    assert_eq!(kind(input), kind(input));
}

#[test]
fn descriptions() {
    let described = |input: &str| ScheduleSpec::parse(&json(input)).map(|s| s.human_readable());
    assert_eq!(
        described(r#"{"hour": "9", "minute": "0"}"#).as_deref(),
        Some("Every day at 09:00")
    );
    assert_eq!(
        described(r#"{"hour": "2", "minute": "0", "dayOfWeek": "SAT"}"#).as_deref(),
        Some("Every Saturday at 02:00")
    );
    assert_eq!(
        described(r#"{"cronExpression": "0 0/15 * * * ?"}"#).as_deref(),
        Some("Custom schedule: 0 0/15 * * * ?")
    );
    assert_eq!(described("{}"), None);
    assert_eq!(described("null"), None);
}
