// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn length_and_emptiness() {
    assert_eq!(sample().len(), 3);
    assert!(!sample().is_empty());
    assert_eq!(empty().len(), 0);
    assert!(empty().is_empty());
}

#[test]
fn iteration_is_ordered_and_restartable() {
    let settings = sample();
    let first: Vec<i64> = settings.iter().map(|t| t.trigger_id).collect();
    let second: Vec<i64> = (&settings).into_iter().map(|t| t.trigger_id).collect();
    assert_eq!(first, vec![1, 2, 3]);
    assert_eq!(first, second);

    let mut count = 0;
    for _ in &settings {
        count += 1;
    }
    assert_eq!(count, 3);
}

#[test]
fn owned_iteration() {
    let titles: Vec<String> = sample().into_iter().map(|t| t.title).collect();
    assert_eq!(titles, vec!["Daily Run", "On Sales Update", "Both"]);
}

#[test]
fn index_is_positional() {
    let settings = sample();
    assert_eq!(settings[0].trigger_id, 1);
    assert_eq!(settings[2].title, "Both");
}

#[test]
#[should_panic]
fn index_out_of_range_panics() {
    let settings = empty();
    let _ = &settings[0];
}

#[test]
fn checked_access() {
    let settings = sample();
    assert_eq!(settings.get(1).map(|t| t.trigger_id), Some(2));
    assert!(settings.get(3).is_none());
    assert_eq!(settings.trigger_at(0).map(|t| t.trigger_id), Ok(1));
    let err = settings.trigger_at(5).unwrap_err();
    assert_eq!(err, IndexOutOfRange { index: 5, len: 3 });
    assert_eq!(err.to_string(), "trigger index 5 out of range for 3 triggers");
}

#[test]
fn lookup_by_id() {
    let settings = sample();
    assert_eq!(
        settings.trigger_by_id(2).map(|t| t.title.as_str()),
        Some("On Sales Update")
    );
    assert!(settings.trigger_by_id(999).is_none());
}

#[test]
fn built_settings_support_the_same_operations() {
    let settings = TriggerSettings::new(sample().triggers, "UTC", "en_US");
    assert_eq!(settings.len(), 3);
    assert!(settings.raw().is_empty());
    assert!(settings.parent().is_none());
}
