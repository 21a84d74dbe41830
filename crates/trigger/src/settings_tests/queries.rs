// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn ids(triggers: Vec<&Trigger>) -> Vec<i64> {
    triggers.iter().map(|t| t.trigger_id).collect()
}

#[test]
fn filters_overlap_for_mixed_triggers() {
    let settings = sample();
    assert_eq!(ids(settings.schedule_triggers()), vec![1, 3]);
    assert_eq!(ids(settings.dataset_triggers()), vec![2, 3]);
    assert!(settings.has_any_schedules());
    assert!(settings.has_any_dataset_triggers());
}

#[test]
fn filters_partition_by_predicate() {
    let settings = sample();
    let schedule = ids(settings.schedule_triggers());
    let dataset = ids(settings.dataset_triggers());
    for trigger in &settings {
        assert_eq!(
            schedule.contains(&trigger.trigger_id),
            trigger.has_schedule_event()
        );
        assert_eq!(
            dataset.contains(&trigger.trigger_id),
            trigger.has_dataset_event()
        );
    }
}

#[test]
fn empty_settings_have_nothing() {
    let settings = empty();
    assert!(!settings.has_any_schedules());
    assert!(!settings.has_any_dataset_triggers());
    assert!(settings.schedule_triggers().is_empty());
    assert!(settings.dataset_triggers().is_empty());
    assert_eq!(settings.stats(), TriggerStats::default());
}

#[test]
fn stats_count_each_query() {
    assert_eq!(
        sample().stats(),
        TriggerStats {
            total_triggers: 3,
            schedule_triggers: 2,
            dataset_triggers: 2,
        }
    );
}

#[test]
fn summary_lists_every_trigger() {
    assert_eq!(
        sample().human_readable_summary(),
        "Triggers (3):\n  \
         • 'Daily Run' | Events: Schedule: Every day at 09:00\n  \
         • 'On Sales Update' | Events: Dataset abc-123 updated (when data changes)\n  \
         • 'Both' | Events: Dataset xyz updated (on every update), Schedule: Every Saturday at 02:00"
    );
}

#[test]
fn summary_for_manual_only() {
    assert_eq!(
        empty().human_readable_summary(),
        "Triggers (0): none configured (manual execution only)"
    );
}
