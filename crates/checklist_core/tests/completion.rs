use checklist_core::{
    completion, completion_bucket, completion_fraction, Completion, DayRecord, Task, NO_TASKS,
};

#[test]
fn counts_only_entered_tasks() {
    let record = tasks(&[("a", true), ("b", false), ("", true), ("  ", true), ("c", true)]);

    assert_eq!(completion(&record), Completion::Progress { done: 2, total: 3 });
    assert_eq!(completion_fraction(&record), (2, 3));
}

#[test]
fn all_blank_tasks_yield_sentinel_in_both_forms() {
    let record = tasks(&[("", true), ("", false), ("\t", true)]);

    assert_eq!(completion(&record), Completion::NoTasks);
    assert_eq!(completion_fraction(&record), (-1, -1));
    assert_eq!(completion_bucket(&record, 5), NO_TASKS);
    assert_eq!(completion_fraction(&DayRecord::default()), (-1, -1));
}

#[test]
fn zero_done_is_distinct_from_no_tasks() {
    let record = tasks(&[("a", false), ("b", false)]);

    assert_eq!(completion_fraction(&record), (0, 2));
    assert_eq!(completion_bucket(&record, 5), 0);
    assert_eq!(completion(&record).ratio(), Some(0.0));
}

#[test]
fn bucket_clamps_done_count() {
    let record = tasks(&[("a", true), ("b", true), ("c", true), ("d", true)]);

    assert_eq!(completion_bucket(&record, 5), 4);
    assert_eq!(completion_bucket(&record, 3), 3);
    assert_eq!(completion_bucket(&record, 0), 0);
}

#[test]
fn carried_flag_does_not_affect_counts() {
    let mut carried_done = Task::carried("x");
    carried_done.done = true;
    let record = DayRecord::new(vec![carried_done, Task::carried("y")]);

    assert_eq!(completion_fraction(&record), (1, 2));
}

#[test]
fn ratio_and_completeness() {
    let full = tasks(&[("a", true), ("b", true)]);
    let half = tasks(&[("a", true), ("b", false)]);

    assert!(completion(&full).is_complete());
    assert_eq!(completion(&half).ratio(), Some(0.5));
    assert!(!completion(&half).is_complete());
    assert!(!Completion::NoTasks.is_complete());
    assert_eq!(Completion::NoTasks.ratio(), None);
}

#[test]
fn aggregation_does_not_mutate_record() {
    let record = tasks(&[("a", true), ("", false)]);
    let before = record.clone();

    let _ = completion_fraction(&record);
    let _ = completion_bucket(&record, 5);

    assert_eq!(record, before);
}

fn tasks(entries: &[(&str, bool)]) -> DayRecord {
    DayRecord::new(
        entries
            .iter()
            .map(|(text, done)| {
                let mut task = Task::new(*text);
                task.done = *done;
                task
            })
            .collect(),
    )
}
