use checklist_core::{
    carry_over, CarryOverOutcome, DayRecord, DayStore, FileDayStore, MemoryDayStore, StoreConfig,
    Task,
};
use chrono::NaiveDate;

#[test]
fn fills_free_slots_in_order_and_skips_entered_ones() {
    let store = MemoryDayStore::new();
    store
        .save(yesterday(), &record(&[("A", false), ("done", true), ("B", false)]))
        .unwrap();
    store
        .save(today(), &texts(&["", "X", "", "", ""]))
        .unwrap();

    let outcome = carry_over(&store, today()).unwrap();

    assert_eq!(
        outcome,
        CarryOverOutcome::Applied {
            filled: 2,
            appended: 0
        }
    );
    let after = store.load(today()).unwrap().unwrap();
    assert_eq!(
        after.tasks(),
        &[
            Task::carried("A"),
            Task::new("X"),
            Task::carried("B"),
            Task::blank(),
            Task::blank(),
        ]
    );
}

#[test]
fn appends_overflow_when_today_is_full() {
    let store = MemoryDayStore::new();
    store.save(yesterday(), &texts(&["Z"])).unwrap();
    store
        .save(today(), &texts(&["P", "Q", "R", "S", "T"]))
        .unwrap();

    let outcome = carry_over(&store, today()).unwrap();

    assert_eq!(
        outcome,
        CarryOverOutcome::Applied {
            filled: 0,
            appended: 1
        }
    );
    let after = store.load(today()).unwrap().unwrap();
    assert_eq!(after.len(), 6);
    assert_eq!(after.tasks()[5], Task::carried("Z"));
    let json = serde_json::to_value(&after.tasks()[5]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"text": "Z", "done": false, "carried": true})
    );
}

#[test]
fn fills_then_appends_preserving_order() {
    let store = MemoryDayStore::new();
    store
        .save(yesterday(), &texts(&["1", "2", "3", "4"]))
        .unwrap();
    store.save(today(), &texts(&["keep", ""])).unwrap();

    carry_over(&store, today()).unwrap();

    let after = store.load(today()).unwrap().unwrap();
    assert_eq!(
        after.tasks(),
        &[
            Task::new("keep"),
            Task::carried("1"),
            Task::carried("2"),
            Task::carried("3"),
            Task::carried("4"),
        ]
    );
}

#[test]
fn creates_today_from_template_when_absent() {
    let store = MemoryDayStore::with_default_task_count(3);
    store.save(yesterday(), &texts(&["carry me"])).unwrap();

    carry_over(&store, today()).unwrap();

    let after = store.load(today()).unwrap().unwrap();
    assert_eq!(
        after.tasks(),
        &[Task::carried("carry me"), Task::blank(), Task::blank()]
    );
}

#[test]
fn running_twice_is_idempotent() {
    let store = MemoryDayStore::new();
    store.save(yesterday(), &texts(&["A", "B"])).unwrap();

    carry_over(&store, today()).unwrap();
    let once = store.raw(today()).unwrap();

    let second = carry_over(&store, today()).unwrap();
    assert_eq!(second, CarryOverOutcome::AlreadyApplied);
    assert_eq!(store.raw(today()).unwrap(), once);
}

#[test]
fn no_previous_day_writes_nothing() {
    let store = MemoryDayStore::new();

    let outcome = carry_over(&store, today()).unwrap();

    assert_eq!(outcome, CarryOverOutcome::NoPreviousDay);
    assert!(store.dates().is_empty());
}

#[test]
fn nothing_to_carry_leaves_today_byte_for_byte() {
    let store = MemoryDayStore::new();
    let mut done = Task::new("finished");
    done.done = true;
    let mut blank_done = Task::blank();
    blank_done.done = true;
    store
        .save(yesterday(), &DayRecord::new(vec![done, blank_done, Task::new("   ")]))
        .unwrap();
    store.insert_raw(today(), r#"[{"text": "", "done": false, "carried": false}]"#);

    let outcome = carry_over(&store, today()).unwrap();

    assert_eq!(outcome, CarryOverOutcome::NothingToCarry);
    assert_eq!(
        store.raw(today()).unwrap(),
        br#"[{"text": "", "done": false, "carried": false}]"#.to_vec()
    );
}

#[test]
fn existing_carried_task_latches_the_day() {
    let store = MemoryDayStore::new();
    store.save(yesterday(), &texts(&["new work"])).unwrap();
    let existing = r#"[{"text": "earlier", "done": true, "carried": true}, {"text": "", "done": false, "carried": false}]"#;
    store.insert_raw(today(), existing);

    let outcome = carry_over(&store, today()).unwrap();

    assert_eq!(outcome, CarryOverOutcome::AlreadyApplied);
    assert_eq!(store.raw(today()).unwrap(), existing.as_bytes().to_vec());
}

#[test]
fn every_incomplete_text_survives_carry_over() {
    let store = MemoryDayStore::new();
    let previous = record(&[
        ("dup", false),
        ("dup", false),
        ("x", true),
        ("", false),
        ("y", false),
    ]);
    store.save(yesterday(), &previous).unwrap();
    store.save(today(), &texts(&["dup", "", "z"])).unwrap();

    carry_over(&store, today()).unwrap();

    let after = store.load(today()).unwrap().unwrap();
    let carried: Vec<&str> = after
        .tasks()
        .iter()
        .filter(|task| task.carried)
        .map(|task| task.text.as_str())
        .collect();
    assert_eq!(carried, vec!["dup", "dup", "y"]);
}

#[test]
fn works_across_month_boundary_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileDayStore::new(StoreConfig::new(dir.path())).unwrap();
    let march_first = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let leap_day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    store.save(leap_day, &texts(&["leap task"])).unwrap();

    let outcome = carry_over(&store, march_first).unwrap();

    assert_eq!(outcome.forwarded(), 1);
    assert!(dir.path().join("2024-03-01.json").exists());
    let after = store.load(march_first).unwrap().unwrap();
    assert_eq!(after.tasks()[0], Task::carried("leap task"));
}

fn record(entries: &[(&str, bool)]) -> DayRecord {
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

fn texts(values: &[&str]) -> DayRecord {
    DayRecord::new(values.iter().map(|text| Task::new(*text)).collect())
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 11).unwrap()
}

fn yesterday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}
