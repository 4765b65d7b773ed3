use serde_json::json;
use tarea::clock::FixedClock;
use tarea::models::{Priority, Task, DEFAULT_START_DATE};
use tarea::normalize::normalize_task;

fn clock() -> FixedClock {
    FixedClock::at("2026-03-15")
}

#[test]
fn empty_record_gets_all_defaults() {
    let task = normalize_task(&json!({}), &clock());

    assert_eq!(task.text, "");
    assert!(!task.completed);
    assert_eq!(task.category, "General");
    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(task.start_date, DEFAULT_START_DATE);
    assert_eq!(task.due_date, "");
    assert!(task.tags.is_empty());
    assert!(task.id > 0);
    assert!(!task.created_at.is_empty());
}

#[test]
fn normalization_is_total_on_garbage_shapes() {
    // None of these should panic, whatever the shape.
    for record in [
        json!(null),
        json!(42),
        json!("not even an object"),
        json!([1, 2, 3]),
        json!({"id": "abc", "text": 5, "completed": "yes", "tags": "not-a-list"}),
        json!({"priority": "urgent", "dueDate": {"nested": true}}),
    ] {
        let task = normalize_task(&record, &clock());
        assert!(task.id > 0);
        assert_eq!(task.category, "General");
    }
}

#[test]
fn normalization_is_idempotent() {
    let record = json!({
        "id": 7,
        "text": "Water the plants",
        "completed": true,
        "createdAt": "2026-01-02T10:00:00+00:00",
        "startDate": "2026-01-03",
        "category": "Home",
        "priority": "baja",
        "dueDate": "2026-02-01",
        "tags": ["garden", "weekly"]
    });

    let once = normalize_task(&record, &clock());
    let twice = normalize_task(&serde_json::to_value(&once).unwrap(), &clock());
    assert_eq!(once, twice);
}

#[test]
fn invalid_priority_defaults_to_medium() {
    for bad in ["urgent", "HIGH", "Alta", "", "1"] {
        let task = normalize_task(&json!({ "priority": bad }), &clock());
        assert_eq!(task.priority, Priority::Medium, "priority token {:?}", bad);
    }
    let task = normalize_task(&json!({ "priority": "alta" }), &clock());
    assert_eq!(task.priority, Priority::High);
}

#[test]
fn completed_uses_truthiness() {
    assert!(normalize_task(&json!({"completed": true}), &clock()).completed);
    assert!(normalize_task(&json!({"completed": 1}), &clock()).completed);
    assert!(normalize_task(&json!({"completed": "yes"}), &clock()).completed);
    assert!(!normalize_task(&json!({"completed": false}), &clock()).completed);
    assert!(!normalize_task(&json!({"completed": 0}), &clock()).completed);
    assert!(!normalize_task(&json!({"completed": ""}), &clock()).completed);
    assert!(!normalize_task(&json!({"completed": null}), &clock()).completed);
}

#[test]
fn tags_keep_only_strings() {
    let task = normalize_task(
        &json!({ "tags": ["home", 3, null, "garden", {"x": 1}] }),
        &clock(),
    );
    assert_eq!(task.tags, vec!["home", "garden"]);
}

#[test]
fn numeric_string_id_is_accepted() {
    let task = normalize_task(&json!({ "id": "1234" }), &clock());
    assert_eq!(task.id, 1234);
}

#[test]
fn non_positive_id_falls_back_to_timestamp() {
    let clock = clock();
    for bad in [json!(0), json!(-5), json!("nope"), json!(null)] {
        let task = normalize_task(&json!({ "id": bad }), &clock);
        assert_eq!(task.id, clock.0.timestamp_millis() as u64);
    }
}

#[test]
fn empty_category_falls_back_to_general() {
    for bad in [json!(""), json!("   "), json!(7), json!(null)] {
        let task = normalize_task(&json!({ "category": bad }), &clock());
        assert_eq!(task.category, "General");
    }
}

#[test]
fn empty_due_date_is_kept_as_no_due_date() {
    let task = normalize_task(&json!({ "dueDate": "" }), &clock());
    assert_eq!(task.due_date, "");
}

#[test]
fn round_trip_preserves_normalized_tasks() {
    let clock = clock();
    let tasks: Vec<Task> = [
        json!({"id": 1, "text": "a", "createdAt": "t1", "startDate": "2026-01-01",
               "category": "Work", "priority": "alta", "dueDate": "2026-04-01",
               "tags": ["x"]}),
        json!({"id": 2, "text": "b", "completed": true, "createdAt": "t2",
               "startDate": "2026-01-02", "category": "Home", "priority": "baja",
               "dueDate": "", "tags": []}),
    ]
    .iter()
    .map(|r| normalize_task(r, &clock))
    .collect();

    let serialized = serde_json::to_string(&tasks).unwrap();
    let records: Vec<serde_json::Value> = serde_json::from_str(&serialized).unwrap();
    let reloaded: Vec<Task> = records.iter().map(|r| normalize_task(r, &clock)).collect();

    assert_eq!(tasks, reloaded);
}

#[test]
fn wire_format_uses_original_field_names_and_tokens() {
    let task = normalize_task(
        &json!({"id": 9, "text": "t", "priority": "alta", "startDate": "2026-01-01"}),
        &clock(),
    );
    let value = serde_json::to_value(&task).unwrap();

    assert_eq!(value["priority"], "alta");
    assert!(value.get("createdAt").is_some());
    assert!(value.get("startDate").is_some());
    assert!(value.get("dueDate").is_some());
}
