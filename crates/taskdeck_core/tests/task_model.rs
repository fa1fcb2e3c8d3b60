use chrono::{TimeZone, Utc};
use taskdeck_core::Task;
use uuid::Uuid;

#[test]
fn task_new_sets_defaults() {
    let task = Task::new("buy milk", "two liters", "2024-01-01");

    assert!(!task.id.is_nil());
    assert_eq!(task.title, "buy milk");
    assert_eq!(task.description, "two liters");
    assert_eq!(task.target_date, "2024-01-01");
    assert!(!task.completed);
    assert!(task.is_active());
}

#[test]
fn toggle_twice_restores_original_state() {
    let mut task = Task::new("water plants", "", "");

    task.toggle();
    assert!(task.completed);
    assert!(!task.is_active());

    task.toggle();
    assert!(!task.completed);
    assert!(task.is_active());
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let created_at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
    let mut task = Task::with_id(task_id, created_at, "Buy milk", "semi-skimmed", "2024-01-20");
    task.completed = true;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], task_id.to_string());
    assert_eq!(json["title"], "Buy milk");
    assert_eq!(json["description"], "semi-skimmed");
    assert_eq!(json["targetDate"], "2024-01-20");
    assert_eq!(json["completed"], true);
    assert_eq!(json["createdAt"], "2024-01-15T09:30:00Z");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn task_decodes_from_persisted_wire_shape() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "Call the dentist",
        "description": "",
        "targetDate": "",
        "completed": false,
        "createdAt": "2023-11-05T18:45:12.250Z"
    });

    let task: Task = serde_json::from_value(value).unwrap();
    assert_eq!(task.title, "Call the dentist");
    assert_eq!(task.target_date, "");
    assert!(!task.completed);
    assert_eq!(
        task.created_at,
        Utc.with_ymd_and_hms(2023, 11, 5, 18, 45, 12).unwrap()
            + chrono::Duration::milliseconds(250)
    );
}

#[test]
fn malformed_wire_shape_is_rejected() {
    let value = serde_json::json!({
        "id": "not-a-uuid",
        "title": "broken",
        "description": "",
        "targetDate": "",
        "completed": false,
        "createdAt": "2023-11-05T18:45:12Z"
    });

    assert!(serde_json::from_value::<Task>(value).is_err());
}
