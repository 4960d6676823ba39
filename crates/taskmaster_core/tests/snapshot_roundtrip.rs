use chrono::NaiveDate;
use taskmaster_core::{
    snapshot, InMemoryTaskRepository, RepoError, SnapshotError, Task, TaskDraft, TaskService,
};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn task_with_fixed_id(id: u128, title: &str) -> Task {
    Task::with_id(
        Uuid::from_u128(id),
        TaskDraft::new(title, date(2024, 1, 20)),
        date(2024, 1, 15),
    )
    .unwrap()
}

fn seeded_service() -> TaskService<InMemoryTaskRepository> {
    let repo = InMemoryTaskRepository::with_tasks(vec![
        task_with_fixed_id(1, "keep calm"),
        task_with_fixed_id(2, "carry on"),
    ])
    .unwrap();
    TaskService::new(repo)
}

#[test]
fn export_then_import_reproduces_the_collection() {
    let service = seeded_service();
    let tasks = service.list_tasks();

    let payload = service.export_snapshot().unwrap();
    let imported = snapshot::import(&payload).unwrap();

    assert_eq!(imported, tasks);
}

#[test]
fn import_replaces_collection_on_success() {
    let mut service = seeded_service();

    let replacement = snapshot::export(&[task_with_fixed_id(9, "imported")]).unwrap();
    let count = service.import_snapshot(&replacement).unwrap();

    assert_eq!(count, 1);
    let tasks = service.list_tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "imported");
}

#[test]
fn malformed_payload_is_rejected_and_state_preserved() {
    let mut service = seeded_service();
    let before = service.list_tasks();

    let err = service.import_snapshot("{ not json").unwrap_err();
    assert!(matches!(err, SnapshotError::Parse(_)));
    assert_eq!(service.list_tasks(), before);

    // Valid JSON of the wrong shape is still a parse failure.
    let err = service.import_snapshot("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, SnapshotError::Parse(_)));
    assert_eq!(service.list_tasks(), before);
}

#[test]
fn blank_title_in_payload_is_rejected_and_state_preserved() {
    let mut service = seeded_service();
    let before = service.list_tasks();

    let mut bad = task_with_fixed_id(9, "placeholder");
    bad.title = "   ".to_string();
    let payload = snapshot::export(&[bad]).unwrap();

    let err = service.import_snapshot(&payload).unwrap_err();
    assert!(matches!(
        err,
        SnapshotError::Invalid(RepoError::Validation(_))
    ));
    assert_eq!(service.list_tasks(), before);
}

#[test]
fn duplicate_id_in_payload_is_rejected_and_state_preserved() {
    let mut service = seeded_service();
    let before = service.list_tasks();

    let payload = snapshot::export(&[
        task_with_fixed_id(9, "first"),
        task_with_fixed_id(9, "second"),
    ])
    .unwrap();

    let err = service.import_snapshot(&payload).unwrap_err();
    assert!(matches!(
        err,
        SnapshotError::Invalid(RepoError::DuplicateId(_))
    ));
    assert_eq!(service.list_tasks(), before);
}

#[test]
fn snapshot_wire_shape_nests_tasks_under_a_tasks_key() {
    let payload = snapshot::export(&[task_with_fixed_id(1, "wire check")]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&payload).unwrap();

    let tasks = value["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "wire check");
    assert_eq!(tasks[0]["dueDate"], "2024-01-20");
}
