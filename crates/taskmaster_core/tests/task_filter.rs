use chrono::NaiveDate;
use taskmaster_core::{filter_tasks, Priority, StatusFilter, Task, TaskDraft, TaskQuery};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn task(id: u128, title: &str, description: &str, priority: Priority, completed: bool) -> Task {
    let mut draft = TaskDraft::new(title, date(2024, 1, 20));
    draft.description = description.to_string();
    draft.priority = priority;
    let mut task = Task::with_id(Uuid::from_u128(id), draft, date(2024, 1, 15)).unwrap();
    task.completed = completed;
    task
}

fn fixture() -> Vec<Task> {
    vec![
        task(1, "Write launch email", "draft for marketing", Priority::High, false),
        task(2, "Renew passport", "bring the old photos", Priority::Medium, true),
        task(3, "Fix login bug", "EMAIL validation breaks", Priority::High, true),
        task(4, "Water the plants", "", Priority::Low, false),
    ]
}

#[test]
fn default_query_returns_full_collection_in_order() {
    let tasks = fixture();
    let filtered = filter_tasks(&tasks, &TaskQuery::default());
    assert_eq!(filtered, tasks);
}

#[test]
fn blank_search_term_matches_all() {
    let tasks = fixture();
    assert_eq!(filter_tasks(&tasks, &TaskQuery::search("")).len(), 4);
    assert_eq!(filter_tasks(&tasks, &TaskQuery::search("   ")).len(), 4);
}

#[test]
fn search_matches_title_or_description_case_insensitively() {
    let tasks = fixture();

    let by_title = filter_tasks(&tasks, &TaskQuery::search("PASSPORT"));
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].title, "Renew passport");

    // "email" appears in task 1's title and task 3's description.
    let both: Vec<_> = filter_tasks(&tasks, &TaskQuery::search("email"))
        .into_iter()
        .map(|task| task.id)
        .collect();
    assert_eq!(both, [Uuid::from_u128(1), Uuid::from_u128(3)]);

    assert!(filter_tasks(&tasks, &TaskQuery::search("no such text")).is_empty());
}

#[test]
fn priority_filter_is_exact() {
    let tasks = fixture();
    let query = TaskQuery {
        priority: Some(Priority::High),
        ..TaskQuery::default()
    };

    let filtered = filter_tasks(&tasks, &query);
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|task| task.priority == Priority::High));
}

#[test]
fn status_filter_partitions_by_completion() {
    let tasks = fixture();

    let completed = filter_tasks(
        &tasks,
        &TaskQuery {
            status: Some(StatusFilter::Completed),
            ..TaskQuery::default()
        },
    );
    assert_eq!(completed.len(), 2);
    assert!(completed.iter().all(|task| task.completed));

    let pending = filter_tasks(
        &tasks,
        &TaskQuery {
            status: Some(StatusFilter::Pending),
            ..TaskQuery::default()
        },
    );
    assert_eq!(pending.len(), 2);
    assert!(pending.iter().all(|task| !task.completed));
}

#[test]
fn criteria_are_anded() {
    let tasks = fixture();
    let query = TaskQuery {
        search_term: "email".to_string(),
        priority: Some(Priority::High),
        status: Some(StatusFilter::Completed),
    };

    let filtered = filter_tasks(&tasks, &query);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "Fix login bug");
}

#[test]
fn filtering_preserves_input_order() {
    let tasks = fixture();
    let query = TaskQuery {
        status: Some(StatusFilter::Pending),
        ..TaskQuery::default()
    };

    let ids: Vec<_> = filter_tasks(&tasks, &query)
        .into_iter()
        .map(|task| task.id)
        .collect();
    assert_eq!(ids, [Uuid::from_u128(1), Uuid::from_u128(4)]);
}
