//! Task manager orchestration tests over the in-memory repository.

use std::sync::Arc;

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{PageRequest, TaskFilter, TaskId, TaskName, TaskPatch, TaskPriority, TaskStatus},
    ports::TaskRepository,
    services::{CreateTaskRequest, TaskManager, TaskManagerError},
};
use chrono::{DateTime, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestManager = TaskManager<InMemoryTaskRepository, DefaultClock>;

struct Harness {
    repository: Arc<InMemoryTaskRepository>,
    manager: TestManager,
}

#[fixture]
fn harness() -> Harness {
    let repository = Arc::new(InMemoryTaskRepository::new());
    let manager = TaskManager::new(Arc::clone(&repository), Arc::new(DefaultClock));
    Harness {
        repository,
        manager,
    }
}

fn due() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 6, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn request(name: &str, priority: TaskPriority) -> CreateTaskRequest {
    CreateTaskRequest::new(TaskName::new(name).expect("valid name"), due(), priority)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_applies_defaults_and_assigns_ids(harness: Harness) {
    let first = harness
        .manager
        .create(request("First", TaskPriority::Normal))
        .await
        .expect("create should succeed");
    let second = harness
        .manager
        .create(request("Second", TaskPriority::Low))
        .await
        .expect("create should succeed");

    assert_eq!(first.status(), TaskStatus::Pending);
    assert!(first.is_active());
    assert!(second.id() > first.id());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_keeps_explicit_status(harness: Harness) {
    let created = harness
        .manager
        .create(
            request("Done already", TaskPriority::High)
                .with_status(TaskStatus::Completed)
                .with_active(false),
        )
        .await
        .expect("create should succeed");

    assert_eq!(created.status(), TaskStatus::Completed);
    assert!(!created.is_active());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_is_retrievable(harness: Harness) {
    let created = harness
        .manager
        .create(request("Round trip", TaskPriority::Normal))
        .await
        .expect("create should succeed");

    let fetched = harness
        .manager
        .find_one(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched, Some(created));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_one_reports_absence_as_none(harness: Harness) {
    let fetched = harness
        .manager
        .find_one(TaskId::from_persisted(404))
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_returns_requested_page_and_total(harness: Harness) {
    for index in 1..=25 {
        harness
            .manager
            .create(request(&format!("Task {index}"), TaskPriority::Normal))
            .await
            .expect("create should succeed");
    }

    let window = PageRequest::new(Some(2), Some(10)).expect("valid window");
    let page = harness
        .manager
        .list(TaskFilter::new(), window)
        .await
        .expect("list should succeed");

    let names: Vec<&str> = page.tasks.iter().map(|task| task.name().as_str()).collect();
    assert_eq!(page.total, 25);
    assert_eq!(window.total_pages(page.total), 3);
    assert_eq!(names.len(), 10);
    assert_eq!(names.first(), Some(&"Task 11"));
    assert_eq!(names.last(), Some(&"Task 20"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_applies_every_filter(harness: Harness) {
    let seeds = [
        ("a", TaskPriority::High, TaskStatus::Completed, true),
        ("b", TaskPriority::High, TaskStatus::Completed, false),
        ("c", TaskPriority::Low, TaskStatus::Completed, true),
        ("d", TaskPriority::High, TaskStatus::Pending, true),
    ];
    for (name, priority, status, is_active) in seeds {
        harness
            .manager
            .create(
                request(name, priority)
                    .with_status(status)
                    .with_active(is_active),
            )
            .await
            .expect("create should succeed");
    }

    let filter = TaskFilter::new()
        .with_status(TaskStatus::Completed)
        .with_priority(TaskPriority::High)
        .with_active(true);
    let page = harness
        .manager
        .list(filter, PageRequest::default())
        .await
        .expect("list should succeed");

    assert_eq!(page.total, 1);
    let names: Vec<&str> = page.tasks.iter().map(|task| task.name().as_str()).collect();
    assert_eq!(names, vec!["a"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_past_last_page_is_empty_but_counts(harness: Harness) {
    harness
        .manager
        .create(request("Only", TaskPriority::Low))
        .await
        .expect("create should succeed");

    let window = PageRequest::new(Some(5), None).expect("valid window");
    let page = harness
        .manager
        .list(TaskFilter::new(), window)
        .await
        .expect("list should succeed");

    assert!(page.tasks.is_empty());
    assert_eq!(page.total, 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_changes_only_supplied_fields(harness: Harness) {
    let created = harness
        .manager
        .create(request("Patch me", TaskPriority::Low))
        .await
        .expect("create should succeed");

    let updated = harness
        .manager
        .update(
            created.id(),
            TaskPatch::new().with_priority(TaskPriority::High),
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.priority(), TaskPriority::High);
    assert_eq!(updated.name(), created.name());
    assert_eq!(updated.status(), created.status());
    assert_eq!(updated.due_date(), created.due_date());
    assert_eq!(updated.date_of_creation(), created.date_of_creation());

    let stored = harness
        .repository
        .find_by_id(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(stored, Some(updated));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_missing_task_reports_not_found_and_stores_nothing(harness: Harness) {
    let missing = TaskId::from_persisted(99);
    let result = harness
        .manager
        .update(missing, TaskPatch::new().with_status(TaskStatus::Completed))
        .await;

    assert!(matches!(result, Err(TaskManagerError::NotFound(id)) if id == missing));
    let page = harness
        .repository
        .list(&TaskFilter::new(), PageRequest::default())
        .await
        .expect("list should succeed");
    assert_eq!(page.total, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remove_deletes_task_permanently(harness: Harness) {
    let created = harness
        .manager
        .create(request("Short lived", TaskPriority::Normal))
        .await
        .expect("create should succeed");

    harness
        .manager
        .remove(created.id())
        .await
        .expect("remove should succeed");

    let fetched = harness
        .manager
        .find_one(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, None);

    let second = harness.manager.remove(created.id()).await;
    assert!(matches!(second, Err(TaskManagerError::NotFound(id)) if id == created.id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remove_missing_task_reports_not_found(harness: Harness) {
    let result = harness.manager.remove(TaskId::from_persisted(3)).await;
    assert!(matches!(result, Err(TaskManagerError::NotFound(_))));
}
