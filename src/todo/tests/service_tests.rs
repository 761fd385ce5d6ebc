//! Facade delegation tests.

use std::sync::Arc;

use crate::todo::{
    adapters::memory::InMemoryTodoStore,
    domain::{Status, UpdateTodo},
    services::{TodoService, TodoServiceError},
    tests::harness::FixedClock,
};
use rstest::{fixture, rstest};

type TestService = TodoService<InMemoryTodoStore, FixedClock>;

#[fixture]
fn service() -> TestService {
    TodoService::new(
        Arc::new(InMemoryTodoStore::new()),
        Arc::new(FixedClock::on(2016, 10, 20)),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn facade_covers_the_full_lifecycle(service: TestService) {
    let created = service
        .create_task("Build an API", "2016.10.16", "not started")
        .await
        .expect("creation should succeed");
    assert_eq!(service.list_tasks().await, vec![created.clone()]);

    let fetched = service.get_task(created.id()).await.expect("todo exists");
    assert_eq!(fetched, created);

    let updated = service
        .update_task(created.id(), UpdateTodo::new().with_status("finished"))
        .await
        .expect("update should succeed");
    assert_eq!(updated.status(), &Status::Finished);
    assert_eq!(service.list_finished().await.expect("view"), vec![updated]);

    service
        .delete_task(created.id())
        .await
        .expect("deletion should succeed");
    assert!(service.list_tasks().await.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn facade_set_status_bypasses_normalisation(service: TestService) {
    let created = service
        .create_task("Build an API", "2016-10-16", "not started")
        .await
        .expect("creation should succeed");

    let changed = service
        .set_status(created.id(), "urgent")
        .await
        .expect("status change should succeed");
    assert_eq!(changed.status().as_str(), "urgent");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn facade_time_relative_views_delegate_to_the_query_engine(service: TestService) {
    let overdue_task = service
        .create_task("late", "2016-10-01", "In progress")
        .await
        .expect("creation should succeed");

    assert_eq!(
        service.list_overdue().await.expect("overdue view"),
        vec![overdue_task.clone()]
    );
    assert_eq!(
        service
            .list_due_on("1/10/2016")
            .await
            .expect("due-on view"),
        vec![overdue_task]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn facade_clear_tasks_empties_the_service(service: TestService) {
    service
        .create_task("gone soon", "2016-10-16", "Not started")
        .await
        .expect("creation should succeed");

    service.clear_tasks().await.expect("clear should succeed");
    assert!(service.list_tasks().await.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn facade_restore_resumes_from_surviving_store_rows() {
    let store = Arc::new(InMemoryTodoStore::new());
    let original = TodoService::new(Arc::clone(&store), Arc::new(FixedClock::on(2016, 10, 20)));
    let created = original
        .create_task("survivor", "2016-10-16", "Finished")
        .await
        .expect("creation should succeed");
    drop(original);

    let restored = TodoService::restore(store, Arc::new(FixedClock::on(2016, 10, 20)))
        .await
        .expect("restore should succeed");
    assert_eq!(restored.list_tasks().await, vec![created]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn facade_surfaces_not_found_for_unknown_identifiers(service: TestService) {
    let created = service
        .create_task("only one", "2016-10-16", "Not started")
        .await
        .expect("creation should succeed");
    let missing = created.id().next();

    assert!(matches!(
        service.get_task(missing).await,
        Err(TodoServiceError::NotFound(id)) if id == missing
    ));
    assert!(matches!(
        service.delete_task(missing).await,
        Err(TodoServiceError::NotFound(_))
    ));
    assert!(matches!(
        service.set_status(missing, "urgent").await,
        Err(TodoServiceError::NotFound(_))
    ));
}
