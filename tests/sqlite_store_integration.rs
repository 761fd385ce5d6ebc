//! Integration tests for [`SqliteTodoStore`] against a real database
//! file.
//!
//! Each test works on its own database file under the system temp
//! directory so tests can run in parallel and re-run cleanly.
//!
//! [`SqliteTodoStore`]: taskdesk::todo::adapters::sqlite::SqliteTodoStore

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use chrono::{DateTime, Local, NaiveDate, Utc};
use mockable::Clock;
use std::path::PathBuf;
use std::sync::Arc;
use taskdesk::todo::{
    adapters::sqlite::SqliteTodoStore,
    domain::{Status, TodoId, UpdateTodo},
    ports::TodoStore,
    services::{TodoRegistry, TodoService},
};

/// Clock pinned to 2016-10-20.
struct ScenarioClock;

impl Clock for ScenarioClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(2016, 10, 20)
            .expect("valid scenario date")
            .and_hms_opt(0, 0, 0)
            .expect("valid midnight")
            .and_utc()
    }
}

fn fresh_db_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "taskdesk-{}-{name}.sqlite3",
        std::process::id()
    ));
    if path.exists() {
        std::fs::remove_file(&path).expect("remove stale test database");
    }
    path
}

async fn open_store(name: &str) -> Arc<SqliteTodoStore> {
    let path = fresh_db_path(name);
    let store = SqliteTodoStore::open(&path.to_string_lossy()).expect("open database");
    store.initialize().await.expect("create tasks table");
    Arc::new(store)
}

#[tokio::test(flavor = "multi_thread")]
async fn initialize_is_idempotent() {
    let store = open_store("initialize").await;
    store.initialize().await.expect("re-running DDL is fine");
    assert!(store.ids().await.expect("ids readable").is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn rows_round_trip_through_the_registry() {
    let store = open_store("round-trip").await;
    let registry = TodoRegistry::new(Arc::clone(&store));

    let created = registry
        .create("Build an API", "2016.10.16", "not started")
        .await
        .expect("create task");

    let stored = store.all().await.expect("read all rows");
    assert_eq!(stored, vec![created.clone()]);

    let updated = registry
        .update(created.id(), UpdateTodo::new().with_status("finished"))
        .await
        .expect("update task");
    assert_eq!(store.all().await.expect("read all rows"), vec![updated]);

    registry.delete(created.id()).await.expect("delete task");
    assert!(store.ids().await.expect("ids readable").is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn predicates_match_the_stored_canonical_forms() {
    let store = open_store("predicates").await;
    let registry = TodoRegistry::new(Arc::clone(&store));

    let overdue_task = registry
        .create("late", "2016-10-16", "In progress")
        .await
        .expect("create late task");
    let finished_task = registry
        .create("done", "2016-10-10", "finished")
        .await
        .expect("create done task");
    registry
        .create("future", "2016-11-01", "Not started")
        .await
        .expect("create future task");

    let today = taskdesk::todo::domain::DueDate::parse("2016-10-20").expect("valid date");
    assert_eq!(
        store.overdue_ids(today).await.expect("overdue ids"),
        vec![overdue_task.id()]
    );
    assert_eq!(
        store.finished_ids().await.expect("finished ids"),
        vec![finished_task.id()]
    );
    assert_eq!(
        store
            .due_on_ids(taskdesk::todo::domain::DueDate::parse("16/10/2016").expect("valid date"))
            .await
            .expect("due-on ids"),
        vec![overdue_task.id()]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn records_survive_a_simulated_process_restart() {
    let path = fresh_db_path("restart");
    let path_text = path.to_string_lossy().into_owned();

    let first_id = {
        let store = SqliteTodoStore::open(&path_text).expect("open database");
        store.initialize().await.expect("create tasks table");
        let service = TodoService::new(Arc::new(store), Arc::new(ScenarioClock));
        service
            .create_task("persistent", "2016-10-16", "Finished")
            .await
            .expect("create task")
            .id()
    };

    let reopened = SqliteTodoStore::open(&path_text).expect("reopen database");
    let revived = TodoService::restore(Arc::new(reopened), Arc::new(ScenarioClock))
        .await
        .expect("restore service");

    let tasks = revived.list_tasks().await;
    assert_eq!(tasks.len(), 1);
    let survivor = tasks.first().expect("one surviving task");
    assert_eq!(survivor.id(), first_id);
    assert_eq!(survivor.description(), "persistent");
    assert_eq!(survivor.status(), &Status::Finished);

    let next = revived
        .create_task("post-restart", "2016-10-21", "Not started")
        .await
        .expect("create task");
    assert_eq!(next.id(), TodoId::from_raw(first_id.value() + 1));
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_all_empties_the_table() {
    let store = open_store("delete-all").await;
    let registry = TodoRegistry::new(Arc::clone(&store));
    for description in ["a", "b"] {
        registry
            .create(description, "2016-10-16", "Not started")
            .await
            .expect("create task");
    }

    registry.clear().await.expect("clear tasks");
    assert!(store.ids().await.expect("ids readable").is_empty());
}
