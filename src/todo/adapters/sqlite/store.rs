//! `SQLite` store implementation for todo persistence.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::todo::{
    domain::{DueDate, Status, Todo, TodoId},
    ports::{TodoStore, TodoStoreError, TodoStoreResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;

/// `SQLite` connection pool type used by todo adapters.
pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Statuses eligible for the overdue predicate, in stored form.
const OPEN_STATUSES: [&str; 2] = ["Not started", "In progress"];

/// Stored form of the finished status.
const FINISHED_STATUS: &str = "Finished";

/// `SQLite`-backed todo store.
#[derive(Debug, Clone)]
pub struct SqliteTodoStore {
    pool: SqlitePool,
}

impl SqliteTodoStore {
    /// Creates a new store from a `SQLite` connection pool.
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens (or creates) the database file at `path` behind a fresh pool.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Persistence`] when the pool cannot be
    /// built against the given path.
    pub fn open(path: &str) -> TodoStoreResult<Self> {
        let manager = ConnectionManager::<SqliteConnection>::new(path);
        let pool = Pool::builder()
            .build(manager)
            .map_err(TodoStoreError::persistence)?;
        Ok(Self::new(pool))
    }

    /// Creates the `tasks` table when it does not already exist.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Persistence`] when the DDL statement
    /// fails.
    pub async fn initialize(&self) -> TodoStoreResult<()> {
        self.run_blocking(|connection| {
            diesel::sql_query(
                "CREATE TABLE IF NOT EXISTS tasks (\
                 id BIGINT PRIMARY KEY, \
                 name TEXT NOT NULL, \
                 dueby TEXT NOT NULL, \
                 status TEXT NOT NULL)",
            )
            .execute(connection)
            .map_err(TodoStoreError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoStoreResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> TodoStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoStoreError::persistence)?
    }

    async fn load_ids<F>(&self, apply_filter: F) -> TodoStoreResult<Vec<TodoId>>
    where
        F: FnOnce(tasks::BoxedQuery<'static, diesel::sqlite::Sqlite>) -> tasks::BoxedQuery<'static, diesel::sqlite::Sqlite>
            + Send
            + 'static,
    {
        self.run_blocking(move |connection| {
            let ids = apply_filter(tasks::table.into_boxed())
                .select(tasks::id)
                .order(tasks::id.asc())
                .load::<i64>(connection)
                .map_err(TodoStoreError::persistence)?;
            Ok(ids.into_iter().map(TodoId::from_raw).collect())
        })
        .await
    }
}

#[async_trait]
impl TodoStore for SqliteTodoStore {
    async fn insert(&self, todo: &Todo) -> TodoStoreResult<()> {
        let row = NewTaskRow::from(todo);
        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&row)
                .execute(connection)
                .map_err(TodoStoreError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn update(&self, todo: &Todo) -> TodoStoreResult<()> {
        let row = NewTaskRow::from(todo);
        self.run_blocking(move |connection| {
            diesel::update(tasks::table.filter(tasks::id.eq(row.id)))
                .set((
                    tasks::name.eq(&row.name),
                    tasks::dueby.eq(&row.dueby),
                    tasks::status.eq(&row.status),
                ))
                .execute(connection)
                .map_err(TodoStoreError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TodoId) -> TodoStoreResult<()> {
        self.run_blocking(move |connection| {
            diesel::delete(tasks::table.filter(tasks::id.eq(id.value())))
                .execute(connection)
                .map_err(TodoStoreError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn delete_all(&self) -> TodoStoreResult<()> {
        self.run_blocking(|connection| {
            diesel::delete(tasks::table)
                .execute(connection)
                .map_err(TodoStoreError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn all(&self) -> TodoStoreResult<Vec<Todo>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .select(TaskRow::as_select())
                .order(tasks::id.asc())
                .load::<TaskRow>(connection)
                .map_err(TodoStoreError::persistence)?;
            rows.into_iter().map(row_to_todo).collect()
        })
        .await
    }

    async fn ids(&self) -> TodoStoreResult<Vec<TodoId>> {
        self.load_ids(|query| query).await
    }

    async fn overdue_ids(&self, today: DueDate) -> TodoStoreResult<Vec<TodoId>> {
        // Canonical dates compare correctly as text.
        let today_text = today.to_string();
        self.load_ids(move |query| {
            query.filter(
                tasks::dueby
                    .lt(today_text)
                    .and(tasks::status.eq_any(OPEN_STATUSES)),
            )
        })
        .await
    }

    async fn finished_ids(&self) -> TodoStoreResult<Vec<TodoId>> {
        self.load_ids(|query| query.filter(tasks::status.eq(FINISHED_STATUS)))
            .await
    }

    async fn due_on_ids(&self, date: DueDate) -> TodoStoreResult<Vec<TodoId>> {
        let date_text = date.to_string();
        self.load_ids(move |query| {
            query.filter(
                tasks::dueby
                    .eq(date_text)
                    .and(tasks::status.ne(FINISHED_STATUS)),
            )
        })
        .await
    }
}

/// Decodes a stored row into the domain aggregate.
///
/// Stored due dates are canonical, so a parse failure here means the row
/// was corrupted outside this process and is reported as a persistence
/// error.
fn row_to_todo(row: TaskRow) -> TodoStoreResult<Todo> {
    let due = DueDate::parse(&row.dueby).map_err(TodoStoreError::persistence)?;
    Ok(Todo::from_parts(
        TodoId::from_raw(row.id),
        row.name,
        due,
        Status::verbatim(row.status),
    ))
}
