//! Task Repository
//!
//! SQLite-backed implementation for Task CRUD and day-scoped listing.

use async_trait::async_trait;
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use tracing::debug;

use super::db::DbState;
use super::traits::{DateScopedRepository, Repository};
use crate::domain::{DomainError, DomainResult, Task};

const TASK_COLUMNS: &str = "id, text, goal_id, completed, date, created_at";

/// SQLite implementation of the Task repository
#[derive(Clone)]
pub struct TaskRepository {
    db: DbState,
}

impl TaskRepository {
    pub fn new(db: DbState) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<Task> for TaskRepository {
    async fn create(&self, entity: &Task) -> DomainResult<Task> {
        let guard = self.db.conn.lock().await;
        let conn = ready(&guard)?;

        conn.execute(
            "INSERT INTO tasks (text, goal_id, completed, date) VALUES (?1, ?2, ?3, ?4)",
            params![
                entity.text,
                entity.goal_id,
                entity.completed as i64,
                entity.date
            ],
        )
        .map_err(internal)?;

        let id = conn.last_insert_rowid() as u32;
        debug!(id, date = %entity.date, "task created");
        get_by_id(conn, id)?.ok_or_else(|| DomainError::Internal("insert vanished".to_string()))
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Task>> {
        let guard = self.db.conn.lock().await;
        let conn = ready(&guard)?;
        get_by_id(conn, id)
    }

    async fn list(&self) -> DomainResult<Vec<Task>> {
        let guard = self.db.conn.lock().await;
        let conn = ready(&guard)?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM tasks ORDER BY date ASC, id ASC",
                TASK_COLUMNS
            ))
            .map_err(internal)?;
        let tasks = stmt
            .query_map([], row_to_task)
            .map_err(internal)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(internal)?;
        Ok(tasks)
    }

    async fn update(&self, entity: &Task) -> DomainResult<Task> {
        let guard = self.db.conn.lock().await;
        let conn = ready(&guard)?;

        let changed = conn
            .execute(
                "UPDATE tasks SET text = ?1, goal_id = ?2, completed = ?3, date = ?4
                 WHERE id = ?5",
                params![
                    entity.text,
                    entity.goal_id,
                    entity.completed as i64,
                    entity.date,
                    entity.id
                ],
            )
            .map_err(internal)?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("task {}", entity.id)));
        }
        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.db.conn.lock().await;
        let conn = ready(&guard)?;

        conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])
            .map_err(internal)?;
        debug!(id, "task deleted");
        Ok(())
    }
}

#[async_trait]
impl DateScopedRepository<Task> for TaskRepository {
    async fn list_by_date(&self, date: NaiveDate) -> DomainResult<Vec<Task>> {
        let guard = self.db.conn.lock().await;
        let conn = ready(&guard)?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM tasks WHERE date = ?1 ORDER BY id ASC",
                TASK_COLUMNS
            ))
            .map_err(internal)?;
        let tasks = stmt
            .query_map(params![date], row_to_task)
            .map_err(internal)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(internal)?;
        Ok(tasks)
    }
}

fn ready<'a>(
    guard: &'a tokio::sync::MutexGuard<'_, Option<Connection>>,
) -> DomainResult<&'a Connection> {
    guard
        .as_ref()
        .ok_or_else(|| DomainError::Internal("database not initialized".to_string()))
}

fn get_by_id(conn: &Connection, id: u32) -> DomainResult<Option<Task>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {} FROM tasks WHERE id = ?1", TASK_COLUMNS))
        .map_err(internal)?;
    let mut rows = stmt
        .query_map(params![id], row_to_task)
        .map_err(internal)?;
    match rows.next() {
        Some(row) => Ok(Some(row.map_err(internal)?)),
        None => Ok(None),
    }
}

fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        text: row.get(1)?,
        goal_id: row.get(2)?,
        completed: row.get::<_, i64>(3)? != 0,
        date: row.get(4)?,
        created_at: row.get(5)?,
    })
}

fn internal(err: rusqlite::Error) -> DomainError {
    DomainError::Internal(err.to_string())
}
