//! Goal Repository
//!
//! SQLite-backed implementation for Goal CRUD plus status changes.

use async_trait::async_trait;
use rusqlite::{params, Connection, Row};
use tracing::debug;

use super::db::DbState;
use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, Goal, GoalStatus, PeriodType};

const GOAL_COLUMNS: &str = "id, name, color, period_type, start_date, end_date, status, created_at";

/// SQLite implementation of the Goal repository
#[derive(Clone)]
pub struct GoalRepository {
    db: DbState,
}

impl GoalRepository {
    pub fn new(db: DbState) -> Self {
        Self { db }
    }

    /// Set a goal's status and return the updated row
    pub async fn set_status(&self, id: u32, status: GoalStatus) -> DomainResult<Goal> {
        let guard = self.db.conn.lock().await;
        let conn = ready(&guard)?;

        let changed = conn
            .execute(
                "UPDATE goals SET status = ?1 WHERE id = ?2",
                params![status.as_str(), id],
            )
            .map_err(internal)?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("goal {}", id)));
        }
        get_by_id(conn, id)?.ok_or_else(|| DomainError::NotFound(format!("goal {}", id)))
    }
}

#[async_trait]
impl Repository<Goal> for GoalRepository {
    async fn create(&self, entity: &Goal) -> DomainResult<Goal> {
        let guard = self.db.conn.lock().await;
        let conn = ready(&guard)?;

        conn.execute(
            "INSERT INTO goals (name, color, period_type, start_date, end_date, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                entity.name,
                entity.color,
                entity.period_type.as_str(),
                entity.start_date,
                entity.end_date,
                entity.status.as_str()
            ],
        )
        .map_err(internal)?;

        let id = conn.last_insert_rowid() as u32;
        debug!(id, name = %entity.name, "goal created");
        get_by_id(conn, id)?.ok_or_else(|| DomainError::Internal("insert vanished".to_string()))
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Goal>> {
        let guard = self.db.conn.lock().await;
        let conn = ready(&guard)?;
        get_by_id(conn, id)
    }

    async fn list(&self) -> DomainResult<Vec<Goal>> {
        let guard = self.db.conn.lock().await;
        let conn = ready(&guard)?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM goals ORDER BY start_date ASC, id ASC",
                GOAL_COLUMNS
            ))
            .map_err(internal)?;
        let goals = stmt
            .query_map([], row_to_goal)
            .map_err(internal)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(internal)?;
        Ok(goals)
    }

    async fn update(&self, entity: &Goal) -> DomainResult<Goal> {
        let guard = self.db.conn.lock().await;
        let conn = ready(&guard)?;

        let changed = conn
            .execute(
                "UPDATE goals SET name = ?1, color = ?2, period_type = ?3,
                 start_date = ?4, end_date = ?5, status = ?6 WHERE id = ?7",
                params![
                    entity.name,
                    entity.color,
                    entity.period_type.as_str(),
                    entity.start_date,
                    entity.end_date,
                    entity.status.as_str(),
                    entity.id
                ],
            )
            .map_err(internal)?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("goal {}", entity.id)));
        }
        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.db.conn.lock().await;
        let conn = ready(&guard)?;

        // Tasks referencing this goal are left alone; the reference is weak
        conn.execute("DELETE FROM goals WHERE id = ?1", params![id])
            .map_err(internal)?;
        debug!(id, "goal deleted");
        Ok(())
    }
}

fn ready<'a>(
    guard: &'a tokio::sync::MutexGuard<'_, Option<Connection>>,
) -> DomainResult<&'a Connection> {
    guard
        .as_ref()
        .ok_or_else(|| DomainError::Internal("database not initialized".to_string()))
}

fn get_by_id(conn: &Connection, id: u32) -> DomainResult<Option<Goal>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {} FROM goals WHERE id = ?1",
            GOAL_COLUMNS
        ))
        .map_err(internal)?;
    let mut rows = stmt
        .query_map(params![id], row_to_goal)
        .map_err(internal)?;
    match rows.next() {
        Some(row) => Ok(Some(row.map_err(internal)?)),
        None => Ok(None),
    }
}

fn row_to_goal(row: &Row<'_>) -> rusqlite::Result<Goal> {
    Ok(Goal {
        id: row.get(0)?,
        name: row.get(1)?,
        color: row.get(2)?,
        period_type: PeriodType::from_str(&row.get::<_, String>(3)?),
        start_date: row.get(4)?,
        end_date: row.get(5)?,
        status: GoalStatus::from_str(&row.get::<_, String>(6)?),
        created_at: row.get(7)?,
    })
}

fn internal(err: rusqlite::Error) -> DomainError {
    DomainError::Internal(err.to_string())
}
