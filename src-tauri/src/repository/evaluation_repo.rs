//! Evaluation Repository
//!
//! SQLite-backed implementation for daily evaluations. The calendar day is
//! the primary key, so create and update are both upserts.

use async_trait::async_trait;
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use tracing::debug;

use super::db::DbState;
use super::traits::Repository;
use crate::domain::{DailyEvaluation, DomainError, DomainResult};

const EVALUATION_COLUMNS: &str = "date, evaluation_text, created_at";

/// SQLite implementation of the DailyEvaluation repository
#[derive(Clone)]
pub struct EvaluationRepository {
    db: DbState,
}

impl EvaluationRepository {
    pub fn new(db: DbState) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<DailyEvaluation> for EvaluationRepository {
    /// Upsert: saving a day that already has an evaluation replaces the text
    async fn create(&self, entity: &DailyEvaluation) -> DomainResult<DailyEvaluation> {
        let guard = self.db.conn.lock().await;
        let conn = ready(&guard)?;

        conn.execute(
            "INSERT INTO evaluations (date, evaluation_text) VALUES (?1, ?2)
             ON CONFLICT(date) DO UPDATE SET evaluation_text = excluded.evaluation_text",
            params![entity.date, entity.evaluation_text],
        )
        .map_err(internal)?;
        debug!(date = %entity.date, "evaluation saved");

        get_by_date(conn, entity.date)?
            .ok_or_else(|| DomainError::Internal("upsert vanished".to_string()))
    }

    async fn find_by_id(&self, date: NaiveDate) -> DomainResult<Option<DailyEvaluation>> {
        let guard = self.db.conn.lock().await;
        let conn = ready(&guard)?;
        get_by_date(conn, date)
    }

    async fn list(&self) -> DomainResult<Vec<DailyEvaluation>> {
        let guard = self.db.conn.lock().await;
        let conn = ready(&guard)?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM evaluations ORDER BY date ASC",
                EVALUATION_COLUMNS
            ))
            .map_err(internal)?;
        let evaluations = stmt
            .query_map([], row_to_evaluation)
            .map_err(internal)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(internal)?;
        Ok(evaluations)
    }

    async fn update(&self, entity: &DailyEvaluation) -> DomainResult<DailyEvaluation> {
        self.create(entity).await
    }

    async fn delete(&self, date: NaiveDate) -> DomainResult<()> {
        let guard = self.db.conn.lock().await;
        let conn = ready(&guard)?;

        conn.execute("DELETE FROM evaluations WHERE date = ?1", params![date])
            .map_err(internal)?;
        debug!(date = %date, "evaluation deleted");
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

fn get_by_date(conn: &Connection, date: NaiveDate) -> DomainResult<Option<DailyEvaluation>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {} FROM evaluations WHERE date = ?1",
            EVALUATION_COLUMNS
        ))
        .map_err(internal)?;
    let mut rows = stmt
        .query_map(params![date], row_to_evaluation)
        .map_err(internal)?;
    match rows.next() {
        Some(row) => Ok(Some(row.map_err(internal)?)),
        None => Ok(None),
    }
}

fn row_to_evaluation(row: &Row<'_>) -> rusqlite::Result<DailyEvaluation> {
    Ok(DailyEvaluation {
        date: row.get(0)?,
        evaluation_text: row.get(1)?,
        created_at: row.get(2)?,
    })
}

fn internal(err: rusqlite::Error) -> DomainError {
    DomainError::Internal(err.to_string())
}
