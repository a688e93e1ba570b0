//! Tauri Commands for Goal CRUD
//!
//! Exposes goal operations to the frontend via Tauri IPC.

use chrono::NaiveDate;
use tauri::State;

use crate::domain::{Goal, GoalStatus, PeriodType};
use crate::repository::Repository;
use crate::AppState;

/// Create a new goal
///
/// The range arrives pre-resolved from the frontend's period resolver;
/// the `start <= end` invariant is still enforced here.
#[tauri::command]
pub async fn create_goal(
    state: State<'_, AppState>,
    name: String,
    color: String,
    period_type: PeriodType,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Goal, String> {
    let goal = Goal::new(0, name, color, period_type, start_date, end_date)
        .map_err(|e| e.to_string())?;
    state.goal_repo.create(&goal).await.map_err(|e| e.to_string())
}

/// List all goals
#[tauri::command]
pub async fn list_goals(state: State<'_, AppState>) -> Result<Vec<Goal>, String> {
    state.goal_repo.list().await.map_err(|e| e.to_string())
}

/// Get goal by ID
#[tauri::command]
pub async fn get_goal(state: State<'_, AppState>, id: u32) -> Result<Option<Goal>, String> {
    state.goal_repo.find_by_id(id).await.map_err(|e| e.to_string())
}

/// Update a goal's name, color and range
#[tauri::command]
pub async fn update_goal(
    state: State<'_, AppState>,
    id: u32,
    name: String,
    color: String,
    period_type: PeriodType,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Goal, String> {
    let existing = state
        .goal_repo
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Goal {} not found", id))?;

    let mut updated = Goal::new(id, name, color, period_type, start_date, end_date)
        .map_err(|e| e.to_string())?;
    updated.status = existing.status;
    updated.created_at = existing.created_at;

    state.goal_repo.update(&updated).await.map_err(|e| e.to_string())
}

/// Set a goal's lifecycle status
#[tauri::command]
pub async fn set_goal_status(
    state: State<'_, AppState>,
    id: u32,
    status: GoalStatus,
) -> Result<Goal, String> {
    state
        .goal_repo
        .set_status(id, status)
        .await
        .map_err(|e| e.to_string())
}

/// Delete a goal (tasks keep their dangling reference)
#[tauri::command]
pub async fn delete_goal(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    state.goal_repo.delete(id).await.map_err(|e| e.to_string())
}
