//! Tauri Commands for Task CRUD
//!
//! Exposes task operations to the frontend via Tauri IPC.

use chrono::NaiveDate;
use tauri::State;

use crate::domain::Task;
use crate::repository::{DateScopedRepository, Repository};
use crate::AppState;

/// Create a new task for a day
#[tauri::command]
pub async fn create_task(
    state: State<'_, AppState>,
    text: String,
    goal_id: Option<u32>,
    date: NaiveDate,
) -> Result<Task, String> {
    let task = Task::new(0, text, date, goal_id);
    state.task_repo.create(&task).await.map_err(|e| e.to_string())
}

/// List all tasks
#[tauri::command]
pub async fn list_tasks(state: State<'_, AppState>) -> Result<Vec<Task>, String> {
    state.task_repo.list().await.map_err(|e| e.to_string())
}

/// List tasks of one day
#[tauri::command]
pub async fn list_tasks_by_date(
    state: State<'_, AppState>,
    date: NaiveDate,
) -> Result<Vec<Task>, String> {
    state
        .task_repo
        .list_by_date(date)
        .await
        .map_err(|e| e.to_string())
}

/// Update a task's text
#[tauri::command]
pub async fn update_task(
    state: State<'_, AppState>,
    id: u32,
    text: Option<String>,
) -> Result<Task, String> {
    let existing = state
        .task_repo
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Task {} not found", id))?;

    let updated = Task {
        text: text.unwrap_or(existing.text),
        ..existing
    };
    state.task_repo.update(&updated).await.map_err(|e| e.to_string())
}

/// Attach the task to a goal, or detach it with `None`
#[tauri::command]
pub async fn set_task_goal(
    state: State<'_, AppState>,
    id: u32,
    goal_id: Option<u32>,
) -> Result<Task, String> {
    let existing = state
        .task_repo
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Task {} not found", id))?;

    let updated = Task { goal_id, ..existing };
    state.task_repo.update(&updated).await.map_err(|e| e.to_string())
}

/// Toggle task completion status
#[tauri::command]
pub async fn toggle_task(state: State<'_, AppState>, id: u32) -> Result<Task, String> {
    let mut task = state
        .task_repo
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Task {} not found", id))?;

    task.completed = !task.completed;
    state.task_repo.update(&task).await.map_err(|e| e.to_string())
}

/// Delete a task
#[tauri::command]
pub async fn delete_task(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    state.task_repo.delete(id).await.map_err(|e| e.to_string())
}
