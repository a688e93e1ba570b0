//! Tauri Commands for Daily Evaluations
//!
//! Exposes evaluation operations to the frontend via Tauri IPC.

use chrono::NaiveDate;
use tauri::State;

use crate::domain::DailyEvaluation;
use crate::repository::Repository;
use crate::AppState;

/// Save the evaluation for a day (insert or replace)
#[tauri::command]
pub async fn save_evaluation(
    state: State<'_, AppState>,
    date: NaiveDate,
    evaluation_text: String,
) -> Result<DailyEvaluation, String> {
    let evaluation = DailyEvaluation::new(date, evaluation_text);
    state
        .evaluation_repo
        .create(&evaluation)
        .await
        .map_err(|e| e.to_string())
}

/// Get the evaluation for a day, if any
#[tauri::command]
pub async fn get_evaluation(
    state: State<'_, AppState>,
    date: NaiveDate,
) -> Result<Option<DailyEvaluation>, String> {
    state
        .evaluation_repo
        .find_by_id(date)
        .await
        .map_err(|e| e.to_string())
}

/// List all evaluations
#[tauri::command]
pub async fn list_evaluations(
    state: State<'_, AppState>,
) -> Result<Vec<DailyEvaluation>, String> {
    state.evaluation_repo.list().await.map_err(|e| e.to_string())
}

/// Delete the evaluation for a day
#[tauri::command]
pub async fn delete_evaluation(state: State<'_, AppState>, date: NaiveDate) -> Result<(), String> {
    state
        .evaluation_repo
        .delete(date)
        .await
        .map_err(|e| e.to_string())
}
