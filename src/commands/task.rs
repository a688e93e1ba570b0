//! Task Commands
//!
//! Frontend bindings for task-related backend commands.

use chrono::NaiveDate;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::invoke;
use crate::models::Task;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateTaskArgs<'a> {
    pub text: &'a str,
    #[serde(rename = "goalId")]
    pub goal_id: Option<u32>,
    pub date: NaiveDate,
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

#[derive(Serialize)]
struct UpdateTaskArgs<'a> {
    id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
}

#[derive(Serialize)]
struct SetTaskGoalArgs {
    id: u32,
    #[serde(rename = "goalId")]
    goal_id: Option<u32>,
}

// ========================
// Commands
// ========================

pub async fn list_tasks() -> Result<Vec<Task>, String> {
    let result = invoke("list_tasks", JsValue::NULL).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_task(args: &CreateTaskArgs<'_>) -> Result<Task, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("create_task", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_task(id: u32, text: Option<&str>) -> Result<Task, String> {
    let js_args =
        serde_wasm_bindgen::to_value(&UpdateTaskArgs { id, text }).map_err(|e| e.to_string())?;
    let result = invoke("update_task", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn set_task_goal(id: u32, goal_id: Option<u32>) -> Result<Task, String> {
    let js_args =
        serde_wasm_bindgen::to_value(&SetTaskGoalArgs { id, goal_id }).map_err(|e| e.to_string())?;
    let result = invoke("set_task_goal", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn toggle_task(id: u32) -> Result<Task, String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let result = invoke("toggle_task", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_task(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let _ = invoke("delete_task", js_args).await;
    Ok(())
}
