//! Goal Commands
//!
//! Frontend bindings for goal-related backend commands.

use chrono::NaiveDate;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::invoke;
use crate::models::{Goal, GoalStatus, PeriodType};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateGoalArgs<'a> {
    pub name: &'a str,
    pub color: &'a str,
    #[serde(rename = "periodType")]
    pub period_type: PeriodType,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,
}

#[derive(Serialize)]
pub struct UpdateGoalArgs<'a> {
    pub id: u32,
    pub name: &'a str,
    pub color: &'a str,
    #[serde(rename = "periodType")]
    pub period_type: PeriodType,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

#[derive(Serialize)]
struct SetStatusArgs {
    id: u32,
    status: GoalStatus,
}

// ========================
// Commands
// ========================

pub async fn list_goals() -> Result<Vec<Goal>, String> {
    let result = invoke("list_goals", JsValue::NULL).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_goal(args: &CreateGoalArgs<'_>) -> Result<Goal, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("create_goal", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_goal(args: &UpdateGoalArgs<'_>) -> Result<Goal, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("update_goal", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn set_goal_status(id: u32, status: GoalStatus) -> Result<Goal, String> {
    let js_args =
        serde_wasm_bindgen::to_value(&SetStatusArgs { id, status }).map_err(|e| e.to_string())?;
    let result = invoke("set_goal_status", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_goal(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let _ = invoke("delete_goal", js_args).await;
    Ok(())
}
