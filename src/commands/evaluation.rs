//! Evaluation Commands
//!
//! Frontend bindings for daily evaluation backend commands.

use chrono::NaiveDate;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::invoke;
use crate::models::DailyEvaluation;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct SaveEvaluationArgs<'a> {
    pub date: NaiveDate,
    #[serde(rename = "evaluationText")]
    pub evaluation_text: &'a str,
}

#[derive(Serialize)]
struct DateArgs {
    date: NaiveDate,
}

// ========================
// Commands
// ========================

pub async fn list_evaluations() -> Result<Vec<DailyEvaluation>, String> {
    let result = invoke("list_evaluations", JsValue::NULL).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn get_evaluation(date: NaiveDate) -> Result<Option<DailyEvaluation>, String> {
    let js_args = serde_wasm_bindgen::to_value(&DateArgs { date }).map_err(|e| e.to_string())?;
    let result = invoke("get_evaluation", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn save_evaluation(args: &SaveEvaluationArgs<'_>) -> Result<DailyEvaluation, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("save_evaluation", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_evaluation(date: NaiveDate) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&DateArgs { date }).map_err(|e| e.to_string())?;
    let _ = invoke("delete_evaluation", js_args).await;
    Ok(())
}
