//! Frontend Models
//!
//! Data structures matching backend entities.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Goal period classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Free,
}

impl PeriodType {
    pub const ALL: [PeriodType; 5] = [
        PeriodType::Daily,
        PeriodType::Weekly,
        PeriodType::Monthly,
        PeriodType::Yearly,
        PeriodType::Free,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodType::Daily => "daily",
            PeriodType::Weekly => "weekly",
            PeriodType::Monthly => "monthly",
            PeriodType::Yearly => "yearly",
            PeriodType::Free => "free",
        }
    }

    /// Button label in the goal editor
    pub fn label(&self) -> &'static str {
        match self {
            PeriodType::Daily => "Daily",
            PeriodType::Weekly => "Weekly",
            PeriodType::Monthly => "Monthly",
            PeriodType::Yearly => "Yearly",
            PeriodType::Free => "Free",
        }
    }
}

/// Goal lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    #[default]
    Active,
    Done,
}

/// Goal data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: u32,
    pub name: String,
    pub color: String,
    pub period_type: PeriodType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: GoalStatus,
    pub created_at: Option<i64>,
}

/// Task data structure (matches backend)
///
/// `goal_id` is a weak reference: the goal may have been deleted, in which
/// case the task renders as having no goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub text: String,
    pub goal_id: Option<u32>,
    pub completed: bool,
    pub date: NaiveDate,
    pub created_at: Option<i64>,
}

/// Daily evaluation data structure (matches backend)
///
/// At most one evaluation per calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEvaluation {
    pub date: NaiveDate,
    pub evaluation_text: String,
    pub created_at: Option<i64>,
}
