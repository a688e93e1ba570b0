//! Goal Entity
//!
//! A goal spans an inclusive date range derived from its period type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};

/// How a goal's date range was derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
    /// Range chosen directly by the user
    Free,
}

impl PeriodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodType::Daily => "daily",
            PeriodType::Weekly => "weekly",
            PeriodType::Monthly => "monthly",
            PeriodType::Yearly => "yearly",
            PeriodType::Free => "free",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "daily" => PeriodType::Daily,
            "weekly" => PeriodType::Weekly,
            "monthly" => PeriodType::Monthly,
            "yearly" => PeriodType::Yearly,
            _ => PeriodType::Free,
        }
    }
}

/// Goal lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    #[default]
    Active,
    Done,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Active => "active",
            GoalStatus::Done => "done",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "done" => GoalStatus::Done,
            _ => GoalStatus::Active,
        }
    }
}

/// A goal with a derived or user-chosen date range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Display color (hex)
    pub color: String,
    /// How the range below was derived
    pub period_type: PeriodType,
    /// First day of the goal, inclusive
    pub start_date: NaiveDate,
    /// Last day of the goal, inclusive
    pub end_date: NaiveDate,
    /// Lifecycle status
    pub status: GoalStatus,
    /// Creation time (unix seconds), assigned by the database
    pub created_at: Option<i64>,
}

impl Goal {
    /// Create a new active goal
    ///
    /// The range invariant `start_date <= end_date` is enforced here; every
    /// construction path goes through this.
    pub fn new(
        id: u32,
        name: String,
        color: String,
        period_type: PeriodType,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> DomainResult<Self> {
        if start_date > end_date {
            return Err(DomainError::InvalidInput(format!(
                "goal range is inverted: {} > {}",
                start_date, end_date
            )));
        }
        Ok(Self {
            id,
            name,
            color,
            period_type,
            start_date,
            end_date,
            status: GoalStatus::Active,
            created_at: None,
        })
    }

    /// Whether the given day falls inside the goal's range
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

impl Entity for Goal {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_goal_creation() {
        let goal = Goal::new(
            1,
            "Read more".to_string(),
            "#81c784".to_string(),
            PeriodType::Monthly,
            date(2024, 2, 1),
            date(2024, 2, 29),
        )
        .unwrap();
        assert_eq!(goal.id(), 1);
        assert_eq!(goal.status, GoalStatus::Active);
        assert!(goal.contains(date(2024, 2, 15)));
        assert!(!goal.contains(date(2024, 3, 1)));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let result = Goal::new(
            0,
            "Broken".to_string(),
            "#fff".to_string(),
            PeriodType::Free,
            date(2024, 3, 10),
            date(2024, 3, 1),
        );
        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_period_type_round_trip() {
        assert_eq!(PeriodType::Weekly.as_str(), "weekly");
        assert_eq!(PeriodType::from_str("monthly"), PeriodType::Monthly);
        // unknown strings fall back to free
        assert_eq!(PeriodType::from_str("fortnightly"), PeriodType::Free);
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!(GoalStatus::Done.as_str(), "done");
        assert_eq!(GoalStatus::from_str("active"), GoalStatus::Active);
        assert_eq!(GoalStatus::from_str("unknown"), GoalStatus::Active);
    }
}
