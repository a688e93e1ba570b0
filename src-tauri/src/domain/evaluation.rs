//! Daily Evaluation Entity
//!
//! Free-text evaluation of one calendar day; the day itself is the key.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A free-text evaluation of one day
///
/// At most one evaluation exists per day; saving again replaces the text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyEvaluation {
    /// The day being evaluated (natural key)
    pub date: NaiveDate,
    /// Free-text content
    pub evaluation_text: String,
    /// Creation time (unix seconds), assigned by the database
    pub created_at: Option<i64>,
}

impl DailyEvaluation {
    pub fn new(date: NaiveDate, evaluation_text: String) -> Self {
        Self {
            date,
            evaluation_text,
            created_at: None,
        }
    }
}

impl Entity for DailyEvaluation {
    type Id = NaiveDate;

    fn id(&self) -> Self::Id {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_is_keyed_by_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let evaluation = DailyEvaluation::new(date, "Productive day".to_string());
        assert_eq!(evaluation.id(), date);
    }
}
