//! Task Entity
//!
//! A task belongs to one calendar day and optionally references a goal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A daily task
///
/// `goal_id` is a weak reference: deleting a goal leaves its tasks in place,
/// and consumers treat a dangling reference as "no goal".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: u32,
    /// Task text content
    pub text: String,
    /// Goal this task contributes to, if any
    pub goal_id: Option<u32>,
    /// Completion status
    pub completed: bool,
    /// The calendar day this task belongs to
    pub date: NaiveDate,
    /// Creation time (unix seconds), assigned by the database
    pub created_at: Option<i64>,
}

impl Task {
    /// Create a new incomplete task for a day
    pub fn new(id: u32, text: String, date: NaiveDate, goal_id: Option<u32>) -> Self {
        Self {
            id,
            text,
            goal_id,
            completed: false,
            date,
            created_at: None,
        }
    }
}

impl Entity for Task {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let task = Task::new(1, "Morning run".to_string(), date, Some(7));
        assert_eq!(task.id(), 1);
        assert_eq!(task.goal_id, Some(7));
        assert!(!task.completed);
        assert_eq!(task.date, date);
    }
}
