//! Repository Integration Tests
//!
//! Tests for the goal/task/evaluation repositories with in-memory SQLite.

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use chrono::NaiveDate;
    use tokio::sync::Mutex;

    use crate::domain::{DailyEvaluation, Goal, GoalStatus, PeriodType, Task};
    use crate::repository::{
        init_db, DateScopedRepository, DbState, EvaluationRepository, GoalRepository, Repository,
        TaskRepository,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup_test_db() -> DbState {
        // Use in-memory database for tests
        let conn = init_db(&PathBuf::from(":memory:")).expect("Failed to init test DB");
        DbState {
            conn: Arc::new(Mutex::new(Some(conn))),
        }
    }

    fn sample_goal(name: &str) -> Goal {
        Goal::new(
            0,
            name.to_string(),
            "#64b5f6".to_string(),
            PeriodType::Weekly,
            date(2024, 3, 11),
            date(2024, 3, 17),
        )
        .expect("valid range")
    }

    #[tokio::test]
    async fn test_create_goal() {
        let repo = GoalRepository::new(setup_test_db());

        let created = repo.create(&sample_goal("Read more")).await.expect("Failed to create");

        assert!(created.id > 0);
        assert_eq!(created.name, "Read more");
        assert_eq!(created.status, GoalStatus::Active);
        assert!(created.created_at.is_some());
    }

    #[tokio::test]
    async fn test_goal_dates_survive_round_trip() {
        let repo = GoalRepository::new(setup_test_db());

        let created = repo.create(&sample_goal("Range check")).await.unwrap();
        let found = repo.find_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(found.start_date, date(2024, 3, 11));
        assert_eq!(found.end_date, date(2024, 3, 17));
        assert_eq!(found.period_type, PeriodType::Weekly);
    }

    #[tokio::test]
    async fn test_update_goal() {
        let repo = GoalRepository::new(setup_test_db());

        let mut created = repo.create(&sample_goal("Original")).await.unwrap();
        created.name = "Updated".to_string();
        created.period_type = PeriodType::Monthly;
        created.start_date = date(2024, 2, 1);
        created.end_date = date(2024, 2, 29);

        let updated = repo.update(&created).await.expect("Update failed");
        assert_eq!(updated.name, "Updated");

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.end_date, date(2024, 2, 29));
    }

    #[tokio::test]
    async fn test_set_goal_status() {
        let repo = GoalRepository::new(setup_test_db());

        let created = repo.create(&sample_goal("Finish thesis")).await.unwrap();
        let done = repo.set_status(created.id, GoalStatus::Done).await.unwrap();
        assert_eq!(done.status, GoalStatus::Done);

        let reopened = repo.set_status(created.id, GoalStatus::Active).await.unwrap();
        assert_eq!(reopened.status, GoalStatus::Active);
    }

    #[tokio::test]
    async fn test_delete_goal_leaves_tasks_dangling() {
        let db = setup_test_db();
        let goals = GoalRepository::new(db.clone());
        let tasks = TaskRepository::new(db);

        let goal = goals.create(&sample_goal("Short lived")).await.unwrap();
        let task = tasks
            .create(&Task::new(0, "Outlives the goal".to_string(), date(2024, 3, 12), Some(goal.id)))
            .await
            .unwrap();

        goals.delete(goal.id).await.expect("Delete failed");

        // the task still exists and still carries the dead reference
        let found = tasks.find_by_id(task.id).await.unwrap().unwrap();
        assert_eq!(found.goal_id, Some(goal.id));
        assert!(goals.find_by_id(goal.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_and_toggle_task() {
        let repo = TaskRepository::new(setup_test_db());

        let created = repo
            .create(&Task::new(0, "Morning run".to_string(), date(2024, 3, 15), None))
            .await
            .expect("Failed to create");
        assert!(created.id > 0);
        assert!(!created.completed);

        let mut toggled = created.clone();
        toggled.completed = true;
        repo.update(&toggled).await.expect("Update failed");

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert!(found.completed);
    }

    #[tokio::test]
    async fn test_list_tasks_by_date() {
        let repo = TaskRepository::new(setup_test_db());

        let day = date(2024, 3, 15);
        repo.create(&Task::new(0, "Task 1".to_string(), day, None)).await.unwrap();
        repo.create(&Task::new(0, "Task 2".to_string(), day, None)).await.unwrap();
        repo.create(&Task::new(0, "Other day".to_string(), date(2024, 3, 16), None))
            .await
            .unwrap();

        let listed = repo.list_by_date(day).await.expect("List failed");
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|t| t.date == day));
    }

    #[tokio::test]
    async fn test_delete_task() {
        let repo = TaskRepository::new(setup_test_db());

        let created = repo
            .create(&Task::new(0, "To delete".to_string(), date(2024, 3, 15), None))
            .await
            .unwrap();
        repo.delete(created.id).await.expect("Delete failed");

        let found = repo.find_by_id(created.id).await.expect("Find failed");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_evaluation_upsert_keeps_one_row_per_day() {
        let repo = EvaluationRepository::new(setup_test_db());

        let day = date(2024, 3, 15);
        repo.create(&DailyEvaluation::new(day, "First draft".to_string()))
            .await
            .expect("Failed to create");
        let replaced = repo
            .create(&DailyEvaluation::new(day, "Second draft".to_string()))
            .await
            .expect("Failed to upsert");

        assert_eq!(replaced.evaluation_text, "Second draft");

        let all = repo.list().await.expect("List failed");
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_evaluation() {
        let repo = EvaluationRepository::new(setup_test_db());

        let day = date(2024, 3, 15);
        repo.create(&DailyEvaluation::new(day, "Gone soon".to_string()))
            .await
            .unwrap();
        repo.delete(day).await.expect("Delete failed");

        let found = repo.find_by_id(day).await.expect("Find failed");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_data_survives_reopen() {
        let dir = tempfile::tempdir().expect("temp dir");
        let db_path = dir.path().join("dayplan_test.db");

        {
            let conn = init_db(&db_path).expect("first open");
            let db = DbState {
                conn: Arc::new(Mutex::new(Some(conn))),
            };
            GoalRepository::new(db)
                .create(&sample_goal("Persistent"))
                .await
                .expect("create");
        }

        // reopen the same file; migrations must be idempotent
        let conn = init_db(&db_path).expect("second open");
        let db = DbState {
            conn: Arc::new(Mutex::new(Some(conn))),
        };
        let goals = GoalRepository::new(db).list().await.expect("list");
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].name, "Persistent");
    }

    #[tokio::test]
    async fn test_uninitialized_db_reports_internal_error() {
        let repo = GoalRepository::new(DbState::new());
        let result = repo.list().await;
        assert!(result.is_err());
    }
}
