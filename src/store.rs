//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{DailyEvaluation, Goal, GoalStatus, Task};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PlannerState {
    /// All goals
    pub goals: Vec<Goal>,
    /// All tasks across all days
    pub tasks: Vec<Task>,
    /// All daily evaluations
    pub evaluations: Vec<DailyEvaluation>,
}

/// Type alias for the store
pub type PlannerStore = Store<PlannerState>;

/// Get the planner store from context
pub fn use_planner_store() -> PlannerStore {
    expect_context::<PlannerStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a goal to the store
pub fn store_add_goal(store: &PlannerStore, goal: Goal) {
    store.goals().write().push(goal);
}

/// Update a goal in the store by ID
pub fn store_update_goal(store: &PlannerStore, updated: Goal) {
    if let Some(goal) = store
        .goals()
        .write()
        .iter_mut()
        .find(|goal| goal.id == updated.id)
    {
        *goal = updated;
    }
}

/// Remove a goal from the store by ID
///
/// Tasks referencing the goal are left untouched; the reference is weak.
pub fn store_remove_goal(store: &PlannerStore, goal_id: u32) {
    store.goals().write().retain(|goal| goal.id != goal_id);
}

/// Set a goal's status in the store
pub fn store_set_goal_status(store: &PlannerStore, goal_id: u32, status: GoalStatus) {
    if let Some(goal) = store
        .goals()
        .write()
        .iter_mut()
        .find(|goal| goal.id == goal_id)
    {
        goal.status = status;
    }
}

/// Add a task to the store
pub fn store_add_task(store: &PlannerStore, task: Task) {
    store.tasks().write().push(task);
}

/// Update a task in the store by ID
pub fn store_update_task(store: &PlannerStore, updated: Task) {
    if let Some(task) = store
        .tasks()
        .write()
        .iter_mut()
        .find(|task| task.id == updated.id)
    {
        *task = updated;
    }
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &PlannerStore, task_id: u32) {
    store.tasks().write().retain(|task| task.id != task_id);
}

/// Insert or replace the evaluation for a day
pub fn store_set_evaluation(store: &PlannerStore, evaluation: DailyEvaluation) {
    let binding = store.evaluations();
    let mut evaluations = binding.write();
    match evaluations.iter_mut().find(|e| e.date == evaluation.date) {
        Some(existing) => *existing = evaluation,
        None => evaluations.push(evaluation),
    }
}

/// Remove the evaluation for a day
pub fn store_remove_evaluation(store: &PlannerStore, date: chrono::NaiveDate) {
    store.evaluations().write().retain(|e| e.date != date);
}
