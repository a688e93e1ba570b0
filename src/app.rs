//! Dayplan Frontend App
//!
//! Main application component: date strip across the top, the selected
//! day's tasks and evaluation on the left, goals on the right.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{
    DateStrip, EditTarget, EvaluationPanel, GoalEditor, GoalList, MonthHeading, NewTaskForm,
    TaskList,
};
use crate::context::AppContext;
use crate::store::{PlannerState, PlannerStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let today = chrono::Local::now().date_naive();

    // State
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (selected_date, set_selected_date) = signal(today);
    let (view_date, set_view_date) = signal(today);
    let (today_scroll_trigger, set_today_scroll_trigger) = signal(0u32);
    let (editing_target, set_editing_target) = signal(None::<EditTarget>);

    // Provide store and context to all children
    let store = Store::new(PlannerState::default());
    provide_context(store);
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        (selected_date, set_selected_date),
    ));

    // Load all collections on mount and whenever the trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Loading collections, trigger={}", trigger).into());
        spawn_local(async move {
            if let Ok(goals) = commands::list_goals().await {
                *store.goals().write() = goals;
            }
            if let Ok(tasks) = commands::list_tasks().await {
                *store.tasks().write() = tasks;
            }
            if let Ok(evaluations) = commands::list_evaluations().await {
                *store.evaluations().write() = evaluations;
            }
        });
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <MonthHeading
                    view_date=view_date
                    set_today_scroll_trigger=set_today_scroll_trigger
                />
                <DateStrip
                    set_view_date=set_view_date
                    today_scroll_trigger=today_scroll_trigger
                />
            </header>

            <div class="app-columns">
                // Left: the selected day
                <main class="day-panel">
                    <h3>{move || format!("{}", selected_date.get())}</h3>
                    <NewTaskForm />
                    <TaskList />
                    <EvaluationPanel />
                </main>

                // Right: goals
                <GoalList set_editing_target=set_editing_target />
            </div>

            // Editor panel, shown while a target is set
            <GoalEditor
                editing_target=editing_target
                set_editing_target=set_editing_target
            />
        </div>
    }
}
