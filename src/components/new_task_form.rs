//! New Task Form Component
//!
//! Form for adding a task to the selected day, optionally attached to a goal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands::{self, CreateTaskArgs};
use crate::context::AppContext;
use crate::models::GoalStatus;
use crate::store::{store_add_task, use_planner_store, PlannerStateStoreFields};

/// Form for creating tasks on the selected day
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_planner_store();

    let (new_text, set_new_text) = signal(String::new());
    let (goal_id, set_goal_id) = signal(None::<u32>);

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if text.trim().is_empty() {
            return;
        }
        let date = ctx.selected_date.get();
        let goal = goal_id.get();

        spawn_local(async move {
            let args = CreateTaskArgs {
                text: &text,
                goal_id: goal,
                date,
            };
            if let Ok(created) = commands::create_task(&args).await {
                store_add_task(&store, created);
                set_new_text.set(String::new());
            }
        });
    };

    let active_goals = move || {
        store
            .goals()
            .read()
            .iter()
            .filter(|g| g.status == GoalStatus::Active)
            .map(|g| (g.id, g.name.clone()))
            .collect::<Vec<_>>()
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="Add a task for this day..."
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_text.set(input.value());
                }
            />
            <select
                on:change=move |ev| {
                    let target = ev.target().unwrap();
                    let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                    set_goal_id.set(select.value().parse::<u32>().ok());
                }
            >
                <option value="">"No goal"</option>
                {move || active_goals().into_iter().map(|(id, name)| {
                    let selected = move || goal_id.get() == Some(id);
                    view! {
                        <option value=id.to_string() selected=selected>{name}</option>
                    }
                }).collect_view()}
            </select>
            <button type="submit">"Add"</button>
        </form>
    }
}
