//! Task List Component
//!
//! Tasks of the selected day with completion toggle, inline editing and a
//! goal chip. A task whose goal was deleted renders as having no goal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::Task;
use crate::store::{
    store_remove_task, store_update_task, use_planner_store, PlannerStateStoreFields,
};

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_planner_store();

    // Which task is in inline-edit mode, and the edit draft
    let (editing_id, set_editing_id) = signal(None::<u32>);
    let (edit_text, set_edit_text) = signal(String::new());

    let day_tasks = move || {
        let date = ctx.selected_date.get();
        store
            .tasks()
            .read()
            .iter()
            .filter(|t| t.date == date)
            .cloned()
            .collect::<Vec<_>>()
    };

    let goal_chip = move |goal_id: Option<u32>| {
        goal_id.map(|id| {
            // weak reference: the goal may be gone
            let found = store
                .goals()
                .read()
                .iter()
                .find(|g| g.id == id)
                .map(|g| (g.name.clone(), g.color.clone()));
            match found {
                Some((name, color)) => view! {
                    <span class="goal-chip" style=format!("background: {};", color)>
                        {name}
                    </span>
                }
                .into_any(),
                None => view! {
                    <span class="goal-chip missing">"No goal"</span>
                }
                .into_any(),
            }
        })
    };

    let save_edit = move |id: u32| {
        let text = edit_text.get();
        if text.trim().is_empty() {
            set_editing_id.set(None);
            return;
        }
        spawn_local(async move {
            if let Ok(updated) = commands::update_task(id, Some(&text)).await {
                store_update_task(&store, updated);
            }
            set_editing_id.set(None);
        });
    };

    view! {
        <section class="task-list">
            <For
                each=day_tasks
                key=|task: &Task| (task.id, task.text.clone(), task.completed, task.goal_id)
                children=move |task| {
                    let id = task.id;
                    let completed = task.completed;
                    let is_editing = move || editing_id.get() == Some(id);

                    let toggle = move |_| {
                        spawn_local(async move {
                            if let Ok(updated) = commands::toggle_task(id).await {
                                store_update_task(&store, updated);
                            }
                        });
                    };

                    let on_delete = Callback::new(move |_| {
                        spawn_local(async move {
                            if commands::delete_task(id).await.is_ok() {
                                store_remove_task(&store, id);
                            }
                        });
                    });

                    let start_edit = {
                        let text = task.text.clone();
                        move |_| {
                            set_edit_text.set(text.clone());
                            set_editing_id.set(Some(id));
                        }
                    };

                    let row_class = move || {
                        if completed { "task-row completed" } else { "task-row" }
                    };

                    view! {
                        <div class=row_class>
                            <input
                                type="checkbox"
                                prop:checked=completed
                                on:change=toggle
                            />
                            <Show
                                when=is_editing
                                fallback={
                                    let text = task.text.clone();
                                    let goal_id = task.goal_id;
                                    move || view! {
                                        <span class="task-text" on:dblclick=start_edit.clone()>
                                            {text.clone()}
                                        </span>
                                        {goal_chip(goal_id)}
                                    }
                                }
                            >
                                <input
                                    type="text"
                                    class="task-edit-input"
                                    prop:value=move || edit_text.get()
                                    on:input=move |ev| {
                                        let target = ev.target().unwrap();
                                        let input = target
                                            .dyn_ref::<web_sys::HtmlInputElement>()
                                            .unwrap();
                                        set_edit_text.set(input.value());
                                    }
                                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                                        if ev.key() == "Enter" {
                                            save_edit(id);
                                        } else if ev.key() == "Escape" {
                                            set_editing_id.set(None);
                                        }
                                    }
                                />
                            </Show>
                            <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
                        </div>
                    }
                }
            />

            <p class="task-count">
                {move || format!("{} tasks", day_tasks().len())}
            </p>
        </section>
    }
}
