//! Goal List Component
//!
//! Cards for every goal: color swatch, period and range, status toggle,
//! edit and delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{DeleteConfirmButton, EditTarget};
use crate::models::{Goal, GoalStatus};
use crate::store::{
    store_remove_goal, store_set_goal_status, use_planner_store, PlannerStateStoreFields,
};

#[component]
pub fn GoalList(set_editing_target: WriteSignal<Option<EditTarget>>) -> impl IntoView {
    let store = use_planner_store();

    view! {
        <section class="goal-list">
            <div class="goal-list-header">
                <h3>"Goals"</h3>
                <button
                    class="new-goal-btn"
                    on:click=move |_| set_editing_target.set(Some(EditTarget::New))
                >
                    "+ New goal"
                </button>
            </div>

            <For
                each=move || store.goals().get()
                key=|goal: &Goal| (goal.id, goal.name.clone(), goal.status, goal.end_date)
                children=move |goal| {
                    let id = goal.id;
                    let status = goal.status;
                    let goal_for_edit = goal.clone();

                    let toggle_status = move |_| {
                        let next = match status {
                            GoalStatus::Active => GoalStatus::Done,
                            GoalStatus::Done => GoalStatus::Active,
                        };
                        spawn_local(async move {
                            if commands::set_goal_status(id, next).await.is_ok() {
                                store_set_goal_status(&store, id, next);
                            }
                        });
                    };

                    // Deleting a goal leaves its tasks in place; their
                    // goal reference dangles and renders as "no goal"
                    let on_delete = Callback::new(move |_| {
                        spawn_local(async move {
                            if commands::delete_goal(id).await.is_ok() {
                                store_remove_goal(&store, id);
                            }
                        });
                    });

                    let card_class = move || {
                        if status == GoalStatus::Done { "goal-card done" } else { "goal-card" }
                    };

                    view! {
                        <div class=card_class>
                            <span
                                class="goal-color"
                                style=format!("background: {};", goal.color)
                            ></span>
                            <div class="goal-card-body">
                                <span class="goal-name">{goal.name.clone()}</span>
                                <span class="goal-range">
                                    {format!(
                                        "{} · {} ~ {}",
                                        goal.period_type.label(),
                                        goal.start_date,
                                        goal.end_date
                                    )}
                                </span>
                            </div>
                            <button class="status-btn" on:click=toggle_status>
                                {match status {
                                    GoalStatus::Active => "Mark done",
                                    GoalStatus::Done => "Reopen",
                                }}
                            </button>
                            <button
                                class="edit-btn"
                                on:click=move |_| {
                                    set_editing_target.set(Some(EditTarget::Edit(goal_for_edit.clone())));
                                }
                            >
                                "Edit"
                            </button>
                            <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
                        </div>
                    }
                }
            />

            <p class="goal-count">
                {move || format!("{} goals", store.goals().read().len())}
            </p>
        </section>
    }
}
