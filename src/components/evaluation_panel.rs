//! Evaluation Panel Component
//!
//! Free-text evaluation for the selected day. Edits autosave after a short
//! pause; an explicit save button remains. Clearing the text deletes the
//! day's evaluation.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands::{self, SaveEvaluationArgs};
use crate::context::AppContext;
use crate::store::{
    store_remove_evaluation, store_set_evaluation, use_planner_store, PlannerStateStoreFields,
};

const AUTOSAVE_DELAY_MS: u32 = 600;

#[component]
pub fn EvaluationPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_planner_store();

    let (draft, set_draft) = signal(String::new());
    // Pending autosave; replacing it cancels the previous timer
    let pending = StoredValue::new_local(None::<Timeout>);

    // Load the draft when the selected day changes or the stored
    // evaluation arrives; the write is skipped when the text is already
    // value-equal so an in-flight edit is not clobbered by its own save
    Effect::new(move |_| {
        let date = ctx.selected_date.get();
        let text = store
            .evaluations()
            .read()
            .iter()
            .find(|e| e.date == date)
            .map(|e| e.evaluation_text.clone())
            .unwrap_or_default();
        if draft.get_untracked() != text {
            set_draft.set(text);
        }
    });

    let save_now = move |text: String, date: chrono::NaiveDate| {
        spawn_local(async move {
            if text.trim().is_empty() {
                if commands::delete_evaluation(date).await.is_ok() {
                    store_remove_evaluation(&store, date);
                }
            } else {
                let args = SaveEvaluationArgs {
                    date,
                    evaluation_text: &text,
                };
                if let Ok(saved) = commands::save_evaluation(&args).await {
                    store_set_evaluation(&store, saved);
                }
            }
        });
    };

    let on_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let textarea = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
        let text = textarea.value();
        set_draft.set(text.clone());

        // Capture the day at scheduling time so a day switch mid-delay
        // cannot save under the wrong date
        let date = ctx.selected_date.get_untracked();
        let timeout = Timeout::new(AUTOSAVE_DELAY_MS, move || {
            save_now(text, date);
        });
        pending.set_value(Some(timeout));
    };

    let on_save = move |_| {
        pending.set_value(None);
        save_now(draft.get(), ctx.selected_date.get());
    };

    view! {
        <section class="evaluation-panel">
            <h3>"Daily evaluation"</h3>
            <textarea
                placeholder="How did the day go?"
                prop:value=move || draft.get()
                on:input=on_input
            ></textarea>
            <button class="save-btn" on:click=on_save>"Save"</button>
        </section>
    }
}
