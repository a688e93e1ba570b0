//! Goal Editor Component
//!
//! Right-hand panel for creating and editing goals. The period-type buttons
//! and the month grid feed the period resolver; only the resolved range is
//! ever persisted.

use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands::{self, CreateGoalArgs, UpdateGoalArgs};
use crate::components::{EditTarget, MonthGrid};
use crate::context::AppContext;
use crate::models::PeriodType;
use crate::period::{self, PeriodAnchor};

/// Fixed goal color palette
const GOAL_COLORS: &[&str] = &[
    "#e57373", "#ffb74d", "#fff176", "#81c784", "#64b5f6", "#ba68c8",
];

/// Goal editor panel, shown while `editing_target` is set
#[component]
pub fn GoalEditor(
    editing_target: ReadSignal<Option<EditTarget>>,
    set_editing_target: WriteSignal<Option<EditTarget>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let today = chrono::Local::now().date_naive();

    let (name, set_name) = signal(String::new());
    let (color, set_color) = signal(GOAL_COLORS[0].to_string());
    let (period_type, set_period_type) = signal(PeriodType::Daily);
    let (year, set_year) = signal(today.year());
    let (month, set_month) = signal(today.month());
    let (anchor_date, set_anchor_date) = signal(None::<NaiveDate>);
    let (range_pair, set_range_pair) = signal((None::<NaiveDate>, None::<NaiveDate>));
    let (resolved, set_resolved) = signal((None::<NaiveDate>, None::<NaiveDate>));

    // Populate the form whenever the target changes
    Effect::new(move |_| {
        match editing_target.get() {
            Some(EditTarget::Edit(goal)) => {
                set_name.set(goal.name.clone());
                set_color.set(goal.color.clone());
                set_period_type.set(goal.period_type);
                set_year.set(goal.start_date.year());
                set_month.set(goal.start_date.month());
                set_anchor_date.set(Some(goal.start_date));
                if goal.period_type == PeriodType::Free {
                    set_range_pair.set((Some(goal.start_date), Some(goal.end_date)));
                } else {
                    set_range_pair.set((None, None));
                }
            }
            Some(EditTarget::New) => {
                set_name.set(String::new());
                set_color.set(GOAL_COLORS[0].to_string());
                set_period_type.set(PeriodType::Daily);
                set_year.set(today.year());
                set_month.set(today.month());
                set_anchor_date.set(None);
                set_range_pair.set((None, None));
            }
            None => {}
        }
    });

    // Re-run the resolver on every anchor or period-type change.
    // The write is skipped when the range is value-equal to the current one,
    // so downstream consumers never see redundant updates.
    Effect::new(move |_| {
        let pair = range_pair.get();
        let anchor = PeriodAnchor {
            year: year.get(),
            month: month.get(),
            anchor_date: anchor_date.get(),
            range_start: pair.0,
            range_end: pair.1,
        };
        let next = period::resolve(period_type.get(), &anchor);
        if resolved.get_untracked() != next {
            set_resolved.set(next);
        }
    });

    // Switching away from free discards a previously chosen range
    let select_period = move |pt: PeriodType| {
        if pt != PeriodType::Free {
            set_range_pair.set((None, None));
        }
        set_period_type.set(pt);
    };

    let on_pick = Callback::new(move |date: NaiveDate| {
        match period_type.get_untracked() {
            PeriodType::Daily | PeriodType::Weekly => set_anchor_date.set(Some(date)),
            PeriodType::Free => {
                set_range_pair.update(|pair| *pair = period::free_range_click(*pair, date));
            }
            // monthly/yearly are anchored by the grid's year/month navigation
            PeriodType::Monthly | PeriodType::Yearly => {}
        }
    });

    // Silent no-op while the name is blank or the range is incomplete
    let save_goal = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let goal_name = name.get();
        if goal_name.trim().is_empty() {
            return;
        }
        let (Some(start_date), Some(end_date)) = resolved.get() else {
            return;
        };
        let goal_color = color.get();
        let pt = period_type.get();
        let target = editing_target.get();

        spawn_local(async move {
            let saved = match target {
                Some(EditTarget::Edit(goal)) => {
                    let args = UpdateGoalArgs {
                        id: goal.id,
                        name: &goal_name,
                        color: &goal_color,
                        period_type: pt,
                        start_date,
                        end_date,
                    };
                    commands::update_goal(&args).await.is_ok()
                }
                _ => {
                    let args = CreateGoalArgs {
                        name: &goal_name,
                        color: &goal_color,
                        period_type: pt,
                        start_date,
                        end_date,
                    };
                    commands::create_goal(&args).await.is_ok()
                }
            };
            if saved {
                set_editing_target.set(None);
                ctx.reload();
            }
        });
    };

    let range_preview = move || match resolved.get() {
        (Some(start), Some(end)) => format!("{} ~ {}", start, end),
        _ => "Pick a date".to_string(),
    };

    view! {
        <Show when=move || editing_target.get().is_some()>
            <aside class="goal-editor">
                <h3>
                    {move || match editing_target.get() {
                        Some(EditTarget::Edit(_)) => "Edit goal",
                        _ => "New goal",
                    }}
                </h3>

                <form on:submit=save_goal>
                    <input
                        type="text"
                        placeholder="Goal name..."
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_name.set(input.value());
                        }
                    />

                    <div class="color-palette">
                        {GOAL_COLORS.iter().map(|&swatch| {
                            let is_active = move || color.get() == swatch;
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if is_active() { "color-swatch active" } else { "color-swatch" }
                                    }
                                    style=format!("background: {};", swatch)
                                    on:click=move |_| set_color.set(swatch.to_string())
                                ></button>
                            }
                        }).collect_view()}
                    </div>

                    <div class="period-selector">
                        {PeriodType::ALL.iter().map(|&pt| {
                            let is_active = move || period_type.get() == pt;
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if is_active() { "period-btn active" } else { "period-btn" }
                                    }
                                    on:click=move |_| select_period(pt)
                                >
                                    {pt.label()}
                                </button>
                            }
                        }).collect_view()}
                    </div>

                    <MonthGrid
                        year=year
                        month=month
                        set_year=set_year
                        set_month=set_month
                        range=Signal::derive(move || resolved.get())
                        on_pick=on_pick
                    />

                    <p class="range-preview">{range_preview}</p>

                    <div class="goal-editor-actions">
                        <button type="submit">"Save"</button>
                        <button
                            type="button"
                            class="cancel-btn"
                            on:click=move |_| set_editing_target.set(None)
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </aside>
        </Show>
    }
}
