//! Date Strip Component
//!
//! Infinite horizontally-scrolling day strip over a fixed 1900-2100 virtual
//! timeline. Only a window of cells around the viewport is rendered; see the
//! leptos-datestrip crate for the windowing math.

use chrono::{Datelike, NaiveDate, Weekday};
use leptos::prelude::*;
use leptos_datestrip::{self as datestrip, Timeline};

use crate::context::AppContext;
use crate::store::{use_planner_store, PlannerStateStoreFields};

const STRIP_CONTAINER_ID: &str = "date-strip-scroll";

fn strip_container() -> Option<web_sys::Element> {
    web_sys::window()?
        .document()?
        .get_element_by_id(STRIP_CONTAINER_ID)
}

fn weekday_label(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Virtualized date strip
///
/// Reports the centered date through `set_view_date` (month/year granularity
/// only) and centers the strip on the selected date and on today-requests.
#[component]
pub fn DateStrip(
    /// Month/year heading source, written when the centered month changes
    set_view_date: WriteSignal<NaiveDate>,
    /// Incrementing counter; each increment requests an animated scroll to today
    today_scroll_trigger: ReadSignal<u32>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_planner_store();

    let timeline = Timeline::default();
    let strip = datestrip::create_strip_signals();

    // Guards against feedback loops between scroll reporting and
    // prop-driven scroll requests
    let (last_centered, set_last_centered) = signal(None::<NaiveDate>);
    let (last_reported_view, set_last_reported_view) = signal(None::<(i32, u32)>);
    let (last_today_trigger, set_last_today_trigger) = signal(0u32);

    // Report the centered date upward, month/year granularity only
    let report_view_date = move || {
        let Some(el) = strip_container() else { return };
        let center =
            timeline.center_date(el.scroll_left() as f64, el.client_width() as f64);
        let key = (center.year(), center.month());
        if last_reported_view.get_untracked() != Some(key) {
            set_last_reported_view.set(Some(key));
            set_view_date.set(center);
        }
    };

    let recalc = datestrip::make_on_scroll(timeline, strip);
    let on_scroll = move |ev: web_sys::Event| {
        recalc(ev);
        report_view_date();
    };

    // Initial position: center the selected date without animation
    Effect::new(move |_| {
        if let Some(el) = strip_container() {
            let selected = ctx.selected_date.get_untracked();
            set_last_centered.set(Some(selected));
            datestrip::scroll_to_date(timeline, &el, selected, false);
            datestrip::recalculate(timeline, strip, Some(el));
            report_view_date();
        }
    });

    // Center on the selected date; re-trigger only when the day changed
    Effect::new(move |_| {
        let selected = ctx.selected_date.get();
        if last_centered.get_untracked() == Some(selected) {
            return;
        }
        set_last_centered.set(Some(selected));
        if let Some(el) = strip_container() {
            datestrip::scroll_to_date(timeline, &el, selected, true);
        }
    });

    // Animated scroll to today whenever the trigger counter advances
    Effect::new(move |_| {
        let trigger = today_scroll_trigger.get();
        if trigger == last_today_trigger.get_untracked() {
            return;
        }
        set_last_today_trigger.set(trigger);
        let today = chrono::Local::now().date_naive();
        ctx.select_date(today);
        set_last_centered.set(Some(today));
        if let Some(el) = strip_container() {
            datestrip::scroll_to_date(timeline, &el, today, true);
        }
    });

    let track_width = format!("width: {}px;", timeline.track_width());

    view! {
        <div class="date-strip" id=STRIP_CONTAINER_ID on:scroll=on_scroll>
            <div class="date-strip-track" style=track_width>
                <div
                    class="date-strip-window"
                    style=move || {
                        format!(
                            "transform: translateX({}px);",
                            strip.window_read.get().offset_px
                        )
                    }
                >
                    {move || {
                        let window = strip.window_read.get();
                        let today = chrono::Local::now().date_naive();
                        timeline.dates(window).into_iter().map(|date| {
                            let is_selected = move || ctx.selected_date.get() == date;
                            let has_task = move || {
                                store.tasks().read().iter().any(|t| t.date == date)
                            };
                            let has_evaluation = move || {
                                store.evaluations().read().iter().any(|e| e.date == date)
                            };
                            let goal_ends_here = move || {
                                store.goals().read().iter().any(|g| g.end_date == date)
                            };
                            let cell_class = move || {
                                let mut c = String::from("date-cell");
                                if is_selected() { c.push_str(" selected"); }
                                if date == today { c.push_str(" today"); }
                                c
                            };
                            view! {
                                <div
                                    class=cell_class
                                    style=format!("width: {}px;", timeline.cell_width)
                                    on:click=move |_| ctx.select_date(date)
                                >
                                    <span class="date-cell-weekday">{weekday_label(date)}</span>
                                    <span class="date-cell-day">{date.day()}</span>
                                    <span class="date-cell-dots">
                                        <Show when=has_task>
                                            <span class="dot dot-task"></span>
                                        </Show>
                                        <Show when=has_evaluation>
                                            <span class="dot dot-evaluation"></span>
                                        </Show>
                                        <Show when=goal_ends_here>
                                            <span class="dot dot-goal-end"></span>
                                        </Show>
                                    </span>
                                </div>
                            }
                        }).collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}
