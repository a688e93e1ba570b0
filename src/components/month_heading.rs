//! Month Heading Component
//!
//! Month/year title driven by the date strip's view reports, plus a
//! today button that requests an animated scroll back to today.

use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;

#[component]
pub fn MonthHeading(
    view_date: ReadSignal<NaiveDate>,
    set_today_scroll_trigger: WriteSignal<u32>,
) -> impl IntoView {
    let title = move || {
        let date = view_date.get();
        format!("{} {}", month_name(date.month()), date.year())
    };

    view! {
        <div class="month-heading">
            <h2>{title}</h2>
            <button
                class="today-btn"
                on:click=move |_| set_today_scroll_trigger.update(|v| *v += 1)
            >
                "Today"
            </button>
        </div>
    }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}
