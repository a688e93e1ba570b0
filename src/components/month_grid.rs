//! Month Grid Component
//!
//! Calendar picker used by the goal editor. Monday-first weekday ordering,
//! month/year navigation, and range highlighting for the resolved preview.

use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;

/// Weekday header labels, Monday-first
pub const WEEKDAY_HEADERS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Cells for a Monday-first month grid
///
/// Leading `None` entries pad the first week so day 1 lands under its
/// weekday column. Returns an empty vec for an invalid year/month.
pub fn month_grid_cells(year: i32, month: u32) -> Vec<Option<NaiveDate>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let lead = first.weekday().num_days_from_monday() as usize;
    let mut cells: Vec<Option<NaiveDate>> = vec![None; lead];
    let mut day = first;
    while day.month() == month {
        cells.push(Some(day));
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    cells
}

/// Month calendar picker with range highlight
#[component]
pub fn MonthGrid(
    year: ReadSignal<i32>,
    month: ReadSignal<u32>,
    set_year: WriteSignal<i32>,
    set_month: WriteSignal<u32>,
    /// Resolved range to highlight
    #[prop(into)]
    range: Signal<(Option<NaiveDate>, Option<NaiveDate>)>,
    /// Called with the clicked day
    #[prop(into)]
    on_pick: Callback<NaiveDate>,
) -> impl IntoView {
    let prev_month = move |_| {
        let m = month.get();
        if m == 1 {
            set_month.set(12);
            set_year.update(|y| *y -= 1);
        } else {
            set_month.set(m - 1);
        }
    };
    let next_month = move |_| {
        let m = month.get();
        if m == 12 {
            set_month.set(1);
            set_year.update(|y| *y += 1);
        } else {
            set_month.set(m + 1);
        }
    };

    let cells = move || month_grid_cells(year.get(), month.get());

    view! {
        <div class="month-grid">
            <div class="month-grid-nav">
                <button type="button" on:click=prev_month>"<"</button>
                <span class="month-grid-title">
                    {move || format!("{}-{:02}", year.get(), month.get())}
                </span>
                <button type="button" on:click=next_month>">"</button>
            </div>

            <div class="month-grid-weekdays">
                {WEEKDAY_HEADERS.iter().map(|label| {
                    view! { <span class="weekday-header">{*label}</span> }
                }).collect_view()}
            </div>

            <div class="month-grid-days">
                {move || cells().into_iter().map(|cell| {
                    match cell {
                        None => view! { <span class="day-cell blank"></span> }.into_any(),
                        Some(date) => {
                            let cell_class = move || {
                                let mut c = String::from("day-cell");
                                let (start, end) = range.get();
                                if start == Some(date) || end == Some(date) {
                                    c.push_str(" range-edge");
                                } else if let (Some(start), Some(end)) = (start, end) {
                                    if start <= date && date <= end {
                                        c.push_str(" in-range");
                                    }
                                }
                                c
                            };
                            view! {
                                <span
                                    class=cell_class
                                    on:click=move |_| on_pick.run(date)
                                >
                                    {date.day()}
                                </span>
                            }.into_any()
                        }
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_blanks_align_first_weekday() {
        // 2024-03-01 is a Friday: four blank cells before it (Mon..Thu)
        let cells = month_grid_cells(2024, 3);
        assert_eq!(cells.iter().take_while(|c| c.is_none()).count(), 4);
        assert_eq!(cells[4], NaiveDate::from_ymd_opt(2024, 3, 1));
    }

    #[test]
    fn test_month_starting_on_monday_has_no_blanks() {
        // 2024-01-01 is a Monday
        let cells = month_grid_cells(2024, 1);
        assert_eq!(cells[0], NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(cells.len(), 31);
    }

    #[test]
    fn test_leap_february_has_29_days() {
        let cells = month_grid_cells(2024, 2);
        let days = cells.iter().filter(|c| c.is_some()).count();
        assert_eq!(days, 29);
        assert_eq!(cells.last().copied().flatten(), NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn test_invalid_month_yields_no_cells() {
        assert!(month_grid_cells(2024, 0).is_empty());
        assert!(month_grid_cells(2024, 13).is_empty());
    }
}
