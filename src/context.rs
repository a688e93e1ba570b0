//! Application Context
//!
//! Shared state provided via Leptos Context API.

use chrono::NaiveDate;
use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload collections from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload collections from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Day currently selected in the date strip - read
    pub selected_date: ReadSignal<NaiveDate>,
    /// Day currently selected in the date strip - write
    set_selected_date: WriteSignal<NaiveDate>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        selected_date: (ReadSignal<NaiveDate>, WriteSignal<NaiveDate>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            selected_date: selected_date.0,
            set_selected_date: selected_date.1,
        }
    }

    /// Trigger a reload of goals, tasks and evaluations
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Select a calendar day
    pub fn select_date(&self, date: NaiveDate) {
        self.set_selected_date.set(date);
    }
}
