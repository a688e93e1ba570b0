//! Leptos DateStrip Utilities
//!
//! Virtual windowing for an infinite horizontal date strip.
//! Only a scroll-dependent slice of the timeline is rendered; the slice is
//! translated into place on a full-width track so native scrolling works.

mod window;

pub use window::{Timeline, Window, BUFFER_CELLS, CELL_WIDTH_PX};

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Strip state signals
#[derive(Clone, Copy)]
pub struct StripSignals {
    pub window_read: ReadSignal<Window>,
    pub window_write: WriteSignal<Window>,
}

pub fn create_strip_signals() -> StripSignals {
    let (window_read, window_write) = signal(Window::default());
    StripSignals {
        window_read,
        window_write,
    }
}

/// Recompute the rendered window from the container's current scroll state
///
/// Skipped when the container is not mounted yet. The write is elided when
/// the window is unchanged, so calling this on every scroll tick is cheap.
pub fn recalculate(timeline: Timeline, strip: StripSignals, container: Option<web_sys::Element>) {
    let Some(el) = container else { return };
    let scroll_left = el.scroll_left() as f64;
    let viewport_width = el.client_width() as f64;

    let next = timeline.visible_window(scroll_left, viewport_width);
    if strip.window_read.get_untracked() != next {
        strip.window_write.set(next);
    }
}

/// Create a scroll handler for the strip container
///
/// Recalculation is unconditional and idempotent given the current offset,
/// so a user scroll simply takes over from a running programmatic animation.
pub fn make_on_scroll(
    timeline: Timeline,
    strip: StripSignals,
) -> impl Fn(web_sys::Event) + Copy + 'static {
    move |ev: web_sys::Event| {
        let container = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok());
        recalculate(timeline, strip, container);
    }
}

/// Scroll the container so the given offset is at its left edge
pub fn scroll_to_offset(container: &web_sys::Element, offset: f64, animated: bool) {
    let options = web_sys::ScrollToOptions::new();
    options.set_left(offset);
    options.set_behavior(if animated {
        web_sys::ScrollBehavior::Smooth
    } else {
        web_sys::ScrollBehavior::Instant
    });
    container.scroll_to_with_scroll_to_options(&options);
}

/// Scroll the container so the given date's cell is centered in the viewport
pub fn scroll_to_date(
    timeline: Timeline,
    container: &web_sys::Element,
    date: chrono::NaiveDate,
    animated: bool,
) {
    let viewport_width = container.client_width() as f64;
    let offset = timeline.scroll_offset_for(date, viewport_width);
    scroll_to_offset(container, offset, animated);
}
