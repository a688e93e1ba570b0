//! Virtual Window Math
//!
//! Pure index/pixel arithmetic for the date strip. No DOM access here,
//! so everything in this module is unit-testable.

use chrono::{Days, NaiveDate};

/// Default logical width of one day cell in pixels
pub const CELL_WIDTH_PX: f64 = 64.0;

/// Default number of extra off-screen cells kept rendered on each side
pub const BUFFER_CELLS: i64 = 30;

/// Fixed virtual timeline of calendar days
///
/// Every day between `start` and `end` (inclusive) occupies one cell of
/// `cell_width` pixels on a track that is never materialized in full.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timeline {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub cell_width: f64,
    pub buffer: i64,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(1900, 1, 1).expect("valid timeline start"),
            end: NaiveDate::from_ymd_opt(2100, 12, 31).expect("valid timeline end"),
            cell_width: CELL_WIDTH_PX,
            buffer: BUFFER_CELLS,
        }
    }
}

/// A contiguous rendered slice of the timeline
///
/// `offset_px` translates the slice to its true position on the track.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Window {
    pub first_index: i64,
    pub last_index: i64,
    pub offset_px: f64,
}

impl Window {
    /// Number of cells in the window
    pub fn len(&self) -> i64 {
        (self.last_index - self.first_index + 1).max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.last_index < self.first_index
    }
}

impl Timeline {
    /// Total number of days in the virtual timeline
    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Full track width in pixels
    pub fn track_width(&self) -> f64 {
        self.total_days() as f64 * self.cell_width
    }

    /// Cell index of a date, clamped into the timeline
    pub fn index_of(&self, date: NaiveDate) -> i64 {
        self.clamp_index((date - self.start).num_days())
    }

    /// Date at a cell index, clamped into the timeline
    pub fn date_at(&self, index: i64) -> NaiveDate {
        let clamped = self.clamp_index(index);
        self.start
            .checked_add_days(Days::new(clamped as u64))
            .unwrap_or(self.start)
    }

    /// Compute the rendered window for a scroll position
    ///
    /// Visible bounds are expanded by the buffer on each side and clamped
    /// into `[0, total_days - 1]`.
    pub fn visible_window(&self, scroll_left: f64, viewport_width: f64) -> Window {
        let first_visible = (scroll_left / self.cell_width).floor() as i64;
        let last_visible = ((scroll_left + viewport_width) / self.cell_width).ceil() as i64;

        let first_index = self.clamp_index(first_visible - self.buffer);
        let last_index = self.clamp_index(last_visible + self.buffer);

        Window {
            first_index,
            last_index,
            offset_px: first_index as f64 * self.cell_width,
        }
    }

    /// Dates of a window, in cell order
    pub fn dates(&self, window: Window) -> Vec<NaiveDate> {
        (window.first_index..=window.last_index)
            .map(|i| self.date_at(i))
            .collect()
    }

    /// Index of the cell under the horizontal center of the viewport
    pub fn center_index(&self, scroll_left: f64, viewport_width: f64) -> i64 {
        let center_px = scroll_left + viewport_width / 2.0;
        self.clamp_index((center_px / self.cell_width).floor() as i64)
    }

    /// Date under the horizontal center of the viewport
    pub fn center_date(&self, scroll_left: f64, viewport_width: f64) -> NaiveDate {
        self.date_at(self.center_index(scroll_left, viewport_width))
    }

    /// Scroll offset that centers the given date's cell in the viewport
    pub fn scroll_offset_for(&self, date: NaiveDate, viewport_width: f64) -> f64 {
        let index = self.index_of(date);
        let offset = index as f64 * self.cell_width - viewport_width / 2.0 + self.cell_width / 2.0;
        offset.max(0.0)
    }

    fn clamp_index(&self, index: i64) -> i64 {
        index.clamp(0, self.total_days() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_index_date_round_trip() {
        let tl = Timeline::default();
        assert_eq!(tl.index_of(date(1900, 1, 1)), 0);
        assert_eq!(tl.date_at(0), date(1900, 1, 1));
        assert_eq!(tl.date_at(tl.total_days() - 1), date(2100, 12, 31));

        let d = date(2024, 3, 15);
        assert_eq!(tl.date_at(tl.index_of(d)), d);
    }

    #[test]
    fn test_out_of_range_dates_clamp() {
        let tl = Timeline::default();
        assert_eq!(tl.index_of(date(1899, 12, 31)), 0);
        assert_eq!(tl.index_of(date(2101, 1, 1)), tl.total_days() - 1);
        assert_eq!(tl.date_at(-5), date(1900, 1, 1));
        assert_eq!(tl.date_at(i64::MAX), date(2100, 12, 31));
    }

    #[test]
    fn test_window_at_track_start_clamps_to_zero() {
        let tl = Timeline::default();
        let w = tl.visible_window(0.0, 640.0);
        assert_eq!(w.first_index, 0);
        // ceil(640 / 64) = 10 visible cells, plus the trailing buffer
        assert_eq!(w.last_index, 10 + BUFFER_CELLS);
        assert_eq!(w.offset_px, 0.0);
    }

    #[test]
    fn test_window_in_track_interior() {
        let tl = Timeline::default();
        let w = tl.visible_window(10_000.0, 640.0);
        assert_eq!(w.first_index, 156 - BUFFER_CELLS);
        assert_eq!(w.last_index, 167 + BUFFER_CELLS);
        assert_eq!(w.offset_px, w.first_index as f64 * CELL_WIDTH_PX);
    }

    #[test]
    fn test_window_at_track_end_clamps_to_last_index() {
        let tl = Timeline::default();
        let w = tl.visible_window(tl.track_width(), 640.0);
        assert_eq!(w.last_index, tl.total_days() - 1);
        assert!(w.first_index <= w.last_index);
    }

    #[test]
    fn test_window_is_contiguous_and_bounded() {
        let tl = Timeline::default();
        for scroll in [0.0, 333.0, 10_000.0, 1_000_000.0, tl.track_width() - 100.0] {
            let w = tl.visible_window(scroll, 640.0);
            let dates = tl.dates(w);
            assert_eq!(dates.len() as i64, w.len());
            for pair in dates.windows(2) {
                assert_eq!(pair[1] - pair[0], chrono::Duration::days(1));
            }
            // viewport cells + both buffers, plus the partial cell at each edge
            assert!(w.len() <= 10 + 2 * BUFFER_CELLS + 2);
            // the center date is always inside the rendered run
            let center = tl.center_index(scroll, 640.0);
            assert!(w.first_index <= center && center <= w.last_index);
        }
    }

    #[test]
    fn test_center_date_under_viewport_middle() {
        let tl = Timeline::default();
        let target = date(2024, 1, 1);
        let offset = tl.scroll_offset_for(target, 640.0);
        assert_eq!(tl.center_date(offset, 640.0), target);
    }

    #[test]
    fn test_scroll_offset_centers_target_cell() {
        let tl = Timeline::default();
        let target = date(2024, 1, 1);
        let diff_days = (target - date(1900, 1, 1)).num_days();
        let expected = diff_days as f64 * 64.0 - 320.0 + 32.0;
        assert_eq!(tl.scroll_offset_for(target, 640.0), expected);
    }

    #[test]
    fn test_scroll_offset_clamps_at_track_start() {
        let tl = Timeline::default();
        assert_eq!(tl.scroll_offset_for(date(1900, 1, 1), 640.0), 0.0);
    }
}
