//! Goal Period Resolution
//!
//! Maps a period-type selection and the editor's anchor state to a concrete
//! inclusive [start, end] date range. Pure functions; the goal editor calls
//! these on every anchor or period-type change.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::PeriodType;

/// Anchor state collected by the goal editor
///
/// Only the fields relevant to the active period type are consulted:
/// `anchor_date` for daily/weekly, `year`/`month` for monthly,
/// `year` for yearly, and the range pair for free.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeriodAnchor {
    pub year: i32,
    pub month: u32,
    pub anchor_date: Option<NaiveDate>,
    pub range_start: Option<NaiveDate>,
    pub range_end: Option<NaiveDate>,
}

impl PeriodAnchor {
    pub fn for_month(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            anchor_date: None,
            range_start: None,
            range_end: None,
        }
    }
}

/// Resolved inclusive range; `(None, None)` means "incomplete, cannot save"
pub type ResolvedRange = (Option<NaiveDate>, Option<NaiveDate>);

/// Resolve the anchor state into a concrete date range
///
/// Never panics: missing or invalid anchor state yields `(None, None)`.
/// Idempotent; identical inputs produce identical outputs.
pub fn resolve(period_type: PeriodType, anchor: &PeriodAnchor) -> ResolvedRange {
    match period_type {
        PeriodType::Daily => match anchor.anchor_date {
            Some(d) => (Some(d), Some(d)),
            None => (None, None),
        },
        PeriodType::Weekly => match anchor.anchor_date {
            Some(d) => week_of(d),
            None => (None, None),
        },
        PeriodType::Monthly => month_range(anchor.year, anchor.month),
        PeriodType::Yearly => year_range(anchor.year),
        PeriodType::Free => match (anchor.range_start, anchor.range_end) {
            (Some(a), Some(b)) => (Some(a.min(b)), Some(a.max(b))),
            _ => (None, None),
        },
    }
}

/// Monday-through-Sunday week containing the given date
fn week_of(date: NaiveDate) -> ResolvedRange {
    let monday = date - Days::new(u64::from(date.weekday().num_days_from_monday()));
    let sunday = monday + Days::new(6);
    (Some(monday), Some(sunday))
}

/// First through last calendar day of the month
///
/// The last day is day 0 of the next month, so leap-year February is correct.
fn month_range(year: i32, month: u32) -> ResolvedRange {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return (None, None);
    };
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1).and_then(|d| d.pred_opt());
    match last {
        Some(last) => (Some(first), Some(last)),
        None => (None, None),
    }
}

/// Jan 1 through Dec 31 of the year
fn year_range(year: i32) -> ResolvedRange {
    let first = NaiveDate::from_ymd_opt(year, 1, 1);
    let last = NaiveDate::from_ymd_opt(year, 12, 31);
    match (first, last) {
        (Some(first), Some(last)) => (Some(first), Some(last)),
        _ => (None, None),
    }
}

/// Apply one click of the two-click free range selection
///
/// First click sets the start and clears the end; the second click sets the
/// end, swapping when it precedes the start chronologically. A third click
/// starts a fresh selection.
pub fn free_range_click(
    current: (Option<NaiveDate>, Option<NaiveDate>),
    clicked: NaiveDate,
) -> (Option<NaiveDate>, Option<NaiveDate>) {
    match current {
        (Some(start), None) => {
            if clicked < start {
                (Some(clicked), Some(start))
            } else {
                (Some(start), Some(clicked))
            }
        }
        _ => (Some(clicked), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn anchor_on(d: NaiveDate) -> PeriodAnchor {
        PeriodAnchor {
            year: d.year(),
            month: d.month(),
            anchor_date: Some(d),
            range_start: None,
            range_end: None,
        }
    }

    #[test]
    fn test_daily_range_is_the_anchor_itself() {
        let d = date(2024, 3, 15);
        assert_eq!(
            resolve(PeriodType::Daily, &anchor_on(d)),
            (Some(d), Some(d))
        );
    }

    #[test]
    fn test_weekly_range_from_friday_anchor() {
        // 2024-03-15 is a Friday
        let resolved = resolve(PeriodType::Weekly, &anchor_on(date(2024, 3, 15)));
        assert_eq!(resolved, (Some(date(2024, 3, 11)), Some(date(2024, 3, 17))));
    }

    #[test]
    fn test_weekly_anchor_on_monday_starts_the_week() {
        let monday = date(2024, 3, 11);
        let (start, end) = resolve(PeriodType::Weekly, &anchor_on(monday));
        assert_eq!(start, Some(monday));
        assert_eq!(end, Some(date(2024, 3, 17)));
    }

    #[test]
    fn test_weekly_range_contains_anchor() {
        for day in 1..=28 {
            let d = date(2024, 3, day);
            let (start, end) = resolve(PeriodType::Weekly, &anchor_on(d));
            let (start, end) = (start.unwrap(), end.unwrap());
            assert_eq!(start.weekday(), chrono::Weekday::Mon);
            assert_eq!(end.weekday(), chrono::Weekday::Sun);
            assert_eq!((end - start).num_days(), 6);
            assert!(start <= d && d <= end);
        }
    }

    #[test]
    fn test_monthly_range_leap_february() {
        let resolved = resolve(PeriodType::Monthly, &PeriodAnchor::for_month(2024, 2));
        assert_eq!(resolved, (Some(date(2024, 2, 1)), Some(date(2024, 2, 29))));
    }

    #[test]
    fn test_monthly_range_december_wraps_year() {
        let resolved = resolve(PeriodType::Monthly, &PeriodAnchor::for_month(2023, 12));
        assert_eq!(resolved, (Some(date(2023, 12, 1)), Some(date(2023, 12, 31))));
    }

    #[test]
    fn test_monthly_invalid_month_is_incomplete() {
        let resolved = resolve(PeriodType::Monthly, &PeriodAnchor::for_month(2024, 13));
        assert_eq!(resolved, (None, None));
    }

    #[test]
    fn test_yearly_range() {
        let resolved = resolve(PeriodType::Yearly, &PeriodAnchor::for_month(2025, 6));
        assert_eq!(resolved, (Some(date(2025, 1, 1)), Some(date(2025, 12, 31))));
    }

    #[test]
    fn test_free_orders_range_either_way() {
        let mut anchor = PeriodAnchor::for_month(2024, 3);
        anchor.range_start = Some(date(2024, 3, 20));
        anchor.range_end = Some(date(2024, 3, 5));
        let (start, end) = resolve(PeriodType::Free, &anchor);
        assert_eq!(start, Some(date(2024, 3, 5)));
        assert_eq!(end, Some(date(2024, 3, 20)));
        assert!(start <= end);
    }

    #[test]
    fn test_missing_anchor_yields_incomplete_range() {
        let anchor = PeriodAnchor::for_month(2024, 3);
        assert_eq!(resolve(PeriodType::Daily, &anchor), (None, None));
        assert_eq!(resolve(PeriodType::Weekly, &anchor), (None, None));
        assert_eq!(resolve(PeriodType::Free, &anchor), (None, None));
    }

    #[test]
    fn test_resolver_is_idempotent() {
        let anchor = anchor_on(date(2024, 3, 15));
        for period_type in PeriodType::ALL {
            assert_eq!(
                resolve(period_type, &anchor),
                resolve(period_type, &anchor)
            );
        }
    }

    #[test]
    fn test_free_range_two_click_selection() {
        let d1 = date(2024, 3, 10);
        let d2 = date(2024, 3, 4);

        let first = free_range_click((None, None), d1);
        assert_eq!(first, (Some(d1), None));

        // second click before the first swaps the pair
        let second = free_range_click(first, d2);
        assert_eq!(second, (Some(d2), Some(d1)));

        // a third click starts over
        let third = free_range_click(second, d1);
        assert_eq!(third, (Some(d1), None));
    }
}
