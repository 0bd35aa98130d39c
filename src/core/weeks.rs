//! Partitioning of a month into ISO weeks with per-day holiday assignment.
//!
//! A month is displayed as whole Monday..Sunday weeks, starting with the week
//! that contains the 1st and ending with the week that contains the last day.
//! Days borrowed from the neighbouring months are kept, flagged with
//! `is_in_month = false`.

use crate::domain::model::{Day, Holiday, MonthView, QuarterView, Week, WeekColor};
use chrono::{Datelike, Days, Months, NaiveDate};
use std::collections::HashSet;

static QUARTERS: [[u32; 3]; 4] = [[1, 2, 3], [4, 5, 6], [7, 8, 9], [10, 11, 12]];

/// Calendar bounds of a month and of the ISO weeks that cover it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
    /// Monday of the week containing `first_day`.
    pub grid_start: NaiveDate,
    /// Sunday of the week containing `last_day`.
    pub grid_end: NaiveDate,
}

impl MonthRange {
    /// `None` when `year`/`month` do not name a representable month.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)?;
        let last_day = first_day
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())?;

        let lead = u64::from(first_day.weekday().num_days_from_monday());
        let trail = 6 - u64::from(last_day.weekday().num_days_from_monday());

        Some(Self {
            first_day,
            last_day,
            grid_start: first_day.checked_sub_days(Days::new(lead))?,
            grid_end: last_day.checked_add_days(Days::new(trail))?,
        })
    }

    /// Mondays of every displayed week, in order.
    pub fn week_starts(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let mut cursor = Some(self.grid_start);
        std::iter::from_fn(move || {
            let current = cursor.filter(|c| *c <= self.last_day)?;
            cursor = current.checked_add_days(Days::new(7));
            Some(current)
        })
    }
}

/// Holidays dated on `month`, in input order.
pub fn filter_month(holidays: &[Holiday], month: u32) -> Vec<Holiday> {
    holidays
        .iter()
        .filter(|holiday| holiday.date.month() == month)
        .cloned()
        .collect()
}

/// Months of a quarter; empty for anything outside 1..=4.
pub fn quarter_months(quarter: u32) -> &'static [u32] {
    match quarter {
        1..=4 => &QUARTERS[(quarter - 1) as usize],
        _ => &[],
    }
}

/// Keeps the first holiday seen for each date.
pub fn dedup_by_date<'a, I>(holidays: I) -> Vec<Holiday>
where
    I: IntoIterator<Item = &'a Holiday>,
{
    let mut seen = HashSet::new();
    holidays
        .into_iter()
        .filter(|holiday| seen.insert(holiday.date))
        .cloned()
        .collect()
}

fn build_day(date: NaiveDate, month: u32, holidays: &[Holiday]) -> Day {
    Day {
        date,
        day_of_week: date.format("%A").to_string(),
        is_in_month: date.month() == month,
        holidays: holidays
            .iter()
            .filter(|holiday| holiday.date == date)
            .cloned()
            .collect(),
    }
}

fn build_week(monday: NaiveDate, month: u32, holidays: &[Holiday]) -> Week {
    let days: Vec<Day> = monday
        .iter_days()
        .take(7)
        .map(|date| build_day(date, month, holidays))
        .collect();

    let week_holidays = dedup_by_date(days.iter().flat_map(|day| day.holidays.iter()));
    let holiday_count = week_holidays.len();

    Week {
        week_number: monday.iso_week().week(),
        start_date: monday,
        end_date: days.last().map(|day| day.date).unwrap_or(monday),
        days,
        holidays: week_holidays,
        holiday_count,
        week_color: WeekColor::classify(holiday_count),
    }
}

/// Builds the week grid of `month` and attaches `holidays` to their days.
///
/// `holidays` is expected to be pre-filtered to the month by the caller; it is
/// passed through unchanged as `MonthView::holidays`, and `total_holidays`
/// counts it as given, duplicates included.
pub fn build_month_view(holidays: &[Holiday], year: i32, month: u32) -> MonthView {
    let (month_name, weeks) = match MonthRange::new(year, month) {
        Some(range) => (
            range.first_day.format("%B").to_string(),
            range
                .week_starts()
                .map(|monday| build_week(monday, month, holidays))
                .collect(),
        ),
        None => {
            tracing::debug!(year, month, "not a calendar month, returning empty view");
            (String::new(), Vec::new())
        }
    };

    MonthView {
        year,
        month,
        month_name,
        total_holidays: holidays.len(),
        holidays: holidays.to_vec(),
        weeks,
    }
}

pub fn build_quarter_view(holidays: &[Holiday], year: i32, quarter: u32) -> QuarterView {
    let months = quarter_months(quarter);
    let quarter_holidays: Vec<Holiday> = holidays
        .iter()
        .filter(|holiday| months.contains(&holiday.date.month()))
        .cloned()
        .collect();

    QuarterView {
        quarter,
        year,
        months: months
            .iter()
            .map(|&month| build_month_view(&filter_month(&quarter_holidays, month), year, month))
            .collect(),
    }
}
