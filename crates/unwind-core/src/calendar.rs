//! Month grid for the progress screen.
//!
//! A grid is always six Sunday-first weeks (42 cells): the tail of the
//! previous month, every day of the displayed month, then the head of the
//! next month.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const GRID_CELLS: usize = 42;
pub const DAYS_PER_WEEK: usize = 7;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Sunday-first column headers.
pub const WEEKDAY_HEADERS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthDirection {
    Prev,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CalendarView {
    Week,
    #[default]
    Month,
}

/// The month shown on the progress screen. `month` is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MonthSpec", into = "MonthSpec")]
pub struct DisplayedMonth {
    first: NaiveDate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct MonthSpec {
    year: i32,
    month: u32,
}

impl TryFrom<MonthSpec> for DisplayedMonth {
    type Error = String;

    fn try_from(spec: MonthSpec) -> Result<Self, Self::Error> {
        Self::new(spec.year, spec.month)
            .ok_or_else(|| format!("invalid month {}/{}", spec.year, spec.month))
    }
}

impl From<DisplayedMonth> for MonthSpec {
    fn from(value: DisplayedMonth) -> Self {
        Self {
            year: value.year(),
            month: value.month(),
        }
    }
}

impl DisplayedMonth {
    /// `None` if `month > 11` or the year is outside chrono's range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if month > 11 {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month + 1, 1).map(|first| Self { first })
    }

    pub fn today() -> Self {
        let today = Local::now().date_naive();
        Self {
            first: today.with_day(1).unwrap_or(today),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 0-based month.
    pub fn month(&self) -> u32 {
        self.first.month0()
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.month() as usize]
    }

    pub fn days(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Weekday of day 1, 0 = Sunday.
    pub fn first_weekday(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month0() == self.month()
    }

    /// Step one month, wrapping the year. At the edge of the representable
    /// range the month is left as is.
    pub fn navigate(&self, direction: MonthDirection) -> Self {
        let (year, month) = match (direction, self.month()) {
            (MonthDirection::Prev, 0) => (self.year() - 1, 11),
            (MonthDirection::Prev, m) => (self.year(), m - 1),
            (MonthDirection::Next, 11) => (self.year() + 1, 0),
            (MonthDirection::Next, m) => (self.year(), m + 1),
        };
        Self::new(year, month).unwrap_or(*self)
    }
}

impl std::fmt::Display for DisplayedMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name(), self.year())
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Day count for a 0-based month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 if is_leap_year(year) => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    pub day: u32,
    pub in_month: bool,
    pub active: bool,
}

impl CalendarCell {
    fn outside(day: u32) -> Self {
        Self {
            day,
            in_month: false,
            active: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    cells: Vec<CalendarCell>,
}

impl CalendarGrid {
    /// Build the 42-cell grid. Only days of the displayed month can be
    /// active; numbers in `active_days` outside it are ignored.
    pub fn generate(displayed: DisplayedMonth, active_days: &BTreeSet<u32>) -> Self {
        let leading = displayed.first_weekday();
        let prev = displayed.navigate(MonthDirection::Prev);
        let days_in_prev = if prev == displayed {
            // No representable previous month; fall back to plain arithmetic.
            let year = displayed.year() - i32::from(displayed.month() == 0);
            days_in_month(year, (displayed.month() + 11) % 12)
        } else {
            prev.days()
        };

        let mut cells = Vec::with_capacity(GRID_CELLS);
        cells.extend((0..leading).map(|i| CalendarCell::outside(days_in_prev - leading + 1 + i)));
        cells.extend((1..=displayed.days()).map(|day| CalendarCell {
            day,
            in_month: true,
            active: active_days.contains(&day),
        }));
        let trailing = GRID_CELLS - cells.len();
        cells.extend((1..=trailing as u32).map(CalendarCell::outside));

        Self { cells }
    }

    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// The row holding `day` of the displayed month.
    pub fn week_containing(&self, day: u32) -> Option<&[CalendarCell]> {
        self.weeks()
            .find(|week| week.iter().any(|cell| cell.in_month && cell.day == day))
    }

    pub fn leading_count(&self) -> usize {
        self.cells.iter().take_while(|cell| !cell.in_month).count()
    }

    pub fn in_month_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.in_month).count()
    }

    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.active).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(year: i32, month: u32) -> DisplayedMonth {
        DisplayedMonth::new(year, month).unwrap()
    }

    fn grid(year: i32, m: u32) -> CalendarGrid {
        CalendarGrid::generate(month(year, m), &BTreeSet::new())
    }

    #[test]
    fn test_always_forty_two_cells() {
        for year in [1900, 1999, 2000, 2024, 2025, 2028, 2100] {
            for m in 0..12 {
                assert_eq!(grid(year, m).cells().len(), GRID_CELLS, "{year}-{m}");
            }
        }
    }

    #[test]
    fn test_in_month_count_matches_month_length() {
        assert_eq!(grid(2025, 1).in_month_count(), 28);
        assert_eq!(grid(2028, 1).in_month_count(), 29);
        assert_eq!(grid(2000, 1).in_month_count(), 29);
        assert_eq!(grid(1900, 1).in_month_count(), 28);
        assert_eq!(grid(2025, 0).in_month_count(), 31);
        assert_eq!(grid(2025, 8).in_month_count(), 30);
    }

    #[test]
    fn test_grid_agrees_with_chrono_for_every_month() {
        for year in 1800..=2400 {
            for m in 0..12 {
                let first = NaiveDate::from_ymd_opt(year, m + 1, 1).unwrap();
                let next_first = if m == 11 {
                    NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
                } else {
                    NaiveDate::from_ymd_opt(year, m + 2, 1).unwrap()
                };
                let length = (next_first - first).num_days() as usize;

                let g = grid(year, m);
                assert_eq!(
                    g.leading_count(),
                    first.weekday().num_days_from_sunday() as usize,
                    "{year}-{m}"
                );
                assert_eq!(g.in_month_count(), length, "{year}-{m}");
                assert_eq!(days_in_month(year, m) as usize, length, "{year}-{m}");
                assert_eq!(g.cells().len(), GRID_CELLS);
            }
        }
    }

    #[test]
    fn test_leading_cells_follow_first_weekday() {
        // 2025-09-01 is a Monday.
        let september = grid(2025, 8);
        assert_eq!(september.leading_count(), 1);
        assert_eq!(september.cells()[0], CalendarCell::outside(31));
        assert_eq!(september.cells()[1].day, 1);

        // 2026-02-01 is a Sunday: no leading cells.
        assert_eq!(grid(2026, 1).leading_count(), 0);

        // 2025-11-01 is a Saturday.
        let november = grid(2025, 10);
        assert_eq!(november.leading_count(), 6);
        let leading: Vec<u32> = november.cells()[..6].iter().map(|c| c.day).collect();
        assert_eq!(leading, vec![26, 27, 28, 29, 30, 31]);
    }

    #[test]
    fn test_january_leading_days_come_from_december() {
        // 2025-01-01 is a Wednesday.
        let january = grid(2025, 0);
        let leading: Vec<u32> = january.cells()[..3].iter().map(|c| c.day).collect();
        assert_eq!(leading, vec![29, 30, 31]);
    }

    #[test]
    fn test_march_leading_days_respect_leap_february() {
        // 2028-03-01 is a Wednesday; February 2028 has 29 days.
        let march = grid(2028, 2);
        let leading: Vec<u32> = march.cells()[..3].iter().map(|c| c.day).collect();
        assert_eq!(leading, vec![27, 28, 29]);
    }

    #[test]
    fn test_trailing_cells_count_up_from_one() {
        let september = grid(2025, 8);
        let trailing: Vec<_> = september.cells()[31..].to_vec();
        assert_eq!(trailing.len(), 11);
        for (i, cell) in trailing.iter().enumerate() {
            assert_eq!(cell.day, i as u32 + 1);
            assert!(!cell.in_month && !cell.active);
        }
    }

    #[test]
    fn test_active_days_only_mark_displayed_month() {
        let active: BTreeSet<u32> = [1, 18, 30, 31].into_iter().collect();
        let g = CalendarGrid::generate(month(2025, 8), &active);

        // September has no 31st; the leading "31" is August's.
        assert_eq!(g.active_count(), 3);
        assert!(!g.cells()[0].active);
        assert!(g.cells().iter().filter(|c| c.active).all(|c| c.in_month));
    }

    #[test]
    fn test_navigate_wraps_year() {
        assert_eq!(month(2025, 0).navigate(MonthDirection::Prev), month(2024, 11));
        assert_eq!(month(2025, 11).navigate(MonthDirection::Next), month(2026, 0));
        assert_eq!(month(2025, 5).navigate(MonthDirection::Next), month(2025, 6));
    }

    #[test]
    fn test_rejects_out_of_range_month() {
        assert!(DisplayedMonth::new(2025, 12).is_none());
        assert!(DisplayedMonth::new(2025, 11).is_some());
    }

    #[test]
    fn test_week_containing() {
        let september = grid(2025, 8);
        let week = september.week_containing(1).unwrap();
        assert_eq!(week.iter().map(|c| c.day).collect::<Vec<_>>(), vec![31, 1, 2, 3, 4, 5, 6]);
        assert!(september.week_containing(31).is_none());
        assert_eq!(september.weeks().count(), 6);
    }

    #[test]
    fn test_display_and_serde() {
        let m = month(2025, 8);
        assert_eq!(m.to_string(), "September 2025");

        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"year":2025,"month":8}"#);
        let back: DisplayedMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
        assert!(serde_json::from_str::<DisplayedMonth>(r#"{"year":2025,"month":12}"#).is_err());
    }
}
