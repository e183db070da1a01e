//! Month calculations for the booking calendar.
//!
//! The calendar only ever shows whole months. Navigation moves one month at
//! a time and refuses to step back past the month containing "today".

use crate::booking::BookingSelection;
use crate::date_key::DateKey;
use crate::slot_picker::{day_slots, SlotView};
use crate::slots::AvailabilityProvider;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A year/month pair identifying the displayed month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthCursor {
    pub year: i32,
    /// 1-based
    pub month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month containing `date`
    pub fn containing(date: DateKey) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> DateKey {
        DateKey::new(self.first_naive())
    }

    pub fn last_day(&self) -> DateKey {
        self.first_day().add_days(i64::from(self.days_in_month()) - 1)
    }

    pub fn days_in_month(&self) -> u32 {
        match self.month {
            2 => {
                if is_leap_year(self.year) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Weekday of the 1st (0 = Sunday, 1 = Monday, etc.)
    pub fn first_day_of_week(&self) -> u32 {
        self.first_naive().weekday().num_days_from_sunday()
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    /// Every day of the month, first through last inclusive
    pub fn days(&self) -> Vec<DateKey> {
        let first = self.first_day();
        (0..self.days_in_month())
            .map(|offset| first.add_days(i64::from(offset)))
            .collect()
    }

    /// Header label, e.g. "October 2026"
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }

    fn first_naive(&self) -> NaiveDate {
        // month is validated on construction, day 1 always exists
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn month_name(month: u32) -> &'static str {
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
        12 => "December",
        _ => "Invalid Month",
    }
}

/// Short day label used on calendar cells, e.g. "Mon, Oct 19"
pub fn day_label(date: DateKey) -> String {
    date.date().format("%a, %b %-d").to_string()
}

/// Displayed month plus the floor it may not navigate below
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarNavigator {
    displayed: MonthCursor,
    earliest: MonthCursor,
}

impl CalendarNavigator {
    /// Start on the month containing `today`, which is also the floor
    pub fn starting_at(today: DateKey) -> Self {
        let month = MonthCursor::containing(today);
        Self {
            displayed: month,
            earliest: month,
        }
    }

    pub fn displayed(&self) -> MonthCursor {
        self.displayed
    }

    /// Move the floor to the month containing `today`. A displayed month
    /// that now lies before the floor is pulled up to it.
    pub fn set_today(&mut self, today: DateKey) {
        self.earliest = MonthCursor::containing(today);
        if self.displayed < self.earliest {
            self.displayed = self.earliest;
        }
    }

    pub fn can_go_previous(&self) -> bool {
        self.displayed.previous() >= self.earliest
    }

    pub fn next_month(&mut self) -> MonthCursor {
        self.displayed = self.displayed.next();
        self.displayed
    }

    /// Step back one month. No-op at the floor.
    pub fn previous_month(&mut self) -> MonthCursor {
        if self.can_go_previous() {
            self.displayed = self.displayed.previous();
        }
        self.displayed
    }
}

/// Rendering state for one calendar cell
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDayView {
    pub date: DateKey,
    pub label: String,
    pub is_past: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub has_available_slots: bool,
    pub slots: Vec<SlotView>,
}

impl CalendarDayView {
    /// CSS classes for the cell. Past days are not also marked as
    /// fully-booked, matching how the cell is de-emphasized.
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["calendar-day"];
        if self.is_past {
            classes.push("past");
        }
        if self.is_today {
            classes.push("today");
        }
        if self.is_selected {
            classes.push("selected");
        }
        if !self.has_available_slots && !self.is_past {
            classes.push("fully-booked");
        }
        classes
    }
}

/// Everything the booking calendar needs to render one month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthView {
    pub month: MonthCursor,
    pub label: String,
    /// Empty cells before the 1st so weekdays line up
    pub leading_blanks: u32,
    pub days: Vec<CalendarDayView>,
}

/// Build the month view, merging availability for each day.
///
/// `today` decides which days are past; a day equal to `today` is not past.
pub fn build_month_view<P: AvailabilityProvider + ?Sized>(
    month: MonthCursor,
    today: DateKey,
    selection: &BookingSelection,
    provider: &P,
) -> MonthView {
    let days = month
        .days()
        .into_iter()
        .map(|date| {
            let is_past = date < today;
            let slots = day_slots(date, is_past, selection, provider);
            let has_available_slots = slots.iter().any(|view| view.slot.is_available());

            CalendarDayView {
                date,
                label: day_label(date),
                is_past,
                is_today: date == today,
                is_selected: selection.date == Some(date),
                has_available_slots,
                slots,
            }
        })
        .collect();

    MonthView {
        month,
        label: month.label(),
        leading_blanks: month.first_day_of_week(),
        days,
    }
}
