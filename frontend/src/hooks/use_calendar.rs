use crate::services::date_utils;
use crate::services::logging::Logger;
use shared::{CalendarNavigator, DateKey, MonthCursor};
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct CalendarState {
    pub displayed: MonthCursor,
    pub can_go_previous: bool,
}

pub struct UseCalendarResult {
    pub state: CalendarState,
    pub actions: UseCalendarActions,
}

#[derive(Clone)]
pub struct UseCalendarActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
}

/// Month navigation for the booking calendar, starting at the month of `today`.
///
/// `today` is re-read on every render and again on each click, so the floor
/// moves forward when the page stays open past the end of a month.
#[hook]
pub fn use_calendar(today: DateKey) -> UseCalendarResult {
    let navigator = use_state(|| CalendarNavigator::starting_at(today));
    let mut current = *navigator;
    current.set_today(today);

    let prev_month = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let mut updated = *navigator;
            updated.set_today(date_utils::today());
            if !updated.can_go_previous() {
                navigator.set(updated);
                Logger::debug_with_component("booking-calendar", "Already at the current month");
                return;
            }
            let shown = updated.previous_month();
            navigator.set(updated);
            Logger::debug_with_component("booking-calendar", &format!("Showing {}", shown.label()));
        })
    };

    let next_month = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let mut updated = *navigator;
            updated.set_today(date_utils::today());
            let shown = updated.next_month();
            navigator.set(updated);
            Logger::debug_with_component("booking-calendar", &format!("Showing {}", shown.label()));
        })
    };

    let state = CalendarState {
        displayed: current.displayed(),
        can_go_previous: current.can_go_previous(),
    };

    let actions = UseCalendarActions {
        prev_month,
        next_month,
    };

    UseCalendarResult { state, actions }
}
