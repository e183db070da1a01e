use super::booking_details_form::BookingDetailsForm;
use super::day_cell::DayCell;
use crate::hooks::use_booking_form::use_booking_form;
use crate::hooks::use_calendar::use_calendar;
use crate::services::availability::SessionAvailability;
use crate::services::date_utils;
use crate::services::logging::Logger;
use gloo::events::EventListener;
use shared::{build_month_view, BookingConfig, BookingRequest};
use wasm_bindgen::JsCast;
use yew::prelude::*;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Properties, PartialEq)]
pub struct BookingDialogProps {
    pub open: bool,
    pub on_open_change: Callback<bool>,
    pub on_booking: Callback<BookingRequest>,
    pub availability: SessionAvailability,
    #[prop_or_default]
    pub config: BookingConfig,
}

/// Keys that close the dialog
fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Modal month calendar with per-day time slots and the visitor's details.
///
/// Closes on the ✕ button, a click on the backdrop, Escape, or a
/// successful submit.
#[function_component(BookingDialog)]
pub fn booking_dialog(props: &BookingDialogProps) -> Html {
    // Read on every render so past days stay current on a long-open page
    let today = date_utils::today();
    let calendar = use_calendar(today);
    let booking = use_booking_form();

    let month_view = {
        let availability = props.availability.clone();
        use_memo(
            (
                calendar.state.displayed,
                booking.form.selection,
                today,
                availability,
            ),
            |(displayed, selection, today, availability)| {
                build_month_view(*displayed, *today, selection, availability.provider())
            },
        )
    };

    // Escape closes the dialog while it is open
    {
        let on_open_change = props.on_open_change.clone();
        use_effect_with(props.open, move |open| {
            let listener = if *open {
                web_sys::window().map(|window| {
                    EventListener::new(&window, "keydown", move |event| {
                        let key = event.dyn_ref::<KeyboardEvent>().map(|event| event.key());
                        if key.as_deref().is_some_and(is_dismiss_key) {
                            on_open_change.emit(false);
                        }
                    })
                })
            } else {
                None
            };

            move || drop(listener)
        });
    }

    let on_close = {
        let on_open_change = props.on_open_change.clone();
        Callback::from(move |_: MouseEvent| on_open_change.emit(false))
    };

    let on_dialog_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_submit = {
        let form = booking.form.clone();
        let reset = booking.actions.reset.clone();
        let on_booking = props.on_booking.clone();
        let on_open_change = props.on_open_change.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.submit_on(date_utils::today()) {
                Ok(request) => {
                    on_booking.emit(request);
                    reset.emit(());
                    on_open_change.emit(false);
                }
                Err(err) => {
                    Logger::warn_with_component(
                        "booking-dialog",
                        &format!("Booking not sent: {}", err),
                    );
                }
            }
        })
    };

    if !props.open {
        return html! {};
    }

    html! {
        <div class="modal-overlay" onclick={on_close.clone()}>
            <div
                class="modal-content booking-dialog"
                role="dialog"
                aria-modal="true"
                onclick={on_dialog_click}
            >
                <div class="modal-header">
                    <h2>{&props.config.title}</h2>
                    <button type="button" class="modal-close" aria-label="Close" onclick={on_close}>
                        {"✕"}
                    </button>
                </div>

                <form onsubmit={on_submit}>
                    <div class="calendar-header">
                        <button
                            type="button"
                            class="nav-button"
                            aria-label="Previous month"
                            disabled={!calendar.state.can_go_previous}
                            onclick={calendar.actions.prev_month.clone()}
                        >
                            {"‹"}
                        </button>
                        <h3>{&month_view.label}</h3>
                        <button
                            type="button"
                            class="nav-button"
                            aria-label="Next month"
                            onclick={calendar.actions.next_month.clone()}
                        >
                            {"›"}
                        </button>
                    </div>

                    <div class="calendar-grid">
                        {for WEEKDAYS.iter().map(|day| html! {
                            <div class="calendar-weekday">{*day}</div>
                        })}
                        {for (0..month_view.leading_blanks).map(|_| html! {
                            <div class="calendar-day empty"></div>
                        })}
                        {for month_view.days.iter().map(|day| html! {
                            <DayCell
                                key={day.date.to_string()}
                                day={day.clone()}
                                on_select={booking.actions.select_slot.clone()}
                            />
                        })}
                    </div>

                    <BookingDetailsForm
                        form={booking.form.clone()}
                        submit_text={props.config.submit_text.clone()}
                        on_name_change={booking.actions.set_name.clone()}
                        on_email_change={booking.actions.set_email.clone()}
                        on_message_change={booking.actions.set_message.clone()}
                    />
                </form>
            </div>
        </div>
    }
}
