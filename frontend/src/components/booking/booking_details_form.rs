use shared::{BookingForm, SlotStatus};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

const LEGEND: [SlotStatus; 3] = [SlotStatus::Booked, SlotStatus::Pending, SlotStatus::Unavailable];

#[derive(Properties, PartialEq)]
pub struct BookingDetailsFormProps {
    pub form: BookingForm,
    pub submit_text: String,
    pub on_name_change: Callback<String>,
    pub on_email_change: Callback<String>,
    pub on_message_change: Callback<String>,
}

/// Contact fields, status legend and the submit button.
///
/// Rendered inside the dialog's `<form>`, which owns the submit handler.
#[function_component(BookingDetailsForm)]
pub fn booking_details_form(props: &BookingDetailsFormProps) -> Html {
    let on_name_input = {
        let on_name_change = props.on_name_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_name_change.emit(input.value());
        })
    };

    let on_email_input = {
        let on_email_change = props.on_email_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_email_change.emit(input.value());
        })
    };

    let on_message_input = {
        let on_message_change = props.on_message_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_message_change.emit(input.value());
        })
    };

    html! {
        <>
            <div class="booking-contact-fields">
                <input
                    type="text"
                    placeholder="Your name"
                    value={props.form.name.clone()}
                    oninput={on_name_input}
                />
                <input
                    type="email"
                    placeholder="Your email"
                    value={props.form.email.clone()}
                    oninput={on_email_input}
                />
            </div>

            <textarea
                class="booking-message"
                placeholder="Additional message (optional)"
                value={props.form.message.clone()}
                oninput={on_message_input}
            />

            <div class="booking-footer">
                <div class="slot-legend">
                    {for LEGEND.iter().map(|status| html! {
                        <div class="legend-item">
                            <div class={classes!("legend-swatch", status.as_str())}></div>
                            <span>{status.label()}</span>
                        </div>
                    })}
                </div>

                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled={!props.form.can_submit()}
                >
                    {&props.submit_text}
                </button>
            </div>
        </>
    }
}
