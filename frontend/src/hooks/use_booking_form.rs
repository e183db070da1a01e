use shared::{BookingForm, DateKey, SlotTime};
use yew::prelude::*;

pub struct UseBookingFormResult {
    pub form: BookingForm,
    pub actions: UseBookingFormActions,
}

#[derive(Clone)]
pub struct UseBookingFormActions {
    pub select_slot: Callback<(DateKey, SlotTime)>,
    pub set_name: Callback<String>,
    pub set_email: Callback<String>,
    pub set_message: Callback<String>,
    pub reset: Callback<()>,
}

/// Field state for the booking dialog
#[hook]
pub fn use_booking_form() -> UseBookingFormResult {
    let form = use_state(BookingForm::default);

    let update = {
        let form = form.clone();
        move |apply: fn(&mut BookingForm, String)| {
            let form = form.clone();
            Callback::from(move |value: String| {
                let mut updated = (*form).clone();
                apply(&mut updated, value);
                form.set(updated);
            })
        }
    };

    let select_slot = {
        let form = form.clone();
        Callback::from(move |(date, time): (DateKey, SlotTime)| {
            let mut updated = (*form).clone();
            updated.select_slot(date, time);
            form.set(updated);
        })
    };

    let reset = {
        let form = form.clone();
        Callback::from(move |_| form.set(BookingForm::default()))
    };

    let actions = UseBookingFormActions {
        select_slot,
        set_name: update(|form, value| form.name = value),
        set_email: update(|form, value| form.email = value),
        set_message: update(|form, value| form.message = value),
        reset,
    };

    UseBookingFormResult {
        form: (*form).clone(),
        actions,
    }
}
