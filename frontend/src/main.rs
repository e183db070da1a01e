use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{
    BioSection, BookingDialog, FloatingContactForm, HeroSection, ServicesGrid, TestimonialsCarousel,
};
use services::availability::SessionAvailability;
use services::date_utils;
use services::logging::Logger;
use services::page_config::load_landing_config;
use shared::{BookingRequest, ContactSubmission};

/// Serialize a submitted payload for the console; the page has no backend
fn log_payload<T: serde::Serialize>(component: &str, label: &str, payload: &T) {
    match serde_json::to_string(payload) {
        Ok(json) => Logger::info_with_component(component, &format!("{}: {}", label, json)),
        Err(e) => Logger::error_with_component(
            component,
            &format!("Could not serialize {}: {}", label, e),
        ),
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| load_landing_config());
    // Generated once per load; the dialog reads the clock itself for past days
    let availability = use_memo((), |_| SessionAvailability::generate(date_utils::today()));
    let booking_open = use_state(|| false);

    let on_cta_click = {
        let booking_open = booking_open.clone();
        Callback::from(move |_: ()| {
            Logger::debug_with_component("app", "Opening booking dialog");
            booking_open.set(true);
        })
    };

    let on_open_change = {
        let booking_open = booking_open.clone();
        Callback::from(move |open: bool| booking_open.set(open))
    };

    let on_booking = Callback::from(|request: BookingRequest| {
        log_payload("booking-dialog", "Booking requested", &request);
    });

    let on_contact = Callback::from(|submission: ContactSubmission| {
        log_payload("contact-form", "Contact form submitted", &submission);
    });

    html! {
        <div class="landing-page">
            <section id="hero">
                <HeroSection config={config.hero.clone()} on_cta_click={Some(on_cta_click)} />
            </section>
            <section id="about">
                <BioSection config={config.bio.clone()} />
            </section>
            <section id="services">
                <ServicesGrid config={config.services.clone()} />
            </section>
            <section id="testimonials">
                <TestimonialsCarousel config={config.testimonials.clone()} />
            </section>

            <FloatingContactForm config={config.contact.clone()} on_submit={Some(on_contact)} />

            <BookingDialog
                open={*booking_open}
                {on_open_change}
                {on_booking}
                availability={(*availability).clone()}
                config={config.booking.clone()}
            />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
