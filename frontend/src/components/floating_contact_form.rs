use crate::hooks::use_contact_widget::use_contact_widget;
use crate::services::logging::Logger;
use shared::{ContactConfig, ContactField, ContactForm, ContactSubmission};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FloatingContactFormProps {
    #[prop_or_default]
    pub config: ContactConfig,
    #[prop_or_default]
    pub on_submit: Option<Callback<ContactSubmission>>,
}

/// Contact card pinned to the bottom-right corner.
///
/// Collapses to a chat button when dismissed; the dismissal is remembered
/// for a week.
#[function_component(FloatingContactForm)]
pub fn floating_contact_form(props: &FloatingContactFormProps) -> Html {
    let widget = use_contact_widget(props.config.is_open);
    let form = use_state(ContactForm::default);

    let on_field = |field: ContactField| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut updated = (*form).clone();
            updated.update(field, value);
            form.set(updated);
        })
    };

    let on_name_input = {
        let on_change = on_field(ContactField::Name);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    let on_email_input = {
        let on_change = on_field(ContactField::Email);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    let on_message_input = {
        let on_change = on_field(ContactField::Message);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    let on_submit = {
        let form = form.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let submission = form.submit();
            match &on_submit {
                Some(callback) => callback.emit(submission),
                None => Logger::info_with_component(
                    "contact-form",
                    &format!("Contact form submitted by {:?}", submission.name),
                ),
            }
        })
    };

    let on_schedule = {
        let url = props.config.scheduling_url.clone();
        Callback::from(move |_: MouseEvent| {
            let opened = web_sys::window()
                .map(|window| window.open_with_url_and_target(&url, "_blank"));
            if !matches!(opened, Some(Ok(_))) {
                Logger::warn_with_component("contact-form", &format!("Could not open {}", url));
            }
        })
    };

    if !widget.expanded {
        return html! {
            <div class="floating-contact">
                <button
                    type="button"
                    class="floating-contact-toggle"
                    aria-label="Open contact form"
                    onclick={widget.expand}
                >
                    {"💬"}
                </button>
            </div>
        };
    }

    html! {
        <div class="floating-contact">
            <div class="floating-contact-card">
                <div class="floating-contact-header">
                    <h3>{&props.config.heading}</h3>
                    <button
                        type="button"
                        class="floating-contact-close"
                        aria-label="Close contact form"
                        onclick={widget.dismiss}
                    >
                        {"✕"}
                    </button>
                </div>

                <form class="floating-contact-form" onsubmit={on_submit}>
                    <input
                        type="text"
                        placeholder="Your Name"
                        value={form.data.name.clone()}
                        oninput={on_name_input}
                    />
                    <input
                        type="email"
                        placeholder="Your Email"
                        value={form.data.email.clone()}
                        oninput={on_email_input}
                    />
                    <textarea
                        placeholder="Your Message"
                        value={form.data.message.clone()}
                        oninput={on_message_input}
                    />
                    <button type="submit" class="btn btn-primary">{"Send Message"}</button>
                </form>

                <div class="floating-contact-divider"><span>{"or"}</span></div>

                <button type="button" class="btn btn-secondary" onclick={on_schedule}>
                    {"Schedule on Calendly"}
                </button>
            </div>
        </div>
    }
}
