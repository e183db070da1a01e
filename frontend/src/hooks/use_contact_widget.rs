use crate::services::cookies::CookiePreferenceStore;
use crate::services::date_utils::now_utc;
use crate::services::logging::Logger;
use shared::contact::{initial_expanded, remember_dismissal};
use web_sys::MouseEvent;
use yew::prelude::*;

pub struct UseContactWidgetResult {
    pub expanded: bool,
    pub expand: Callback<MouseEvent>,
    pub dismiss: Callback<MouseEvent>,
}

/// Expanded/collapsed state of the floating contact widget.
///
/// Starts from `is_open` unless the visitor dismissed the widget within the
/// last week; dismissing stores a cookie for the next visit.
#[hook]
pub fn use_contact_widget(is_open: bool) -> UseContactWidgetResult {
    let expanded = use_state(|| match CookiePreferenceStore::from_window() {
        Ok(store) => initial_expanded(&store, is_open, now_utc()),
        Err(e) => {
            Logger::warn_with_component("contact-widget", &format!("Cookies unavailable: {:#}", e));
            is_open
        }
    });

    let expand = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(true))
    };

    let dismiss = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| {
            expanded.set(false);

            let stored = CookiePreferenceStore::from_window().and_then(|mut store| {
                remember_dismissal(&mut store, now_utc()).map_err(anyhow::Error::from)
            });
            if let Err(e) = stored {
                Logger::warn_with_component(
                    "contact-widget",
                    &format!("Could not remember dismissal: {:#}", e),
                );
            }
        })
    };

    UseContactWidgetResult {
        expanded: *expanded,
        expand,
        dismiss,
    }
}
