//! Floating contact widget: form fields and the collapsed/expanded state.

use crate::preferences::{dismissal_ttl, PreferenceError, PreferenceStore, CONTACT_DISMISSED_KEY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which input of the contact form changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub data: ContactSubmission,
}

impl ContactForm {
    pub fn update(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.data.name = value,
            ContactField::Email => self.data.email = value,
            ContactField::Message => self.data.message = value,
        }
    }

    /// The contact form sends whatever was typed; there is no required field
    pub fn submit(&self) -> ContactSubmission {
        self.data.clone()
    }
}

/// Whether the widget should start expanded.
///
/// A stored dismissal wins over the host's `is_open` default.
pub fn initial_expanded<S: PreferenceStore + ?Sized>(
    store: &S,
    is_open: bool,
    now: DateTime<Utc>,
) -> bool {
    let dismissed = store.get(CONTACT_DISMISSED_KEY, now).is_some();
    if dismissed {
        debug!("contact widget dismissed earlier, starting collapsed");
    }
    is_open && !dismissed
}

/// Record that the visitor closed the widget
pub fn remember_dismissal<S: PreferenceStore + ?Sized>(
    store: &mut S,
    now: DateTime<Utc>,
) -> Result<(), PreferenceError> {
    store.set(CONTACT_DISMISSED_KEY, "true", dismissal_ttl(), now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::InMemoryPreferenceStore;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_update_fields() {
        let mut form = ContactForm::default();
        form.update(ContactField::Name, "Ann".to_string());
        form.update(ContactField::Email, "a@x.com".to_string());
        form.update(ContactField::Message, "Hi".to_string());

        let submission = form.submit();
        assert_eq!(submission.name, "Ann");
        assert_eq!(submission.email, "a@x.com");
        assert_eq!(submission.message, "Hi");
    }

    #[test]
    fn test_empty_form_still_submits() {
        assert_eq!(ContactForm::default().submit(), ContactSubmission::default());
    }

    #[test]
    fn test_starts_expanded_without_dismissal() {
        let store = InMemoryPreferenceStore::default();
        assert!(initial_expanded(&store, true, now()));
        assert!(!initial_expanded(&store, false, now()));
    }

    #[test]
    fn test_dismissal_survives_reload() {
        let mut store = InMemoryPreferenceStore::default();
        remember_dismissal(&mut store, now()).unwrap();

        // Next page load a day later
        assert!(!initial_expanded(&store, true, now() + Duration::days(1)));
    }

    #[test]
    fn test_dismissal_expires_after_a_week() {
        let mut store = InMemoryPreferenceStore::default();
        remember_dismissal(&mut store, now()).unwrap();

        assert!(!initial_expanded(&store, true, now() + Duration::days(7) - Duration::seconds(1)));
        assert!(initial_expanded(&store, true, now() + Duration::days(7)));
    }
}
