use chrono::{DateTime, Local, Utc};
use shared::DateKey;

/// Today's date in the visitor's local time zone
pub fn today() -> DateKey {
    DateKey::new(Local::now().date_naive())
}

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}
