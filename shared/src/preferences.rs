//! Small persisted visitor preferences (key, value, expiry).
//!
//! The browser keeps these in cookies; tests and native hosts use
//! [`InMemoryPreferenceStore`]. The cookie string helpers live here so the
//! encoding can be tested without a document.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// Set when the visitor closes the floating contact widget
pub const CONTACT_DISMISSED_KEY: &str = "contactFormDismissed";

/// How long a contact-widget dismissal is remembered, in days
pub const DISMISSAL_TTL_DAYS: i64 = 7;

pub fn dismissal_ttl() -> Duration {
    Duration::days(DISMISSAL_TTL_DAYS)
}

/// Cookies are visible to the whole site
pub const COOKIE_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PreferenceError {
    #[error("Preference key {0:?} is not a valid cookie name")]
    InvalidKey(String),
    #[error("Preference value for {0:?} contains reserved characters")]
    InvalidValue(String),
    #[error("Preference storage failed: {0}")]
    Storage(String),
}

pub trait PreferenceStore {
    /// Current value of `key`, `None` when missing or expired at `now`
    fn get(&self, key: &str, now: DateTime<Utc>) -> Option<String>;

    /// Store `value` until `now + ttl`
    fn set(
        &mut self,
        key: &str,
        value: &str,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<(), PreferenceError>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferenceStore {
    entries: HashMap<String, (String, DateTime<Utc>)>,
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get(&self, key: &str, now: DateTime<Utc>) -> Option<String> {
        self.entries
            .get(key)
            .filter(|(_, expires)| now < *expires)
            .map(|(value, _)| value.clone())
    }

    fn set(
        &mut self,
        key: &str,
        value: &str,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<(), PreferenceError> {
        validate(key, value)?;
        self.entries.insert(key.to_string(), (value.to_string(), now + ttl));
        Ok(())
    }
}

fn validate(key: &str, value: &str) -> Result<(), PreferenceError> {
    let bad_key = key.is_empty()
        || key
            .chars()
            .any(|c| c == '=' || c == ';' || c == ',' || c.is_whitespace() || c.is_control());
    if bad_key {
        return Err(PreferenceError::InvalidKey(key.to_string()));
    }
    if value.chars().any(|c| c == ';' || c == ',' || c.is_control()) {
        return Err(PreferenceError::InvalidValue(key.to_string()));
    }
    Ok(())
}

/// `Set-Cookie`-style string for `document.cookie`
pub fn format_cookie(
    key: &str,
    value: &str,
    expires: DateTime<Utc>,
) -> Result<String, PreferenceError> {
    validate(key, value)?;
    Ok(format!(
        "{}={}; expires={}; path={}",
        key,
        value,
        expires.format("%a, %d %b %Y %H:%M:%S GMT"),
        COOKIE_PATH
    ))
}

/// Look up `key` in a `document.cookie` string (`a=1; b=2`)
pub fn find_cookie(cookies: &str, key: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_format_cookie() {
        let cookie = format_cookie(CONTACT_DISMISSED_KEY, "true", now() + dismissal_ttl()).unwrap();
        assert_eq!(
            cookie,
            "contactFormDismissed=true; expires=Mon, 26 Oct 2026 12:00:00 GMT; path=/"
        );
    }

    #[test]
    fn test_format_cookie_rejects_reserved_characters() {
        assert!(matches!(
            format_cookie("bad key", "x", now()),
            Err(PreferenceError::InvalidKey(_))
        ));
        assert!(matches!(
            format_cookie("", "x", now()),
            Err(PreferenceError::InvalidKey(_))
        ));
        assert!(matches!(
            format_cookie("ok", "a;b", now()),
            Err(PreferenceError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_find_cookie() {
        let jar = "theme=dark; contactFormDismissed=true;session=abc";
        assert_eq!(find_cookie(jar, "contactFormDismissed").as_deref(), Some("true"));
        assert_eq!(find_cookie(jar, "session").as_deref(), Some("abc"));
        assert_eq!(find_cookie(jar, "missing"), None);
        assert_eq!(find_cookie("", "theme"), None);
        // Prefix of another name must not match
        assert_eq!(find_cookie("contactFormDismissedX=1", CONTACT_DISMISSED_KEY), None);
    }

    #[test]
    fn test_in_memory_store_expiry() {
        let mut store = InMemoryPreferenceStore::default();
        store.set("k", "v", Duration::hours(1), now()).unwrap();

        assert_eq!(store.get("k", now()).as_deref(), Some("v"));
        assert_eq!(store.get("k", now() + Duration::minutes(59)).as_deref(), Some("v"));
        assert_eq!(store.get("k", now() + Duration::hours(1)), None);
        assert_eq!(store.get("other", now()), None);
    }

    #[test]
    fn test_in_memory_store_validates_like_cookies() {
        let mut store = InMemoryPreferenceStore::default();
        assert!(store.set("a=b", "v", Duration::hours(1), now()).is_err());
        assert!(store.get("a=b", now()).is_none());
    }
}
