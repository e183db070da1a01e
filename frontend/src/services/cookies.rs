//! Cookie-backed [`PreferenceStore`] for the browser.

use anyhow::{anyhow, Context};
use chrono::{DateTime, Duration, Utc};
use shared::preferences::{find_cookie, format_cookie};
use shared::{PreferenceError, PreferenceStore};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

pub struct CookiePreferenceStore {
    document: HtmlDocument,
}

impl CookiePreferenceStore {
    pub fn from_window() -> anyhow::Result<Self> {
        let document = web_sys::window()
            .context("no global window")?
            .document()
            .context("window has no document")?
            .dyn_into::<HtmlDocument>()
            .map_err(|_| anyhow!("document is not an HTML document"))?;
        Ok(Self { document })
    }
}

impl PreferenceStore for CookiePreferenceStore {
    /// The browser drops expired cookies itself, so `now` is not consulted
    fn get(&self, key: &str, _now: DateTime<Utc>) -> Option<String> {
        let cookies = self.document.cookie().ok()?;
        find_cookie(&cookies, key)
    }

    fn set(
        &mut self,
        key: &str,
        value: &str,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<(), PreferenceError> {
        let cookie = format_cookie(key, value, now + ttl)?;
        self.document
            .set_cookie(&cookie)
            .map_err(|err| PreferenceError::Storage(format!("{:?}", err)))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_cookie_round_trip_in_browser() {
        let mut store = CookiePreferenceStore::from_window().unwrap();
        let now = Utc::now();

        store.set("landingTestFlag", "yes", Duration::minutes(5), now).unwrap();
        assert_eq!(store.get("landingTestFlag", now).as_deref(), Some("yes"));

        // An expiry in the past makes the browser delete the cookie
        store.set("landingTestFlag", "yes", Duration::minutes(-5), now).unwrap();
        assert_eq!(store.get("landingTestFlag", now), None);
    }
}
