//! Host-page overrides for the landing page content.
//!
//! The page may embed
//! `<script id="landing-config" type="application/json">{ ... }</script>`;
//! anything it leaves out keeps the built-in default.

use crate::services::logging::Logger;
use anyhow::Context;
use shared::LandingConfig;

pub const CONFIG_ELEMENT_ID: &str = "landing-config";

pub fn load_landing_config() -> LandingConfig {
    match read_config_json() {
        Ok(Some(raw)) => match LandingConfig::from_json(&raw) {
            Ok(config) => {
                Logger::debug_with_component("page-config", "Loaded landing config overrides");
                config
            }
            Err(e) => {
                Logger::warn_with_component("page-config", &format!("{}, using defaults", e));
                LandingConfig::default()
            }
        },
        Ok(None) => LandingConfig::default(),
        Err(e) => {
            Logger::error_with_component(
                "page-config",
                &format!("Could not read page config: {:#}", e),
            );
            LandingConfig::default()
        }
    }
}

fn read_config_json() -> anyhow::Result<Option<String>> {
    let document = web_sys::window()
        .context("no global window")?
        .document()
        .context("window has no document")?;

    Ok(document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
        .filter(|raw| !raw.trim().is_empty()))
}
