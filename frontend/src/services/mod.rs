pub mod availability;
pub mod cookies;
pub mod date_utils;
pub mod logging;
pub mod page_config;
