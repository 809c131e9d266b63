//! Application bootstrap configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::state::toast::ToastConfig;

/// Bootstrap Icons stylesheet used as the app's icon set.
pub const BOOTSTRAP_ICONS_HREF: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub icon_stylesheet_href: String,
    pub toast: ToastConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Gallery".to_owned(),
            icon_stylesheet_href: BOOTSTRAP_ICONS_HREF.to_owned(),
            toast: ToastConfig::default(),
        }
    }
}
