use log::{warn, Level};
use serde::Deserialize;

use crate::dom::{Host, IntersectionOptions, Node};
use crate::error::ConfigError;

/// Element holding optional JSON overrides for [`SiteConfig`].
pub const CONFIG_SELECTOR: &str = "script#site-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub navigation: NavigationConfig,
    pub reveal: RevealConfig,
    pub contact: ContactConfig,
    pub anchors: AnchorConfig,
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the page's config block. Missing block means defaults; a broken
    /// one is logged and also falls back to defaults.
    pub fn from_page<H: Host>(host: &H) -> Self {
        let block = match host.query_selector(CONFIG_SELECTOR) {
            Ok(Some(block)) => block,
            Ok(None) => return Self::default(),
            Err(err) => {
                warn!("Could not look up site config: {}", err);
                return Self::default();
            }
        };
        match Self::from_json(&block.text()) {
            Ok(config) => config,
            Err(err) => {
                warn!("Ignoring site config: {}", err);
                Self::default()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub header_selector: String,
    pub link_selector: String,
    pub active_class: String,
    /// Href of the home link, which only activates on root-like paths.
    pub home_href: String,
    /// Scroll offset past which the header turns compact.
    pub compact_after: f64,
    pub compact_padding: String,
    pub compact_shadow: String,
    pub default_padding: String,
    pub default_shadow: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            header_selector: ".main-header".to_string(),
            link_selector: ".main-nav a".to_string(),
            active_class: "active".to_string(),
            home_href: "index.html".to_string(),
            compact_after: 50.0,
            compact_padding: "0.8rem 0".to_string(),
            compact_shadow: "0 4px 20px rgba(0,0,0,0.05)".to_string(),
            default_padding: "1.5rem 0".to_string(),
            default_shadow: "none".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    pub threshold: f64,
    pub root_margin: String,
    pub hidden_transform: String,
    pub shown_transform: String,
    pub transition: String,
}

impl RevealConfig {
    pub fn options(&self) -> IntersectionOptions {
        IntersectionOptions {
            threshold: self.threshold,
            root_margin: self.root_margin.clone(),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".gallery-item, .philosophy-text, .philosophy-image, .card".to_string(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            hidden_transform: "translateY(30px)".to_string(),
            shown_transform: "translateY(0)".to_string(),
            transition: "all 0.8s ease-out".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub form_selector: String,
    pub button_selector: String,
    pub sending_label: String,
    pub confirmation: String,
    pub delay_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_selector: "#contact-form".to_string(),
            button_selector: "button".to_string(),
            sending_label: "Sending...".to_string(),
            confirmation: "Thank you for reaching out to Oak-Wood. We will respond to your inquiry within 48 hours.".to_string(),
            delay_ms: 1200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    pub selector: String,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            selector: "a[href^=\"#\"]".to_string(),
        }
    }
}
