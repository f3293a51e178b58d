use anyhow::{bail, Context, Result};
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{Lang, SwitchMode};

/// Page-level settings for the interaction controller and the rendered markup.
///
/// Every field has a default, so a site only needs to spell out what differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub languages: LanguageConfig,
    pub navigation: NavigationConfig,
    pub reveal: RevealConfig,
    pub anchors: AnchorConfig,
    /// State class toggled on language buttons, the menu and revealed elements.
    pub active_class: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    pub switcher: SwitchMode,
    pub default_lang: Lang,
    pub button_class: String,
    pub toggle_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub trigger_id: String,
    pub menu_id: String,
    pub link_class: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub marker_class: String,
    /// Minimum visible fraction before an element counts as seen.
    pub threshold: f64,
    /// Pixels cut from the bottom of the viewport's trigger region.
    pub bottom_margin: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    /// Clearance kept free for the fixed header when scrolling to a target.
    pub header_offset: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            languages: LanguageConfig::default(),
            navigation: NavigationConfig::default(),
            reveal: RevealConfig::default(),
            anchors: AnchorConfig::default(),
            active_class: "active".to_string(),
        }
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            switcher: SwitchMode::default(),
            default_lang: Lang::De,
            button_class: "lang-btn".to_string(),
            toggle_id: "lang-toggle".to_string(),
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            trigger_id: "hamburger".to_string(),
            menu_id: "nav-menu".to_string(),
            link_class: "nav-link".to_string(),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            marker_class: "reveal-on-scroll".to_string(),
            threshold: 0.1,
            bottom_margin: 50.0,
        }
    }
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON site configuration.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: SiteConfig =
            serde_json::from_str(raw).context("site config is not valid JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        match &self.languages.switcher {
            SwitchMode::Selector { languages } if languages.is_empty() => {
                bail!("language selector needs at least one language")
            }
            SwitchMode::Toggle { pair: [a, b] } if a == b => {
                bail!("language toggle needs two different languages, got {}", a.code())
            }
            _ => {}
        }

        let default_lang = self.languages.default_lang;
        if !self.languages.switcher.supports(default_lang) {
            bail!(
                "default language {} is not offered by the language switcher",
                default_lang.code()
            );
        }

        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            bail!(
                "reveal threshold must be within 0..=1, got {}",
                self.reveal.threshold
            );
        }

        // NaN fails this comparison too.
        if !(self.reveal.bottom_margin >= 0.0) {
            bail!(
                "reveal bottom_margin must be a non-negative pixel value, got {}",
                self.reveal.bottom_margin
            );
        }

        Ok(())
    }
}

/// Site configuration from context, falling back to defaults when no provider exists.
pub fn use_site_config() -> SiteConfig {
    if let Some(config) = try_use_context::<SiteConfig>() {
        return config;
    }

    tracing::debug!("no SiteConfig in context, using defaults");
    SiteConfig::default()
}
