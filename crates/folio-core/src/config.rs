//! Page configuration.
//!
//! Every field has a default matching the stock portfolio markup, so a page
//! that embeds no configuration at all behaves exactly like one that embeds
//! `{}`. Partial JSON overrides only the fields it names.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::FolioResult;
use crate::theme::{default_themes, Theme};

/// Key under which the theme index is persisted.
pub const DEFAULT_STORAGE_KEY: &str = "portfolioThemeIndex";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: SelectorConfig,
    pub nav: NavConfig,
    pub typewriter: TypewriterConfig,
    pub animation: AnimationConfig,
    pub chrome: ChromeConfig,
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
}

impl PageConfig {
    /// Parse a (possibly partial) JSON document.
    pub fn from_json(json: &str) -> FolioResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Query selectors making up the host page contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub header: String,
    pub menu_toggle: String,
    pub nav_container: String,
    /// Internal nav links only
    pub nav_links: String,
    /// Any in-page link inside the nav, smooth-scrolled on click
    pub nav_anchor_links: String,
    /// Links inside the mobile overlay that close it
    pub nav_container_links: String,
    /// External nav buttons that never carry the active marker
    pub external_nav_buttons: String,
    pub sections: String,
    pub typewriter: String,
    pub reveal_targets: String,
    pub stats_section: String,
    pub stat_numbers: String,
    pub skills_section: String,
    pub progress_fills: String,
    pub progress_bar: String,
    pub tabs: String,
    pub panes: String,
    pub back_to_top: String,
    pub theme_switcher: String,
    pub preloader: String,
    pub year: String,
    /// `<script type="application/json">` element holding this config
    pub config_script: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            header: ".site-header".to_string(),
            menu_toggle: "#menu-toggle".to_string(),
            nav_container: "#nav-links".to_string(),
            nav_links: r##".nav-links a.nav-item[href^="#"]"##.to_string(),
            nav_anchor_links: r##".nav-links a[href^="#"]"##.to_string(),
            nav_container_links: "#nav-links a".to_string(),
            external_nav_buttons: ".nav-links .resume-nav-btn".to_string(),
            sections: "section[id]".to_string(),
            typewriter: "#typewriter".to_string(),
            reveal_targets:
                "[data-aos], .fade-in, .slide-up, .fade-up, .zoom-in, .fade-left, .fade-right"
                    .to_string(),
            stats_section: "#stats".to_string(),
            stat_numbers: ".stat-number".to_string(),
            skills_section: "#skills".to_string(),
            progress_fills: ".progress-fill".to_string(),
            progress_bar: ".progress-bar".to_string(),
            tabs: ".education-tabs .nav-link".to_string(),
            panes: ".education-content .tab-pane".to_string(),
            back_to_top: ".back-to-top".to_string(),
            theme_switcher: "#theme-switcher".to_string(),
            preloader: "#preloader".to_string(),
            year: "#year".to_string(),
            config_script: "#folio-config".to_string(),
        }
    }
}

/// Focus band geometry and smooth-scroll offsets, in CSS pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Section forced active when the page loads near the top
    pub home_section: String,
    /// Scroll offset below which the home link is forced active
    pub initial_threshold: f64,
    /// Slack below the header within which a section top counts as focused
    pub focus_offset: f64,
    /// Header height assumed when the page has no header
    pub header_fallback: f64,
    /// Gap left between the header and a scrolled-to section
    pub scroll_buffer: f64,
    /// Bottom share of the viewport excluded from the focus band, in percent
    pub bottom_exclusion_percent: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            home_section: "home".to_string(),
            initial_threshold: 100.0,
            focus_offset: 50.0,
            header_fallback: 70.0,
            scroll_buffer: 10.0,
            bottom_exclusion_percent: 40.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    pub start_delay_ms: u64,
    pub type_min_ms: u64,
    pub type_max_ms: u64,
    pub delete_min_ms: u64,
    pub delete_max_ms: u64,
    pub dwell_after_typing_ms: u64,
    pub dwell_after_deleting_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: vec![
                "B.Tech IT Student".to_string(),
                "Aspiring Developer".to_string(),
                "Cloud Enthusiast".to_string(),
                "Python Programmer".to_string(),
            ],
            start_delay_ms: 1000,
            type_min_ms: 100,
            type_max_ms: 200,
            delete_min_ms: 50,
            delete_max_ms: 100,
            dwell_after_typing_ms: 1500,
            dwell_after_deleting_ms: 500,
        }
    }
}

impl TypewriterConfig {
    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.start_delay_ms)
    }
}

/// Observer thresholds and animation timings for the one-shot animators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub reveal_threshold: f64,
    pub counter_threshold: f64,
    pub progress_threshold: f64,
    pub counter_duration_ms: u64,
    pub counter_frame_ms: u64,
    pub progress_stagger_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.1,
            counter_threshold: 0.5,
            progress_threshold: 0.3,
            counter_duration_ms: 1500,
            counter_frame_ms: 16,
            progress_stagger_ms: 150,
        }
    }
}

impl AnimationConfig {
    pub fn progress_stagger(&self) -> Duration {
        Duration::from_millis(self.progress_stagger_ms)
    }
}

/// Sticky header, back-to-top button and preloader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    pub header_scrolled_after: f64,
    pub back_to_top_after: f64,
    pub preloader_removal_ms: u64,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            header_scrolled_after: 50.0,
            back_to_top_after: 200.0,
            preloader_removal_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub themes: Vec<Theme>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            themes: default_themes(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "folio_core=debug"
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = PageConfig::from_json("{}").unwrap();
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = PageConfig::from_json(
            r#"{ "typewriter": { "phrases": ["Rustacean"] }, "nav": { "home_section": "top" } }"#,
        )
        .unwrap();

        assert_eq!(config.typewriter.phrases, vec!["Rustacean".to_string()]);
        assert_eq!(config.typewriter.dwell_after_typing_ms, 1500);
        assert_eq!(config.nav.home_section, "top");
        assert_eq!(config.nav.scroll_buffer, 10.0);
        assert_eq!(config.theme.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(PageConfig::from_json("{ typewriter: ").is_err());
    }

    #[test]
    fn default_timings_match_the_page() {
        let config = PageConfig::default();
        assert_eq!(config.typewriter.start_delay(), Duration::from_millis(1000));
        assert_eq!(config.animation.progress_stagger(), Duration::from_millis(150));
        assert_eq!(config.theme.themes.len(), 5);
    }
}
