//! Smooth-scroll targets and scroll-driven page chrome.

use crate::config::{ChromeConfig, NavConfig};

/// Where a clicked nav link wants to go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// Bare `#`
    Top,
    /// `#<id>`
    Anchor(String),
    /// Anything that is not an in-page anchor
    External,
}

impl LinkTarget {
    pub fn parse(href: &str) -> Self {
        match href.strip_prefix('#') {
            Some("") => LinkTarget::Top,
            Some(id) => LinkTarget::Anchor(id.to_string()),
            None => LinkTarget::External,
        }
    }
}

/// Scroll offset that parks `element_top` (distance from the document top)
/// just below the header. Never negative.
pub fn scroll_offset(element_top: f64, header_height: Option<f64>, config: &NavConfig) -> f64 {
    let header = header_height.unwrap_or(config.header_fallback);
    (element_top - header - config.scroll_buffer).max(0.0)
}

/// Sticky header and back-to-top visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChromeState {
    pub header_scrolled: bool,
    pub back_to_top_visible: bool,
}

impl ChromeState {
    pub fn at(scroll_y: f64, config: &ChromeConfig) -> Self {
        Self {
            header_scrolled: scroll_y > config.header_scrolled_after,
            back_to_top_visible: scroll_y > config.back_to_top_after,
        }
    }
}
