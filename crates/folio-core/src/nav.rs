//! Viewport watcher and navigation highlighter.
//!
//! The watcher decides which intersection reports mean "this section is
//! being read"; the highlighter keeps exactly one nav link marked current
//! once any section has been focused.

use crate::config::NavConfig;

/// One intersection report for a page section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionEntry {
    pub id: String,
    pub is_intersecting: bool,
    /// Top edge relative to the viewport, in CSS pixels
    pub top: f64,
}

impl SectionEntry {
    pub fn new(id: impl Into<String>, is_intersecting: bool, top: f64) -> Self {
        Self {
            id: id.into(),
            is_intersecting,
            top,
        }
    }
}

/// Geometry of the focus band.
///
/// The band starts below the header and stops short of the bottom
/// `bottom_exclusion_percent` of the viewport. A section is focused when it
/// intersects the band with its top edge at or above `focus_line()`.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportWatcher {
    header_height: f64,
    focus_offset: f64,
    bottom_exclusion_percent: f64,
}

impl ViewportWatcher {
    /// `header_height` is `None` when the page has no header element.
    pub fn new(header_height: Option<f64>, config: &NavConfig) -> Self {
        Self {
            header_height: header_height.unwrap_or(config.header_fallback),
            focus_offset: config.focus_offset,
            bottom_exclusion_percent: config.bottom_exclusion_percent,
        }
    }

    pub fn header_height(&self) -> f64 {
        self.header_height
    }

    /// Observer root margin, CSS shorthand order (top right bottom left).
    pub fn root_margin(&self) -> String {
        format!(
            "-{}px 0px -{}% 0px",
            self.header_height, self.bottom_exclusion_percent
        )
    }

    /// Lowest viewport offset at which a section top still counts as focused.
    pub fn focus_line(&self) -> f64 {
        self.header_height + self.focus_offset
    }

    pub fn qualifies(&self, entry: &SectionEntry) -> bool {
        entry.is_intersecting && entry.top <= self.focus_line()
    }

    /// Ids of focused sections in a batch, in delivery order.
    pub fn focused<'a>(&self, entries: &'a [SectionEntry]) -> Vec<&'a str> {
        entries
            .iter()
            .filter(|entry| self.qualifies(entry))
            .map(|entry| entry.id.as_str())
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Id of the section the link points at (no leading `#`)
    pub target: String,
    pub active: bool,
}

/// Holds the active flag of every internal nav link.
#[derive(Clone, Debug, Default)]
pub struct NavHighlighter {
    links: Vec<NavLink>,
}

impl NavHighlighter {
    pub fn new<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            links: targets
                .into_iter()
                .map(|target| NavLink {
                    target: target.into(),
                    active: false,
                })
                .collect(),
        }
    }

    /// Build from link hrefs such as `#about`.
    pub fn from_hrefs<'a>(hrefs: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(hrefs.into_iter().map(|href| href.trim_start_matches('#')))
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn active(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.active)
            .map(|link| link.target.as_str())
    }

    pub fn active_count(&self) -> usize {
        self.links.iter().filter(|link| link.active).count()
    }

    /// Mark the first link targeting `id` as current and clear all others.
    ///
    /// Unknown or empty ids leave the current state alone. Returns whether
    /// `id` was accepted.
    pub fn activate(&mut self, id: &str) -> bool {
        if id.is_empty() {
            return false;
        }
        let Some(pos) = self.links.iter().position(|link| link.target == id) else {
            tracing::debug!(id, "no nav link for section");
            return false;
        };
        for (i, link) in self.links.iter_mut().enumerate() {
            link.active = i == pos;
        }
        true
    }

    /// Process one observer batch. Every focused entry is applied in order,
    /// so the last one wins. Returns the active target if anything changed.
    pub fn apply(&mut self, watcher: &ViewportWatcher, entries: &[SectionEntry]) -> Option<&str> {
        let mut changed = false;
        for id in watcher.focused(entries) {
            changed |= self.activate(id);
        }
        if changed {
            self.active()
        } else {
            None
        }
    }

    /// Force the home link on a fresh load near the top of the page, before
    /// the first observer callback arrives.
    pub fn initial(&mut self, scroll_y: f64, config: &NavConfig) -> bool {
        scroll_y < config.initial_threshold && self.activate(&config.home_section)
    }
}
