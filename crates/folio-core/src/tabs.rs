//! Education tab switching.

use crate::error::{FolioError, FolioResult};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tab {
    /// Selector of the pane this tab shows (`data-bs-target` / `data-target`)
    pub target: Option<String>,
}

/// Result of a tab change: the tab to mark active and the pane to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabSelection {
    pub tab: usize,
    pub pane: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct TabSet {
    tabs: Vec<Tab>,
    active: Option<usize>,
}

impl TabSet {
    pub fn new(targets: Vec<Option<String>>, active: Option<usize>) -> Self {
        let tabs: Vec<Tab> = targets
            .into_iter()
            .map(|target| Tab {
                target: target.filter(|t| !t.trim().is_empty()),
            })
            .collect();
        let active = active.filter(|&i| i < tabs.len());
        Self { tabs, active }
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Switch to tab `index`.
    ///
    /// `Ok(None)` for a tab without a target (nothing happens). An unresolved
    /// pane is an error and leaves the active tab unchanged.
    pub fn select(
        &mut self,
        index: usize,
        pane_exists: impl Fn(&str) -> bool,
    ) -> FolioResult<Option<TabSelection>> {
        let tab = self.tabs.get(index).ok_or(FolioError::TabOutOfRange(index))?;
        let Some(target) = tab.target.clone() else {
            return Ok(None);
        };
        if !pane_exists(&target) {
            return Err(FolioError::PaneNotFound(target));
        }
        self.active = Some(index);
        Ok(Some(TabSelection {
            tab: index,
            pane: Some(target),
        }))
    }

    /// Activate the first tab when none is active. Its pane is included only
    /// if it resolves.
    pub fn ensure_default(&mut self, pane_exists: impl Fn(&str) -> bool) -> Option<TabSelection> {
        if self.active.is_some() || self.tabs.is_empty() {
            return None;
        }
        self.active = Some(0);
        let pane = self.tabs[0].target.clone().filter(|t| pane_exists(t));
        Some(TabSelection { tab: 0, pane })
    }
}
