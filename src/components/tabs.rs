//! Education tabs: each tab shows the pane named by its target attribute.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{FolioError, TabSelection, TabSet};
use web_sys::Element;

use super::{closest, has_class, index_of, set_class, ClickRouter};
use crate::context::PageContext;

const ACTIVE: &str = "active";
const SHOW: &str = "show";

/// Keeps the tab state alive; the click route owns the other handle.
pub struct TabsBinding {
    _state: Rc<RefCell<TabSet>>,
}

struct TabsView {
    ctx: PageContext,
    tabs: Vec<Element>,
}

impl TabsView {
    fn pane_exists(&self, selector: &str) -> bool {
        self.ctx.select(selector).is_some()
    }

    fn project(&self, selection: &TabSelection) {
        for (index, tab) in self.tabs.iter().enumerate() {
            set_class(tab, ACTIVE, index == selection.tab);
        }
        let Some(target) = &selection.pane else {
            return;
        };
        for pane in self.ctx.select_all(&self.ctx.config().selectors.panes) {
            set_class(&pane, SHOW, false);
            set_class(&pane, ACTIVE, false);
        }
        if let Some(pane) = self.ctx.select(target) {
            set_class(&pane, SHOW, true);
            set_class(&pane, ACTIVE, true);
        }
    }
}

/// Tabs only switch anything when the page has both tabs and panes.
fn has_tabs_and_panes(tabs: usize, panes: usize) -> bool {
    tabs > 0 && panes > 0
}

fn target_of(tab: &Element) -> Option<String> {
    tab.get_attribute("data-bs-target")
        .or_else(|| tab.get_attribute("data-target"))
}

impl TabsBinding {
    pub fn mount(ctx: &PageContext, router: &mut ClickRouter) -> Option<Self> {
        let selectors = &ctx.config().selectors;
        let selector = selectors.tabs.clone();
        let tabs = ctx.select_all(&selector);
        let panes = ctx.select_all(&selectors.panes);
        if !has_tabs_and_panes(tabs.len(), panes.len()) {
            tracing::debug!(tabs = tabs.len(), panes = panes.len(), "education tabs disabled");
            return None;
        }

        let active = tabs.iter().position(|tab| has_class(tab, ACTIVE));
        let mut set = TabSet::new(tabs.iter().map(target_of).collect(), active);
        let view = TabsView {
            ctx: ctx.clone(),
            tabs,
        };
        if let Some(selection) = set.ensure_default(|sel| view.pane_exists(sel)) {
            view.project(&selection);
        }

        let state = Rc::new(RefCell::new(set));
        let tabs_state = Rc::clone(&state);
        router.route("education-tab", closest(&selector), move |tab, event| {
            event.prevent_default();
            let Some(index) = index_of(&view.tabs, tab) else {
                return;
            };
            let result = tabs_state.borrow_mut().select(index, |sel| view.pane_exists(sel));
            match result {
                Ok(Some(selection)) => {
                    tracing::debug!(tab = selection.tab, pane = ?selection.pane, "tab selected");
                    view.project(&selection);
                }
                Ok(None) => {}
                Err(FolioError::PaneNotFound(sel)) => {
                    tracing::warn!("Education tab content not found for selector: {}", sel);
                }
                Err(e) => tracing::warn!("tab selection failed: {}", e),
            }
        });

        Some(Self { _state: state })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_need_panes_to_mount() {
        assert!(has_tabs_and_panes(3, 3));
        assert!(has_tabs_and_panes(2, 1));
        assert!(!has_tabs_and_panes(3, 0));
        assert!(!has_tabs_and_panes(0, 2));
        assert!(!has_tabs_and_panes(0, 0));
    }
}
