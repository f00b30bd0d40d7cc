//! Page context shared by every component.
//!
//! Wraps the window, the document and the page configuration, and provides
//! the lookups each component uses to find its part of the host page. A
//! missing element is never an error here: lookups return `None` or an
//! empty list and the component decides whether it can run without it.
//!
//! ## Usage
//!
//! ```ignore
//! let ctx = PageContext::new(config)?;
//! if let Some(header) = ctx.header() {
//!     let height = header.offset_height();
//! }
//! ```

use std::rc::Rc;

use folio_core::PageConfig;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList, ScrollBehavior, ScrollToOptions, Window};

use crate::error::{describe, DomError, DomResult};

#[derive(Clone)]
pub struct PageContext {
    window: Window,
    document: Document,
    config: Rc<PageConfig>,
}

impl PageContext {
    pub fn new(config: PageConfig) -> DomResult<Self> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        Ok(Self {
            window,
            document,
            config: Rc::new(config),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// First element matching `selector`, if any.
    pub fn select(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(selector, "invalid selector: {}", describe(&e));
                None
            }
        }
    }

    /// Every element matching `selector`, in document order.
    pub fn select_all(&self, selector: &str) -> Vec<Element> {
        match self.document.query_selector_all(selector) {
            Ok(list) => elements(&list),
            Err(e) => {
                tracing::warn!(selector, "invalid selector: {}", describe(&e));
                Vec::new()
            }
        }
    }

    /// Descendants of `parent` matching `selector`.
    pub fn select_all_in(parent: &Element, selector: &str) -> Vec<Element> {
        match parent.query_selector_all(selector) {
            Ok(list) => elements(&list),
            Err(e) => {
                tracing::warn!(selector, "invalid selector: {}", describe(&e));
                Vec::new()
            }
        }
    }

    pub fn header(&self) -> Option<HtmlElement> {
        self.select(&self.config.selectors.header)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    /// Rendered header height; `None` without a header.
    pub fn header_height(&self) -> Option<f64> {
        self.header().map(|header| header.offset_height() as f64)
    }

    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    /// Distance from the top of the document to the top of `element`.
    pub fn document_top(&self, element: &Element) -> f64 {
        element.get_bounding_client_rect().top() + self.scroll_y()
    }

    /// Animated scroll; returns immediately.
    pub fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// `document.readyState` while the HTML is still being parsed.
pub fn is_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// `document.readyState` once the `load` event has fired.
pub fn is_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Read the optional JSON configuration embedded in the page.
///
/// Returns the defaults when the script element is absent. A malformed blob
/// also yields the defaults, together with the parse error so the caller
/// can log it once logging is up.
pub fn read_config(document: &Document) -> (PageConfig, Option<DomError>) {
    let selector = PageConfig::default().selectors.config_script;
    let script = match document.query_selector(&selector) {
        Ok(Some(script)) => script,
        Ok(None) => return (PageConfig::default(), None),
        Err(e) => return (PageConfig::default(), Some(e.into())),
    };
    let text = script.text_content().unwrap_or_default();
    match PageConfig::from_json(&text) {
        Ok(config) => (config, None),
        Err(e) => (PageConfig::default(), Some(e.into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_states() {
        assert!(is_parsing("loading"));
        assert!(!is_parsing("interactive"));
        assert!(!is_parsing("complete"));

        assert!(is_loaded("complete"));
        assert!(!is_loaded("interactive"));
        assert!(!is_loaded("loading"));
    }
}
