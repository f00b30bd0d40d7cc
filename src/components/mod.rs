//! Page components.
//!
//! Each component reads its slice of the page into a `folio_core` state
//! object, drives that object from browser events, and projects the
//! resulting fields back onto classes, styles, text and attributes.
//! Components that react to clicks register routes on the shared
//! [`ClickRouter`] instead of adding their own document listener.

mod chrome;
mod counters;
mod footer;
mod menu;
mod nav;
mod observer;
mod preloader;
mod progress;
mod reveal;
mod tabs;
mod typewriter;

pub use chrome::ScrollChrome;
pub use counters::CounterBinding;
pub use footer::stamp_year;
pub use menu::MenuBinding;
pub use nav::{register_smooth_scroll, NavBinding};
pub use observer::Observer;
pub use preloader::Preloader;
pub use progress::ProgressBinding;
pub use reveal::RevealBinding;
pub use tabs::TabsBinding;
pub use typewriter::TypewriterBinding;

use folio_core::Router;
use web_sys::{Element, Event};

use crate::error::describe;

/// Routing table for delegated document clicks.
pub type ClickRouter = Router<Element, Event>;

/// Matcher for elements inside (or equal to) one matching `selector`.
pub fn closest(selector: &str) -> impl Fn(&Element) -> Option<Element> + 'static {
    let selector = selector.to_string();
    move |target: &Element| target.closest(&selector).ok().flatten()
}

/// Set or clear `class` on `element`.
pub fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        tracing::warn!(class, "class toggle failed: {}", describe(&e));
    }
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Position of `target` in `elements`, by identity.
pub fn index_of(elements: &[Element], target: &Element) -> Option<usize> {
    elements.iter().position(|el| el == target)
}
