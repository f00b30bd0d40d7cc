//! Mobile navigation overlay.
//!
//! The toggle opens and closes the overlay; any link inside it, or any
//! click outside both, closes it again.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::menu::{ICON_CLOSED, ICON_OPEN};
use folio_core::MobileMenu;
use web_sys::{Element, Node};

use super::{closest, set_class, ClickRouter};
use crate::context::PageContext;
use crate::error::describe;

#[derive(Clone)]
pub struct MenuBinding {
    state: Rc<RefCell<MobileMenu>>,
    container: Element,
    toggle: Element,
}

impl MenuBinding {
    /// `None` unless both the toggle and the overlay exist.
    pub fn mount(ctx: &PageContext) -> Option<Self> {
        let selectors = &ctx.config().selectors;
        let (Some(toggle), Some(container)) = (
            ctx.select(&selectors.menu_toggle),
            ctx.select(&selectors.nav_container),
        ) else {
            tracing::debug!("mobile menu disabled: toggle or overlay missing");
            return None;
        };
        Some(Self {
            state: Rc::new(RefCell::new(MobileMenu::new())),
            container,
            toggle,
        })
    }

    pub fn register(&self, router: &mut ClickRouter, ctx: &PageContext) {
        let selectors = &ctx.config().selectors;

        let menu = self.clone();
        router.route("menu-toggle", closest(&selectors.menu_toggle), move |_, event| {
            event.prevent_default();
            menu.state.borrow_mut().toggle();
            menu.project();
        });

        let menu = self.clone();
        router.route("menu-link", closest(&selectors.nav_container_links), move |_, _| {
            menu.close();
        });

        let menu = self.clone();
        router.route(
            "menu-outside",
            |target: &Element| Some(target.clone()),
            move |target, _| {
                let node: &Node = target;
                let inside_menu = menu.container.contains(Some(node));
                let inside_toggle = menu.toggle.contains(Some(node));
                if menu.state.borrow_mut().on_outside_click(inside_menu, inside_toggle) {
                    menu.project();
                }
            },
        );
    }

    pub fn close(&self) {
        if self.state.borrow_mut().close() {
            self.project();
        }
    }

    fn project(&self) {
        let state = *self.state.borrow();
        let open = state.is_open();
        set_class(&self.container, "active", open);
        if let Err(e) = self.toggle.set_attribute("aria-expanded", state.aria_expanded()) {
            tracing::warn!("aria-expanded update failed: {}", describe(&e));
        }
        if let Ok(Some(icon)) = self.toggle.query_selector("i") {
            let shown = state.icon_class();
            for class in [ICON_CLOSED, ICON_OPEN] {
                set_class(&icon, class, class == shown);
            }
        }
        tracing::debug!(open, "mobile menu");
    }
}
