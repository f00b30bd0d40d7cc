//! Page application: mounts every component against the page context and
//! owns them for the lifetime of the page.
//!
//! Mount order matters in two places. The theme goes first so the saved
//! palette is on screen before anything animates. Click routes are
//! registered menu first, then smooth scrolling, tabs, back-to-top and the
//! theme switcher; one document listener dispatches to all of them.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::components::{
    register_smooth_scroll, stamp_year, ClickRouter, CounterBinding, MenuBinding, NavBinding,
    Preloader, ProgressBinding, RevealBinding, ScrollChrome, TabsBinding, TypewriterBinding,
};
use crate::context::PageContext;
use crate::error::DomResult;
use crate::theme::ThemeBinding;

/// Every mounted component. A `None` field is a feature the page does not
/// carry (or one that failed to mount and was logged).
pub struct App {
    pub theme: Option<ThemeBinding>,
    pub menu: Option<MenuBinding>,
    pub nav: Option<NavBinding>,
    pub typewriter: Option<TypewriterBinding>,
    pub reveal: Option<RevealBinding>,
    pub counters: Option<CounterBinding>,
    pub progress: Option<ProgressBinding>,
    pub tabs: Option<TabsBinding>,
    pub chrome: Option<ScrollChrome>,
    pub preloader: Option<Preloader>,
    _clicks: EventListener,
}

/// Log a failed mount and carry on without the component.
fn mount_or_warn<T>(name: &str, result: DomResult<Option<T>>) -> Option<T> {
    match result {
        Ok(component) => component,
        Err(e) => {
            tracing::warn!(component = name, "mount failed: {}", e);
            None
        }
    }
}

impl App {
    pub fn mount(ctx: &PageContext) -> Self {
        let mut router = ClickRouter::new();

        let theme = mount_or_warn("theme", ThemeBinding::mount(ctx).map(Some));

        let menu = MenuBinding::mount(ctx);
        if let Some(menu) = &menu {
            menu.register(&mut router, ctx);
        }
        register_smooth_scroll(&mut router, ctx, menu.clone());
        let tabs = TabsBinding::mount(ctx, &mut router);
        let chrome = ScrollChrome::mount(ctx, &mut router);
        if let Some(theme) = &theme {
            theme.register(&mut router, ctx);
        }

        let nav = mount_or_warn("nav", NavBinding::mount(ctx));
        let typewriter = mount_or_warn("typewriter", TypewriterBinding::mount(ctx));
        let reveal = mount_or_warn("reveal", RevealBinding::mount(ctx));
        let counters = mount_or_warn("counters", CounterBinding::mount(ctx));
        let progress = mount_or_warn("progress", ProgressBinding::mount(ctx));
        let preloader = Preloader::mount(ctx);
        if !stamp_year(ctx) {
            tracing::debug!("no footer year element");
        }

        tracing::info!(routes = ?router.names().collect::<Vec<_>>(), "page mounted");

        let router = Rc::new(RefCell::new(router));
        let clicks = EventListener::new(ctx.document(), "click", move |event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            router.borrow_mut().dispatch(&target, event);
        });

        Self {
            theme,
            menu,
            nav,
            typewriter,
            reveal,
            counters,
            progress,
            tabs,
            chrome,
            preloader,
            _clicks: clicks,
        }
    }
}
