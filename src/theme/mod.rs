//! Theme switcher binding.
//!
//! The restored palette is written to the root element's custom properties
//! during boot, before any other component mounts. The switcher button,
//! registered later, cycles through the palettes and its title names the
//! current one.

mod storage;

pub use storage::LocalStore;

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{Theme, ThemeSwitcher};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::components::{closest, ClickRouter};
use crate::context::PageContext;
use crate::error::{describe, DomResult};

struct ThemeState {
    switcher: ThemeSwitcher,
    store: LocalStore,
    root: Option<HtmlElement>,
    button: Option<Element>,
}

impl ThemeState {
    fn project(&self, theme: &Theme) {
        if let Some(root) = &self.root {
            let style = root.style();
            for (name, value) in theme.css_variables() {
                if let Err(e) = style.set_property(name, value) {
                    tracing::warn!(name, "theme variable not applied: {}", describe(&e));
                }
            }
        }
        if let Some(button) = &self.button {
            if let Err(e) = button.set_attribute("title", &theme.label()) {
                tracing::warn!("theme title not set: {}", describe(&e));
            }
        }
    }

    fn activate(&mut self, index: usize) {
        match self.switcher.activate(index, &mut self.store) {
            Ok(theme) => {
                let theme = theme.clone();
                self.project(&theme);
            }
            Err(e) => tracing::warn!("theme not applied: {}", e),
        }
    }

    fn cycle(&mut self) {
        match self.switcher.cycle(&mut self.store) {
            Ok(theme) => {
                let theme = theme.clone();
                self.project(&theme);
            }
            Err(e) => tracing::warn!("theme not cycled: {}", e),
        }
    }
}

pub struct ThemeBinding {
    state: Rc<RefCell<ThemeState>>,
}

impl ThemeBinding {
    /// Restore and apply the saved palette.
    pub fn mount(ctx: &PageContext) -> DomResult<Self> {
        let config = &ctx.config().theme;
        let store = LocalStore::new(ctx.window());
        let switcher = ThemeSwitcher::restore(config.themes.clone(), &config.storage_key, &store)?;

        let root = ctx
            .document()
            .document_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let button = ctx.select(&ctx.config().selectors.theme_switcher);

        let mut state = ThemeState {
            switcher,
            store,
            root,
            button,
        };
        let restored = state.switcher.current();
        state.activate(restored);
        tracing::info!(
            theme = %state.switcher.current_theme().name,
            persisted = state.store.is_available(),
            "theme restored"
        );

        Ok(Self {
            state: Rc::new(RefCell::new(state)),
        })
    }

    /// Cycle palettes from the switcher button, if the page has one.
    pub fn register(&self, router: &mut ClickRouter, ctx: &PageContext) {
        if self.state.borrow().button.is_none() {
            tracing::debug!("theme switcher button missing; palette fixed");
            return;
        }
        let cycling = Rc::clone(&self.state);
        router.route(
            "theme-switcher",
            closest(&ctx.config().selectors.theme_switcher),
            move |_, _| cycling.borrow_mut().cycle(),
        );
    }
}
