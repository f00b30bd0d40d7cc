//! Page preloader: fades out on window load, then leaves the DOM.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::context::{is_loaded, PageContext};
use crate::error::describe;

pub struct Preloader {
    _load: Option<EventListener>,
    _removal: Rc<RefCell<Option<Timeout>>>,
}

fn fade(element: &HtmlElement) {
    let style = element.style();
    for (property, value) in [("opacity", "0"), ("visibility", "hidden")] {
        if let Err(e) = style.set_property(property, value) {
            tracing::warn!(property, "preloader fade failed: {}", describe(&e));
        }
    }
}

impl Preloader {
    pub fn mount(ctx: &PageContext) -> Option<Self> {
        let element = ctx
            .select(&ctx.config().selectors.preloader)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        let delay = u32::try_from(ctx.config().chrome.preloader_removal_ms).unwrap_or(u32::MAX);

        let removal = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&removal);
        let hide = move || {
            fade(&element);
            let element = element.clone();
            *slot.borrow_mut() = Some(Timeout::new(delay, move || {
                element.remove();
                tracing::debug!("preloader removed");
            }));
        };

        let load = if is_loaded(&ctx.document().ready_state()) {
            hide();
            None
        } else {
            Some(EventListener::once(ctx.window(), "load", move |_| hide()))
        };

        Some(Self {
            _load: load,
            _removal: removal,
        })
    }
}
