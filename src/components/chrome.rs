//! Sticky header and back-to-top button.

use folio_core::ChromeState;
use gloo::events::EventListener;
use web_sys::Element;

use super::{closest, set_class, ClickRouter};
use crate::context::PageContext;

/// Keeps the scroll listener alive.
pub struct ScrollChrome {
    _scroll: EventListener,
}

impl ScrollChrome {
    /// `None` when neither the header nor the button exists.
    pub fn mount(ctx: &PageContext, router: &mut ClickRouter) -> Option<Self> {
        let header: Option<Element> = ctx.header().map(Into::into);
        let button = ctx.select(&ctx.config().selectors.back_to_top);
        if header.is_none() && button.is_none() {
            tracing::debug!("scroll chrome disabled: no header or back-to-top button");
            return None;
        }

        if button.is_some() {
            let page = ctx.clone();
            router.route(
                "back-to-top",
                closest(&ctx.config().selectors.back_to_top),
                move |_, event| {
                    event.prevent_default();
                    page.smooth_scroll_to(0.0);
                },
            );
        }

        let page = ctx.clone();
        let update = move || {
            let state = ChromeState::at(page.scroll_y(), &page.config().chrome);
            if let Some(header) = &header {
                set_class(header, "scrolled", state.header_scrolled);
            }
            if let Some(button) = &button {
                set_class(button, "visible", state.back_to_top_visible);
            }
        };
        update();

        let scroll = EventListener::new(ctx.window(), "scroll", move |_| update());
        Some(Self { _scroll: scroll })
    }
}
