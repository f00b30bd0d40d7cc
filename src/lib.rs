//! Folio Web
//!
//! Browser binding for the portfolio page: reads the page configuration,
//! installs logging, and mounts every component once the DOM is ready.
//! All decisions live in `folio_core`; this crate only wires them to
//! browser events and projects their state onto the page.

pub mod app;
pub mod components;
pub mod context;
pub mod error;
pub mod logging;
pub mod theme;

use std::cell::RefCell;

use gloo::events::EventListener;
use wasm_bindgen::prelude::*;

pub use crate::app::App;
use crate::context::{is_parsing, read_config, PageContext};
use crate::error::DomError;

thread_local! {
    /// The mounted page, kept alive until the page unloads.
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;

    let (config, problem) = read_config(&document);
    logging::init(&config.logging.level);
    if let Some(e) = problem {
        tracing::warn!("page configuration ignored, using defaults: {}", e);
    }

    let ctx = PageContext::new(config)?;
    if is_parsing(&document.ready_state()) {
        EventListener::once(&document, "DOMContentLoaded", move |_| boot(&ctx)).forget();
    } else {
        boot(&ctx);
    }
    Ok(())
}

fn boot(ctx: &PageContext) {
    let app = App::mount(ctx);
    APP.with(|slot| *slot.borrow_mut() = Some(app));
}
