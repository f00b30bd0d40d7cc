//! IntersectionObserver wrapper.

use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::DomResult;

/// An observer together with the closure it calls back into.
///
/// Dropping it disconnects the observer.
pub struct Observer {
    inner: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    /// Observe relative to the viewport. Batches arrive as typed entries,
    /// together with the observer so handlers can unobserve.
    pub fn new<F>(root_margin: Option<&str>, threshold: f64, mut on_entries: F) -> DomResult<Self>
    where
        F: FnMut(&[IntersectionObserverEntry], &IntersectionObserver) + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let entries: Vec<IntersectionObserverEntry> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into().ok())
                    .collect();
                on_entries(&entries, &observer);
            },
        );

        let init = IntersectionObserverInit::new();
        if let Some(margin) = root_margin {
            init.set_root_margin(margin);
        }
        init.set_threshold(&JsValue::from_f64(threshold));

        let inner =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self {
            inner,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.inner.observe(element);
    }

    pub fn observe_all<'a>(&self, elements: impl IntoIterator<Item = &'a Element>) {
        for element in elements {
            self.inner.observe(element);
        }
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.inner.disconnect();
    }
}
