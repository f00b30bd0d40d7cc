//! Skill bars: fill each bar to its target width, staggered.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{plan_fills, OneShot, ProgressBar};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::Observer;
use crate::context::PageContext;
use crate::error::{describe, DomResult};

pub struct ProgressBinding {
    _observer: Observer,
    /// Staggered fills still waiting to run
    _pending: Rc<RefCell<Vec<Timeout>>>,
}

/// Inline width of `element`, if it has a non-empty one.
fn inline_width(element: &Element) -> Option<String> {
    let element = element.dyn_ref::<HtmlElement>()?;
    element
        .style()
        .get_property_value("width")
        .ok()
        .filter(|width| !width.is_empty())
}

impl ProgressBinding {
    pub fn mount(ctx: &PageContext) -> DomResult<Option<Self>> {
        let config = ctx.config();
        let Some(section) = ctx.select(&config.selectors.skills_section) else {
            tracing::debug!("progress bars disabled: no skills section");
            return Ok(None);
        };

        let fill_selector = config.selectors.progress_fills.clone();
        let bar_selector = config.selectors.progress_bar.clone();
        let stagger = config.animation.progress_stagger();
        let pending = Rc::new(RefCell::new(Vec::new()));
        let timers = Rc::clone(&pending);
        let shot = RefCell::new(OneShot::default());

        let threshold = config.animation.progress_threshold;
        let observer = Observer::new(None, threshold, move |entries, observer| {
            for entry in entries.iter().filter(|entry| entry.is_intersecting()) {
                if !shot.borrow_mut().try_fire() {
                    continue;
                }
                let section = entry.target();
                let fills = PageContext::select_all_in(&section, &fill_selector);
                let bars: Vec<ProgressBar> = fills
                    .iter()
                    .map(|fill| ProgressBar {
                        fill_width: inline_width(fill),
                        target_width: fill
                            .closest(&bar_selector)
                            .ok()
                            .flatten()
                            .and_then(|bar| inline_width(&bar)),
                    })
                    .collect();

                let plan = plan_fills(&bars, stagger);
                tracing::debug!(bars = bars.len(), planned = plan.len(), "filling skill bars");
                for step in plan {
                    let Some(fill) = fills[step.index].dyn_ref::<HtmlElement>().cloned() else {
                        continue;
                    };
                    let millis = u32::try_from(step.delay.as_millis()).unwrap_or(u32::MAX);
                    let timeout = Timeout::new(millis, move || {
                        if let Err(e) = fill.style().set_property("width", &step.width) {
                            tracing::warn!("progress fill failed: {}", describe(&e));
                        }
                    });
                    timers.borrow_mut().push(timeout);
                }
                observer.unobserve(&section);
            }
        })?;
        observer.observe(&section);

        Ok(Some(Self {
            _observer: observer,
            _pending: pending,
        }))
    }
}
