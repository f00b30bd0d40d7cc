//! Typewriter binding.
//!
//! The machine lives in an `Rc<RefCell<_>>` shared with its own pending
//! timeout; every tick arms the next one through the [`TimerSlot`], so the
//! previous timeout is always cleared first.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use folio_core::{Cancel, Cursor, TimerSlot, Typewriter};
use gloo::timers::callback::Timeout;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::context::PageContext;
use crate::error::{describe, DomError, DomResult};

const CURSOR_COLOR: &str = "border-right-color";
const CURSOR_VISIBLE: &str = "var(--primary-color)";
const CURSOR_HIDDEN: &str = "transparent";

struct PendingTick(Timeout);

impl Cancel for PendingTick {
    fn cancel(self) {
        let _ = self.0.cancel();
    }
}

struct TypewriterRun {
    machine: Typewriter,
    element: HtmlElement,
    rng: SmallRng,
    slot: TimerSlot<PendingTick>,
}

pub struct TypewriterBinding {
    _run: Rc<RefCell<TypewriterRun>>,
}

impl TypewriterBinding {
    pub fn mount(ctx: &PageContext) -> DomResult<Option<Self>> {
        let config = ctx.config();
        let selector = &config.selectors.typewriter;
        let Some(element) = ctx.select(selector) else {
            tracing::debug!("typewriter disabled: no target element");
            return Ok(None);
        };
        let element = element
            .dyn_into::<HtmlElement>()
            .map_err(|_| DomError::NotHtml(selector.clone()))?;
        let machine = Typewriter::from_config(&config.typewriter)?;

        let run = Rc::new(RefCell::new(TypewriterRun {
            machine,
            element,
            rng: SmallRng::seed_from_u64(seed()),
            slot: TimerSlot::new(),
        }));
        schedule(&run, config.typewriter.start_delay());
        Ok(Some(Self { _run: run }))
    }
}

fn seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64 ^ js_sys::Date::now() as u64
}

fn schedule(run: &Rc<RefCell<TypewriterRun>>, delay: Duration) {
    let next = Rc::clone(run);
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    let timeout = Timeout::new(millis, move || tick(&next));
    run.borrow_mut().slot.arm(PendingTick(timeout));
}

fn tick(run: &Rc<RefCell<TypewriterRun>>) {
    let delay = {
        let mut guard = run.borrow_mut();
        let TypewriterRun {
            machine,
            element,
            rng,
            ..
        } = &mut *guard;

        let tick = machine.tick(rng);
        element.set_text_content(Some(&tick.text));
        let color = match tick.cursor {
            Cursor::Visible => CURSOR_VISIBLE,
            Cursor::Hidden => CURSOR_HIDDEN,
        };
        if let Err(e) = element.style().set_property(CURSOR_COLOR, color) {
            tracing::warn!("cursor update failed: {}", describe(&e));
        }
        tick.delay
    };
    schedule(run, delay);
}
