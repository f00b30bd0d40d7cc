//! Stats counters: ramp each `.stat-number` to its `data-target` once the
//! stats section is half visible.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{CounterRamp, CounterTarget, OneShot, OneShotGroup, VisibilityEntry};
use gloo::render::{request_animation_frame, AnimationFrame};
use web_sys::Element;

use super::{has_class, set_class, Observer};
use crate::context::PageContext;
use crate::error::DomResult;

const COUNTED: &str = "counted";

pub struct CounterBinding {
    _observer: Observer,
}

impl CounterBinding {
    pub fn mount(ctx: &PageContext) -> DomResult<Option<Self>> {
        let config = ctx.config();
        let Some(section) = ctx.select(&config.selectors.stats_section) else {
            tracing::debug!("counters disabled: no stats section");
            return Ok(None);
        };

        let numbers = PageContext::select_all_in(&section, &config.selectors.stat_numbers);
        let mut counted = OneShotGroup::new(numbers.len());
        // Numbers the markup already marks as counted never run.
        let preset: Vec<VisibilityEntry> = numbers
            .iter()
            .enumerate()
            .filter(|(_, number)| has_class(number, COUNTED))
            .map(|(index, _)| VisibilityEntry::new(index, true))
            .collect();
        counted.take_ready(&preset);

        let animation = config.animation.clone();
        let section_shot = RefCell::new(OneShot::default());
        let counted = RefCell::new(counted);
        let observer = Observer::new(None, animation.counter_threshold, move |entries, observer| {
            for entry in entries.iter().filter(|entry| entry.is_intersecting()) {
                if !section_shot.borrow_mut().try_fire() {
                    continue;
                }
                let all: Vec<VisibilityEntry> =
                    (0..numbers.len()).map(|index| VisibilityEntry::new(index, true)).collect();
                for index in counted.borrow_mut().take_ready(&all) {
                    let number = &numbers[index];
                    set_class(number, COUNTED, true);
                    let raw = number.get_attribute("data-target").unwrap_or_default();
                    match CounterTarget::parse(&raw) {
                        Ok(target) => {
                            start(number.clone(), CounterRamp::from_config(target, &animation))
                        }
                        Err(e) => tracing::warn!("counter skipped: {}", e),
                    }
                }
                observer.unobserve(&entry.target());
            }
        })?;
        observer.observe(&section);

        Ok(Some(Self {
            _observer: observer,
        }))
    }
}

/// One running ramp. The pending frame handle keeps the run alive; the run
/// is released when its final frame has rendered.
struct CounterRun {
    ramp: CounterRamp,
    element: Element,
    frame: Option<AnimationFrame>,
}

fn start(element: Element, ramp: CounterRamp) {
    let run = Rc::new(RefCell::new(CounterRun {
        ramp,
        element,
        frame: None,
    }));
    request_next(&run);
}

fn request_next(run: &Rc<RefCell<CounterRun>>) {
    let next = Rc::clone(run);
    let handle = request_animation_frame(move |_timestamp| step(&next));
    run.borrow_mut().frame = Some(handle);
}

fn step(run: &Rc<RefCell<CounterRun>>) {
    let finished = {
        let mut guard = run.borrow_mut();
        match guard.ramp.next_frame() {
            Some(frame) => {
                guard.element.set_text_content(Some(frame.text()));
                frame.is_final()
            }
            None => true,
        }
    };
    if finished {
        run.borrow_mut().frame = None;
    } else {
        request_next(run);
    }
}
