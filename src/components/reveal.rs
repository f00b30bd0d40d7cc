//! Scroll reveal: adds `visible` once per element.

use std::cell::RefCell;

use folio_core::{OneShotGroup, VisibilityEntry};

use super::{index_of, set_class, Observer};
use crate::context::PageContext;
use crate::error::DomResult;

pub struct RevealBinding {
    _observer: Observer,
}

impl RevealBinding {
    pub fn mount(ctx: &PageContext) -> DomResult<Option<Self>> {
        let config = ctx.config();
        let elements = ctx.select_all(&config.selectors.reveal_targets);
        if elements.is_empty() {
            return Ok(None);
        }

        let group = RefCell::new(OneShotGroup::new(elements.len()));
        let targets = elements.clone();
        let threshold = config.animation.reveal_threshold;
        let observer = Observer::new(None, threshold, move |entries, observer| {
            let batch: Vec<VisibilityEntry> = entries
                .iter()
                .filter_map(|entry| {
                    index_of(&targets, &entry.target())
                        .map(|index| VisibilityEntry::new(index, entry.is_intersecting()))
                })
                .collect();
            for index in group.borrow_mut().take_ready(&batch) {
                set_class(&targets[index], "visible", true);
                observer.unobserve(&targets[index]);
            }
        })?;
        observer.observe_all(&elements);

        tracing::debug!(count = elements.len(), "reveal targets observed");
        Ok(Some(Self {
            _observer: observer,
        }))
    }
}
