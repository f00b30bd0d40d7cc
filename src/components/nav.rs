//! Active nav link highlighting and smooth in-page scrolling.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{scroll_offset, LinkTarget, NavHighlighter, SectionEntry, ViewportWatcher};
use web_sys::{Element, IntersectionObserverEntry};

use super::{closest, set_class, ClickRouter, MenuBinding, Observer};
use crate::context::PageContext;
use crate::error::DomResult;

struct NavState {
    highlighter: NavHighlighter,
    links: Vec<Element>,
    external: Vec<Element>,
}

impl NavState {
    fn project(&self) {
        for (link, element) in self.highlighter.links().iter().zip(&self.links) {
            set_class(element, "active", link.active);
        }
        for element in &self.external {
            set_class(element, "active", false);
        }
    }
}

pub struct NavBinding {
    state: Rc<RefCell<NavState>>,
    _observer: Option<Observer>,
}

impl NavBinding {
    pub fn mount(ctx: &PageContext) -> DomResult<Option<Self>> {
        let config = ctx.config();
        let links = ctx.select_all(&config.selectors.nav_links);
        if links.is_empty() {
            tracing::debug!("nav highlighting disabled: no internal nav links");
            return Ok(None);
        }

        let hrefs: Vec<String> = links
            .iter()
            .map(|link| link.get_attribute("href").unwrap_or_default())
            .collect();
        let state = Rc::new(RefCell::new(NavState {
            highlighter: NavHighlighter::from_hrefs(hrefs.iter().map(String::as_str)),
            links,
            external: ctx.select_all(&config.selectors.external_nav_buttons),
        }));

        let sections = ctx.select_all(&config.selectors.sections);
        let observer = if sections.is_empty() {
            tracing::debug!("no sections to watch");
            None
        } else {
            let watcher = ViewportWatcher::new(ctx.header_height(), &config.nav);
            let margin = watcher.root_margin();
            let observed = Rc::clone(&state);
            let observer = Observer::new(Some(&margin), 0.0, move |entries, _| {
                let batch: Vec<SectionEntry> = entries.iter().map(section_entry).collect();
                let mut state = observed.borrow_mut();
                if let Some(active) = state.highlighter.apply(&watcher, &batch) {
                    tracing::debug!(section = active, "nav link activated");
                    state.project();
                }
            })?;
            observer.observe_all(&sections);
            Some(observer)
        };

        let binding = Self {
            state,
            _observer: observer,
        };
        let forced = binding
            .state
            .borrow_mut()
            .highlighter
            .initial(ctx.scroll_y(), &config.nav);
        if forced {
            binding.state.borrow().project();
        }
        Ok(Some(binding))
    }
}

fn section_entry(entry: &IntersectionObserverEntry) -> SectionEntry {
    SectionEntry::new(
        entry.target().id(),
        entry.is_intersecting(),
        entry.bounding_client_rect().top(),
    )
}

/// Smooth-scroll clicks on in-page nav links.
pub fn register_smooth_scroll(
    router: &mut ClickRouter,
    ctx: &PageContext,
    menu: Option<MenuBinding>,
) {
    let page = ctx.clone();
    router.route(
        "smooth-scroll",
        closest(&ctx.config().selectors.nav_anchor_links),
        move |link, event| {
            let href = link.get_attribute("href").unwrap_or_default();
            let top = match LinkTarget::parse(&href) {
                LinkTarget::Anchor(id) => {
                    let Some(target) = page.document().get_element_by_id(&id) else {
                        tracing::debug!(href = %href, "anchor target missing");
                        return;
                    };
                    let top = page.document_top(&target);
                    scroll_offset(top, page.header_height(), &page.config().nav)
                }
                LinkTarget::Top => 0.0,
                LinkTarget::External => return,
            };
            event.prevent_default();
            page.smooth_scroll_to(top);
            if let Some(menu) = &menu {
                menu.close();
            }
        },
    );
}
