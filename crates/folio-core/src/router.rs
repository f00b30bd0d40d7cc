//! Delegated event routing.
//!
//! One listener at the document root hands every event to a [`Router`],
//! which runs each route whose matcher accepts the event target. Matchers
//! return the node the handler should act on (typically the closest
//! ancestor matching a selector), so the router works for any node type.

/// Finds the node a route applies to, if any.
pub type Matcher<T> = Box<dyn Fn(&T) -> Option<T>>;
/// Handles a matched node and the originating event.
pub type Handler<T, E> = Box<dyn FnMut(&T, &E)>;

struct Route<T, E> {
    name: &'static str,
    matcher: Matcher<T>,
    handler: Handler<T, E>,
}

pub struct Router<T, E> {
    routes: Vec<Route<T, E>>,
}

impl<T, E> Default for Router<T, E> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<T, E> Router<T, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route. Routes run in registration order.
    pub fn route(
        &mut self,
        name: &'static str,
        matcher: impl Fn(&T) -> Option<T> + 'static,
        handler: impl FnMut(&T, &E) + 'static,
    ) -> &mut Self {
        self.routes.push(Route {
            name,
            matcher: Box::new(matcher),
            handler: Box::new(handler),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.iter().map(|route| route.name)
    }

    /// Run every matching route for `target`. Returns how many ran.
    pub fn dispatch(&mut self, target: &T, event: &E) -> usize {
        let mut handled = 0;
        for route in &mut self.routes {
            if let Some(matched) = (route.matcher)(target) {
                tracing::trace!(route = route.name, "dispatching");
                (route.handler)(&matched, event);
                handled += 1;
            }
        }
        handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Path-like node: "nav/ul/a.item" matches ancestors by prefix.
    fn closest(prefix: &'static str) -> impl Fn(&String) -> Option<String> {
        move |node: &String| {
            node.split('/')
                .scan(String::new(), |acc, part| {
                    if !acc.is_empty() {
                        acc.push('/');
                    }
                    acc.push_str(part);
                    Some(acc.clone())
                })
                .filter(|ancestor| ancestor.ends_with(prefix))
                .last()
        }
    }

    #[test]
    fn runs_all_matching_routes_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut router: Router<String, u32> = Router::new();

        let l = log.clone();
        router.route("links", closest("a"), move |node, ev| {
            l.borrow_mut().push(format!("links:{}:{}", node, ev));
        });
        let l = log.clone();
        router.route("nav", closest("nav"), move |node, _| {
            l.borrow_mut().push(format!("nav:{}", node));
        });
        let l = log.clone();
        router.route("button", closest("button"), move |_, _| {
            l.borrow_mut().push("button".to_string());
        });

        let handled = router.dispatch(&"nav/ul/a".to_string(), &7);
        assert_eq!(handled, 2);
        assert_eq!(*log.borrow(), vec!["links:nav/ul/a:7", "nav:nav"]);
    }

    #[test]
    fn unmatched_target_runs_nothing() {
        let mut router: Router<String, ()> = Router::new();
        router.route("never", |_: &String| None, |_, _| panic!("should not run"));
        assert_eq!(router.dispatch(&"body".to_string(), &()), 0);
        assert_eq!(router.names().collect::<Vec<_>>(), vec!["never"]);
    }
}
