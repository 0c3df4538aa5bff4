use dioxus::prelude::*;

use crate::app::pages::knowledge_routes::Route;
use crate::domain::models::RouteContext;
use crate::shared::logging::{log_navigation_rejected, log_route_resolved};

/// Route context of the current location
pub fn use_route_context() -> RouteContext {
    let route = use_route::<Route>();
    let mut context = RouteContext::parse(&route.to_string());

    // The typed route holds the id exactly as it was pushed
    if let Some(id) = route.knowledge_id() {
        context.knowledge_id = id.to_string();
    }

    log_route_resolved(&context.current_path, &context.second_segment, &context.knowledge_id);
    context
}

/// Navigation function pushing typed routes
pub fn use_navigate() -> impl Fn(Route) + Copy + 'static {
    let nav = navigator();
    move |route: Route| {
        push_route(route, |route| nav.push(route));
    }
}

/// Hand `route` to `push`, logging a failure it reports. Returns whether it was accepted.
fn push_route<F, E>(route: Route, push: F) -> bool
where
    F: FnOnce(Route) -> Option<E>,
    E: std::fmt::Debug,
{
    let target = route.to_string();
    match push(route) {
        Some(failure) => {
            log_navigation_rejected(&target, &format!("{:?}", failure));
            false
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::KnowledgeRouteKey;

    #[test]
    fn test_push_hands_over_typed_route() {
        let mut pushed = Vec::new();
        let accepted = push_route(Route::knowledge(KnowledgeRouteKey::Dataset, "a b&c"), |route| {
            pushed.push(route);
            None::<String>
        });

        assert!(accepted);
        assert_eq!(pushed, vec![Route::Dataset { id: "a b&c".to_string() }]);
        assert_eq!(pushed[0].knowledge_id(), Some("a b&c"));
    }

    #[test]
    fn test_rejected_push_is_reported() {
        let accepted = push_route(Route::knowledge(KnowledgeRouteKey::Testing, "abc"), |_| {
            Some("external navigation failure")
        });
        assert!(!accepted);
    }
}
