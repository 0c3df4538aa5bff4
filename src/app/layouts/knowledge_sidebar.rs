use dioxus::prelude::*;

use crate::app::components::Menu;
use crate::app::pages::knowledge_routes::Route;
use crate::domain::models::{
    active_key, derive_menu_items, select_item, KnowledgeRouteKey, KnowledgeSummary, SidebarLayout,
};
use crate::shared::hooks::{
    use_knowledge_summary, use_navigate, use_route_context, use_translation, use_viewport,
};
use crate::shared::logging::{log_collapse_change, log_menu_derived, log_navigation_request};

/// Sidebar of the knowledge base pages: summary of the selected knowledge
/// base above a route-dependent section menu.
#[component]
pub fn KnowledgeSidebar() -> Element {
    let navigate = use_navigate();
    let route = use_route_context();
    let translator = use_translation();
    let viewport = use_viewport();
    let knowledge = use_knowledge_summary(route.knowledge_id.clone());

    let flags = route.flags();
    let items = use_memo(use_reactive!(|(flags, translator)| {
        let items = derive_menu_items(flags, &|key: &str| translator.t(key));
        log_menu_derived(flags.in_knowledge, flags.in_retrievability, items.len());
        items
    }));

    // Tracked for narrow viewports; the menu itself does not collapse
    let collapsed = use_memo(move || SidebarLayout::for_width(viewport().width).collapsed);
    use_effect(move || {
        let collapsed = collapsed();
        log_collapse_change(viewport.peek().width, collapsed);
    });

    let menu_class = SidebarLayout::for_width(viewport().width).menu_width.class();
    let selected_key = active_key(&items.read(), &route.second_segment);
    let knowledge_id = route.knowledge_id.clone();

    rsx! {
        aside { class: "c-knowledge-sidebar",
            KnowledgeSummaryPanel { summary: knowledge }
            div { class: "c-knowledge-sidebar__divider" }
            nav { class: "c-knowledge-sidebar__menu",
                Menu {
                    items: items(),
                    selected_key,
                    class: "{menu_class}",
                    on_select: move |key: KnowledgeRouteKey| {
                        select_item(key, &knowledge_id, |request| {
                            log_navigation_request(request.key.as_str(), &request.path());
                            navigate(Route::knowledge(request.key, request.knowledge_id));
                        });
                    },
                }
            }
        }
    }
}

/// Avatar, name and description, rendered as given
#[component]
pub fn KnowledgeSummaryPanel(summary: KnowledgeSummary) -> Element {
    rsx! {
        div { class: "c-knowledge-sidebar__top",
            div { class: "c-knowledge-sidebar__identity",
                img {
                    class: "c-knowledge-sidebar__avatar",
                    src: "{summary.avatar}",
                    alt: "",
                }
                div { class: "c-knowledge-sidebar__title", "{summary.name}" }
            }
            p { class: "c-knowledge-sidebar__description", "{summary.description}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn filled_summary() -> Element {
        rsx! {
            KnowledgeSummaryPanel {
                summary: KnowledgeSummary {
                    avatar: "u".to_string(),
                    name: "N".to_string(),
                    description: "D".to_string(),
                },
            }
        }
    }

    fn empty_summary() -> Element {
        rsx! {
            KnowledgeSummaryPanel { summary: KnowledgeSummary::default() }
        }
    }

    #[test]
    fn test_summary_panel_renders_fields_verbatim() {
        let html = render(filled_summary);

        assert!(html.contains(r#"src="u""#), "{html}");
        assert!(html.contains(r#"class="c-knowledge-sidebar__title">N</div>"#), "{html}");
        assert!(html.contains(r#"class="c-knowledge-sidebar__description">D</p>"#), "{html}");
    }

    #[test]
    fn test_empty_summary_renders_blank_fields() {
        let html = render(empty_summary);

        assert!(html.contains("c-knowledge-sidebar__avatar"));
        assert!(html.contains("c-knowledge-sidebar__title"));
        assert!(html.contains("c-knowledge-sidebar__description"));
        assert!(!html.contains(">N<"));
        assert!(!html.contains(">D<"));
    }
}
