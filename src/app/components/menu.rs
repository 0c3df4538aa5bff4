//! Selectable vertical menu (BEM: c-menu)

use dioxus::prelude::*;

use crate::app::components::icons::MenuIconView;
use crate::domain::models::{KnowledgeRouteKey, MenuItem};

/// Menu rendering `items`, highlighting `selected_key`.
/// `on_select` fires once per click on an enabled item.
#[component]
pub fn Menu(
    items: Vec<MenuItem>,
    #[props(!optional)] selected_key: Option<KnowledgeRouteKey>,
    #[props(default)] class: String,
    on_select: EventHandler<KnowledgeRouteKey>,
) -> Element {
    rsx! {
        ul { class: "c-menu {class}", role: "menu",
            for item in items {
                MenuEntry {
                    key: "{item.key}",
                    item: item.clone(),
                    selected_key,
                    on_select,
                }
            }
        }
    }
}

/// Key reported when `item` is clicked; disabled items report nothing
fn selection_key(item: &MenuItem) -> Option<KnowledgeRouteKey> {
    (!item.disabled).then_some(item.key)
}

#[component]
fn MenuEntry(
    item: MenuItem,
    #[props(!optional)] selected_key: Option<KnowledgeRouteKey>,
    on_select: EventHandler<KnowledgeRouteKey>,
) -> Element {
    let selected = selected_key == Some(item.key);
    let disabled = item.disabled;
    let selection = selection_key(&item);

    let mut class = String::from("c-menu__item");
    if selected {
        class.push_str(" c-menu__item--selected");
    }
    if disabled {
        class.push_str(" c-menu__item--disabled");
    }

    rsx! {
        li {
            class: "{class}",
            role: "menuitem",
            "aria-current": if selected { "page" } else { "false" },
            "aria-disabled": "{disabled}",
            onclick: move |evt| {
                evt.stop_propagation();
                if let Some(key) = selection {
                    on_select.call(key);
                }
            },
            span { class: "c-menu__icon", MenuIconView { icon: item.icon } }
            span { class: "c-menu__label", "{item.label}" }
        }
        if !item.children.is_empty() {
            ul { class: "c-menu__submenu",
                for child in item.children.iter().cloned() {
                    MenuEntry {
                        key: "{child.key}",
                        item: child,
                        selected_key,
                        on_select,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{derive_menu_items, RouteFlags};

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn items() -> Vec<MenuItem> {
        derive_menu_items(RouteFlags::default(), &|key: &str| {
            key.rsplit('.').next().unwrap_or(key).to_string()
        })
    }

    fn configuration_selected() -> Element {
        rsx! {
            Menu {
                items: items(),
                selected_key: Some(KnowledgeRouteKey::Configuration),
                on_select: move |_: KnowledgeRouteKey| {},
            }
        }
    }

    fn nothing_selected() -> Element {
        rsx! {
            Menu {
                items: items(),
                selected_key: None,
                class: "c-menu--min-width",
                on_select: move |_: KnowledgeRouteKey| {},
            }
        }
    }

    fn dataset_disabled() -> Element {
        let mut items = items();
        items[0].disabled = true;
        rsx! {
            Menu {
                items,
                selected_key: None,
                on_select: move |_: KnowledgeRouteKey| {},
            }
        }
    }

    #[test]
    fn test_marks_only_the_selected_item() {
        let html = render(configuration_selected);

        assert_eq!(html.matches("c-menu__item--selected").count(), 1);
        assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);

        let (_, after_selected) = html.split_once("c-menu__item--selected").unwrap();
        let selected_entry = after_selected.split("</li>").next().unwrap();
        assert!(selected_entry.contains(">configuration<"), "{selected_entry}");

        assert!(html.contains(">dataset<"));
        assert!(html.contains(">testing<"));
    }

    #[test]
    fn test_marks_nothing_without_match() {
        let html = render(nothing_selected);

        assert!(!html.contains("c-menu__item--selected"));
        assert!(!html.contains(r#"aria-current="page""#));
        assert!(html.contains("c-menu--min-width"));
        assert_eq!(html.matches(r#"aria-current="false""#).count(), 3);
    }

    #[test]
    fn test_disabled_item_is_marked() {
        let html = render(dataset_disabled);

        assert_eq!(html.matches("c-menu__item--disabled").count(), 1);
        assert_eq!(html.matches(r#"aria-disabled="true""#).count(), 1);
        assert_eq!(html.matches(r#"aria-disabled="false""#).count(), 2);
    }

    #[test]
    fn test_disabled_item_reports_no_selection() {
        let mut items = items();
        assert_eq!(selection_key(&items[0]), Some(KnowledgeRouteKey::Dataset));

        items[0].disabled = true;
        assert_eq!(selection_key(&items[0]), None);
        assert_eq!(selection_key(&items[1]), Some(KnowledgeRouteKey::Configuration));
    }
}
