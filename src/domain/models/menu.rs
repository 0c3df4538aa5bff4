//! Knowledge sidebar menu model: item derivation, selection and width style.

use crate::domain::models::route::{KnowledgeRouteKey, NavigationRequest, RouteFlags};
use crate::shared::constants::{KNOWLEDGE_DETAILS_NAMESPACE, SIDEBAR_BREAKPOINT};

/// Icon shown next to a menu label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Dataset,
    Configuration,
    Testing,
}

impl From<KnowledgeRouteKey> for MenuIcon {
    fn from(key: KnowledgeRouteKey) -> Self {
        match key {
            KnowledgeRouteKey::Dataset => MenuIcon::Dataset,
            KnowledgeRouteKey::Configuration => MenuIcon::Configuration,
            KnowledgeRouteKey::Testing => MenuIcon::Testing,
        }
    }
}

/// One selectable sidebar entry
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub key: KnowledgeRouteKey,
    pub label: String,
    pub icon: MenuIcon,
    pub children: Vec<MenuItem>,
    pub disabled: bool,
}

impl MenuItem {
    /// Build an item whose label is `t("knowledgeDetails.{key}")`
    pub fn new<T>(key: KnowledgeRouteKey, t: &T) -> Self
    where
        T: Fn(&str) -> String,
    {
        Self {
            key,
            label: t(&format!("{}.{}", KNOWLEDGE_DETAILS_NAMESPACE, key.as_str())),
            icon: MenuIcon::from(key),
            children: Vec::new(),
            disabled: false,
        }
    }
}

/// Items for the current route.
///
/// Testing is hidden under `/knowledge`, Dataset and Configuration are hidden
/// under `/retrievability`; a path containing both yields no items.
pub fn derive_menu_items<T>(flags: RouteFlags, t: &T) -> Vec<MenuItem>
where
    T: Fn(&str) -> String,
{
    let mut items = Vec::new();

    if !flags.in_knowledge {
        items.push(MenuItem::new(KnowledgeRouteKey::Testing, t));
    }

    if !flags.in_retrievability {
        items.splice(
            0..0,
            [
                MenuItem::new(KnowledgeRouteKey::Dataset, t),
                MenuItem::new(KnowledgeRouteKey::Configuration, t),
            ],
        );
    }

    items
}

/// Item to highlight: the one whose key equals the second path segment
pub fn active_key(items: &[MenuItem], second_segment: &str) -> Option<KnowledgeRouteKey> {
    items
        .iter()
        .map(|item| item.key)
        .find(|key| key.as_str() == second_segment)
}

/// Forward a selection to `navigate`; the request's path is
/// `/knowledge/{key}?id={knowledge_id}`
pub fn select_item<F>(key: KnowledgeRouteKey, knowledge_id: &str, mut navigate: F)
where
    F: FnMut(NavigationRequest),
{
    navigate(NavigationRequest {
        key,
        knowledge_id: knowledge_id.to_string(),
    });
}

/// Width style of the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuWidth {
    DefaultWidth,
    MinWidth,
}

impl MenuWidth {
    pub fn class(&self) -> &'static str {
        match self {
            MenuWidth::DefaultWidth => "c-menu--default-width",
            MenuWidth::MinWidth => "c-menu--min-width",
        }
    }
}

/// Width-dependent sidebar state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarLayout {
    /// Computed for every width but not applied to the menu itself
    pub collapsed: bool,
    pub menu_width: MenuWidth,
}

impl SidebarLayout {
    pub fn for_width(width: u32) -> Self {
        let wide = width > SIDEBAR_BREAKPOINT;
        Self {
            collapsed: !wide,
            menu_width: if wide { MenuWidth::DefaultWidth } else { MenuWidth::MinWidth },
        }
    }
}
