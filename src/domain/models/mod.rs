// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod knowledge;
pub mod route;
pub mod menu;

pub use knowledge::{KnowledgeBase, KnowledgePermission, KnowledgeSummary};
pub use route::{knowledge_target, KnowledgeRouteKey, NavigationRequest, RouteContext, RouteFlags};
pub use menu::{
    active_key, derive_menu_items, select_item, MenuIcon, MenuItem, MenuWidth, SidebarLayout,
};
