pub mod knowledge_sidebar;
pub mod navbar;

pub use knowledge_sidebar::{KnowledgeSidebar, KnowledgeSummaryPanel};
pub use navbar::AppNavbar;
