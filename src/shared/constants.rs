/// Viewport width (px) at or below which the sidebar menu uses its narrow style
pub const SIDEBAR_BREAKPOINT: u32 = 957;

/// Translation namespace for sidebar labels
pub const KNOWLEDGE_DETAILS_NAMESPACE: &str = "knowledgeDetails";

/// Viewport assumed before the browser reports one (server render, first paint)
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 800;

/// localStorage key holding the UI language
pub const LANGUAGE_STORAGE_KEY: &str = "lng";

/// Query parameter carrying the knowledge base id
pub const KNOWLEDGE_ID_PARAM: &str = "id";
