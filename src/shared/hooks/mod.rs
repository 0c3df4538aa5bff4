// Custom Dioxus hooks
pub mod use_knowledge_route;
pub mod use_knowledge_summary;
pub mod use_translation;
pub mod use_viewport;

pub use use_knowledge_route::{use_navigate, use_route_context};
pub use use_knowledge_summary::use_knowledge_summary;
pub use use_translation::{save_language, use_language, use_language_provider, use_translation};
pub use use_viewport::{use_viewport, ResizeSource, ResizeSubscription, ViewportState};
