// HTTP handlers for the standalone JSON API
pub mod knowledge;

pub use knowledge::{api_router, get_knowledge_handler, list_knowledge_handler};
