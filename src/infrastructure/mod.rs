// Server-side infrastructure
pub mod knowledge_store;

pub use knowledge_store::{global_store, KnowledgeStore};
