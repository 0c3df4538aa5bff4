pub mod knowledge_routes;
pub mod knowledge_pages;

pub use knowledge_pages::{Configuration, Dataset, Home, NotFound, Retrievability, Testing};
