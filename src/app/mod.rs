pub mod components;
pub mod layouts;
pub mod pages;

// Re-export the knowledge console App
pub use pages::knowledge_routes::App;
