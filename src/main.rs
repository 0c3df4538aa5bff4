//! Knowledge Base Console - Main Entry Point
//!
//! Configures the server with the knowledge API routes and the Dioxus application.
//! Uses dioxus::serve() pattern for dx serve compatibility.

use knowledge_base_console::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    // IMPORTANT: Use dioxus::server::axum, NOT axum directly
    use dioxus::server::axum::routing::get;
    use knowledge_base_console::handlers::{get_knowledge_handler, list_knowledge_handler};
    use knowledge_base_console::infrastructure::global_store;

    std::panic::set_hook(Box::new(|panic_info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        eprintln!("\n=== PANIC CAUGHT ===");
        eprintln!("Panic info: {}", panic_info);
        eprintln!("Backtrace:\n{}", backtrace);
        eprintln!("=== END PANIC ===\n");
    }));

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Knowledge Base Console...");

    dioxus::serve(|| {
        async move {
            // Load the knowledge data before the first request
            tracing::info!("{} knowledge bases available", global_store().len());

            // NOTE: Axum 0.8 uses {param} syntax instead of :param
            let router = dioxus::server::router(App)
                .route("/api/knowledge", get(list_knowledge_handler))
                .route("/api/knowledge/{knowledge_id}", get(get_knowledge_handler));

            Ok(router)
        }
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Knowledge Base Console - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
// No resize source here: the viewport stays at its 1280x800 default
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
