//! Structured logging module for the knowledge base console
//!
//! Provides consistent, contextual logging across the application.
//! Uses structured fields so the same events read well in the server
//! log and in the browser console.

use std::path::Path;

/// Operations that emit log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    RouteResolution,
    MenuDerivation,
    Navigation,
    ResizeListener,
    KnowledgeFetch,
    KnowledgeStore,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::RouteResolution => "route_resolution",
            LogOperation::MenuDerivation => "menu_derivation",
            LogOperation::Navigation => "navigation",
            LogOperation::ResizeListener => "resize_listener",
            LogOperation::KnowledgeFetch => "knowledge_fetch",
            LogOperation::KnowledgeStore => "knowledge_store",
        }
    }
}

/// Log the route context the sidebar resolved
pub fn log_route_resolved(path: &str, second_segment: &str, knowledge_id: &str) {
    tracing::trace!(
        operation = LogOperation::RouteResolution.as_str(),
        path = path,
        second_segment = second_segment,
        knowledge_id = knowledge_id,
        "Resolved route context"
    );
}

/// Log a fresh menu derivation
pub fn log_menu_derived(in_knowledge: bool, in_retrievability: bool, item_count: usize) {
    tracing::debug!(
        operation = LogOperation::MenuDerivation.as_str(),
        in_knowledge = in_knowledge,
        in_retrievability = in_retrievability,
        item_count = item_count,
        "Derived sidebar menu items"
    );
}

/// Log a navigation request emitted by a menu selection
pub fn log_navigation_request(key: &str, target: &str) {
    tracing::info!(
        operation = LogOperation::Navigation.as_str(),
        menu_key = key,
        target = target,
        "Sidebar navigation requested"
    );
}

/// Log a navigation the router refused
pub fn log_navigation_rejected(target: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Navigation.as_str(),
        target = target,
        error = error,
        "Navigation rejected by the router"
    );
}

/// Log resize listener registration / removal
pub fn log_resize_listener(registered: bool) {
    tracing::debug!(
        operation = LogOperation::ResizeListener.as_str(),
        registered = registered,
        "{}",
        if registered { "Resize listener registered" } else { "Resize listener removed" }
    );
}

/// Log a change of the collapsed flag
pub fn log_collapse_change(width: u32, collapsed: bool) {
    tracing::debug!(
        operation = LogOperation::ResizeListener.as_str(),
        width = width,
        collapsed = collapsed,
        "Sidebar collapse state changed"
    );
}

/// Log a knowledge summary fetch failure (the sidebar keeps rendering)
pub fn log_knowledge_fetch_error(knowledge_id: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::KnowledgeFetch.as_str(),
        knowledge_id = knowledge_id,
        error = error,
        "Failed to fetch knowledge base configuration"
    );
}

/// Log knowledge store load result
pub fn log_store_loaded(path: &Path, count: usize) {
    tracing::info!(
        operation = LogOperation::KnowledgeStore.as_str(),
        path = %path.display(),
        knowledge_count = count,
        "Knowledge store loaded"
    );
}

/// Log a missing knowledge data file
pub fn log_store_missing(path: &Path) {
    tracing::warn!(
        operation = LogOperation::KnowledgeStore.as_str(),
        path = %path.display(),
        "Knowledge data file not found - starting with an empty store"
    );
}

/// Log knowledge store load failure
pub fn log_store_error(path: &Path, error: &str) {
    tracing::error!(
        operation = LogOperation::KnowledgeStore.as_str(),
        path = %path.display(),
        error = error,
        "Failed to load knowledge store"
    );
}

/// Log a lookup miss
pub fn log_knowledge_not_found(knowledge_id: &str) {
    tracing::debug!(
        operation = LogOperation::KnowledgeStore.as_str(),
        knowledge_id = knowledge_id,
        "Knowledge base not found"
    );
}

/// Macro for creating structured log context
#[macro_export]
macro_rules! log_context {
    ($knowledge_id:expr) => {
        tracing::info_span!("knowledge_console", knowledge_id = $knowledge_id)
    };
    ($knowledge_id:expr, $section:expr) => {
        tracing::info_span!(
            "knowledge_console",
            knowledge_id = $knowledge_id,
            section = $section
        )
    };
}
