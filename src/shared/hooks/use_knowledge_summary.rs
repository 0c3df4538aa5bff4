use dioxus::prelude::*;

use crate::domain::models::KnowledgeSummary;
use crate::server_fns::get_knowledge_configuration;
use crate::shared::logging::log_knowledge_fetch_error;

/// Summary of the knowledge base `knowledge_id`.
///
/// Re-fetches when the id changes. Returns an empty summary while loading,
/// when the id is empty, and when the fetch fails (the failure is logged).
pub fn use_knowledge_summary(knowledge_id: String) -> KnowledgeSummary {
    let summary = use_resource(use_reactive!(|(knowledge_id,)| async move {
        if knowledge_id.is_empty() {
            return KnowledgeSummary::default();
        }

        match get_knowledge_configuration(knowledge_id.clone()).await {
            Ok(summary) => summary,
            Err(e) => {
                log_knowledge_fetch_error(&knowledge_id, &e.to_string());
                KnowledgeSummary::default()
            }
        }
    }));

    let current = (*summary.read()).clone();
    current.unwrap_or_default()
}
