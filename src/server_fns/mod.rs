//! Server functions for Dioxus Fullstack
//! These functions run on the server and are callable from the client

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::models::{KnowledgeBase, KnowledgePermission, KnowledgeSummary};

/// Response type for knowledge base listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeBaseResponse {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub description: String,
    pub permission: KnowledgePermission,
    pub document_count: usize,
    pub updated_at: String,
}

impl From<KnowledgeBase> for KnowledgeBaseResponse {
    fn from(kb: KnowledgeBase) -> Self {
        Self {
            id: kb.id,
            name: kb.name,
            avatar: kb.avatar,
            description: kb.description,
            permission: kb.permission,
            document_count: kb.document_count,
            updated_at: kb.updated_at.to_rfc3339(),
        }
    }
}

/// Summary (avatar, name, description) of one knowledge base
#[server]
pub async fn get_knowledge_configuration(knowledge_id: String) -> Result<KnowledgeSummary, ServerFnError> {
    use crate::infrastructure::knowledge_store::global_store;

    let knowledge = global_store()
        .get(&knowledge_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(knowledge.summary())
}

/// All knowledge bases, sorted by name
#[server]
pub async fn list_knowledge_bases() -> Result<Vec<KnowledgeBaseResponse>, ServerFnError> {
    use crate::infrastructure::knowledge_store::global_store;

    let results: Vec<KnowledgeBaseResponse> = global_store()
        .list()
        .into_iter()
        .map(KnowledgeBaseResponse::from)
        .collect();

    tracing::debug!("list_knowledge_bases: {} knowledge bases", results.len());

    Ok(results)
}
