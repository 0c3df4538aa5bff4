use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::domain::models::{KnowledgeBase, KnowledgeSummary};
use crate::infrastructure::global_store;
use crate::server_fns::KnowledgeBaseResponse;
use crate::shared::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct KnowledgeQuery {
    #[serde(default)]
    pub search: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::KnowledgeNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidKnowledgeId(_) => StatusCode::BAD_REQUEST,
            _ => {
                tracing::error!("Knowledge API error: {}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// GET /api/knowledge
/// List knowledge bases, optionally filtered by name
pub async fn list_knowledge_handler(
    Query(params): Query<KnowledgeQuery>,
) -> Json<Vec<KnowledgeBaseResponse>> {
    let knowledge_bases = filter_by_name(global_store().list(), &params.search);

    Json(
        knowledge_bases
            .into_iter()
            .map(KnowledgeBaseResponse::from)
            .collect(),
    )
}

/// Keep records whose name contains `search`, ignoring case; an empty search keeps all
fn filter_by_name(mut knowledge_bases: Vec<KnowledgeBase>, search: &str) -> Vec<KnowledgeBase> {
    if !search.is_empty() {
        let search_lower = search.to_lowercase();
        knowledge_bases.retain(|kb| kb.name.to_lowercase().contains(&search_lower));
    }
    knowledge_bases
}

/// GET /api/knowledge/{knowledge_id}
/// Summary shown in the knowledge sidebar
pub async fn get_knowledge_handler(
    Path(knowledge_id): Path<String>,
) -> Result<Json<KnowledgeSummary>, AppError> {
    let _span = crate::log_context!(knowledge_id.as_str()).entered();
    let knowledge = global_store().get(&knowledge_id)?;
    Ok(Json(knowledge.summary()))
}

/// Routes of the knowledge API
pub fn api_router() -> Router {
    // NOTE: Axum 0.8 uses {param} syntax instead of :param
    Router::new()
        .route("/api/knowledge", get(list_knowledge_handler))
        .route("/api/knowledge/{knowledge_id}", get(get_knowledge_handler))
}
