use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Who may see and edit a knowledge base
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnowledgePermission {
    #[default]
    Me,
    Team,
}

/// Knowledge base record as stored on the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub permission: KnowledgePermission,
    #[serde(default)]
    pub document_count: usize,
    #[serde(default)]
    pub chunk_count: usize,
    pub updated_at: DateTime<Utc>,
}

impl KnowledgeBase {
    pub fn summary(&self) -> KnowledgeSummary {
        KnowledgeSummary {
            avatar: self.avatar.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

/// What the sidebar shows about the selected knowledge base.
/// Missing fields deserialize (and render) as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeSummary {
    pub avatar: String,
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_summary_deserializes_with_empty_fields() {
        let summary: KnowledgeSummary = serde_json::from_str(r#"{"name":"N"}"#).unwrap();
        assert_eq!(summary.name, "N");
        assert_eq!(summary.avatar, "");
        assert_eq!(summary.description, "");

        let empty: KnowledgeSummary = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, KnowledgeSummary::default());
    }

    #[test]
    fn test_summary_projection() {
        let kb: KnowledgeBase = serde_json::from_str(
            r#"{
                "id": "abc",
                "name": "N",
                "avatar": "u",
                "description": "D",
                "permission": "team",
                "updated_at": "2026-10-01T00:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(kb.permission, KnowledgePermission::Team);
        assert_eq!(kb.document_count, 0);
        assert_eq!(
            kb.summary(),
            KnowledgeSummary {
                avatar: "u".to_string(),
                name: "N".to_string(),
                description: "D".to_string(),
            }
        );
    }
}
