//! JSON-backed knowledge base store (server-side only)

use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::path::Path;

use crate::config::AppConfig;
use crate::domain::models::KnowledgeBase;
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::{
    log_knowledge_not_found, log_store_error, log_store_loaded, log_store_missing,
};

/// Knowledge bases keyed by id
#[derive(Debug, Default)]
pub struct KnowledgeStore {
    entries: DashMap<String, KnowledgeBase>,
}

impl KnowledgeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON array of knowledge bases; a repeated id keeps the last record
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<KnowledgeBase> = serde_json::from_str(json)?;
        let store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }

    /// Load from a file; a missing file yields an empty store
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log_store_missing(path);
            return Ok(Self::new());
        }

        let json = std::fs::read_to_string(path)?;
        let store = Self::from_json(&json)?;
        log_store_loaded(path, store.len());
        Ok(store)
    }

    pub fn insert(&self, record: KnowledgeBase) -> Result<()> {
        if record.id.trim().is_empty() {
            return Err(AppError::StoreError(format!(
                "record {:?} has an empty id",
                record.name
            )));
        }
        self.entries.insert(record.id.clone(), record);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<KnowledgeBase> {
        if id.trim().is_empty() {
            return Err(AppError::InvalidKnowledgeId(id.to_string()));
        }

        match self.entries.get(id) {
            Some(entry) => Ok(entry.value().clone()),
            None => {
                log_knowledge_not_found(id);
                Err(AppError::KnowledgeNotFound(id.to_string()))
            }
        }
    }

    /// All knowledge bases, sorted by name
    pub fn list(&self) -> Vec<KnowledgeBase> {
        let mut records: Vec<KnowledgeBase> =
            self.entries.iter().map(|entry| entry.value().clone()).collect();
        records.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        records
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Process-wide store, loaded from `KNOWLEDGE_DATA_PATH` on first use
static KNOWLEDGE_STORE: Lazy<KnowledgeStore> = Lazy::new(|| {
    let config = AppConfig::from_env();
    KnowledgeStore::load(&config.knowledge_data_path).unwrap_or_else(|e| {
        log_store_error(&config.knowledge_data_path, &e.to_string());
        KnowledgeStore::new()
    })
});

pub fn global_store() -> &'static KnowledgeStore {
    &KNOWLEDGE_STORE
}
