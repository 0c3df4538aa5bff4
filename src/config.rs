//! Runtime configuration read from the environment.

use std::path::PathBuf;

/// Default location of the knowledge base records
pub const DEFAULT_KNOWLEDGE_DATA_PATH: &str = "data/knowledge_bases.json";

/// Default port for the standalone API server
pub const DEFAULT_API_PORT: u16 = 3001;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// JSON file holding the knowledge base records (`KNOWLEDGE_DATA_PATH`)
    pub knowledge_data_path: PathBuf,
    /// Port of the standalone API server (`PORT`)
    pub api_port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            knowledge_data_path: PathBuf::from(DEFAULT_KNOWLEDGE_DATA_PATH),
            api_port: DEFAULT_API_PORT,
        }
    }
}

impl AppConfig {
    /// Build the configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup (unset or invalid values use defaults)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let knowledge_data_path = lookup("KNOWLEDGE_DATA_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.knowledge_data_path);

        let api_port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.api_port);

        Self {
            knowledge_data_path,
            api_port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.knowledge_data_path, PathBuf::from("data/knowledge_bases.json"));
        assert_eq!(config.api_port, 3001);
    }

    #[test]
    fn test_reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("KNOWLEDGE_DATA_PATH", "/srv/kb.json"),
            ("PORT", "8080"),
        ]));
        assert_eq!(config.knowledge_data_path, PathBuf::from("/srv/kb.json"));
        assert_eq!(config.api_port, 8080);
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = AppConfig::from_lookup(lookup_from(&[("PORT", "not-a-port"), ("KNOWLEDGE_DATA_PATH", "  ")]));
        assert_eq!(config.api_port, DEFAULT_API_PORT);
        assert_eq!(config.knowledge_data_path, PathBuf::from(DEFAULT_KNOWLEDGE_DATA_PATH));
    }
}
