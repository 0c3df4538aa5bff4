//! Route-derived state read by the knowledge sidebar.

use std::fmt;
use std::str::FromStr;

use crate::shared::constants::KNOWLEDGE_ID_PARAM;

/// Sections reachable from the knowledge sidebar.
/// The string form is both the menu key and the route segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnowledgeRouteKey {
    Dataset,
    Configuration,
    Testing,
}

impl KnowledgeRouteKey {
    pub const ALL: [KnowledgeRouteKey; 3] = [
        KnowledgeRouteKey::Dataset,
        KnowledgeRouteKey::Configuration,
        KnowledgeRouteKey::Testing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KnowledgeRouteKey::Dataset => "dataset",
            KnowledgeRouteKey::Configuration => "configuration",
            KnowledgeRouteKey::Testing => "testing",
        }
    }
}

impl fmt::Display for KnowledgeRouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KnowledgeRouteKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dataset" => Ok(KnowledgeRouteKey::Dataset),
            "configuration" => Ok(KnowledgeRouteKey::Configuration),
            "testing" => Ok(KnowledgeRouteKey::Testing),
            _ => Err(()),
        }
    }
}

/// Path-based flags that decide which menu items exist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteFlags {
    pub in_knowledge: bool,
    pub in_retrievability: bool,
}

impl RouteFlags {
    pub fn from_path(path: &str) -> Self {
        Self {
            in_knowledge: path.contains("/knowledge"),
            in_retrievability: path.contains("/retrievability"),
        }
    }
}

/// Current location as the sidebar sees it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteContext {
    /// Path without the query string
    pub current_path: String,
    /// Second non-empty path segment, empty when the path is shorter
    pub second_segment: String,
    /// Decoded `id` query parameter, empty when absent
    pub knowledge_id: String,
}

impl RouteContext {
    /// Parse a router location such as `/knowledge/dataset?id=abc`
    pub fn parse(location: &str) -> Self {
        let (path, query) = match location.split_once('?') {
            Some((path, query)) => (path, query),
            None => (location, ""),
        };
        let path = path.split('#').next().unwrap_or_default();

        let second_segment = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .nth(1)
            .unwrap_or_default()
            .to_string();

        let knowledge_id = query_param(query, KNOWLEDGE_ID_PARAM).unwrap_or_default();

        Self {
            current_path: path.to_string(),
            second_segment,
            knowledge_id,
        }
    }

    pub fn flags(&self) -> RouteFlags {
        RouteFlags::from_path(&self.current_path)
    }
}

fn query_param(query: &str, name: &str) -> Option<String> {
    let query = query.split('#').next().unwrap_or_default();
    query
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            let value = value.replace('+', " ");
            urlencoding::decode(&value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or(value)
        })
}

/// Navigation emitted by a menu selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub key: KnowledgeRouteKey,
    pub knowledge_id: String,
}

impl NavigationRequest {
    /// `/knowledge/{key}?id={knowledge_id}`
    pub fn path(&self) -> String {
        knowledge_target(self.key, &self.knowledge_id)
    }
}

/// Path a menu selection navigates to
pub fn knowledge_target(key: KnowledgeRouteKey, knowledge_id: &str) -> String {
    format!(
        "/knowledge/{}?{}={}",
        key.as_str(),
        KNOWLEDGE_ID_PARAM,
        urlencoding::encode(knowledge_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_knowledge_location() {
        let ctx = RouteContext::parse("/knowledge/dataset?id=abc");
        assert_eq!(ctx.current_path, "/knowledge/dataset");
        assert_eq!(ctx.second_segment, "dataset");
        assert_eq!(ctx.knowledge_id, "abc");
        assert_eq!(
            ctx.flags(),
            RouteFlags { in_knowledge: true, in_retrievability: false }
        );
    }

    #[test]
    fn test_parse_without_query_or_segment() {
        let ctx = RouteContext::parse("/");
        assert_eq!(ctx.current_path, "/");
        assert_eq!(ctx.second_segment, "");
        assert_eq!(ctx.knowledge_id, "");
        assert_eq!(ctx.flags(), RouteFlags::default());
    }

    #[test]
    fn test_parse_decodes_id_among_other_params() {
        let ctx = RouteContext::parse("/retrievability/testing?page=2&id=kb%201#top");
        assert_eq!(ctx.second_segment, "testing");
        assert_eq!(ctx.knowledge_id, "kb 1");
        assert!(ctx.flags().in_retrievability);
        assert!(!ctx.flags().in_knowledge);
    }

    #[test]
    fn test_flags_ignore_query_string() {
        let ctx = RouteContext::parse("/retrievability/testing?from=/knowledge");
        assert!(!ctx.flags().in_knowledge);
    }

    #[test]
    fn test_knowledge_target() {
        assert_eq!(
            knowledge_target(KnowledgeRouteKey::Configuration, "abc"),
            "/knowledge/configuration?id=abc"
        );
        assert_eq!(
            knowledge_target(KnowledgeRouteKey::Dataset, "a b"),
            "/knowledge/dataset?id=a%20b"
        );
    }

    #[test]
    fn test_target_round_trips_id_with_reserved_characters() {
        let request = NavigationRequest {
            key: KnowledgeRouteKey::Dataset,
            knowledge_id: "a b&c".to_string(),
        };
        assert_eq!(request.path(), "/knowledge/dataset?id=a%20b%26c");

        let ctx = RouteContext::parse(&request.path());
        assert_eq!(ctx.second_segment, "dataset");
        assert_eq!(ctx.knowledge_id, "a b&c");
    }

    #[test]
    fn test_route_key_round_trip() {
        for key in KnowledgeRouteKey::ALL {
            assert_eq!(key.as_str().parse::<KnowledgeRouteKey>(), Ok(key));
        }
        assert!("retrievability".parse::<KnowledgeRouteKey>().is_err());
    }
}
