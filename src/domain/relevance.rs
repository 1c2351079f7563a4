//! Keyword relevance filter for listing candidates
//!
//! A posting is relevant when its title or description names a faculty-level
//! position. Boards that are not already scoped to neuroscience must also
//! mention a domain keyword.

use serde::{Deserialize, Serialize};

/// POSITION and DOMAIN keyword lists, matched case-insensitively as substrings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordSets {
    pub position: Vec<String>,
    pub domain: Vec<String>,
}

impl Default for KeywordSets {
    fn default() -> Self {
        Self {
            position: [
                "tenure-track",
                "tenure track",
                "assistant professor",
                "assistant/associate",
                "assistant / associate",
                "assistant or associate",
                "open rank",
                "faculty",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
            domain: ["neuro", "neural", "brain", "neuroscience", "psych", "physiol", "cognit"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Per-source inclusion rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelevancePolicy {
    /// Board is pre-scoped to the domain; a position keyword is enough
    PositionOnly,
    /// Position keyword and domain keyword both required
    PositionAndDomain,
}

impl RelevancePolicy {
    pub const fn from_domain_requirement(require_domain_match: bool) -> Self {
        if require_domain_match {
            Self::PositionAndDomain
        } else {
            Self::PositionOnly
        }
    }
}

/// Lowercased keyword sets ready for matching
#[derive(Debug, Clone)]
pub struct RelevanceFilter {
    position: Vec<String>,
    domain: Vec<String>,
}

impl RelevanceFilter {
    pub fn new(keywords: &KeywordSets) -> Self {
        Self {
            position: keywords.position.iter().map(|k| k.to_lowercase()).collect(),
            domain: keywords.domain.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    pub fn is_relevant(&self, policy: RelevancePolicy, title: &str, description: &str) -> bool {
        let title = title.to_lowercase();
        let description = description.to_lowercase();

        let position_match = Self::mentions_any(&self.position, &title, &description);
        match policy {
            RelevancePolicy::PositionOnly => position_match,
            RelevancePolicy::PositionAndDomain => {
                position_match && Self::mentions_any(&self.domain, &title, &description)
            }
        }
    }

    fn mentions_any(keywords: &[String], title: &str, description: &str) -> bool {
        keywords
            .iter()
            .any(|keyword| title.contains(keyword.as_str()) || description.contains(keyword.as_str()))
    }
}
