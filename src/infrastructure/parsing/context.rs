//! Parsing context for listing pages

use crate::domain::{JobSource, RelevancePolicy};

/// What the listing parser needs to know about the page it is reading
#[derive(Debug, Clone)]
pub struct ParseContext {
    pub source: JobSource,

    /// Base URL for resolving relative links
    pub base_url: String,

    pub policy: RelevancePolicy,

    /// 1-based page number within the current walk, for logging
    pub page_number: u32,
}

impl ParseContext {
    pub fn new(source: JobSource, base_url: impl Into<String>, policy: RelevancePolicy) -> Self {
        Self {
            source,
            base_url: base_url.into(),
            policy,
            page_number: 1,
        }
    }

    pub fn with_page_number(mut self, page_number: u32) -> Self {
        self.page_number = page_number;
        self
    }
}

/// Context for a single detail page
#[derive(Debug, Clone)]
pub struct DetailParseContext {
    /// Detail page URL being parsed
    pub url: String,
}

impl DetailParseContext {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}
