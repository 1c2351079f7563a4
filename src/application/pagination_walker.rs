//! Follows `rel="next"` links through one board's listing pages

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::domain::{JobCandidate, PageFetcher};
use crate::infrastructure::config::{CrawlingConfig, SourceConfig};
use crate::infrastructure::parsing::{JobListParser, ParseContext};

/// Page limits for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlSettings {
    pub debug_mode: bool,
    pub debug_page_limit: u32,
    pub max_pages: Option<u32>,
}

impl CrawlSettings {
    pub fn from_config(config: &CrawlingConfig, debug_mode: bool) -> Self {
        Self {
            debug_mode,
            debug_page_limit: config.debug_page_limit,
            max_pages: config.max_pages,
        }
    }

    /// Pages to fetch per source; `None` means follow links until they run out
    pub fn page_limit(&self) -> Option<u32> {
        match (self.debug_mode, self.max_pages) {
            (true, Some(max)) => Some(max.min(self.debug_page_limit)),
            (true, None) => Some(self.debug_page_limit),
            (false, max) => max,
        }
    }
}

impl Default for CrawlSettings {
    fn default() -> Self {
        Self::from_config(&CrawlingConfig::default(), false)
    }
}

pub struct PaginationWalker {
    fetcher: Arc<dyn PageFetcher>,
    parser: Arc<JobListParser>,
    settings: CrawlSettings,
}

impl PaginationWalker {
    pub fn new(fetcher: Arc<dyn PageFetcher>, parser: Arc<JobListParser>, settings: CrawlSettings) -> Self {
        Self {
            fetcher,
            parser,
            settings,
        }
    }

    /// Collect the relevant candidates from every listing page of `source`
    pub async fn walk(&self, source: &SourceConfig) -> Result<Vec<JobCandidate>> {
        let limit = self.settings.page_limit();
        let mut candidates = Vec::new();
        let mut visited = HashSet::new();
        let mut next_url = Some(source.start_url.clone());
        let mut page_number = 1u32;

        while let Some(url) = next_url.take() {
            if limit.is_some_and(|limit| page_number > limit) {
                info!("{}: stopping after {} page(s)", source.id, page_number - 1);
                break;
            }
            if !visited.insert(url.clone()) {
                warn!("{}: next link points back to {}, stopping", source.id, url);
                break;
            }

            info!("{} page {}: {}", source.id, page_number, url);
            let html = self
                .fetcher
                .fetch_html(&url)
                .await
                .with_context(|| format!("Failed to fetch {} listing page {}", source.id, page_number))?;

            let context = ParseContext::new(source.id, source.base_url.clone(), source.policy())
                .with_page_number(page_number);
            let page = self
                .parser
                .parse_page(&html, &context)
                .with_context(|| format!("Failed to parse {} listing page {}", source.id, url))?;

            candidates.extend(page.candidates);
            next_url = page.next_page;
            page_number += 1;
        }

        Ok(candidates)
    }
}
