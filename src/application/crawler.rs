//! Runs the pagination walker over every configured board

use anyhow::Result;
use tracing::info;

use super::pagination_walker::PaginationWalker;
use crate::domain::JobCandidate;
use crate::infrastructure::config::SourceConfig;

pub struct MultiSourceCrawler {
    walker: PaginationWalker,
}

impl MultiSourceCrawler {
    pub fn new(walker: PaginationWalker) -> Self {
        Self { walker }
    }

    /// Candidates from all sources, in source order. Duplicates across boards
    /// are kept. The first failing source aborts the crawl.
    pub async fn crawl(&self, sources: &[SourceConfig]) -> Result<Vec<JobCandidate>> {
        let mut candidates = Vec::new();

        for source in sources {
            info!("Crawling {} from {}", source.id, source.start_url);
            let found = self.walker.walk(source).await?;
            info!("{}: {} relevant job(s)", source.id, found.len());
            candidates.extend(found);
        }

        info!("Crawl finished with {} candidate(s)", candidates.len());
        Ok(candidates)
    }
}
