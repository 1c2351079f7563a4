//! Crawl → enrich → normalize

use std::sync::Arc;

use anyhow::Result;

use super::crawler::MultiSourceCrawler;
use super::enricher::DetailEnricher;
use super::pagination_walker::{CrawlSettings, PaginationWalker};
use crate::domain::normalization::normalize_table;
use crate::domain::{EnrichedJob, PageFetcher};
use crate::infrastructure::config::{AppConfig, SourceConfig};
use crate::infrastructure::parsing::{JobDetailParser, JobListParser};

pub struct JobAdsPipeline {
    sources: Vec<SourceConfig>,
    crawler: MultiSourceCrawler,
    enricher: DetailEnricher,
}

impl JobAdsPipeline {
    /// Build parsers from the configured selectors and keywords
    pub fn new(config: &AppConfig, fetcher: Arc<dyn PageFetcher>, settings: CrawlSettings) -> Result<Self> {
        let list_parser = JobListParser::with_config(&config.selectors.listing, &config.keywords)?;
        let detail_parser = JobDetailParser::with_config(&config.selectors.detail)?;

        let walker = PaginationWalker::new(fetcher.clone(), Arc::new(list_parser), settings);

        Ok(Self {
            sources: config.sources.clone(),
            crawler: MultiSourceCrawler::new(walker),
            enricher: DetailEnricher::new(fetcher, detail_parser),
        })
    }

    /// Full run; the returned table is cleaned and sorted
    pub async fn run(&self) -> Result<Vec<EnrichedJob>> {
        let candidates = self.crawler.crawl(&self.sources).await?;
        let jobs = self.enricher.enrich_all(candidates).await?;
        Ok(normalize_table(jobs))
    }
}
