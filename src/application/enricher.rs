//! Detail page enrichment

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::domain::{EnrichedJob, JobCandidate, JobDetail, PageFetcher};
use crate::infrastructure::parsing::{DetailParseContext, JobDetailParser};

pub struct DetailEnricher {
    fetcher: Arc<dyn PageFetcher>,
    parser: JobDetailParser,
}

impl DetailEnricher {
    pub fn new(fetcher: Arc<dyn PageFetcher>, parser: JobDetailParser) -> Self {
        Self { fetcher, parser }
    }

    /// Fetch and parse one detail page. A non-success status yields an empty
    /// record; transport failures are errors.
    pub async fn fetch_detail(&self, url: &str) -> Result<JobDetail> {
        let page = self.fetcher.fetch(url).await?;
        if !page.is_success() {
            warn!("Detail page {} returned status {}, keeping listing fields", url, page.status);
            return Ok(JobDetail::default());
        }

        let detail = self
            .parser
            .parse(&page.body, &DetailParseContext::new(url))
            .with_context(|| format!("Failed to parse detail page {url}"))?;
        if detail.is_empty() {
            debug!("No detail fields found on {}", url);
        }
        Ok(detail)
    }

    pub async fn enrich(&self, candidate: JobCandidate) -> Result<EnrichedJob> {
        let detail = self.fetch_detail(&candidate.link).await?;
        Ok(EnrichedJob::merge(candidate, detail))
    }

    /// Enrich candidates one at a time, preserving their order
    pub async fn enrich_all(&self, candidates: Vec<JobCandidate>) -> Result<Vec<EnrichedJob>> {
        let total = candidates.len();
        let mut jobs = Vec::with_capacity(total);

        for (index, candidate) in candidates.into_iter().enumerate() {
            debug!("Enriching {}/{}: {}", index + 1, total, candidate.link);
            jobs.push(self.enrich(candidate).await?);
        }

        info!("Enriched {} job(s)", jobs.len());
        Ok(jobs)
    }
}
