//! Application layer - crawl, enrich and normalize use cases
//!
//! Everything here runs strictly in sequence: sources in configured order,
//! pages in link order, then one detail fetch per candidate.

pub mod crawler;
pub mod enricher;
pub mod pagination_walker;
pub mod pipeline;

pub use crawler::MultiSourceCrawler;
pub use enricher::DetailEnricher;
pub use pagination_walker::{CrawlSettings, PaginationWalker};
pub use pipeline::JobAdsPipeline;
