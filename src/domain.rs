//! Domain layer - job records, relevance rules, table normalization and the
//! service traits the infrastructure layer implements
//!
//! Nothing in here performs I/O. The crawler and enricher in `application`
//! produce these types; the exporter in `infrastructure` consumes them.

pub mod job;
pub mod normalization;
pub mod relevance;
pub mod services;

pub use job::{EnrichedJob, JobCandidate, JobDetail, JobField, JobSource, NOT_AVAILABLE};
pub use relevance::{KeywordSets, RelevanceFilter, RelevancePolicy};
pub use services::{FetchedPage, PageFetcher};
