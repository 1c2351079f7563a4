//! Job Ads Checker - academic job board crawler
//!
//! Walks the paginated listings of several job boards, keeps postings that
//! match the configured position and domain keywords, enriches each one from
//! its detail page and writes a sorted table.

pub mod application;
pub mod domain;
pub mod infrastructure;
