//! Listing page parser
//!
//! Each listing item becomes a candidate unless it has no title link at all.
//! Missing location, recruiter or description fall back to `"N/A"` so one
//! sparse item never costs the rest of the page.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::config::ListingSelectors;
use super::{
    compile_selector, element_text, resolve_url, ContextualParser, ParseContext, ParsingResult,
};
use crate::domain::{JobCandidate, KeywordSets, RelevanceFilter, NOT_AVAILABLE};

/// Candidates found on one listing page plus the link to the following page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    pub candidates: Vec<JobCandidate>,
    pub next_page: Option<String>,
}

pub struct JobListParser {
    item: Selector,
    header: Selector,
    title_link: Selector,
    location: Selector,
    recruiter: Selector,
    description: Selector,
    next_page: Selector,
    filter: RelevanceFilter,
}

impl JobListParser {
    pub fn new(keywords: &KeywordSets) -> ParsingResult<Self> {
        Self::with_config(&ListingSelectors::default(), keywords)
    }

    pub fn with_config(selectors: &ListingSelectors, keywords: &KeywordSets) -> ParsingResult<Self> {
        Ok(Self {
            item: compile_selector(&selectors.item)?,
            header: compile_selector(&selectors.header)?,
            title_link: compile_selector(&selectors.title_link)?,
            location: compile_selector(&selectors.location)?,
            recruiter: compile_selector(&selectors.recruiter)?,
            description: compile_selector(&selectors.description)?,
            next_page: compile_selector(&selectors.next_page)?,
            filter: RelevanceFilter::new(keywords),
        })
    }

    /// Parse raw HTML once and return both the candidates and the next link.
    pub fn parse_page(&self, html: &str, context: &ParseContext) -> ParsingResult<ListingPage> {
        let document = Html::parse_document(html);
        Ok(ListingPage {
            candidates: self.parse_with_context(&document, context)?,
            next_page: self.next_page_url(&document, &context.base_url)?,
        })
    }

    /// `href` of the `rel="next"` link, made absolute
    pub fn next_page_url(&self, html: &Html, base_url: &str) -> ParsingResult<Option<String>> {
        html.select(&self.next_page)
            .find_map(|link| link.value().attr("href"))
            .map(|href| resolve_url(href, base_url))
            .transpose()
    }

    fn extract_candidate(
        &self,
        item: &ElementRef<'_>,
        index: usize,
        context: &ParseContext,
    ) -> ParsingResult<Option<JobCandidate>> {
        let Some(anchor) = item
            .select(&self.header)
            .next()
            .and_then(|header| header.select(&self.title_link).next())
        else {
            debug!(
                "Skipping item {} on {} page {}: no title link",
                index, context.source, context.page_number
            );
            return Ok(None);
        };

        let Some(href) = anchor.value().attr("href") else {
            debug!(
                "Skipping item {} on {} page {}: title link has no href",
                index, context.source, context.page_number
            );
            return Ok(None);
        };

        Ok(Some(JobCandidate {
            job_id: Self::extract_job_id(item),
            title: element_text(&anchor),
            university: Self::text_or_placeholder(item, &self.recruiter),
            location: Self::text_or_placeholder(item, &self.location),
            link: resolve_url(href, &context.base_url)?,
            description: Self::text_or_placeholder(item, &self.description),
            source: context.source,
        }))
    }

    fn text_or_placeholder(item: &ElementRef<'_>, selector: &Selector) -> String {
        item.select(selector)
            .next()
            .map_or_else(|| NOT_AVAILABLE.to_string(), |element| element_text(&element))
    }

    /// `id="item-12345"` → `"12345"`
    fn extract_job_id(item: &ElementRef<'_>) -> Option<String> {
        item.value()
            .attr("id")
            .and_then(|id| id.split('-').nth(1))
            .map(|id| id.trim().to_string())
    }
}

impl ContextualParser for JobListParser {
    type Output = Vec<JobCandidate>;
    type Context = ParseContext;

    fn parse_with_context(&self, html: &Html, context: &Self::Context) -> ParsingResult<Self::Output> {
        let mut candidates = Vec::new();
        let mut seen = 0usize;

        for (index, item) in html.select(&self.item).enumerate() {
            seen += 1;
            let Some(candidate) = self.extract_candidate(&item, index, context)? else {
                continue;
            };
            if self
                .filter
                .is_relevant(context.policy, &candidate.title, &candidate.description)
            {
                candidates.push(candidate);
            }
        }

        debug!(
            "{} page {}: kept {} of {} listing items",
            context.source,
            context.page_number,
            candidates.len(),
            seen
        );
        Ok(candidates)
    }
}
