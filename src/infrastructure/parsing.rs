//! HTML parsing for job board pages
//!
//! Listing pages yield [`JobCandidate`](crate::domain::JobCandidate)s and the
//! next-page link; detail pages yield a [`JobDetail`](crate::domain::JobDetail).

pub mod config;
pub mod context;
pub mod job_detail_parser;
pub mod job_list_parser;

pub use crate::infrastructure::parsing_error::{ParsingError, ParsingResult};
pub use config::{DetailSelectors, ListingSelectors, SelectorConfig};
pub use context::{DetailParseContext, ParseContext};
pub use job_detail_parser::JobDetailParser;
pub use job_list_parser::{JobListParser, ListingPage};

use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Parser that needs page-specific context
pub trait ContextualParser {
    type Output;
    type Context;

    fn parse_with_context(&self, html: &Html, context: &Self::Context) -> ParsingResult<Self::Output>;
}

pub(crate) fn compile_selector(selector: &str) -> ParsingResult<Selector> {
    Selector::parse(selector).map_err(|e| ParsingError::invalid_selector(selector, e))
}

pub(crate) fn compile_selectors(selectors: &[String]) -> ParsingResult<Vec<Selector>> {
    selectors.iter().map(|s| compile_selector(s)).collect()
}

/// Element text with whitespace runs collapsed and ends trimmed
pub(crate) fn element_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve `href` against `base_url`; absolute hrefs pass through unchanged.
pub(crate) fn resolve_url(href: &str, base_url: &str) -> ParsingResult<String> {
    let href = href.trim();
    if let Ok(absolute) = Url::parse(href) {
        return Ok(absolute.to_string());
    }

    let base = Url::parse(base_url).map_err(|e| {
        ParsingError::url_resolution_failed(base_url, format!("Invalid base URL: {e}"), None)
    })?;

    base.join(href)
        .map(|url| url.to_string())
        .map_err(|e| {
            ParsingError::url_resolution_failed(
                href,
                format!("Failed to join URL: {e}"),
                Some(base_url),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_resolution() {
        assert_eq!(
            resolve_url("/job/123/professor/", "https://neurojobs.sfn.org").unwrap(),
            "https://neurojobs.sfn.org/job/123/professor/"
        );
        assert_eq!(
            resolve_url("https://other.com/test", "https://neurojobs.sfn.org").unwrap(),
            "https://other.com/test"
        );
        assert_eq!(
            resolve_url("jobs/?page=2", "https://www.nature.com/naturecareers/").unwrap(),
            "https://www.nature.com/naturecareers/jobs/?page=2"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = resolve_url("/job/1", "not a url").unwrap_err();
        assert!(matches!(err, ParsingError::UrlResolutionFailed { .. }));
    }

    #[test]
    fn test_invalid_selector() {
        assert!(compile_selector("li.lister__item").is_ok());
        assert!(matches!(
            compile_selector("li[").unwrap_err(),
            ParsingError::InvalidSelector { .. }
        ));
    }

    #[test]
    fn test_element_text_collapses_whitespace() {
        let html = Html::parse_fragment("<p>  Assistant\n   <b>Professor</b>  </p>");
        let selector = compile_selector("p").unwrap();
        let p = html.select(&selector).next().unwrap();
        assert_eq!(element_text(&p), "Assistant Professor");
    }
}
