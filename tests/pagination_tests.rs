//! Pagination walker and multi-source crawler against an in-memory board
mod common;

use std::sync::Arc;

use common::{listing_page, paginated_board, source, Listing, StubFetcher};
use job_ads_checker_lib::application::{CrawlSettings, MultiSourceCrawler, PaginationWalker};
use job_ads_checker_lib::domain::{JobSource, KeywordSets};
use job_ads_checker_lib::infrastructure::parsing::JobListParser;

const SFN: &str = "https://sfn.test";
const SCIENCE: &str = "https://science.test";

fn settings(debug_mode: bool, max_pages: Option<u32>) -> CrawlSettings {
    CrawlSettings {
        debug_mode,
        debug_page_limit: 3,
        max_pages,
    }
}

fn walker(fetcher: Arc<StubFetcher>, settings: CrawlSettings) -> PaginationWalker {
    let parser = JobListParser::new(&KeywordSets::default()).unwrap();
    PaginationWalker::new(fetcher, Arc::new(parser), settings)
}

#[tokio::test]
async fn follows_next_links_until_none_remain() {
    let fetcher = Arc::new(paginated_board(SFN, 5));
    let candidates = walker(fetcher.clone(), settings(false, None))
        .walk(&source(JobSource::SfN, SFN, false))
        .await
        .unwrap();

    assert_eq!(candidates.len(), 5);
    assert_eq!(fetcher.requests().len(), 5);
    assert_eq!(fetcher.requests()[4], "https://sfn.test/jobs/5/");
    let ids: Vec<_> = candidates.iter().filter_map(|c| c.job_id.clone()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
}

#[tokio::test]
async fn debug_mode_stops_after_three_pages() {
    let fetcher = Arc::new(paginated_board(SFN, 5));
    let candidates = walker(fetcher.clone(), settings(true, None))
        .walk(&source(JobSource::SfN, SFN, false))
        .await
        .unwrap();

    assert_eq!(candidates.len(), 3);
    assert_eq!(
        fetcher.requests(),
        vec![
            "https://sfn.test/jobs/1/",
            "https://sfn.test/jobs/2/",
            "https://sfn.test/jobs/3/",
        ]
    );
}

#[tokio::test]
async fn debug_mode_on_short_board_reads_every_page() {
    let fetcher = Arc::new(paginated_board(SFN, 2));
    let candidates = walker(fetcher.clone(), settings(true, None))
        .walk(&source(JobSource::SfN, SFN, false))
        .await
        .unwrap();

    assert_eq!(candidates.len(), 2);
    assert_eq!(fetcher.requests().len(), 2);
}

#[tokio::test]
async fn max_pages_bounds_a_normal_walk() {
    let fetcher = Arc::new(paginated_board(SFN, 5));
    let candidates = walker(fetcher.clone(), settings(false, Some(4)))
        .walk(&source(JobSource::SfN, SFN, false))
        .await
        .unwrap();

    assert_eq!(candidates.len(), 4);
    assert_eq!(fetcher.requests().len(), 4);
}

#[tokio::test]
async fn next_link_back_to_a_visited_page_ends_the_walk() {
    let item = |id| Listing {
        id,
        title: "Faculty Position",
        university: "University of Example",
        description: "N/A",
    };
    let fetcher = Arc::new(
        StubFetcher::new()
            .with_page("https://sfn.test/jobs/1/", listing_page(&[item("1")], Some("/jobs/2/")))
            .with_page("https://sfn.test/jobs/2/", listing_page(&[item("2")], Some("/jobs/1/"))),
    );

    let candidates = walker(fetcher.clone(), settings(false, None))
        .walk(&source(JobSource::SfN, SFN, false))
        .await
        .unwrap();

    assert_eq!(candidates.len(), 2);
    assert_eq!(fetcher.requests().len(), 2);
}

#[tokio::test]
async fn listing_error_status_aborts_the_walk() {
    let fetcher = Arc::new(StubFetcher::new().with_status("https://sfn.test/jobs/1/", 503, "unavailable"));
    let result = walker(fetcher, settings(false, None))
        .walk(&source(JobSource::SfN, SFN, false))
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn domain_requirement_applies_per_source() {
    let items = [
        Listing {
            id: "1",
            title: "Assistant Professor",
            university: "University of Example",
            description: "Molecular biology",
        },
        Listing {
            id: "2",
            title: "Assistant Professor",
            university: "University of Example",
            description: "Systems neuroscience",
        },
    ];
    let fetcher = Arc::new(
        StubFetcher::new()
            .with_page("https://sfn.test/jobs/1/", listing_page(&items, None))
            .with_page("https://science.test/jobs/1/", listing_page(&items, None)),
    );
    let crawler = MultiSourceCrawler::new(walker(fetcher.clone(), settings(false, None)));

    let candidates = crawler
        .crawl(&[
            source(JobSource::SfN, SFN, false),
            source(JobSource::Science, SCIENCE, true),
        ])
        .await
        .unwrap();

    let found: Vec<_> = candidates
        .iter()
        .map(|c| (c.source, c.job_id.as_deref().unwrap_or_default()))
        .collect();
    assert_eq!(
        found,
        vec![(JobSource::SfN, "1"), (JobSource::SfN, "2"), (JobSource::Science, "2")]
    );
    assert_eq!(candidates[2].link, "https://science.test/job/2/");
}

#[tokio::test]
async fn failing_source_aborts_the_crawl() {
    let fetcher = Arc::new(paginated_board(SFN, 1));
    let crawler = MultiSourceCrawler::new(walker(fetcher.clone(), settings(false, None)));

    let result = crawler
        .crawl(&[
            source(JobSource::SfN, SFN, false),
            source(JobSource::Science, SCIENCE, true),
        ])
        .await;

    assert!(result.is_err());
    assert_eq!(fetcher.requests().len(), 2);
}
