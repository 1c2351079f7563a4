//! Table cleanup applied after every row has been collected
//!
//! Posting dates arrive as free-form strings from three different boards, and
//! university names carry noise ("The ...") that would skew sorting.

use std::cmp::Ordering;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::job::{EnrichedJob, JobField};

/// Accepted posting-date layouts, tried in order
pub const DATE_FORMATS: [&str; 3] = ["%d %b %Y", "%Y/%m/%d", "%b %d, %Y"];

static CLOCK_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s\d{2}:\d{2}[APM]{2}").expect("valid clock suffix pattern"));
static LEADING_THE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*The\s+").expect("valid leading article pattern"));
static UNIVERSITY_OF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bUniversity of\b").expect("valid university-of pattern"));
static UNIVERSITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bUniversity\b").expect("valid university pattern"));

/// Remove "(listed until ...)" style annotations and clock times, and fix the
/// "Sept" abbreviation that none of the date formats accept.
pub fn clean_date_posted(raw: &str) -> String {
    let without_annotation = raw.split('(').next().unwrap_or_default().trim();
    CLOCK_SUFFIX
        .replace_all(without_annotation, "")
        .replace("Sept", "Sep")
}

pub fn strip_leading_article(university: &str) -> String {
    LEADING_THE.replace(university, "").into_owned()
}

/// "University of X" → "U. X", then any remaining "University" → "Univ".
pub fn abbreviate_university(university: &str) -> String {
    let shortened = UNIVERSITY_OF.replace_all(university, "U.");
    UNIVERSITY.replace_all(&shortened, "Univ").into_owned()
}

/// First matching format wins; `None` when no format fits.
pub fn parse_posted_date(cleaned: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(cleaned, format).ok())
}

/// Newest first, then university A→Z, then source Z→A. Rows without a
/// parsable date always go last.
pub fn compare_jobs(a: &EnrichedJob, b: &EnrichedJob) -> Ordering {
    let by_date = match (a.posted_on, b.posted_on) {
        (Some(a_date), Some(b_date)) => b_date.cmp(&a_date),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    by_date
        .then_with(|| a.university().cmp(b.university()))
        .then_with(|| b.source.as_str().cmp(a.source.as_str()))
}

/// Clean, parse, sort, then abbreviate. Abbreviation happens after sorting
/// so the order follows the full university names.
pub fn normalize_table(mut jobs: Vec<EnrichedJob>) -> Vec<EnrichedJob> {
    for job in &mut jobs {
        if let Some(raw) = job.get(JobField::DatePosted) {
            let cleaned = clean_date_posted(raw);
            job.posted_on = parse_posted_date(&cleaned);
            job.set(JobField::DatePosted, cleaned);
        }
        if job.contains(JobField::University) {
            let stripped = strip_leading_article(job.university());
            job.set(JobField::University, stripped);
        }
    }

    jobs.sort_by(compare_jobs);

    for job in &mut jobs {
        if job.contains(JobField::University) {
            let abbreviated = abbreviate_university(job.university());
            job.set(JobField::University, abbreviated);
        }
    }

    jobs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job::{JobCandidate, JobDetail, JobSource};
    use proptest::prelude::*;
    use rstest::rstest;

    fn job(source: JobSource, university: &str, date_posted: Option<&str>) -> EnrichedJob {
        let candidate = JobCandidate {
            job_id: None,
            title: "Assistant Professor".to_string(),
            university: university.to_string(),
            location: "N/A".to_string(),
            link: "https://example.org/job/1".to_string(),
            description: "N/A".to_string(),
            source,
        };
        let detail = JobDetail {
            date_posted: date_posted.map(ToString::to_string),
            ..JobDetail::default()
        };
        EnrichedJob::merge(candidate, detail)
    }

    #[test]
    fn test_clean_listed_until_annotation() {
        assert_eq!(
            clean_date_posted("15 Sept 2024 (listed until 2024/12/31)"),
            "15 Sep 2024"
        );
    }

    #[test]
    fn test_clean_clock_suffix() {
        assert_eq!(clean_date_posted("Sep 15, 2024 10:30AM"), "Sep 15, 2024");
    }

    #[rstest]
    #[case("31 Dec 2024", 2024, 12, 31)]
    #[case("2024/12/31", 2024, 12, 31)]
    #[case("Dec 31, 2024", 2024, 12, 31)]
    #[case("15 Sep 2024", 2024, 9, 15)]
    #[case("5 Mar 2025", 2025, 3, 5)]
    fn test_parse_supported_formats(
        #[case] input: &str,
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
    ) {
        assert_eq!(parse_posted_date(input), NaiveDate::from_ymd_opt(year, month, day));
    }

    #[rstest]
    #[case("")]
    #[case("yesterday")]
    #[case("2024-12-31")]
    fn test_unparsable_dates_are_missing(#[case] input: &str) {
        assert_eq!(parse_posted_date(input), None);
    }

    #[test]
    fn test_university_normalization() {
        let stripped = strip_leading_article("The University of Example");
        assert_eq!(stripped, "University of Example");
        assert_eq!(abbreviate_university(&stripped), "U. Example");
    }

    #[rstest]
    #[case("Example State University", "Example State Univ")]
    #[case("University of Example Medical School", "U. Example Medical School")]
    #[case("Universityville College", "Universityville College")]
    #[case("Theodore College", "Theodore College")]
    fn test_abbreviations(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(abbreviate_university(&strip_leading_article(input)), expected);
    }

    #[test]
    fn test_missing_dates_sort_last() {
        let table = vec![
            job(JobSource::Science, "A", Some("2024/09/01")),
            job(JobSource::Science, "B", None),
            job(JobSource::Science, "C", Some("15 Sep 2024")),
        ];
        let sorted = normalize_table(table);

        let dates: Vec<Option<NaiveDate>> = sorted.iter().map(|j| j.posted_on).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 9, 15),
                NaiveDate::from_ymd_opt(2024, 9, 1),
                None,
            ]
        );
    }

    #[test]
    fn test_unparsable_date_sorts_with_missing() {
        let table = vec![
            job(JobSource::Nature, "A", Some("soon")),
            job(JobSource::Nature, "B", Some("Sep 1, 2024")),
        ];
        let sorted = normalize_table(table);
        assert_eq!(sorted[0].university(), "B");
        assert_eq!(sorted[1].get(JobField::DatePosted), Some("soon"));
        assert_eq!(sorted[1].posted_on, None);
    }

    #[test]
    fn test_ties_break_on_university_then_source_descending() {
        let table = vec![
            job(JobSource::Nature, "Beta College", Some("1 Sep 2024")),
            job(JobSource::Science, "Alpha College", Some("1 Sep 2024")),
            job(JobSource::SfN, "Beta College", Some("2024/09/01")),
        ];
        let sorted = normalize_table(table);
        let order: Vec<(&str, JobSource)> =
            sorted.iter().map(|j| (j.university(), j.source)).collect();
        assert_eq!(
            order,
            vec![
                ("Alpha College", JobSource::Science),
                ("Beta College", JobSource::SfN),
                ("Beta College", JobSource::Nature),
            ]
        );
    }

    #[test]
    fn test_sort_uses_full_names_before_abbreviation() {
        let table = vec![
            job(JobSource::SfN, "The University of Zurich", Some("1 Sep 2024")),
            job(JobSource::SfN, "Uppsala University", Some("1 Sep 2024")),
        ];
        let sorted = normalize_table(table);
        // "University of Zurich" < "Uppsala University", but "U. Zurich" > "Uppsala Univ"
        assert_eq!(sorted[0].university(), "U. Zurich");
        assert_eq!(sorted[1].university(), "Uppsala Univ");
    }

    proptest! {
        #[test]
        fn prop_cleaned_date_has_no_annotation(prefix in "[0-9A-Za-z ,/]{0,20}", note in "[^()]{0,20}") {
            let cleaned = clean_date_posted(&format!("{prefix}({note})"));
            prop_assert!(!cleaned.contains('('));
            prop_assert_eq!(cleaned.trim(), cleaned.as_str());
        }

        #[test]
        fn prop_sorted_dates_are_non_increasing(days in proptest::collection::vec(proptest::option::of(0u32..365), 0..20)) {
            let table: Vec<EnrichedJob> = days
                .iter()
                .map(|day| {
                    let raw = day.map(|d| {
                        (NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(u64::from(d)))
                            .format("%Y/%m/%d")
                            .to_string()
                    });
                    job(JobSource::Science, "X", raw.as_deref())
                })
                .collect();
            let sorted = normalize_table(table);
            for pair in sorted.windows(2) {
                match (pair[0].posted_on, pair[1].posted_on) {
                    (Some(a), Some(b)) => prop_assert!(a >= b),
                    (None, Some(_)) => prop_assert!(false, "missing date sorted before a dated row"),
                    _ => {}
                }
            }
        }
    }
}
