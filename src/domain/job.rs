use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Placeholder written for listing fields that are missing on the page
pub const NOT_AVAILABLE: &str = "N/A";

/// Job boards the crawler knows how to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobSource {
    SfN,
    Science,
    Nature,
}

impl JobSource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SfN => "SfN",
            Self::Science => "Science",
            Self::Nature => "Nature",
        }
    }
}

impl fmt::Display for JobSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Job record extracted from a listing page, before enrichment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobCandidate {
    pub job_id: Option<String>,
    pub title: String,
    /// Recruiter as shown on the listing page
    pub university: String,
    pub location: String,
    /// Always absolute
    pub link: String,
    pub description: String,
    pub source: JobSource,
}

/// Extended fields scraped from a job's detail page.
///
/// Every field is optional on its own; a missing employer never prevents the
/// salary from being read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDetail {
    pub title: Option<String>,
    pub employer: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub description: Option<String>,
    pub application_url: Option<String>,
    /// Raw value from the page's analytics data layer
    pub date_posted: Option<String>,
}

impl JobDetail {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Canonical output columns.
///
/// Variant order is the column order; `Ord` is derived so a `BTreeMap` keyed by
/// `JobField` iterates in export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JobField {
    Source,
    DatePosted,
    University,
    Title,
    Department,
    Field,
    Location,
    Deadline,
    RecLetters,
    ContactOnly,
    ResearchStatement,
    ResearchPageLimit,
    CoverLetter,
    Cv,
    DiversityStatement,
    TeachingStatement,
    OtherDocs,
    Recruiter,
    Link,
    JobId,
    Description,
}

impl JobField {
    pub const ALL: [Self; 21] = [
        Self::Source,
        Self::DatePosted,
        Self::University,
        Self::Title,
        Self::Department,
        Self::Field,
        Self::Location,
        Self::Deadline,
        Self::RecLetters,
        Self::ContactOnly,
        Self::ResearchStatement,
        Self::ResearchPageLimit,
        Self::CoverLetter,
        Self::Cv,
        Self::DiversityStatement,
        Self::TeachingStatement,
        Self::OtherDocs,
        Self::Recruiter,
        Self::Link,
        Self::JobId,
        Self::Description,
    ];

    /// Column header used in the exported table
    pub const fn header(self) -> &'static str {
        match self {
            Self::Source => "Source",
            Self::DatePosted => "Date Posted",
            Self::University => "University",
            Self::Title => "Title",
            Self::Department => "Department",
            Self::Field => "Field",
            Self::Location => "Location",
            Self::Deadline => "Deadline",
            Self::RecLetters => "# Rec Letters",
            Self::ContactOnly => "Contact Only?",
            Self::ResearchStatement => "Research Stat",
            Self::ResearchPageLimit => "Res Page Limit",
            Self::CoverLetter => "Cover Letter",
            Self::Cv => "CV",
            Self::DiversityStatement => "Diversity Stat",
            Self::TeachingStatement => "Teaching Stat",
            Self::OtherDocs => "Other docs",
            Self::Recruiter => "Recruiter",
            Self::Link => "Link",
            Self::JobId => "Job ID",
            Self::Description => "Description",
        }
    }
}

impl fmt::Display for JobField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// A candidate merged with its detail record and projected onto [`JobField`].
///
/// Only fields that were actually present in the merge are stored. Detail
/// fields without a canonical column (employer, salary, application URL) do
/// not survive the projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedJob {
    pub source: JobSource,
    fields: BTreeMap<JobField, String>,
    /// Parsed form of `Date Posted`, filled in by normalization
    pub posted_on: Option<NaiveDate>,
}

impl EnrichedJob {
    /// Merge a candidate with its detail record; detail values win on collision.
    pub fn merge(candidate: JobCandidate, detail: JobDetail) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(JobField::Source, candidate.source.to_string());
        fields.insert(JobField::Title, candidate.title);
        fields.insert(JobField::University, candidate.university);
        fields.insert(JobField::Location, candidate.location);
        fields.insert(JobField::Link, candidate.link);
        fields.insert(JobField::Description, candidate.description);
        if let Some(job_id) = candidate.job_id {
            fields.insert(JobField::JobId, job_id);
        }

        let overrides = [
            (JobField::Title, detail.title),
            (JobField::Location, detail.location),
            (JobField::Description, detail.description),
            (JobField::DatePosted, detail.date_posted),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                fields.insert(field, value);
            }
        }

        Self {
            source: candidate.source,
            fields,
            posted_on: None,
        }
    }

    pub fn get(&self, field: JobField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: JobField) -> bool {
        self.fields.contains_key(&field)
    }

    pub fn set(&mut self, field: JobField, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    pub fn university(&self) -> &str {
        self.get(JobField::University).unwrap_or_default()
    }

    /// Present fields in canonical column order
    pub fn fields(&self) -> impl Iterator<Item = (JobField, &str)> {
        self.fields.iter().map(|(field, value)| (*field, value.as_str()))
    }
}
