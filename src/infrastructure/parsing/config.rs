//! CSS selectors for listing and detail pages
//!
//! All three boards run the same job-board platform, so a single selector set
//! covers them. Fields that need fallbacks list them in priority order.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub listing: ListingSelectors,
    pub detail: DetailSelectors,
}

/// Selectors for listing pages. Sub-field selectors are relative to one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingSelectors {
    pub item: String,
    pub header: String,
    pub title_link: String,
    pub location: String,
    pub recruiter: String,
    pub description: String,
    pub next_page: String,
}

impl Default for ListingSelectors {
    fn default() -> Self {
        Self {
            item: "li.lister__item".to_string(),
            header: "h3.lister__header".to_string(),
            title_link: "a".to_string(),
            location: "li.lister__meta-item--location".to_string(),
            recruiter: "li.lister__meta-item--recruiter".to_string(),
            description: "p.lister__description".to_string(),
            next_page: "link[rel~=\"next\"]".to_string(),
        }
    }
}

/// Selectors for detail pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailSelectors {
    /// Title selectors, primary first
    pub title: Vec<String>,

    /// Repeated value node; employer, location and salary are its 1st, 2nd
    /// and 3rd matches
    pub list_value: String,

    /// Description selectors, primary first
    pub description: Vec<String>,

    pub apply_button: String,

    /// Marker identifying the analytics data-layer script
    pub data_layer_marker: String,

    /// Key holding the posting date inside the data layer
    pub date_posted_key: String,
}

impl Default for DetailSelectors {
    fn default() -> Self {
        Self {
            title: vec![
                "h1.mds-font-trafalgar".to_string(),
                "h1.mds-font-s6".to_string(),
            ],
            list_value: "dd.mds-list__value".to_string(),
            description: vec![
                "div.mds-edited-text".to_string(),
                "div.mds-prose".to_string(),
            ],
            apply_button: "a[data-hook=\"apply-button\"]".to_string(),
            data_layer_marker: "ClientGoogleTagManagerDataLayer".to_string(),
            date_posted_key: "JobDatePosted".to_string(),
        }
    }
}
