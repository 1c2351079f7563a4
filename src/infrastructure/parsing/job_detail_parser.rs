//! Detail page parser
//!
//! Every field owns an ordered list of extraction strategies. The first
//! strategy that yields a value wins; when all of them come up empty the field
//! stays `None`. Nothing here fails because a field is missing.

use scraper::{Html, Selector};
use serde_json::Value;
use tracing::{debug, warn};

use super::config::DetailSelectors;
use super::{
    compile_selector, compile_selectors, element_text, ContextualParser, DetailParseContext,
    ParsingError, ParsingResult,
};
use crate::domain::JobDetail;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailField {
    Title,
    Employer,
    Location,
    Salary,
    Description,
    ApplicationUrl,
    DatePosted,
}

/// One way of pulling a value out of a detail page
#[derive(Debug, Clone)]
pub enum ExtractionStrategy {
    /// Text of the `nth` (0-based) element matching `selector`
    Text { selector: Selector, nth: usize },

    /// Attribute of the first element matching `selector`
    Attribute { selector: Selector, attribute: String },

    /// Key of the first object in the JSON array assigned inside the first
    /// `<script>` that contains `marker`
    DataLayer {
        scripts: Selector,
        marker: String,
        key: String,
    },
}

impl ExtractionStrategy {
    fn extract(&self, html: &Html) -> Option<String> {
        match self {
            Self::Text { selector, nth } => html
                .select(selector)
                .nth(*nth)
                .map(|element| element_text(&element))
                .filter(|text| !text.is_empty()),
            Self::Attribute {
                selector,
                attribute,
            } => html
                .select(selector)
                .next()
                .and_then(|element| element.value().attr(attribute))
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
            Self::DataLayer {
                scripts,
                marker,
                key,
            } => {
                let script = html
                    .select(scripts)
                    .map(|script| script.text().collect::<String>())
                    .find(|content| content.contains(marker.as_str()))?;

                match read_data_layer(&script, key) {
                    Ok(value) => value,
                    Err(e) => {
                        warn!("Ignoring data layer: {}", e);
                        None
                    }
                }
            }
        }
    }
}

/// Parse `... = [ {...} ];` and return `key` from the first element.
fn read_data_layer(script: &str, key: &str) -> ParsingResult<Option<String>> {
    let Some((_, payload)) = script.split_once('=') else {
        return Ok(None);
    };
    let payload = payload.trim().trim_end_matches(';');

    let json: Value = serde_json::from_str(payload).map_err(|e| ParsingError::DataLayerMalformed {
        reason: e.to_string(),
    })?;

    Ok(match json.get(0).and_then(|entry| entry.get(key)) {
        Some(Value::String(value)) => Some(value.trim().to_string()),
        Some(Value::Null) | None => None,
        Some(other) => Some(other.to_string()),
    })
}

#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: DetailField,
    pub strategies: Vec<ExtractionStrategy>,
}

impl FieldRule {
    fn text_fallbacks(field: DetailField, selectors: Vec<Selector>) -> Self {
        Self {
            field,
            strategies: selectors
                .into_iter()
                .map(|selector| ExtractionStrategy::Text { selector, nth: 0 })
                .collect(),
        }
    }

    fn nth_text(field: DetailField, selector: &Selector, nth: usize) -> Self {
        Self {
            field,
            strategies: vec![ExtractionStrategy::Text {
                selector: selector.clone(),
                nth,
            }],
        }
    }
}

pub struct JobDetailParser {
    rules: Vec<FieldRule>,
}

impl JobDetailParser {
    pub fn new() -> ParsingResult<Self> {
        Self::with_config(&DetailSelectors::default())
    }

    pub fn with_config(selectors: &DetailSelectors) -> ParsingResult<Self> {
        let list_value = compile_selector(&selectors.list_value)?;

        let rules = vec![
            FieldRule::text_fallbacks(DetailField::Title, compile_selectors(&selectors.title)?),
            FieldRule::nth_text(DetailField::Employer, &list_value, 0),
            FieldRule::nth_text(DetailField::Location, &list_value, 1),
            FieldRule::nth_text(DetailField::Salary, &list_value, 2),
            FieldRule::text_fallbacks(
                DetailField::Description,
                compile_selectors(&selectors.description)?,
            ),
            FieldRule {
                field: DetailField::ApplicationUrl,
                strategies: vec![ExtractionStrategy::Attribute {
                    selector: compile_selector(&selectors.apply_button)?,
                    attribute: "href".to_string(),
                }],
            },
            FieldRule {
                field: DetailField::DatePosted,
                strategies: vec![ExtractionStrategy::DataLayer {
                    scripts: compile_selector("script")?,
                    marker: selectors.data_layer_marker.clone(),
                    key: selectors.date_posted_key.clone(),
                }],
            },
        ];

        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    pub fn parse(&self, html: &str, context: &DetailParseContext) -> ParsingResult<JobDetail> {
        self.parse_with_context(&Html::parse_document(html), context)
    }
}

impl ContextualParser for JobDetailParser {
    type Output = JobDetail;
    type Context = DetailParseContext;

    fn parse_with_context(&self, html: &Html, context: &Self::Context) -> ParsingResult<Self::Output> {
        let mut detail = JobDetail::default();

        for rule in &self.rules {
            let value = rule
                .strategies
                .iter()
                .enumerate()
                .find_map(|(i, strategy)| {
                    let value = strategy.extract(html);
                    if value.is_some() && i > 0 {
                        debug!("{:?} found by fallback strategy {} on {}", rule.field, i, context.url);
                    }
                    value
                });

            if value.is_none() {
                debug!("{:?} not found on {}", rule.field, context.url);
            }

            let slot = match rule.field {
                DetailField::Title => &mut detail.title,
                DetailField::Employer => &mut detail.employer,
                DetailField::Location => &mut detail.location,
                DetailField::Salary => &mut detail.salary,
                DetailField::Description => &mut detail.description,
                DetailField::ApplicationUrl => &mut detail.application_url,
                DetailField::DatePosted => &mut detail.date_posted,
            };
            *slot = value;
        }

        Ok(detail)
    }
}
