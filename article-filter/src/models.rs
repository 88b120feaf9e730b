use serde::{Deserialize, Serialize};
use utils_common::models::{Article, Category};

/// Filter criteria - the transient parameters the visitor has selected.
///
/// `None` (or an empty string/list) is the "All" sentinel for the matching
/// predicate. Criteria live for the session only; they are never persisted.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct FilterCriteria {
    /// Selected section, `None` meaning all sections.
    pub category: Option<Category>,
    /// Free-text search query.
    pub query: String,
    /// Selected author (exact match), `None` meaning all authors.
    pub author: Option<String>,
    /// Inclusive lower date bound, ISO `YYYY-MM-DD`.
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    /// Inclusive upper date bound, ISO `YYYY-MM-DD`.
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
    /// Tags that must all be present on a matching article.
    pub tags: Vec<String>,
}

impl FilterCriteria {
    /// Restore the session defaults (everything back to "All"/empty).
    pub fn reset(&mut self) {
        *self = FilterCriteria::default();
    }

    /// Whether any of the advanced filters (author, dates, tags) is active.
    /// Drives the reset-filters affordance; category and query have their
    /// own controls and are not counted here.
    pub fn has_active_filters(&self) -> bool {
        self.author.as_deref().is_some_and(|a| !a.is_empty())
            || self.start_date.as_deref().is_some_and(|d| !d.is_empty())
            || self.end_date.as_deref().is_some_and(|d| !d.is_empty())
            || !self.tags.is_empty()
    }
}

/// Filter result returned to the page.
#[derive(Serialize, Debug)]
pub struct FilterResult {
    /// Matching articles, in catalog order.
    pub articles: Vec<Article>,
    /// Number of matches (the count badge next to the section heading).
    pub total: usize,
}

/// Values available for the filter controls, derived from the live catalog.
#[derive(Serialize, Debug, Default, PartialEq)]
pub struct FilterOptions {
    /// Distinct authors, in first-appearance order.
    pub authors: Vec<String>,
    /// Distinct tags, in first-appearance order.
    pub tags: Vec<String>,
}
