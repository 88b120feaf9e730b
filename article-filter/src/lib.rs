use chrono::NaiveDate;
use wasm_bindgen::prelude::*;
use web_sys::console;

use utils_common::models::Article;

pub mod models;
pub mod options;

use crate::models::{FilterCriteria, FilterOptions, FilterResult};

/// Set up the panic hook when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Module version.
#[wasm_bindgen]
pub fn version() -> String {
    "1.2.0".to_string()
}

//===== Filter engine =====

/// The catalog filter. A pure derivation: given the articles and the
/// current criteria it produces the subset to display. It never performs
/// I/O and never fails on well-formed input; articles whose dates do not
/// parse simply fall out of any bounded date range.
pub struct ArticleFilter;

/// Pre-parsed date bounds of the criteria.
struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    /// Parse the criteria bounds once per run. A missing, empty or
    /// unparseable bound is open on that side.
    fn of(criteria: &FilterCriteria) -> DateRange {
        DateRange {
            start: parse_iso_date(criteria.start_date.as_deref()),
            end: parse_iso_date(criteria.end_date.as_deref()),
        }
    }

    fn is_bounded(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// Inclusive on both ends.
    fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |s| date >= s) && self.end.map_or(true, |e| date <= e)
    }
}

fn parse_iso_date(text: Option<&str>) -> Option<NaiveDate> {
    let text = text?.trim();
    if text.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

impl ArticleFilter {
    /// Apply the criteria to the catalog. An article is kept iff it
    /// satisfies every predicate; the result preserves catalog order.
    pub fn filter_articles(articles: &[Article], criteria: &FilterCriteria) -> FilterResult {
        let range = DateRange::of(criteria);
        let query = criteria.query.trim().to_lowercase();

        let matching: Vec<Article> = articles
            .iter()
            .filter(|article| Self::matches(article, criteria, &range, &query))
            .cloned()
            .collect();

        let total = matching.len();
        FilterResult {
            articles: matching,
            total,
        }
    }

    fn matches(
        article: &Article,
        criteria: &FilterCriteria,
        range: &DateRange,
        query: &str,
    ) -> bool {
        Self::matches_category(article, criteria)
            && Self::matches_query(article, query)
            && Self::matches_author(article, criteria)
            && Self::matches_date(article, range)
            && Self::matches_tags(article, criteria)
    }

    fn matches_category(article: &Article, criteria: &FilterCriteria) -> bool {
        match criteria.category {
            None => true,
            Some(category) => article.category == category,
        }
    }

    /// Case-insensitive substring match over title, excerpt and body.
    fn matches_query(article: &Article, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        article.title.to_lowercase().contains(query)
            || article.excerpt.to_lowercase().contains(query)
            || article.content.to_lowercase().contains(query)
    }

    /// Exact, case-sensitive author match.
    fn matches_author(article: &Article, criteria: &FilterCriteria) -> bool {
        match criteria.author.as_deref() {
            None | Some("") => true,
            Some(author) => article.author == author,
        }
    }

    /// Inclusive date-range check. With no bound set every article passes;
    /// with a bound set an article whose date fails to parse is excluded.
    fn matches_date(article: &Article, range: &DateRange) -> bool {
        if !range.is_bounded() {
            return true;
        }
        match NaiveDate::parse_from_str(article.date.trim(), "%Y-%m-%d") {
            Ok(date) => range.contains(date),
            Err(_) => false,
        }
    }

    /// Every required tag must be present (AND semantics).
    fn matches_tags(article: &Article, criteria: &FilterCriteria) -> bool {
        criteria
            .tags
            .iter()
            .all(|required| article.tags.iter().any(|tag| tag == required))
    }
}

//===== JS interface =====

/// Filter API exposed to the page. The page passes the catalog and the
/// criteria as JSON and receives the filtered subset back; the module
/// keeps no state of its own.
#[wasm_bindgen]
pub struct ArticleFilterJS;

#[wasm_bindgen]
impl ArticleFilterJS {
    /// Filter the catalog. `articles_json` is the full catalog,
    /// `criteria_json` the current criteria; returns `{articles, total}`.
    #[wasm_bindgen]
    pub fn filter(articles_json: &str, criteria_json: &str) -> Result<JsValue, JsValue> {
        let articles: Vec<Article> = serde_json::from_str(articles_json).map_err(|e| {
            console::log_1(&JsValue::from_str(&format!("failed to parse catalog: {}", e)));
            JsValue::from_str(&format!("failed to parse catalog: {}", e))
        })?;

        let criteria: FilterCriteria = serde_json::from_str(criteria_json)
            .map_err(|e| JsValue::from_str(&format!("failed to parse criteria: {}", e)))?;

        let result = ArticleFilter::filter_articles(&articles, &criteria);

        serde_wasm_bindgen::to_value(&result)
            .map_err(|e| JsValue::from_str(&format!("failed to serialize result: {}", e)))
    }

    /// Derive the author and tag lists for the filter controls.
    #[wasm_bindgen]
    pub fn options(articles_json: &str) -> Result<JsValue, JsValue> {
        let articles: Vec<Article> = serde_json::from_str(articles_json)
            .map_err(|e| JsValue::from_str(&format!("failed to parse catalog: {}", e)))?;

        serde_wasm_bindgen::to_value(&FilterOptions::derive(&articles))
            .map_err(|e| JsValue::from_str(&format!("failed to serialize options: {}", e)))
    }

    /// Whether any advanced filter is active in the given criteria.
    #[wasm_bindgen]
    pub fn has_active_filters(criteria_json: &str) -> Result<bool, JsValue> {
        let criteria: FilterCriteria = serde_json::from_str(criteria_json)
            .map_err(|e| JsValue::from_str(&format!("failed to parse criteria: {}", e)))?;
        Ok(criteria.has_active_filters())
    }
}
