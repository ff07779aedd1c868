//! Filter / Search
//!
//! Derives the visible subset of the collection from a status filter and a
//! free-text search term.

use std::fmt;
use std::str::FromStr;

use crate::domain::{FeedbackItem, FeedbackStatus};
use crate::error::ParseValueError;

/// `"all"` or a single status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(FeedbackStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: FeedbackStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }

    /// Options of the status drop-down, in display order
    pub fn options() -> Vec<StatusFilter> {
        std::iter::once(StatusFilter::All)
            .chain(FeedbackStatus::ALL.into_iter().map(StatusFilter::Only))
            .collect()
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(StatusFilter::All);
        }
        s.parse::<FeedbackStatus>()
            .map(StatusFilter::Only)
            .map_err(|_| ParseValueError::new("status filter", s))
    }
}

/// The inbox's current filter controls
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedbackQuery {
    pub status: StatusFilter,
    pub search: String,
}

impl FeedbackQuery {
    pub fn new(status: StatusFilter, search: impl Into<String>) -> Self {
        Self {
            status,
            search: search.into(),
        }
    }

    /// True when either control narrows the list
    pub fn is_active(&self) -> bool {
        self.status != StatusFilter::All || !self.search.is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, item: &FeedbackItem) -> bool {
        self.status.matches(item.status) && matches_search(item, &self.search.to_lowercase())
    }
}

/// `needle` must already be lowercase
fn matches_search(item: &FeedbackItem, needle: &str) -> bool {
    needle.is_empty()
        || item.client_name.to_lowercase().contains(needle)
        || item.content.to_lowercase().contains(needle)
        || item.category.as_str().to_lowercase().contains(needle)
}

/// Items passing both the status filter and the search term, in input order
pub fn filter_feedbacks(items: &[FeedbackItem], query: &FeedbackQuery) -> Vec<FeedbackItem> {
    let needle = query.search.to_lowercase();
    items
        .iter()
        .filter(|item| query.status.matches(item.status) && matches_search(item, &needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{seed_feedbacks, FeedbackCategory};
    use chrono::Utc;

    fn ids(items: &[FeedbackItem]) -> Vec<u32> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let items = seed_feedbacks(Utc::now());
        let visible = filter_feedbacks(&items, &FeedbackQuery::default());
        assert_eq!(visible, items);
    }

    #[test]
    fn test_status_filter_is_sound() {
        let items = seed_feedbacks(Utc::now());
        for status in FeedbackStatus::ALL {
            let query = FeedbackQuery::new(StatusFilter::Only(status), "");
            let visible = filter_feedbacks(&items, &query);
            assert!(visible.iter().all(|item| item.status == status));
        }
        let query = FeedbackQuery::new(StatusFilter::Only(FeedbackStatus::New), "");
        assert_eq!(ids(&filter_feedbacks(&items, &query)), vec![1, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_name() {
        let items = seed_feedbacks(Utc::now());
        let query = FeedbackQuery::new(StatusFilter::All, "ACME");
        assert_eq!(ids(&filter_feedbacks(&items, &query)), vec![1]);
    }

    #[test]
    fn test_search_hits_content_and_category() {
        let items = seed_feedbacks(Utc::now());
        let by_content = FeedbackQuery::new(StatusFilter::All, "calendar");
        assert_eq!(ids(&filter_feedbacks(&items, &by_content)), vec![3]);

        let by_category = FeedbackQuery::new(StatusFilter::All, "ui/ux");
        assert_eq!(ids(&filter_feedbacks(&items, &by_category)), vec![1]);
    }

    #[test]
    fn test_search_ignores_source() {
        let mut items = seed_feedbacks(Utc::now());
        items.iter_mut().for_each(|item| item.category = FeedbackCategory::General);
        let query = FeedbackQuery::new(StatusFilter::All, "support ticket");
        assert!(filter_feedbacks(&items, &query).is_empty());
    }

    #[test]
    fn test_predicates_are_anded() {
        let items = seed_feedbacks(Utc::now());
        let query = FeedbackQuery::new(StatusFilter::Only(FeedbackStatus::InProgress), "acme");
        assert!(filter_feedbacks(&items, &query).is_empty());
    }

    #[test]
    fn test_query_activity_and_reset() {
        let mut query = FeedbackQuery::new(StatusFilter::Only(FeedbackStatus::Resolved), "bug");
        assert!(query.is_active());
        query.reset();
        assert!(!query.is_active());
        assert_eq!(query, FeedbackQuery::default());
    }

    #[test]
    fn test_status_filter_labels() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "in-progress".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(FeedbackStatus::InProgress))
        );
        assert!("done".parse::<StatusFilter>().is_err());
        let options: Vec<_> = StatusFilter::options().iter().map(|f| f.as_str()).collect();
        assert_eq!(options, vec!["all", "new", "in-progress", "resolved"]);
    }
}
