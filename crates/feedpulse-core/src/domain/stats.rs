//! Aggregate Counts
//!
//! Derived per-status counts, never stored on their own.

use super::feedback::{FeedbackItem, FeedbackStatus};

/// Header counts shown above the inbox
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedbackStats {
    pub total: usize,
    pub new: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl FeedbackStats {
    pub fn from_items(items: &[FeedbackItem]) -> Self {
        items.iter().fold(
            Self {
                total: items.len(),
                ..Self::default()
            },
            |mut stats, item| {
                match item.status {
                    FeedbackStatus::New => stats.new += 1,
                    FeedbackStatus::InProgress => stats.in_progress += 1,
                    FeedbackStatus::Resolved => stats.resolved += 1,
                }
                stats
            },
        )
    }

    pub fn count(&self, status: FeedbackStatus) -> usize {
        match status {
            FeedbackStatus::New => self.new,
            FeedbackStatus::InProgress => self.in_progress,
            FeedbackStatus::Resolved => self.resolved,
        }
    }

    /// `new + in_progress + resolved == total`
    pub fn is_consistent(&self) -> bool {
        self.new + self.in_progress + self.resolved == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed_feedbacks;
    use chrono::Utc;

    #[test]
    fn test_seed_counts() {
        let stats = FeedbackStats::from_items(&seed_feedbacks(Utc::now()));
        assert_eq!(stats.total, 3);
        assert_eq!(stats.count(FeedbackStatus::New), 2);
        assert_eq!(stats.count(FeedbackStatus::InProgress), 1);
        assert_eq!(stats.count(FeedbackStatus::Resolved), 0);
        assert!(stats.is_consistent());
    }
}
