//! Seed Set
//!
//! Example feedback shown on first run, before anything was persisted.

use chrono::{DateTime, Duration, Utc};

use super::feedback::{
    FeedbackCategory, FeedbackItem, FeedbackSource, FeedbackStatus, Priority, Sentiment,
};

/// The three demo items, dated one, two and three days before `now`
pub fn seed_feedbacks(now: DateTime<Utc>) -> Vec<FeedbackItem> {
    vec![
        FeedbackItem {
            id: 1,
            client_name: "Acme Corp".to_string(),
            content: "The new dashboard design is much more intuitive. Great improvement!".to_string(),
            source: FeedbackSource::Email,
            category: FeedbackCategory::UiUx,
            sentiment: Sentiment::Positive,
            priority: Priority::Medium,
            status: FeedbackStatus::New,
            created_at: now - Duration::days(1),
        },
        FeedbackItem {
            id: 2,
            client_name: "TechStart Inc".to_string(),
            content: "We're experiencing bugs in the export feature. Nothing is downloading when clicked."
                .to_string(),
            source: FeedbackSource::SupportTicket,
            category: FeedbackCategory::Bug,
            sentiment: Sentiment::Negative,
            priority: Priority::High,
            status: FeedbackStatus::InProgress,
            created_at: now - Duration::days(2),
        },
        FeedbackItem {
            id: 3,
            client_name: "Global Services LLC".to_string(),
            content: "Would love to see a calendar integration in the next update.".to_string(),
            source: FeedbackSource::FeedbackForm,
            category: FeedbackCategory::FeatureRequest,
            sentiment: Sentiment::Neutral,
            priority: Priority::Low,
            status: FeedbackStatus::New,
            created_at: now - Duration::days(3),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_order_and_status() {
        let seed = seed_feedbacks(Utc::now());
        let summary: Vec<_> = seed
            .iter()
            .map(|item| (item.id, item.client_name.as_str(), item.status))
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, "Acme Corp", FeedbackStatus::New),
                (2, "TechStart Inc", FeedbackStatus::InProgress),
                (3, "Global Services LLC", FeedbackStatus::New),
            ]
        );
    }

    #[test]
    fn test_seed_dates_go_backwards() {
        let now = Utc::now();
        let seed = seed_feedbacks(now);
        assert!(seed.windows(2).all(|pair| pair[0].created_at > pair[1].created_at));
        assert_eq!(now - seed[0].created_at, Duration::days(1));
    }
}
