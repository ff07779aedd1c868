//! Badges
//!
//! Small colored labels for sentiment, priority and status.

use leptos::prelude::*;

use feedpulse_core::{FeedbackStatus, Priority, Sentiment};

pub fn sentiment_class(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "badge badge-positive",
        Sentiment::Neutral => "badge badge-neutral",
        Sentiment::Negative => "badge badge-negative",
    }
}

pub fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "badge badge-low",
        Priority::Medium => "badge badge-medium",
        Priority::High => "badge badge-high",
        Priority::Urgent => "badge badge-urgent",
    }
}

pub fn status_class(status: FeedbackStatus) -> &'static str {
    match status {
        FeedbackStatus::New => "badge badge-new",
        FeedbackStatus::InProgress => "badge badge-in-progress",
        FeedbackStatus::Resolved => "badge badge-resolved",
    }
}

#[component]
pub fn SentimentBadge(sentiment: Sentiment) -> impl IntoView {
    view! { <span class=sentiment_class(sentiment)>{sentiment.label()}</span> }
}

#[component]
pub fn PriorityBadge(priority: Priority) -> impl IntoView {
    view! { <span class=priority_class(priority)>{priority.label()}</span> }
}

/// Status text is title-cased ("In Progress")
#[component]
pub fn StatusBadge(status: FeedbackStatus) -> impl IntoView {
    view! { <span class=status_class(status)>{status.label()}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_value_has_its_own_class() {
        let classes: Vec<_> = Priority::ALL.into_iter().map(priority_class).collect();
        for (i, class) in classes.iter().enumerate() {
            assert!(class.starts_with("badge "));
            assert!(!classes[i + 1..].contains(class));
        }
        assert_eq!(status_class(FeedbackStatus::InProgress), "badge badge-in-progress");
        assert_eq!(sentiment_class(Sentiment::Negative), "badge badge-negative");
    }
}
