//! Feedback Entity
//!
//! One piece of client feedback and the fixed value sets it is described by.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::error::ParseValueError;

fn parse_label<T: Copy>(
    all: &[T],
    as_str: fn(&T) -> &'static str,
    kind: &'static str,
    s: &str,
) -> Result<T, ParseValueError> {
    all.iter()
        .copied()
        .find(|value| as_str(value) == s)
        .ok_or_else(|| ParseValueError::new(kind, s))
}

/// Channel the feedback arrived through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FeedbackSource {
    #[default]
    Email,
    #[serde(rename = "Support Ticket")]
    SupportTicket,
    #[serde(rename = "Feedback Form")]
    FeedbackForm,
    #[serde(rename = "Phone Call")]
    PhoneCall,
    #[serde(rename = "Social Media")]
    SocialMedia,
}

impl FeedbackSource {
    pub const ALL: [FeedbackSource; 5] = [
        FeedbackSource::Email,
        FeedbackSource::SupportTicket,
        FeedbackSource::FeedbackForm,
        FeedbackSource::PhoneCall,
        FeedbackSource::SocialMedia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackSource::Email => "Email",
            FeedbackSource::SupportTicket => "Support Ticket",
            FeedbackSource::FeedbackForm => "Feedback Form",
            FeedbackSource::PhoneCall => "Phone Call",
            FeedbackSource::SocialMedia => "Social Media",
        }
    }
}

/// Topic of the feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FeedbackCategory {
    #[default]
    General,
    #[serde(rename = "UI/UX")]
    UiUx,
    Bug,
    #[serde(rename = "Feature Request")]
    FeatureRequest,
    Performance,
    Support,
}

impl FeedbackCategory {
    pub const ALL: [FeedbackCategory; 6] = [
        FeedbackCategory::General,
        FeedbackCategory::UiUx,
        FeedbackCategory::Bug,
        FeedbackCategory::FeatureRequest,
        FeedbackCategory::Performance,
        FeedbackCategory::Support,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackCategory::General => "General",
            FeedbackCategory::UiUx => "UI/UX",
            FeedbackCategory::Bug => "Bug",
            FeedbackCategory::FeatureRequest => "Feature Request",
            FeedbackCategory::Performance => "Performance",
            FeedbackCategory::Support => "Support",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Low, Priority::Medium, Priority::High, Priority::Urgent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }
}

/// Lifecycle stage of a feedback item
///
/// Ordered `New < InProgress < Resolved`; the ordering is what
/// "forward" means for transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackStatus {
    #[default]
    New,
    InProgress,
    Resolved,
}

impl FeedbackStatus {
    pub const ALL: [FeedbackStatus; 3] = [
        FeedbackStatus::New,
        FeedbackStatus::InProgress,
        FeedbackStatus::Resolved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackStatus::New => "new",
            FeedbackStatus::InProgress => "in-progress",
            FeedbackStatus::Resolved => "resolved",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeedbackStatus::New => "New",
            FeedbackStatus::InProgress => "In Progress",
            FeedbackStatus::Resolved => "Resolved",
        }
    }
}

macro_rules! impl_label_traits {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_label(&<$ty>::ALL, <$ty>::as_str, $kind, s)
            }
        }
    };
}

impl_label_traits!(FeedbackSource, "source");
impl_label_traits!(FeedbackCategory, "category");
impl_label_traits!(Sentiment, "sentiment");
impl_label_traits!(Priority, "priority");
impl_label_traits!(FeedbackStatus, "status");

/// Named fields of a feedback record, used when mapping imported columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeedbackField {
    ClientName,
    Content,
    Source,
    Category,
    Sentiment,
    Priority,
    Status,
    CreatedAt,
}

impl FeedbackField {
    pub const ALL: [FeedbackField; 8] = [
        FeedbackField::ClientName,
        FeedbackField::Content,
        FeedbackField::Source,
        FeedbackField::Category,
        FeedbackField::Sentiment,
        FeedbackField::Priority,
        FeedbackField::Status,
        FeedbackField::CreatedAt,
    ];

    /// Fields an import cannot do without
    pub const REQUIRED: [FeedbackField; 2] = [FeedbackField::ClientName, FeedbackField::Content];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackField::ClientName => "clientName",
            FeedbackField::Content => "content",
            FeedbackField::Source => "source",
            FeedbackField::Category => "category",
            FeedbackField::Sentiment => "sentiment",
            FeedbackField::Priority => "priority",
            FeedbackField::Status => "status",
            FeedbackField::CreatedAt => "createdAt",
        }
    }
}

impl_label_traits!(FeedbackField, "field");

/// One client-submitted piece of feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackItem {
    /// Unique identifier, assigned on creation
    pub id: u32,
    pub client_name: String,
    /// Feedback body
    pub content: String,
    pub source: FeedbackSource,
    pub category: FeedbackCategory,
    pub sentiment: Sentiment,
    pub priority: Priority,
    pub status: FeedbackStatus,
    /// Set once at creation
    pub created_at: DateTime<Utc>,
}

impl FeedbackItem {
    /// Creation date the way the list shows it, e.g. `Mar 4, 2025`
    pub fn display_date(&self) -> String {
        self.created_at.format("%b %-d, %Y").to_string()
    }
}

impl Entity for FeedbackItem {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> FeedbackItem {
        FeedbackItem {
            id: 7,
            client_name: "Acme Corp".to_string(),
            content: "Dashboard is great".to_string(),
            source: FeedbackSource::SupportTicket,
            category: FeedbackCategory::UiUx,
            sentiment: Sentiment::Positive,
            priority: Priority::Urgent,
            status: FeedbackStatus::InProgress,
            created_at: Utc.with_ymd_and_hms(2025, 3, 4, 10, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["clientName"], "Acme Corp");
        assert_eq!(json["source"], "Support Ticket");
        assert_eq!(json["category"], "UI/UX");
        assert_eq!(json["sentiment"], "positive");
        assert_eq!(json["priority"], "urgent");
        assert_eq!(json["status"], "in-progress");
        assert_eq!(json["createdAt"], "2025-03-04T10:30:00Z");
    }

    #[test]
    fn test_reads_browser_timestamps() {
        let raw = r#"{
            "id": 3,
            "clientName": "Global Services LLC",
            "content": "Calendar integration please",
            "source": "Feedback Form",
            "category": "Feature Request",
            "sentiment": "neutral",
            "priority": "low",
            "status": "new",
            "createdAt": "2025-01-02T08:15:30.123Z"
        }"#;
        let item: FeedbackItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.source, FeedbackSource::FeedbackForm);
        assert_eq!(item.category, FeedbackCategory::FeatureRequest);
        assert_eq!(item.display_date(), "Jan 2, 2025");
    }

    #[test]
    fn test_labels_parse_back() {
        assert_eq!("Social Media".parse::<FeedbackSource>(), Ok(FeedbackSource::SocialMedia));
        assert_eq!("in-progress".parse::<FeedbackStatus>(), Ok(FeedbackStatus::InProgress));
        assert_eq!("createdAt".parse::<FeedbackField>(), Ok(FeedbackField::CreatedAt));
        assert!("In Progress".parse::<FeedbackStatus>().is_err());
    }

    #[test]
    fn test_status_ordering() {
        assert!(FeedbackStatus::New < FeedbackStatus::InProgress);
        assert!(FeedbackStatus::InProgress < FeedbackStatus::Resolved);
        assert_eq!(FeedbackStatus::InProgress.label(), "In Progress");
    }

    #[test]
    fn test_entity_id() {
        assert_eq!(sample().id(), 7);
    }
}
