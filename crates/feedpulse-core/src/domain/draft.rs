//! Drafts and Patches
//!
//! Uncommitted form input and the partial updates an edit merges in.

use serde::{Deserialize, Serialize};

use super::feedback::{
    FeedbackCategory, FeedbackItem, FeedbackSource, FeedbackStatus, Priority, Sentiment,
};
use crate::error::ValidationError;

/// Both text fields must hold something other than whitespace.
pub fn validate_required(client_name: &str, content: &str) -> Result<(), ValidationError> {
    if client_name.trim().is_empty() {
        return Err(ValidationError::EmptyClientName);
    }
    if content.trim().is_empty() {
        return Err(ValidationError::EmptyContent);
    }
    Ok(())
}

/// A feedback record under creation or edit (no id, no timestamp)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDraft {
    pub client_name: String,
    pub content: String,
    pub source: FeedbackSource,
    pub category: FeedbackCategory,
    pub sentiment: Sentiment,
    pub priority: Priority,
    pub status: FeedbackStatus,
}

/// A single draft field update, tagged by which field it targets
#[derive(Debug, Clone, PartialEq)]
pub enum DraftField {
    ClientName(String),
    Content(String),
    Source(FeedbackSource),
    Category(FeedbackCategory),
    Sentiment(Sentiment),
    Priority(Priority),
    Status(FeedbackStatus),
}

impl FeedbackDraft {
    /// Copy the editable fields of an existing item
    pub fn from_item(item: &FeedbackItem) -> Self {
        Self {
            client_name: item.client_name.clone(),
            content: item.content.clone(),
            source: item.source,
            category: item.category,
            sentiment: item.sentiment,
            priority: item.priority,
            status: item.status,
        }
    }

    pub fn apply(&mut self, field: DraftField) {
        match field {
            DraftField::ClientName(value) => self.client_name = value,
            DraftField::Content(value) => self.content = value,
            DraftField::Source(value) => self.source = value,
            DraftField::Category(value) => self.category = value,
            DraftField::Sentiment(value) => self.sentiment = value,
            DraftField::Priority(value) => self.priority = value,
            DraftField::Status(value) => self.status = value,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required(&self.client_name, &self.content)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Shallow update for an existing item; `None` keeps the current value
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackPatch {
    pub client_name: Option<String>,
    pub content: Option<String>,
    pub source: Option<FeedbackSource>,
    pub category: Option<FeedbackCategory>,
    pub sentiment: Option<Sentiment>,
    pub priority: Option<Priority>,
    pub status: Option<FeedbackStatus>,
}

impl FeedbackPatch {
    /// Returns `item` with the patch merged in; id and created_at are never touched
    pub fn merged_into(&self, item: &FeedbackItem) -> FeedbackItem {
        FeedbackItem {
            id: item.id,
            client_name: self.client_name.clone().unwrap_or_else(|| item.client_name.clone()),
            content: self.content.clone().unwrap_or_else(|| item.content.clone()),
            source: self.source.unwrap_or(item.source),
            category: self.category.unwrap_or(item.category),
            sentiment: self.sentiment.unwrap_or(item.sentiment),
            priority: self.priority.unwrap_or(item.priority),
            status: self.status.unwrap_or(item.status),
            created_at: item.created_at,
        }
    }
}

impl From<&FeedbackDraft> for FeedbackPatch {
    fn from(draft: &FeedbackDraft) -> Self {
        Self {
            client_name: Some(draft.client_name.clone()),
            content: Some(draft.content.clone()),
            source: Some(draft.source),
            category: Some(draft.category),
            sentiment: Some(draft.sentiment),
            priority: Some(draft.priority),
            status: Some(draft.status),
        }
    }
}
