//! Domain Layer
//!
//! Feedback records, their value sets, and derived data.
//! No storage or UI concerns live here.

mod entity;
mod feedback;
mod draft;
mod stats;
mod theme;
mod seed;

pub use entity::{next_id, position_of, Entity};
pub use feedback::{
    FeedbackCategory, FeedbackField, FeedbackItem, FeedbackSource, FeedbackStatus, Priority,
    Sentiment,
};
pub use draft::{validate_required, DraftField, FeedbackDraft, FeedbackPatch};
pub use stats::FeedbackStats;
pub use theme::Theme;
pub use seed::seed_feedbacks;
