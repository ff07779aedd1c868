//! FeedPulse Core
//!
//! Layered architecture:
//! - domain: feedback records, value sets, drafts, stats
//! - repository: key-value persistence and the feedback collection
//! - filter / lifecycle / form: inbox filtering, status rules, validation
//! - transfer: import/export behind an async trait
//! - controller: the application object tying it together

pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod filter;
pub mod form;
pub mod lifecycle;
pub mod notify;
pub mod repository;
pub mod transfer;

pub use config::FeedPulseConfig;
pub use controller::FeedPulse;
pub use domain::{
    DraftField, FeedbackCategory, FeedbackDraft, FeedbackField, FeedbackItem, FeedbackPatch,
    FeedbackSource, FeedbackStats, FeedbackStatus, Priority, Sentiment, Theme,
};
pub use error::{FeedPulseError, Result, ValidationError};
pub use filter::{filter_feedbacks, FeedbackQuery, StatusFilter};
pub use form::{FeedbackForm, FormMode};
pub use lifecycle::{is_transition_offered, offered_actions, StatusAction, TransitionPolicy};
pub use notify::{Notification, NotificationLevel, Notifier};
pub use repository::{FeedbackRepository, KeyValueStore, MemoryStore, PersistentStore};
