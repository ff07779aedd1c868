//! Persistent Store
//!
//! Serializes the feedback collection and the theme flag into two slots of
//! a key-value medium. Best effort: no batching, no transactions, and the
//! last writer wins.

use chrono::{DateTime, Utc};

use super::traits::KeyValueStore;
use crate::config::{FeedPulseConfig, DEFAULT_FEEDBACK_KEY, DEFAULT_THEME_KEY};
use crate::domain::{seed_feedbacks, FeedbackItem, Theme};
use crate::error::{FeedPulseError, Result};

pub struct PersistentStore<S> {
    medium: S,
    feedback_key: String,
    theme_key: String,
}

impl<S: KeyValueStore> PersistentStore<S> {
    pub fn new(medium: S, config: &FeedPulseConfig) -> Self {
        Self {
            medium,
            feedback_key: config.feedback_key.clone(),
            theme_key: config.theme_key.clone(),
        }
    }

    /// Store using the `feedbacks` and `theme` slots
    pub fn with_default_keys(medium: S) -> Self {
        Self {
            medium,
            feedback_key: DEFAULT_FEEDBACK_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
        }
    }

    /// Stored collection, or the seed set when the slot was never written.
    ///
    /// Text that does not parse is reported as `CorruptState`.
    pub fn load(&self, now: DateTime<Utc>) -> Result<Vec<FeedbackItem>> {
        match self.medium.get(&self.feedback_key)? {
            None => {
                log::info!("No stored feedback under {:?}, using seed set", self.feedback_key);
                Ok(seed_feedbacks(now))
            }
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| FeedPulseError::CorruptState(format!("{}: {}", self.feedback_key, e))),
        }
    }

    /// `load`, falling back to the seed set on any failure
    pub fn load_or_seed(&self, now: DateTime<Utc>) -> Vec<FeedbackItem> {
        match self.load(now) {
            Ok(items) => {
                log::debug!("Loaded {} feedback items", items.len());
                items
            }
            Err(e) => {
                log::warn!("Falling back to seed set: {}", e);
                seed_feedbacks(now)
            }
        }
    }

    /// Replace the stored collection with `items`
    pub fn save(&mut self, items: &[FeedbackItem]) -> Result<()> {
        let raw = serde_json::to_string(items)?;
        self.medium.set(&self.feedback_key, &raw)
    }

    /// Stored theme; an unreadable value counts as no preference
    pub fn load_theme(&self) -> Option<Theme> {
        let raw = match self.medium.get(&self.theme_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Could not read theme: {}", e);
                return None;
            }
        };
        match raw.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(e) => {
                log::warn!("Ignoring stored theme {:?}: {}", raw, e);
                None
            }
        }
    }

    pub fn save_theme(&mut self, theme: Theme) -> Result<()> {
        self.medium.set(&self.theme_key, theme.as_str())
    }

    pub fn medium(&self) -> &S {
        &self.medium
    }

    pub fn into_medium(self) -> S {
        self.medium
    }
}
