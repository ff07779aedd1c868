//! Configuration
//!
//! Storage slot names, timings and the transition policy. Every field has a
//! default, so a JSON override only needs the keys it changes.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lifecycle::TransitionPolicy;

pub const DEFAULT_FEEDBACK_KEY: &str = "feedbacks";
pub const DEFAULT_THEME_KEY: &str = "theme";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeedPulseConfig {
    /// Storage slot holding the serialized collection
    pub feedback_key: String,
    /// Storage slot holding the theme preference
    pub theme_key: String,
    /// Latency of the simulated import/export
    pub transfer_delay_ms: u64,
    /// How long a toast stays up
    pub toast_timeout_ms: u64,
    pub transition_policy: TransitionPolicy,
    /// Lines kept by the in-memory log buffer
    pub log_capacity: usize,
}

impl Default for FeedPulseConfig {
    fn default() -> Self {
        Self {
            feedback_key: DEFAULT_FEEDBACK_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            transfer_delay_ms: 1500,
            toast_timeout_ms: 4000,
            transition_policy: TransitionPolicy::Permissive,
            log_capacity: 500,
        }
    }
}

impl FeedPulseConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn transfer_delay(&self) -> Duration {
        Duration::from_millis(self.transfer_delay_ms)
    }

    pub fn toast_timeout(&self) -> Duration {
        Duration::from_millis(self.toast_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override() {
        let config =
            FeedPulseConfig::from_json(r#"{"transferDelayMs": 10, "transitionPolicy": "forward-only"}"#)
                .unwrap();
        assert_eq!(config.transfer_delay(), Duration::from_millis(10));
        assert_eq!(config.transition_policy, TransitionPolicy::ForwardOnly);
        assert_eq!(config.feedback_key, "feedbacks");
        assert_eq!(config.theme_key, "theme");
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(FeedPulseConfig::from_json("{not json").is_err());
    }
}
