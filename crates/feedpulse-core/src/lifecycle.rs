//! Status Lifecycle
//!
//! `new → in-progress → resolved`. These functions only advise which
//! transition actions to show; the repository accepts any status.

use serde::{Deserialize, Serialize};

use crate::domain::FeedbackStatus;

/// A transition button offered next to an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusAction {
    MarkInProgress,
    MarkResolved,
}

impl StatusAction {
    /// Display order of the action buttons
    pub const ALL: [StatusAction; 2] = [StatusAction::MarkInProgress, StatusAction::MarkResolved];

    pub fn target(&self) -> FeedbackStatus {
        match self {
            StatusAction::MarkInProgress => FeedbackStatus::InProgress,
            StatusAction::MarkResolved => FeedbackStatus::Resolved,
        }
    }

    pub fn label(&self) -> &'static str {
        self.target().label()
    }
}

/// Whether a control moving `current` to `target` should be shown.
pub fn is_transition_offered(current: FeedbackStatus, target: FeedbackStatus) -> bool {
    if current == target {
        return false;
    }
    match target {
        FeedbackStatus::InProgress => current == FeedbackStatus::New,
        FeedbackStatus::Resolved => current != FeedbackStatus::Resolved,
        FeedbackStatus::New => false,
    }
}

pub fn offered_actions(current: FeedbackStatus) -> Vec<StatusAction> {
    StatusAction::ALL
        .into_iter()
        .filter(|action| is_transition_offered(current, action.target()))
        .collect()
}

/// Strictly later in the lifecycle
pub fn is_forward(current: FeedbackStatus, target: FeedbackStatus) -> bool {
    target > current
}

/// How status updates issued through the application object are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionPolicy {
    /// Any status may be set, whatever the current one is
    #[default]
    Permissive,
    /// Only forward moves are accepted
    ForwardOnly,
}

impl TransitionPolicy {
    pub fn permits(&self, current: FeedbackStatus, target: FeedbackStatus) -> bool {
        match self {
            TransitionPolicy::Permissive => true,
            TransitionPolicy::ForwardOnly => is_forward(current, target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FeedbackStatus::*;

    #[test]
    fn test_actions_for_new() {
        assert_eq!(
            offered_actions(New),
            vec![StatusAction::MarkInProgress, StatusAction::MarkResolved]
        );
    }

    #[test]
    fn test_actions_for_in_progress() {
        assert_eq!(offered_actions(InProgress), vec![StatusAction::MarkResolved]);
    }

    #[test]
    fn test_nothing_offered_once_resolved() {
        assert!(offered_actions(Resolved).is_empty());
    }

    #[test]
    fn test_self_transition_never_offered() {
        for status in FeedbackStatus::ALL {
            assert!(!is_transition_offered(status, status));
        }
    }

    #[test]
    fn test_back_to_new_never_offered() {
        for status in FeedbackStatus::ALL {
            assert!(!is_transition_offered(status, New));
        }
    }

    #[test]
    fn test_policy() {
        assert!(TransitionPolicy::Permissive.permits(Resolved, New));
        assert!(!TransitionPolicy::ForwardOnly.permits(Resolved, New));
        assert!(!TransitionPolicy::ForwardOnly.permits(InProgress, InProgress));
        assert!(TransitionPolicy::ForwardOnly.permits(New, Resolved));
    }
}
