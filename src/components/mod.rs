//! UI Components
//!
//! Reusable Leptos components.

mod badges;
mod data_tools;
mod feedback_form;
mod feedback_inbox;
mod feedback_list;
mod feedback_row;
mod filter_bar;
mod option_select;
mod stat_card;
mod status_action_button;
mod theme_toggle;
mod toast_host;
mod transfer_modal;

pub use badges::{PriorityBadge, SentimentBadge, StatusBadge};
pub use data_tools::{ActivityLog, DataTools, QuickTips};
pub use feedback_form::FeedbackFormDialog;
pub use feedback_inbox::FeedbackInbox;
pub use feedback_list::FeedbackList;
pub use feedback_row::FeedbackRow;
pub use filter_bar::FilterBar;
pub use option_select::{options_of, OptionSelect};
pub use stat_card::{StatCard, StatsHeader};
pub use status_action_button::StatusActionButton;
pub use theme_toggle::ThemeToggle;
pub use toast_host::ToastHost;
pub use transfer_modal::{ExportModal, ImportModal};
