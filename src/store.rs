//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is a
//! render mirror of the controller: components read it, and every controller
//! mutation is followed by `store_sync`.

use leptos::prelude::*;
use reactive_stores::Store;

use feedpulse_core::{
    FeedbackDraft, FeedbackItem, FeedbackStats, FormMode, Notification, NotificationLevel,
    StatusFilter,
};

use crate::context::Controller;

/// A toast on screen
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Whole collection, newest first
    pub items: Vec<FeedbackItem>,
    /// Items passing the current filter
    pub visible: Vec<FeedbackItem>,
    pub stats: FeedbackStats,
    pub status_filter: StatusFilter,
    pub search: String,
    /// Whether either filter control narrows the list
    pub filters_active: bool,
    /// Which dialog is open
    pub form_mode: FormMode,
    pub draft: FeedbackDraft,
    pub dark: bool,
    /// Newest first
    pub toasts: Vec<Toast>,
    pub next_toast_id: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            next_toast_id: 1,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Copy everything the views render out of the controller
pub fn store_sync(store: &AppStore, app: &Controller) {
    store.items().set(app.items().to_vec());
    store.visible().set(app.visible());
    store.stats().set(app.stats());
    store.status_filter().set(app.query().status);
    store.search().set(app.query().search.clone());
    store.filters_active().set(app.query().is_active());
    store.form_mode().set(app.form().mode());
    store.draft().set(app.form().draft().clone());
    if let Some(theme) = app.theme() {
        store.dark().set(theme.is_dark());
    }
}

/// Put a toast on top of the stack, returning its id
pub fn store_push_toast(store: &AppStore, notification: Notification) -> u64 {
    let id = store.next_toast_id().get_untracked();
    store.next_toast_id().set(id + 1);
    store.toasts().write().insert(
        0,
        Toast {
            id,
            level: notification.level,
            message: notification.message,
        },
    );
    id
}

/// Remove a toast by ID
pub fn store_dismiss_toast(store: &AppStore, toast_id: u64) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}
