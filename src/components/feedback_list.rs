//! Feedback List Component
//!
//! The filtered inbox, or an empty-state message when nothing matches.

use leptos::prelude::*;

use feedpulse_core::{FeedbackCategory, FeedbackItem, FeedbackSource, FeedbackStatus, Priority, Sentiment};

use crate::components::FeedbackRow;
use crate::store::{use_app_store, AppStateStoreFields};

type RowKey = (
    u32,
    FeedbackStatus,
    Priority,
    Sentiment,
    FeedbackSource,
    FeedbackCategory,
    String,
    String,
);

/// Rows are rebuilt whenever any rendered field changes
fn row_key(item: &FeedbackItem) -> RowKey {
    (
        item.id,
        item.status,
        item.priority,
        item.sentiment,
        item.source,
        item.category,
        item.client_name.clone(),
        item.content.clone(),
    )
}

pub fn empty_hint(filters_active: bool) -> &'static str {
    if filters_active {
        "Try adjusting your filters"
    } else {
        "Add your first feedback to get started"
    }
}

#[component]
pub fn FeedbackList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show
            when=move || !store.visible().get().is_empty()
            fallback=move || view! {
                <div class="empty-state">
                    <h3>"No feedback found"</h3>
                    <p>{move || empty_hint(store.filters_active().get())}</p>
                </div>
            }
        >
            <ul class="feedback-list">
                <For
                    each=move || store.visible().get()
                    key=row_key
                    children=|item| view! { <FeedbackRow item=item /> }
                />
            </ul>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_empty_hint_depends_on_filters() {
        assert_eq!(empty_hint(true), "Try adjusting your filters");
        assert_eq!(empty_hint(false), "Add your first feedback to get started");
    }

    #[test]
    fn test_row_key_changes_with_status() {
        let mut item = feedpulse_core::domain::seed_feedbacks(Utc::now()).remove(0);
        let before = row_key(&item);
        item.status = FeedbackStatus::Resolved;
        assert_ne!(before, row_key(&item));
    }
}
