//! Feedback Inbox Component
//!
//! Toolbar, filters and the list.

use leptos::prelude::*;

use crate::components::{FeedbackList, FilterBar};
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn FeedbackInbox() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store();

    view! {
        <section class="inbox">
            <div class="inbox-header">
                <h2>"Feedback Inbox"</h2>
                <span class="inbox-count">
                    {move || format!("{} of {}", store.visible().get().len(), store.items().get().len())}
                </span>
                <button class="btn btn-primary" on:click=move |_| {
                    ctx.update(|app| app.open_create_form());
                }>
                    "+ Add Feedback"
                </button>
            </div>
            <FilterBar />
            <FeedbackList />
        </section>
    }
}
