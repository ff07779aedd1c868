//! Filter Bar Component
//!
//! Search box and status drop-down above the inbox.

use leptos::prelude::*;

use feedpulse_core::StatusFilter;

use crate::components::OptionSelect;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store();

    let status_options: Vec<_> = StatusFilter::options()
        .into_iter()
        .map(|filter| (filter.as_str(), filter.label()))
        .collect();

    let on_status = move |value: String| match value.parse::<StatusFilter>() {
        Ok(filter) => {
            ctx.update(|app| app.set_status_filter(filter));
        }
        Err(e) => log::warn!("Ignoring status filter: {}", e),
    };

    view! {
        <div class="filter-bar">
            <input
                type="search"
                class="search-input"
                placeholder="Search by client, content or category..."
                prop:value=move || store.search().get()
                on:input=move |ev| {
                    let term = event_target_value(&ev);
                    ctx.update(|app| app.set_search(term));
                }
            />
            <OptionSelect
                label="Status"
                options=status_options
                value=Signal::derive(move || store.status_filter().get().as_str().to_string())
                on_change=on_status
            />
            <Show when=move || store.filters_active().get()>
                <button class="btn-link" on:click=move |_| {
                    ctx.update(|app| app.reset_filters());
                }>
                    "Clear filters"
                </button>
            </Show>
        </div>
    }
}
