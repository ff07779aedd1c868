//! Stat Cards
//!
//! Totals per status across the whole collection, ignoring the inbox filter.

use leptos::prelude::*;

use feedpulse_core::FeedbackStatus;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] tone: String,
    #[prop(into)] value: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-{}", tone)>
            <span class="stat-value">{move || value.get()}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

#[component]
pub fn StatsHeader() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="stats-grid">
            <StatCard label="Total Feedback" tone="total" value=Signal::derive(move || store.stats().get().total) />
            {FeedbackStatus::ALL.into_iter().map(|status| view! {
                <StatCard
                    label=status.label()
                    tone=status.as_str()
                    value=Signal::derive(move || store.stats().get().count(status))
                />
            }).collect_view()}
        </section>
    }
}
