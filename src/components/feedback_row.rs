//! Feedback Row Component
//!
//! One inbox entry: client, date, text, badges and its actions.

use leptos::prelude::*;

use feedpulse_core::{offered_actions, FeedbackItem};

use crate::components::{PriorityBadge, SentimentBadge, StatusActionButton, StatusBadge};
use crate::context::use_app_context;

#[component]
pub fn FeedbackRow(item: FeedbackItem) -> impl IntoView {
    let ctx = use_app_context();
    let id = item.id;
    let actions = offered_actions(item.status);

    let on_edit = move |_| {
        if let Some(Err(e)) = ctx.update(|app| app.begin_edit(id)) {
            log::warn!("Edit dialog not opened: {}", e);
        }
    };

    view! {
        <li class="feedback-row">
            <div class="feedback-row-header">
                <div>
                    <h3 class="feedback-client">{item.client_name.clone()}</h3>
                    <span class="feedback-meta">
                        {item.display_date()} " · " {item.source.as_str()} " · " {item.category.as_str()}
                    </span>
                </div>
                <div class="feedback-badges">
                    <SentimentBadge sentiment=item.sentiment />
                    <PriorityBadge priority=item.priority />
                    <StatusBadge status=item.status />
                </div>
            </div>
            <p class="feedback-content">{item.content.clone()}</p>
            <div class="feedback-actions">
                {actions.into_iter().map(|action| view! {
                    <StatusActionButton id=id action=action />
                }).collect_view()}
                <button class="btn btn-small btn-ghost" on:click=on_edit>"Edit"</button>
            </div>
        </li>
    }
}
