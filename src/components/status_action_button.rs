//! Status Action Button Component

use leptos::prelude::*;

use feedpulse_core::StatusAction;

use crate::context::use_app_context;

/// One lifecycle transition for one item
#[component]
pub fn StatusActionButton(id: u32, action: StatusAction) -> impl IntoView {
    let ctx = use_app_context();
    let class = match action {
        StatusAction::MarkInProgress => "btn btn-small btn-progress",
        StatusAction::MarkResolved => "btn btn-small btn-resolve",
    };

    view! {
        <button
            class=class
            on:click=move |ev| {
                ev.stop_propagation();
                if let Some(Err(e)) = ctx.update(|app| app.apply_action(id, action)) {
                    log::debug!("{} on #{} not applied: {}", action.label(), id, e);
                }
            }
        >
            {action.label()}
        </button>
    }
}
