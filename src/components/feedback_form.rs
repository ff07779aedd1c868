//! Feedback Form Component
//!
//! Add/edit dialog. Every keystroke goes through the controller, so the
//! draft survives a failed submit untouched.

use std::str::FromStr;

use leptos::prelude::*;

use feedpulse_core::{
    DraftField, FeedbackCategory, FeedbackDraft, FeedbackSource, FeedbackStatus, FormMode,
    Priority, Sentiment,
};

use crate::components::{options_of, OptionSelect};
use crate::context::{use_app_context, AppContext};
use crate::store::{AppStateStoreFields, AppStore};

pub fn dialog_title(mode: FormMode) -> &'static str {
    match mode {
        FormMode::Editing(_) => "Edit Feedback",
        FormMode::Creating | FormMode::Closed => "Add New Feedback",
    }
}

/// Drop-down handler that parses the chosen value and stores it in the draft
fn select_handler<T, W>(ctx: AppContext, wrap: W) -> impl Fn(String) + Copy + Send + Sync + 'static
where
    T: FromStr + 'static,
    T::Err: std::fmt::Display,
    W: Fn(T) -> DraftField + Copy + Send + Sync + 'static,
{
    move |value: String| match value.parse::<T>() {
        Ok(parsed) => {
            ctx.update(|app| app.update_draft(wrap(parsed)));
        }
        Err(e) => log::warn!("Ignoring form value: {}", e),
    }
}

fn draft_value(store: AppStore, read: fn(&FeedbackDraft) -> &'static str) -> Signal<String> {
    Signal::derive(move || read(&store.draft().read()).to_string())
}

#[component]
pub fn FeedbackFormDialog() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(Err(e)) = ctx.update(|app| app.submit_form()) {
            log::debug!("Feedback not saved: {}", e);
        }
    };

    view! {
        <Show when=move || store.form_mode().get() != FormMode::Closed>
            <div class="modal-backdrop" on:click=move |_| {
                ctx.update(|app| app.cancel_form());
            }>
                <form
                    class="modal feedback-form"
                    on:click=|ev| ev.stop_propagation()
                    on:submit=on_submit
                >
                    <h2>{move || dialog_title(store.form_mode().get())}</h2>

                    <label class="field">
                        <span class="field-label">"Client Name *"</span>
                        <input
                            type="text"
                            placeholder="Enter client name"
                            prop:value=move || store.draft().read().client_name.clone()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                ctx.update(|app| app.update_draft(DraftField::ClientName(value)));
                            }
                        />
                    </label>

                    <label class="field">
                        <span class="field-label">"Feedback *"</span>
                        <textarea
                            rows="4"
                            placeholder="What did the client say?"
                            prop:value=move || store.draft().read().content.clone()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                ctx.update(|app| app.update_draft(DraftField::Content(value)));
                            }
                        />
                    </label>

                    <div class="field-grid">
                        <OptionSelect
                            label="Source"
                            options=options_of(&FeedbackSource::ALL, FeedbackSource::as_str, FeedbackSource::as_str)
                            value=draft_value(store, |draft| draft.source.as_str())
                            on_change=select_handler(ctx, DraftField::Source)
                        />
                        <OptionSelect
                            label="Category"
                            options=options_of(&FeedbackCategory::ALL, FeedbackCategory::as_str, FeedbackCategory::as_str)
                            value=draft_value(store, |draft| draft.category.as_str())
                            on_change=select_handler(ctx, DraftField::Category)
                        />
                        <OptionSelect
                            label="Sentiment"
                            options=options_of(&Sentiment::ALL, Sentiment::as_str, Sentiment::label)
                            value=draft_value(store, |draft| draft.sentiment.as_str())
                            on_change=select_handler(ctx, DraftField::Sentiment)
                        />
                        <OptionSelect
                            label="Priority"
                            options=options_of(&Priority::ALL, Priority::as_str, Priority::label)
                            value=draft_value(store, |draft| draft.priority.as_str())
                            on_change=select_handler(ctx, DraftField::Priority)
                        />
                        <OptionSelect
                            label="Status"
                            options=options_of(&FeedbackStatus::ALL, FeedbackStatus::as_str, FeedbackStatus::label)
                            value=draft_value(store, |draft| draft.status.as_str())
                            on_change=select_handler(ctx, DraftField::Status)
                        />
                    </div>

                    <div class="modal-actions">
                        <button type="button" class="btn btn-ghost" on:click=move |_| {
                            ctx.update(|app| app.cancel_form());
                        }>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">
                            {move || match store.form_mode().get() {
                                FormMode::Editing(_) => "Save Changes",
                                _ => "Add Feedback",
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_title() {
        assert_eq!(dialog_title(FormMode::Creating), "Add New Feedback");
        assert_eq!(dialog_title(FormMode::Editing(3)), "Edit Feedback");
    }
}
