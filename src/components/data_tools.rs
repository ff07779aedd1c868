//! Data Tools Component
//!
//! Side panel entry points for the import and export wizards.

use leptos::prelude::*;
use rolling_logger::recent_lines;

use crate::components::{ExportModal, ImportModal};

#[component]
pub fn DataTools() -> impl IntoView {
    let import_open = RwSignal::new(false);
    let export_open = RwSignal::new(false);

    view! {
        <aside class="panel data-tools">
            <h3>"Data Tools"</h3>
            <button class="btn btn-block" on:click=move |_| import_open.set(true)>"Import Data"</button>
            <button class="btn btn-block" on:click=move |_| export_open.set(true)>"Export Data"</button>
        </aside>
        <ImportModal open=import_open />
        <ExportModal open=export_open />
    }
}

#[component]
pub fn QuickTips() -> impl IntoView {
    view! {
        <aside class="panel quick-tips">
            <h3>"Quick Tips"</h3>
            <ul>
                <li>"Search matches client names, feedback text and categories."</li>
                <li>"Move new feedback to In Progress once someone picks it up."</li>
                <li>"Resolved feedback keeps its history; edit it to reopen."</li>
                <li>"Everything is saved in this browser automatically."</li>
            </ul>
        </aside>
    }
}

/// Lines shown in the activity panel
const ACTIVITY_LINES: usize = 20;

/// Most recent buffered log lines, newest first
#[component]
pub fn ActivityLog() -> impl IntoView {
    let lines = RwSignal::new(Vec::<String>::new());
    let refresh = move || {
        let recent: Vec<String> = recent_lines()
            .iter()
            .rev()
            .take(ACTIVITY_LINES)
            .map(ToString::to_string)
            .collect();
        lines.set(recent);
    };

    view! {
        <details class="panel activity-log" on:toggle=move |_| refresh()>
            <summary>"Activity Log"</summary>
            <button class="btn btn-small btn-ghost" on:click=move |_| refresh()>"Refresh"</button>
            <ul class="activity-lines">
                {move || lines.get().into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
            </ul>
        </details>
    }
}
