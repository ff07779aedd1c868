//! Import / Export Dialogs
//!
//! Import is a four-step wizard (source, file, field mapping, confirm);
//! export is a single form. Both hand off to the transfer service and
//! report through the controller's notifier.

use leptos::prelude::*;
use leptos::task::spawn_local;

use feedpulse_core::transfer::{
    ExportFormat, ExportOptions, FieldMapping, FileHandle, ImportRequest, ImportSource,
    TransferService,
};
use feedpulse_core::{FeedbackField, StatusFilter};

use crate::components::OptionSelect;
use crate::context::use_app_context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStep {
    Source,
    File,
    Mapping,
    Confirm,
}

impl ImportStep {
    pub const ALL: [ImportStep; 4] = [
        ImportStep::Source,
        ImportStep::File,
        ImportStep::Mapping,
        ImportStep::Confirm,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ImportStep::Source => "Choose a source",
            ImportStep::File => "Select a file",
            ImportStep::Mapping => "Map fields",
            ImportStep::Confirm => "Review and import",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ImportStep::Source => ImportStep::File,
            ImportStep::File => ImportStep::Mapping,
            ImportStep::Mapping | ImportStep::Confirm => ImportStep::Confirm,
        }
    }

    pub fn back(self) -> Self {
        match self {
            ImportStep::Source | ImportStep::File => ImportStep::Source,
            ImportStep::Mapping => ImportStep::File,
            ImportStep::Confirm => ImportStep::Mapping,
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|step| *step == self).unwrap_or(0)
    }
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[component]
pub fn ImportModal(open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();

    let step = RwSignal::new(ImportStep::Source);
    let source = RwSignal::new(ImportSource::Csv);
    let file = RwSignal::new(FileHandle::default());
    let mapping = RwSignal::new(FieldMapping::identity());
    let busy = RwSignal::new(false);

    let close = move || {
        open.set(false);
        step.set(ImportStep::Source);
        file.set(FileHandle::default());
        mapping.set(FieldMapping::identity());
    };

    let on_file = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        match input.files().and_then(|files| files.get(0)) {
            Some(picked) => file.set(FileHandle {
                name: picked.name(),
                size_bytes: picked.size() as u64,
            }),
            None => file.set(FileHandle::default()),
        }
    };

    let run_import = move |_| {
        let request = ImportRequest {
            source: source.get_untracked(),
            file: file.get_untracked(),
            mapping: mapping.get_untracked(),
        };
        let transfer = ctx.transfer();
        busy.set(true);
        spawn_local(async move {
            let outcome = transfer.request_import(request).await;
            if ctx.try_with(|app| app.report_import(&outcome)).is_none() {
                log::debug!("Import finished after the app was disposed");
                return;
            }
            busy.set(false);
            if outcome.is_ok() {
                close();
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal transfer-modal">
                    <h2>"Import Feedback"</h2>
                    <ol class="wizard-steps">
                        {ImportStep::ALL.into_iter().map(|each| view! {
                            <li class={move || if step.get().index() >= each.index() { "wizard-step done" } else { "wizard-step" }}>
                                {each.title()}
                            </li>
                        }).collect_view()}
                    </ol>

                    {move || match step.get() {
                        ImportStep::Source => view! {
                            <div class="source-grid">
                                {ImportSource::ALL.into_iter().map(|each| view! {
                                    <button
                                        class=move || if source.get() == each { "source-btn active" } else { "source-btn" }
                                        on:click=move |_| source.set(each)
                                    >
                                        {each.label()}
                                    </button>
                                }).collect_view()}
                            </div>
                        }.into_any(),
                        ImportStep::File => view! {
                            <div class="file-step">
                                <input type="file" on:change=on_file />
                                <Show when=move || !file.get().name.is_empty()>
                                    <p class="file-info">
                                        {move || format!("{} ({})", file.get().name, format_size(file.get().size_bytes))}
                                    </p>
                                </Show>
                            </div>
                        }.into_any(),
                        ImportStep::Mapping => view! {
                            <div class="mapping-grid">
                                {FeedbackField::ALL.into_iter().map(|field| {
                                    let required = FeedbackField::REQUIRED.contains(&field);
                                    view! {
                                        <label class="field">
                                            <span class="field-label">
                                                {field.as_str()} {if required { " *" } else { "" }}
                                            </span>
                                            <input
                                                type="text"
                                                placeholder="Source column"
                                                prop:value=move || mapping.with(|m| m.column_for(field).unwrap_or_default().to_string())
                                                on:input=move |ev| {
                                                    let column = event_target_value(&ev);
                                                    mapping.update(|m| {
                                                        if column.trim().is_empty() {
                                                            m.unmap(field);
                                                        } else {
                                                            m.map(column.trim(), field);
                                                        }
                                                    });
                                                }
                                            />
                                        </label>
                                    }
                                }).collect_view()}
                            </div>
                        }.into_any(),
                        ImportStep::Confirm => view! {
                            <dl class="confirm-summary">
                                <dt>"Source"</dt><dd>{move || source.get().label()}</dd>
                                <dt>"File"</dt><dd>{move || file.get().name}</dd>
                                <dt>"Mapped fields"</dt><dd>{move || mapping.with(FieldMapping::len)}</dd>
                            </dl>
                        }.into_any(),
                    }}

                    <div class="modal-actions">
                        <button class="btn btn-ghost" on:click=move |_| close()>"Cancel"</button>
                        <Show when=move || step.get() != ImportStep::Source>
                            <button class="btn btn-ghost" on:click=move |_| step.update(|s| *s = s.back())>"Back"</button>
                        </Show>
                        <Show
                            when=move || step.get() == ImportStep::Confirm
                            fallback=move || view! {
                                <button class="btn btn-primary" on:click=move |_| step.update(|s| *s = s.next())>"Next"</button>
                            }
                        >
                            <button class="btn btn-primary" disabled=move || busy.get() on:click=run_import>
                                {move || if busy.get() { "Importing..." } else { "Import" }}
                            </button>
                        </Show>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn ExportModal(open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();

    let format = RwSignal::new(ExportFormat::Csv);
    let status = RwSignal::new(StatusFilter::All);
    let include_content = RwSignal::new(true);
    let busy = RwSignal::new(false);

    let status_options: Vec<_> = StatusFilter::options()
        .into_iter()
        .map(|filter| (filter.as_str(), filter.label()))
        .collect();

    let run_export = move |_| {
        let options = ExportOptions {
            status: status.get_untracked(),
            include_content: include_content.get_untracked(),
        };
        let request = ctx.with(|app| app.export_request(format.get_untracked(), options));
        let transfer = ctx.transfer();
        busy.set(true);
        spawn_local(async move {
            let outcome = transfer.request_export(request).await;
            if ctx.try_with(|app| app.report_export(&outcome)).is_none() {
                log::debug!("Export finished after the app was disposed");
                return;
            }
            busy.set(false);
            if outcome.is_ok() {
                open.set(false);
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal transfer-modal">
                    <h2>"Export Feedback"</h2>
                    <div class="source-grid">
                        {ExportFormat::ALL.into_iter().map(|each| view! {
                            <button
                                class=move || if format.get() == each { "source-btn active" } else { "source-btn" }
                                on:click=move |_| format.set(each)
                            >
                                {each.label()}
                            </button>
                        }).collect_view()}
                    </div>
                    <OptionSelect
                        label="Status"
                        options=status_options.clone()
                        value=Signal::derive(move || status.get().as_str().to_string())
                        on_change={move |value: String| match value.parse::<StatusFilter>() {
                            Ok(filter) => status.set(filter),
                            Err(e) => log::warn!("Ignoring export filter: {}", e),
                        }}
                    />
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || include_content.get()
                            on:change=move |ev| include_content.set(event_target_checked(&ev))
                        />
                        "Include feedback text"
                    </label>
                    <div class="modal-actions">
                        <button class="btn btn-ghost" on:click=move |_| open.set(false)>"Cancel"</button>
                        <button class="btn btn-primary" disabled=move || busy.get() on:click=run_export>
                            {move || if busy.get() { "Exporting..." } else { "Export" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wizard_walks_forward_and_back() {
        let mut step = ImportStep::Source;
        for _ in 0..5 {
            step = step.next();
        }
        assert_eq!(step, ImportStep::Confirm);
        assert_eq!(step.back().back(), ImportStep::File);
        assert_eq!(ImportStep::Source.back(), ImportStep::Source);
        assert_eq!(ImportStep::Mapping.index(), 2);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
