//! Application Object
//!
//! Owns the feedback repository, the open form, the inbox filter, the theme
//! flag and the notifier. Built once with `init`, flushed with `teardown`.

use chrono::{DateTime, Utc};

use crate::config::FeedPulseConfig;
use crate::domain::{DraftField, FeedbackDraft, FeedbackItem, FeedbackStats, FeedbackStatus, Theme};
use crate::error::{FeedPulseError, Result};
use crate::filter::{filter_feedbacks, FeedbackQuery, StatusFilter};
use crate::form::FeedbackForm;
use crate::lifecycle::{offered_actions, StatusAction};
use crate::notify::{messages, Notification, Notifier};
use crate::repository::{FeedbackRepository, KeyValueStore, PersistentStore};
use crate::transfer::{ExportFormat, ExportOptions, ExportRequest, ExportResult, ImportResult, TransferError};

pub struct FeedPulse<S, N> {
    config: FeedPulseConfig,
    repo: FeedbackRepository<S>,
    form: FeedbackForm,
    query: FeedbackQuery,
    theme: Option<Theme>,
    notifier: N,
}

impl<S: KeyValueStore, N: Notifier> FeedPulse<S, N> {
    /// Load state from `medium`
    pub fn init(medium: S, notifier: N, config: FeedPulseConfig) -> Self {
        Self::init_at(medium, notifier, config, Utc::now())
    }

    pub fn init_at(medium: S, notifier: N, config: FeedPulseConfig, now: DateTime<Utc>) -> Self {
        let store = PersistentStore::new(medium, &config);
        let theme = store.load_theme();
        let repo = FeedbackRepository::open(store, now);
        log::info!(
            "FeedPulse ready: {} items, theme {:?}, policy {:?}",
            repo.len(),
            theme,
            config.transition_policy
        );

        Self {
            config,
            repo,
            form: FeedbackForm::new(),
            query: FeedbackQuery::default(),
            theme,
            notifier,
        }
    }

    /// Write the collection and theme flag to the medium
    pub fn flush(&mut self) -> Result<()> {
        self.repo.flush()?;
        if let Some(theme) = self.theme {
            self.repo.store_mut().save_theme(theme)?;
        }
        Ok(())
    }

    /// Flush everything and hand the medium back
    pub fn teardown(mut self) -> S {
        if let Err(e) = self.flush() {
            log::error!("Final flush failed: {}", e);
        }
        self.repo.into_store().into_medium()
    }

    pub fn config(&self) -> &FeedPulseConfig {
        &self.config
    }

    pub fn items(&self) -> &[FeedbackItem] {
        self.repo.list()
    }

    pub fn find(&self, id: u32) -> Option<&FeedbackItem> {
        self.repo.find(id)
    }

    pub fn stats(&self) -> FeedbackStats {
        self.repo.stats()
    }

    // ========================
    // Inbox filter
    // ========================

    pub fn query(&self) -> &FeedbackQuery {
        &self.query
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.query.status = status;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.query.search = term.into();
    }

    pub fn reset_filters(&mut self) {
        self.query.reset();
    }

    /// Items shown under the current filter
    pub fn visible(&self) -> Vec<FeedbackItem> {
        filter_feedbacks(self.repo.list(), &self.query)
    }

    // ========================
    // Form
    // ========================

    pub fn form(&self) -> &FeedbackForm {
        &self.form
    }

    pub fn open_create_form(&mut self) {
        self.form.open_create();
    }

    pub fn update_draft(&mut self, field: DraftField) {
        self.form.update(field);
    }

    pub fn cancel_form(&mut self) {
        self.form.cancel();
    }

    pub fn begin_edit(&mut self, id: u32) -> Result<()> {
        match self.repo.find(id) {
            Some(item) => {
                self.form.begin_edit(item);
                Ok(())
            }
            None => {
                log::warn!("Cannot edit feedback #{}: not found", id);
                Err(FeedPulseError::NotFound(id))
            }
        }
    }

    /// Submit the open dialog
    pub fn submit_form(&mut self) -> Result<FeedbackItem> {
        self.form.submit(&mut self.repo, Utc::now(), &self.notifier)
    }

    /// Put `draft` in the form and create it
    pub fn submit_create(&mut self, draft: FeedbackDraft) -> Result<FeedbackItem> {
        self.form.open_create();
        for field in draft_fields(draft) {
            self.form.update(field);
        }
        self.form.submit_create(&mut self.repo, Utc::now(), &self.notifier)
    }

    /// Put `draft` in the form and merge it into item `id`
    pub fn submit_edit(&mut self, id: u32, draft: FeedbackDraft) -> Result<FeedbackItem> {
        self.begin_edit(id)?;
        for field in draft_fields(draft) {
            self.form.update(field);
        }
        self.form.submit_edit(id, &mut self.repo, &self.notifier)
    }

    // ========================
    // Status lifecycle
    // ========================

    /// Set the status of item `id`, subject to the configured policy
    pub fn update_status(&mut self, id: u32, status: FeedbackStatus) -> Result<FeedbackItem> {
        let current = match self.repo.find(id) {
            Some(item) => item.status,
            None => {
                log::warn!("Status update for missing feedback #{}", id);
                let err = FeedPulseError::NotFound(id);
                self.notifier.notify(Notification::error(err.to_string()));
                return Err(err);
            }
        };

        if !self.config.transition_policy.permits(current, status) {
            let err = FeedPulseError::IllegalTransition {
                from: current,
                to: status,
            };
            log::warn!("Rejected status change of #{}: {}", id, err);
            self.notifier.notify(Notification::error(err.to_string()));
            return Err(err);
        }

        let item = self.repo.update_status(id, status)?;
        self.notifier.notify(Notification::info(messages::status_updated(status)));
        Ok(item)
    }

    pub fn apply_action(&mut self, id: u32, action: StatusAction) -> Result<FeedbackItem> {
        self.update_status(id, action.target())
    }

    /// Transition buttons to show for item `id`; none for unknown ids
    pub fn offered_actions(&self, id: u32) -> Vec<StatusAction> {
        self.repo
            .find(id)
            .map(|item| offered_actions(item.status))
            .unwrap_or_default()
    }

    /// Swap the whole collection, e.g. after a real import
    pub fn replace_all(&mut self, items: Vec<FeedbackItem>) {
        self.repo.replace_all(items);
    }

    // ========================
    // Theme
    // ========================

    /// Stored preference, if the user ever picked one
    pub fn theme(&self) -> Option<Theme> {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
        if let Err(e) = self.repo.store_mut().save_theme(theme) {
            log::error!("Could not save theme: {}", e);
        }
    }

    /// Flip the theme; `fallback` stands in when nothing is stored yet
    pub fn toggle_theme(&mut self, fallback: Theme) -> Theme {
        let next = self.theme.unwrap_or(fallback).toggled();
        self.set_theme(next);
        next
    }

    // ========================
    // Import / export
    // ========================

    pub fn export_request(&self, format: ExportFormat, options: ExportOptions) -> ExportRequest {
        ExportRequest {
            format,
            options,
            items: self.repo.list().to_vec(),
            requested_at: Utc::now(),
        }
    }

    pub fn report_import(&self, outcome: &std::result::Result<ImportResult, TransferError>) {
        match outcome {
            Ok(result) => {
                log::info!("Import of {} finished", result.file_name);
                self.notifier.notify(Notification::success(messages::IMPORTED));
            }
            Err(e) => {
                log::warn!("Import failed: {}", e);
                self.notifier.notify(Notification::error(format!("Import failed: {}", e)));
            }
        }
    }

    pub fn report_export(&self, outcome: &std::result::Result<ExportResult, TransferError>) {
        match outcome {
            Ok(result) => {
                log::info!("Export wrote {} ({} records)", result.file_name, result.record_count);
                self.notifier.notify(Notification::success(messages::EXPORTED));
            }
            Err(e) => {
                log::warn!("Export failed: {}", e);
                self.notifier.notify(Notification::error(format!("Export failed: {}", e)));
            }
        }
    }
}

fn draft_fields(draft: FeedbackDraft) -> [DraftField; 7] {
    [
        DraftField::ClientName(draft.client_name),
        DraftField::Content(draft.content),
        DraftField::Source(draft.source),
        DraftField::Category(draft.category),
        DraftField::Sentiment(draft.sentiment),
        DraftField::Priority(draft.priority),
        DraftField::Status(draft.status),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::TransitionPolicy;
    use crate::notify::{NotificationLevel, RecordingNotifier};
    use crate::repository::MemoryStore;
    use crate::transfer::{
        FieldMapping, FileHandle, ImportRequest, ImportSource, NoDelay, SimulatedTransfer,
        TransferService,
    };
    use std::time::Duration;

    type App<'a> = FeedPulse<MemoryStore, &'a RecordingNotifier>;

    fn app(notifier: &RecordingNotifier) -> App<'_> {
        FeedPulse::init(MemoryStore::new(), notifier, FeedPulseConfig::default())
    }

    fn draft(name: &str, content: &str) -> FeedbackDraft {
        FeedbackDraft {
            client_name: name.to_string(),
            content: content.to_string(),
            ..FeedbackDraft::default()
        }
    }

    #[test]
    fn test_seeded_scenario_create() {
        let notifier = RecordingNotifier::default();
        let mut app = app(&notifier);

        let item = app.submit_create(draft("Foo", "Bar")).unwrap();

        assert_eq!(item.id, 4);
        assert_eq!(item.status, FeedbackStatus::New);
        assert_eq!(app.items().len(), 4);
        assert_eq!(app.items()[0].id, 4);
        assert_eq!(app.stats().total, 4);
    }

    #[test]
    fn test_resolving_hides_all_actions() {
        let notifier = RecordingNotifier::default();
        let mut app = app(&notifier);
        assert_eq!(app.offered_actions(2), vec![StatusAction::MarkResolved]);

        app.update_status(2, FeedbackStatus::Resolved).unwrap();

        assert_eq!(app.find(2).unwrap().status, FeedbackStatus::Resolved);
        assert!(app.offered_actions(2).is_empty());
        assert_eq!(
            notifier.take(),
            vec![Notification::info("Feedback status updated to resolved")]
        );
    }

    #[test]
    fn test_permissive_policy_allows_reopening() {
        let notifier = RecordingNotifier::default();
        let mut app = app(&notifier);
        app.update_status(2, FeedbackStatus::Resolved).unwrap();
        assert!(app.update_status(2, FeedbackStatus::New).is_ok());
    }

    #[test]
    fn test_forward_only_policy_rejects_reopening() {
        let notifier = RecordingNotifier::default();
        let config = FeedPulseConfig {
            transition_policy: TransitionPolicy::ForwardOnly,
            ..FeedPulseConfig::default()
        };
        let mut app = FeedPulse::init(MemoryStore::new(), &notifier, config);

        let err = app.update_status(2, FeedbackStatus::New).unwrap_err();
        assert!(matches!(
            err,
            FeedPulseError::IllegalTransition {
                from: FeedbackStatus::InProgress,
                to: FeedbackStatus::New
            }
        ));
        assert_eq!(app.find(2).unwrap().status, FeedbackStatus::InProgress);
        assert_eq!(notifier.take()[0].level, NotificationLevel::Error);
    }

    #[test]
    fn test_missing_id_is_reported_not_fatal() {
        let notifier = RecordingNotifier::default();
        let mut app = app(&notifier);
        assert!(matches!(
            app.update_status(42, FeedbackStatus::Resolved),
            Err(FeedPulseError::NotFound(42))
        ));
        assert!(app.offered_actions(42).is_empty());
        assert!(matches!(app.begin_edit(42), Err(FeedPulseError::NotFound(42))));
        assert_eq!(app.items().len(), 3);
    }

    #[test]
    fn test_filter_state() {
        let notifier = RecordingNotifier::default();
        let mut app = app(&notifier);
        app.set_status_filter(StatusFilter::Only(FeedbackStatus::New));
        app.set_search("global");
        let visible: Vec<_> = app.visible().into_iter().map(|item| item.id).collect();
        assert_eq!(visible, vec![3]);

        app.reset_filters();
        assert_eq!(app.visible().len(), 3);
    }

    #[test]
    fn test_edit_through_form() {
        let notifier = RecordingNotifier::default();
        let mut app = app(&notifier);
        app.begin_edit(1).unwrap();
        app.update_draft(DraftField::Content("Even better now".into()));
        let item = app.submit_form().unwrap();

        assert_eq!(item.content, "Even better now");
        assert_eq!(item.client_name, "Acme Corp");
        assert!(!app.form().is_open());
    }

    #[test]
    fn test_submit_edit_validates() {
        let notifier = RecordingNotifier::default();
        let mut app = app(&notifier);
        let err = app.submit_edit(3, draft("", "Still here")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(app.find(3).unwrap().client_name, "Global Services LLC");
    }

    #[test]
    fn test_teardown_and_reinit_keeps_state() {
        let notifier = RecordingNotifier::default();
        let mut app = app(&notifier);
        app.submit_create(draft("Foo", "Bar")).unwrap();
        app.set_theme(Theme::Dark);
        let medium = app.teardown();

        let again = FeedPulse::init(medium, &notifier, FeedPulseConfig::default());
        assert_eq!(again.items().len(), 4);
        assert_eq!(again.theme(), Some(Theme::Dark));
    }

    #[test]
    fn test_flush_writes_theme_without_teardown() {
        let notifier = RecordingNotifier::default();
        let mut app = app(&notifier);
        app.set_theme(Theme::Light);
        app.flush().unwrap();
        assert_eq!(app.repo.store().medium().get("theme").unwrap().as_deref(), Some("light"));
        assert!(app.repo.store().medium().get("feedbacks").unwrap().is_some());
    }

    #[test]
    fn test_toggle_theme_uses_fallback_first() {
        let notifier = RecordingNotifier::default();
        let mut app = app(&notifier);
        assert_eq!(app.theme(), None);
        assert_eq!(app.toggle_theme(Theme::Dark), Theme::Light);
        assert_eq!(app.toggle_theme(Theme::Dark), Theme::Dark);
    }

    #[test]
    fn test_custom_slot_names() {
        let notifier = RecordingNotifier::default();
        let config = FeedPulseConfig {
            feedback_key: "fp.items".to_string(),
            ..FeedPulseConfig::default()
        };
        let mut app = FeedPulse::init(MemoryStore::new(), &notifier, config);
        app.submit_create(draft("Foo", "Bar")).unwrap();
        let medium = app.teardown();
        assert!(medium.get("fp.items").unwrap().is_some());
        assert!(medium.get("feedbacks").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_export_round() {
        let notifier = RecordingNotifier::default();
        let app = app(&notifier);
        let transfer = SimulatedTransfer::new(NoDelay, Duration::from_millis(1500));

        let request = app.export_request(ExportFormat::Json, ExportOptions::default());
        let outcome = transfer.request_export(request).await;
        app.report_export(&outcome);

        assert_eq!(outcome.unwrap().record_count, 3);
        assert_eq!(notifier.take(), vec![Notification::success(messages::EXPORTED)]);
    }

    #[tokio::test]
    async fn test_failed_import_notifies_error() {
        let notifier = RecordingNotifier::default();
        let app = app(&notifier);
        let transfer = SimulatedTransfer::new(NoDelay, Duration::ZERO);

        let outcome = transfer
            .request_import(ImportRequest {
                source: ImportSource::Email,
                file: FileHandle::default(),
                mapping: FieldMapping::identity(),
            })
            .await;
        app.report_import(&outcome);

        let seen = notifier.take();
        assert_eq!(seen[0].level, NotificationLevel::Error);
        assert_eq!(seen[0].message, "Import failed: no file selected");
    }
}
