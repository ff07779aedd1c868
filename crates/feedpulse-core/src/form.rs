//! Form / Validation
//!
//! Holds the draft behind the add and edit dialogs, validates it, and
//! commits it to the repository. A failed submit leaves the draft and the
//! open dialog exactly as they were.

use chrono::{DateTime, Utc};

use crate::domain::{DraftField, FeedbackDraft, FeedbackItem, FeedbackPatch};
use crate::error::Result;
use crate::notify::{messages, Notification, Notifier};
use crate::repository::{FeedbackRepository, KeyValueStore};

/// Which dialog, if any, the draft belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Closed,
    Creating,
    Editing(u32),
}

#[derive(Debug, Clone, Default)]
pub struct FeedbackForm {
    draft: FeedbackDraft,
    mode: FormMode,
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &FeedbackDraft {
        &self.draft
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    pub fn update(&mut self, field: DraftField) {
        self.draft.apply(field);
    }

    /// Open the add dialog; whatever was typed before is kept
    pub fn open_create(&mut self) {
        self.mode = FormMode::Creating;
    }

    /// Open the edit dialog pre-filled from `item`
    pub fn begin_edit(&mut self, item: &FeedbackItem) {
        self.draft = FeedbackDraft::from_item(item);
        self.mode = FormMode::Editing(item.id);
    }

    pub fn cancel(&mut self) {
        self.mode = FormMode::Closed;
    }

    /// Validate and create. On success the draft goes back to its defaults
    /// and the dialog closes.
    pub fn submit_create<S, N>(
        &mut self,
        repo: &mut FeedbackRepository<S>,
        created_at: DateTime<Utc>,
        notifier: &N,
    ) -> Result<FeedbackItem>
    where
        S: KeyValueStore,
        N: Notifier + ?Sized,
    {
        if let Err(e) = self.draft.validate() {
            notifier.notify(Notification::error(messages::REQUIRED_FIELDS));
            return Err(e.into());
        }

        let item = match repo.create(&self.draft, created_at) {
            Ok(item) => item,
            Err(e) => {
                notifier.notify(Notification::error(e.to_string()));
                return Err(e);
            }
        };
        self.draft.reset();
        self.mode = FormMode::Closed;
        notifier.notify(Notification::success(messages::CREATED));
        Ok(item)
    }

    /// Validate and merge the draft into item `id`
    pub fn submit_edit<S, N>(
        &mut self,
        id: u32,
        repo: &mut FeedbackRepository<S>,
        notifier: &N,
    ) -> Result<FeedbackItem>
    where
        S: KeyValueStore,
        N: Notifier + ?Sized,
    {
        if let Err(e) = self.draft.validate() {
            notifier.notify(Notification::error(messages::REQUIRED_FIELDS));
            return Err(e.into());
        }

        match repo.edit(id, &FeedbackPatch::from(&self.draft)) {
            Ok(item) => {
                self.mode = FormMode::Closed;
                notifier.notify(Notification::success(messages::UPDATED));
                Ok(item)
            }
            Err(e) => {
                log::warn!("Edit of feedback #{} failed: {}", id, e);
                notifier.notify(Notification::error(e.to_string()));
                Err(e)
            }
        }
    }

    /// Submit whichever dialog is open; with none open the draft is created
    pub fn submit<S, N>(
        &mut self,
        repo: &mut FeedbackRepository<S>,
        now: DateTime<Utc>,
        notifier: &N,
    ) -> Result<FeedbackItem>
    where
        S: KeyValueStore,
        N: Notifier + ?Sized,
    {
        match self.mode {
            FormMode::Creating | FormMode::Closed => self.submit_create(repo, now, notifier),
            FormMode::Editing(id) => self.submit_edit(id, repo, notifier),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FeedbackStatus, Priority};
    use crate::error::FeedPulseError;
    use crate::notify::{NotificationLevel, RecordingNotifier};
    use crate::repository::{MemoryStore, PersistentStore};

    fn seeded() -> FeedbackRepository<MemoryStore> {
        FeedbackRepository::open(PersistentStore::with_default_keys(MemoryStore::new()), Utc::now())
    }

    #[test]
    fn test_create_success_resets_and_closes() {
        let mut repo = seeded();
        let notifier = RecordingNotifier::default();
        let mut form = FeedbackForm::new();
        form.open_create();
        form.update(DraftField::ClientName("Foo".into()));
        form.update(DraftField::Content("Bar".into()));
        form.update(DraftField::Priority(Priority::High));

        let item = form.submit_create(&mut repo, Utc::now(), &notifier).unwrap();

        assert_eq!(item.id, 4);
        assert_eq!(item.priority, Priority::High);
        assert_eq!(form.draft(), &FeedbackDraft::default());
        assert_eq!(form.mode(), FormMode::Closed);
        assert_eq!(notifier.take(), vec![Notification::success(messages::CREATED)]);
    }

    #[test]
    fn test_create_failure_keeps_draft_open() {
        let mut repo = seeded();
        let notifier = RecordingNotifier::default();
        let mut form = FeedbackForm::new();
        form.open_create();
        form.update(DraftField::ClientName("Foo".into()));
        form.update(DraftField::Content("   ".into()));

        let err = form.submit_create(&mut repo, Utc::now(), &notifier).unwrap_err();

        assert!(err.is_validation());
        assert_eq!(repo.len(), 3);
        assert_eq!(form.draft().client_name, "Foo");
        assert_eq!(form.mode(), FormMode::Creating);
        let seen = notifier.take();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].level, NotificationLevel::Error);
        assert_eq!(seen[0].message, messages::REQUIRED_FIELDS);
    }

    #[test]
    fn test_edit_prefills_and_commits() {
        let mut repo = seeded();
        let notifier = RecordingNotifier::default();
        let mut form = FeedbackForm::new();
        let target = repo.find(2).cloned().unwrap();

        form.begin_edit(&target);
        assert_eq!(form.mode(), FormMode::Editing(2));
        assert_eq!(form.draft().client_name, "TechStart Inc");

        form.update(DraftField::Status(FeedbackStatus::Resolved));
        let item = form.submit(&mut repo, Utc::now(), &notifier).unwrap();

        assert_eq!(item.status, FeedbackStatus::Resolved);
        assert_eq!(item.content, target.content);
        assert!(!form.is_open());
        assert_eq!(notifier.take(), vec![Notification::success(messages::UPDATED)]);
    }

    #[test]
    fn test_edit_failure_keeps_dialog() {
        let mut repo = seeded();
        let notifier = RecordingNotifier::default();
        let mut form = FeedbackForm::new();
        form.begin_edit(&repo.find(1).cloned().unwrap());
        form.update(DraftField::ClientName(String::new()));

        assert!(form.submit(&mut repo, Utc::now(), &notifier).is_err());
        assert_eq!(form.mode(), FormMode::Editing(1));
        assert_eq!(repo.find(1).unwrap().client_name, "Acme Corp");
    }

    #[test]
    fn test_edit_of_missing_item() {
        let mut repo = seeded();
        let notifier = RecordingNotifier::default();
        let mut form = FeedbackForm::new();
        form.update(DraftField::ClientName("Foo".into()));
        form.update(DraftField::Content("Bar".into()));

        let err = form.submit_edit(77, &mut repo, &notifier).unwrap_err();
        assert!(matches!(err, FeedPulseError::NotFound(77)));
        assert_eq!(notifier.take()[0].level, NotificationLevel::Error);
    }
}
