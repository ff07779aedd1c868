//! Feedback Repository
//!
//! Ordered in-memory collection with create / update-status / edit.
//! Every successful mutation recomputes the stats and writes the whole
//! collection back through the persistent store.

use chrono::{DateTime, Utc};

use super::persistent::PersistentStore;
use super::traits::KeyValueStore;
use crate::domain::{
    next_id, position_of, validate_required, FeedbackDraft, FeedbackItem, FeedbackPatch,
    FeedbackStats, FeedbackStatus,
};
use crate::error::{FeedPulseError, Result};

pub struct FeedbackRepository<S> {
    items: Vec<FeedbackItem>,
    stats: FeedbackStats,
    store: PersistentStore<S>,
}

impl<S: KeyValueStore> FeedbackRepository<S> {
    /// Load the collection from `store` (seed set on first run or corrupt state)
    pub fn open(store: PersistentStore<S>, now: DateTime<Utc>) -> Self {
        let items = store.load_or_seed(now);
        Self::with_items(store, items)
    }

    /// Wrap an existing collection without writing it
    pub fn with_items(store: PersistentStore<S>, items: Vec<FeedbackItem>) -> Self {
        let stats = FeedbackStats::from_items(&items);
        Self { items, stats, store }
    }

    /// Current collection, newest creations first
    pub fn list(&self) -> &[FeedbackItem] {
        &self.items
    }

    pub fn find(&self, id: u32) -> Option<&FeedbackItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn stats(&self) -> FeedbackStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Create an item from `draft` and put it at the front of the list.
    ///
    /// The draft's status is kept (it defaults to `new`).
    pub fn create(&mut self, draft: &FeedbackDraft, created_at: DateTime<Utc>) -> Result<FeedbackItem> {
        draft.validate()?;

        let id = match next_id(&self.items) {
            Some(id) => id,
            None => {
                log::error!("Cannot create feedback: id space exhausted");
                return Err(FeedPulseError::IdsExhausted(u32::MAX));
            }
        };
        let item = FeedbackItem {
            id,
            client_name: draft.client_name.clone(),
            content: draft.content.clone(),
            source: draft.source,
            category: draft.category,
            sentiment: draft.sentiment,
            priority: draft.priority,
            status: draft.status,
            created_at,
        };
        self.items.insert(0, item.clone());
        self.commit();

        log::info!("Created feedback #{} from {}", item.id, item.client_name);
        Ok(item)
    }

    /// Set `status` on item `id`, leaving every other field alone.
    ///
    /// No transition rules are checked here.
    pub fn update_status(&mut self, id: u32, status: FeedbackStatus) -> Result<FeedbackItem> {
        let index = position_of(&self.items, id).ok_or(FeedPulseError::NotFound(id))?;
        let previous = self.items[index].status;
        self.items[index].status = status;
        let updated = self.items[index].clone();
        self.commit();

        log::info!("Feedback #{} status {} -> {}", id, previous, status);
        Ok(updated)
    }

    /// Merge `patch` into item `id`; the merged record must still validate
    pub fn edit(&mut self, id: u32, patch: &FeedbackPatch) -> Result<FeedbackItem> {
        let index = position_of(&self.items, id).ok_or(FeedPulseError::NotFound(id))?;
        let merged = patch.merged_into(&self.items[index]);
        validate_required(&merged.client_name, &merged.content)?;

        self.items[index] = merged.clone();
        self.commit();

        log::info!("Edited feedback #{}", id);
        Ok(merged)
    }

    /// Swap in an externally supplied collection
    pub fn replace_all(&mut self, items: Vec<FeedbackItem>) {
        log::info!("Replacing collection ({} -> {} items)", self.items.len(), items.len());
        self.items = items;
        self.commit();
    }

    /// Write the collection out now, surfacing any storage error
    pub fn flush(&mut self) -> Result<()> {
        self.store.save(&self.items)
    }

    pub fn store(&self) -> &PersistentStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PersistentStore<S> {
        &mut self.store
    }

    pub fn into_store(self) -> PersistentStore<S> {
        self.store
    }

    fn commit(&mut self) {
        self.stats = FeedbackStats::from_items(&self.items);
        if let Err(e) = self.store.save(&self.items) {
            log::error!("Failed to persist feedback collection: {}", e);
        }
    }
}
