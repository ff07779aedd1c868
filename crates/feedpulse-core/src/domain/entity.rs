//! Domain Layer - Core Entity Trait
//!
//! Basic contract for records kept in an ordered collection.

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Next id for a collection: one past the largest id, or 1 when empty.
/// `None` once the largest id is `u32::MAX`.
pub fn next_id<T: Entity<Id = u32>>(items: &[T]) -> Option<u32> {
    match items.iter().map(Entity::id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

/// Position of the entity with `id`, if present
pub fn position_of<T: Entity>(items: &[T], id: T::Id) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}
