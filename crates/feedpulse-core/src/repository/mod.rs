//! Repository Layer
//!
//! Storage abstraction, persistence, and the feedback collection.

mod traits;
mod memory;
mod persistent;
mod feedback_repo;


pub use traits::KeyValueStore;
pub use memory::MemoryStore;
pub use persistent::PersistentStore;
pub use feedback_repo::FeedbackRepository;
