//! In-memory adapters backed by mutex-guarded maps.
//!
//! Data lives for the lifetime of the process. A poisoned lock is reported as
//! a connection failure so callers see `service_unavailable` rather than a
//! panic.

mod achievement_repository;
mod identity_directory;
mod task_repository;

pub use achievement_repository::InMemoryAchievementRepository;
pub use identity_directory::InMemoryIdentityDirectory;
pub use task_repository::InMemoryTaskRepository;
