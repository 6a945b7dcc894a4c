//! Infrastructure layer - Persistence and configuration

pub mod config;
pub mod entry_store;
pub mod repository;
pub mod store;

pub use config::Config;
pub use entry_store::{EntryStore, MOOD_ENTRIES_KEY};
pub use repository::{FileSystemRepository, JournalRepository};
pub use store::{FileStore, KeyValueStore, MemoryStore};
