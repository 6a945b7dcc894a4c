//! Domain layer - Business logic and domain models

pub mod date_key;
pub mod entry;
pub mod mood;
pub mod stats;
pub mod time_ref;

pub use entry::{EntryCollection, MoodEntry};
pub use mood::Mood;
pub use time_ref::TimeReference;
