//! Clear all entries use case

use crate::error::Result;
use crate::infrastructure::FileSystemRepository;

/// Remove every recorded entry. Idempotent; configuration is untouched.
pub fn clear_all(repository: &FileSystemRepository) -> Result<()> {
    repository.entry_store().clear_all()
}
