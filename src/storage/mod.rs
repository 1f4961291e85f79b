pub mod json;
pub mod memory;

use crate::prelude::{AppError, ContactRecord};
use std::fs;
use std::path::Path;

pub use json::JsonStorage;
pub use memory::MemStorage;

/// Backend holding the ordered sequence of contact records.
///
/// `load` must fail when the backing data is missing or unreadable; callers
/// decide whether that means "empty".
pub trait ContactStore: Send + Sync {
    fn load(&self) -> Result<Vec<ContactRecord>, AppError>;

    fn save(&self, contacts: &[ContactRecord]) -> Result<(), AppError>;

    /// Prepare the backend at startup. Must not touch existing data.
    fn initialize(&self) -> Result<(), AppError> {
        Ok(())
    }

    fn medium(&self) -> &str;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
