use super::*;

use std::sync::Mutex;

/// Keeps records in memory. A store built with [`MemStorage::missing`] behaves
/// like an absent file until something is saved.
#[derive(Debug, Default)]
pub struct MemStorage {
    data: Mutex<Option<Vec<ContactRecord>>>,
    saves: Mutex<usize>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn missing() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<ContactRecord>) -> Self {
        Self {
            data: Mutex::new(Some(records)),
            saves: Mutex::new(0),
        }
    }

    /// Number of completed `save` calls.
    pub fn save_count(&self) -> Result<usize, AppError> {
        Ok(*self.saves.lock()?)
    }
}

impl ContactStore for MemStorage {
    fn load(&self) -> Result<Vec<ContactRecord>, AppError> {
        self.data
            .lock()?
            .clone()
            .ok_or_else(|| AppError::NotFound("Contacts store".to_string()))
    }

    fn save(&self, contacts: &[ContactRecord]) -> Result<(), AppError> {
        *self.data.lock()? = Some(contacts.to_vec());
        *self.saves.lock()? += 1;
        Ok(())
    }

    fn medium(&self) -> &str {
        "mem"
    }
}
