use super::*;

use std::sync::Mutex;

use super::contact::{ContactRecord, ContactSubmission};
use super::ids::IdGenerator;

/// The contact store service. Owns the store and is its only writer: every
/// load/save cycle runs under `lock`, so concurrent submissions cannot drop
/// each other's records.
pub struct ContactManager {
    storage: Box<dyn ContactStore>,
    ids: Box<dyn IdGenerator>,
    lock: Mutex<()>,
}

impl ContactManager {
    pub fn new(storage: Box<dyn ContactStore>, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            storage,
            ids,
            lock: Mutex::new(()),
        }
    }

    pub fn medium(&self) -> &str {
        self.storage.medium()
    }

    /// Validate `submission`, append it to the store and return the new record.
    ///
    /// A missing or unreadable store counts as empty here. A store that parses
    /// but holds entries of the wrong shape is returned as an error and left
    /// untouched. Write failures are returned as-is.
    pub fn submit(
        &self,
        submission: ContactSubmission,
        ip: Option<String>,
    ) -> Result<ContactRecord, AppError> {
        let valid = submission.validate().inspect_err(|err| {
            debug!(error = %err, "rejected contact submission");
        })?;

        let _guard = self.lock.lock()?;

        let mut contacts = match self.storage.load() {
            Ok(contacts) => contacts,
            Err(err) if err.is_data_mismatch() => return Err(err),
            Err(err) => {
                warn!(
                    medium = self.storage.medium(),
                    error = %err,
                    "contacts store unreadable, starting a new one"
                );
                Vec::new()
            }
        };

        let record = ContactRecord::new(self.ids.next_id(), valid, ip);
        contacts.push(record.clone());
        self.storage.save(&contacts)?;

        info!(
            id = record.id,
            name = %record.name,
            email = %record.email,
            subject = %record.subject,
            ip = record.ip.as_deref().unwrap_or(""),
            total = contacts.len(),
            "new contact received"
        );
        Ok(record)
    }

    /// Every stored record, in insertion order. Unlike `submit`, a missing or
    /// corrupt store is an error.
    pub fn list(&self) -> Result<Vec<ContactRecord>, AppError> {
        let _guard = self.lock.lock()?;
        self.storage.load()
    }
}
