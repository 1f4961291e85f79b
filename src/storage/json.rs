use super::*;

use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::PathBuf;

pub const STORAGE_PATH: &str = "contacts.json";

pub struct JsonStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.into(),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| STORAGE_PATH.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Default for JsonStorage {
    fn default() -> Self {
        Self::new(STORAGE_PATH)
    }
}

impl ContactStore for JsonStorage {
    fn load(&self) -> Result<Vec<ContactRecord>, AppError> {
        let mut file = OpenOptions::new().read(true).open(&self.path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // An empty file is as broken as malformed JSON here
        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, contacts: &[ContactRecord]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let json_contacts = serde_json::to_string_pretty(contacts)?;

        // Write next to the store, then swap it in so readers never see half a file
        let temp = self.temp_path();
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp)?;
        file.write_all(json_contacts.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&temp, &self.path)?;
        Ok(())
    }

    fn initialize(&self) -> Result<(), AppError> {
        if fs::exists(&self.path)? {
            return Ok(());
        }
        self.save(&[])
    }

    fn medium(&self) -> &str {
        &self.medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record(id: i64, name: &str) -> ContactRecord {
        ContactRecord {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            subject: "No subject".to_string(),
            message: "hello".to_string(),
            timestamp: "2026-10-19T08:30:00.000Z".to_string(),
            ip: None,
        }
    }

    #[test]
    fn json_store_is_persistent() -> Result<(), AppError> {
        let dir = tempdir()?;
        let storage = JsonStorage::new(dir.path().join("contacts.json"));

        let contacts = vec![record(1, "Uche"), record(2, "Alex")];
        storage.save(&contacts)?;

        assert_eq!(storage.load()?, contacts);
        assert!(!storage.temp_path().exists());
        Ok(())
    }

    #[test]
    fn saves_pretty_printed_array() -> Result<(), AppError> {
        let dir = tempdir()?;
        let storage = JsonStorage::new(dir.path().join("contacts.json"));

        storage.save(&[record(1, "Uche")])?;
        let raw = fs::read_to_string(&storage.path)?;

        assert!(raw.starts_with("[\n  {\n    \"id\": 1,"));
        Ok(())
    }

    #[test]
    fn load_fails_on_missing_empty_or_corrupt_file() -> Result<(), AppError> {
        let dir = tempdir()?;
        let storage = JsonStorage::new(dir.path().join("contacts.json"));

        assert!(matches!(storage.load(), Err(AppError::Io(_))));

        fs::write(&storage.path, "")?;
        assert!(matches!(storage.load(), Err(AppError::Json(_))));

        fs::write(&storage.path, "{ not json")?;
        assert!(matches!(storage.load(), Err(AppError::Json(_))));

        fs::write(&storage.path, "{}")?;
        assert!(matches!(storage.load(), Err(AppError::Json(_))));
        Ok(())
    }

    #[test]
    fn initialize_creates_empty_array_once() -> Result<(), AppError> {
        let dir = tempdir()?;
        let storage = JsonStorage::new(dir.path().join("nested").join("contacts.json"));

        storage.initialize()?;
        assert_eq!(fs::read_to_string(&storage.path)?, "[]");
        assert!(storage.load()?.is_empty());

        storage.save(&[record(1, "Uche")])?;
        storage.initialize()?;
        assert_eq!(storage.load()?.len(), 1);
        Ok(())
    }
}
