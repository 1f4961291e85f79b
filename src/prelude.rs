pub use crate::api::{AppState, SharedState, create_router};
pub use crate::config::{AppConfig, Cli};
pub use crate::domain::{
    contact::{self, ContactRecord, ContactSubmission, ValidationReq},
    ids::{IdGenerator, SequentialIds, TimestampIds},
    manager::ContactManager,
};
pub use crate::errors::AppError;
pub use crate::storage::{ContactStore, JsonStorage, MemStorage};
