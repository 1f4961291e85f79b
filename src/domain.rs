pub mod contact;
pub mod ids;
pub mod manager;

use crate::errors::AppError;
use crate::storage::ContactStore;
use tracing::{debug, info, warn};
