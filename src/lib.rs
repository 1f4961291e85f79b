pub mod api;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod prelude;
pub mod storage;
