pub mod error;
pub mod extract;
pub mod handlers;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::domain::manager::ContactManager;

pub struct AppState {
    pub manager: Arc<ContactManager>,
    pub index_file: PathBuf,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(manager: ContactManager, index_file: impl Into<PathBuf>) -> SharedState {
        Arc::new(Self {
            manager: Arc::new(manager),
            index_file: index_file.into(),
        })
    }
}

/// Routes of the contact form backend. Unknown paths and unsupported methods
/// on known paths both answer with the JSON 404 body.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::landing_page).fallback(handlers::not_found),
        )
        .route(
            "/api/contact",
            post(handlers::submit_contact).fallback(handlers::not_found),
        )
        .route(
            "/api/contacts",
            get(handlers::list_contacts).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
