use std::net::SocketAddr;

use axum::{
    Json,
    extract::{ConnectInfo, State},
    response::Html,
};
use serde::Serialize;

use super::SharedState;
use super::error::{ApiError, LIST_FAILED, SUBMIT_FAILED};
use super::extract::ContactForm;
use crate::domain::contact::ContactRecord;

pub const SUBMIT_SUCCEEDED: &str = "Message sent successfully! I'll get back to you soon.";

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: &'static str,
    pub data: ContactRecord,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub contacts: Vec<ContactRecord>,
}

pub async fn submit_contact(
    State(state): State<SharedState>,
    peer: Option<ConnectInfo<SocketAddr>>,
    ContactForm(submission): ContactForm,
) -> Result<Json<SubmitResponse>, ApiError> {
    let manager = state.manager.clone();
    let ip = peer.map(|ConnectInfo(addr)| addr.ip().to_string());

    let record = tokio::task::spawn_blocking(move || manager.submit(submission, ip))
        .await
        .map_err(|err| ApiError::Unhandled(err.to_string()))?
        .map_err(|err| ApiError::from_app(err, SUBMIT_FAILED))?;

    Ok(Json(SubmitResponse {
        success: true,
        message: SUBMIT_SUCCEEDED,
        data: record,
    }))
}

pub async fn list_contacts(
    State(state): State<SharedState>,
) -> Result<Json<ListResponse>, ApiError> {
    let manager = state.manager.clone();

    let contacts = tokio::task::spawn_blocking(move || manager.list())
        .await
        .map_err(|err| ApiError::Unhandled(err.to_string()))?
        .map_err(|err| ApiError::from_app(err, LIST_FAILED))?;

    Ok(Json(ListResponse {
        success: true,
        contacts,
    }))
}

pub async fn landing_page(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    let page = tokio::fs::read_to_string(&state.index_file)
        .await
        .map_err(|err| {
            ApiError::Unhandled(format!(
                "landing page {} unavailable: {err}",
                state.index_file.display()
            ))
        })?;
    Ok(Html(page))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
