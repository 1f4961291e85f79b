use axum::{
    Form, Json, async_trait,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::header::CONTENT_TYPE,
};

use super::error::ApiError;
use crate::domain::contact::{ContactSubmission, ValidationReq};

/// Contact form body, accepted as JSON or as a urlencoded form post.
///
/// Any other content type yields an empty submission, which validation then
/// rejects. JSON that parses but has the wrong shape is rejected the same
/// way. A body that claims a supported type but does not parse is an
/// unhandled error.
#[derive(Debug)]
pub struct ContactForm(pub ContactSubmission);

#[async_trait]
impl<S> FromRequest<S> for ContactForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(submission) = Json::<ContactSubmission>::from_request(req, state)
                .await
                .map_err(|rejection| match rejection {
                    JsonRejection::JsonDataError(_) => {
                        ApiError::Validation(ValidationReq::required_fields())
                    }
                    other => ApiError::Unhandled(other.body_text()),
                })?;
            Ok(ContactForm(submission))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(submission) = Form::<ContactSubmission>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::Unhandled(rejection.body_text()))?;
            Ok(ContactForm(submission))
        } else {
            Ok(ContactForm(ContactSubmission::default()))
        }
    }
}
