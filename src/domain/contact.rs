use std::sync::LazyLock;

use super::*;
pub use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SUBJECT: &str = "No subject";

// Shape check only: something, '@', something, '.', something. No whitespace anywhere.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape pattern is valid")
});

/// Payload posted by the contact form. Every field is optional on the wire.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One persisted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub id: i64,
    pub name: String,
    pub email: String,

    #[serde(default = "default_subject")]
    pub subject: String,

    pub message: String,
    pub timestamp: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

/// Caller-facing validation messages.
pub struct ValidationReq;

impl ValidationReq {
    pub fn required_fields() -> String {
        "Name, email, and message are required".to_string()
    }

    pub fn email_req() -> String {
        "Please provide a valid email address".to_string()
    }
}

/// Fields of a submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(name: &str, email: &str, subject: Option<&str>, message: &str) -> Self {
        ContactSubmission {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            subject: subject.map(str::to_string),
            message: Some(message.to_string()),
        }
    }

    pub fn validate(self) -> Result<ValidSubmission, AppError> {
        let (Some(name), Some(email), Some(message)) = (
            non_empty(self.name),
            non_empty(self.email),
            non_empty(self.message),
        ) else {
            return Err(AppError::Validation(ValidationReq::required_fields()));
        };

        if !validate_email(&email) {
            return Err(AppError::Validation(ValidationReq::email_req()));
        }

        Ok(ValidSubmission {
            name,
            email,
            subject: non_empty(self.subject).unwrap_or_else(default_subject),
            message,
        })
    }
}

impl ContactRecord {
    pub fn new(id: i64, submission: ValidSubmission, ip: Option<String>) -> Self {
        ContactRecord {
            id,
            name: submission.name,
            email: submission.email,
            subject: submission.subject,
            message: submission.message,
            timestamp: iso_timestamp(Utc::now()),
            ip,
        }
    }
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2026-10-19T08:30:00.125Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}
