//! Error types for the entries backend client.
//!
//! Every failure is surfaced as an [`ApiError`]; [`ApiError::kind`]
//! collapses the variants into the four categories callers branch on.

use serde_json::Value;
use thiserror::Error;

use crate::catalog::{EntryId, FieldError};

/// Errors that can occur when talking to the entries backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: connect, timeout or broken body stream.
    #[error("Network error: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response without a structured validation payload.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// 2xx response whose body could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The payload was rejected, locally or by the backend.
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        fields: Vec<FieldError>,
    },

    /// The targeted entry does not exist.
    #[error("Entry {id} not found")]
    NotFound { id: EntryId },
}

/// Coarse error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Server,
    Validation,
    NotFound,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network { .. } => ErrorKind::Network,
            ApiError::Server { .. } | ApiError::InvalidResponse(_) => ErrorKind::Server,
            ApiError::Validation { .. } => ErrorKind::Validation,
            ApiError::NotFound { .. } => ErrorKind::NotFound,
        }
    }

    /// Short text for notices and the form's error line.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network { .. } => "Backend unreachable".to_string(),
            ApiError::Server { status, .. } => format!("Backend error ({status})"),
            ApiError::InvalidResponse(_) => "Unexpected backend response".to_string(),
            ApiError::Validation { message, fields } => {
                if fields.is_empty() {
                    message.clone()
                } else {
                    fields
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("; ")
                }
            }
            ApiError::NotFound { id } => format!("Entry {id} no longer exists"),
        }
    }

    pub(crate) fn local_validation(fields: Vec<FieldError>) -> Self {
        let message = fields
            .first()
            .map(|field| field.message.clone())
            .unwrap_or_else(|| "Invalid input".to_string());
        ApiError::Validation { message, fields }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network { source: err }
    }
}

/// Reads a structured validation body.
///
/// Accepted shapes:
/// - `{"message": "..."}` or `{"error": "..."}`
/// - `{"errors": [{"field"|"path": ..., "message": ...}]}`
/// - `{"fieldErrors"|"details": {"field": ["msg", ...]}}`
///
/// Returns `None` if the body is not JSON or carries none of these.
pub(crate) fn parse_validation_body(body: &str) -> Option<(String, Vec<FieldError>)> {
    let value: Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;

    let message = object
        .get("message")
        .or_else(|| object.get("error"))
        .and_then(Value::as_str)
        .map(str::to_string);

    let mut fields = Vec::new();

    if let Some(errors) = object.get("errors").and_then(Value::as_array) {
        for item in errors {
            let field = match item.get("field").or_else(|| item.get("path")) {
                Some(Value::String(name)) => name.clone(),
                Some(Value::Array(parts)) => parts
                    .iter()
                    .map(|part| match part {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("."),
                _ => String::new(),
            };
            if let Some(text) = item.get("message").and_then(Value::as_str) {
                fields.push(FieldError::new(field, text));
            }
        }
    }

    if let Some(map) = object
        .get("fieldErrors")
        .or_else(|| object.get("details"))
        .and_then(Value::as_object)
    {
        for (field, messages) in map {
            match messages {
                Value::String(text) => fields.push(FieldError::new(field.clone(), text.clone())),
                Value::Array(items) => {
                    for text in items.iter().filter_map(Value::as_str) {
                        fields.push(FieldError::new(field.clone(), text));
                    }
                }
                _ => {}
            }
        }
    }

    if message.is_none() && fields.is_empty() {
        return None;
    }

    let message = message
        .or_else(|| fields.first().map(|f| f.message.clone()))
        .unwrap_or_default();
    Some((message, fields))
}
