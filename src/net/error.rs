//! Error taxonomy for remote API calls.
//!
//! ERROR HANDLING
//! ==============
//! `AuthRejected` is terminal for the stored credential; callers erase it and
//! de-authenticate. Transport failures and 5xx statuses are transient and
//! leave the credential in place so the next load can retry. Server-side
//! validation failures carry per-field messages that forms surface through
//! [`ApiError::form_message`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

use super::types::ApiErrorBody;

pub const UNAUTHORIZED: u16 = 401;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{message}")]
    AuthRejected { message: String },
    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        field_errors: BTreeMap<String, Vec<String>>,
    },
    #[error("connection error: {0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-2xx status and its (possibly missing) body into an error.
    pub fn from_status(status: u16, body: Option<ApiErrorBody>) -> Self {
        let body = body.unwrap_or_default();
        let message = body
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| status_fallback_message(status));
        if status == UNAUTHORIZED {
            return Self::AuthRejected { message };
        }
        Self::Status { status, message, field_errors: body.errors.unwrap_or_default() }
    }

    pub fn is_auth_rejected(&self) -> bool {
        matches!(self, Self::AuthRejected { .. })
    }

    /// Whether retrying later could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status { status, .. } => *status >= 500,
            Self::AuthRejected { .. } | Self::Decode(_) => false,
        }
    }

    /// First server-side validation message for `field`, if any.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        match self {
            Self::Status { field_errors, .. } => field_errors
                .get(field)
                .and_then(|msgs| msgs.first())
                .map(String::as_str),
            _ => None,
        }
    }

    /// Message for a failed form submission.
    ///
    /// `fields` pairs wire field names with their form labels, in form order.
    /// The first field the server flagged wins; otherwise the overall message.
    pub fn form_message(&self, fields: &[(&str, &str)]) -> String {
        fields
            .iter()
            .find_map(|(field, label)| self.field_error(field).map(|msg| format!("{label}: {msg}")))
            .unwrap_or_else(|| self.to_string())
    }
}

fn status_fallback_message(status: u16) -> String {
    format!("request failed: {status}")
}
