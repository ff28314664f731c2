use shared::{domain::DraftError, error::ApiError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },
    #[error("request could not be completed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("response body is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

impl StoreError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|status| status.as_u16()),
            Self::Decode(_) => None,
        }
    }

    /// Backend-provided reason for a failed request, if there is one.
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::RequestFailed { body, .. } => Some(
                ApiError::from_body(body)
                    .map(|err| err.message())
                    .unwrap_or_else(|| body.clone()),
            ),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("form is incomplete: {0}")]
    InvalidForm(#[from] DraftError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid api base url `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
