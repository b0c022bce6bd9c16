use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server url '{url}': {source}")]
    InvalidServerUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server returned {status}")]
    Status { status: StatusCode },
    #[error("{detail}")]
    Rejected { status: StatusCode, detail: String },
}

impl ClientError {
    /// The message the server attached to a rejected request, if any.
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            ClientError::Rejected { detail, .. } => Some(detail),
            _ => None,
        }
    }
}
