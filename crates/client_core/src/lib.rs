use async_trait::async_trait;
use reqwest::{Client, Response};
use shared::{
    domain::GameState,
    error::ErrorDetail,
    protocol::{MoveRequest, MOVE_ROUTE, RESET_ROUTE, STATE_ROUTE},
};
use tracing::debug;
use url::Url;

pub mod error;
pub mod session;
pub mod view;

pub use error::ClientError;
pub use session::{ClickOutcome, GameSession};
pub use view::{BoardView, CellView};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Remote game operations. Every call is one request; the returned state
/// replaces whatever the caller held before.
#[async_trait]
pub trait GameApi: Send + Sync {
    async fn fetch_state(&self) -> Result<GameState, ClientError>;
    async fn submit_move(&self, row: usize, col: usize) -> Result<GameState, ClientError>;
    async fn reset(&self) -> Result<GameState, ClientError>;
}

pub struct GameClient {
    http: Client,
    server_url: String,
}

impl GameClient {
    pub fn new(server_url: &str) -> Result<Self, ClientError> {
        Self::with_http_client(Client::new(), server_url)
    }

    pub fn with_http_client(http: Client, server_url: &str) -> Result<Self, ClientError> {
        let trimmed = server_url.trim().trim_end_matches('/');
        Url::parse(trimmed).map_err(|source| ClientError::InvalidServerUrl {
            url: server_url.to_string(),
            source,
        })?;
        Ok(Self {
            http,
            server_url: trimmed.to_string(),
        })
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    fn endpoint(&self, route: &str) -> String {
        format!("{}{route}", self.server_url)
    }
}

#[async_trait]
impl GameApi for GameClient {
    async fn fetch_state(&self) -> Result<GameState, ClientError> {
        let response = self.http.get(self.endpoint(STATE_ROUTE)).send().await?;
        decode_state(response).await
    }

    async fn submit_move(&self, row: usize, col: usize) -> Result<GameState, ClientError> {
        debug!(row, col, "submitting move");
        let response = self
            .http
            .post(self.endpoint(MOVE_ROUTE))
            .json(&MoveRequest::new(row, col))
            .send()
            .await?;
        decode_state(response).await
    }

    async fn reset(&self) -> Result<GameState, ClientError> {
        let response = self.http.post(self.endpoint(RESET_ROUTE)).send().await?;
        decode_state(response).await
    }
}

async fn decode_state(response: Response) -> Result<GameState, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    match response.json::<ErrorDetail>().await {
        Ok(body) => Err(ClientError::Rejected {
            status,
            detail: body.detail,
        }),
        Err(_) => Err(ClientError::Status { status }),
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
