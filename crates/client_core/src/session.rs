use std::sync::Arc;

use shared::domain::GameState;
use tracing::{error, warn};

use crate::{
    view::{outcome_message, render, BoardView},
    GameApi,
};

pub const FETCH_FAILED_MESSAGE: &str = "Error fetching game state. Please try again.";
pub const MOVE_FAILED_MESSAGE: &str = "Error making move. Please try again.";
pub const RESET_FAILED_MESSAGE: &str = "Error resetting game. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Cell taken, game over, or no state loaded yet; nothing was sent.
    Ignored,
    Applied,
    Failed,
}

/// What a player sees: the last state the server returned, its rendered grid
/// and one line of message text.
pub struct GameSession {
    api: Arc<dyn GameApi>,
    state: Option<GameState>,
    view: BoardView,
    message: String,
}

impl GameSession {
    pub fn new(api: Arc<dyn GameApi>) -> Self {
        Self {
            api,
            state: None,
            view: BoardView::default(),
            message: String::new(),
        }
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn view(&self) -> &BoardView {
        &self.view
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Loads the initial state. Same request as [`GameSession::refresh`].
    pub async fn initialize(&mut self) -> bool {
        self.refresh().await
    }

    /// Replaces the session with whatever the server reports. A server that
    /// resets on fetch hands back a new game here, so the message is derived
    /// from the fetched state rather than kept.
    pub async fn refresh(&mut self) -> bool {
        match self.api.fetch_state().await {
            Ok(state) => {
                self.message = outcome_message(&state).unwrap_or_default();
                self.show(state);
                true
            }
            Err(err) => {
                error!(%err, "error fetching game state");
                self.message = FETCH_FAILED_MESSAGE.to_string();
                false
            }
        }
    }

    pub async fn click(&mut self, row: usize, col: usize) -> ClickOutcome {
        let playable = self.state.as_ref().is_some_and(|state| {
            !state.is_over() && state.board.get(row, col).is_some_and(|cell| cell.is_empty())
        });
        if !playable {
            return ClickOutcome::Ignored;
        }

        match self.api.submit_move(row, col).await {
            Ok(state) => {
                if let Some(outcome) = outcome_message(&state) {
                    self.message = outcome;
                }
                self.show(state);
                ClickOutcome::Applied
            }
            Err(err) => {
                warn!(row, col, %err, "error making move");
                self.message = err
                    .server_detail()
                    .map(str::to_string)
                    .unwrap_or_else(|| MOVE_FAILED_MESSAGE.to_string());
                ClickOutcome::Failed
            }
        }
    }

    pub async fn reset(&mut self) -> bool {
        match self.api.reset().await {
            Ok(state) => {
                self.show(state);
                self.message.clear();
                true
            }
            Err(err) => {
                error!(%err, "error resetting game");
                self.message = RESET_FAILED_MESSAGE.to_string();
                false
            }
        }
    }

    fn show(&mut self, state: GameState) {
        self.view = render(&state);
        self.state = Some(state);
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
