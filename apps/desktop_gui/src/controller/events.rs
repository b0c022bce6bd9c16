//! Events posted from the backend worker to the UI.

use client_core::{BoardView, GameSession};

pub enum UiEvent {
    Info(String),
    /// The worker could not start; no further events will arrive.
    Fatal(String),
    Snapshot(SessionSnapshot),
}

/// Everything the window draws, copied out of the session after each request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub board: BoardView,
    pub message: String,
    pub turn: Option<String>,
}

impl SessionSnapshot {
    pub fn capture(session: &GameSession) -> Self {
        let turn = session
            .state()
            .filter(|state| !state.is_over())
            .map(|state| format!("{} to move", state.current_player));
        Self {
            board: session.view().clone(),
            message: session.message().to_string(),
            turn,
        }
    }
}
