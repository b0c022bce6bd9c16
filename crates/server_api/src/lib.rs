use std::sync::Arc;

use shared::{
    domain::{Cell, GameState},
    error::GameError,
    protocol::MoveRequest,
};
use tokio::sync::Mutex;
use tracing::{debug, info};

/// The one game this service hosts. Cloning shares the same game.
#[derive(Clone)]
pub struct GameContext {
    game: Arc<Mutex<GameState>>,
    board_size: usize,
}

impl GameContext {
    pub fn new(board_size: usize) -> Self {
        Self {
            game: Arc::new(Mutex::new(GameState::new(board_size))),
            board_size,
        }
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }
}

pub async fn current_state(ctx: &GameContext) -> GameState {
    ctx.game.lock().await.clone()
}

/// State as seen by a freshly loaded client. With `reset_on_fetch` every fetch
/// starts a new game.
pub async fn fetch_state(ctx: &GameContext, reset_on_fetch: bool) -> GameState {
    if reset_on_fetch {
        return reset_game(ctx).await;
    }
    current_state(ctx).await
}

pub async fn reset_game(ctx: &GameContext) -> GameState {
    let mut game = ctx.game.lock().await;
    *game = GameState::new(ctx.board_size);
    info!(board_size = ctx.board_size, "game reset");
    game.clone()
}

pub async fn make_move(ctx: &GameContext, request: MoveRequest) -> Result<GameState, GameError> {
    let mut game = ctx.game.lock().await;
    apply_move(&mut game, request)?;
    Ok(game.clone())
}

/// Places the current player's mark and advances the game.
pub fn apply_move(game: &mut GameState, request: MoveRequest) -> Result<(), GameError> {
    if game.is_over() {
        return Err(GameError::GameOver);
    }

    let (row, col) = board_position(game, request)?;
    if game.board.get(row, col) != Some(Cell::Empty) {
        return Err(GameError::CellTaken);
    }

    let mark = game.current_player;
    game.board.set(row, col, Cell::Taken(mark));
    debug!(%mark, row, col, "mark placed");

    if game.board.has_line(mark) {
        game.winner = Some(mark);
        info!(%mark, "game won");
    } else if game.board.is_full() {
        game.is_draw = true;
        info!("game drawn");
    } else {
        game.current_player = mark.opponent();
    }
    Ok(())
}

fn board_position(game: &GameState, request: MoveRequest) -> Result<(usize, usize), GameError> {
    let out_of_bounds = GameError::OutOfBounds {
        row: request.row,
        col: request.col,
    };
    let size = game.board.size();
    let row = usize::try_from(request.row).map_err(|_| out_of_bounds.clone())?;
    let col = usize::try_from(request.col).map_err(|_| out_of_bounds.clone())?;
    if row >= size || col >= size {
        return Err(out_of_bounds);
    }
    Ok((row, col))
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
