use std::path::PathBuf;

use server_api::GameContext;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) game: GameContext,
    pub(crate) reset_on_fetch: bool,
    pub(crate) static_dir: PathBuf,
}
