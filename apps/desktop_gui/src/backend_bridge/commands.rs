//! Backend commands queued from UI to backend worker.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendCommand {
    Refresh,
    Click { row: usize, col: usize },
    Reset,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Refresh => "refresh",
            BackendCommand::Click { .. } => "click",
            BackendCommand::Reset => "reset",
        }
    }
}
