use serde::{Deserialize, Serialize};

pub const STATE_ROUTE: &str = "/state";
pub const MOVE_ROUTE: &str = "/move";
pub const RESET_ROUTE: &str = "/reset";

/// Body of `POST /move`. Signed so that negative coordinates reach the rules
/// check instead of failing JSON decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub row: i64,
    pub col: i64,
}

impl MoveRequest {
    /// Coordinates beyond `i64::MAX` saturate, so they still fail the bounds
    /// check on the server.
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row: i64::try_from(row).unwrap_or(i64::MAX),
            col: i64::try_from(col).unwrap_or(i64::MAX),
        }
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
