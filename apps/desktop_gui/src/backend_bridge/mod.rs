//! Worker thread that owns the game session and talks to the server.

pub mod commands;
pub mod runtime;
