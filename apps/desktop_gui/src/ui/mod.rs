//! UI layer for the desktop GUI: the game window.

pub mod app;

pub use app::GridGameApp;
