//! GUI module for the Gomoku game
//!
//! This module provides a native Rust GUI using egui/eframe. It only talks to
//! the engine through [`crate::GameSession`].

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
