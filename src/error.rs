//! Centralized error types for the game core.
//!
//! This module defines all error types used throughout the crate,
//! providing a consistent error handling approach.

use bevy_ecs::event::Event;

/// Main error type for the game core.
///
/// This is the primary error type that should be used in public APIs. It is
/// also a bevy event so systems can report failures without panicking.
#[derive(thiserror::Error, Debug, Event)]
pub enum GameError {
    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Errors related to map construction and queries.
#[derive(thiserror::Error, Debug)]
pub enum MapError {
    #[error("Unknown tile code {code} at ({x}, {y})")]
    UnknownTileCode { code: u8, x: i32, y: i32 },

    #[error("Invalid map configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
