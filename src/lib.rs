//! Paddle Duel - a rectangular arena Pong, player vs CPU
//!
//! Core modules:
//! - `sim`: Simulation engine (physics, collisions, CPU opponent, scoring)
//! - `settings`: Host-side configuration (defaults, key bindings)
//! - `error`: Crate error type
//!
//! Rendering, menus and frame scheduling belong to the host. The host calls
//! [`sim::Engine::advance`] once per frame and mirrors the engine's state.

pub mod error;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use error::EngineError;
pub use settings::{KeyBindings, Settings};
pub use sim::Engine;

/// Game configuration constants
pub mod consts {
    /// Default arena dimensions
    pub const DEFAULT_ARENA_WIDTH: f32 = 800.0;
    pub const DEFAULT_ARENA_HEIGHT: f32 = 600.0;

    /// Ball is a square
    pub const BALL_SIZE: f32 = 20.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between a paddle's outer edge and its wall
    pub const PADDLE_INSET: f32 = 30.0;
    /// Player paddle displacement per key press
    pub const PADDLE_STEP: f32 = 30.0;

    /// First side to reach this score wins the match
    pub const WIN_SCORE: u32 = 10;
}
