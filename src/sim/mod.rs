//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - One tick per rendered frame, velocities in units per tick
//! - Geometry is plain data; the host mirrors it onto visuals
//! - The engine reports terminal state but never schedules itself

pub mod collision;
pub mod engine;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use engine::Engine;
pub use state::{
    Arena, Ball, Difficulty, Direction, GameEvent, GameState, MatchState, Paddle, Score, Side,
};
pub use tick::tick;
