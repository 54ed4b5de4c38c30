//! Simulation engine: the host-facing API
//!
//! The host owns one [`Engine`], calls [`Engine::advance`] once per display
//! refresh while [`Engine::is_running`] holds, forwards input through
//! [`Engine::move_player_paddle`] / [`Engine::resize`], and mirrors the
//! accessors onto its visuals. All methods take `&mut self`; the engine is
//! meant to be driven from a single thread.

use glam::Vec2;

use super::state::{
    Arena, Ball, Difficulty, Direction, GameEvent, GameState, MatchState, Paddle, Score, Side,
};
use super::tick::tick;
use crate::consts::PADDLE_STEP;
use crate::error::EngineError;

#[derive(Debug, Clone)]
pub struct Engine {
    state: GameState,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            state: GameState::new(Arena::default()),
        }
    }
}

impl Engine {
    /// Create an engine for the given arena, waiting for a difficulty
    pub fn new(width: f32, height: f32) -> Result<Self, EngineError> {
        let arena = Arena::new(width, height)?;
        Ok(Self {
            state: GameState::new(arena),
        })
    }

    /// Start a fresh match. Scores reset, everything recenters.
    pub fn configure(&mut self, difficulty: Difficulty) {
        let mut state = GameState::new(self.state.arena);
        let speed = difficulty.ball_speed();
        state.difficulty = Some(difficulty);
        state.reaction = difficulty.reaction_coefficient();
        state.ball.vel = Vec2::splat(speed);
        state.phase = MatchState::Running;
        self.state = state;

        log::info!(
            "Match started: difficulty={}, arena={}x{}",
            difficulty.as_str(),
            self.state.arena.width,
            self.state.arena.height
        );
    }

    /// Change arena size and recenter ball and paddles
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), EngineError> {
        self.state.arena = Arena::new(width, height)?;
        self.state.recenter();
        log::debug!("Arena resized to {}x{}", width, height);
        Ok(())
    }

    /// Step the player paddle once. Ignored unless a match is running.
    pub fn move_player_paddle(&mut self, direction: Direction) {
        if !self.is_running() {
            log::debug!("Ignoring paddle move {:?} in {:?}", direction, self.state.phase);
            return;
        }
        let arena = self.state.arena;
        self.state
            .player
            .shift(direction.sign() * PADDLE_STEP, &arena);
    }

    /// Advance one tick
    pub fn advance(&mut self) {
        tick(&mut self.state);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn arena(&self) -> Arena {
        self.state.arena
    }

    pub fn ball(&self) -> &Ball {
        &self.state.ball
    }

    pub fn player_paddle(&self) -> &Paddle {
        &self.state.player
    }

    pub fn cpu_paddle(&self) -> &Paddle {
        &self.state.cpu
    }

    pub fn score(&self) -> Score {
        self.state.score
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.state.difficulty
    }

    pub fn match_state(&self) -> MatchState {
        self.state.phase
    }

    pub fn winner(&self) -> Option<Side> {
        self.state.winner()
    }

    pub fn is_running(&self) -> bool {
        self.state.phase == MatchState::Running
    }

    /// Events produced by the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.state.events
    }

    /// Full state as JSON for hosts that mirror it wholesale
    pub fn snapshot_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(&self.state)?)
    }
}
