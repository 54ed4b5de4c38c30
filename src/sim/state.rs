//! Game state and core simulation types
//!
//! All authoritative state the host mirrors onto its visuals lives here.

use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, clamp_to_span};
use crate::consts::*;
use crate::error::EngineError;

/// Difficulty tier, chosen once before a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }

    /// Ball speed per axis at match start (units per tick)
    pub fn ball_speed(&self) -> f32 {
        match self {
            Difficulty::Easy => 4.0,
            Difficulty::Hard => 6.5,
        }
    }

    /// Fraction of the arena height the CPU paddle may close per tick
    pub fn reaction_coefficient(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.005,
            Difficulty::Hard => 0.008,
        }
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(EngineError::invalid("difficulty", s)),
        }
    }
}

/// Player paddle move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Sign of the y displacement (screen y grows downward)
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Down => 1.0,
        }
    }
}

impl FromStr for Direction {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(EngineError::invalid("direction", s)),
        }
    }
}

/// One of the two competitors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Cpu,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Cpu => "cpu",
        }
    }

    pub fn opponent(&self) -> Side {
        match self {
            Side::Player => Side::Cpu,
            Side::Cpu => Side::Player,
        }
    }
}

/// Match lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    /// No difficulty chosen yet
    AwaitingDifficulty,
    /// Active gameplay
    Running,
    /// A side reached the win score
    Finished { winner: Side },
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce,
    PaddleHit(Side),
    Scored(Side),
    MatchOver { winner: Side },
}

/// The play area. Always strictly positive and finite.
///
/// Wall bounces only keep the ball inside `[0, height - BALL_SIZE]` when
/// `height >= BALL_SIZE`. Shorter arenas are accepted; the ball then
/// flips vy every tick and jitters around the top wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Result<Self, EngineError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(EngineError::invalid("width", width));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(EngineError::invalid("height", height));
        }
        Ok(Self { width, height })
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width, self.height) / 2.0
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: DEFAULT_ARENA_WIDTH,
            height: DEFAULT_ARENA_HEIGHT,
        }
    }
}

/// The ball. `pos` is its top-left corner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
}

impl Ball {
    pub fn new(arena: &Arena) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: Vec2::splat(BALL_SIZE),
        };
        ball.recenter(arena);
        ball
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Move to arena center. Velocity is left untouched.
    pub fn recenter(&mut self, arena: &Arena) {
        self.pos = arena.center() - self.size / 2.0;
    }
}

/// A paddle. Its x is pinned to its wall; only y moves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    pub fn new(side: Side, arena: &Arena) -> Self {
        let mut paddle = Self {
            side,
            pos: Vec2::ZERO,
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
        };
        paddle.recenter(arena);
        paddle
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Re-pin x to the wall and center vertically
    pub fn recenter(&mut self, arena: &Arena) {
        self.pos.x = match self.side {
            Side::Player => PADDLE_INSET,
            Side::Cpu => arena.width - PADDLE_INSET - self.size.x,
        };
        self.set_y(arena.height / 2.0 - self.size.y / 2.0, arena);
    }

    /// Set y, clamped to `[0, arena.height - height]`
    pub fn set_y(&mut self, y: f32, arena: &Arena) {
        self.pos.y = clamp_to_span(y, arena.height - self.size.y);
    }

    pub fn shift(&mut self, dy: f32, arena: &Arena) {
        self.set_y(self.pos.y + dy, arena);
    }
}

/// Points per side. Only ever incremented within a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub cpu: u32,
}

impl Score {
    /// Add a point for `side`, returning that side's new total
    pub fn award(&mut self, side: Side) -> u32 {
        let points = match side {
            Side::Player => &mut self.player,
            Side::Cpu => &mut self.cpu,
        };
        *points += 1;
        *points
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Cpu => self.cpu,
        }
    }
}

/// Complete engine state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    pub ball: Ball,
    pub player: Paddle,
    pub cpu: Paddle,
    pub score: Score,
    /// None until the first `configure`
    pub difficulty: Option<Difficulty>,
    /// CPU reaction coefficient for the current match
    pub reaction: f32,
    pub phase: MatchState,
    /// Ticks advanced in the current match
    pub time_ticks: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh state waiting for a difficulty. The ball is at rest.
    pub fn new(arena: Arena) -> Self {
        Self {
            arena,
            ball: Ball::new(&arena),
            player: Paddle::new(Side::Player, &arena),
            cpu: Paddle::new(Side::Cpu, &arena),
            score: Score::default(),
            difficulty: None,
            reaction: 0.0,
            phase: MatchState::AwaitingDifficulty,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Center the ball and both paddles in the current arena
    pub fn recenter(&mut self) {
        self.ball.recenter(&self.arena);
        self.player.recenter(&self.arena);
        self.cpu.recenter(&self.arena);
    }

    /// Per-tick cap on CPU paddle travel
    pub fn cpu_max_step(&self) -> f32 {
        self.reaction * self.arena.height
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            MatchState::Finished { winner } => Some(winner),
            _ => None,
        }
    }
}
