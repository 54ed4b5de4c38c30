//! Paddle Duel entry point
//!
//! Native: runs a headless match, the CPU against a scripted player, and
//! logs the result. Usage: `paddle-duel [easy|hard]`.
//! Browser builds go through the library's `wasm` module instead.

#[cfg(not(target_arch = "wasm32"))]
use paddle_duel::{
    Engine, EngineError, Settings,
    consts::PADDLE_STEP,
    sim::{Difficulty, Direction, GameEvent},
};

/// Scripted stand-in for a human: taps toward the ball every few ticks
#[cfg(not(target_arch = "wasm32"))]
struct Autopilot {
    /// Ticks between key presses
    every: u64,
}

#[cfg(not(target_arch = "wasm32"))]
impl Autopilot {
    fn press(&self, engine: &Engine) -> Option<Direction> {
        if engine.state().time_ticks % self.every != 0 {
            return None;
        }
        let ball = engine.ball().rect().center().y;
        let paddle = engine.player_paddle().center_y();
        let delta = ball - paddle;
        if delta.abs() < PADDLE_STEP / 2.0 {
            None
        } else if delta < 0.0 {
            Some(Direction::Up)
        } else {
            Some(Direction::Down)
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> Result<(), EngineError> {
    let settings = Settings::load();
    let difficulty = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<Difficulty>()?,
        None => settings.difficulty,
    };

    let mut engine = Engine::new(settings.arena_width, settings.arena_height)?;
    engine.configure(difficulty);
    let autopilot = Autopilot { every: 4 };

    while engine.is_running() && engine.state().time_ticks < settings.max_ticks {
        if let Some(direction) = autopilot.press(&engine) {
            engine.move_player_paddle(direction);
        }
        engine.advance();

        for event in engine.events() {
            if let GameEvent::Scored(side) = event {
                let score = engine.score();
                log::info!(
                    "[tick {}] {} scores ({} - {})",
                    engine.state().time_ticks,
                    side.as_str(),
                    score.player,
                    score.cpu
                );
            }
        }
    }

    let score = engine.score();
    match engine.winner() {
        Some(winner) => println!(
            "{} wins {} - {} ({} ticks)",
            winner.as_str(),
            score.player,
            score.cpu,
            engine.state().time_ticks
        ),
        None => {
            log::warn!("Tick cap {} reached before a winner", settings.max_ticks);
            println!("unfinished at {} - {}", score.player, score.cpu);
        }
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    env_logger::init();
    log::info!("Paddle Duel (native) starting...");

    match run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            std::process::ExitCode::from(2)
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm::start, this is just to satisfy the compiler
}
