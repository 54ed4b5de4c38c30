//! Browser binding
//!
//! Exposes the engine to a JavaScript host. The host owns the
//! `requestAnimationFrame` loop: it calls `advance()` each frame while
//! `is_running()` is true and copies the accessors onto its DOM elements.

use wasm_bindgen::prelude::*;
use web_sys::KeyboardEvent;

use crate::error::EngineError;
use crate::settings::{KeyBindings, Settings};
use crate::sim::{Difficulty, Direction, Engine, GameEvent, Side};

fn to_js(err: EngineError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }
    log::info!("Paddle Duel loaded");
}

#[wasm_bindgen]
pub struct WebEngine {
    engine: Engine,
    keys: KeyBindings,
}

#[wasm_bindgen]
impl WebEngine {
    /// `settings_json` may be empty to use defaults
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, settings_json: &str) -> Result<WebEngine, JsValue> {
        let settings = if settings_json.is_empty() {
            Settings::default()
        } else {
            Settings::from_json_or_default(settings_json)
        };
        Ok(WebEngine {
            engine: Engine::new(width, height).map_err(to_js)?,
            keys: settings.keys,
        })
    }

    /// "easy" or "hard"
    pub fn configure(&mut self, difficulty: &str) -> Result<(), JsValue> {
        let difficulty: Difficulty = difficulty.parse().map_err(to_js)?;
        self.engine.configure(difficulty);
        Ok(())
    }

    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.engine.resize(width, height).map_err(to_js)
    }

    /// "up" or "down"
    pub fn move_player_paddle(&mut self, direction: &str) -> Result<(), JsValue> {
        let direction: Direction = direction.parse().map_err(to_js)?;
        self.engine.move_player_paddle(direction);
        Ok(())
    }

    /// Returns true if the key was bound (host should preventDefault)
    pub fn handle_key(&mut self, event: &KeyboardEvent) -> bool {
        match self.keys.direction_for(&event.key()) {
            Some(direction) => {
                self.engine.move_player_paddle(direction);
                true
            }
            None => false,
        }
    }

    pub fn advance(&mut self) {
        self.engine.advance();
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    /// "player", "cpu", or undefined while the match is undecided
    pub fn winner(&self) -> Option<String> {
        self.engine.winner().map(|side| side.as_str().to_string())
    }

    /// True if someone scored on the last tick
    pub fn scored(&self) -> bool {
        self.engine
            .events()
            .iter()
            .any(|e| matches!(e, GameEvent::Scored(_)))
    }

    pub fn player_score(&self) -> u32 {
        self.engine.score().get(Side::Player)
    }

    pub fn cpu_score(&self) -> u32 {
        self.engine.score().get(Side::Cpu)
    }

    pub fn ball_x(&self) -> f32 {
        self.engine.ball().pos.x
    }

    pub fn ball_y(&self) -> f32 {
        self.engine.ball().pos.y
    }

    pub fn ball_size(&self) -> f32 {
        self.engine.ball().size.x
    }

    pub fn player_x(&self) -> f32 {
        self.engine.player_paddle().pos.x
    }

    pub fn player_y(&self) -> f32 {
        self.engine.player_paddle().pos.y
    }

    pub fn cpu_x(&self) -> f32 {
        self.engine.cpu_paddle().pos.x
    }

    pub fn cpu_y(&self) -> f32 {
        self.engine.cpu_paddle().pos.y
    }

    pub fn paddle_width(&self) -> f32 {
        self.engine.player_paddle().size.x
    }

    pub fn paddle_height(&self) -> f32 {
        self.engine.player_paddle().size.y
    }

    /// Full state as JSON
    pub fn snapshot(&self) -> Result<String, JsValue> {
        self.engine.snapshot_json().map_err(to_js)
    }
}
