//! Per-frame simulation tick
//!
//! One call advances the match by exactly one rendered frame. Velocities are
//! in units per tick, so there is no dt.

use super::state::{GameEvent, GameState, MatchState, Side};
use crate::consts::WIN_SCORE;

/// Advance the game state by one tick. No-op unless the match is running.
pub fn tick(state: &mut GameState) {
    state.events.clear();

    if state.phase != MatchState::Running {
        return;
    }

    state.time_ticks += 1;

    integrate_ball(state);
    track_ball(state);
    bounce_walls(state);
    resolve_paddle_hits(state);
    check_scoring(state);
}

fn integrate_ball(state: &mut GameState) {
    state.ball.pos += state.ball.vel;
}

/// CPU opponent: close on the ball's y, capped per tick, never overshooting
fn track_ball(state: &mut GameState) {
    let delta = state.ball.pos.y - state.cpu.center_y();
    let max_step = state.cpu_max_step();
    let step = delta.clamp(-max_step, max_step);
    state.cpu.shift(step, &state.arena);
}

/// Reflect off top/bottom. No position correction; the flipped velocity
/// carries the ball back in on the next tick.
fn bounce_walls(state: &mut GameState) {
    let ball = state.ball.rect();
    if ball.top() <= 0.0 || ball.bottom() >= state.arena.height {
        state.ball.vel.y = -state.ball.vel.y;
        state.events.push(GameEvent::WallBounce);
        log::trace!("Wall bounce at y={}", ball.top());
    }
}

/// Both paddles are tested against the ball as it stood before either
/// response, so both may fire in the same tick.
fn resolve_paddle_hits(state: &mut GameState) {
    let ball = state.ball.rect();

    if ball.overlaps(&state.player.rect()) {
        state.ball.vel.x = -state.ball.vel.x;
        state.ball.pos.x = state.player.rect().right() + 1.0;
        state.events.push(GameEvent::PaddleHit(Side::Player));
        log::trace!("Player paddle hit at y={}", ball.top());
    }

    if ball.overlaps(&state.cpu.rect()) {
        state.ball.vel.x = -state.ball.vel.x;
        state.ball.pos.x = state.cpu.rect().left() - state.ball.size.x - 1.0;
        state.events.push(GameEvent::PaddleHit(Side::Cpu));
        log::trace!("CPU paddle hit at y={}", ball.top());
    }
}

fn check_scoring(state: &mut GameState) {
    let ball = state.ball.rect();
    let scorer = if ball.left() < 0.0 {
        Side::Cpu
    } else if ball.right() > state.arena.width {
        Side::Player
    } else {
        return;
    };

    let points = state.score.award(scorer);
    state.events.push(GameEvent::Scored(scorer));
    log::debug!(
        "{} scores: player {} - cpu {}",
        scorer.as_str(),
        state.score.player,
        state.score.cpu
    );

    if points >= WIN_SCORE {
        state.phase = MatchState::Finished { winner: scorer };
        state.events.push(GameEvent::MatchOver { winner: scorer });
        log::info!(
            "Match over after {} ticks, {} wins {}-{}",
            state.time_ticks,
            scorer.as_str(),
            state.score.get(scorer),
            state.score.get(scorer.opponent())
        );
    } else {
        // Velocity keeps its last sign
        state.ball.recenter(&state.arena);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Arena, Difficulty, Score};
    use glam::Vec2;

    fn running_state(difficulty: Difficulty) -> GameState {
        let mut state = GameState::new(Arena::default());
        state.difficulty = Some(difficulty);
        state.reaction = difficulty.reaction_coefficient();
        state.ball.vel = Vec2::splat(difficulty.ball_speed());
        state.phase = MatchState::Running;
        state
    }

    #[test]
    fn test_tick_idle_before_configure() {
        let mut state = GameState::new(Arena::default());
        let before = state.ball.pos;
        tick(&mut state);
        assert_eq!(state.ball.pos, before);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_tick_integrates_ball() {
        let mut state = running_state(Difficulty::Easy);
        tick(&mut state);
        assert_eq!(state.ball.pos, Vec2::new(394.0, 294.0));
        assert_eq!(state.time_ticks, 1);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_cpu_tracking_is_capped() {
        let mut state = running_state(Difficulty::Easy);
        state.ball.pos = Vec2::new(400.0, 20.0);
        state.ball.vel = Vec2::new(4.0, 0.0);

        tick(&mut state);
        // Cap is 0.005 * 600 = 3
        assert_eq!(state.cpu.pos.y, 247.0);
    }

    #[test]
    fn test_cpu_tracking_does_not_overshoot() {
        let mut state = running_state(Difficulty::Hard);
        // Paddle center at 300; ball lands at y=302 after integrating
        state.ball.pos = Vec2::new(400.0, 300.0);
        state.ball.vel = Vec2::new(2.0, 2.0);

        tick(&mut state);
        assert_eq!(state.cpu.center_y(), 302.0);
    }

    #[test]
    fn test_wall_bounce_flips_vy_only() {
        let mut state = running_state(Difficulty::Easy);
        state.ball.pos = Vec2::new(400.0, 2.0);
        state.ball.vel = Vec2::new(4.0, -4.0);

        tick(&mut state);
        assert_eq!(state.ball.vel, Vec2::new(4.0, 4.0));
        // Reflect without reposition
        assert_eq!(state.ball.pos.y, -2.0);
        assert!(state.events.contains(&GameEvent::WallBounce));

        tick(&mut state);
        assert_eq!(state.ball.pos.y, 2.0);
    }

    #[test]
    fn test_bottom_wall_bounce() {
        let mut state = running_state(Difficulty::Easy);
        state.ball.pos = Vec2::new(400.0, 578.0);
        state.ball.vel = Vec2::new(4.0, 4.0);

        tick(&mut state);
        assert_eq!(state.ball.vel.y, -4.0);
    }

    #[test]
    fn test_player_paddle_hit() {
        let mut state = running_state(Difficulty::Easy);
        state.ball.pos = Vec2::new(42.0, 280.0);
        state.ball.vel = Vec2::new(-4.0, 4.0);

        tick(&mut state);
        assert_eq!(state.ball.vel.x, 4.0);
        assert_eq!(state.ball.pos.x, 41.0);
        assert!(state.events.contains(&GameEvent::PaddleHit(Side::Player)));
        assert!(!state.ball.rect().overlaps(&state.player.rect()));
    }

    #[test]
    fn test_cpu_paddle_hit() {
        let mut state = running_state(Difficulty::Easy);
        state.ball.pos = Vec2::new(738.0, 290.0);
        state.ball.vel = Vec2::new(4.0, 4.0);

        tick(&mut state);
        assert_eq!(state.ball.vel.x, -4.0);
        assert_eq!(state.ball.pos.x, 760.0 - 20.0 - 1.0);
        assert!(state.events.contains(&GameEvent::PaddleHit(Side::Cpu)));
    }

    #[test]
    fn test_both_paddles_hit_in_one_tick() {
        // Paddles at 30..40 and 40..50; a 20-wide ball spans both
        let arena = Arena::new(80.0, 600.0).unwrap();
        let mut state = running_state(Difficulty::Easy);
        state.arena = arena;
        state.recenter();
        state.ball.pos = Vec2::new(21.0, 290.0);
        state.ball.vel = Vec2::new(4.0, 4.0);

        tick(&mut state);
        assert_eq!(
            state.events,
            vec![GameEvent::PaddleHit(Side::Player), GameEvent::PaddleHit(Side::Cpu)]
        );
        // Flipped twice; CPU placement applied last
        assert_eq!(state.ball.vel, Vec2::new(4.0, 4.0));
        assert_eq!(state.ball.pos, Vec2::new(19.0, 294.0));
        assert_eq!(state.score, Score::default());
    }

    #[test]
    fn test_arena_shorter_than_ball() {
        let mut state = running_state(Difficulty::Easy);
        state.arena = Arena::new(800.0, 10.0).unwrap();
        state.recenter();
        assert_eq!(state.ball.pos.y, -5.0);

        for _ in 0..50 {
            tick(&mut state);
            assert!(state.events.contains(&GameEvent::WallBounce));
            assert!(state.ball.pos.y >= -5.0 && state.ball.pos.y <= 1.5);
            assert_eq!(state.player.pos.y, 0.0);
            assert_eq!(state.cpu.pos.y, 0.0);
        }
    }

    #[test]
    fn test_cpu_scores_off_left_wall() {
        let mut state = running_state(Difficulty::Hard);
        state.ball.pos = Vec2::new(3.0, 100.0);
        state.ball.vel = Vec2::new(-6.5, 6.5);

        tick(&mut state);
        assert_eq!(state.score.cpu, 1);
        assert_eq!(state.score.player, 0);
        assert_eq!(state.ball.pos, Vec2::new(390.0, 290.0));
        // Direction is not re-randomized
        assert_eq!(state.ball.vel, Vec2::new(-6.5, 6.5));
        assert!(state.events.contains(&GameEvent::Scored(Side::Cpu)));
    }

    #[test]
    fn test_win_score_finishes_match() {
        let mut state = running_state(Difficulty::Easy);
        state.score.player = WIN_SCORE - 1;
        state.ball.pos = Vec2::new(780.0, 100.0);
        state.ball.vel = Vec2::new(4.0, 4.0);

        tick(&mut state);
        assert_eq!(state.phase, MatchState::Finished { winner: Side::Player });
        assert_eq!(state.winner(), Some(Side::Player));
        assert!(state.events.contains(&GameEvent::MatchOver { winner: Side::Player }));
        // Final point does not recenter
        assert_eq!(state.ball.pos.x, 784.0);

        let frozen = state.ball.pos;
        tick(&mut state);
        assert_eq!(state.ball.pos, frozen);
        assert!(state.events.is_empty());
    }
}
