//! Per-frame simulation advance
//!
//! `tick` interprets one frame's worth of input against the phase machine
//! and moves the world forward. Pause and restart are click-driven; the
//! FPS overlay toggle works in every phase.

use super::state::{BallEvent, GamePhase, GameState};

/// Input commands for a single frame (one-shot, consumed by the caller)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Horizontal pointer delta in pixels
    pub paddle_dx: f32,
    /// Primary click - start or resume a round
    pub primary_click: bool,
    /// Secondary click - pause a running round
    pub secondary_click: bool,
    /// Flip the FPS overlay
    pub toggle_fps: bool,
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.toggle_fps {
        state.show_fps = !state.show_fps;
    }

    match state.phase {
        GamePhase::Playing => {
            if input.secondary_click {
                state.phase = GamePhase::Paused;
                return;
            }

            state.paddle.move_by(input.paddle_dx);
            let event = state
                .ball
                .advance(dt, state.paddle.bounds(), &mut state.scoreboard);
            if event == BallEvent::FloorExit {
                state.phase = GamePhase::GameOver;
            }
        }
        GamePhase::GameOver | GamePhase::Paused => {
            // Secondary clicks are ignored here; only a primary click moves
            // the machine, and only a dead round resets the world.
            if input.primary_click {
                if state.phase == GamePhase::GameOver {
                    state.ball.reset();
                    state.scoreboard.reset();
                }
                state.phase = GamePhase::Playing;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;

    fn primary() -> TickInput {
        TickInput {
            primary_click: true,
            ..Default::default()
        }
    }

    fn secondary() -> TickInput {
        TickInput {
            secondary_click: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_session_starts_waiting() {
        let state = GameState::new();
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(!state.cursor_hidden());
    }

    #[test]
    fn test_primary_click_starts_and_resets() {
        let mut state = GameState::new();
        state.scoreboard.register_hit();
        state.ball.pos = Vec2::new(50.0, 50.0);

        tick(&mut state, &primary(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.scoreboard.score, 0);
        assert!(state.cursor_hidden());
        // The click frame only resets; motion resumes next frame
        assert_eq!(state.ball.pos, BALL_SPAWN);
        assert_eq!(state.ball.vel, BALL_START_VEL);

        tick(&mut state, &TickInput::default(), SIM_DT);
        let expected = BALL_SPAWN + BALL_START_VEL * SIM_DT;
        assert!((state.ball.pos - expected).length() < 0.001);
    }

    #[test]
    fn test_pause_freezes_without_moving_ball() {
        let mut state = GameState::new();
        tick(&mut state, &primary(), SIM_DT);

        let ball_before = state.ball.pos;
        let score_before = state.scoreboard.score;
        tick(&mut state, &secondary(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Paused);
        assert_eq!(state.ball.pos, ball_before);
        assert_eq!(state.scoreboard.score, score_before);
        assert!(!state.cursor_hidden());
    }

    #[test]
    fn test_secondary_click_ignored_unless_playing() {
        let mut state = GameState::new();
        tick(&mut state, &secondary(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);

        // Pause, then another secondary click is a no-op
        tick(&mut state, &primary(), SIM_DT);
        tick(&mut state, &secondary(), SIM_DT);
        tick(&mut state, &secondary(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Paused);
    }

    #[test]
    fn test_resume_keeps_round_state() {
        let mut state = GameState::new();
        tick(&mut state, &primary(), SIM_DT);
        state.scoreboard.register_hit();
        tick(&mut state, &secondary(), SIM_DT);
        let ball_at_pause = state.ball.pos;

        tick(&mut state, &primary(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        // Resume does not reset - score and trajectory continue
        assert_eq!(state.scoreboard.score, 1);
        assert_eq!(state.ball.pos, ball_at_pause);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_ne!(state.ball.pos, ball_at_pause);
    }

    #[test]
    fn test_floor_exit_ends_round() {
        let mut state = GameState::new();
        tick(&mut state, &primary(), SIM_DT);
        state.ball.pos = Vec2::new(200.0, 590.0);
        state.ball.vel = Vec2::new(0.0, 300.0);

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.ball.pos.y, SCREEN_HEIGHT - BALL_RADIUS);
        assert!(state.ball.vel.y > 0.0);
    }

    #[test]
    fn test_paddle_follows_pointer_delta() {
        let mut state = GameState::new();
        tick(&mut state, &primary(), SIM_DT);
        let x_before = state.paddle.x;

        let drag = TickInput {
            paddle_dx: 25.0,
            ..Default::default()
        };
        tick(&mut state, &drag, SIM_DT);
        assert_eq!(state.paddle.x, x_before + 25.0);

        // Paddle input is inert outside of Playing
        tick(&mut state, &secondary(), SIM_DT);
        tick(&mut state, &drag, SIM_DT);
        assert_eq!(state.paddle.x, x_before + 25.0);
    }

    #[test]
    fn test_fps_toggle_works_in_any_phase() {
        let mut state = GameState::new();
        let toggle = TickInput {
            toggle_fps: true,
            ..Default::default()
        };

        tick(&mut state, &toggle, SIM_DT);
        assert!(state.show_fps);

        tick(&mut state, &primary(), SIM_DT);
        tick(&mut state, &toggle, SIM_DT);
        assert!(!state.show_fps);
        assert_eq!(state.phase, GamePhase::Playing);

        // Toggling alongside a pause click does both
        let both = TickInput {
            secondary_click: true,
            toggle_fps: true,
            ..Default::default()
        };
        tick(&mut state, &both, SIM_DT);
        assert!(state.show_fps);
        assert_eq!(state.phase, GamePhase::Paused);
    }

    #[test]
    fn test_click_walkthrough() {
        // GameOver -> Playing (reset) -> Paused -> Playing -> GameOver
        let mut state = GameState::new();
        for _ in 0..3 {
            state.scoreboard.register_hit();
        }

        tick(&mut state, &primary(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.scoreboard.score, 0);

        tick(&mut state, &secondary(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Paused);

        tick(&mut state, &primary(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);

        state.ball.pos = Vec2::new(200.0, 595.0);
        state.ball.vel = Vec2::new(0.0, 300.0);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_rally_stays_clamped_horizontally() {
        // Let a round play out with the paddle parked in the center. The
        // side walls sit first in the collision chain, so the ball can
        // never end a frame outside them.
        let mut state = GameState::new();
        tick(&mut state, &primary(), SIM_DT);

        for _ in 0..10_000 {
            tick(&mut state, &TickInput::default(), SIM_DT);
            assert!(state.ball.pos.x >= BALL_RADIUS);
            assert!(state.ball.pos.x <= SCREEN_WIDTH - BALL_RADIUS);
            if state.phase == GamePhase::GameOver {
                // Floor exit leaves the ball parked on the bottom edge
                assert_eq!(state.ball.pos.y, SCREEN_HEIGHT - BALL_RADIUS);
                break;
            }
        }
    }
}
