//! Game state and core simulation types
//!
//! One `GameState` value owns the whole session: ball, paddle, scoreboard
//! and the phase machine. Nothing here touches the platform layer.

use glam::Vec2;

use super::collision::{Rect, circle_overlaps_rect};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// No round in progress - waiting for a click to (re)start
    GameOver,
    /// Round frozen, waiting for a click to resume
    Paused,
    /// Active gameplay
    Playing,
}

/// What happened to the ball during one frame advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallEvent {
    /// No contact this frame
    None,
    /// Bounced off a side wall or the ceiling
    WallBounce,
    /// Deflected by the paddle; `accelerated` when the hit completed a
    /// palette step and the ball sped up
    PaddleHit { accelerated: bool },
    /// Crossed the bottom edge - the round is over
    FloorExit,
}

/// Score plus the oscillating background palette index
///
/// The palette index walks back and forth across `PALETTE`, stepping once
/// every `COLOR_STEP_SCORE` points and reversing at either end.
#[derive(Debug, Clone)]
pub struct Scoreboard {
    pub score: u32,
    color_index: usize,
    direction: i32,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            score: 0,
            color_index: 0,
            direction: 1,
        }
    }
}

impl Scoreboard {
    /// Record one paddle hit
    ///
    /// Returns `true` when the hit completed a palette step - the caller
    /// uses that as the "speed up the ball" signal.
    pub fn register_hit(&mut self) -> bool {
        self.score += 1;
        if self.score % COLOR_STEP_SCORE == 0 {
            self.step_palette();
            true
        } else {
            false
        }
    }

    /// Background color for the current palette position
    pub fn current_color(&self) -> [u8; 4] {
        PALETTE[self.color_index]
    }

    /// Start a fresh round
    ///
    /// The walk direction deliberately carries over from the previous
    /// round; only the score and palette position rewind.
    pub fn reset(&mut self) {
        self.score = 0;
        self.color_index = 0;
    }

    fn step_palette(&mut self) {
        let last = PALETTE.len() as i32 - 1;
        let next = self.color_index as i32 + self.direction;
        if next > last || next < 0 {
            self.direction = -self.direction;
        }
        self.color_index = (self.color_index as i32 + self.direction) as usize;
    }
}

/// The bouncing emoji ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Face rotation in degrees, kept in [0, 360)
    pub rotation: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: BALL_SPAWN,
            vel: BALL_START_VEL,
            rotation: 0.0,
        }
    }
}

impl Ball {
    /// Restore spawn position, velocity and rotation (idempotent)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance one frame and resolve at most one collision
    ///
    /// The checks form a fixed-priority chain - left wall, right wall,
    /// ceiling, floor, paddle - and exactly one branch fires per frame.
    /// A corner overlap therefore resolves a single axis; the next frame
    /// picks up the other one. Floor contact does not bounce: it ends
    /// the round.
    pub fn advance(&mut self, dt: f32, paddle: Rect, board: &mut Scoreboard) -> BallEvent {
        self.pos += self.vel * dt;
        if self.rotation > 359.0 {
            self.rotation = 0.0;
        } else {
            self.rotation += BALL_SPIN * dt;
        }

        if self.pos.x - BALL_RADIUS <= 0.0 {
            self.pos.x = BALL_RADIUS;
            self.vel.x = -self.vel.x;
            BallEvent::WallBounce
        } else if self.pos.x + BALL_RADIUS >= SCREEN_WIDTH {
            self.pos.x = SCREEN_WIDTH - BALL_RADIUS;
            self.vel.x = -self.vel.x;
            BallEvent::WallBounce
        } else if self.pos.y - BALL_RADIUS <= 0.0 {
            self.pos.y = BALL_RADIUS;
            self.vel.y = -self.vel.y;
            BallEvent::WallBounce
        } else if self.pos.y + BALL_RADIUS >= SCREEN_HEIGHT {
            self.pos.y = SCREEN_HEIGHT - BALL_RADIUS;
            BallEvent::FloorExit
        } else if self.vel.y > 0.0 && circle_overlaps_rect(self.pos, BALL_RADIUS, paddle) {
            // Sit the ball on top of the paddle so it cannot re-collide
            self.pos.y = paddle.y - BALL_RADIUS;
            self.vel.y = -self.vel.y;
            let accelerated = board.register_hit();
            if accelerated {
                self.vel *= PADDLE_BOOST;
            }
            BallEvent::PaddleHit { accelerated }
        } else {
            BallEvent::None
        }
    }
}

/// The player's paddle, constrained to horizontal motion
#[derive(Debug, Clone)]
pub struct Paddle {
    pub x: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: (SCREEN_WIDTH - PADDLE_WIDTH) / 2.0,
        }
    }
}

impl Paddle {
    /// Shift by a pointer delta, clamped to the screen
    pub fn move_by(&mut self, dx: f32) {
        self.x = (self.x + dx).clamp(0.0, SCREEN_WIDTH - PADDLE_WIDTH);
    }

    /// Bounding rectangle for collision queries
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, PADDLE_Y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current phase; a fresh process waits for a click
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    pub scoreboard: Scoreboard,
    /// FPS overlay toggle, orthogonal to the phase machine
    pub show_fps: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::GameOver,
            ball: Ball::default(),
            paddle: Paddle::default(),
            scoreboard: Scoreboard::default(),
            show_fps: false,
        }
    }

    /// The pointer is hidden exactly while a round is being played
    pub fn cursor_hidden(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}
