//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit timestep only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_overlaps_rect};
pub use state::{Ball, BallEvent, GamePhase, GameState, Paddle, Scoreboard};
pub use tick::{TickInput, tick};
