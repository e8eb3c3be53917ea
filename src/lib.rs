//! Emoji Ping Pong - a one-screen paddle-and-ball arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: User preferences

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed canvas size (pixels, origin top-left)
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Ball defaults
    pub const BALL_DIAMETER: f32 = 60.0;
    pub const BALL_RADIUS: f32 = BALL_DIAMETER / 2.0;
    pub const BALL_SPAWN: Vec2 = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 4.0);
    pub const BALL_START_VEL: Vec2 = Vec2::new(300.0, 300.0);
    /// Spin applied to the emoji face, degrees per second
    pub const BALL_SPIN: f32 = 100.0;

    /// Paddle defaults - a rounded bar near the bottom edge
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 30.0;
    pub const PADDLE_Y: f32 = SCREEN_HEIGHT - 60.0;

    /// Speed boost when a paddle hit completes a palette step (multiplicative)
    pub const PADDLE_BOOST: f32 = 1.3;

    /// A palette step is taken every this many points
    pub const COLOR_STEP_SCORE: u32 = 5;

    /// Background palette, cycled back and forth as the score climbs
    pub const PALETTE: [[u8; 4]; 6] = [
        [229, 255, 164, 255],
        [223, 246, 130, 255],
        [166, 254, 232, 255],
        [149, 192, 247, 255],
        [250, 195, 252, 255],
        [255, 155, 215, 255],
    ];
}

/// Convert one sRGB channel (0-255) to linear
#[inline]
fn channel_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert an sRGB color to the linear values the render target expects
#[inline]
pub fn srgb_to_linear(color: [u8; 4]) -> [f32; 4] {
    [
        channel_to_linear(color[0]),
        channel_to_linear(color[1]),
        channel_to_linear(color[2]),
        color[3] as f32 / 255.0,
    ]
}
