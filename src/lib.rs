//! Canvas Pong - classic Pong against a simple AI
//!
//! Core modules:
//! - `sim`: Simulation (physics, collisions, AI, scoring, tick driver)
//! - `renderer`: Display list and Canvas 2D painter
//! - `platform`: Browser input mapping
//! - `persistence`: Key-value storage (LocalStorage on web)
//! - `settings`: Player preferences (ball speed, bot difficulty)

pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield size used when no canvas is available (native runs, tests)
    pub const DEFAULT_PLAYFIELD_WIDTH: f32 = 800.0;
    pub const DEFAULT_PLAYFIELD_HEIGHT: f32 = 500.0;

    /// Paddle geometry
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Corner radius used when drawing paddles
    pub const PADDLE_CORNER_RADIUS: f32 = 7.0;
    /// Gap kept between a paddle and the top/bottom edges
    pub const PADDLE_VERTICAL_MARGIN: f32 = 10.0;
    /// Distance from a paddle to its side edge
    pub const PADDLE_SIDE_INSET: f32 = 10.0;

    /// Ball bounding box edge length (drawn as a circle of half this radius)
    pub const BALL_SIZE: f32 = 16.0;

    /// Maximum deflection off a paddle edge (60 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::PI / 3.0;
    /// Serve angle range, measured from horizontal
    pub const SERVE_MIN_ANGLE: f32 = std::f32::consts::PI / 9.0;
    pub const SERVE_MAX_ANGLE: f32 = std::f32::consts::PI / 3.5;

    /// Preference bounds shared by both sliders
    pub const SETTING_MIN: u8 = 1;
    pub const SETTING_MAX: u8 = 10;
    pub const DEFAULT_BALL_SPEED: u8 = 5;
    pub const DEFAULT_AI_SPEED: u8 = 4;
}

/// Velocity vector pointing along `angle` (radians, y down) with length `speed`
#[inline]
pub fn velocity_from_angle(angle: f32, speed: f32) -> Vec2 {
    Vec2::new(speed * angle.cos(), speed * angle.sin())
}

/// Direction of travel of a velocity vector, in radians
#[inline]
pub fn heading(vel: Vec2) -> f32 {
    vel.y.atan2(vel.x)
}
