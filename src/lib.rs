//! Paddle Pong - two-paddle gameplay core
//!
//! Core modules:
//! - `sim`: Ball state machine, deflection physics, collisions and scoring
//! - `platform`: Input/timing/randomness/rendering seams the core consumes
//! - `screen`: Gameplay screen lifecycle (init/update/draw/unload)
//! - `settings`: JSON-backed tunables

pub mod platform;
pub mod screen;
pub mod settings;
pub mod sim;

pub use screen::GameplayScreen;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Paddle dimensions
    pub const PADDLE_WIDTH: f32 = 16.0;
    pub const PADDLE_HEIGHT: f32 = 64.0;
    /// Distance between each paddle and its screen edge
    pub const PADDLE_EDGE_OFFSET: f32 = 20.0;
    /// Key-driven paddle speed (units per second)
    pub const PADDLE_MOVE_SPEED: f32 = 250.0;

    /// Ball is a square of this side length
    pub const BALL_SIZE: f32 = 16.0;
    /// Ball speed (units per frame)
    pub const BALL_SPEED: f32 = 4.0;
    /// How far past a side edge the ball travels before a point is scored
    pub const OUT_OF_BOUNDS_MARGIN: f32 = 20.0;

    /// Pause before the ball is served (seconds)
    pub const BALL_SERVE_DURATION: f32 = 2.0;
    /// Pause after a point before the next serve (seconds)
    pub const BALL_SCORE_DURATION: f32 = 2.0;

    /// Maximum deflection angle off a paddle (degrees)
    pub const MAX_DEFLECT_ANGLE: f32 = 70.0;
    /// Serve angle range (degrees, inclusive)
    pub const SERVE_ANGLE_RANGE: i32 = 45;
}

/// Linear interpolation, unclamped: `t` outside [0, 1] extrapolates
#[inline]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + t * (end - start)
}

/// Clamp that never panics when `min > max` (tiny windows); `max` wins
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    let value = if value < min { min } else { value };
    if value > max { max } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_extrapolates() {
        assert_eq!(lerp(-70.0, 70.0, 0.0), -70.0);
        assert_eq!(lerp(-70.0, 70.0, 0.5), 0.0);
        assert_eq!(lerp(-70.0, 70.0, 1.0), 70.0);
        assert_eq!(lerp(-70.0, 70.0, 1.5), 140.0);
        assert_eq!(lerp(-70.0, 70.0, -0.25), -105.0);
    }

    #[test]
    fn test_clamp_inverted_range() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
        // Window shorter than a paddle
        assert_eq!(clamp(3.0, 0.0, -14.0), -14.0);
    }
}
