//! Deflection physics
//!
//! Where the ball meets the paddle decides where it goes next: the top edge
//! sends it up at -70°, the bottom edge down at +70°, linearly in between.

use glam::Vec2;

use super::state::{Ball, Paddle};
use crate::consts::{BALL_SPEED, MAX_DEFLECT_ANGLE, PADDLE_HEIGHT};
use crate::lerp;

/// Deflection angle (degrees) for the ball leaving `paddle`
///
/// Not clamped: a ball whose top edge is above the paddle or below its
/// bottom edge extrapolates past ±70°. Balls to the left of the paddle are
/// mirrored (`180 - angle`) so they head back left.
pub fn deflection_angle(paddle: &Paddle, ball: &Ball) -> f32 {
    let relative = (ball.pos.y - paddle.pos.y) / PADDLE_HEIGHT;
    let angle = lerp(-MAX_DEFLECT_ANGLE, MAX_DEFLECT_ANGLE, relative);

    if ball.pos.x < paddle.pos.x {
        180.0 - angle
    } else {
        angle
    }
}

/// Velocity of length `BALL_SPEED` pointing at `angle` degrees (y down)
#[inline]
pub fn velocity_from_angle(angle: f32) -> Vec2 {
    let rad = angle.to_radians();
    Vec2::new(rad.cos(), rad.sin()) * BALL_SPEED
}
