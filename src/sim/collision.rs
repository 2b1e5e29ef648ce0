//! Collision detection against screen edges and paddles
//!
//! Everything here is axis-aligned: the ball and paddles are rectangles
//! anchored at their top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Ball, Player};
use crate::consts::{BALL_SIZE, OUT_OF_BOUNDS_MARGIN};

/// Axis-aligned rectangle (top-left anchored)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Strict AABB overlap; touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x + self.size.x > other.pos.x
            && self.pos.x < other.pos.x + other.size.x
            && self.pos.y + self.size.y > other.pos.y
            && self.pos.y < other.pos.y + other.size.y
    }
}

/// Bounce off the top or bottom edge. Returns true if the ball bounced.
///
/// The ball is pushed one unit inside the field so the same edge does not
/// trigger again next frame.
pub fn bounce_off_walls(ball: &mut Ball, screen_height: f32) -> bool {
    if ball.pos.y <= 0.0 {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = 1.0;
        true
    } else if ball.pos.y >= screen_height - BALL_SIZE {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = screen_height - BALL_SIZE - 1.0;
        true
    } else {
        false
    }
}

/// Player who earns a point if the ball has left the field sideways
pub fn out_of_bounds_scorer(ball: &Ball, screen_width: f32) -> Option<Player> {
    if ball.pos.x < BALL_SIZE - OUT_OF_BOUNDS_MARGIN {
        Some(Player::Two)
    } else if ball.pos.x > screen_width + OUT_OF_BOUNDS_MARGIN {
        Some(Player::One)
    } else {
        None
    }
}
