//! Game state and core simulation types
//!
//! Everything the gameplay screen mutates per frame lives in [`GameState`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::physics::velocity_from_angle;
use crate::consts::*;
use crate::settings::Settings;

/// Which side a paddle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    /// Left paddle, follows the mouse cursor
    One,
    /// Right paddle, driven by the Up/Down keys
    Two,
}

/// Ball state - each timed phase carries its own timer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BallState {
    /// Waiting at center before launch
    Serving { elapsed: f32 },
    /// In play; collisions and scoring are checked every frame
    Moving,
    /// A point was just scored; ball parked at center
    Scored { elapsed: f32 },
}

impl BallState {
    /// Fresh serve with the timer at zero
    pub const fn serving() -> Self {
        BallState::Serving { elapsed: 0.0 }
    }

    /// Fresh score pause with the timer at zero
    pub const fn scored() -> Self {
        BallState::Scored { elapsed: 0.0 }
    }

    /// Timer of the current phase (Moving has none)
    pub fn elapsed(&self) -> Option<f32> {
        match *self {
            BallState::Serving { elapsed } | BallState::Scored { elapsed } => Some(elapsed),
            BallState::Moving => None,
        }
    }
}

/// Something that happened during a frame, for logging and FX hooks
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Serve timer elapsed and the ball was launched (degrees)
    Served { angle: f32 },
    /// Ball bounced off the top or bottom edge
    WallBounce,
    /// Ball deflected off a paddle (degrees)
    PaddleHit { player: Player, angle: f32 },
    /// Ball left the field; `scorer` gets the point
    PointScored { scorer: Player },
    /// Score pause finished, serve timer restarted
    ServeReady,
}

/// A player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    /// Key-driven speed in units per second (unused for the mouse paddle)
    pub move_speed: f32,
    pub score: u32,
}

impl Paddle {
    pub fn new(pos: Vec2, move_speed: f32) -> Self {
        Self {
            pos,
            move_speed,
            score: 0,
        }
    }

    /// Bounding box for overlap tests
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT))
    }

    /// Lowest allowed y for the given screen height
    pub fn max_y(screen_height: f32) -> f32 {
        screen_height - PADDLE_HEIGHT
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Displacement per frame
    pub vel: Vec2,
}

impl Ball {
    /// Ball parked at the center of the screen
    pub fn centered(screen: Vec2) -> Self {
        Self {
            pos: screen * 0.5,
            vel: Vec2::ZERO,
        }
    }

    /// Move back to the center of the screen (velocity is left stale)
    pub fn recenter(&mut self, screen: Vec2) {
        self.pos = screen * 0.5;
    }

    /// Overwrite velocity with a `BALL_SPEED` vector at `angle` degrees
    pub fn set_velocity_from_angle(&mut self, angle: f32) {
        self.vel = velocity_from_angle(angle);
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::splat(BALL_SIZE))
    }
}

/// Phase durations, copied from settings at init
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchTiming {
    pub serve_duration: f32,
    pub score_duration: f32,
}

impl Default for MatchTiming {
    fn default() -> Self {
        Self {
            serve_duration: BALL_SERVE_DURATION,
            score_duration: BALL_SCORE_DURATION,
        }
    }
}

/// Complete gameplay state (serializable snapshot)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub player1: Paddle,
    pub player2: Paddle,
    pub ball: Ball,
    pub ball_state: BallState,
    pub timing: MatchTiming,
    /// Events from the latest update (drained by the screen)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Starting layout for a screen of the given size
    pub fn new(screen: Vec2, settings: &Settings) -> Self {
        let paddle_y = screen.y / 2.0 - PADDLE_HEIGHT / 2.0;

        Self {
            // Player 1 has no key speed; its y tracks the cursor
            player1: Paddle::new(Vec2::new(PADDLE_EDGE_OFFSET, paddle_y), 0.0),
            player2: Paddle::new(
                Vec2::new(screen.x - PADDLE_WIDTH - PADDLE_EDGE_OFFSET, paddle_y),
                settings.player2_move_speed,
            ),
            ball: Ball::centered(screen),
            ball_state: BallState::serving(),
            timing: MatchTiming {
                serve_duration: settings.serve_duration,
                score_duration: settings.score_duration,
            },
            events: Vec::new(),
        }
    }

    pub fn paddle(&self, player: Player) -> &Paddle {
        match player {
            Player::One => &self.player1,
            Player::Two => &self.player2,
        }
    }

    pub fn paddle_mut(&mut self, player: Player) -> &mut Paddle {
        match player {
            Player::One => &mut self.player1,
            Player::Two => &mut self.player2,
        }
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
