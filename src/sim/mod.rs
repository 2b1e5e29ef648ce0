//! Gameplay simulation module
//!
//! All gameplay logic lives here:
//! - Ball state machine (serve, play, score pause)
//! - Deflection physics
//! - Wall, out-of-bounds and paddle collisions
//!
//! Nothing in here draws or polls input directly.

pub mod collision;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::{Rect, bounce_off_walls, out_of_bounds_scorer};
pub use physics::{deflection_angle, velocity_from_angle};
pub use state::{Ball, BallState, GameEvent, GameState, MatchTiming, Paddle, Player};
pub use tick::{FrameInput, tick, update_ball, update_ball_movement, update_paddles};
