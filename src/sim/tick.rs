//! Per-frame simulation step
//!
//! Order within a frame is fixed: paddles follow input first, then the ball
//! state machine advances. Drawing happens afterwards, outside this module.

use glam::Vec2;

use super::collision::{bounce_off_walls, out_of_bounds_scorer};
use super::physics::deflection_angle;
use super::state::{BallState, GameEvent, GameState, Paddle, Player};
use crate::clamp;
use crate::consts::*;
use crate::platform::{Key, Platform, RandomSource};

/// Input and screen metrics for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Current screen size (queried every frame; the window may resize)
    pub screen: Vec2,
    /// Seconds since the previous frame
    pub dt: f32,
    /// Cursor position, `None` when the cursor is off the play area
    pub cursor: Option<Vec2>,
    /// Player 2 up key held
    pub up: bool,
    /// Player 2 down key held
    pub down: bool,
}

impl FrameInput {
    /// Snapshot everything the simulation needs from the platform
    pub fn poll(platform: &dyn Platform) -> Self {
        let cursor = platform
            .is_cursor_on_screen()
            .then(|| platform.mouse_position());

        Self {
            screen: platform.screen_size(),
            dt: platform.frame_time(),
            cursor,
            up: platform.is_key_down(Key::Up),
            down: platform.is_key_down(Key::Down),
        }
    }
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &FrameInput, rng: &mut dyn RandomSource) {
    update_paddles(state, input);
    update_ball(state, input, rng);
}

/// Move both paddles from this frame's input
pub fn update_paddles(state: &mut GameState, input: &FrameInput) {
    let max_y = Paddle::max_y(input.screen.y);

    if let Some(cursor) = input.cursor {
        state.player1.pos.y = clamp(cursor.y - PADDLE_HEIGHT / 2.0, 0.0, max_y);
    }

    // Up wins when both keys are held
    let player2 = &mut state.player2;
    if input.up {
        player2.pos.y -= player2.move_speed * input.dt;
        if player2.pos.y < 0.0 {
            player2.pos.y = 0.0;
        }
    } else if input.down {
        player2.pos.y += player2.move_speed * input.dt;
        if player2.pos.y > max_y {
            player2.pos.y = max_y;
        }
    }
}

/// Advance the ball state machine
pub fn update_ball(state: &mut GameState, input: &FrameInput, rng: &mut dyn RandomSource) {
    match state.ball_state {
        BallState::Serving { elapsed } => {
            let elapsed = elapsed + input.dt;

            if elapsed >= state.timing.serve_duration {
                let angle = serve_angle(rng);
                state.ball.set_velocity_from_angle(angle);
                state.ball_state = BallState::Moving;
                state.events.push(GameEvent::Served { angle });
            } else {
                state.ball_state = BallState::Serving { elapsed };
            }
        }

        BallState::Moving => update_ball_movement(state, input.screen),

        BallState::Scored { elapsed } => {
            let elapsed = elapsed + input.dt;

            if elapsed >= state.timing.score_duration {
                state.ball_state = BallState::serving();
                state.events.push(GameEvent::ServeReady);
            } else {
                state.ball_state = BallState::Scored { elapsed };
            }
        }
    }
}

/// Random serve direction: within ±45° of horizontal, toward either side
fn serve_angle(rng: &mut dyn RandomSource) -> f32 {
    let mut angle = rng.random_value(-SERVE_ANGLE_RANGE, SERVE_ANGLE_RANGE) as f32;
    if rng.random_value(0, 99) >= 50 {
        angle += 180.0;
    }
    angle
}

/// Move the ball and resolve walls, scoring and paddle hits
///
/// Both paddle checks always run. If a fast ball overlaps both paddles in
/// the same frame, Player 2's response overwrites Player 1's.
pub fn update_ball_movement(state: &mut GameState, screen: Vec2) {
    let ball = &mut state.ball;
    ball.pos += ball.vel;

    if bounce_off_walls(ball, screen.y) {
        state.events.push(GameEvent::WallBounce);
    }

    if let Some(scorer) = out_of_bounds_scorer(&state.ball, screen.x) {
        state.paddle_mut(scorer).score += 1;
        state.ball.recenter(screen);
        state.ball_state = BallState::scored();
        state.events.push(GameEvent::PointScored { scorer });
    }

    for player in [Player::One, Player::Two] {
        let paddle = state.paddle(player);
        if !state.ball.rect().overlaps(&paddle.rect()) {
            continue;
        }

        let angle = deflection_angle(paddle, &state.ball);
        // Push the ball just clear of the paddle face it hit
        let x = match player {
            Player::One => paddle.pos.x + PADDLE_WIDTH + 1.0,
            Player::Two => paddle.pos.x - BALL_SIZE - 1.0,
        };

        state.ball.set_velocity_from_angle(angle);
        state.ball.pos.x = x;
        state.events.push(GameEvent::PaddleHit { player, angle });
    }
}
