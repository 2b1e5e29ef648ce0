//! Gameplay screen lifecycle
//!
//! The outer application owns a [`GameplayScreen`] and calls, once per frame,
//! [`GameplayScreen::update`] then [`GameplayScreen::draw`]. It polls
//! [`GameplayScreen::finish`] to know when to switch screens.

use crate::consts::{BALL_SIZE, PADDLE_HEIGHT, PADDLE_WIDTH};
use crate::platform::{Canvas, Color, Platform, RandomSource, SeededRandom};
use crate::settings::Settings;
use crate::sim::{FrameInput, GameEvent, GameState, Paddle, tick};

/// Score text placement
const SCORE_TEXT_Y: i32 = 20;
const SCORE_FONT_SIZE: i32 = 40;

/// The in-match screen: two paddles, one ball, two scores
pub struct GameplayScreen {
    state: GameState,
    rng: Box<dyn RandomSource>,
    frames_counter: u64,
    finish_screen: bool,
}

impl GameplayScreen {
    /// Lay out paddles and ball for the current screen size
    pub fn init(platform: &dyn Platform, settings: &Settings) -> Self {
        let rng = match settings.seed {
            Some(seed) => {
                log::info!("Gameplay seeded with {}", seed);
                SeededRandom::new(seed)
            }
            None => SeededRandom::from_entropy(),
        };
        Self::with_random(platform, settings, Box::new(rng))
    }

    /// Like [`init`](Self::init) with a caller-supplied random source
    pub fn with_random(
        platform: &dyn Platform,
        settings: &Settings,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let screen = platform.screen_size();
        log::info!("Gameplay screen init ({}x{})", screen.x, screen.y);

        Self {
            state: GameState::new(screen, settings),
            rng,
            frames_counter: 0,
            finish_screen: false,
        }
    }

    /// Advance one frame: paddles from input, then the ball
    ///
    /// Returns the events that happened this frame.
    pub fn update(&mut self, platform: &dyn Platform) -> Vec<GameEvent> {
        let input = FrameInput::poll(platform);
        tick(&mut self.state, &input, self.rng.as_mut());
        self.frames_counter += 1;

        let events = self.state.drain_events();
        for event in &events {
            match event {
                GameEvent::PointScored { scorer } => log::info!(
                    "{:?} scores ({} - {})",
                    scorer,
                    self.state.player1.score,
                    self.state.player2.score
                ),
                other => log::debug!("frame {}: {:?}", self.frames_counter, other),
            }
        }
        events
    }

    /// Render the current frame. Never mutates game state.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let (width, height) = (canvas.screen_width(), canvas.screen_height());
        canvas.draw_rectangle(0, 0, width, height, Color::DARKGRAY);

        draw_paddle_and_score(canvas, &self.state.player1);
        draw_paddle_and_score(canvas, &self.state.player2);

        let ball = &self.state.ball;
        canvas.draw_rectangle(
            ball.pos.x as i32,
            ball.pos.y as i32,
            BALL_SIZE as i32,
            BALL_SIZE as i32,
            Color::WHITE,
        );
    }

    /// Release screen resources (only process memory is held)
    pub fn unload(&mut self) {
        log::info!(
            "Gameplay screen unload after {} frames ({} - {})",
            self.frames_counter,
            self.state.player1.score,
            self.state.player2.score
        );
    }

    /// Whether this screen wants control transferred elsewhere
    pub fn finish(&self) -> bool {
        self.finish_screen
    }

    /// Ask the outer application to leave this screen
    ///
    /// Nothing inside the gameplay screen calls this; the integrating
    /// application decides what ends a match.
    pub fn request_finish(&mut self) {
        self.finish_screen = true;
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames_counter
    }
}

fn draw_paddle_and_score(canvas: &mut dyn Canvas, paddle: &Paddle) {
    let x = paddle.pos.x as i32;
    canvas.draw_rectangle(
        x,
        paddle.pos.y as i32,
        PADDLE_WIDTH as i32,
        PADDLE_HEIGHT as i32,
        Color::WHITE,
    );
    canvas.draw_text(
        &paddle.score.to_string(),
        x,
        SCORE_TEXT_Y,
        SCORE_FONT_SIZE,
        Color::GRAY,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{HeadlessPlatform, ScriptedRandom};
    use crate::sim::{BallState, Player};
    use glam::Vec2;

    #[derive(Debug, Clone, PartialEq)]
    enum DrawOp {
        Rect(i32, i32, i32, i32, Color),
        Text(String, i32, i32, i32, Color),
    }

    struct RecordingCanvas {
        width: i32,
        height: i32,
        ops: Vec<DrawOp>,
    }

    impl Canvas for RecordingCanvas {
        fn screen_width(&self) -> i32 {
            self.width
        }

        fn screen_height(&self) -> i32 {
            self.height
        }

        fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
            self.ops.push(DrawOp::Rect(x, y, width, height, color));
        }

        fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: i32, color: Color) {
            self.ops
                .push(DrawOp::Text(text.to_string(), x, y, font_size, color));
        }
    }

    fn screen_with(values: &[i32]) -> (HeadlessPlatform, GameplayScreen) {
        let platform = HeadlessPlatform::new(800.0, 450.0, 60);
        let screen = GameplayScreen::with_random(
            &platform,
            &Settings::default(),
            Box::new(ScriptedRandom::new(values)),
        );
        (platform, screen)
    }

    #[test]
    fn test_draw_order_and_scores() {
        let (_, mut screen) = screen_with(&[]);
        screen.state_mut().player2.score = 12;
        let mut canvas = RecordingCanvas {
            width: 800,
            height: 450,
            ops: Vec::new(),
        };

        screen.draw(&mut canvas);

        assert_eq!(
            canvas.ops,
            vec![
                DrawOp::Rect(0, 0, 800, 450, Color::DARKGRAY),
                DrawOp::Rect(20, 193, 16, 64, Color::WHITE),
                DrawOp::Text("0".into(), 20, 20, 40, Color::GRAY),
                DrawOp::Rect(764, 193, 16, 64, Color::WHITE),
                DrawOp::Text("12".into(), 764, 20, 40, Color::GRAY),
                DrawOp::Rect(400, 225, 16, 16, Color::WHITE),
            ]
        );
    }

    #[test]
    fn test_draw_does_not_mutate_state() {
        let (mut platform, mut screen) = screen_with(&[10, 80]);
        platform.cursor = Some(Vec2::new(30.0, 100.0));
        for _ in 0..150 {
            screen.update(&platform);
        }

        let before = serde_json::to_string(screen.state()).unwrap();
        let mut canvas = RecordingCanvas {
            width: 800,
            height: 450,
            ops: Vec::new(),
        };
        screen.draw(&mut canvas);
        screen.draw(&mut canvas);
        let after = serde_json::to_string(screen.state()).unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn test_update_serves_after_two_seconds() {
        let (platform, mut screen) = screen_with(&[0, 0]);

        let mut served = None;
        for _ in 0..125 {
            for event in screen.update(&platform) {
                if let GameEvent::Served { angle } = event {
                    served = Some(angle);
                }
            }
        }

        assert_eq!(served, Some(0.0));
        assert_eq!(screen.state().ball_state, BallState::Moving);
        assert!((screen.state().ball.vel.length() - 4.0).abs() < 1e-5);
        assert_eq!(screen.frames(), 125);
    }

    #[test]
    fn test_unanswered_serve_scores() {
        // Straight serve toward Player 1, who is parked out of the way
        let (mut platform, mut screen) = screen_with(&[0, 99]);
        platform.cursor = Some(Vec2::new(10.0, 0.0));

        let mut scorer = None;
        for _ in 0..600 {
            for event in screen.update(&platform) {
                if let GameEvent::PointScored { scorer: who } = event {
                    scorer.get_or_insert(who);
                }
            }
        }

        assert_eq!(scorer, Some(Player::Two));
        assert!(screen.state().player2.score >= 1);
        assert_eq!(screen.state().player1.score, 0);
    }

    #[test]
    fn test_paddles_follow_input_before_ball() {
        let (mut platform, mut screen) = screen_with(&[]);
        platform.cursor = Some(Vec2::new(30.0, 300.0));
        platform.up = true;

        screen.update(&platform);

        assert_eq!(screen.state().player1.pos.y, 268.0);
        assert!(screen.state().player2.pos.y < 193.0);
    }

    #[test]
    fn test_finish_hook() {
        let (_, mut screen) = screen_with(&[]);
        assert!(!screen.finish());
        screen.request_finish();
        assert!(screen.finish());
        screen.unload();
    }
}
