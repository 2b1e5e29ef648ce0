//! Paddle Pong headless runner
//!
//! Plays the gameplay screen without a window for a fixed number of seconds
//! and reports the final score. Useful for soak-testing the simulation.
//!
//! Usage: `paddle-pong [settings.json] [seconds]`

use std::path::PathBuf;

use paddle_pong::platform::{HeadlessPlatform, NullCanvas};
use paddle_pong::{GameplayScreen, Settings};

const SCREEN_WIDTH: f32 = 800.0;
const SCREEN_HEIGHT: f32 = 450.0;
const TARGET_FPS: u32 = 60;
const DEFAULT_SECONDS: u32 = 30;

fn main() {
    env_logger::init();
    log::info!("Paddle Pong (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings_path = args.next().map(PathBuf::from);
    let seconds = args
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(DEFAULT_SECONDS);

    let settings = Settings::load(settings_path.as_deref());
    let platform = HeadlessPlatform::new(SCREEN_WIDTH, SCREEN_HEIGHT, TARGET_FPS);
    let mut canvas = NullCanvas::new(SCREEN_WIDTH as i32, SCREEN_HEIGHT as i32);

    let mut screen = GameplayScreen::init(&platform, &settings);
    for _ in 0..seconds.saturating_mul(TARGET_FPS) {
        screen.update(&platform);
        screen.draw(&mut canvas);
        if screen.finish() {
            break;
        }
    }

    let state = screen.state();
    println!(
        "After {} frames: Player 1 {} - {} Player 2",
        screen.frames(),
        state.player1.score,
        state.player2.score
    );
    log::debug!("{} draw calls issued", canvas.draw_calls);
    screen.unload();
}
