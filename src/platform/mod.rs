//! Platform abstraction layer
//!
//! The gameplay core never talks to a window directly. It consumes:
//! - Screen metrics and frame timing
//! - Mouse/keyboard state
//! - A source of random integers
//! - A canvas to draw rectangles and text on

pub mod headless;
pub mod random;

pub use headless::{HeadlessPlatform, NullCanvas};
#[cfg(test)]
pub(crate) use random::ScriptedRandom;
pub use random::{RandomSource, SeededRandom};

use glam::Vec2;

/// Keys the gameplay screen reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
}

/// Window, timing and input queries
///
/// Every method is a live query; callers must not cache the answers across
/// frames since the window can be resized at any time.
pub trait Platform {
    fn screen_width(&self) -> f32;
    fn screen_height(&self) -> f32;

    /// Seconds elapsed since the previous frame
    fn frame_time(&self) -> f32;

    fn mouse_position(&self) -> Vec2;
    fn is_cursor_on_screen(&self) -> bool;
    fn is_key_down(&self, key: Key) -> bool;

    fn screen_size(&self) -> Vec2 {
        Vec2::new(self.screen_width(), self.screen_height())
    }
}

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(130, 130, 130);
    pub const DARKGRAY: Color = Color::rgb(80, 80, 80);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Immediate-mode drawing surface (integer pixel coordinates)
pub trait Canvas {
    fn screen_width(&self) -> i32;
    fn screen_height(&self) -> i32;

    fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);
    fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: i32, color: Color);
}
