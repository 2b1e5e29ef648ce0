//! Window-less platform for the native runner and tests
//!
//! Frames advance at a fixed rate and input is whatever the caller sets.

use glam::Vec2;

use super::{Canvas, Color, Key, Platform};

/// Fixed-timestep platform with scriptable input
#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    pub size: Vec2,
    pub frame_time: f32,
    /// Cursor position, `None` while the cursor is off the window
    pub cursor: Option<Vec2>,
    pub up: bool,
    pub down: bool,
}

impl HeadlessPlatform {
    pub fn new(width: f32, height: f32, fps: u32) -> Self {
        Self {
            size: Vec2::new(width, height),
            frame_time: 1.0 / fps.max(1) as f32,
            cursor: None,
            up: false,
            down: false,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }
}

impl Platform for HeadlessPlatform {
    fn screen_width(&self) -> f32 {
        self.size.x
    }

    fn screen_height(&self) -> f32 {
        self.size.y
    }

    fn frame_time(&self) -> f32 {
        self.frame_time
    }

    fn mouse_position(&self) -> Vec2 {
        self.cursor.unwrap_or(Vec2::ZERO)
    }

    fn is_cursor_on_screen(&self) -> bool {
        self.cursor.is_some()
    }

    fn is_key_down(&self, key: Key) -> bool {
        match key {
            Key::Up => self.up,
            Key::Down => self.down,
        }
    }
}

/// Canvas that discards everything but counts draw calls
#[derive(Debug, Clone, Default)]
pub struct NullCanvas {
    pub width: i32,
    pub height: i32,
    pub draw_calls: usize,
}

impl NullCanvas {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            draw_calls: 0,
        }
    }
}

impl Canvas for NullCanvas {
    fn screen_width(&self) -> i32 {
        self.width
    }

    fn screen_height(&self) -> i32 {
        self.height
    }

    fn draw_rectangle(&mut self, _x: i32, _y: i32, _width: i32, _height: i32, _color: Color) {
        self.draw_calls += 1;
    }

    fn draw_text(&mut self, _text: &str, _x: i32, _y: i32, _font_size: i32, _color: Color) {
        self.draw_calls += 1;
    }
}
