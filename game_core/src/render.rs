//! Drawing port and the draw calls each entity makes through it

use glam::Vec2;
use thiserror::Error;

use crate::{Ball, Computer, Paddle, Player};

/// Fill colour as 8-bit RGB
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BACKGROUND: Color = Color::rgb(0xA9, 0xF9, 0xE3);
    pub const PADDLE: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const BALL: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const SCORE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `#a9f9e3`
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Failure reported by a drawing surface
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("drawing surface rejected {op}: {reason}")]
    Surface { op: &'static str, reason: String },
}

/// A 2D surface the game draws on
pub trait Surface {
    /// Called once before each frame's draw calls
    fn begin_frame(&mut self) {}

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) -> Result<(), RenderError>;
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color)
        -> Result<(), RenderError>;
    fn fill_text(
        &mut self,
        text: &str,
        pos: Vec2,
        size_px: f32,
        color: Color,
    ) -> Result<(), RenderError>;
}

/// Anything that knows how to draw itself on a [`Surface`]
pub trait Drawable {
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), RenderError>;
}

impl Drawable for Paddle {
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        surface.fill_rect(self.pos, self.size, Color::PADDLE)
    }
}

impl Drawable for Ball {
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        surface.fill_circle(self.pos, self.radius, Color::BALL)
    }
}

impl Drawable for Player {
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        self.paddle.draw(surface)
    }
}

impl Drawable for Computer {
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        self.paddle.draw(surface)
    }
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect { pos: Vec2, size: Vec2, color: Color },
    Circle { center: Vec2, radius: f32, color: Color },
    Text { text: String, pos: Vec2, size_px: f32, color: Color },
}

/// Headless surface that keeps the draw calls of the latest frame
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    pub frames: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn begin_frame(&mut self) {
        self.commands.clear();
        self.frames += 1;
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Rect { pos, size, color });
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        color: Color,
    ) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        pos: Vec2,
        size_px: f32,
        color: Color,
    ) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            size_px,
            color,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[test]
    fn test_color_to_css() {
        assert_eq!(Color::BACKGROUND.to_css(), "#a9f9e3");
        assert_eq!(Color::SCORE.to_css(), "#ffffff");
    }

    #[test]
    fn test_player_draws_its_paddle() {
        let config = Config::new();
        let player = Player::new(&config);
        let mut surface = RecordingSurface::new();

        player.draw(&mut surface).unwrap();

        assert_eq!(
            surface.commands,
            vec![DrawCommand::Rect {
                pos: Vec2::new(175.0, 580.0),
                size: Vec2::new(50.0, 10.0),
                color: Color::PADDLE,
            }]
        );
    }

    #[test]
    fn test_ball_draws_circle() {
        let config = Config::new();
        let ball = Ball::serve(&config);
        let mut surface = RecordingSurface::new();

        ball.draw(&mut surface).unwrap();

        assert_eq!(
            surface.commands,
            vec![DrawCommand::Circle {
                center: Vec2::new(200.0, 300.0),
                radius: 5.0,
                color: Color::BALL,
            }]
        );
    }

    #[test]
    fn test_begin_frame_drops_old_commands() {
        let mut surface = RecordingSurface::new();
        surface
            .fill_text("3", Vec2::new(175.0, 400.0), 75.0, Color::SCORE)
            .unwrap();
        surface.begin_frame();
        assert!(surface.commands.is_empty());
        assert_eq!(surface.frames, 1);
    }
}
