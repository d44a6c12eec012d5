use glam::Vec2;

use crate::{Aabb, Config};

/// Paddle component - a rectangle confined to horizontal movement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,  // Top-left corner
    pub size: Vec2, // Width, height
    pub vel: Vec2,  // Last applied move, per frame
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
        }
    }

    /// Move by `delta`, record it as the paddle's speed, then keep the paddle
    /// inside the field. Hitting either side wall cancels the horizontal speed.
    pub fn move_by(&mut self, delta: Vec2, config: &Config) {
        self.pos += delta;
        self.vel = delta;

        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            self.vel.x = 0.0;
        } else if self.pos.x + self.size.x > config.field_width {
            self.pos.x = config.field_width - self.size.x;
            self.vel.x = 0.0;
        }
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_corner_size(self.pos, self.size)
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Ball at the centre spot, served towards the player
    pub fn serve(config: &Config) -> Self {
        Self::new(
            config.ball_spawn(),
            Vec2::new(0.0, config.ball_speed),
            config.ball_radius,
        )
    }

    /// Reset ball to the centre spot with the serve velocity
    pub fn reset(&mut self, config: &Config) {
        self.pos = config.ball_spawn();
        self.vel = Vec2::new(0.0, config.ball_speed);
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_circle(self.pos, self.radius)
    }
}
