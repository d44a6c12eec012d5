use glam::Vec2;

use crate::{Config, Paddle};

/// The human side: bottom paddle, driven by the keyboard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub paddle: Paddle,
    pub score: u32,
}

impl Player {
    pub fn new(config: &Config) -> Self {
        Self {
            paddle: Paddle::new(
                config.player_paddle_spawn(),
                Vec2::new(config.paddle_width, config.paddle_height),
            ),
            score: 0,
        }
    }
}

/// The AI side: top paddle, tracks the ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Computer {
    pub paddle: Paddle,
    pub score: u32,
}

impl Computer {
    pub fn new(config: &Config) -> Self {
        Self {
            paddle: Paddle::new(
                config.computer_paddle_spawn(),
                Vec2::new(config.paddle_width, config.paddle_height),
            ),
            score: 0,
        }
    }
}
