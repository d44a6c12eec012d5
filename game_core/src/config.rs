use glam::Vec2;

use crate::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub collision_midline: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub player_step: f32,
    pub ai_deadzone: f32,
    pub ai_step: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub key_left: u32,
    pub key_right: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            collision_midline: Params::COLLISION_MIDLINE,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            player_step: Params::PLAYER_STEP,
            ai_deadzone: Params::AI_DEADZONE,
            ai_step: Params::AI_STEP,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            key_left: Params::KEY_LEFT,
            key_right: Params::KEY_RIGHT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-left corner of the paddle at the bottom of the field
    pub fn player_paddle_spawn(&self) -> Vec2 {
        Vec2::new(Params::PLAYER_PADDLE_X, Params::PLAYER_PADDLE_Y)
    }

    /// Top-left corner of the paddle at the top of the field
    pub fn computer_paddle_spawn(&self) -> Vec2 {
        Vec2::new(Params::COMPUTER_PADDLE_X, Params::COMPUTER_PADDLE_Y)
    }

    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(Params::BALL_SPAWN_X, Params::BALL_SPAWN_Y)
    }

    /// Largest x a paddle's left edge may take
    pub fn max_paddle_x(&self) -> f32 {
        self.field_width - self.paddle_width
    }

    /// Clamp paddle X to field bounds
    pub fn clamp_paddle_x(&self, x: f32) -> f32 {
        x.clamp(0.0, self.max_paddle_x())
    }
}
