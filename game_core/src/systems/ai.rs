use glam::Vec2;

use crate::{Ball, Computer, Config};

/// Horizontal step the AI takes towards the ball this frame.
///
/// Offsets within the dead-zone pass through unchanged; anything beyond it is
/// replaced by a fixed step of `ai_step` in the same direction.
pub fn ai_offset(ball_x: f32, paddle_center_x: f32, config: &Config) -> f32 {
    let diff = ball_x - paddle_center_x;
    if diff < -config.ai_deadzone {
        -config.ai_step
    } else if diff > config.ai_deadzone {
        config.ai_step
    } else {
        diff
    }
}

/// Move the computer paddle towards the ball
pub fn update_computer(computer: &mut Computer, ball: &Ball, config: &Config) {
    let offset = ai_offset(ball.pos.x, computer.paddle.center_x(), config);
    computer.paddle.move_by(Vec2::new(offset, 0.0), config);

    // Position only; the recorded speed is left as the move set it
    computer.paddle.pos.x = config.clamp_paddle_x(computer.paddle.pos.x);
}
