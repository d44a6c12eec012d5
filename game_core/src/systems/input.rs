use glam::Vec2;

use crate::{Config, KeysHeld, Player};

/// Turn held keys into paddle moves.
///
/// Every held key produces one move, in ascending key-code order. Keys other
/// than left/right still issue a zero move, so holding an extra key after an
/// arrow resets the paddle's recorded speed.
pub fn update_player(player: &mut Player, keys: &KeysHeld, config: &Config) {
    for code in keys.iter() {
        let delta = if code == config.key_left {
            Vec2::new(-config.player_step, 0.0)
        } else if code == config.key_right {
            Vec2::new(config.player_step, 0.0)
        } else {
            Vec2::ZERO
        };
        player.paddle.move_by(delta, config);
    }
}
