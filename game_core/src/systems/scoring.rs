use tracing::info;

use crate::{Ball, Computer, Config, Events, Player};

/// Check if the ball left the field through the top or bottom
pub fn check_scoring(
    ball: &mut Ball,
    player: &mut Player,
    computer: &mut Computer,
    config: &Config,
    events: &mut Events,
) {
    if ball.pos.y < 0.0 {
        // Past the computer: player scores
        ball.reset(config);
        player.score += 1;
        events.player_scored = true;
        info!(
            player = player.score,
            computer = computer.score,
            "player scored"
        );
    }
    if ball.pos.y > config.field_height {
        // Past the player: computer scores
        ball.reset(config);
        computer.score += 1;
        events.computer_scored = true;
        info!(
            player = player.score,
            computer = computer.score,
            "computer scored"
        );
    }
}
