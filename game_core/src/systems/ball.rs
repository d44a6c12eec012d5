use crate::{Ball, Computer, Config, Events, Player};

use super::{bounce_off_walls, check_paddle_hit, check_scoring, move_ball};

/// Run one frame of ball physics: move, walls, scoring, then paddles.
///
/// The paddle test uses the ball's box from straight after the move, before
/// any wall clamp or reset moved it.
pub fn update_ball(
    ball: &mut Ball,
    player: &mut Player,
    computer: &mut Computer,
    config: &Config,
    events: &mut Events,
) {
    move_ball(ball);
    let edges = ball.bounds();

    bounce_off_walls(ball, config, events);
    check_scoring(ball, player, computer, config, events);
    check_paddle_hit(
        ball,
        edges,
        &player.paddle,
        &computer.paddle,
        config,
        events,
    );
}
