use glam::Vec2;
use tracing::debug;

use crate::{Aabb, Ball, Config, Events, Paddle};

/// Reflect the ball off the left or right wall
pub fn bounce_off_walls(ball: &mut Ball, config: &Config, events: &mut Events) {
    if ball.pos.x - ball.radius < 0.0 {
        ball.pos.x = ball.radius;
        ball.vel.x = -ball.vel.x;
    } else if ball.pos.x + ball.radius > config.field_width {
        ball.pos.x = config.field_width - ball.radius;
        ball.vel.x = -ball.vel.x;
    } else {
        return;
    }

    events.ball_hit_wall = true;
    debug!(x = ball.pos.x, vx = ball.vel.x, "ball hit wall");
}

/// Deflect the ball off a paddle.
///
/// `edges` is the ball's box as it was right after this frame's move. Only one
/// paddle is tested per frame: the player's when the top edge is below the
/// midline, the computer's otherwise. A deflected ball takes half the
/// paddle's horizontal speed and moves once more along its new vertical speed.
pub fn check_paddle_hit(
    ball: &mut Ball,
    edges: Aabb,
    player_paddle: &Paddle,
    computer_paddle: &Paddle,
    config: &Config,
    events: &mut Events,
) {
    let (paddle, vy) = if edges.min.y > config.collision_midline {
        (player_paddle, -config.ball_speed)
    } else {
        (computer_paddle, config.ball_speed)
    };

    if !edges.overlaps(&paddle.bounds()) {
        return;
    }

    ball.vel = Vec2::new(ball.vel.x + paddle.vel.x / 2.0, vy);
    ball.pos.y += ball.vel.y;

    events.ball_hit_paddle = true;
    debug!(vx = ball.vel.x, vy = ball.vel.y, "ball hit paddle");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Computer, Player};

    fn setup() -> (Player, Computer, Config, Events) {
        let config = Config::new();
        (
            Player::new(&config),
            Computer::new(&config),
            config,
            Events::new(),
        )
    }

    #[test]
    fn test_ball_bounces_off_left_wall() {
        let (_, _, config, mut events) = setup();
        let mut ball = Ball::new(Vec2::new(3.0, 200.0), Vec2::new(-2.0, 3.0), 5.0);

        bounce_off_walls(&mut ball, &config, &mut events);

        assert_eq!(ball.pos.x, 5.0);
        assert_eq!(ball.vel.x, 2.0);
        assert_eq!(ball.vel.y, 3.0, "Y velocity should be unchanged");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_right_wall() {
        let (_, _, config, mut events) = setup();
        let mut ball = Ball::new(Vec2::new(398.0, 200.0), Vec2::new(2.0, -3.0), 5.0);

        bounce_off_walls(&mut ball, &config, &mut events);

        assert_eq!(ball.pos.x, 395.0);
        assert_eq!(ball.vel.x, -2.0);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_no_bounce_in_open_field() {
        let (_, _, config, mut events) = setup();
        let mut ball = Ball::new(Vec2::new(5.0, 200.0), Vec2::new(-2.0, 3.0), 5.0);
        let before = ball;

        bounce_off_walls(&mut ball, &config, &mut events);

        assert_eq!(ball, before, "Touching the wall exactly is not a bounce");
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_player_paddle_transfers_half_speed() {
        let (mut player, computer, config, mut events) = setup();
        player.paddle.vel.x = 4.0;
        let mut ball = Ball::new(Vec2::new(200.0, 580.0), Vec2::new(1.0, 3.0), 5.0);
        let edges = ball.bounds();

        check_paddle_hit(
            &mut ball,
            edges,
            &player.paddle,
            &computer.paddle,
            &config,
            &mut events,
        );

        assert_eq!(ball.vel, Vec2::new(3.0, -3.0));
        assert_eq!(ball.pos.y, 577.0, "Bounce frame steps the ball again");
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_computer_paddle_sends_ball_down() {
        let (player, mut computer, config, mut events) = setup();
        computer.paddle.vel.x = -5.0;
        let mut ball = Ball::new(Vec2::new(180.0, 22.0), Vec2::new(0.0, -3.0), 5.0);
        let edges = ball.bounds();

        check_paddle_hit(
            &mut ball,
            edges,
            &player.paddle,
            &computer.paddle,
            &config,
            &mut events,
        );

        assert_eq!(ball.vel, Vec2::new(-2.5, 3.0));
        assert_eq!(ball.pos.y, 25.0);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_miss_leaves_ball_alone() {
        let (player, computer, config, mut events) = setup();
        let mut ball = Ball::new(Vec2::new(20.0, 580.0), Vec2::new(0.0, 3.0), 5.0);
        let before = ball;
        let edges = ball.bounds();

        check_paddle_hit(
            &mut ball,
            edges,
            &player.paddle,
            &computer.paddle,
            &config,
            &mut events,
        );

        assert_eq!(ball, before);
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_top_half_only_checks_computer_paddle() {
        let (mut player, computer, config, mut events) = setup();
        // Player paddle dragged into the top half still cannot deflect
        player.paddle.pos.y = 100.0;
        let mut ball = Ball::new(Vec2::new(200.0, 100.0), Vec2::new(0.0, 3.0), 5.0);
        let before = ball;
        let edges = ball.bounds();

        check_paddle_hit(
            &mut ball,
            edges,
            &player.paddle,
            &computer.paddle,
            &config,
            &mut events,
        );

        assert_eq!(ball, before);
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_edge_touch_is_not_a_hit() {
        let (player, computer, config, mut events) = setup();
        // Ball bottom edge exactly on the paddle's top edge
        let mut ball = Ball::new(Vec2::new(200.0, 575.0), Vec2::new(0.0, 3.0), 5.0);
        let edges = ball.bounds();

        check_paddle_hit(
            &mut ball,
            edges,
            &player.paddle,
            &computer.paddle,
            &config,
            &mut events,
        );

        assert_eq!(ball.vel.y, 3.0);
        assert!(!events.ball_hit_paddle);
    }
}
