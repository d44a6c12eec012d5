use game_core::GameState;

/// Hold the arrow key that brings the player paddle under the ball
pub fn steer(state: &mut GameState) {
    let (left, right) = (state.config.key_left, state.config.key_right);
    let diff = state.ball.pos.x - state.player.paddle.center_x();

    state.key_up(left);
    state.key_up(right);
    if diff < -state.config.player_step {
        state.key_down(left);
    } else if diff > state.config.player_step {
        state.key_down(right);
    }
}
