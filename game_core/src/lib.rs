pub mod bounds;
pub mod components;
pub mod config;
pub mod controllers;
pub mod game_loop;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use bounds::*;
pub use components::*;
pub use config::*;
pub use controllers::*;
pub use game_loop::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use glam::Vec2;
use systems::*;

/// Advance the simulation by one frame
pub fn update_frame(state: &mut GameState) {
    // Clear events at start of frame
    state.events.clear();

    // 1. Player paddle from held keys
    update_player(&mut state.player, &state.keys, &state.config);

    // 2. Computer paddle tracks the ball
    update_computer(&mut state.computer, &state.ball, &state.config);

    // 3. Ball: move, walls, scoring, paddles
    update_ball(
        &mut state.ball,
        &mut state.player,
        &mut state.computer,
        &state.config,
        &mut state.events,
    );

    state.frame += 1;
}

/// Draw the current frame: field, scores, paddles, ball
pub fn render_frame(state: &GameState, surface: &mut dyn Surface) -> Result<(), RenderError> {
    let config = &state.config;
    surface.begin_frame();

    surface.fill_rect(
        Vec2::ZERO,
        Vec2::new(config.field_width, config.field_height),
        Color::BACKGROUND,
    )?;

    draw_score(surface, state.player.score, Params::PLAYER_SCORE_Y)?;
    draw_score(surface, state.computer.score, Params::COMPUTER_SCORE_Y)?;

    state.player.draw(surface)?;
    state.computer.draw(surface)?;
    state.ball.draw(surface)
}

fn draw_score(surface: &mut dyn Surface, score: u32, y: f32) -> Result<(), RenderError> {
    surface.fill_text(
        &score.to_string(),
        Vec2::new(Params::SCORE_TEXT_X, y),
        Params::SCORE_FONT_PX,
        Color::SCORE,
    )
}
