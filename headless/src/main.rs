//! Runs the Pong simulation without a display, logging scores as they happen.

mod autoplay;
mod config;

use game_core::{
    Config, FixedRateScheduler, FrameBudget, FrameScheduler, GameLoop, RecordingSurface,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::RunConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let run = RunConfig::from_env()?;
    init_tracing(&run.log_level);

    info!(
        frames = run.frames,
        fps = run.fps,
        autoplay = run.autoplay,
        "Starting headless Pong"
    );

    let mut scheduler: Box<dyn FrameScheduler> = if run.fps == 0 {
        Box::new(FrameBudget::new(run.frames))
    } else {
        Box::new(FixedRateScheduler::new(run.fps, Some(run.frames)))
    };

    let mut game = GameLoop::new(Config::new());
    let mut surface = RecordingSurface::new();

    if run.autoplay {
        while scheduler.next_frame() {
            autoplay::steer(&mut game.state);
            game.step(&mut surface)?;
        }
    } else {
        game.run(scheduler.as_mut(), &mut surface)?;
    }

    info!(
        frames = surface.frames,
        player = game.state.player.score,
        computer = game.state.computer.score,
        "Finished"
    );
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
