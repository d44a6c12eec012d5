//! Frame loop: owns the game state and drives update + render each frame

use crate::{render_frame, update_frame, Ball, Computer, Config, Events, KeysHeld, Player, RenderError, Surface};

/// Everything that changes from frame to frame
#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Player,
    pub computer: Computer,
    pub ball: Ball,
    pub keys: KeysHeld,
    pub events: Events,
    pub config: Config,
    pub frame: u64,
}

impl GameState {
    pub fn new(config: Config) -> Self {
        Self {
            player: Player::new(&config),
            computer: Computer::new(&config),
            ball: Ball::serve(&config),
            keys: KeysHeld::new(),
            events: Events::new(),
            config,
            frame: 0,
        }
    }

    pub fn key_down(&mut self, code: u32) {
        self.keys.press(code);
    }

    pub fn key_up(&mut self, code: u32) {
        self.keys.release(code);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Host-provided frame cadence
pub trait FrameScheduler {
    /// Block until the next frame is due. Returns false once the host stops
    /// handing out frames.
    fn next_frame(&mut self) -> bool;
}

/// Grants a fixed number of frames back to back, without waiting
#[derive(Debug, Clone, Copy)]
pub struct FrameBudget {
    remaining: u64,
}

impl FrameBudget {
    pub fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }
}

impl FrameScheduler for FrameBudget {
    fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use fixed_rate::FixedRateScheduler;

#[cfg(not(target_arch = "wasm32"))]
mod fixed_rate {
    use std::time::{Duration, Instant};

    use super::FrameScheduler;

    /// Sleeps the calling thread to hold a steady frame rate
    #[derive(Debug)]
    pub struct FixedRateScheduler {
        frame_time: Duration,
        next_deadline: Option<Instant>,
        limit: Option<u64>,
        granted: u64,
    }

    impl FixedRateScheduler {
        pub fn new(fps: u32, limit: Option<u64>) -> Self {
            Self {
                frame_time: Duration::from_secs(1) / fps.max(1),
                next_deadline: None,
                limit,
                granted: 0,
            }
        }

        pub fn granted(&self) -> u64 {
            self.granted
        }
    }

    impl FrameScheduler for FixedRateScheduler {
        fn next_frame(&mut self) -> bool {
            if self.limit.is_some_and(|limit| self.granted >= limit) {
                return false;
            }

            let now = Instant::now();
            if let Some(deadline) = self.next_deadline.filter(|d| *d > now) {
                std::thread::sleep(deadline - now);
            }
            // Resync rather than catch up after a stall
            let base = self.next_deadline.filter(|d| *d > now).unwrap_or(now);
            self.next_deadline = Some(base + self.frame_time);

            self.granted += 1;
            true
        }
    }
}

/// Runs frames: update, then render
#[derive(Debug, Clone, Default)]
pub struct GameLoop {
    pub state: GameState,
}

impl GameLoop {
    pub fn new(config: Config) -> Self {
        Self {
            state: GameState::new(config),
        }
    }

    pub fn update(&mut self) {
        update_frame(&mut self.state);
    }

    pub fn render(&self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        render_frame(&self.state, surface)
    }

    /// One frame
    pub fn step(&mut self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        self.update();
        self.render(surface)
    }

    /// Step once per frame the scheduler grants
    pub fn run(
        &mut self,
        scheduler: &mut dyn FrameScheduler,
        surface: &mut dyn Surface,
    ) -> Result<(), RenderError> {
        while scheduler.next_frame() {
            self.step(surface)?;
        }
        Ok(())
    }
}
