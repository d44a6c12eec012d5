//! Configuration module - environment variable parsing

use std::env;

/// Headless run settings loaded from environment variables
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    /// Frames to simulate before exiting
    pub frames: u64,
    /// Target frame rate; 0 runs as fast as possible
    pub fps: u32,
    /// Let the player paddle chase the ball
    pub autoplay: bool,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            fps: 60,
            autoplay: true,
            log_level: "info".to_string(),
        }
    }
}

impl RunConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            frames: parse_or(&lookup, "PONG_FRAMES", defaults.frames)?,
            fps: parse_or(&lookup, "PONG_FPS", defaults.fps)?,
            autoplay: parse_or(&lookup, "PONG_AUTOPLAY", defaults.autoplay)?,
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}
