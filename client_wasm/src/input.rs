//! Keyboard input handling

use game_core::Config;

/// Keys the game reacts to; the page should not scroll on these
pub fn is_game_key(code: u32, config: &Config) -> bool {
    code == config.key_left || code == config.key_right
}

/// Extract key code from keyboard event
///
/// Paddle bindings are expressed in legacy `keyCode` values.
#[cfg(target_arch = "wasm32")]
#[allow(deprecated)]
pub fn get_key_code(event: &web_sys::KeyboardEvent) -> u32 {
    event.key_code()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_are_game_keys() {
        let config = Config::new();
        assert!(is_game_key(37, &config));
        assert!(is_game_key(39, &config));
        assert!(!is_game_key(38, &config));
        assert!(!is_game_key(32, &config));
    }
}
