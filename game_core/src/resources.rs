use std::collections::BTreeSet;

/// Key codes currently held down, in ascending order
#[derive(Debug, Clone, Default)]
pub struct KeysHeld {
    codes: BTreeSet<u32>,
}

impl KeysHeld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, code: u32) {
        self.codes.insert(code);
    }

    pub fn release(&mut self, code: u32) {
        self.codes.remove(&code);
    }

    pub fn is_held(&self, code: u32) -> bool {
        self.codes.contains(&code)
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.codes.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub player_scored: bool,
    pub computer_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_scored = false;
        self.computer_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn any_score(&self) -> bool {
        self.player_scored || self.computer_scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_press_and_release() {
        let mut keys = KeysHeld::new();
        keys.press(39);
        keys.press(37);
        keys.press(39);
        assert_eq!(keys.iter().collect::<Vec<_>>(), vec![37, 39]);

        keys.release(37);
        assert!(!keys.is_held(37));
        assert!(keys.is_held(39));

        keys.release(39);
        keys.release(12); // never pressed
        assert!(keys.is_empty());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.player_scored = true;
        events.computer_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;
        assert!(events.any_score());

        events.clear();

        assert!(!events.player_scored);
        assert!(!events.computer_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
        assert!(!events.any_score());
    }
}
