//! Keyboard input intent
//!
//! Key events arrive asynchronously; they only flip flags here. The flags are
//! read at the start of the next tick.

use crate::sim::TickInput;

/// Which direction keys are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputIntent {
    pub left: bool,
    pub right: bool,
}

impl InputIntent {
    /// Handle a key press. Returns true if the key is one we care about.
    pub fn key_down(&mut self, key: &str) -> bool {
        self.set(key, true)
    }

    /// Handle a key release. Returns true if the key is one we care about.
    pub fn key_up(&mut self, key: &str) -> bool {
        self.set(key, false)
    }

    fn set(&mut self, key: &str, held: bool) -> bool {
        match key {
            "ArrowLeft" => self.left = held,
            "ArrowRight" => self.right = held,
            _ => return false,
        }
        true
    }

    /// Release everything (e.g. on focus loss)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_tick_input(self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut intent = InputIntent::default();
        assert!(intent.key_down("ArrowLeft"));
        assert!(intent.key_down("ArrowRight"));
        assert_eq!(
            intent.to_tick_input(),
            TickInput {
                left: true,
                right: true
            }
        );

        assert!(intent.key_up("ArrowLeft"));
        assert_eq!(
            intent.to_tick_input(),
            TickInput {
                left: false,
                right: true
            }
        );
    }

    #[test]
    fn test_ignores_other_keys() {
        let mut intent = InputIntent::default();
        assert!(!intent.key_down("Space"));
        assert_eq!(intent, InputIntent::default());
    }

    #[test]
    fn test_clear() {
        let mut intent = InputIntent {
            left: true,
            right: true,
        };
        intent.clear();
        assert_eq!(intent.to_tick_input(), TickInput::default());
    }
}
