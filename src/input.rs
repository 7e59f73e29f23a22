//! Keyboard and touch mapping to player commands
//!
//! Both sources produce the same two commands. The browser driver drops
//! commands while the run is over.

/// A player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Jump,
    Slide,
}

/// Map a `KeyboardEvent.code` to a command
pub fn command_for_key(code: &str) -> Option<Command> {
    match code {
        "ArrowUp" => Some(Command::Jump),
        "ArrowDown" => Some(Command::Slide),
        _ => None,
    }
}

/// Vertical swipe detector
///
/// Remembers where a touch started and classifies the gesture when it ends.
/// Screen y grows downward, so an upward swipe has `start - end > threshold`.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start_y: Option<f32>,
    threshold: f32,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            start_y: None,
            threshold,
        }
    }

    pub fn touch_start(&mut self, y: f32) {
        self.start_y = Some(y);
    }

    /// Finish the gesture. The tracker is reset whatever the outcome.
    pub fn touch_end(&mut self, y: f32) -> Option<Command> {
        let start = self.start_y.take()?;
        let rise = start - y;
        if rise > self.threshold {
            Some(Command::Jump)
        } else if rise < -self.threshold {
            Some(Command::Slide)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.start_y = None;
    }

    pub fn in_gesture(&self) -> bool {
        self.start_y.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(command_for_key("ArrowUp"), Some(Command::Jump));
        assert_eq!(command_for_key("ArrowDown"), Some(Command::Slide));
        assert_eq!(command_for_key("ArrowLeft"), None);
        assert_eq!(command_for_key("KeyW"), None);
    }

    #[test]
    fn test_swipe_up_jumps() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.touch_start(400.0);
        assert_eq!(swipe.touch_end(300.0), Some(Command::Jump));
        assert!(!swipe.in_gesture());
    }

    #[test]
    fn test_swipe_down_slides() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.touch_start(300.0);
        assert_eq!(swipe.touch_end(360.0), Some(Command::Slide));
    }

    #[test]
    fn test_short_swipe_does_nothing_and_resets() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.touch_start(300.0);
        assert_eq!(swipe.touch_end(250.0), None); // exactly the threshold
        assert!(!swipe.in_gesture());
        // A stray touchend without a start is ignored
        assert_eq!(swipe.touch_end(0.0), None);
    }
}
