//! Keyboard input handling
//!
//! DOM key events are reduced to a small set of paddle actions. The event
//! handlers only push actions; the paddle polls once per frame.

/// What the player asked the paddle to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Head for the left wall
    MoveLeft,
    /// Head for the right wall
    MoveRight,
    /// Stay where you are
    Stop,
}

/// Which side a recognised key steers toward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyClass {
    Left,
    Right,
}

fn classify(key: &str) -> Option<KeyClass> {
    match key.to_lowercase().as_str() {
        "arrowleft" | "h" | "j" => Some(KeyClass::Left),
        "arrowright" | "k" | "l" => Some(KeyClass::Right),
        _ => None,
    }
}

impl Action {
    /// Action for a key press, `None` if the key is not bound
    pub fn from_key_down(key: &str) -> Option<Self> {
        classify(key).map(|class| match class {
            KeyClass::Left => Action::MoveLeft,
            KeyClass::Right => Action::MoveRight,
        })
    }

    /// Releasing any bound key stops the paddle
    pub fn from_key_up(key: &str) -> Option<Self> {
        classify(key).map(|_| Action::Stop)
    }
}

/// Latest unconsumed action
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pending: Option<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an action; a newer one replaces anything not yet polled
    pub fn push(&mut self, action: Action) {
        self.pending = Some(action);
    }

    /// Take the pending action, if any
    pub fn poll(&mut self) -> Option<Action> {
        self.pending.take()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_down_mapping() {
        for key in ["ArrowLeft", "h", "J", "arrowleft"] {
            assert_eq!(Action::from_key_down(key), Some(Action::MoveLeft), "{key}");
        }
        for key in ["ArrowRight", "K", "l"] {
            assert_eq!(Action::from_key_down(key), Some(Action::MoveRight), "{key}");
        }
        assert_eq!(Action::from_key_down("ArrowUp"), None);
        assert_eq!(Action::from_key_down(" "), None);
    }

    #[test]
    fn test_key_up_stops_either_side() {
        assert_eq!(Action::from_key_up("ArrowLeft"), Some(Action::Stop));
        assert_eq!(Action::from_key_up("L"), Some(Action::Stop));
        assert_eq!(Action::from_key_up("a"), None);
    }

    #[test]
    fn test_poll_takes_latest() {
        let mut input = InputState::new();
        assert_eq!(input.poll(), None);

        input.push(Action::MoveLeft);
        input.push(Action::Stop);
        assert!(!input.is_idle());
        assert_eq!(input.poll(), Some(Action::Stop));
        assert_eq!(input.poll(), None);
        assert!(input.is_idle());
    }
}
