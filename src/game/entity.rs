//! The drawable capability shared by everything in the loop

use std::cell::RefCell;
use std::rc::Rc;

use crate::platform::InputState;
use crate::renderer::Surface;

/// Which bounce boundary the ball turned at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

/// Things that happened during a frame.
///
/// Nothing in the game reacts to these yet; they mark where scoring and
/// game-over would hook in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball reversed direction at a boundary
    Bounced { edge: Edge },
    /// Ball reached the paddle line; `on_paddle` is false when it would have missed
    Landed { on_paddle: bool },
}

/// Per-frame collaborators handed to every entity
pub struct Frame<'a> {
    pub surface: &'a mut dyn Surface,
    /// Keyboard actions since the previous frame
    pub input: &'a mut InputState,
    /// Events raised so far this frame
    pub events: &'a mut Vec<GameEvent>,
}

impl Frame<'_> {
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

/// Anything that updates and draws itself once per animation frame
pub trait Entity {
    /// Advance by `delta` milliseconds and draw the result
    fn draw(&mut self, delta: f64, frame: &mut Frame<'_>);
}

/// Shared entities (the ball watches the paddle, the scoreboard watches the
/// ball) sit in the loop behind `Rc<RefCell<_>>`.
impl<E: Entity + ?Sized> Entity for Rc<RefCell<E>> {
    fn draw(&mut self, delta: f64, frame: &mut Frame<'_>) {
        self.borrow_mut().draw(delta, frame);
    }
}
