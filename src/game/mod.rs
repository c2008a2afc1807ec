//! Game entities and the per-frame loop
//!
//! Every frame the [`Stage`] hands the elapsed time to each entity in a fixed
//! order: background, ball, paddle, scoreboard, FPS overlay. Entities update
//! their own state and draw themselves in the same call.

pub mod ball;
pub mod entity;
pub mod fps;
pub mod player;
pub mod scene;
pub mod scoreboard;
pub mod stage;

pub use ball::Ball;
pub use entity::{Edge, Entity, Frame, GameEvent};
pub use fps::FpsCounter;
pub use player::Player;
pub use scene::Scene;
pub use scoreboard::ScoreBoard;
pub use stage::Stage;
