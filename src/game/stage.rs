//! The render loop step
//!
//! Owns the scene size, the last frame time, the input queue and the ordered
//! entity list.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use super::ball::Ball;
use super::entity::{Entity, Frame, GameEvent};
use super::fps::FpsCounter;
use super::player::Player;
use super::scene::Scene;
use super::scoreboard::ScoreBoard;
use crate::config::GameConfig;
use crate::error::InitError;
use crate::platform::{Action, Clock, InputState};
use crate::renderer::Surface;

/// All entities plus the state needed to drive them frame by frame
pub struct Stage {
    clock: Clock,
    input: InputState,
    entities: Vec<Box<dyn Entity>>,
    events: Vec<GameEvent>,
    player: Rc<RefCell<Player>>,
    ball: Rc<RefCell<Ball>>,
    size: Vec2,
}

impl Stage {
    /// Build the entity list for a scene of `width × height` CSS pixels,
    /// with the clock starting at `start_ms`.
    pub fn new(
        config: &GameConfig,
        width: f32,
        height: f32,
        start_ms: f64,
    ) -> Result<Self, InitError> {
        if !(width >= 1.0 && height >= 1.0) {
            return Err(InitError::ZeroSizedCanvas {
                width: width.max(0.0) as u32,
                height: height.max(0.0) as u32,
            });
        }
        config.validate_for(width, height)?;

        let player = Rc::new(RefCell::new(Player::new(config, width, height)));
        let ball = Rc::new(RefCell::new(Ball::new(config, width, player.clone())));

        let mut entities: Vec<Box<dyn Entity>> = vec![
            Box::new(Scene::new(
                Vec2::ZERO,
                Vec2::new(width, height),
                config.background.clone(),
            )),
            Box::new(ball.clone()),
            Box::new(player.clone()),
            Box::new(ScoreBoard::new(config, ball.clone())),
        ];
        if config.show_fps {
            entities.push(Box::new(FpsCounter::new(config, width)));
        }

        log::info!(
            "Stage {}x{} with {} entities",
            width,
            height,
            entities.len()
        );

        Ok(Self {
            clock: Clock::new(start_ms),
            input: InputState::new(),
            entities,
            events: Vec::new(),
            player,
            ball,
            size: Vec2::new(width, height),
        })
    }

    /// Queue a keyboard action for the next frame
    pub fn push_action(&mut self, action: Action) {
        self.input.push(action);
    }

    /// Run one animation frame at timestamp `now_ms`; returns the delta used
    pub fn frame(&mut self, now_ms: f64, surface: &mut dyn Surface) -> f64 {
        let delta = self.clock.tick(now_ms);
        self.events.clear();

        let mut frame = Frame {
            surface,
            input: &mut self.input,
            events: &mut self.events,
        };
        for entity in &mut self.entities {
            entity.draw(delta, &mut frame);
        }

        for event in &self.events {
            log::debug!("{:?} at {:.1}ms", event, now_ms);
        }
        delta
    }

    /// Events raised during the most recent frame
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn player(&self) -> Rc<RefCell<Player>> {
        self.player.clone()
    }

    pub fn ball(&self) -> Rc<RefCell<Ball>> {
        self.ball.clone()
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Number of entities drawn per frame
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Timestamp of the last frame
    pub fn last_frame(&self) -> f64 {
        self.clock.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};

    #[test]
    fn test_rejects_zero_size() {
        let config = GameConfig::default();
        let err = Stage::new(&config, 0.0, 600.0, 0.0).err();
        assert_eq!(
            err,
            Some(InitError::ZeroSizedCanvas {
                width: 0,
                height: 600
            })
        );
        assert!(Stage::new(&config, 800.0, f32::NAN, 0.0).is_err());
    }

    #[test]
    fn test_rejects_scene_too_short() {
        let err = Stage::new(&GameConfig::default(), 800.0, 20.0, 0.0).err();
        assert!(matches!(err, Some(InitError::Config(_))));

        // Top and bottom boundaries would coincide and the ball would never move
        let err = Stage::new(&GameConfig::default(), 800.0, 35.0, 0.0).err();
        assert!(matches!(err, Some(InitError::Config(_))));
    }

    #[test]
    fn test_fps_counter_optional() {
        let config = GameConfig {
            show_fps: false,
            ..Default::default()
        };
        let stage = Stage::new(&config, 800.0, 600.0, 0.0).unwrap();
        assert_eq!(stage.len(), 4);
        let stage = Stage::new(&GameConfig::default(), 800.0, 600.0, 0.0).unwrap();
        assert_eq!(stage.len(), 5);
        assert!(!stage.is_empty());
        assert_eq!(stage.size(), Vec2::new(800.0, 600.0));
    }

    #[test]
    fn test_draw_order() {
        let mut stage = Stage::new(&GameConfig::default(), 800.0, 600.0, 0.0).unwrap();
        let mut surface = RecordingSurface::new();
        assert_eq!(stage.frame(16.0, &mut surface), 16.0);
        assert_eq!(stage.last_frame(), 16.0);

        let cmds = surface.take();
        // background, ball, paddle, two scoreboard lines, fps
        assert_eq!(cmds.len(), 6);
        assert!(matches!(&cmds[0], DrawCommand::Rect { color, .. } if color == "#bada55"));
        assert!(matches!(cmds[1], DrawCommand::Circle { .. }));
        assert!(matches!(&cmds[2], DrawCommand::Rect { color, .. } if color == "black"));
        assert!(matches!(&cmds[3], DrawCommand::Text { text, .. } if text.starts_with("Speed")));
        assert!(matches!(&cmds[4], DrawCommand::Text { text, .. } if text.starts_with("Score")));
        assert!(matches!(&cmds[5], DrawCommand::Text { text, .. } if text.starts_with("FPS")));
    }

    #[test]
    fn test_action_reaches_player() {
        let mut stage = Stage::new(&GameConfig::default(), 800.0, 600.0, 0.0).unwrap();
        let mut surface = RecordingSurface::new();
        stage.push_action(Action::MoveRight);
        stage.frame(1000.0, &mut surface);
        let player = stage.player();
        assert_eq!(player.borrow().x, player.borrow().max_x());
    }
}
