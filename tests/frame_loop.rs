use canvas_pong::GameConfig;
use canvas_pong::game::{Edge, GameEvent, Stage};
use canvas_pong::platform::Action;
use canvas_pong::renderer::{DrawCommand, RecordingSurface};

const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 600.0;

fn stage() -> Stage {
    Stage::new(&GameConfig::default(), WIDTH, HEIGHT, 0.0).unwrap()
}

/// Run frames at a fixed interval, collecting every event
fn run(
    stage: &mut Stage,
    surface: &mut RecordingSurface,
    start: f64,
    frames: usize,
    dt: f64,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for i in 1..=frames {
        stage.frame(start + i as f64 * dt, surface);
        events.extend_from_slice(stage.events());
        surface.take();
    }
    events
}

#[test]
fn test_paddle_left_for_one_second() {
    let mut stage = stage();
    let mut surface = RecordingSurface::new();
    let player = stage.player();
    assert_eq!(player.borrow().x, WIDTH / 2.0 - player.borrow().width / 2.0);

    stage.push_action(Action::from_key_down("ArrowLeft").unwrap());
    stage.frame(1000.0, &mut surface);
    assert_eq!(player.borrow().x, 0.0);

    // Holding the key keeps it pinned at the wall
    stage.frame(2000.0, &mut surface);
    assert_eq!(player.borrow().x, 0.0);
}

#[test]
fn test_key_release_stops_paddle() {
    let mut stage = stage();
    let mut surface = RecordingSurface::new();
    let player = stage.player();

    stage.push_action(Action::from_key_down("l").unwrap());
    stage.frame(100.0, &mut surface);
    let moved_to = player.borrow().x;
    assert!(moved_to > 360.0);

    stage.push_action(Action::from_key_up("L").unwrap());
    run(&mut stage, &mut surface, 100.0, 30, 16.0);
    assert_eq!(player.borrow().x, moved_to);
}

#[test]
fn test_ball_bounces_between_boundaries() {
    let mut stage = stage();
    let mut surface = RecordingSurface::new();
    let ball = stage.ball();
    let (top, bottom) = (ball.borrow().top(), ball.borrow().bottom());

    let events = run(&mut stage, &mut surface, 0.0, 600, 1000.0 / 60.0);
    let bounces: Vec<Edge> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::Bounced { edge } => Some(*edge),
            _ => None,
        })
        .collect();

    assert!(bounces.len() >= 4, "only {} bounces", bounces.len());
    assert_eq!(bounces[0], Edge::Top);
    for pair in bounces.windows(2) {
        assert_ne!(pair[0], pair[1], "bounces must alternate");
    }

    let y = ball.borrow().pos.y;
    assert!(y >= top && y <= bottom);
}

#[test]
fn test_turning_points_independent_of_frame_rate() {
    for fps in [24.0, 60.0, 144.0] {
        let mut stage = stage();
        let mut surface = RecordingSurface::new();
        let ball = stage.ball();
        let (top, bottom) = (ball.borrow().top(), ball.borrow().bottom());

        let mut lowest = f32::MIN;
        let mut highest = f32::MAX;
        for i in 1..=(fps as usize * 4) {
            stage.frame(i as f64 * 1000.0 / fps, &mut surface);
            surface.take();
            let y = ball.borrow().pos.y;
            lowest = lowest.max(y);
            highest = highest.min(y);
        }
        assert_eq!(highest, top, "at {fps} fps");
        assert_eq!(lowest, bottom, "at {fps} fps");
    }
}

#[test]
fn test_centred_paddle_catches_ball() {
    let mut stage = stage();
    let mut surface = RecordingSurface::new();
    let events = run(&mut stage, &mut surface, 0.0, 300, 1000.0 / 60.0);
    let landings: Vec<bool> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::Landed { on_paddle } => Some(*on_paddle),
            _ => None,
        })
        .collect();
    assert!(!landings.is_empty());
    assert!(landings.iter().all(|&hit| hit));
}

#[test]
fn test_repeated_zero_delta_frames_change_nothing() {
    let mut stage = stage();
    let mut surface = RecordingSurface::new();
    stage.frame(250.0, &mut surface);
    let ball_y = stage.ball().borrow().pos.y;
    let paddle_x = stage.player().borrow().x;

    for _ in 0..20 {
        stage.frame(250.0, &mut surface);
    }
    assert_eq!(stage.ball().borrow().pos.y, ball_y);
    assert_eq!(stage.player().borrow().x, paddle_x);
}

#[test]
fn test_scoreboard_tracks_ball() {
    let mut stage = stage();
    let mut surface = RecordingSurface::new();
    stage.frame(16.0, &mut surface);
    let texts: Vec<&str> = surface.texts().collect();
    assert_eq!(texts[0], "Speed: 29");
    assert_eq!(texts[1], "Score: 0");
    assert!(texts[2].starts_with("FPS -> "));
}

#[test]
fn test_fps_readout_changes_every_fifteen_frames() {
    let mut stage = stage();
    let mut surface = RecordingSurface::new();
    let mut readouts = Vec::new();
    for i in 1..=45 {
        stage.frame(i as f64 * 20.0, &mut surface);
        let fps = surface
            .take()
            .into_iter()
            .find_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } if text.starts_with("FPS") => Some(text),
                _ => None,
            })
            .unwrap();
        readouts.push(fps);
    }

    assert!(readouts[..14].iter().all(|r| r == "FPS -> 0.00"));
    assert!(readouts[14..].iter().all(|r| r == "FPS -> 50.00"));
}
