//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use canvas_pong::platform::Action;
    use canvas_pong::renderer::CanvasSurface;
    use canvas_pong::{GameConfig, InitError, Stage};

    /// Game instance holding all state
    struct Game {
        stage: Stage,
        surface: CanvasSurface,
    }

    impl Game {
        /// Find the page's canvas, size it and build the stage
        fn init() -> Result<Self, InitError> {
            let window = web_sys::window().ok_or(InitError::NoWindow)?;
            let document = window.document().ok_or(InitError::NoDocument)?;

            let canvas: HtmlCanvasElement = document
                .query_selector("canvas")
                .ok()
                .flatten()
                .ok_or(InitError::NoCanvas)?
                .dyn_into()
                .map_err(|_| InitError::NotACanvas)?;

            let config = GameConfig::load(&canvas);
            let surface = CanvasSurface::attach(&canvas, window.device_pixel_ratio())?;

            let start = window.performance().map(|p| p.now()).unwrap_or(0.0);
            let (w, h) = surface.size;
            let stage = Stage::new(&config, w as f32, h as f32, start)?;

            Ok(Self { stage, surface })
        }

        fn frame(&mut self, time: f64) {
            self.stage.frame(time, &mut self.surface);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Canvas Pong starting...");

        let game = match Game::init() {
            Ok(game) => Rc::new(RefCell::new(game)),
            Err(e) => {
                log::error!("Startup failed: {}", e);
                return Err(JsValue::from_str(&e.to_string()));
            }
        };

        setup_input_handlers(game.clone())?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Canvas Pong running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        // Key down - head for a wall
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(action) = Action::from_key_down(&event.key()) {
                    game.borrow_mut().stage.push_action(action);
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up - stop where we are
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(action) = Action::from_key_up(&event.key()) {
                    game.borrow_mut().stage.push_action(action);
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Lost the window, stopping");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_pong::game::GameEvent;
    use canvas_pong::platform::Action;
    use canvas_pong::renderer::RecordingSurface;
    use canvas_pong::{GameConfig, Stage};

    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode draws headless - serve the wasm build for the web version");

    let config = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| GameConfig::from_json(&json).map_err(|e| e.to_string()))
        {
            Ok(config) => config,
            Err(e) => {
                log::error!("Could not load config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    let mut stage = match Stage::new(&config, 800.0, 600.0, 0.0) {
        Ok(stage) => stage,
        Err(e) => {
            log::error!("Startup failed: {}", e);
            std::process::exit(1);
        }
    };

    // Five seconds at 60 Hz, tapping left halfway through
    let mut surface = RecordingSurface::new();
    let mut bounces = 0;
    let mut misses = 0;
    for i in 1..=300 {
        match i {
            150 => stage.push_action(Action::MoveLeft),
            180 => stage.push_action(Action::Stop),
            _ => {}
        }
        stage.frame(i as f64 * 1000.0 / 60.0, &mut surface);
        for event in stage.events() {
            match event {
                GameEvent::Bounced { .. } => bounces += 1,
                GameEvent::Landed { on_paddle: false } => misses += 1,
                GameEvent::Landed { .. } => {}
            }
        }
        surface.take();
    }

    let paddle_x = stage.player().borrow().x;
    println!(
        "Ran 300 frames: {} bounces, {} would-be misses, paddle at x={}",
        bounces, misses, paddle_x
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
