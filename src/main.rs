//! Brick Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use brick_breaker::platform::web::{AlertNotifier, CanvasPainter};
    use brick_breaker::platform::{key_down, key_up, pointer_move};
    use brick_breaker::{Game, GameConfig};

    /// Game instance plus its canvas backend
    struct App {
        game: Game<AlertNotifier>,
        painter: CanvasPainter,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
        log::info!("Brick Breaker starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("myCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        // The arena is the canvas
        let mut config = GameConfig::default();
        config.arena.width = canvas.width() as f32;
        config.arena.height = canvas.height() as f32;
        if let Err(e) = config.validate() {
            log::warn!("Canvas too small ({}), using default arena", e);
            config = GameConfig::default();
        }

        let app = Rc::new(RefCell::new(App {
            game: Game::new(config, AlertNotifier),
            painter: CanvasPainter::new(ctx),
        }));

        setup_input_handlers(&canvas, app.clone());
        request_animation_frame(app);
        log::info!("Brick Breaker running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(input) = key_down(&event.key()) {
                    app.borrow_mut().game.push_input(input);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(input) = key_up(&event.key()) {
                    app.borrow_mut().game.push_input(input);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move, relative to the canvas
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let relative_x = event.client_x() as f32 - rect.left() as f32;
                let mut app = app.borrow_mut();
                let arena_width = app.game.state().config.arena.width;
                if let Some(input) = pointer_move(relative_x, arena_width) {
                    app.game.push_input(input);
                }
            });
            let _ = document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        {
            let mut guard = app.borrow_mut();
            let App { game, painter } = &mut *guard;
            game.frame(painter);
        }
        // Next frame is only scheduled once this one has finished
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::Parser;

    use brick_breaker::demo::Autopilot;
    use brick_breaker::game::LogNotifier;
    use brick_breaker::renderer::NullRenderer;
    use brick_breaker::sim::GameEvent;
    use brick_breaker::{Game, GameConfig};

    /// Headless Brick Breaker run driven by the autopilot
    #[derive(Debug, Parser)]
    #[command(version, about)]
    struct Args {
        /// JSON config file (defaults apply to missing fields)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Autopilot seed
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Frames to simulate
        #[arg(long, default_value_t = 20_000)]
        frames: u64,
        /// Autopilot jitter as a fraction of half the paddle width (>= 1.0 can miss)
        #[arg(long, default_value_t = 1.2)]
        accuracy: f32,
    }

    pub fn run() {
        env_logger::init();
        let args = Args::parse();
        log::info!("Brick Breaker (native) starting...");

        let config = match &args.config {
            Some(path) => GameConfig::load(path).unwrap_or_else(|e| {
                log::error!("{}; falling back to defaults", e);
                GameConfig::default()
            }),
            None => GameConfig::default(),
        };

        let mut game = Game::new(config, LogNotifier);
        let mut pilot = Autopilot::new(args.seed, args.accuracy);
        let mut renderer = NullRenderer::default();
        let (mut wins, mut losses, mut best_score) = (0u32, 0u32, 0u32);

        for _ in 0..args.frames {
            let event = pilot.steer(game.state());
            game.push_input(event);
            // Read before the frame: a terminal frame restarts the session
            let mut score = game.state().score;
            for event in game.frame(&mut renderer) {
                match event {
                    GameEvent::BrickDestroyed { .. } => score += 1,
                    GameEvent::Won => wins += 1,
                    GameEvent::Lost => losses += 1,
                    _ => {}
                }
            }
            best_score = best_score.max(score);
        }

        println!(
            "frames: {}  sessions: {}  wins: {}  losses: {}  best score: {}",
            renderer.frames,
            game.sessions(),
            wins,
            losses,
            best_score
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
