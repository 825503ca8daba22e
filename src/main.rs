//! Paddle Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use paddle_pong::audio::{AudioManager, SoundEffect};
    use paddle_pong::consts::SIM_DT;
    use paddle_pong::input::PointerMapper;
    use paddle_pong::render::{CanvasPainter, scene};
    use paddle_pong::{Session, Settings};

    struct Game {
        session: Session,
        settings: Settings,
        painter: CanvasPainter,
        pointer: PointerMapper,
        audio: AudioManager,
        canvas: HtmlCanvasElement,
        last_time: f64,
    }

    impl Game {
        /// Pointer Y in client coordinates to a paddle target
        fn pointer_target(&mut self, client_y: f32) -> f32 {
            let rect = self.canvas.get_bounding_client_rect();
            self.pointer.set_client_height(rect.height() as f32);
            self.pointer.paddle_target(client_y - rect.top() as f32)
        }

        fn update(&mut self, dt: f32, time: f64) {
            let report = self.session.frame(dt, time);
            for events in &report.events {
                for effect in SoundEffect::for_events(events) {
                    self.audio.play(effect);
                }
            }
        }

        fn render(&self) {
            let style = self.session.render_style(&self.settings);
            let cmds = scene::build(self.session.engine(), &style);
            self.painter.paint(&cmds);
        }

        fn toggle_mute(&mut self) {
            self.settings.muted = !self.settings.muted;
            self.audio.set_muted(self.settings.muted);
            self.settings.save();
            log::info!("Muted: {}", self.settings.muted);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Paddle Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let session = Session::new(&settings, seed);
        log::info!("Game initialized with seed: {}", seed);

        let arena = session.engine().arena();
        let painter = CanvasPainter::new(&canvas, arena).expect("no 2d context");
        let pointer = PointerMapper::for_engine(session.engine(), canvas.client_height() as f32);

        let audio = AudioManager::new(&settings);

        let game = Rc::new(RefCell::new(Game {
            session,
            settings,
            painter,
            pointer,
            audio,
            canvas: canvas.clone(),
            last_time: 0.0,
        }));

        setup_input_handlers(&canvas, game.clone());
        setup_auto_pause(game.clone());

        request_animation_frame(game);

        log::info!("Paddle Pong running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move drives the player paddle
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let target = g.pointer_target(event.client_y() as f32);
                g.session.input_mut().target_y = Some(target);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse down - browsers only start audio after a user gesture
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow().audio.resume();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let mut g = game.borrow_mut();
                    let target = g.pointer_target(touch.client_y() as f32);
                    g.session.input_mut().target_y = Some(target);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                g.audio.resume();
                if let Some(touch) = event.touches().get(0) {
                    let target = g.pointer_target(touch.client_y() as f32);
                    g.session.input_mut().target_y = Some(target);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let game = game.clone();
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "Escape" | "p" | "P" => g.session.input_mut().pause = true,
                    "r" | "R" => g.session.input_mut().restart = true,
                    "i" | "I" => g.session.input_mut().toggle_autopilot = true,
                    "m" | "M" => g.toggle_mute(),
                    "f" | "F" => {
                        g.settings.show_fps = !g.settings.show_fps;
                        g.settings.save();
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
        }

        request_animation_frame(game);
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Window blur (click outside)
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
            let mut g = game.borrow_mut();
            if !g.session.is_paused() {
                g.session.input_mut().pause = true;
                log::info!("Auto-paused (window blur)");
            }
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use clap::Parser;

    use paddle_pong::consts::SIM_DT;
    use paddle_pong::render::{ascii, scene};
    use paddle_pong::{FramePacing, Session, Settings};

    fn parse_pacing(s: &str) -> Result<FramePacing, String> {
        FramePacing::from_str(s)
            .ok_or_else(|| format!("unknown pacing '{s}' (use fixed or refresh)"))
    }

    /// Run Paddle Pong without a display, the autopilot playing against the AI
    #[derive(Parser)]
    #[command(version, about)]
    struct Cli {
        /// Number of display frames to simulate
        #[arg(long, default_value_t = 3600)]
        frames: u32,

        /// Seed for serve directions
        #[arg(long, default_value_t = 1)]
        seed: u64,

        /// Settings JSON file
        #[arg(long, value_name = "PATH")]
        settings: Option<PathBuf>,

        /// Frame pacing (fixed or refresh), overriding the settings file
        #[arg(long, value_parser = parse_pacing)]
        pacing: Option<FramePacing>,

        /// Print an ASCII snapshot of the final frame
        #[arg(long)]
        snapshot: bool,
    }

    pub fn run() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        let cli = Cli::parse();
        let settings = match &cli.settings {
            Some(path) => Settings::load_from(path),
            None => Settings::default(),
        };

        log::info!("Paddle Pong (headless) starting, seed {}", cli.seed);

        let mut session = Session::new(&settings, cli.seed);
        session.set_autopilot(true);
        if let Some(pacing) = cli.pacing {
            session.set_pacing(pacing);
        }
        log::info!(
            "Pacing: {}",
            cli.pacing.unwrap_or(settings.pacing).as_str()
        );

        let mut hits = 0u32;
        for i in 0..cli.frames {
            let report = session.frame(SIM_DT, i as f64 * SIM_DT as f64 * 1000.0);
            hits += report
                .events
                .iter()
                .filter(|e| e.paddle_hit.is_some())
                .count() as u32;
        }

        let engine = session.engine();
        let score = engine.score();
        log::info!(
            "Simulated {} steps, {} paddle hits",
            engine.frame(),
            hits
        );
        println!("player {} - {} opponent", score.player, score.opponent);

        if cli.snapshot {
            let style = session.render_style(&settings);
            let cmds = scene::build(engine, &style);
            print!("{}", ascii::rasterize(&cmds, engine.arena(), 80, 30));
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    headless::run();
}
