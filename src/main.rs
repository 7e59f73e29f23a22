//! Dash Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, KeyboardEvent, TouchEvent};

    use dash_runner::input::{SwipeTracker, command_for_key};
    use dash_runner::renderer::{CanvasPainter, build_frame};
    use dash_runner::sim::{FrameStatus, GameState, TickInput, tick};
    use dash_runner::ui::HudText;
    use dash_runner::{Command, Tuning};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        tuning: Tuning,
        painter: CanvasPainter,
        input: TickInput,
        swipe: SwipeTracker,
        /// A requestAnimationFrame callback is pending
        running: bool,
    }

    impl Game {
        fn new(seed: u64, width: f32, height: f32, tuning: Tuning, painter: CanvasPainter) -> Self {
            Self {
                state: GameState::with_tuning(seed, width, height, tuning.clone()),
                swipe: SwipeTracker::new(tuning.swipe_threshold),
                tuning,
                painter,
                input: TickInput::default(),
                running: false,
            }
        }

        /// Queue a command for the next frame (dropped once the run is over)
        fn command(&mut self, command: Command) {
            if !self.state.game_over {
                self.input.push(command);
            }
        }

        /// Simulate and draw one frame
        fn frame(&mut self) -> FrameStatus {
            let status = tick(&mut self.state, &self.input);
            self.input.clear_commands();

            self.painter.clear(self.state.width, self.state.height);
            if let Err(e) = self.painter.paint(&build_frame(&self.state)) {
                log::warn!("Draw error: {:?}", e);
            }
            update_hud(&HudText::from_state(&self.state));
            status
        }

        /// Reset game state for restart
        fn restart(&mut self, seed: u64) {
            let (width, height) = (self.state.width, self.state.height);
            self.state = GameState::with_tuning(seed, width, height, self.tuning.clone());
            self.input.clear_commands();
            self.swipe.reset();
        }
    }

    fn document() -> Result<web_sys::Document, JsValue> {
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))
    }

    fn viewport() -> (f32, f32) {
        let Some(window) = web_sys::window() else {
            return (0.0, 0.0);
        };
        let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
        (dim(window.inner_width()), dim(window.inner_height()))
    }

    /// Optional tuning override from `<script id="tuning" type="application/json">`
    fn load_tuning(document: &web_sys::Document) -> Tuning {
        let Some(json) = document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content())
        else {
            return Tuning::default();
        };

        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning override");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning override: {}", e);
                Tuning::default()
            }
        }
    }

    fn update_hud(hud: &HudText) {
        let Ok(document) = document() else {
            return;
        };

        if let Some(el) = document.get_element_by_id("distance") {
            el.set_text_content(Some(&hud.distance));
        }
        if let Some(el) = document.get_element_by_id("coins") {
            el.set_text_content(Some(&hud.coins));
        }

        // Show/hide game over
        if let Some(el) = document
            .get_element_by_id("game-over")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let display = if hud.final_score.is_some() { "block" } else { "none" };
            let _ = el.style().set_property("display", display);
        }
        if let Some(text) = &hud.final_score {
            if let Some(el) = document.get_element_by_id("final-score") {
                el.set_text_content(Some(text));
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Dash Runner starting...");

        let document = document()?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let (width, height) = viewport();
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;

        let tuning = load_tuning(&document);
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(
            seed,
            width,
            height,
            tuning,
            CanvasPainter::new(ctx),
        )));

        log::info!("Game initialized with seed: {}", seed);

        setup_resize_handler(&canvas, game.clone())?;
        setup_input_handlers(&canvas, game.clone())?;
        setup_restart_button(&document, game.clone())?;

        start_loop(game);

        log::info!("Dash Runner running!");
        Ok(())
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (width, height) = viewport();
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
            game.borrow_mut().state.resize(width, height);
            log::info!("Resized to {}x{}", width, height);
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.code();
                if let Some(command) = command_for_key(&code) {
                    event.prevent_default();
                    game.borrow_mut().command(command);
                    return;
                }
                match code.as_str() {
                    "KeyI" => {
                        let mut g = game.borrow_mut();
                        g.input.idle_mode = !g.input.idle_mode;
                        log::info!("Idle mode: {}", g.input.idle_mode);
                    }
                    "Enter" | "Space" => {
                        if game.borrow().state.game_over {
                            restart(game.clone());
                        }
                    }
                    _ => {}
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch start
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let mut g = game.borrow_mut();
                if g.state.game_over {
                    return;
                }
                if let Some(touch) = event.changed_touches().get(0) {
                    g.swipe.touch_start(touch.client_y() as f32);
                }
            });
            canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch end
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let mut g = game.borrow_mut();
                if g.state.game_over {
                    return;
                }
                let Some(touch) = event.changed_touches().get(0) else {
                    g.swipe.reset();
                    return;
                };
                if let Some(command) = g.swipe.touch_end(touch.client_y() as f32) {
                    g.command(command);
                }
            });
            canvas.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_restart_button(document: &web_sys::Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                restart(game.clone());
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn restart(game: Rc<RefCell<Game>>) {
        let seed = js_sys::Date::now() as u64;
        game.borrow_mut().restart(seed);
        log::info!("Game restarted with seed: {}", seed);
        start_loop(game);
    }

    /// Schedule the loop unless a frame is already pending
    fn start_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.running {
                return;
            }
            g.running = true;
        }
        request_animation_frame(game);
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let status = {
            let mut g = game.borrow_mut();
            let status = g.frame();
            if status == FrameStatus::Stopped {
                g.running = false;
            }
            status
        };

        if status == FrameStatus::Continue {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().inspect_err(|e| log::error!("Startup failed: {:?}", e))
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dash_runner::sim::{FrameStatus, GameState, TickInput, tick};

    /// Headless runs stop here if the autopilot never crashes
    const MAX_FRAMES: u64 = 60 * 60 * 5;

    env_logger::init();
    log::info!("Dash Runner (native) starting...");
    log::info!("Native mode runs a headless autopilot session - use `trunk serve` for the web version");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(seed, 1280.0, 720.0);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    log::info!("Session seed: {}", seed);
    while state.frame < MAX_FRAMES && tick(&mut state, &input) == FrameStatus::Continue {}

    println!("{}", dash_runner::ui::final_score_text(state.distance, state.coin_count));
    println!(
        "frames: {} | speed: {:.3} | game over: {}",
        state.frame, state.speed, state.game_over
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
