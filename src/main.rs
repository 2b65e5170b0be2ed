//! Colon Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use colon_dash::consts::SIM_DT;
    use colon_dash::platform::{FrameClock, InputIntent};
    use colon_dash::renderer::canvas::CanvasSurface;
    use colon_dash::renderer::draw_frame;
    use colon_dash::sim::{GamePhase, GameState, tick};
    use colon_dash::{TipRotator, Tuning};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        canvas: HtmlCanvasElement,
        document: Document,
        clock: FrameClock,
        input: InputIntent,
        tips: TipRotator,
        last_time: f64,
        /// Whether an animation frame is currently scheduled
        looping: bool,
        /// Phase shown in the DOM last frame
        last_phase: GamePhase,
    }

    impl Game {
        /// Run simulation ticks for the elapsed frame time
        fn update(&mut self, dt: f32) {
            let steps = self.clock.advance(dt);
            for _ in 0..steps {
                if !self.state.is_running() {
                    break;
                }
                let input = self.input.to_tick_input();
                tick(&mut self.state, &input);
            }
        }

        fn render(&mut self) {
            draw_frame(&mut self.surface, &self.state);
        }

        /// Show/hide the end-of-run report when the phase changes
        fn update_overlay(&mut self) {
            let phase = self.state.phase;
            if phase == self.last_phase {
                return;
            }
            self.last_phase = phase;

            let snapshot = self.state.snapshot();
            if let Some(el) = self.document.get_element_by_id("endGameReport") {
                let classes = el.class_list();
                if phase == GamePhase::Ended {
                    let _ = classes.remove_1("hidden");
                } else {
                    let _ = classes.add_1("hidden");
                }
            }
            if let Some(report) = snapshot.summary_text {
                self.set_text("reportText", &report);
            }
        }

        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }

        /// Match the canvas backing store to its displayed size
        fn fit_canvas(&mut self) {
            let width = self.canvas.offset_width().max(0) as u32;
            let height = self.canvas.offset_height().max(0) as u32;
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            if let Err(err) = self.state.resize(width as f32, height as f32) {
                log::warn!("Ignoring resize: {}", err);
            }
            self.clock.reset();
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Colon Dash starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let width = canvas.offset_width().max(0) as u32;
        let height = canvas.offset_height().max(0) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let state = GameState::new(Tuning::with_viewport(width as f32, height as f32), seed)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        log::info!("Game initialized with seed: {}", seed);

        let tips = TipRotator::default();
        let surface = CanvasSurface::new(&canvas, state.tuning.item_variants)?;
        let game = Rc::new(RefCell::new(Game {
            state,
            surface,
            canvas,
            document,
            clock: FrameClock::default(),
            input: InputIntent::default(),
            tips,
            last_time: 0.0,
            looping: false,
            last_phase: GamePhase::Running,
        }));
        {
            let g = game.borrow();
            if let Some(tip) = g.tips.current() {
                g.set_text("healthTip", tip);
            }
        }

        setup_input_handlers(game.clone())?;
        setup_restart_button(game.clone())?;
        setup_resize(game.clone())?;
        setup_tip_timer(game.clone())?;

        start_loop(game);
        log::info!("Colon Dash running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().input.key_down(&event.key()) {
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.key_up(&event.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Release keys on blur so the marker doesn't keep drifting
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().input.clear();
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let button = game.borrow().document.get_element_by_id("restartButton");
        let Some(button) = button else {
            log::warn!("No restart button found");
            return Ok(());
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            {
                let mut g = game.borrow_mut();
                g.state.reset();
                g.clock.reset();
                g.update_overlay();
            }
            start_loop(game.clone());
        });
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Rotate tips on a wall-clock timer, independent of the animation loop
    /// (which stops while a run is over)
    fn setup_tip_timer(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let period_ms = game.borrow().tips.period_ms().round() as i32;
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut g = game.borrow_mut();
            if let Some(tip) = g.tips.rotate().map(str::to_owned) {
                g.set_text("healthTip", &tip);
            }
        });
        window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        )?;
        closure.forget();
        Ok(())
    }

    fn setup_resize(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        // Resize events fire between animation frames, so never mid-tick
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().fit_canvas();
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn start_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.looping {
                return;
            }
            g.looping = true;
            g.last_time = 0.0;
        }
        request_animation_frame(game);
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
        let keep_going = {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.update_overlay();

            // Stop scheduling once the run is over; restart resumes it
            g.looping = g.state.is_running();
            g.looping
        };

        if keep_going {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    log::info!("Colon Dash (native) starting...");
    log::info!("Native mode runs a headless autopilot; serve the wasm build to play");

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(arg) => arg.parse::<u64>()?,
        None => std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_millis() as u64,
    };
    let tuning = match args.next() {
        Some(path) => colon_dash::Tuning::from_json(&std::fs::read_to_string(path)?)?,
        None => colon_dash::Tuning::default(),
    };

    headless::run(tuning, seed)?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use colon_dash::consts::SIM_DT;
    use colon_dash::platform::FrameClock;
    use colon_dash::sim::{GameEvent, GameState, ItemKind, TickInput, tick};
    use colon_dash::{TipRotator, Tuning, TuningError};

    /// Give up after this many ticks (ten minutes of play)
    const MAX_TICKS: u64 = 60 * 60 * 10;

    /// Play one run with the autopilot and print the report
    pub fn run(tuning: Tuning, seed: u64) -> Result<(), TuningError> {
        let mut state = GameState::new(tuning, seed)?;
        let mut clock = FrameClock::default();
        let mut tips = TipRotator::default();
        if let Some(tip) = tips.current() {
            log::info!("Tip: {}", tip);
        }

        while state.is_running() && state.frame < MAX_TICKS {
            for _ in 0..clock.advance(SIM_DT) {
                let input = autopilot(&state);
                tick(&mut state, &input);
                for event in &state.events {
                    if let GameEvent::Collected { kind } = event {
                        log::debug!("Frame {}: touched {:?}", state.frame, kind);
                    }
                }
                if let Some(tip) = tips.advance() {
                    log::info!("Tip: {}", tip);
                }
            }
        }

        let snapshot = state.snapshot();
        match snapshot.summary_text {
            Some(report) => println!("{}", report),
            None => println!(
                "Survived {} ticks: score {} health {}",
                state.frame, snapshot.score, snapshot.health
            ),
        }
        Ok(())
    }

    /// Steer toward the nearest good item ahead, away from bad ones, and
    /// always back toward the middle of the corridor
    fn autopilot(state: &GameState) -> TickInput {
        let player = &state.player;
        let Some(segment) = state.corridor.segment_at(player.pos.y) else {
            return TickInput::default();
        };
        let center = (segment.left + segment.right) / 2.0;
        let margin = player.radius + state.tuning.player_step * 2.0;
        let (min_x, max_x) = (segment.left + margin, segment.right - margin);

        let ahead = |y: f32| y < player.pos.y && player.pos.y - y < 200.0;
        let mut target = state
            .items()
            .filter(|item| item.kind == ItemKind::Beneficial && ahead(item.pos.y))
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map_or(center, |item| item.pos.x);

        for hazard in state
            .items()
            .filter(|item| item.kind == ItemKind::Harmful && ahead(item.pos.y))
        {
            let clearance = hazard.radius + player.radius + 4.0;
            if (hazard.pos.x - target).abs() < clearance {
                target = if hazard.pos.x > center {
                    hazard.pos.x - clearance
                } else {
                    hazard.pos.x + clearance
                };
            }
        }
        let target = if min_x < max_x {
            target.clamp(min_x, max_x)
        } else {
            center
        };

        let dx = target - player.pos.x;
        TickInput {
            left: dx < -state.tuning.player_step / 2.0,
            right: dx > state.tuning.player_step / 2.0,
        }
    }
}
