//! Flapbox entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use flapbox::Settings;
    use flapbox::audio::{AudioManager, SoundEffect};
    use flapbox::consts::*;
    use flapbox::renderer::DomRenderer;
    use flapbox::sim::{GameEvent, GamePhase, Simulation};

    /// Game instance holding all state
    struct Game {
        sim: Simulation,
        renderer: DomRenderer,
        audio: AudioManager,
        settings: Settings,
        accumulator: f32,
        last_time: f64,
    }

    impl Game {
        fn new(seed: u64, renderer: DomRenderer) -> Self {
            let settings = Settings::load();
            let mut audio = AudioManager::new();
            audio.set_volume(settings.effective_volume());
            Self {
                sim: Simulation::new(seed),
                renderer,
                audio,
                settings,
                accumulator: 0.0,
                last_time: 0.0,
            }
        }

        /// Fan simulation events out to the audio and renderer collaborators
        fn dispatch(&mut self, events: &[GameEvent]) {
            for event in events {
                match event {
                    GameEvent::Jump => self.audio.play(SoundEffect::Jump),
                    GameEvent::Score(_) => self.audio.play(SoundEffect::Score),
                    GameEvent::GameOver { new_best, .. } => {
                        self.audio.play(SoundEffect::GameOver);
                        if *new_best {
                            self.audio.play(SoundEffect::NewBest);
                        }
                    }
                    _ => {}
                }
                self.renderer.apply(event);
            }
        }

        fn jump(&mut self) {
            let events = self.sim.jump();
            self.dispatch(&events);
        }

        fn reset_if_over(&mut self) {
            if self.sim.state.phase == GamePhase::Over {
                let events = self.sim.reset();
                self.dispatch(&events);
            }
        }

        fn toggle_sound(&mut self) -> bool {
            self.settings.sound_enabled = !self.settings.sound_enabled;
            self.settings.save();
            self.audio.set_volume(self.settings.effective_volume());
            self.settings.sound_enabled
        }

        /// Run simulation ticks to catch up with wall time
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let events = self.sim.step();
                self.dispatch(&events);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
        }

        fn render(&mut self) {
            self.renderer.draw(&self.sim.state, &self.settings);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flapbox starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let Some(renderer) = DomRenderer::new(&document) else {
            log::error!("Game markup missing, cannot start");
            return;
        };

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, renderer)));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());

        // First paint (start screen + persisted best score)
        game.borrow_mut().render();

        request_animation_frame(game);

        log::info!("Flapbox running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Click anywhere in the game container flaps
        if let Some(container) = document.get_element_by_id("game-container") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().jump();
            });
            let _ = container
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start flaps (and must not also synthesize a click)
        if let Some(container) = document.get_element_by_id("game-container") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::TouchEvent| {
                event.prevent_default();
                game.borrow_mut().jump();
            });
            let _ = container
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard: Space/ArrowUp flap, R restarts after a crash
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                match event.code().as_str() {
                    "Space" | "ArrowUp" => {
                        event.prevent_default();
                        game.borrow_mut().jump();
                    }
                    "KeyR" => game.borrow_mut().reset_if_over(),
                    _ => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Restart button on the game over screen
        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
                event.stop_propagation();
                game.borrow_mut().reset_if_over();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Sound toggle
        if let Some(btn) = document.get_element_by_id("sound-toggle") {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
                event.stop_propagation();
                let enabled = game.borrow_mut().toggle_sound();
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    if let Some(el) = document.get_element_by_id("sound-toggle") {
                        el.set_text_content(Some(if enabled { "\u{1F50A}" } else { "\u{1F507}" }));
                    }
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
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

            g.update(dt);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flapbox::sim::{GameEvent, GamePhase, Simulation};

    env_logger::init();
    log::info!("Flapbox (native) starting...");
    log::info!("Run with `trunk serve` for the browser version; playing a headless demo run");

    // Headless demo: flap on a fixed cadence until the run ends
    let mut sim = Simulation::new(0xF1A9);
    let mut events = sim.jump();
    let mut flaps = 1u32;

    for tick in 1..=20_000u32 {
        if tick % 40 == 0 {
            events.extend(sim.jump());
            flaps += 1;
        }
        events.extend(sim.step());
        if sim.state.phase == GamePhase::Over {
            break;
        }
    }

    let cleared = events
        .iter()
        .filter(|e| matches!(e, GameEvent::Score(_)))
        .count();
    log::info!(
        "Demo over after {} ticks: {} flaps, {} obstacles cleared, best score {}",
        sim.state.time_ticks,
        flaps,
        cleared,
        sim.state.best_score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
