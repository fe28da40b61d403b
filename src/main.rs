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
    use web_sys::{Document, HtmlCanvasElement, HtmlInputElement, KeyboardEvent, MouseEvent};

    use canvas_pong::Settings;
    use canvas_pong::persistence::LocalStore;
    use canvas_pong::platform::{key_command, parse_slider, pointer_command};
    use canvas_pong::renderer::hud::{ids, pause_hint};
    use canvas_pong::renderer::{CanvasRenderer, scene};
    use canvas_pong::sim::{Command, GameEvent, GameState, Playfield, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        store: LocalStore,
        document: Document,
        /// Commands queued by input handlers since the last frame
        commands: Vec<Command>,
    }

    impl Game {
        /// Run one frame: apply queued input, simulate, present
        fn frame(&mut self) {
            let commands = std::mem::take(&mut self.commands);
            let events = tick(&mut self.state, commands);
            self.present(&events);
            self.render();
        }

        /// Render the current frame
        fn render(&self) {
            if let Err(e) = self.renderer.render(&scene(&self.state)) {
                log::warn!("Render error: {:?}", e);
            }
        }

        /// Apply tick events to the DOM and storage
        fn present(&mut self, events: &[GameEvent]) {
            for event in events {
                match *event {
                    GameEvent::Scored { score, .. } => {
                        set_text(&self.document, ids::LEFT_SCORE, &score.left.to_string());
                        set_text(&self.document, ids::RIGHT_SCORE, &score.right.to_string());
                    }
                    GameEvent::PauseChanged { paused } => {
                        set_text(&self.document, ids::PAUSE_HINT, pause_hint(paused));
                    }
                    GameEvent::SettingsChanged { settings } => {
                        settings.save(&mut self.store);
                        show_settings(&self.document, &settings);
                    }
                    GameEvent::WallBounce
                    | GameEvent::PaddleHit { .. }
                    | GameEvent::Served { .. } => {}
                }
            }
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn slider(document: &Document, id: &str) -> Option<HtmlInputElement> {
        document.get_element_by_id(id)?.dyn_into().ok()
    }

    /// Mirror settings into the value labels
    fn show_settings(document: &Document, settings: &Settings) {
        set_text(document, ids::BALL_SPEED_VALUE, &settings.ball_speed.to_string());
        set_text(document, ids::BOT_DIFFICULTY_VALUE, &settings.ai_speed.to_string());
    }

    fn init_hud(document: &Document, state: &GameState) {
        let settings = &state.settings;
        if let Some(input) = slider(document, ids::BALL_SPEED_SLIDER) {
            input.set_value(&settings.ball_speed.to_string());
        }
        if let Some(input) = slider(document, ids::BOT_DIFFICULTY_SLIDER) {
            input.set_value(&settings.ai_speed.to_string());
        }
        show_settings(document, settings);
        set_text(document, ids::LEFT_SCORE, &state.score.left.to_string());
        set_text(document, ids::RIGHT_SCORE, &state.score.right.to_string());
        set_text(document, ids::PAUSE_HINT, pause_hint(state.is_paused()));
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Canvas Pong starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(ids::CANVAS)
            .ok_or("no canvas")?
            .dyn_into()?;

        let field = Playfield::new(canvas.width() as f32, canvas.height() as f32);
        let renderer = CanvasRenderer::new(&canvas)?;

        let store = LocalStore::open();
        let settings = Settings::load(&store);

        let seed = js_sys::Date::now() as u64;
        let state = GameState::new(seed, field, settings);
        log::info!(
            "Game initialized with seed {} on a {}x{} field",
            seed,
            field.width,
            field.height
        );

        init_hud(&document, &state);

        let game = Rc::new(RefCell::new(Game {
            state,
            renderer,
            store,
            document: document.clone(),
            commands: Vec::new(),
        }));

        setup_input_handlers(&document, &canvas, game.clone())?;
        setup_sliders(&document, game.clone())?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Canvas Pong running!");
        Ok(())
    }

    fn setup_input_handlers(
        document: &Document,
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        // Mouse move anywhere on the page drives the player paddle
        {
            let game = game.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas.get_bounding_client_rect();
                let command = pointer_command(event.client_y() as f64, rect.top());
                game.borrow_mut().commands.push(command);
            });
            document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(command) = key_command(&event.code()) {
                    // Space would otherwise scroll the page
                    event.prevent_default();
                    game.borrow_mut().commands.push(command);
                }
            });
            document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_sliders(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let bindings: [(&str, fn(u8) -> Command); 2] = [
            (ids::BALL_SPEED_SLIDER, Command::SetBallSpeed),
            (ids::BOT_DIFFICULTY_SLIDER, Command::SetAiSpeed),
        ];

        for (id, make_command) in bindings {
            let Some(input) = slider(document, id) else {
                log::warn!("Slider #{id} missing, setting cannot be changed");
                continue;
            };

            let game = game.clone();
            let target = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if let Some(value) = parse_slider(&target.value()) {
                    game.borrow_mut().commands.push(make_command(value));
                }
            });
            input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::warn!("Failed to schedule next frame, game loop stopped: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode runs a headless match - build for wasm32 to play in the browser");

    let mut args = std::env::args().skip(1);
    let frames: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(60 * 60);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(1);

    let snapshot = headless::run(frames, seed);
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use canvas_pong::Settings;
    use canvas_pong::persistence::MemoryStore;
    use canvas_pong::sim::{Command, GameEvent, GameState, Playfield, Snapshot, tick};

    /// Play `frames` frames with a scripted pointer standing in for the human
    pub fn run(frames: u64, seed: u64) -> Snapshot {
        let mut store = MemoryStore::new();
        let mut state = GameState::new(seed, Playfield::default(), Settings::load(&store));

        for frame in 0..frames {
            // Trail the ball with a slow wobble so the bot gets some points
            let wobble = (frame as f32 * 0.05).sin() * 45.0;
            let pointer = Command::PointerMoved {
                y: state.ball.center().y + wobble,
            };

            for event in tick(&mut state, [pointer]) {
                match event {
                    GameEvent::Scored { side, score } => {
                        log::debug!("frame {frame}: {side:?} scored, {} - {}", score.left, score.right);
                    }
                    GameEvent::SettingsChanged { settings } => settings.save(&mut store),
                    _ => {}
                }
            }
        }

        log::info!(
            "Final score after {} frames: {} - {}",
            frames,
            state.score.left,
            state.score.right
        );
        state.snapshot()
    }
}
