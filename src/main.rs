//! Shooter Game entry point
//!
//! Browser: canvas 2D host driven by `requestAnimationFrame`.
//! Native: headless autopilot run that prints a JSON summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use shooter_game::renderer::CanvasRenderer;
    use shooter_game::ui::FpsCounter;
    use shooter_game::{Game, InputState, Settings};

    /// Everything the page owns
    struct App {
        game: Game,
        input: InputState,
        renderer: CanvasRenderer,
        show_fps: bool,
        fps: FpsCounter,
    }

    impl App {
        fn update(&mut self, time: f64) {
            self.game.frame(&mut self.input, time);
            self.fps.record(time);
        }

        fn render(&self) {
            let fps = self.show_fps.then_some(self.fps.fps());
            if let Err(e) = self.renderer.draw(&self.game.view(), fps) {
                log::warn!("Render error: {:?}", e);
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
        }

        log::info!("Shooter Game starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let body = document.body().ok_or("no body")?;

        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        body.append_child(&canvas)?;

        let width = window.inner_width()?.as_f64().unwrap_or(800.0);
        let height = window.inner_height()?.as_f64().unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let settings = Settings {
            viewport_width: width as f32,
            viewport_height: height as f32,
            ..Settings::default()
        };
        let seed = settings.seed.unwrap_or(js_sys::Date::now() as u64);
        let game = Game::from_settings(&settings, seed);
        log::info!("Game initialized with seed: {}", seed);

        let app = Rc::new(RefCell::new(App {
            game,
            input: InputState::new(),
            renderer: CanvasRenderer::new(&canvas)?,
            show_fps: settings.show_fps,
            fps: FpsCounter::new(),
        }));

        setup_input_handlers(&canvas, app.clone())?;
        request_animation_frame(app);

        log::info!("Shooter Game running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                if a.input.key_down(&event.code()) {
                    event.prevent_default();
                } else if !event.repeat() {
                    match event.code().as_str() {
                        "KeyI" => {
                            a.game.autopilot = !a.game.autopilot;
                            log::info!("Autopilot: {}", a.game.autopilot);
                        }
                        "KeyF" => {
                            a.show_fps = !a.show_fps;
                            log::info!("FPS counter: {}", a.show_fps);
                        }
                        _ => {}
                    }
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().input.key_up(&event.code());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Window blur - keyup never arrives for keys held while focus leaves
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                app.borrow_mut().input.release_all();
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Click - queued in canvas coordinates for the next frame
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let x = event.client_x() as f32 - rect.left() as f32;
                let y = event.client_y() as f32 - rect.top() as f32;
                app.borrow_mut().input.click(Vec2::new(x, y));
            });
            canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.update(time);
            a.render();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;
    use std::time::{SystemTime, UNIX_EPOCH};

    use shooter_game::consts::REFERENCE_FRAME_MS;
    use shooter_game::sim::GamePhase;
    use shooter_game::{Game, InputState, Settings};

    env_logger::init();

    let settings = std::env::args()
        .nth(1)
        .map(|path| Settings::load_file(Path::new(&path)))
        .unwrap_or_default();
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!("Shooter Game (headless) starting with seed {}", seed);

    let mut game = Game::from_settings(&settings, seed);
    game.autopilot = true;
    let mut input = InputState::new();

    // Press Play like a user would
    if let Some(play) = game.buttons().first() {
        input.click(play.bounds().min + (play.bounds().max - play.bounds().min) / 2.0);
    }

    let mut now = 0.0;
    while game.frames < settings.max_frames {
        game.frame(&mut input, now);
        now += REFERENCE_FRAME_MS;
        if game.phase() == GamePhase::GameOver {
            break;
        }
    }

    let session = &game.session;
    let summary = serde_json::json!({
        "seed": seed,
        "frames": game.frames,
        "phase": session.phase,
        "score": session.score,
        "lives": session.lives,
        "difficulty": session.difficulty,
        "played_ms": session.clock.now_ms(),
        "stats": session.stats,
    });
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not encode summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
