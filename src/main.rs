//! Pixel Pong entry point
//!
//! The host owns the frame loop: every animation frame it calls `tick` then
//! renders. Pointer events are forwarded to the simulation as they arrive.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use pixel_pong::Settings;
    use pixel_pong::renderer::{Palette, RenderState, build_scene};
    use pixel_pong::sim::{Arena, GameEvent, GameState, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        palette: Palette,
        circle_segments: u32,
    }

    impl Game {
        fn new(arena: Arena, seed: u64, settings: &Settings) -> Self {
            Self {
                state: GameState::with_arena(arena, seed),
                render_state: None,
                palette: Palette::from_settings(settings),
                circle_segments: settings.quality.circle_segments(),
            }
        }

        /// Run one simulation tick
        fn update(&mut self) {
            tick(&mut self.state);

            for event in &self.state.events {
                if let GameEvent::Scored(side) = event {
                    log::info!(
                        "{:?} scores: {} - {}",
                        side,
                        self.state.score.left,
                        self.state.score.right
                    );
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = build_scene(&self.state, &self.palette, self.circle_segments);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices, self.palette.clear_color()) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&format!("Failed to init logger: {}", e)))?;

        log::info!("Pixel Pong starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("not a canvas"))?;

        // Arena is measured in CSS pixels so pointer coordinates map 1:1;
        // the backing store is scaled by the device pixel ratio.
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let arena = if client_w > 0 && client_h > 0 {
            Arena::new(client_w as f32, client_h as f32)
        } else {
            Arena::default()
        };
        let dpr = window.device_pixel_ratio();
        let width = (arena.width as f64 * dpr) as u32;
        let height = (arena.height as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();

        let seed = settings
            .fixed_seed
            .unwrap_or_else(|| js_sys::Date::now() as u64);
        let game = Rc::new(RefCell::new(Game::new(arena, seed, &settings)));

        log::info!(
            "Game initialized with seed: {} ({}x{} arena)",
            seed,
            arena.width,
            arena.height
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&format!("Failed to create surface: {}", e)))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&format!("Failed to get adapter: {}", e)))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, arena)
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());

        // First frame runs immediately, then the browser drives the cadence
        game_loop(game);

        log::info!("Pixel Pong running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let y = event.client_y() as f32 - rect.top() as f32;
                game.borrow_mut().state.set_left_paddle_target(y);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let y = touch.client_y() as f32 - rect.top() as f32;
                    game.borrow_mut().state.set_left_paddle_target(y);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, stopping game loop");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.update();
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Pixel Pong failed to start: {:?}", e);
    }
}

/// Ticks simulated by the headless runner when none are given (one minute at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_TICKS: u64 = 3600;

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_SEED: u64 = 42;

/// Headless runner: `pixel-pong [TICKS] [SEED]`.
///
/// Simulates without input (the left paddle stays put) and prints the final
/// state as JSON.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pixel_pong::Settings;
    use pixel_pong::sim::{GameEvent, GameState, tick};

    env_logger::init();
    log::info!("Pixel Pong (native, headless) starting...");

    let mut args = std::env::args().skip(1);
    let ticks = parse_arg(args.next(), "TICKS", DEFAULT_TICKS);
    let settings = Settings::load();
    let seed = parse_arg(
        args.next(),
        "SEED",
        settings.fixed_seed.unwrap_or(DEFAULT_SEED),
    );

    let mut state = GameState::new(seed);
    log::info!("Simulating {} ticks with seed {}", ticks, seed);

    for _ in 0..ticks {
        tick(&mut state);
        for event in &state.events {
            match event {
                GameEvent::Scored(side) => log::info!(
                    "tick {}: {:?} scores ({} - {})",
                    state.time_ticks,
                    side,
                    state.score.left,
                    state.score.right
                ),
                GameEvent::PaddleHit(side) => {
                    log::debug!("tick {}: {:?} paddle hit", state.time_ticks, side)
                }
                GameEvent::WallBounce => log::trace!("tick {}: wall bounce", state.time_ticks),
            }
        }
    }

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_arg(arg: Option<String>, name: &str, default: u64) -> u64 {
    match arg {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            log::warn!("Invalid {} {:?} ({}), using {}", name, raw, e, default);
            default
        }),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
