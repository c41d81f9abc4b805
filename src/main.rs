//! Canvas Experiments entry point
//!
//! On the web: attaches a demo to `#canvas` and drives it from
//! requestAnimationFrame. Natively: runs a demo headless and reports on it.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

    use canvas_experiments::render::{CanvasRenderer, scene};
    use canvas_experiments::sim::Viewport;
    use canvas_experiments::{Demo, DemoKind, FrameInput, Settings};
    use glam::Vec2;

    /// Everything the frame callback owns
    struct App {
        demo: Demo,
        renderer: CanvasRenderer,
        canvas: HtmlCanvasElement,
        input: FrameInput,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        last_fps_log: f64,
    }

    impl App {
        fn frame(&mut self, time: f64) {
            self.demo.frame(&self.input);
            scene::draw(&self.demo, &mut self.renderer);

            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            if time - self.last_fps_log >= 1000.0 {
                let oldest = self.frame_times[self.frame_index];
                if oldest > 0.0 && time > oldest {
                    let fps = (60000.0 / (time - oldest)).round() as u32;
                    log::debug!("{} fps", fps);
                }
                self.last_fps_log = time;
            }
        }

        fn resize_to_window(&mut self) {
            let viewport = fit_canvas(&self.canvas);
            self.demo.resize(viewport);
        }
    }

    /// Size the canvas to the window and return its new viewport
    fn fit_canvas(canvas: &HtmlCanvasElement) -> Viewport {
        let Some(window) = web_sys::window() else {
            return Viewport::new(canvas.width() as f32, canvas.height() as f32);
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(canvas.width() as f64);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(canvas.height() as f64);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        Viewport::new(width as f32, height as f32)
    }

    /// Settings from the canvas `data-settings` attribute, defaults otherwise
    fn load_settings(canvas: &HtmlCanvasElement) -> Settings {
        match canvas.get_attribute("data-settings") {
            Some(json) => match Settings::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from data-settings");
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring data-settings: {}", e);
                    Settings::default()
                }
            },
            None => Settings::default(),
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"logger already initialized".into());
        }

        log::info!("Canvas Experiments starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no #canvas element")?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("2d context unavailable")?
            .dyn_into()?;

        let kind = canvas
            .get_attribute("data-demo")
            .and_then(|s| DemoKind::from_str(&s))
            .unwrap_or_default();
        let settings = load_settings(&canvas);
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let viewport = fit_canvas(&canvas);

        let demo = match Demo::new(kind, &settings, viewport, seed) {
            Ok(demo) => demo,
            Err(e) => {
                log::error!("Cannot start {} demo: {}", kind.as_str(), e);
                return Err(JsValue::from_str(&e.to_string()));
            }
        };

        let app = Rc::new(RefCell::new(App {
            demo,
            renderer: CanvasRenderer::new(ctx),
            canvas: canvas.clone(),
            input: FrameInput::default(),
            frame_times: [0.0; 60],
            frame_index: 0,
            last_fps_log: 0.0,
        }));

        setup_input_handlers(&canvas, app.clone());
        setup_resize(app.clone());
        request_animation_frame(app);

        log::info!("Canvas Experiments running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse move - pointer in canvas coordinates
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut().input.pointer =
                    Some(Vec2::new(event.offset_x() as f32, event.offset_y() as f32));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse leave - pointer absent
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().input.pointer = None;
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().resize_to_window();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window, animation stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            app.borrow_mut().frame(time);
            request_animation_frame(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_app::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let kind = match args.next() {
        Some(name) => match canvas_experiments::DemoKind::from_str(&name) {
            Some(kind) => kind,
            None => {
                log::error!("unknown demo '{}'", name);
                eprintln!("usage: canvas-experiments [demo] [frames] [settings.json]");
                std::process::exit(2);
            }
        },
        None => canvas_experiments::DemoKind::default(),
    };
    let frames = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::error!("bad frame count: {}", e);
            std::process::exit(2);
        }
        None => 600,
    };
    let settings = match args.next() {
        Some(path) => match headless::load_settings(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => canvas_experiments::Settings::default(),
    };

    match headless::run(kind, &settings, frames) {
        Ok(summary) => println!("{}", summary),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use canvas_experiments::sim::{SpawnError, Viewport};
    use canvas_experiments::{Demo, DemoKind, FrameInput, Settings, SettingsError};
    use glam::Vec2;

    /// Seed used when settings do not fix one
    const DEFAULT_SEED: u64 = 12345;
    const VIEWPORT: Viewport = Viewport {
        width: 1280.0,
        height: 720.0,
    };

    pub fn load_settings(path: &str) -> Result<Settings, String> {
        let json = std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;
        Settings::from_json(&json).map_err(|e: SettingsError| format!("{}: {}", path, e))
    }

    /// Run a demo for `frames` steps and summarize it as JSON
    pub fn run(kind: DemoKind, settings: &Settings, frames: u64) -> Result<String, SpawnError> {
        let seed = settings.seed.unwrap_or(DEFAULT_SEED);
        let mut demo = Demo::new(kind, settings, VIEWPORT, seed)?;

        // Pointer circles the middle of the viewport
        let center = VIEWPORT.center();
        let mut collisions: u64 = 0;
        let (momentum_before, energy_before) = colliding_totals(&demo);

        for frame in 0..frames {
            let t = frame as f32 * 0.02;
            let input = FrameInput {
                pointer: Some(center + Vec2::new(t.cos(), t.sin()) * 200.0),
            };
            demo.frame(&input);
            if let Demo::Colliding(d) = &demo {
                collisions += d.last_collisions as u64;
            }
        }

        let (momentum_after, energy_after) = colliding_totals(&demo);
        log::info!(
            "{} frames of {}: {} collisions, energy {:.3} -> {:.3}",
            frames,
            kind.as_str(),
            collisions,
            energy_before,
            energy_after
        );

        let summary = serde_json::json!({
            "demo": kind.as_str(),
            "seed": seed,
            "frames": frames,
            "collisions": collisions,
            "momentum": {
                "before": [momentum_before.x, momentum_before.y],
                "after": [momentum_after.x, momentum_after.y],
            },
            "kinetic_energy": {
                "before": energy_before,
                "after": energy_after,
            },
        });
        Ok(serde_json::to_string_pretty(&summary).unwrap_or_else(|_| summary.to_string()))
    }

    fn colliding_totals(demo: &Demo) -> (Vec2, f32) {
        match demo {
            Demo::Colliding(d) => (d.total_momentum(), d.kinetic_energy()),
            _ => (Vec2::ZERO, 0.0),
        }
    }
}
