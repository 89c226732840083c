//! Catch My Skills entry point
//!
//! The wasm build is the reference presentation adapter: it wires the two
//! browser timers (requestAnimationFrame + a 1 s interval), input events,
//! DOM controls and a 2D canvas around the engine.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, HtmlCanvasElement, HtmlSelectElement, KeyboardEvent, TouchEvent,
    };

    use catch_my_skills::consts::*;
    use catch_my_skills::engine::Engine;
    use catch_my_skills::platform::LocalStore;
    use catch_my_skills::sim::{DifficultyPreset, Dir, ItemKind};

    /// Skills shown when the page provides no `data-skills` attribute
    const FALLBACK_SKILLS: [&str; 6] = ["Rust", "TypeScript", "React", "SQL", "Docker", "CI/CD"];

    /// App instance: the engine plus its canvas surface
    struct App {
        engine: Engine,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        /// Honors the user's prefers-reduced-motion setting: particle
        /// bursts are not drawn (they never affect gameplay)
        reduced_motion: bool,
    }

    impl App {
        /// Draw the current frame snapshot onto the canvas
        fn draw(&self) {
            let w = self.canvas.width() as f64;
            let h = self.canvas.height() as f64;
            let ctx = &self.ctx;

            ctx.clear_rect(0.0, 0.0, w, h);
            ctx.set_fill_style_str("rgba(0,0,0,0.15)");
            ctx.fill_rect(0.0, 0.0, w, h);

            let Some(frame) = self.engine.frame() else {
                return;
            };

            // Player box with a little face
            let (px, py) = (frame.player_pos.x as f64, frame.player_pos.y as f64);
            let (pw, ph) = (frame.player_size.x as f64, frame.player_size.y as f64);
            ctx.set_fill_style_str(SKILL_COLOR);
            ctx.fill_rect(px, py, pw, ph);
            ctx.set_fill_style_str("#fff");
            ctx.fill_rect(px + pw * 0.2, py + ph * 0.2, 8.0, 8.0);
            ctx.fill_rect(px + pw * 0.6, py + ph * 0.2, 8.0, 8.0);
            ctx.fill_rect(px + pw * 0.3, py + ph * 0.7, pw * 0.4, 5.0);

            // Falling items with centered labels
            ctx.set_font("14px system-ui, -apple-system, Segoe UI, Roboto");
            ctx.set_text_align("center");
            ctx.set_text_baseline("middle");
            for item in &frame.items {
                let color = match item.kind {
                    ItemKind::Skill(_) => SKILL_COLOR,
                    ItemKind::Hazard => HAZARD_COLOR,
                    ItemKind::PowerUp => POWER_COLOR,
                };
                ctx.set_fill_style_str(color);
                ctx.fill_rect(
                    item.pos.x as f64,
                    item.pos.y as f64,
                    item.size.x as f64,
                    item.size.y as f64,
                );
                if let Some(label) = item.label {
                    ctx.set_fill_style_str("#fff");
                    ctx.fill_text(
                        label,
                        (item.pos.x + item.size.x / 2.0) as f64,
                        (item.pos.y + item.size.y / 2.0) as f64,
                    )
                    .ok();
                }
            }

            // Particles fade out on their own alpha
            if !self.reduced_motion {
                for p in frame.particles {
                    ctx.set_global_alpha(p.alpha.max(0.0) as f64);
                    ctx.set_fill_style_str(p.color);
                    ctx.fill_rect(p.pos.x as f64 - 2.0, p.pos.y as f64 - 2.0, 4.0, 4.0);
                }
                ctx.set_global_alpha(1.0);
            }
        }

        /// Push score/lives/time and controls state into the DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            let set = |id: &str, text: String| {
                if let Some(el) = document.get_element_by_id(id) {
                    el.set_text_content(Some(&text));
                }
            };
            set("hud-score", self.engine.score().to_string());
            set("hud-lives", self.engine.lives().to_string());
            set("hud-time", format!("{}s", self.engine.time_left()));
            set("hud-high-score", self.engine.high_score().to_string());

            if let Some(el) = document.get_element_by_id("pause-btn") {
                el.set_text_content(Some(if self.engine.is_paused() {
                    "Resume"
                } else {
                    "Pause"
                }));
            }
            if let Some(el) = document.get_element_by_id("mute-btn") {
                el.set_text_content(Some(if self.engine.muted() {
                    "Unmute"
                } else {
                    "Mute"
                }));
            }
            if let Some(el) = document.get_element_by_id("game-message") {
                let text = if self.engine.is_running() {
                    ""
                } else {
                    self.engine.message().unwrap_or("")
                };
                el.set_text_content(Some(text));
            }
            // Preset can only change between sessions
            if let Some(el) = document.get_element_by_id("preset") {
                if let Ok(select) = el.dyn_into::<HtmlSelectElement>() {
                    select.set_disabled(self.engine.is_running());
                }
            }
        }
    }

    /// Map a DOM key name to a movement direction
    fn dir_for_key(key: &str) -> Option<Dir> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Dir::Left),
            "ArrowRight" | "d" | "D" => Some(Dir::Right),
            "ArrowUp" | "w" | "W" => Some(Dir::Up),
            "ArrowDown" | "s" | "S" => Some(Dir::Down),
            _ => None,
        }
    }

    /// Touch position in canvas pixel space
    fn touch_pos(canvas: &HtmlCanvasElement, touch: &web_sys::Touch) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        let sx = canvas.width() as f64 / rect.width().max(1.0);
        let sy = canvas.height() as f64 / rect.height().max(1.0);
        Vec2::new(
            ((touch.client_x() as f64 - rect.left()) * sx) as f32,
            ((touch.client_y() as f64 - rect.top()) * sy) as f32,
        )
    }

    /// Skill labels from the canvas `data-skills` JSON attribute, or defaults
    fn load_skills(canvas: &HtmlCanvasElement) -> Vec<String> {
        canvas
            .get_attribute("data-skills")
            .and_then(|raw| serde_json::from_str::<Vec<String>>(&raw).ok())
            .filter(|skills| !skills.is_empty())
            .unwrap_or_else(|| FALLBACK_SKILLS.iter().map(|s| s.to_string()).collect())
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Catch My Skills starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Size the backing store from the displayed size (4:3, capped width)
        let dpr = window.device_pixel_ratio();
        let client_w = (canvas.client_width() as f64).min(600.0);
        let client_h = (client_w * 0.75).round();
        let width = (client_w * dpr).floor() as u32;
        let height = (client_h * dpr).floor() as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let skills = load_skills(&canvas);
        let mut engine = Engine::new(skills, Box::new(LocalStore::new()));
        engine.set_bounds(width as f32, height as f32);

        let reduced_motion = window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());

        let app = Rc::new(RefCell::new(App {
            engine,
            canvas: canvas.clone(),
            ctx,
            reduced_motion,
        }));

        setup_input_handlers(&canvas, app.clone());
        setup_buttons(app.clone());
        setup_auto_pause(app.clone());
        start_countdown(app.clone());

        // Frame loop runs from now on; it idles while paused or ended
        request_animation_frame(app);

        log::info!("Catch My Skills running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");

        // Keyboard press/release
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if key == "p" || key == "P" {
                    event.prevent_default();
                    app.borrow_mut().engine.toggle_pause();
                    return;
                }
                if let Some(dir) = dir_for_key(&key) {
                    event.prevent_default();
                    app.borrow_mut().engine.set_key(dir, true);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(dir) = dir_for_key(&event.key()) {
                    app.borrow_mut().engine.set_key(dir, false);
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch drag steers the player; release clears the pointer
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let pos = touch_pos(&canvas_clone, &touch);
                    app.borrow_mut().engine.set_pointer(Some(pos));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let pos = touch_pos(&canvas_clone, &touch);
                    app.borrow_mut().engine.set_pointer(Some(pos));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                app.borrow_mut().engine.set_pointer(None);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(app: Rc<RefCell<App>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let preset = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id("preset"))
                    .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
                    .map(|select| DifficultyPreset::from_str(&select.value()))
                    .unwrap_or_default();
                let seed = js_sys::Date::now() as u64;
                app.borrow_mut().engine.start(preset, seed);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("pause-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                app.borrow_mut().engine.toggle_pause();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("end-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                app.borrow_mut().engine.end();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("mute-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                app.borrow_mut().engine.toggle_mute();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(app: Rc<RefCell<App>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                let mut app = app.borrow_mut();
                if app.engine.is_running() && !app.engine.is_paused() {
                    app.engine.toggle_pause();
                    log::info!("Auto-paused (tab hidden)");
                }
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// 1 Hz countdown interval; the engine ignores it while paused or idle
    fn start_countdown(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut()>::new(move || {
            app.borrow_mut().engine.on_second();
        });
        let _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            1000,
        );
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.engine.on_frame(time);
            a.draw();
            a.update_hud();
        }
        request_animation_frame(app);
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
fn main() {
    use catch_my_skills::engine::Engine;
    use catch_my_skills::platform::MemStore;
    use catch_my_skills::sim::DifficultyPreset;

    env_logger::init();
    log::info!("Catch My Skills (native) starting...");

    // Headless demo run: 60 simulated seconds at ~60 fps with a static player
    let skills = ["Rust", "TypeScript", "React", "SQL", "Docker", "CI/CD"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let mut engine = Engine::new(skills, Box::new(MemStore::new()));
    engine.start(DifficultyPreset::Normal, 42);

    let mut now = 0.0;
    while engine.is_running() {
        for _ in 0..60 {
            now += 1000.0 / 60.0;
            engine.on_frame(now);
        }
        engine.on_second();
    }

    println!(
        "final score: {} (high score {})",
        engine.score(),
        engine.high_score()
    );
    if let Some(message) = engine.message() {
        println!("{message}");
    }
}
