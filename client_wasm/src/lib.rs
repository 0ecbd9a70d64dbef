//! Browser shell for the Pong core.
//!
//! Mounts the simulation onto a 2D canvas inside a container element: the
//! container's current width sets the device scale every tick, keyboard
//! events feed the paddle intents, and two audio elements provide the
//! fire-and-forget sound cues. The fixed 60 Hz tick renders the current
//! state and then advances it.

#![cfg(target_arch = "wasm32")]

mod audio;
mod surface;

use audio::SoundBank;
use pong_core::{input, render, step, Config, Events, GameRng, Params, Time, World};
use std::cell::RefCell;
use surface::CanvasSurface;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, KeyboardEvent};

thread_local! {
    static GAME: RefCell<Option<Game>> = RefCell::new(None);
}

/// Everything the running loop owns: platform handles, the game state, and
/// the closures that must stay alive while the listeners and timer do.
struct Game {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    container: HtmlElement,
    sounds: SoundBank,
    world: World,
    config: Config,
    events: Events,
    rng: GameRng,
    interval_id: i32,
    on_key_down: Closure<dyn FnMut(KeyboardEvent)>,
    on_key_up: Closure<dyn FnMut(KeyboardEvent)>,
    _tick: Closure<dyn FnMut()>,
}

/// Mount the game onto `canvas`, sized from `container`, and start the loop.
///
/// Input listeners and the tick timer are registered exactly once here and
/// removed in [`stop`]. Fails if a game is already running.
#[wasm_bindgen]
pub fn start(canvas: HtmlCanvasElement, container: HtmlElement) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    GAME.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            return Err(JsValue::from_str("game already running"));
        }
        *slot = Some(Game::mount(canvas, container)?);
        web_sys::console::log_1(&"pong: mounted".into());
        Ok(())
    })
}

/// Tear the game down: clear the tick timer, remove both key listeners, and
/// drop all state. Safe to call when nothing is running.
#[wasm_bindgen]
pub fn stop() {
    GAME.with(|slot| {
        if let Some(game) = slot.borrow_mut().take() {
            game.unmount();
            web_sys::console::log_1(&"pong: unmounted".into());
        }
    });
}

/// Run `f` against the mounted game, if any
fn with_game(f: impl FnOnce(&mut Game)) {
    GAME.with(|slot| {
        if let Some(game) = slot.borrow_mut().as_mut() {
            f(game);
        }
    });
}

impl Game {
    fn mount(canvas: HtmlCanvasElement, container: HtmlElement) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let sounds = SoundBank::new()?;
        let config = Config::new();
        let now = js_sys::Date::now();
        let world = World::new(&config, now);
        let rng = GameRng::new(now as u64);

        let on_key_down = Closure::wrap(Box::new(|event: KeyboardEvent| {
            with_game(|game| input::apply_key_down(&mut game.world, &event.key()));
        }) as Box<dyn FnMut(KeyboardEvent)>);
        let on_key_up = Closure::wrap(Box::new(|event: KeyboardEvent| {
            with_game(|game| input::apply_key_up(&mut game.world, &event.key()));
        }) as Box<dyn FnMut(KeyboardEvent)>);
        let tick = Closure::wrap(Box::new(|| with_game(Game::frame)) as Box<dyn FnMut()>);

        Self::add_listeners(&document, &on_key_down, &on_key_up)?;

        let interval_id = match window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            Params::TICK_MS as i32,
        ) {
            Ok(id) => id,
            Err(e) => {
                Self::remove_listeners(&document, &on_key_down, &on_key_up);
                return Err(JsValue::from_str(&format!(
                    "failed to start tick timer: {:?}",
                    e
                )));
            }
        };

        Ok(Self {
            canvas,
            ctx,
            container,
            sounds,
            world,
            config,
            events: Events::new(),
            rng,
            interval_id,
            on_key_down,
            on_key_up,
            _tick: tick,
        })
    }

    fn add_listeners(
        document: &Document,
        on_key_down: &Closure<dyn FnMut(KeyboardEvent)>,
        on_key_up: &Closure<dyn FnMut(KeyboardEvent)>,
    ) -> Result<(), JsValue> {
        document
            .add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())?;
        document.add_event_listener_with_callback("keyup", on_key_up.as_ref().unchecked_ref())?;
        Ok(())
    }

    fn remove_listeners(
        document: &Document,
        on_key_down: &Closure<dyn FnMut(KeyboardEvent)>,
        on_key_up: &Closure<dyn FnMut(KeyboardEvent)>,
    ) {
        let _ = document
            .remove_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref());
        let _ = document
            .remove_event_listener_with_callback("keyup", on_key_up.as_ref().unchecked_ref());
    }

    /// One tick: resize to the container, render the current state, advance
    /// the simulation, then fire any audio cues the frame produced.
    fn frame(&mut self) {
        let width = self.container.offset_width() as f32;
        let scale = width / self.config.field_width;
        self.canvas.set_width(width as u32);
        self.canvas.set_height((self.config.field_height * scale) as u32);

        let time = Time::new(js_sys::Date::now());

        let mut surface = CanvasSurface::new(&self.ctx);
        render::draw(&mut surface, &self.world, &time, &self.config, scale);

        step(
            &mut self.world,
            &time,
            &self.config,
            &mut self.events,
            &mut self.rng,
        );

        if self.events.ball_hit_paddle {
            self.sounds.hit.play();
        }
        if self.events.scored() {
            self.sounds.score.play();
        }
    }

    fn unmount(self) {
        let window = match web_sys::window() {
            Some(window) => window,
            None => return,
        };
        window.clear_interval_with_handle(self.interval_id);

        if let Some(document) = window.document() {
            Self::remove_listeners(&document, &self.on_key_down, &self.on_key_up);
        }
    }
}
