//! Browser client for the sweet-spot tapper
//!
//! DOM rendering, audio and input glue around `game_core::Game`. The page
//! calls `init_game()` once the DOM is ready; the start button begins the
//! session.
//!
//! Note: only compiled for the wasm32 target

#![cfg(target_arch = "wasm32")]

mod input;
mod logger;
mod media;
mod renderer;

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{Arena, Config, Cue, Environment, Events, Game, Phase};
use log::{error, info, warn};
use media::{AudioDeck, Backdrop};
use renderer::{effects, toggle_class, TargetElements};
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Event, EventTarget, HtmlElement, HtmlSourceElement,
    HtmlVideoElement, Window,
};

const PAUSE_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="white"><path d="M6 19h4V5H6v14zm8-14v14h4V5h-4z"/></svg>"#;
const PLAY_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="white"><path d="M8 5v14l11-7z"/></svg>"#;
const SOUND_ON_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M3 9v6h4l5 5V4L7 9H3zm13.5 3c0-1.77-1.02-3.29-2.5-4.03v8.05c1.48-.73 2.5-2.25 2.5-4.02zM14 3.23v2.06c2.89.86 5 3.54 5 6.71s-2.11 5.85-5 6.71v2.06c4.01-.91 7-4.49 7-8.77s-2.99-7.86-7-8.77z"/></svg>"#;
const SOUND_OFF_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M16.5 12c0-1.77-1.02-3.29-2.5-4.03v2.21l2.45 2.45c.03-.2.05-.41.05-.63zm2.5 0c0 .94-.2 1.82-.54 2.64l1.51 1.51C20.63 14.91 21 13.5 21 12c0-4.28-2.99-7.86-7-8.77v2.06c2.89.86 5 3.54 5 6.71zM4.27 3L3 4.27 7.73 9H3v6h4l5 5v-6.73l4.25 4.25c-.67.52-1.42.93-2.25 1.18v2.06c1.38-.31 2.63-.95 3.69-1.81L19.73 21 21 19.73l-9-9L4.27 3zM12 4L9.91 6.09 12 8.18V4z"/></svg>"#;

const ENVIRONMENT_BUTTONS: [(&str, Environment); 4] = [
    ("startJungleButton", Environment::Jungle),
    ("startArcticButton", Environment::Arctic),
    ("pauseJungleButton", Environment::Jungle),
    ("pauseArcticButton", Environment::Arctic),
];

/// Score readouts and control buttons. Only `score` is required.
struct Hud {
    score: HtmlElement,
    pause_score: Option<HtmlElement>,
    pause_overlay: Option<HtmlElement>,
    pause_button: Option<HtmlElement>,
    sound_button: Option<HtmlElement>,
    start_screen: Option<HtmlElement>,
    environment_buttons: Vec<(Environment, HtmlElement)>,
}

impl Hud {
    fn find(document: &Document) -> Result<Self, JsValue> {
        let environment_buttons = ENVIRONMENT_BUTTONS
            .iter()
            .filter_map(|(id, env)| optional_by_id(document, id).map(|el| (*env, el)))
            .collect();
        Ok(Self {
            score: by_id(document, "score")?,
            pause_score: optional_by_id(document, "pauseScore"),
            pause_overlay: optional_by_id(document, "pauseOverlay"),
            pause_button: optional_by_id(document, "pauseButton"),
            sound_button: optional_by_id(document, "soundButton"),
            start_screen: optional_by_id(document, "startScreen"),
            environment_buttons,
        })
    }

    fn show_environment(&self, environment: Environment) -> Result<(), JsValue> {
        for (env, button) in &self.environment_buttons {
            toggle_class(button, "active", *env == environment)?;
        }
        Ok(())
    }

    fn show_sound(&self, enabled: bool) -> Result<(), JsValue> {
        if let Some(button) = &self.sound_button {
            button.set_inner_html(if enabled { SOUND_ON_ICON } else { SOUND_OFF_ICON });
            toggle_class(button, "active", !enabled)?;
        }
        Ok(())
    }

    fn show_paused(&self, paused: bool, score: u32) -> Result<(), JsValue> {
        if let Some(button) = &self.pause_button {
            button.set_inner_html(if paused { PLAY_ICON } else { PAUSE_ICON });
            toggle_class(button, "active", paused)?;
        }
        if let Some(overlay) = &self.pause_overlay {
            toggle_class(overlay, "visible", paused)?;
        }
        if paused {
            if let Some(el) = &self.pause_score {
                el.set_text_content(Some(&score.to_string()));
            }
        }
        Ok(())
    }
}

struct App {
    window: Window,
    document: Document,
    container: HtmlElement,
    game: Game,
    target: Option<TargetElements>,
    audio: AudioDeck,
    backdrop: Option<Backdrop>,
    hud: Hud,
    environment: Environment,
    frame_id: Option<i32>,
    shown_score: Option<u32>,
}

impl App {
    fn now(&self) -> f64 {
        self.window.performance().map(|p| p.now()).unwrap_or(0.0)
    }

    fn running(&self) -> bool {
        self.game.phase() == Phase::Active
    }

    fn start(&mut self) -> Result<(), JsValue> {
        if !self.game.start(self.now()) {
            return Ok(());
        }
        if let Some(screen) = &self.hud.start_screen {
            screen.class_list().add_1("hidden")?;
        }
        if let Some(backdrop) = &self.backdrop {
            backdrop.play();
        }
        self.audio.resume_music();
        self.flush()
    }

    fn toggle_pause(&mut self) -> Result<(), JsValue> {
        match self.game.toggle_pause(self.now()) {
            Phase::Paused => {
                // Stop the loop outright rather than letting frames pile up
                if let Some(id) = self.frame_id.take() {
                    self.window.cancel_animation_frame(id)?;
                }
                self.audio.pause_music();
                self.hud.show_paused(true, self.game.score())?;
            }
            Phase::Active => {
                self.audio.resume_music();
                self.hud.show_paused(false, self.game.score())?;
            }
            Phase::NotStarted => return Ok(()),
        }
        self.hud.show_environment(self.environment)
    }

    fn toggle_sound(&mut self) -> Result<(), JsValue> {
        let running = self.running();
        let enabled = self.audio.toggle(running);
        self.hud.show_sound(enabled)
    }

    fn set_environment(&mut self, environment: Environment) -> Result<(), JsValue> {
        if self.environment == environment {
            return Ok(());
        }
        info!("environment -> {}", environment);
        self.environment = environment;
        let running = self.running();
        if let Some(backdrop) = &self.backdrop {
            backdrop.set_environment(environment, running);
        }
        self.audio.set_environment(environment, running)?;
        self.hud.show_environment(environment)
    }

    fn resize(&mut self) {
        let rect = self.container.get_bounding_client_rect();
        self.game.resize(rect.width() as f32, rect.height() as f32);
    }

    fn on_frame(&mut self, timestamp: f64) -> Result<(), JsValue> {
        self.frame_id = None;
        self.game.tick(timestamp);
        self.flush()
    }

    fn press_start(&mut self, event: &Event) -> Result<(), JsValue> {
        if !self.running() {
            return Ok(());
        }
        let Some(point) = input::press_point(event) else {
            return Ok(());
        };
        let local = input::to_container(point, &self.container);
        if self.game.press_at(local).is_some() {
            event.prevent_default();
            self.flush()?;
        }
        Ok(())
    }

    fn press_end(&mut self) -> Result<(), JsValue> {
        self.game.release();
        self.flush()
    }

    /// Bring the DOM and audio in line with the game after any change
    fn flush(&mut self) -> Result<(), JsValue> {
        let events = self.game.take_events();
        self.play_effects(&events)?;

        if events.spawned > 0 || !events.cleared.is_empty() {
            if let Some(old) = self.target.take() {
                old.remove();
            }
        }
        match self.game.snapshot() {
            Some(view) => {
                if self.target.is_none() {
                    self.target = Some(TargetElements::create(&self.document, &self.container)?);
                }
                if let Some(target) = self.target.as_mut() {
                    target.update(&view)?;
                }
            }
            None => {
                if let Some(old) = self.target.take() {
                    old.remove();
                }
            }
        }

        let score = self.game.score();
        if self.shown_score != Some(score) {
            self.hud.score.set_text_content(Some(&score.to_string()));
            self.shown_score = Some(score);
        }
        Ok(())
    }

    fn play_effects(&self, events: &Events) -> Result<(), JsValue> {
        for burst in &events.cleared {
            effects::confetti(&self.document, &self.container, burst)?;
        }
        if events.spawned > 0 {
            self.audio.cue(Cue::Pop);
        }
        for hit in &events.hits {
            self.audio.cue(Cue::Hit);
            effects::floating_points(
                &self.document,
                &self.container,
                hit,
                self.game.session().tiers(),
            )?;
        }
        if events.miss_clicks > 0 {
            self.audio.cue(Cue::Miss);
        }
        Ok(())
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
    static FRAME: FrameCallback = Rc::new(RefCell::new(None));
}

fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> Option<R> {
    APP.with(|cell| match cell.try_borrow_mut() {
        Ok(mut app) => app.as_mut().map(f),
        Err(_) => {
            warn!("re-entrant event ignored");
            None
        }
    })
}

fn report(context: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        error!("{}: {:?}", context, err);
    }
}

fn request_frame() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let id = FRAME.with(|frame| {
        let frame = frame.borrow();
        let callback = frame
            .as_ref()
            .ok_or_else(|| JsValue::from_str("Frame loop not installed"))?;
        window.request_animation_frame(callback.as_ref().unchecked_ref())
    })?;
    with_app(|app| app.frame_id = Some(id));
    Ok(())
}

/// Keep exactly one frame pending while the session is active
fn ensure_frame() {
    let needs_frame = with_app(|app| app.running() && app.frame_id.is_none()).unwrap_or(false);
    if needs_frame {
        report("request frame", request_frame());
    }
}

fn install_frame_loop() {
    FRAME.with(|frame| {
        *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            if let Some(result) = with_app(|app| app.on_frame(timestamp)) {
                report("frame", result);
            }
            ensure_frame();
        }) as Box<dyn FnMut(f64)>));
    });
}

fn listen(
    target: &EventTarget,
    name: &str,
    passive: Option<bool>,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    match passive {
        Some(passive) => {
            let options = AddEventListenerOptions::new();
            options.set_passive(passive);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                name,
                closure.as_ref().unchecked_ref(),
                &options,
            )?;
        }
        None => {
            target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
        }
    }
    closure.forget();
    Ok(())
}

/// Wire a button to an app action; missing buttons are skipped with a warning
fn on_click(
    document: &Document,
    id: &'static str,
    action: impl Fn(&mut App) -> Result<(), JsValue> + 'static,
) -> Result<(), JsValue> {
    let Some(button) = optional_by_id(document, id) else {
        return Ok(());
    };
    listen(&button, "click", None, move |_event| {
        if let Some(result) = with_app(|app| action(app)) {
            report(id, result);
        }
        ensure_frame();
    })
}

fn by_id(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing #{}", id)))?
        .dyn_into::<HtmlElement>()
        .map_err(JsValue::from)
}

fn optional_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    let found = by_id(document, id).ok();
    if found.is_none() {
        warn!("#{} not found", id);
    }
    found
}

fn seed() -> u64 {
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(err) => {
            warn!("getrandom failed ({}), seeding from clock", err);
            js_sys::Date::now() as u64
        }
    }
}

fn wire_listeners(
    window: &Window,
    document: &Document,
    container: &HtmlElement,
) -> Result<(), JsValue> {
    on_click(document, "startButton", App::start)?;
    on_click(document, "pauseButton", App::toggle_pause)?;
    on_click(document, "resumeButton", App::toggle_pause)?;
    on_click(document, "soundButton", App::toggle_sound)?;
    for (id, env) in ENVIRONMENT_BUTTONS {
        on_click(document, id, move |app| app.set_environment(env))?;
    }

    for name in ["mousedown", "touchstart"] {
        listen(container, name, Some(false), |event| {
            if let Some(result) = with_app(|app| app.press_start(&event)) {
                report("press", result);
            }
        })?;
    }
    for name in ["mouseup", "mouseleave", "touchend", "touchcancel"] {
        listen(container, name, None, |_event| {
            if let Some(result) = with_app(|app| app.press_end()) {
                report("release", result);
            }
        })?;
    }
    // Keep the page from scrolling under the player's thumb
    listen(container, "touchmove", Some(false), |event| event.prevent_default())?;

    listen(window, "resize", None, |_event| {
        with_app(|app| app.resize());
    })?;

    if let Some(video) = document
        .query_selector(".background-video")?
        .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok())
    {
        listen(&video, "ended", None, |_event| {
            with_app(|app| {
                if app.running() {
                    if let Some(backdrop) = &app.backdrop {
                        backdrop.play();
                    }
                }
            });
        })?;
    }
    Ok(())
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    logger::init();
}

/// Build the game against the current page. `config_json` optionally
/// overrides tuning values (see `game_core::Config`).
#[wasm_bindgen]
pub fn init_game(config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json {
        Some(json) => Config::from_json(&json)
            .map_err(|e| JsValue::from_str(&format!("Invalid game config: {}", e)))?,
        None => Config::new(),
    };

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let container = document
        .query_selector(".game-container")?
        .ok_or_else(|| JsValue::from_str("Missing .game-container"))?
        .dyn_into::<HtmlElement>()
        .map_err(JsValue::from)?;

    let rect = container.get_bounding_client_rect();
    let arena = Arena::new(rect.width() as f32, rect.height() as f32);
    let game = Game::new(config, arena, seed())
        .map_err(|e| JsValue::from_str(&format!("Invalid game config: {}", e)))?;

    let backdrop = document
        .query_selector(".background-video")?
        .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok())
        .map(|video| {
            let source = document
                .get_element_by_id("videoSource")
                .and_then(|el| el.dyn_into::<HtmlSourceElement>().ok());
            Backdrop::new(video, source)
        });
    if backdrop.is_none() {
        warn!("no .background-video element");
    }

    let environment = Environment::default();
    let hud = Hud::find(&document)?;
    let audio = AudioDeck::new(environment)?;
    hud.show_environment(environment)?;
    hud.show_sound(audio.enabled())?;
    hud.score.set_text_content(Some("0"));

    wire_listeners(&window, &document, &container)?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(App {
            window,
            document,
            container,
            game,
            target: None,
            audio,
            backdrop,
            hud,
            environment,
            frame_id: None,
            shown_score: None,
        });
    });
    install_frame_loop();

    info!("game ready ({}x{} arena)", arena.width, arena.height);
    Ok(())
}
