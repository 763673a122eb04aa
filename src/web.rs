//! Browser shell: canvas setup, DOM listeners and the animation-frame loop.
//!
//! Listeners only enqueue [`InputEvent`]s; the queued events are applied at the
//! start of the next frame. Everything runs on the page's single JS thread.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Event, EventTarget, HtmlCanvasElement, KeyboardEvent, TouchEvent,
    Window, window,
};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::Game;
use crate::geometry::Rect;
use crate::input::{InputEvent, TouchBatch, TouchPoint};
use crate::render::Surface;

const CANVAS_ID: &str = "gameCanvas";

// --- Canvas surface -----------------------------------------------------------

struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Surface for CanvasSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn set_image_smoothing(&mut self, enabled: bool) {
        self.ctx.set_image_smoothing_enabled(enabled);
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn scale(&mut self, factor: f64) -> Result<(), GameError> {
        self.ctx.scale(factor, factor).map_err(GameError::canvas)
    }

    fn fill_rect(&mut self, color: &str, rect: Rect) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }
}

// --- Runtime state -----------------------------------------------------------

struct WebGame {
    game: Game,
    surface: CanvasSurface,
}

thread_local! {
    static GAME: RefCell<Option<WebGame>> = const { RefCell::new(None) };
}

fn with_game(f: impl FnOnce(&mut Game)) {
    GAME.with(|cell| {
        if let Some(app) = cell.borrow_mut().as_mut() {
            f(&mut app.game);
        }
    });
}

// --- Entry --------------------------------------------------------------------

pub fn launch(config: GameConfig) -> Result<(), GameError> {
    if GAME.with(|cell| cell.borrow().is_some()) {
        log::warn!("game already running; ignoring second start");
        return Ok(());
    }

    let win = window().ok_or(GameError::MissingBrowserObject("window"))?;
    let doc = win
        .document()
        .ok_or(GameError::MissingBrowserObject("document"))?;

    // Reuse the page's canvas if it has one
    let canvas: HtmlCanvasElement = match doc.get_element_by_id(CANVAS_ID) {
        Some(el) => el
            .dyn_into()
            .map_err(|_| GameError::Dom(format!("#{CANVAS_ID} is not a canvas")))?,
        None => {
            let c: HtmlCanvasElement = doc
                .create_element("canvas")
                .map_err(GameError::dom)?
                .dyn_into()
                .map_err(|_| GameError::Dom("created element is not a canvas".into()))?;
            c.set_id(CANVAS_ID);
            c.set_attribute(
                "style",
                "display:block; margin:0 auto; background:#000; touch-action:none;",
            )
            .ok();
            doc.body()
                .ok_or(GameError::MissingBrowserObject("document body"))?
                .append_child(&c)
                .map_err(GameError::dom)?;
            c
        }
    };
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(GameError::dom)?
        .ok_or(GameError::MissingBrowserObject("2d context"))?
        .dyn_into()
        .map_err(|_| GameError::Dom("context is not a CanvasRenderingContext2d".into()))?;

    let (width, height) = window_size(&win)?;
    let game = Game::new(config, width, height)?;
    let mut surface = CanvasSurface {
        canvas: canvas.clone(),
        ctx,
    };
    game.apply_viewport(&mut surface);
    GAME.with(|cell| cell.replace(Some(WebGame { game, surface })));

    install_listeners(&win, &canvas)?;
    start_loop();
    log::info!("starry navigator running on #{CANVAS_ID}");
    Ok(())
}

fn window_size(win: &Window) -> Result<(f64, f64), GameError> {
    let width = win.inner_width().map_err(GameError::dom)?;
    let height = win.inner_height().map_err(GameError::dom)?;
    Ok((width.as_f64().unwrap_or(0.0), height.as_f64().unwrap_or(0.0)))
}

// --- Listeners ----------------------------------------------------------------

fn listen(
    target: &EventTarget,
    name: &str,
    closure: Closure<dyn FnMut(Event)>,
) -> Result<(), GameError> {
    target
        .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
        .map_err(GameError::dom)?;
    // listeners live as long as the page
    closure.forget();
    Ok(())
}

fn touch_batch(event: &TouchEvent, canvas: &HtmlCanvasElement) -> TouchBatch {
    let bounds = canvas.get_bounding_client_rect();
    let list = event.changed_touches();
    let points = (0..list.length())
        .filter_map(|idx| list.item(idx))
        .map(|touch| TouchPoint {
            id: touch.identifier(),
            client_x: touch.client_x() as f64,
            client_y: touch.client_y() as f64,
        })
        .collect();
    TouchBatch {
        origin: (bounds.left(), bounds.top()),
        points,
    }
}

fn install_listeners(win: &Window, canvas: &HtmlCanvasElement) -> Result<(), GameError> {
    // Keyboard (desktop testing)
    let keys: [(&str, fn(String) -> InputEvent); 2] = [
        ("keydown", InputEvent::KeyDown),
        ("keyup", InputEvent::KeyUp),
    ];
    for (name, wrap) in keys {
        let closure = Closure::<dyn FnMut(_)>::new(move |evt: Event| {
            if let Some(key) = evt.dyn_ref::<KeyboardEvent>() {
                let code = key.code();
                with_game(|g| g.push_event(wrap(code)));
            }
        });
        listen(win.as_ref(), name, closure)?;
    }

    // Touch controls; preventDefault keeps the page from scrolling or zooming
    let touches: [(&str, fn(TouchBatch) -> InputEvent); 4] = [
        ("touchstart", InputEvent::TouchStart),
        ("touchend", InputEvent::TouchEnd),
        ("touchcancel", InputEvent::TouchCancel),
        ("touchmove", InputEvent::TouchMove),
    ];
    for (name, wrap) in touches {
        let canvas_ref = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |evt: Event| {
            let Some(touch) = evt.dyn_ref::<TouchEvent>() else {
                return;
            };
            evt.prevent_default();
            let batch = touch_batch(touch, &canvas_ref);
            with_game(|g| g.push_event(wrap(batch)));
        });
        listen(canvas.as_ref(), name, closure)?;
    }

    {
        let closure = Closure::<dyn FnMut(_)>::new(move |_evt: Event| {
            let Some(win) = window() else {
                return;
            };
            match window_size(&win) {
                Ok((width, height)) => with_game(|g| g.push_event(InputEvent::Resize { width, height })),
                Err(err) => log::warn!("resize ignored: {err}"),
            }
        });
        listen(win.as_ref(), "resize", closure)?;
    }
    Ok(())
}

// --- Loop ---------------------------------------------------------------------

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        GAME.with(|cell| {
            if let Some(app) = cell.borrow_mut().as_mut() {
                if let Err(err) = app.game.tick(&mut app.surface) {
                    log::error!("frame {} failed: {err}", app.game.frame());
                }
            }
        });
        request_frame(&f);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&g);
}

fn request_frame(callback: &FrameCallback) {
    let Some(w) = window() else {
        return;
    };
    if let Some(closure) = callback.borrow().as_ref() {
        let _ = w.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}
