//! Keyboard and touch input state.
//!
//! DOM listeners never touch game state directly: they push an [`InputEvent`] onto
//! the [`EventQueue`], and the game drains the queue once per frame before the
//! physics step. Touch points carry raw client coordinates; they are converted to
//! logical coordinates at drain time with whatever viewport is current at that
//! point in the queue, so a resize queued before a touch applies to it.

use std::collections::{HashMap, VecDeque};

use crate::viewport::Viewport;

// --- Key codes (KeyboardEvent.code) -----------------------------------------

pub const KEY_LEFT: &str = "ArrowLeft";
pub const KEY_RIGHT: &str = "ArrowRight";
pub const KEY_JUMP: &str = "Space";

// --- Events -------------------------------------------------------------------

/// One touch point from `TouchEvent.changedTouches`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: i32,
    pub client_x: f64,
    pub client_y: f64,
}

/// A touch event batch together with the canvas top-left in client space at the
/// moment the event fired.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchBatch {
    pub origin: (f64, f64),
    pub points: Vec<TouchPoint>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    KeyDown(String),
    KeyUp(String),
    TouchStart(TouchBatch),
    TouchEnd(TouchBatch),
    TouchCancel(TouchBatch),
    TouchMove(TouchBatch),
    /// Window inner size in CSS pixels.
    Resize { width: f64, height: f64 },
}

/// Single-consumer FIFO of input events.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn pop(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

// --- Touch regions --------------------------------------------------------------

/// On-screen control regions in logical coordinates. The top third is the jump
/// button, the lower two thirds are split into left / right halves. A point exactly
/// on the one-third line belongs to no region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Region {
    Left,
    Right,
}

fn movement_region(x: f64, y: f64, logical_width: f64, logical_height: f64) -> Option<Region> {
    let half = logical_width / 2.0;
    if !(y > logical_height / 3.0) {
        None
    } else if x < half {
        Some(Region::Left)
    } else if x >= half {
        Some(Region::Right)
    } else {
        None
    }
}

fn in_jump_region(y: f64, logical_height: f64) -> bool {
    y < logical_height / 3.0
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchControls {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Touch currently driving `jump`; only its release clears the jump flag.
    pub jump_touch_id: Option<i32>,
}

// --- Input state ----------------------------------------------------------------

#[derive(Clone, Debug, Default)]
pub struct InputState {
    keys: HashMap<String, bool>,
    pub touch: TouchControls,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, code: &str) {
        self.keys.insert(code.to_string(), true);
    }

    pub fn key_up(&mut self, code: &str) {
        self.keys.insert(code.to_string(), false);
    }

    pub fn is_key_held(&self, code: &str) -> bool {
        self.keys.get(code).copied().unwrap_or(false)
    }

    pub fn touch_start(&mut self, points: &[(i32, f64, f64)], logical_width: f64, logical_height: f64) {
        for &(id, x, y) in points {
            match movement_region(x, y, logical_width, logical_height) {
                Some(Region::Left) => self.touch.left = true,
                Some(Region::Right) => self.touch.right = true,
                None => {}
            }
            if in_jump_region(y, logical_height) && !self.touch.jump {
                self.touch.jump = true;
                self.touch.jump_touch_id = Some(id);
            }
        }
    }

    /// Shared by `touchend` and `touchcancel`.
    pub fn touch_end(&mut self, points: &[(i32, f64, f64)], logical_width: f64, logical_height: f64) {
        for &(id, x, y) in points {
            match movement_region(x, y, logical_width, logical_height) {
                Some(Region::Left) => self.touch.left = false,
                Some(Region::Right) => self.touch.right = false,
                None => {}
            }
            if self.touch.jump_touch_id == Some(id) {
                self.touch.jump = false;
                self.touch.jump_touch_id = None;
            }
        }
    }

    /// Apply one queued event. Returns the new window size for resize events so the
    /// caller can refit the viewport; touch coordinates are converted with
    /// `viewport` as it is at this point in the queue. Touches are dropped while
    /// the canvas has no area, since they cannot be mapped to logical space.
    pub fn apply(
        &mut self,
        event: &InputEvent,
        viewport: &Viewport,
        logical_width: f64,
        logical_height: f64,
    ) -> Option<(f64, f64)> {
        let logical = |batch: &TouchBatch| -> Vec<(i32, f64, f64)> {
            batch
                .points
                .iter()
                .map(|p| {
                    let (x, y) = viewport.to_logical((p.client_x, p.client_y), batch.origin);
                    (p.id, x, y)
                })
                .collect()
        };
        let mappable = viewport.scale > 0.0;
        match event {
            InputEvent::KeyDown(code) => self.key_down(code),
            InputEvent::KeyUp(code) => self.key_up(code),
            InputEvent::TouchStart(batch) if mappable => {
                self.touch_start(&logical(batch), logical_width, logical_height)
            }
            InputEvent::TouchEnd(batch) | InputEvent::TouchCancel(batch) if mappable => {
                self.touch_end(&logical(batch), logical_width, logical_height)
            }
            InputEvent::TouchStart(_) | InputEvent::TouchEnd(_) | InputEvent::TouchCancel(_) => {
                log::debug!("touch ignored: canvas has zero size");
            }
            // dragging does not re-evaluate which region a finger is in
            InputEvent::TouchMove(_) => {}
            InputEvent::Resize { width, height } => return Some((*width, *height)),
        }
        None
    }

    pub fn wants_left(&self) -> bool {
        self.is_key_held(KEY_LEFT) || self.touch.left
    }

    pub fn wants_right(&self) -> bool {
        self.is_key_held(KEY_RIGHT) || self.touch.right
    }

    pub fn wants_jump(&self) -> bool {
        self.is_key_held(KEY_JUMP) || self.touch.jump
    }

    /// A touch jump fires once per press. The owning touch id is kept until that
    /// finger lifts; a held Space key keeps requesting.
    pub fn consume_jump(&mut self) {
        self.touch.jump = false;
    }
}
