//! Application state owned by the loop: config, world, input, viewport and the
//! pending event queue. One `tick` = drain input, step physics, draw.

use crate::config::GameConfig;
use crate::entities::World;
use crate::error::GameError;
use crate::input::{EventQueue, InputEvent, InputState};
use crate::physics;
use crate::render::{self, Surface};
use crate::viewport::Viewport;

pub struct Game {
    pub config: GameConfig,
    pub world: World,
    pub input: InputState,
    pub viewport: Viewport,
    events: EventQueue,
    frame: u64,
}

impl Game {
    pub fn new(config: GameConfig, window_width: f64, window_height: f64) -> Result<Self, GameError> {
        config.validate()?;
        let viewport = Viewport::fit(
            window_width,
            window_height,
            config.logical_width,
            config.logical_height,
        );
        log::info!(
            "game created: logical {}x{}, canvas {}x{} (scale {:.3})",
            config.logical_width,
            config.logical_height,
            viewport.width,
            viewport.height,
            viewport.scale
        );
        Ok(Self {
            world: World::new(&config),
            input: InputState::new(),
            viewport,
            events: EventQueue::new(),
            frame: 0,
            config,
        })
    }

    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    #[cfg(test)]
    fn pending_events(&self) -> usize {
        self.events.len()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Apply queued events in arrival order. Returns true if a resize changed the
    /// viewport.
    pub fn drain_events(&mut self) -> bool {
        if self.events.is_empty() {
            return false;
        }
        log::trace!("frame {}: draining {} input events", self.frame, self.events.len());
        let (w, h) = (self.config.logical_width, self.config.logical_height);
        let mut resized = false;
        while let Some(event) = self.events.pop() {
            if let Some((win_w, win_h)) = self.input.apply(&event, &self.viewport, w, h) {
                let viewport = Viewport::fit(win_w, win_h, w, h);
                if viewport != self.viewport {
                    log::debug!(
                        "viewport {}x{} -> {}x{}",
                        self.viewport.width,
                        self.viewport.height,
                        viewport.width,
                        viewport.height
                    );
                    self.viewport = viewport;
                    resized = true;
                }
            }
        }
        resized
    }

    pub fn apply_viewport<S: Surface + ?Sized>(&self, surface: &mut S) {
        render::apply_viewport(surface, &self.viewport);
    }

    pub fn update(&mut self) {
        physics::step(&mut self.world, &mut self.input, &self.config);
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), GameError> {
        render::draw_frame(surface, &self.world, &self.viewport, &self.config.palette)
    }

    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), GameError> {
        if self.drain_events() {
            self.apply_viewport(surface);
        }
        self.update();
        self.frame += 1;
        self.render(surface)
    }
}
