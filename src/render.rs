//! Frame drawing. Everything is a flat-colored rectangle painted in logical
//! coordinates under a uniform scale transform.

use crate::config::Palette;
use crate::entities::World;
use crate::error::GameError;
use crate::geometry::Rect;
use crate::viewport::Viewport;

/// The handful of 2d-canvas operations the game needs. The browser build
/// implements it on top of `CanvasRenderingContext2d`.
pub trait Surface {
    /// Set the backing pixel size of the drawing surface.
    fn resize(&mut self, width: u32, height: u32);
    fn set_image_smoothing(&mut self, enabled: bool);
    /// Clear a rectangle in physical pixels.
    fn clear(&mut self, width: f64, height: f64);
    fn save(&mut self);
    fn scale(&mut self, factor: f64) -> Result<(), GameError>;
    fn fill_rect(&mut self, color: &str, rect: Rect);
    fn restore(&mut self);
}

/// Push a freshly computed viewport to the surface. Resizing a canvas resets its
/// context state, so smoothing is switched off again every time.
pub fn apply_viewport<S: Surface + ?Sized>(surface: &mut S, viewport: &Viewport) {
    surface.resize(viewport.width, viewport.height);
    surface.set_image_smoothing(false);
}

/// Draw one full frame: background layers (each tiled twice for wraparound),
/// platforms, then the player. Nothing carries over from the previous frame.
pub fn draw_frame<S: Surface + ?Sized>(
    surface: &mut S,
    world: &World,
    viewport: &Viewport,
    palette: &Palette,
) -> Result<(), GameError> {
    surface.clear(viewport.width as f64, viewport.height as f64);
    surface.save();
    let painted = paint_scene(surface, world, viewport.scale, palette);
    // always pop the transform, even if scaling failed
    surface.restore();
    painted
}

fn paint_scene<S: Surface + ?Sized>(
    surface: &mut S,
    world: &World,
    scale: f64,
    palette: &Palette,
) -> Result<(), GameError> {
    surface.scale(scale)?;

    for layer in &world.layers {
        let rect = layer.rect();
        surface.fill_rect(&layer.color, rect);
        surface.fill_rect(&layer.color, Rect { x: rect.x + rect.width, ..rect });
    }
    for platform in &world.platforms {
        surface.fill_rect(&platform.color, platform.rect());
    }
    surface.fill_rect(&palette.player, world.player.rect());
    Ok(())
}
