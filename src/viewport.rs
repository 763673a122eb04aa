//! Fits the fixed logical resolution into the browser window.

/// Physical canvas size plus the logical -> pixel scale factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub scale: f64,
}

impl Viewport {
    /// Largest canvas with the logical aspect ratio that fits the window.
    /// Pixel sizes truncate the same way assigning a float to `canvas.width` does,
    /// and the scale is taken from the truncated width.
    pub fn fit(window_width: f64, window_height: f64, logical_width: f64, logical_height: f64) -> Self {
        let game_ratio = logical_width / logical_height;
        let window_ratio = window_width / window_height;
        let (w, h) = if window_ratio < game_ratio {
            // taller than the game: fit width
            (window_width, window_width / game_ratio)
        } else {
            (window_height * game_ratio, window_height)
        };
        let width = w.max(0.0) as u32;
        let height = h.max(0.0) as u32;
        Self {
            width,
            height,
            scale: width as f64 / logical_width,
        }
    }

    /// Window (client) coordinates to logical coordinates, given the canvas'
    /// top-left corner in client space.
    pub fn to_logical(&self, client: (f64, f64), origin: (f64, f64)) -> (f64, f64) {
        (
            (client.0 - origin.0) / self.scale,
            (client.1 - origin.1) / self.scale,
        )
    }
}
