//! Player, background layers and platforms, plus the starting world.

use crate::config::GameConfig;
use crate::geometry::Rect;

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub width: f64,
    pub height: f64,
    pub grounded: bool,
}

impl Player {
    /// One tile wide, one and a half tiles tall, spawned at x = 50 with its feet
    /// two tiles above the bottom of the screen (it falls onto the ground).
    pub fn spawn(config: &GameConfig) -> Self {
        let width = config.tile_size;
        let height = config.tile_size * 1.5;
        Self {
            x: 50.0,
            y: config.logical_height - height - config.tile_size * 2.0,
            dx: 0.0,
            dy: 0.0,
            width,
            height,
            grounded: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Screen-sized parallax layer. Only `x` changes after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundLayer {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub speed: f64,
}

impl BackgroundLayer {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Platform {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

impl Platform {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct World {
    pub player: Player,
    pub layers: Vec<BackgroundLayer>,
    pub platforms: Vec<Platform>,
}

impl World {
    pub fn new(config: &GameConfig) -> Self {
        let (w, h, tile) = (config.logical_width, config.logical_height, config.tile_size);

        let layers = config
            .layer_speeds
            .iter()
            .zip(&config.palette.layers)
            .map(|(&speed, color)| BackgroundLayer {
                x: 0.0,
                y: 0.0,
                width: w,
                height: h,
                color: color.clone(),
                speed,
            })
            .collect();

        let platform = |x: f64, y: f64, width: f64, height: f64| Platform {
            x,
            y,
            width,
            height,
            color: config.palette.platform.clone(),
        };
        let platforms = vec![
            // ground strip
            platform(0.0, h - tile, w, tile),
            // floating island
            platform(w * 0.5, h - tile * 4.0, tile * 5.0, tile),
        ];

        Self {
            player: Player::spawn(config),
            layers,
            platforms,
        }
    }
}
