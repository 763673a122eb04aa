//! Tuning constants for the platformer. `GameConfig::default()` is the shipped
//! game; JSON overrides are available behind the `serde_json` feature.

use crate::error::GameError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Flat colors used by the renderer (CSS color strings).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Palette {
    pub player: String,
    /// Back to front; one entry per background layer.
    pub layers: Vec<String>,
    pub platform: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            player: "#00FF00".to_string(),
            layers: vec![
                "#220044".to_string(),
                "#440088".to_string(),
                "#6600CC".to_string(),
            ],
            platform: "#AAAAAA".to_string(),
        }
    }
}

/// Gameplay constants. Physics values are per tick (one animation frame), not per
/// second.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub logical_width: f64,
    pub logical_height: f64,
    pub player_speed: f64,
    pub gravity: f64,
    pub jump_power: f64,
    /// Base unit for player and platform sizes.
    pub tile_size: f64,
    /// Scroll speed per background layer, back to front (slowest first).
    pub layer_speeds: Vec<f64>,
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            logical_width: 800.0,
            logical_height: 450.0,
            player_speed: 5.0,
            gravity: 0.5,
            jump_power: 10.0,
            tile_size: 32.0,
            layer_speeds: vec![0.5, 1.0, 2.0],
            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    /// Check the values the physics and layout code divide by or scale with.
    pub fn validate(&self) -> Result<(), GameError> {
        let positive = [
            ("logical_width", self.logical_width),
            ("logical_height", self.logical_height),
            ("player_speed", self.player_speed),
            ("jump_power", self.jump_power),
            ("tile_size", self.tile_size),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(GameError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if !self.gravity.is_finite() || self.gravity < 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "gravity must be a non-negative number, got {}",
                self.gravity
            )));
        }
        if let Some(bad) = self
            .layer_speeds
            .iter()
            .find(|s| !s.is_finite() || **s < 0.0)
        {
            return Err(GameError::InvalidConfig(format!(
                "layer speeds must be non-negative numbers, got {bad}"
            )));
        }
        if self.layer_speeds.len() != self.palette.layers.len() {
            return Err(GameError::InvalidConfig(format!(
                "{} layer speeds but {} layer colors",
                self.layer_speeds.len(),
                self.palette.layers.len()
            )));
        }
        // Player height is 1.5 tiles and spawns two tiles above the bottom edge.
        if self.tile_size * 3.5 > self.logical_height || self.tile_size > self.logical_width {
            return Err(GameError::InvalidConfig(format!(
                "tile_size {} does not fit a {}x{} screen",
                self.tile_size, self.logical_width, self.logical_height
            )));
        }
        Ok(())
    }

    /// Parse a (possibly partial) JSON config; missing fields keep their defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
