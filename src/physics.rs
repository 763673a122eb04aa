//! Per-tick update: movement, jump, gravity, landing and background scroll.
//!
//! Constants are applied once per call with no time delta, so simulation speed
//! follows the display refresh rate.

use crate::config::GameConfig;
use crate::entities::World;
use crate::input::InputState;

pub fn step(world: &mut World, input: &mut InputState, config: &GameConfig) {
    move_player(world, input, config);
    resolve_landing(world);
    scroll_layers(world, config.logical_width);
}

fn move_player(world: &mut World, input: &mut InputState, config: &GameConfig) {
    let player = &mut world.player;

    // right is checked last and wins when both are held
    player.dx = 0.0;
    if input.wants_left() {
        player.dx = -config.player_speed;
    }
    if input.wants_right() {
        player.dx = config.player_speed;
    }
    player.x += player.dx;

    if input.wants_jump() && player.grounded {
        player.dy = -config.jump_power;
        player.grounded = false;
        input.consume_jump();
    }
    player.dy += config.gravity;
    player.y += player.dy;

    let max_x = config.logical_width - player.width;
    if player.x < 0.0 {
        player.x = 0.0;
    }
    if player.x > max_x {
        player.x = max_x;
    }
}

/// Only top landings are resolved; the player passes through platform sides and
/// undersides.
fn resolve_landing(world: &mut World) {
    let player = &mut world.player;
    player.grounded = false;
    for platform in &world.platforms {
        if !player.rect().overlaps(&platform.rect()) {
            continue;
        }
        let previous_bottom = player.bottom() - player.dy;
        if player.dy > 0.0 && previous_bottom <= platform.y {
            player.y = platform.y - player.height;
            player.dy = 0.0;
            player.grounded = true;
        }
    }
}

fn scroll_layers(world: &mut World, logical_width: f64) {
    for layer in &mut world.layers {
        layer.x -= layer.speed;
        if layer.x <= -logical_width {
            layer.x = 0.0;
        }
    }
}
