// Integration tests (native) for the `starry-navigator` crate.
// These drive the public `Game` API with queued input events and a surface that
// discards drawing, so no browser is needed.

use starry_navigator::input::{InputEvent, TouchBatch, TouchPoint, KEY_JUMP, KEY_LEFT, KEY_RIGHT};
use starry_navigator::render::Surface;
use starry_navigator::{Game, GameConfig, GameError, Rect};

#[derive(Default)]
struct NullSurface {
    fills: usize,
    resizes: Vec<(u32, u32)>,
}

impl Surface for NullSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.resizes.push((width, height));
    }
    fn set_image_smoothing(&mut self, _enabled: bool) {}
    fn clear(&mut self, _width: f64, _height: f64) {}
    fn save(&mut self) {}
    fn scale(&mut self, _factor: f64) -> Result<(), GameError> {
        Ok(())
    }
    fn fill_rect(&mut self, _color: &str, _rect: Rect) {
        self.fills += 1;
    }
    fn restore(&mut self) {}
}

fn new_game() -> Game {
    Game::new(GameConfig::default(), 800.0, 450.0).unwrap()
}

fn run(game: &mut Game, surface: &mut NullSurface, ticks: usize) {
    for _ in 0..ticks {
        game.tick(surface).unwrap();
    }
}

fn touch(id: i32, x: f64, y: f64) -> TouchBatch {
    TouchBatch {
        origin: (0.0, 0.0),
        points: vec![TouchPoint { id, client_x: x, client_y: y }],
    }
}

#[test]
fn player_falls_onto_ground_from_spawn() {
    let mut game = new_game();
    let mut surface = NullSurface::default();
    run(&mut game, &mut surface, 10);
    assert!(!game.world.player.grounded);
    run(&mut game, &mut surface, 1);
    assert!(game.world.player.grounded);
    assert_eq!(game.world.player.y, 370.0);
    assert_eq!(game.world.player.dy, 0.0);

    // stays put while idle
    run(&mut game, &mut surface, 30);
    assert_eq!(game.world.player.y, 370.0);
    assert!(game.world.player.grounded);
    // 6 layer rects + 2 platforms + player per frame
    assert_eq!(surface.fills, 41 * 9);
}

#[test]
fn held_space_jumps_and_lands_back_exactly() {
    let mut game = new_game();
    let mut surface = NullSurface::default();
    run(&mut game, &mut surface, 11);
    assert!(game.world.player.grounded);

    game.push_event(InputEvent::KeyDown(KEY_JUMP.into()));
    run(&mut game, &mut surface, 1);
    assert_eq!(game.world.player.dy, -9.5);
    assert_eq!(game.world.player.y, 360.5);
    assert!(!game.world.player.grounded);

    game.push_event(InputEvent::KeyUp(KEY_JUMP.into()));
    let mut landed = false;
    for _ in 0..60 {
        run(&mut game, &mut surface, 1);
        if game.world.player.grounded {
            landed = true;
            break;
        }
    }
    assert!(landed);
    assert_eq!(game.world.player.y + game.world.player.height, 418.0);
}

#[test]
fn touch_left_region_press_and_release() {
    let mut game = new_game();
    let mut surface = NullSurface::default();
    game.push_event(InputEvent::TouchStart(touch(3, 100.0, 400.0)));
    run(&mut game, &mut surface, 1);
    assert!(game.input.touch.left);
    assert_eq!(game.world.player.x, 45.0);

    game.push_event(InputEvent::TouchEnd(touch(3, 100.0, 400.0)));
    run(&mut game, &mut surface, 1);
    assert!(!game.input.touch.left);
    assert_eq!(game.world.player.x, 45.0);
}

#[test]
fn touch_right_region_press_and_release() {
    let mut game = new_game();
    let mut surface = NullSurface::default();
    game.push_event(InputEvent::TouchStart(touch(5, 700.0, 400.0)));
    run(&mut game, &mut surface, 1);
    assert!(game.input.touch.right);
    assert_eq!(game.world.player.x, 55.0);

    game.push_event(InputEvent::TouchEnd(touch(5, 700.0, 400.0)));
    run(&mut game, &mut surface, 1);
    assert!(!game.input.touch.right);
    assert_eq!(game.world.player.x, 55.0);
}

#[test]
fn touch_jump_fires_once_per_press() {
    let mut game = new_game();
    let mut surface = NullSurface::default();
    run(&mut game, &mut surface, 11);

    game.push_event(InputEvent::TouchStart(touch(8, 400.0, 50.0)));
    run(&mut game, &mut surface, 1);
    assert!(!game.world.player.grounded);
    assert!(!game.input.wants_jump());

    // keep the finger down through the landing: no second jump
    for _ in 0..80 {
        run(&mut game, &mut surface, 1);
    }
    assert!(game.world.player.grounded);
    assert_eq!(game.input.touch.jump_touch_id, Some(8));

    game.push_event(InputEvent::TouchEnd(touch(8, 400.0, 50.0)));
    run(&mut game, &mut surface, 1);
    assert_eq!(game.input.touch.jump_touch_id, None);
}

#[test]
fn touch_move_changes_nothing() {
    let mut game = new_game();
    let mut surface = NullSurface::default();
    game.push_event(InputEvent::TouchStart(touch(1, 100.0, 400.0)));
    game.push_event(InputEvent::TouchMove(touch(1, 700.0, 50.0)));
    run(&mut game, &mut surface, 1);
    assert!(game.input.touch.left);
    assert!(!game.input.touch.right && !game.input.touch.jump);
}

#[test]
fn resize_refits_canvas_and_touch_mapping() {
    let mut game = new_game();
    let mut surface = NullSurface::default();
    game.push_event(InputEvent::Resize { width: 1600.0, height: 1200.0 });
    // canvas is 1600x900; (1000, 800) client -> (500, 400) logical, right half
    game.push_event(InputEvent::TouchStart(touch(2, 1000.0, 800.0)));
    run(&mut game, &mut surface, 1);
    assert_eq!(surface.resizes, vec![(1600, 900)]);
    assert_eq!(game.viewport.scale, 2.0);
    assert!(game.input.touch.right);
}

#[test]
fn walking_right_stops_at_screen_edge() {
    let mut game = new_game();
    let mut surface = NullSurface::default();
    game.push_event(InputEvent::KeyDown(KEY_RIGHT.into()));
    run(&mut game, &mut surface, 400);
    assert_eq!(game.world.player.x, 768.0);

    game.push_event(InputEvent::KeyUp(KEY_RIGHT.into()));
    game.push_event(InputEvent::KeyDown(KEY_LEFT.into()));
    run(&mut game, &mut surface, 400);
    assert_eq!(game.world.player.x, 0.0);
}

#[test]
fn invalid_config_is_rejected() {
    let config = GameConfig { logical_width: -1.0, ..GameConfig::default() };
    assert!(matches!(
        Game::new(config, 800.0, 450.0),
        Err(GameError::InvalidConfig(_))
    ));
}
