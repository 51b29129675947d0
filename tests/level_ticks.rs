use dotslide::{
    Camera, Collider, Direction, KeyEvent, KinematicBody, ShapeProfile, TileMap, TileType,
    WorldConfig,
};
use std::path::Path;

fn load_level() -> (WorldConfig, TileMap) {
    let config = WorldConfig::default();
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/lazy.map");
    let map = TileMap::load_file(path, config.grid_layout()).unwrap();
    (config, map)
}

#[test]
fn test_level_file_loads_every_tile() {
    let (config, map) = load_level();
    assert_eq!(map.len(), config.grid_layout().total_tiles());
    assert_eq!(map.tile_at(0, 0).unwrap().tile_type, TileType::TopLeft);
    assert_eq!(map.tile_at(7, 5).unwrap().tile_type, TileType::Center);
    assert_eq!(map.level_bounds(), config.level_bounds());
}

#[test]
fn test_dot_stops_flush_against_left_wall() {
    let (config, map) = load_level();
    let mut dot = KinematicBody::new(100, 100, Collider::single(20, 20));
    dot.set_velocity(-10, 0);

    dot.advance(&map, &config.level_bounds());
    dot.advance(&map, &config.level_bounds());
    assert_eq!(dot.x, 80);

    let res = dot.advance(&map, &config.level_bounds());
    assert_eq!(dot.x, 80);
    assert!(res.on_left);
}

#[test]
fn test_dot_slides_along_wall() {
    let (config, map) = load_level();
    let mut dot = KinematicBody::new(85, 100, Collider::single(20, 20));
    dot.set_velocity(-10, 10);

    for tick in 1..=5 {
        let res = dot.advance(&map, &config.level_bounds());
        assert!(res.on_left);
        assert!(!res.blocked_y());
        assert_eq!((dot.x, dot.y), (85, 100 + tick * 10));
    }
}

#[test]
fn test_interior_block_stops_pixel_stack() {
    let (config, map) = load_level();
    let mut dot = KinematicBody::new(530, 420, Collider::stack(&ShapeProfile::dot()));
    let input = config.velocity_input();

    input.apply(
        &mut dot,
        KeyEvent::Pressed {
            dir: Direction::Right,
            repeat: false,
        },
    );
    dot.advance(&map, &config.level_bounds());
    assert_eq!(dot.x, 540);
    let res = dot.advance(&map, &config.level_bounds());
    assert_eq!(dot.x, 540);
    assert!(res.on_right);

    input.apply(
        &mut dot,
        KeyEvent::Released {
            dir: Direction::Right,
            repeat: false,
        },
    );
    assert_eq!((dot.vx, dot.vy), (0, 0));
}

#[test]
fn test_camera_follows_dot_through_level() {
    let (config, map) = load_level();
    let mut dot = KinematicBody::new(100, 100, Collider::single(20, 20));
    let mut camera = Camera::new(config.screen_width, config.screen_height);
    dot.set_velocity(10, 10);

    for _ in 0..200 {
        dot.advance(&map, &config.level_bounds());
        camera.center_on(&dot.extent(), &map.level_bounds());
        assert!(map.level_bounds().contains(&camera.view()));
        assert!(camera.view().overlaps(&dot.extent()));
    }

    // Ends in the bottom right corner, inside the border walls
    assert_eq!((dot.x, dot.y), (1180, 860));
    assert_eq!((camera.x, camera.y), (640, 480));
    assert!(map.visible_tiles(&camera.view()).count() > 0);
}

#[test]
fn test_viewport_bounds_differ_from_level_bounds() {
    let (config, _map) = load_level();
    let mut dot = KinematicBody::new(620, 0, Collider::single(20, 20));
    dot.set_velocity(10, 0);

    dot.advance(&(), &config.screen_bounds());
    assert_eq!(dot.x, 620);
    dot.advance(&(), &config.level_bounds());
    assert_eq!(dot.x, 630);
}
