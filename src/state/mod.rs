pub mod body;
pub mod collider;
pub mod common;
pub mod tile_map;

pub use body::{FloatBody, KinematicBody, MotionState};
pub use collider::{Collider, Segment, ShapeProfile};
pub use common::{
    Circle, Rect, Shape, circle_overlap, circle_rect_overlap, distance_squared, rect_overlap,
};
pub use tile_map::{GridLayout, LoadError, Tile, TileMap, TileType};
