//! Collision and movement core for small tile based 2D games.
//!
//! A host loop feeds key transitions through [`input::VelocityInput`], calls
//! [`KinematicBody::advance`] once per tick against the obstacles of the
//! level, and reads the body position back for drawing.

pub mod camera;
pub mod config;
pub mod input;
pub mod particles;
pub mod physics;
pub mod save_data;
pub mod state;
pub mod timer;

pub use camera::Camera;
pub use config::WorldConfig;
pub use input::{Direction, KeyEvent, VelocityInput};
pub use physics::{MoveResult, ObstacleSet, Obstacles};
pub use state::{
    Circle, Collider, FloatBody, GridLayout, KinematicBody, LoadError, MotionState, Rect, Shape,
    ShapeProfile, Tile, TileMap, TileType,
};
