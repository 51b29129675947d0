use super::collider::Collider;
use super::common::Rect;
use crate::physics::{MoveResult, Obstacles, integrate_kinematic, integrate_scaled};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum MotionState {
    Idle,
    Moving,
}

/// A body with integer position and velocity and its own hitbox.
#[derive(Clone, Debug)]
pub struct KinematicBody {
    pub x: i32,
    pub y: i32,
    pub vx: i32,
    pub vy: i32,
    pub collider: Collider,
}

impl KinematicBody {
    pub fn new(x: i32, y: i32, collider: Collider) -> Self {
        let mut body = KinematicBody {
            x,
            y,
            vx: 0,
            vy: 0,
            collider,
        };
        body.collider.reposition_for_body(x, y);
        body
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
        self.collider.reposition_for_body(x, y);
    }

    pub fn set_velocity(&mut self, vx: i32, vy: i32) {
        self.vx = vx;
        self.vy = vy;
    }

    pub fn add_velocity(&mut self, dvx: i32, dvy: i32) {
        self.vx += dvx;
        self.vy += dvy;
    }

    pub fn state(&self) -> MotionState {
        if self.vx == 0 && self.vy == 0 {
            MotionState::Idle
        } else {
            MotionState::Moving
        }
    }

    pub fn advance(&mut self, obstacles: &dyn Obstacles, bounds: &Rect) -> MoveResult {
        integrate_kinematic(self, obstacles, bounds)
    }

    pub fn extent(&self) -> Rect {
        self.collider.extent()
    }
}

/// Sub pixel body moved by `velocity * seconds`, for frame rate independent movement.
#[derive(Clone, Copy, Debug)]
pub struct FloatBody {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub vx: f32,
    pub vy: f32,
}

impl FloatBody {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        FloatBody {
            x,
            y,
            w,
            h,
            vx: 0.0,
            vy: 0.0,
        }
    }

    pub fn advance_scaled(&mut self, time_step: f32, bounds: &Rect) -> MoveResult {
        integrate_scaled(self, time_step, bounds)
    }

    /// Position snapped to whole pixels.
    pub fn pixel_pos(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}
