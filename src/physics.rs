use crate::state::{Circle, Collider, FloatBody, KinematicBody, Rect, Shape};

/// Read only set of things a body may not move into.
pub trait Obstacles {
    fn blocks(&self, shape: &Shape) -> bool;
}

impl Obstacles for () {
    fn blocks(&self, _shape: &Shape) -> bool {
        false
    }
}

impl Obstacles for Shape {
    fn blocks(&self, shape: &Shape) -> bool {
        self.overlaps(shape)
    }
}

impl Obstacles for Rect {
    fn blocks(&self, shape: &Shape) -> bool {
        Shape::Rect(*self).overlaps(shape)
    }
}

impl Obstacles for Circle {
    fn blocks(&self, shape: &Shape) -> bool {
        Shape::Circle(*self).overlaps(shape)
    }
}

impl<T: Obstacles> Obstacles for [T] {
    fn blocks(&self, shape: &Shape) -> bool {
        self.iter().any(|o| o.blocks(shape))
    }
}

impl<T: Obstacles> Obstacles for Vec<T> {
    fn blocks(&self, shape: &Shape) -> bool {
        self.as_slice().blocks(shape)
    }
}

impl Obstacles for Collider {
    fn blocks(&self, shape: &Shape) -> bool {
        self.shapes().any(|own| own.overlaps(shape))
    }
}

impl Obstacles for KinematicBody {
    fn blocks(&self, shape: &Shape) -> bool {
        self.collider.blocks(shape)
    }
}

/// Mixed bag of static rectangles and circles.
#[derive(Default, Clone, Debug)]
pub struct ObstacleSet {
    pub rects: Vec<Rect>,
    pub circles: Vec<Circle>,
}

impl ObstacleSet {
    pub fn new() -> ObstacleSet {
        ObstacleSet::default()
    }

    pub fn with_rect(mut self, rect: Rect) -> ObstacleSet {
        self.rects.push(rect);
        self
    }

    pub fn with_circle(mut self, circle: Circle) -> ObstacleSet {
        self.circles.push(circle);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty() && self.circles.is_empty()
    }
}

impl Obstacles for ObstacleSet {
    fn blocks(&self, shape: &Shape) -> bool {
        self.rects.blocks(shape) || self.circles.blocks(shape)
    }
}

/// Which sides got blocked during one tick.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveResult {
    pub on_left: bool,
    pub on_right: bool,
    pub on_top: bool,
    pub on_bottom: bool,
}

impl MoveResult {
    pub fn blocked_x(&self) -> bool {
        self.on_left || self.on_right
    }

    pub fn blocked_y(&self) -> bool {
        self.on_top || self.on_bottom
    }
}

fn is_rejected(body: &KinematicBody, obstacles: &dyn Obstacles, bounds: &Rect) -> bool {
    !bounds.contains(&body.collider.extent()) || body.collider.overlaps_any(obstacles)
}

/// Moves the body along X and then Y. An axis that would leave `bounds` or hit
/// an obstacle is reverted completely, the other axis still moves.
pub fn integrate_kinematic(
    body: &mut KinematicBody,
    obstacles: &dyn Obstacles,
    bounds: &Rect,
) -> MoveResult {
    let mut result = MoveResult::default();

    // Horizontal attempt first
    if body.vx != 0 {
        body.x += body.vx;
        body.collider.reposition_for_body(body.x, body.y);
        if is_rejected(body, obstacles, bounds) {
            body.x -= body.vx;
            body.collider.reposition_for_body(body.x, body.y);
            if body.vx > 0 {
                result.on_right = true;
            } else {
                result.on_left = true;
            }
        }
    }

    if body.vy != 0 {
        body.y += body.vy;
        body.collider.reposition_for_body(body.x, body.y);
        if is_rejected(body, obstacles, bounds) {
            body.y -= body.vy;
            body.collider.reposition_for_body(body.x, body.y);
            if body.vy > 0 {
                result.on_bottom = true;
            } else {
                result.on_top = true;
            }
        }
    }

    result
}

/// Frame independent movement without obstacles. The body is clamped flush
/// against the bounds instead of being reverted.
pub fn integrate_scaled(body: &mut FloatBody, time_step: f32, bounds: &Rect) -> MoveResult {
    let mut result = MoveResult::default();

    let left = bounds.x as f32;
    let right = bounds.right() as f32 - body.w;
    let top = bounds.y as f32;
    let bottom = bounds.bottom() as f32 - body.h;

    body.x += body.vx * time_step;
    if body.x < left {
        body.x = left;
        result.on_left = true;
    } else if body.x > right {
        body.x = right;
        result.on_right = true;
    }

    body.y += body.vy * time_step;
    if body.y < top {
        body.y = top;
        result.on_top = true;
    } else if body.y > bottom {
        body.y = bottom;
        result.on_bottom = true;
    }

    result
}
