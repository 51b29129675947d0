use serde::{Deserialize, Serialize};

/// Axis aligned rectangle, `x, y` is the top left corner.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        rect_overlap(self, other)
    }

    /// True when `other` lies fully inside `self`. Shared edges count as inside.
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.right() <= self.right()
            && other.y >= self.y
            && other.bottom() <= self.bottom()
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect {
            x,
            y,
            w: self.right().max(other.right()) - x,
            h: self.bottom().max(other.bottom()) - y,
        }
    }
}

/// Circle, `x, y` is the center.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Circle {
    pub x: i32,
    pub y: i32,
    pub r: i32,
}

impl Circle {
    pub const fn new(x: i32, y: i32, r: i32) -> Circle {
        Circle { x, y, r }
    }

    pub fn bounding_rect(&self) -> Rect {
        Rect {
            x: self.x - self.r,
            y: self.y - self.r,
            w: self.r * 2,
            h: self.r * 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Rect(Rect),
    Circle(Circle),
}

impl Shape {
    pub fn overlaps(&self, other: &Shape) -> bool {
        match (self, other) {
            (Shape::Rect(a), Shape::Rect(b)) => rect_overlap(a, b),
            (Shape::Circle(a), Shape::Circle(b)) => circle_overlap(a, b),
            (Shape::Circle(c), Shape::Rect(r)) | (Shape::Rect(r), Shape::Circle(c)) => {
                circle_rect_overlap(c, r)
            }
        }
    }

    pub fn bounding_rect(&self) -> Rect {
        match self {
            Shape::Rect(rect) => *rect,
            Shape::Circle(circle) => circle.bounding_rect(),
        }
    }
}

impl From<Rect> for Shape {
    fn from(rect: Rect) -> Shape {
        Shape::Rect(rect)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Shape {
        Shape::Circle(circle)
    }
}

/// Strict overlap on both axes. Rectangles sharing an edge do not overlap.
pub fn rect_overlap(a: &Rect, b: &Rect) -> bool {
    !(a.x + a.w <= b.x || b.x + b.w <= a.x || a.y + a.h <= b.y || b.y + b.h <= a.y)
}

/// Tangent circles do not overlap.
pub fn circle_overlap(a: &Circle, b: &Circle) -> bool {
    let total_radius = a.r as i64 + b.r as i64;
    distance_squared(a.x, a.y, b.x, b.y) < total_radius.saturating_mul(total_radius)
}

pub fn circle_rect_overlap(c: &Circle, r: &Rect) -> bool {
    // Closest point on the rectangle to the circle center
    let closest_x = c.x.clamp(r.x, r.x + r.w);
    let closest_y = c.y.clamp(r.y, r.y + r.h);

    let radius = c.r as i64;
    distance_squared(c.x, c.y, closest_x, closest_y) < radius.saturating_mul(radius)
}

/// Saturates at `i64::MAX` for points further apart than that.
pub fn distance_squared(x1: i32, y1: i32, x2: i32, y2: i32) -> i64 {
    let dx = x2 as i64 - x1 as i64;
    let dy = y2 as i64 - y1 as i64;
    dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
}
