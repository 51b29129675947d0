use super::common::{Circle, Rect, Shape};
use crate::physics::Obstacles;
use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub w: i32,
    pub h: i32,
}

/// Silhouette of a body as horizontal slices, top to bottom.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ShapeProfile {
    pub width: i32,
    pub segments: Vec<Segment>,
}

impl ShapeProfile {
    /// The 20x20 dot sprite.
    pub fn dot() -> ShapeProfile {
        let slices = [
            (6, 1),
            (10, 1),
            (14, 1),
            (16, 2),
            (18, 2),
            (20, 6),
            (18, 2),
            (16, 2),
            (14, 1),
            (10, 1),
            (6, 1),
        ];
        ShapeProfile {
            width: 20,
            segments: slices.iter().map(|&(w, h)| Segment { w, h }).collect(),
        }
    }

    pub fn height(&self) -> i32 {
        self.segments.iter().map(|s| s.h).sum()
    }

    /// Every segment must have a positive size and fit in `width`, and there
    /// must be at least one.
    pub fn validate(&self) -> Result<(), String> {
        if self.segments.is_empty() {
            return Err("shape profile has no segments".to_string());
        }
        if self.width <= 0 {
            return Err(format!("shape profile width {} is not positive", self.width));
        }
        for (i, s) in self.segments.iter().enumerate() {
            if s.w <= 0 || s.h <= 0 || s.w > self.width {
                return Err(format!(
                    "segment {} is {}x{}, profile width is {}",
                    i, s.w, s.h, self.width
                ));
            }
        }
        Ok(())
    }

    pub fn load_json(path: impl AsRef<Path>) -> io::Result<Self> {
        let s = fs::read_to_string(path)?;
        let profile: ShapeProfile =
            serde_json::from_str(&s).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        profile
            .validate()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(profile)
    }

    pub fn save_json(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let s = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, s)
    }
}

/// Hitbox of a single body. The variant is fixed when the body is built.
#[derive(Clone, Debug, PartialEq)]
pub enum Collider {
    Single {
        offset_x: i32,
        offset_y: i32,
        rect: Rect,
    },
    Stack {
        width: i32,
        rects: Vec<Rect>,
    },
    Circle(Circle),
}

impl Collider {
    pub fn single(w: i32, h: i32) -> Collider {
        Collider::Single {
            offset_x: 0,
            offset_y: 0,
            rect: Rect::new(0, 0, w, h),
        }
    }

    pub fn single_with_offset(offset_x: i32, offset_y: i32, w: i32, h: i32) -> Collider {
        Collider::Single {
            offset_x,
            offset_y,
            rect: Rect::new(offset_x, offset_y, w, h),
        }
    }

    pub fn stack(profile: &ShapeProfile) -> Collider {
        let mut collider = Collider::Stack {
            width: profile.width,
            rects: profile
                .segments
                .iter()
                .map(|s| Rect::new(0, 0, s.w, s.h))
                .collect(),
        };
        collider.reposition_for_body(0, 0);
        collider
    }

    pub fn circle(r: i32) -> Collider {
        Collider::Circle(Circle::new(0, 0, r))
    }

    pub fn reposition_for_body(&mut self, x: i32, y: i32) {
        match self {
            Collider::Single {
                offset_x,
                offset_y,
                rect,
            } => {
                rect.x = x + *offset_x;
                rect.y = y + *offset_y;
            }
            Collider::Stack { width, rects } => {
                let mut row_offset = 0;
                for rect in rects.iter_mut() {
                    rect.x = x + (*width - rect.w) / 2;
                    rect.y = y + row_offset;
                    row_offset += rect.h;
                }
            }
            Collider::Circle(circle) => {
                circle.x = x;
                circle.y = y;
            }
        }
    }

    pub fn shapes(&self) -> Box<dyn Iterator<Item = Shape> + '_> {
        match self {
            Collider::Single { rect, .. } => Box::new(std::iter::once(Shape::Rect(*rect))),
            Collider::Stack { rects, .. } => Box::new(rects.iter().map(|r| Shape::Rect(*r))),
            Collider::Circle(circle) => Box::new(std::iter::once(Shape::Circle(*circle))),
        }
    }

    /// Bounding rectangle of every owned shape.
    pub fn extent(&self) -> Rect {
        let mut shapes = self.shapes().map(|s| s.bounding_rect());
        match shapes.next() {
            Some(first) => shapes.fold(first, |acc, r| acc.union(&r)),
            None => Rect::new(0, 0, 0, 0),
        }
    }

    pub fn overlaps_any(&self, obstacles: &dyn Obstacles) -> bool {
        self.shapes().any(|shape| obstacles.blocks(&shape))
    }
}
