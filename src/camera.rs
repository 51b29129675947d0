use crate::state::Rect;

/// Viewport into the level, in level pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Camera {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Camera {
    pub fn new(w: i32, h: i32) -> Self {
        Camera { x: 0, y: 0, w, h }
    }

    pub fn on_resize(&mut self, w: i32, h: i32) {
        self.w = w;
        self.h = h;
    }

    pub fn view(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    /// Centers the view over `target` and keeps it inside `level`.
    pub fn center_on(&mut self, target: &Rect, level: &Rect) {
        let (cx, cy) = target.center();
        self.x = cx - self.w / 2;
        self.y = cy - self.h / 2;

        // Clamp order matters when the level is smaller than the view: the
        // left and top edges win.
        if self.x > level.right() - self.w {
            self.x = level.right() - self.w;
        }
        if self.x < level.x {
            self.x = level.x;
        }
        if self.y > level.bottom() - self.h {
            self.y = level.bottom() - self.h;
        }
        if self.y < level.y {
            self.y = level.y;
        }
    }

    pub fn to_screen(&self, x: i32, y: i32) -> (i32, i32) {
        (x - self.x, y - self.y)
    }
}
