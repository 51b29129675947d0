use crate::state::KinematicBody;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn unit(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum KeyEvent {
    Pressed { dir: Direction, repeat: bool },
    Released { dir: Direction, repeat: bool },
}

/// Turns directional key transitions into velocity changes.
#[derive(Clone, Copy, Debug)]
pub struct VelocityInput {
    pub step: i32,
}

impl Default for VelocityInput {
    fn default() -> Self {
        VelocityInput { step: 10 }
    }
}

impl VelocityInput {
    pub fn new(step: i32) -> Self {
        VelocityInput { step }
    }

    pub fn apply(&self, body: &mut KinematicBody, event: KeyEvent) {
        let (sign, dir) = match event {
            KeyEvent::Pressed { repeat: true, .. } | KeyEvent::Released { repeat: true, .. } => {
                return;
            }
            KeyEvent::Pressed { dir, .. } => (1, dir),
            KeyEvent::Released { dir, .. } => (-1, dir),
        };
        let (ux, uy) = dir.unit();
        body.add_velocity(sign * ux * self.step, sign * uy * self.step);
    }
}
