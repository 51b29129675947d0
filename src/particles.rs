use rand::Rng;

pub const TOTAL_PARTICLES: usize = 20;
const MAX_FRAME: u32 = 10;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ParticleKind {
    Red,
    Green,
    Blue,
}

impl ParticleKind {
    pub const ALL: [ParticleKind; 3] = [ParticleKind::Red, ParticleKind::Green, ParticleKind::Blue];
}

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub x: i32,
    pub y: i32,
    pub frame: u32,
    pub kind: ParticleKind,
}

impl Particle {
    /// Spawns somewhere in a 25 px square starting 5 px up and left of `x, y`.
    pub fn spawn(x: i32, y: i32, rng: &mut impl Rng) -> Self {
        Particle {
            x: x - 5 + rng.random_range(0..25),
            y: y - 5 + rng.random_range(0..25),
            frame: rng.random_range(0..5),
            kind: ParticleKind::ALL[rng.random_range(0..ParticleKind::ALL.len())],
        }
    }

    pub fn is_dead(&self) -> bool {
        self.frame > MAX_FRAME
    }

    /// Shimmer overlay shows every other frame.
    pub fn shimmer(&self) -> bool {
        self.frame % 2 == 0
    }

    pub fn tick(&mut self) {
        self.frame += 1;
    }
}

/// Trail of particles following a body.
pub struct ParticleEmitter {
    particles: Vec<Particle>,
}

impl ParticleEmitter {
    pub fn new(x: i32, y: i32, rng: &mut impl Rng) -> Self {
        let particles = (0..TOTAL_PARTICLES)
            .map(|_| Particle::spawn(x, y, rng))
            .collect();
        ParticleEmitter { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Replaces dead particles around `x, y`, then ages every particle.
    pub fn update(&mut self, x: i32, y: i32, rng: &mut impl Rng) {
        for particle in &mut self.particles {
            if particle.is_dead() {
                *particle = Particle::spawn(x, y, rng);
            }
            particle.tick();
        }
    }
}
