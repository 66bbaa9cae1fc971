// Particle data and the per-tick update rule, kept free of any web-sys
// types so the whole simulation can be exercised natively

use rand::Rng;
use vecmath::Vector2;

pub const PARTICLE_COUNT: usize = 60;
pub const LINK_DISTANCE: f64 = 150.0;

#[derive(Copy, Clone, Debug)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
}

impl Particle {
    pub fn new<R: Rng>(rng: &mut R, width: f64, height: f64) -> Particle {
        let mut p = Particle {
            pos: [0.0, 0.0],
            vel: [0.0, 0.0],
            radius: 0.0,
        };
        p.reset(rng, width, height);
        p
    }

    // Re-rolls every field against the current surface bounds. Also serves
    // as the "destruction" event: an out-of-bounds particle is recreated in
    // place rather than removed from the collection.
    pub fn reset<R: Rng>(&mut self, rng: &mut R, width: f64, height: f64) {
        self.pos = [rng.gen::<f64>() * width, rng.gen::<f64>() * height];
        self.vel = [
            (rng.gen::<f64>() - 0.5) * 0.5,
            (rng.gen::<f64>() - 0.5) * 0.5,
        ];
        self.radius = rng.gen::<f64>() * 2.0 + 1.0;
    }

    // One tick of drift. A particle that leaves the surface on any edge is
    // reset to a fresh random state, never reflected off the wall.
    pub fn advance<R: Rng>(&mut self, rng: &mut R, width: f64, height: f64) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        let [x, y] = self.pos;
        if x < 0.0 || x > width || y < 0.0 || y > height {
            self.reset(rng, width, height);
        }
    }
}

/// Opacity of the link between two particles `distance` apart, or `None`
/// when they are too far apart to be linked. Fully opaque at distance 0,
/// fading linearly to nothing at `LINK_DISTANCE`.
pub fn link_alpha(distance: f64) -> Option<f64> {
    if distance < LINK_DISTANCE {
        Some(1.0 - distance / LINK_DISTANCE)
    } else {
        None
    }
}

/// Fixed-size collection of particles. Iteration order is stable within a
/// frame so every unordered pair is visited exactly once per pass.
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(count: usize, width: f64, height: f64) -> ParticleField {
        let mut rng = rand::thread_rng();
        let particles = (0..count)
            .map(|_| Particle::new(&mut rng, width, height))
            .collect();
        ParticleField { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn get(&self, i: usize) -> Particle {
        self.particles[i]
    }

    pub fn advance<R: Rng>(&mut self, i: usize, rng: &mut R, width: f64, height: f64) {
        self.particles[i].advance(rng, width, height);
    }

    // Links from particle `i` to every later particle within range. Earlier
    // indices were already paired with `i` on their own pass.
    pub fn links_from(&self, i: usize) -> Vec<(usize, f64)> {
        let p = self.particles[i];
        self.particles[i + 1..]
            .iter()
            .enumerate()
            .filter_map(|(offset, other)| {
                let distance = vecmath::vec2_len(vecmath::vec2_sub(other.pos, p.pos));
                link_alpha(distance).map(|alpha| (i + 1 + offset, alpha))
            })
            .collect()
    }
}
