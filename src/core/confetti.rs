// Confetti particle simulation, rendered by the 2D overlay layer.
//
// Positions are in normalized viewport coordinates, origin top-left,
// y growing downward, so the drawing side only multiplies by the canvas
// backing size.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::FRAC_PI_2;

use super::constants::*;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: [f32; 3],
    pub rotation: f32,
    pub spin: f32,
    pub age_ms: f32,
    pub lifetime_ms: f32,
}

impl Particle {
    pub fn alive(&self) -> bool {
        self.age_ms < self.lifetime_ms
    }

    /// Fades out over the last quarter of the particle's life.
    pub fn opacity(&self) -> f32 {
        let remaining = 1.0 - (self.age_ms / self.lifetime_ms).clamp(0.0, 1.0);
        (remaining * 4.0).clamp(0.0, 1.0)
    }
}

pub struct ConfettiSystem {
    particles: Vec<Particle>,
    timer_ms: f64,
}

impl ConfettiSystem {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            timer_ms: 0.0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Fire one burst from each fixed origin.
    pub fn volley(&mut self, rng: &mut impl Rng) {
        for origin in CONFETTI_ORIGINS {
            self.burst(Vec2::from_array(origin), rng);
        }
    }

    /// Spawn a fan of particles launched upward within the spread angle.
    pub fn burst(&mut self, origin: Vec2, rng: &mut impl Rng) {
        let half_spread = CONFETTI_SPREAD_DEG.to_radians() * 0.5;
        for _ in 0..CONFETTI_PER_BURST {
            let angle = -FRAC_PI_2 + rng.gen_range(-half_spread..half_spread);
            let speed = rng.gen_range(CONFETTI_SPEED_MIN..CONFETTI_SPEED_MAX);
            let palette_index = rng.gen_range(0..CONFETTI_PALETTE.len());
            self.particles.push(Particle {
                position: origin,
                velocity: Vec2::new(angle.cos(), angle.sin()) * speed,
                color: CONFETTI_PALETTE[palette_index],
                rotation: rng.gen_range(0.0..std::f32::consts::TAU),
                spin: rng.gen_range(-CONFETTI_SPIN_MAX..CONFETTI_SPIN_MAX),
                age_ms: 0.0,
                lifetime_ms: rng.gen_range(CONFETTI_LIFETIME_MS_MIN..CONFETTI_LIFETIME_MS_MAX),
            });
        }
    }

    /// Advance the simulation and fire the periodic volleys.
    pub fn update(&mut self, dt_ms: f64, rng: &mut impl Rng) {
        self.timer_ms += dt_ms;
        while self.timer_ms >= CONFETTI_INTERVAL_MS {
            self.timer_ms -= CONFETTI_INTERVAL_MS;
            self.volley(rng);
        }

        let dt = (dt_ms / 1000.0) as f32;
        let drag = (1.0 - CONFETTI_DRAG_PER_SEC * dt).max(0.0);
        for p in &mut self.particles {
            p.velocity.y += CONFETTI_GRAVITY * dt;
            p.velocity *= drag;
            p.position += p.velocity * dt;
            p.rotation += p.spin * dt;
            p.age_ms += dt_ms as f32;
        }
        self.particles.retain(Particle::alive);
    }
}

impl Default for ConfettiSystem {
    fn default() -> Self {
        Self::new()
    }
}
