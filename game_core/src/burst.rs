//! Confetti burst shown when a target is cleared

use glam::Vec2;
use rand::Rng;

use crate::{GameRng, Params};

/// Confetti colors, indexed by `Particle::color`
pub const PALETTE: [&str; 6] = [
    "#f39c12", "#e74c3c", "#3498db", "#2ecc71", "#9b59b6", "#f1c40f",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub color: usize,
    pub offset: Vec2,  // travel from the burst center (px)
    pub duration: f32, // seconds
}

#[derive(Debug, Clone, PartialEq)]
pub struct Burst {
    pub center: Vec2,
    pub particles: Vec<Particle>,
}

impl Burst {
    pub fn new(center: Vec2, size: f32, rng: &mut GameRng) -> Self {
        let radius = size * Params::BURST_RADIUS_FACTOR;
        let particles = (0..Params::BURST_PARTICLES)
            .map(|_| {
                let angle = rng.0.gen_range(0.0..std::f32::consts::TAU);
                let distance = if radius > 0.0 {
                    rng.0.gen_range(0.0..radius)
                } else {
                    0.0
                };
                Particle {
                    color: rng.0.gen_range(0..PALETTE.len()),
                    offset: Vec2::new(angle.cos(), angle.sin()) * distance,
                    duration: rng
                        .0
                        .gen_range(Params::BURST_DURATION_MIN..Params::BURST_DURATION_MAX),
                }
            })
            .collect();
        Self { center, particles }
    }

    /// Seconds until the last particle finishes
    pub fn lifetime(&self) -> f32 {
        self.particles
            .iter()
            .map(|p| p.duration)
            .fold(0.0, f32::max)
    }
}
