//! Floating particles that bounce off the surface edges.

use rand::rngs::SmallRng;
use rand::Rng;

use super::Simulation;
use crate::draw::{DrawContext, Rgba};
use crate::geometry::{rand_between, reflect_axis, Size};

pub const PARTICLE_COUNT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
}

pub struct FloatingParticles {
    particles: Vec<Particle>,
}

impl FloatingParticles {
    pub fn new(size: Size, mut rng: SmallRng) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: rand_between(&mut rng, 0.0, size.w()),
                y: rand_between(&mut rng, 0.0, size.h()),
                vx: (rng.gen::<f64>() - 0.5) * 2.0,
                vy: (rng.gen::<f64>() - 0.5) * 2.0,
                size: rng.gen::<f64>() * 3.0 + 1.0,
            })
            .collect();
        Self { particles }
    }

    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

impl Simulation for FloatingParticles {
    fn step(&mut self, ctx: &mut dyn DrawContext, size: Size) {
        ctx.clear_rect(0.0, 0.0, size.w(), size.h());
        ctx.set_fill_style(&Rgba::new(255, 255, 255, 0.8).to_string());

        for p in &mut self.particles {
            (p.x, p.vx) = reflect_axis(p.x + p.vx, p.vx, size.w());
            (p.y, p.vy) = reflect_axis(p.y + p.vy, p.vy, size.h());
            ctx.fill_circle(p.x, p.y, p.size);
        }
    }

    fn population(&self) -> usize {
        self.particles.len()
    }
}
