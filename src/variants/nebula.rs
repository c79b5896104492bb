//! Glowing motes orbiting the centre, faster near the core.

use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::Rng;

use super::Simulation;
use crate::draw::{DrawContext, Hsla, Rgba};
use crate::geometry::{rand_between, wrap_hue, wrap_phase, Size};

const MOTES: usize = 300;
/// Motes closer to the centre than this are respawned.
pub const INNER_RADIUS: f64 = 5.0;

#[derive(Debug, Clone, Copy)]
struct Mote {
    angle: f64,
    radius: f64,
    spin: f64,
    drift: f64,
    hue: f64,
    size: f64,
    alpha: f64,
}

pub struct Nebula {
    motes: Vec<Mote>,
    time: f64,
    rng: SmallRng,
}

/// Spawn band edge; motes past 1.2 times this are respawned.
pub fn outer_radius(size: Size) -> f64 {
    (size.diagonal() / 2.0).max(INNER_RADIUS * 2.0)
}

fn spawn(rng: &mut SmallRng, size: Size) -> Mote {
    Mote {
        angle: rng.gen::<f64>() * TAU,
        radius: rand_between(rng, INNER_RADIUS * 2.0, outer_radius(size)),
        spin: rng.gen_range(0.002..0.01),
        drift: rng.gen_range(-0.3..0.3),
        hue: rng.gen_range(200.0..320.0),
        size: rng.gen_range(1.0..3.0),
        alpha: rng.gen_range(0.2..0.7),
    }
}

impl Nebula {
    pub fn new(size: Size, mut rng: SmallRng) -> Self {
        let motes = (0..MOTES).map(|_| spawn(&mut rng, size)).collect();
        Self { motes, time: 0.0, rng }
    }

    /// Distance of every mote from the centre.
    pub fn radii(&self) -> impl Iterator<Item = f64> + '_ {
        self.motes.iter().map(|m| m.radius)
    }
}

impl Simulation for Nebula {
    fn step(&mut self, ctx: &mut dyn DrawContext, size: Size) {
        ctx.fade(size.w(), size.h(), Rgba::black(0.05));
        ctx.set_shadow_blur(8.0);

        let c = size.center();
        let limit = outer_radius(size) * 1.2;
        for mote in &mut self.motes {
            mote.angle = wrap_phase(mote.angle + mote.spin * (1.0 + 80.0 / (mote.radius + 20.0)));
            mote.radius += mote.drift + (mote.angle * 3.0 + self.time).sin() * 0.2;
            mote.hue = wrap_hue(mote.hue + 0.2);
            if mote.radius < INNER_RADIUS || mote.radius > limit {
                *mote = spawn(&mut self.rng, size);
            }

            let colour = Hsla::new(mote.hue, 80.0, 60.0, mote.alpha).to_string();
            ctx.set_fill_style(&colour);
            ctx.set_shadow_color(&colour);
            let p = c.polar(mote.angle, mote.radius);
            ctx.fill_circle(p.x, p.y, mote.size);
        }

        ctx.set_shadow_blur(0.0);
        self.time = wrap_phase(self.time + 0.01);
    }

    fn population(&self) -> usize {
        self.motes.len()
    }
}
