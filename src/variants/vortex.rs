//! Streaks spiralling into the centre, accelerating as they fall.

use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::Rng;

use super::Simulation;
use crate::draw::{DrawContext, Hsla, Rgba};
use crate::geometry::{rand_between, wrap_hue, wrap_phase, Size};

const SWIRLERS: usize = 250;
/// Swirlers falling inside this radius are respawned at the rim.
pub const CORE: f64 = 4.0;

#[derive(Debug, Clone, Copy)]
struct Swirler {
    angle: f64,
    radius: f64,
    spin: f64,
    inflow: f64,
    hue: f64,
    width: f64,
}

pub struct Vortex {
    swirlers: Vec<Swirler>,
    rng: SmallRng,
}

/// Outer edge of the vortex.
pub fn rim(size: Size) -> f64 {
    (size.diagonal() / 2.0).max(CORE * 2.0)
}

fn spawn(rng: &mut SmallRng, size: Size, anywhere: bool) -> Swirler {
    let outer = rim(size);
    let lo = if anywhere { CORE * 2.0 } else { outer * 0.8 };
    Swirler {
        angle: rng.gen::<f64>() * TAU,
        radius: rand_between(rng, lo, outer),
        spin: rng.gen_range(0.004..0.012),
        inflow: rng.gen_range(0.2..0.8),
        hue: rng.gen_range(0.0..360.0),
        width: rng.gen_range(0.5..2.0),
    }
}

impl Vortex {
    pub fn new(size: Size, mut rng: SmallRng) -> Self {
        let swirlers = (0..SWIRLERS).map(|_| spawn(&mut rng, size, true)).collect();
        Self { swirlers, rng }
    }

    /// Distance of every swirler from the centre.
    pub fn radii(&self) -> impl Iterator<Item = f64> + '_ {
        self.swirlers.iter().map(|s| s.radius)
    }
}

impl Simulation for Vortex {
    fn step(&mut self, ctx: &mut dyn DrawContext, size: Size) {
        ctx.fade(size.w(), size.h(), Rgba::black(0.08));

        let c = size.center();
        for s in &mut self.swirlers {
            let from = c.polar(s.angle, s.radius);
            let pull = 1.0 + 150.0 / (s.radius + 10.0);
            s.angle = wrap_phase(s.angle + s.spin * pull);
            s.radius -= s.inflow * pull;
            s.hue = wrap_hue(s.hue + 0.5);
            if s.radius < CORE {
                *s = spawn(&mut self.rng, size, false);
                continue;
            }

            let to = c.polar(s.angle, s.radius);
            ctx.set_stroke_style(&Hsla::new(s.hue, 90.0, 60.0, 0.8).to_string());
            ctx.set_line_width(s.width);
            ctx.line(from.x, from.y, to.x, to.y);
        }
    }

    fn population(&self) -> usize {
        self.swirlers.len()
    }
}
