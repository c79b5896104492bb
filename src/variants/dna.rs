//! Double helix rolling across the surface.

use std::f64::consts::PI;

use super::Simulation;
use crate::draw::{DrawContext, Hsla};
use crate::geometry::{wrap_hue, wrap_phase, Size};

const RUNG_SPACING: f64 = 18.0;
const TWIST: f64 = 0.02;
const ROLL: f64 = 0.03;

pub struct Helix {
    phase: f64,
    hue: f64,
    rungs: usize,
}

impl Helix {
    pub fn new() -> Self {
        Self {
            phase: 0.0,
            hue: 160.0,
            rungs: 0,
        }
    }
}

impl Default for Helix {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation for Helix {
    fn step(&mut self, ctx: &mut dyn DrawContext, size: Size) {
        ctx.clear_rect(0.0, 0.0, size.w(), size.h());

        let mid = size.h() / 2.0;
        let amplitude = (size.h() * 0.15).min(120.0);
        let rungs = (size.w() / RUNG_SPACING).ceil() as usize;

        ctx.set_line_width(1.0);
        for i in 0..rungs {
            let x = i as f64 * RUNG_SPACING;
            let theta = x * TWIST + self.phase;
            let y1 = mid + theta.sin() * amplitude;
            let y2 = mid + (theta + PI).sin() * amplitude;
            let depth = theta.cos();
            let hue = wrap_hue(self.hue + x * 0.1);

            ctx.set_stroke_style(&Hsla::new(hue, 60.0, 60.0, 0.25).to_string());
            ctx.line(x, y1, x, y2);

            ctx.set_fill_style(&Hsla::new(hue, 90.0, 60.0, 0.6 + depth * 0.3).to_string());
            ctx.fill_circle(x, y1, 3.0 + depth * 1.5);
            let opposite = Hsla::new(wrap_hue(hue + 180.0), 90.0, 60.0, 0.6 - depth * 0.3);
            ctx.set_fill_style(&opposite.to_string());
            ctx.fill_circle(x, y2, 3.0 - depth * 1.5);
        }

        self.rungs = rungs;
        self.phase = wrap_phase(self.phase + ROLL);
        self.hue = wrap_hue(self.hue + 0.3);
    }

    fn population(&self) -> usize {
        self.rungs
    }
}
