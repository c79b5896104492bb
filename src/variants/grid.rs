//! Lattice whose nodes pulse in rings spreading out from the centre.

use super::Simulation;
use crate::draw::{DrawContext, Hsla, Rgba};
use crate::geometry::{wrap_hue, wrap_phase, Point, Size};

const SPACING: f64 = 40.0;
const RING_FREQ: f64 = 0.02;

pub struct PulsingGrid {
    phase: f64,
    hue: f64,
    nodes: usize,
}

impl PulsingGrid {
    pub fn new() -> Self {
        Self {
            phase: 0.0,
            hue: 200.0,
            nodes: 0,
        }
    }
}

impl Default for PulsingGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation for PulsingGrid {
    fn step(&mut self, ctx: &mut dyn DrawContext, size: Size) {
        ctx.clear_rect(0.0, 0.0, size.w(), size.h());

        let cols = (size.w() / SPACING).floor() as usize + 1;
        let rows = (size.h() / SPACING).floor() as usize + 1;

        ctx.set_stroke_style(&Rgba::new(80, 120, 200, 0.12).to_string());
        ctx.set_line_width(1.0);
        for gx in 0..cols {
            let x = gx as f64 * SPACING;
            ctx.line(x, 0.0, x, size.h());
        }
        for gy in 0..rows {
            let y = gy as f64 * SPACING;
            ctx.line(0.0, y, size.w(), y);
        }

        let c = size.center();
        for gy in 0..rows {
            for gx in 0..cols {
                let p = Point::new(gx as f64 * SPACING, gy as f64 * SPACING);
                let d = p.distance(c);
                let pulse = (self.phase - d * RING_FREQ).sin();
                let radius = 1.5 + pulse.max(0.0) * 3.0;
                let alpha = 0.2 + 0.6 * (pulse * 0.5 + 0.5);
                let hue = wrap_hue(self.hue + d * 0.2);
                ctx.set_fill_style(&Hsla::new(hue, 80.0, 60.0, alpha).to_string());
                ctx.fill_circle(p.x, p.y, radius);
            }
        }

        self.nodes = cols * rows;
        self.phase = wrap_phase(self.phase + 0.05);
        self.hue = wrap_hue(self.hue + 0.5);
    }

    fn population(&self) -> usize {
        self.nodes
    }
}
