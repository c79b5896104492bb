//! Six squares spinning about the surface centre.

use std::f64::consts::PI;

use super::Simulation;
use crate::draw::{DrawContext, Rgba};
use crate::geometry::{wrap_phase, Size};

const SHAPES: usize = 6;
const HALF_SIDE: f64 = 50.0;
const SPIN: f64 = 0.01;

pub struct RotatingPolygons {
    angle: f64,
}

impl RotatingPolygons {
    pub fn new() -> Self {
        Self { angle: 0.0 }
    }
}

impl Default for RotatingPolygons {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation for RotatingPolygons {
    fn step(&mut self, ctx: &mut dyn DrawContext, size: Size) {
        ctx.clear_rect(0.0, 0.0, size.w(), size.h());
        ctx.set_stroke_style(&Rgba::new(255, 255, 255, 0.3).to_string());
        ctx.set_line_width(1.0);

        let c = size.center();
        for i in 0..SHAPES {
            ctx.save();
            ctx.translate(c.x, c.y);
            ctx.rotate(self.angle + i as f64 * PI / 3.0);
            ctx.begin_path();
            ctx.rect(-HALF_SIDE, -HALF_SIDE, HALF_SIDE * 2.0, HALF_SIDE * 2.0);
            ctx.stroke();
            ctx.restore();
        }

        self.angle = wrap_phase(self.angle + SPIN);
    }

    fn population(&self) -> usize {
        SHAPES
    }
}
