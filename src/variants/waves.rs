//! Three overlapping sine strokes across the middle of the surface.

use super::Simulation;
use crate::draw::{DrawContext, Rgba};
use crate::geometry::{wrap_phase, Size};

const SPATIAL_FREQ: f64 = 0.01;
const PHASE_STEP: f64 = 0.02;

#[derive(Debug, Clone, Copy)]
struct Wave {
    offset: f64,
    amplitude: f64,
}

pub struct SineWaves {
    waves: [Wave; 3],
    phase: f64,
}

impl SineWaves {
    pub fn new() -> Self {
        let waves = std::array::from_fn(|i| Wave {
            offset: i as f64 * 2.0,
            amplitude: 50.0 + i as f64 * 20.0,
        });
        Self { waves, phase: 0.0 }
    }
}

impl Default for SineWaves {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation for SineWaves {
    fn step(&mut self, ctx: &mut dyn DrawContext, size: Size) {
        ctx.clear_rect(0.0, 0.0, size.w(), size.h());
        ctx.set_stroke_style(&Rgba::new(0, 150, 255, 0.5).to_string());
        ctx.set_line_width(2.0);

        let mid = size.h() / 2.0;
        for wave in &self.waves {
            ctx.begin_path();
            for x in 0..size.width {
                let xf = x as f64;
                let y = mid + (xf * SPATIAL_FREQ + self.phase + wave.offset).sin() * wave.amplitude;
                if x == 0 {
                    ctx.move_to(xf, y);
                } else {
                    ctx.line_to(xf, y);
                }
            }
            ctx.stroke();
        }

        self.phase = wrap_phase(self.phase + PHASE_STEP);
    }

    fn population(&self) -> usize {
        self.waves.len()
    }
}
