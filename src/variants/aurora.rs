//! Curtains of light rippling across the upper sky. Hues stay inside the
//! green-cyan band rather than cycling the whole wheel.

use rand::rngs::SmallRng;
use rand::Rng;

use super::Simulation;
use crate::draw::{DrawContext, Hsla, Rgba};
use crate::geometry::{clamp_hue, wrap_phase, Size};

pub const HUE_MIN: f64 = 80.0;
pub const HUE_MAX: f64 = 180.0;
const BANDS: usize = 5;
const COLUMN_STEP: f64 = 8.0;
const SKY: Rgba = Rgba::new(2, 6, 20, 1.0);

#[derive(Debug, Clone, Copy)]
struct Band {
    /// Baseline as a fraction of the surface height.
    baseline: f64,
    /// Curtain length as a fraction of the surface height.
    depth: f64,
    amplitude: f64,
    freq: f64,
    speed: f64,
    phase: f64,
    hue: f64,
    hue_drift: f64,
}

pub struct Aurora {
    bands: Vec<Band>,
}

impl Aurora {
    pub fn new(mut rng: SmallRng) -> Self {
        let bands = (0..BANDS)
            .map(|_| Band {
                baseline: rng.gen_range(0.12..0.45),
                depth: rng.gen_range(0.15..0.35),
                amplitude: rng.gen_range(15.0..60.0),
                freq: rng.gen_range(0.002..0.008),
                speed: rng.gen_range(0.005..0.02),
                phase: rng.gen::<f64>() * std::f64::consts::TAU,
                hue: rng.gen_range(HUE_MIN..HUE_MAX),
                hue_drift: rng.gen_range(0.05..0.3),
            })
            .collect();
        Self { bands }
    }

    /// Current base hue of every band.
    pub fn hues(&self) -> impl Iterator<Item = f64> + '_ {
        self.bands.iter().map(|b| b.hue)
    }
}

impl Simulation for Aurora {
    fn step(&mut self, ctx: &mut dyn DrawContext, size: Size) {
        ctx.set_fill_style(&SKY.to_string());
        ctx.fill_rect(0.0, 0.0, size.w(), size.h());
        ctx.set_line_width(COLUMN_STEP);

        for band in &mut self.bands {
            let curtain = band.depth * size.h();
            let mut x = 0.0;
            while x < size.w() {
                let y = band.baseline * size.h()
                    + (x * band.freq + band.phase).sin() * band.amplitude
                    + (x * band.freq * 2.3 + band.phase * 2.0).sin() * band.amplitude * 0.3;
                let shift = (x * 0.005 + band.phase).sin() * 40.0;
                let hue = clamp_hue(band.hue + shift, HUE_MIN, HUE_MAX);
                let alpha = 0.08 + 0.12 * (0.5 + 0.5 * (x * 0.01 + band.phase * 2.0).sin());
                ctx.set_stroke_style(&Hsla::new(hue, 85.0, 55.0, alpha).to_string());
                ctx.line(x, y, x, y + curtain);
                x += COLUMN_STEP;
            }

            band.phase = wrap_phase(band.phase + band.speed);
            let next = band.hue + band.hue_drift;
            if next <= HUE_MIN || next >= HUE_MAX {
                band.hue_drift = -band.hue_drift;
            }
            band.hue = clamp_hue(next, HUE_MIN, HUE_MAX);
        }
    }

    fn population(&self) -> usize {
        self.bands.len()
    }
}
