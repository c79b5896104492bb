//! Character rain: one falling glyph per 20px column.

use rand::rngs::SmallRng;
use rand::Rng;

use super::Simulation;
use crate::draw::{DrawContext, Rgba};
use crate::geometry::Size;

const COLUMN: f64 = 20.0;
const FONT: &str = "15px arial";
const GLYPH_COLOR: &str = "#0F0";
/// A drop past the bottom edge restarts only when a roll exceeds this.
const RESET_THRESHOLD: f64 = 0.975;
/// Hard stop for drops that keep losing the reset roll.
const MAX_OVERRUN_ROWS: u32 = 400;

pub struct MatrixRain {
    /// Row index of the head of each column.
    drops: Vec<u32>,
    rng: SmallRng,
}

impl MatrixRain {
    pub fn new(size: Size, rng: SmallRng) -> Self {
        Self {
            drops: vec![1; columns(size)],
            rng,
        }
    }

    pub fn drops(&self) -> &[u32] {
        &self.drops
    }
}

fn columns(size: Size) -> usize {
    (size.w() / COLUMN).floor() as usize
}

impl Simulation for MatrixRain {
    fn step(&mut self, ctx: &mut dyn DrawContext, size: Size) {
        let cols = columns(size);
        if cols != self.drops.len() {
            self.drops.resize(cols, 1);
        }

        ctx.fade(size.w(), size.h(), Rgba::black(0.04));
        ctx.set_fill_style(GLYPH_COLOR);
        ctx.set_font(FONT);

        let last_row = (size.h() / COLUMN) as u32 + MAX_OVERRUN_ROWS;
        let mut buf = [0u8; 4];
        for (i, drop) in self.drops.iter_mut().enumerate() {
            let glyph = char::from(self.rng.gen_range(33u8..127));
            ctx.fill_text(glyph.encode_utf8(&mut buf), i as f64 * COLUMN, *drop as f64 * COLUMN);

            let below = *drop as f64 * COLUMN > size.h();
            if (below && self.rng.gen::<f64>() > RESET_THRESHOLD) || *drop > last_row {
                *drop = 0;
            }
            *drop += 1;
        }
    }

    fn population(&self) -> usize {
        self.drops.len()
    }
}
