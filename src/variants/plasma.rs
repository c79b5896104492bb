//! Reaction-diffusion field on a coarse grid, tinted by a drifting plasma
//! wave.
//!
//! The field is a Gray-Scott system with wrap-around edges. Its feed rate is
//! nudged per cell by the plasma wave so the pattern keeps moving instead of
//! settling. When the field stops changing, a few random sparks restart it.

use std::f64::consts::PI;

use rand::rngs::SmallRng;
use rand::Rng;

use super::Simulation;
use crate::draw::{DrawContext, Hsla};
use crate::geometry::{wrap_hue, Size};

/// Edge of one field cell in pixels.
pub const CELL: f64 = 12.0;
const STEPS_PER_TICK: usize = 4;
const DIFF_A: f32 = 1.0;
const DIFF_B: f32 = 0.5;
const FEED: f32 = 0.037;
const KILL: f32 = 0.06;
const FEED_SWING: f32 = 0.008;
const STAGNANT_FLUX: f32 = 0.0004;
const STAGNANT_TICKS: u32 = 12;
const VISIBLE: f32 = 0.06;
/// Every term of [`plasma_wave`] repeats after this much time.
const WAVE_PERIOD: f64 = 40.0 * PI;

/// Wave-interference value in `[0, 1]` at normalised `(nx, ny)`.
pub fn plasma_wave(nx: f64, ny: f64, time: f64) -> f64 {
    let x = nx * 6.0;
    let y = ny * 6.0;
    let v1 = (x * 1.3 + time).sin();
    let v2 = (y * 1.7 - time * 0.7).sin();
    let v3 = ((x + y) * 0.9 + time * 0.5).sin();
    let v4 = (((x - 3.0).powi(2) + (y - 3.0).powi(2)).sqrt() * 1.5 - time).cos();
    ((v1 + v2 + v3 + v4) / 4.0 + 1.0) / 2.0
}

pub struct PlasmaField {
    cols: usize,
    rows: usize,
    a: Vec<f32>,
    b: Vec<f32>,
    next_a: Vec<f32>,
    next_b: Vec<f32>,
    /// [`plasma_wave`] per cell for the current tick.
    wave: Vec<f32>,
    time: f64,
    hue: f64,
    stagnant: u32,
    rng: SmallRng,
}

fn grid_dims(size: Size) -> (usize, usize) {
    ((size.w() / CELL).ceil() as usize, (size.h() / CELL).ceil() as usize)
}

impl PlasmaField {
    pub fn new(size: Size, rng: SmallRng) -> Self {
        let mut field = Self {
            cols: 0,
            rows: 0,
            a: Vec::new(),
            b: Vec::new(),
            next_a: Vec::new(),
            next_b: Vec::new(),
            wave: Vec::new(),
            time: 0.0,
            hue: 0.0,
            stagnant: 0,
            rng,
        };
        let (cols, rows) = grid_dims(size);
        field.rebuild(cols, rows);
        field
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Concentration of the activator species, row-major.
    pub fn activator(&self) -> &[f32] {
        &self.b
    }

    /// Plasma wave sampled at every cell for the current tick.
    pub fn wave(&self) -> &[f32] {
        &self.wave
    }

    fn sample_wave(&mut self) {
        for y in 0..self.rows {
            let ny = y as f64 / self.rows as f64;
            for x in 0..self.cols {
                let nx = x as f64 / self.cols as f64;
                self.wave[y * self.cols + x] = plasma_wave(nx, ny, self.time) as f32;
            }
        }
    }

    fn rebuild(&mut self, cols: usize, rows: usize) {
        let len = cols * rows;
        self.cols = cols;
        self.rows = rows;
        self.a = vec![1.0; len];
        self.b = vec![0.0; len];
        self.next_a = vec![0.0; len];
        self.next_b = vec![0.0; len];
        self.wave = vec![0.0; len];
        self.stagnant = 0;
        let spots = (len / 400).max(1);
        self.sparks(spots);
    }

    fn sparks(&mut self, count: usize) {
        if self.a.is_empty() {
            return;
        }
        for _ in 0..count {
            let cx = self.rng.gen_range(0..self.cols) as isize;
            let cy = self.rng.gen_range(0..self.rows) as isize;
            for dy in -2..=2 {
                for dx in -2..=2 {
                    let i = self.wrap_index(cx + dx, cy + dy);
                    self.a[i] = 0.5;
                    self.b[i] = 0.25 + self.rng.gen::<f32>() * 0.1;
                }
            }
        }
    }

    #[inline]
    fn wrap_index(&self, x: isize, y: isize) -> usize {
        let x = x.rem_euclid(self.cols as isize) as usize;
        let y = y.rem_euclid(self.rows as isize) as usize;
        y * self.cols + x
    }

    fn laplacian(&self, field: &[f32], x: usize, y: usize) -> f32 {
        let (x, y) = (x as isize, y as isize);
        field[self.wrap_index(x - 1, y)]
            + field[self.wrap_index(x + 1, y)]
            + field[self.wrap_index(x, y - 1)]
            + field[self.wrap_index(x, y + 1)]
            - 4.0 * field[self.wrap_index(x, y)]
    }

    /// One integration step; returns the mean absolute change of `b`.
    fn react(&mut self) -> f32 {
        let mut flux = 0.0;
        for y in 0..self.rows {
            for x in 0..self.cols {
                let i = y * self.cols + x;
                let (a, b) = (self.a[i], self.b[i]);
                let feed = FEED + FEED_SWING * (self.wave[i] - 0.5);
                let reaction = a * b * b;
                let na = a + DIFF_A * self.laplacian(&self.a, x, y) - reaction + feed * (1.0 - a);
                let nb = b + DIFF_B * self.laplacian(&self.b, x, y) + reaction - (KILL + feed) * b;
                self.next_a[i] = na.clamp(0.0, 1.0);
                self.next_b[i] = nb.clamp(0.0, 1.0);
                flux += (self.next_b[i] - b).abs();
            }
        }
        std::mem::swap(&mut self.a, &mut self.next_a);
        std::mem::swap(&mut self.b, &mut self.next_b);
        flux / self.b.len().max(1) as f32
    }
}

impl Simulation for PlasmaField {
    fn step(&mut self, ctx: &mut dyn DrawContext, size: Size) {
        let (cols, rows) = grid_dims(size);
        if (cols, rows) != (self.cols, self.rows) {
            self.rebuild(cols, rows);
        }

        ctx.set_fill_style("#000");
        ctx.fill_rect(0.0, 0.0, size.w(), size.h());
        if self.b.is_empty() {
            return;
        }

        self.sample_wave();
        let mut flux = 0.0;
        for _ in 0..STEPS_PER_TICK {
            flux = self.react();
        }
        if flux < STAGNANT_FLUX {
            self.stagnant += 1;
        } else {
            self.stagnant = 0;
        }
        if self.stagnant > STAGNANT_TICKS {
            self.sparks(3);
            self.stagnant = 0;
        }

        let cw = size.w() / self.cols as f64;
        let ch = size.h() / self.rows as f64;
        for y in 0..self.rows {
            for x in 0..self.cols {
                let i = y * self.cols + x;
                let v = self.b[i];
                if v < VISIBLE {
                    continue;
                }
                let wave = self.wave[i] as f64;
                let hue = wrap_hue(self.hue + v as f64 * 240.0 + wave * 60.0);
                let colour = Hsla::new(hue, 90.0, 20.0 + v as f64 * 120.0, 0.9);
                ctx.set_fill_style(&colour.to_string());
                ctx.fill_rect(x as f64 * cw, y as f64 * ch, cw.ceil(), ch.ceil());
            }
        }

        self.time = (self.time + 0.05) % WAVE_PERIOD;
        self.hue = wrap_hue(self.hue + 0.5);
    }

    fn population(&self) -> usize {
        self.cols * self.rows
    }
}
