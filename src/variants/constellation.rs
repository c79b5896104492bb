//! Slow-drifting stars joined into constellations, each dragging a short
//! trail.

use std::collections::VecDeque;
use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::Rng;

use super::Simulation;
use crate::draw::{DrawContext, Hsla};
use crate::geometry::{rand_point, wrap_hue, wrap_phase, Point, Size};

const STARS: usize = 80;
pub const LINK_RANGE: f64 = 120.0;
/// Maximum remembered positions per star.
pub const TRAIL_LEN: usize = 10;

#[derive(Debug, Clone)]
pub struct ConstellationStar {
    pub pos: Point,
    pub vx: f64,
    pub vy: f64,
    pub twinkle: f64,
    pub hue: f64,
    pub trail: VecDeque<Point>,
}

fn spawn(rng: &mut SmallRng, size: Size) -> ConstellationStar {
    ConstellationStar {
        pos: rand_point(rng, size),
        vx: rng.gen_range(-0.3..0.3),
        vy: rng.gen_range(-0.3..0.3),
        twinkle: rng.gen::<f64>() * TAU,
        hue: rng.gen_range(190.0..250.0),
        trail: VecDeque::with_capacity(TRAIL_LEN),
    }
}

fn inside(p: Point, size: Size) -> bool {
    p.x >= 0.0 && p.y >= 0.0 && p.x <= size.w() && p.y <= size.h()
}

pub struct Constellations {
    stars: Vec<ConstellationStar>,
    rng: SmallRng,
}

impl Constellations {
    pub fn new(size: Size, mut rng: SmallRng) -> Self {
        let stars = (0..STARS).map(|_| spawn(&mut rng, size)).collect();
        Self { stars, rng }
    }

    pub fn stars(&self) -> &[ConstellationStar] {
        &self.stars
    }
}

impl Simulation for Constellations {
    fn step(&mut self, ctx: &mut dyn DrawContext, size: Size) {
        ctx.clear_rect(0.0, 0.0, size.w(), size.h());

        for star in &mut self.stars {
            if star.trail.len() == TRAIL_LEN {
                star.trail.pop_front();
            }
            star.trail.push_back(star.pos);
            star.pos.x += star.vx;
            star.pos.y += star.vy;
            star.twinkle = wrap_phase(star.twinkle + 0.05);
            star.hue = wrap_hue(star.hue + 0.1);
            if !inside(star.pos, size) {
                *star = spawn(&mut self.rng, size);
            }
        }

        ctx.set_line_width(1.0);
        for (i, a) in self.stars.iter().enumerate() {
            for b in &self.stars[i + 1..] {
                let d = a.pos.distance(b.pos);
                if d < LINK_RANGE {
                    let alpha = (1.0 - d / LINK_RANGE) * 0.4;
                    ctx.set_stroke_style(&Hsla::new(a.hue, 60.0, 75.0, alpha).to_string());
                    ctx.line(a.pos.x, a.pos.y, b.pos.x, b.pos.y);
                }
            }
        }

        for star in &self.stars {
            let n = star.trail.len();
            for (k, pair) in star.trail.iter().zip(star.trail.iter().skip(1)).enumerate() {
                let alpha = (k + 1) as f64 / n as f64 * 0.3;
                ctx.set_stroke_style(&Hsla::new(star.hue, 70.0, 70.0, alpha).to_string());
                ctx.line(pair.0.x, pair.0.y, pair.1.x, pair.1.y);
            }
            let glow = 0.5 + 0.5 * star.twinkle.sin();
            ctx.set_fill_style(&Hsla::new(star.hue, 80.0, 80.0, 0.4 + glow * 0.6).to_string());
            ctx.fill_circle(star.pos.x, star.pos.y, 1.0 + glow * 1.5);
        }
    }

    fn population(&self) -> usize {
        self.stars.len()
    }
}
