//! Starfield flying toward the viewer.

use rand::rngs::SmallRng;
use rand::Rng;

use super::Simulation;
use crate::draw::{DrawContext, Rgba};
use crate::geometry::{rand_between, rand_point, Point, Size};

pub const STAR_COUNT: usize = 200;
/// Depth at which stars are (re)spawned.
pub const FAR_PLANE: f64 = 1000.0;
/// Depth at which a star is drawn at its own surface position.
pub const FOCAL_LENGTH: f64 = 200.0;

#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub pos: Point,
    pub z: f64,
    pub speed: f64,
}

pub struct Starfield {
    stars: Vec<Star>,
    rng: SmallRng,
}

/// Perspective projection of `pos` at depth `z` around the surface centre.
pub fn project(pos: Point, z: f64, size: Size) -> Point {
    let c = size.center();
    let k = FOCAL_LENGTH / z.max(f64::EPSILON);
    Point::new((pos.x - c.x) * k + c.x, (pos.y - c.y) * k + c.y)
}

impl Starfield {
    pub fn new(size: Size, mut rng: SmallRng) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                pos: rand_point(&mut rng, size),
                z: rand_between(&mut rng, 1.0, FAR_PLANE),
                speed: rng.gen::<f64>() * 2.0 + 1.0,
            })
            .collect();
        Self { stars, rng }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }
}

impl Simulation for Starfield {
    fn step(&mut self, ctx: &mut dyn DrawContext, size: Size) {
        ctx.fade(size.w(), size.h(), Rgba::black(0.1));
        ctx.set_fill_style("white");

        for star in &mut self.stars {
            star.z -= star.speed;
            if star.z <= 0.0 {
                star.pos = rand_point(&mut self.rng, size);
                star.z = FAR_PLANE;
            }

            let p = project(star.pos, star.z, size);
            let radius = (1.0 - star.z / FAR_PLANE) * 2.0;
            ctx.fill_circle(p.x, p.y, radius);
        }
    }

    fn population(&self) -> usize {
        self.stars.len()
    }
}
