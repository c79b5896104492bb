//! Gravitational well: particles orbit and fall toward a central mass.
//!
//! The population never changes. A particle that crosses the capture radius
//! (or escapes far away) is immediately put back on a fresh orbit with an
//! empty trail.

use std::collections::VecDeque;
use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::Rng;

use super::Simulation;
use crate::draw::{DrawContext, Hsla, Rgba};
use crate::geometry::{wrap_hue, Point, Size};

pub const PARTICLE_COUNT: usize = 200;
pub const CAPTURE_RADIUS: f64 = 30.0;
pub const SPAWN_MIN: f64 = 300.0;
pub const SPAWN_MAX: f64 = 500.0;
pub const ESCAPE_RADIUS: f64 = 2000.0;
/// Maximum remembered positions per particle.
pub const TRAIL_LEN: usize = 10;
/// Gravitational parameter of the central mass, px^3/tick^2.
const MASS: f64 = 900.0;
/// Per-tick velocity retention; bleeds orbital energy so orbits decay inward.
const DRAG: f64 = 0.999;

#[derive(Debug, Clone)]
pub struct WellParticle {
    pub pos: Point,
    pub vx: f64,
    pub vy: f64,
    pub trail: VecDeque<Point>,
}

impl WellParticle {
    fn spawn(rng: &mut SmallRng, center: Point) -> Self {
        let angle = rng.gen::<f64>() * TAU;
        let dist = rng.gen_range(SPAWN_MIN..SPAWN_MAX);
        let orbital = (MASS / dist).sqrt() * rng.gen_range(0.4..1.0);
        Self {
            pos: center.polar(angle, dist),
            vx: -angle.sin() * orbital + rng.gen_range(-0.3..0.3),
            vy: angle.cos() * orbital + rng.gen_range(-0.3..0.3),
            trail: VecDeque::with_capacity(TRAIL_LEN),
        }
    }

    pub fn speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }
}

pub struct GravityWell {
    particles: Vec<WellParticle>,
    captured: u64,
    rng: SmallRng,
}

impl GravityWell {
    pub fn new(size: Size, mut rng: SmallRng) -> Self {
        let center = size.center();
        let particles = (0..PARTICLE_COUNT)
            .map(|_| WellParticle::spawn(&mut rng, center))
            .collect();
        Self {
            particles,
            captured: 0,
            rng,
        }
    }

    pub fn particles(&self) -> &[WellParticle] {
        &self.particles
    }

    /// Particles respawned so far.
    pub fn captured(&self) -> u64 {
        self.captured
    }
}

impl Simulation for GravityWell {
    fn step(&mut self, ctx: &mut dyn DrawContext, size: Size) {
        ctx.fade(size.w(), size.h(), Rgba::black(0.1));

        let center = size.center();
        ctx.set_line_width(1.0);
        for p in &mut self.particles {
            let dx = center.x - p.pos.x;
            let dy = center.y - p.pos.y;
            let d = dx.hypot(dy).max(CAPTURE_RADIUS);
            let accel = MASS / (d * d);
            p.vx = (p.vx + dx / d * accel) * DRAG;
            p.vy = (p.vy + dy / d * accel) * DRAG;

            if p.trail.len() == TRAIL_LEN {
                p.trail.pop_front();
            }
            p.trail.push_back(p.pos);
            p.pos.x += p.vx;
            p.pos.y += p.vy;

            let r = p.pos.distance(center);
            if r < CAPTURE_RADIUS || r > ESCAPE_RADIUS {
                *p = WellParticle::spawn(&mut self.rng, center);
                self.captured += 1;
                continue;
            }

            let hue = wrap_hue(20.0 + p.speed() * 40.0);
            if p.trail.len() > 1 {
                ctx.set_stroke_style(&Hsla::new(hue, 90.0, 60.0, 0.5).to_string());
                ctx.begin_path();
                ctx.move_to(p.trail[0].x, p.trail[0].y);
                for q in p.trail.iter().skip(1) {
                    ctx.line_to(q.x, q.y);
                }
                ctx.line_to(p.pos.x, p.pos.y);
                ctx.stroke();
            }
            ctx.set_fill_style(&Hsla::new(hue, 100.0, 70.0, 0.9).to_string());
            ctx.fill_circle(p.pos.x, p.pos.y, 1.5);
        }

        // event horizon with an accretion glow
        let glow = Hsla::new(30.0, 100.0, 60.0, 0.8).to_string();
        ctx.save();
        ctx.set_shadow_blur(20.0);
        ctx.set_shadow_color(&glow);
        ctx.set_stroke_style(&glow);
        ctx.set_line_width(3.0);
        ctx.begin_path();
        ctx.arc(center.x, center.y, CAPTURE_RADIUS, 0.0, TAU);
        ctx.stroke();
        ctx.restore();
        ctx.set_fill_style("#000");
        ctx.fill_circle(center.x, center.y, CAPTURE_RADIUS - 1.5);
    }

    fn population(&self) -> usize {
        self.particles.len()
    }
}
