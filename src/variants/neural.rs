//! Drifting nodes linked by proximity, with charge that fires and spreads
//! along the links.

use rand::rngs::SmallRng;
use rand::Rng;

use super::Simulation;
use crate::draw::{DrawContext, Hsla};
use crate::geometry::{rand_between, reflect_axis, wrap_hue, Point, Size};

const NODES: usize = 70;
pub const LINK_RANGE: f64 = 140.0;
const FIRE_CHANCE: f64 = 0.01;
const DECAY: f64 = 0.96;
const RELAY: f64 = 0.85;
const RELAY_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, Copy)]
pub struct Neuron {
    pub pos: Point,
    pub vx: f64,
    pub vy: f64,
    pub charge: f64,
    pub hue: f64,
}

pub struct NeuralGraph {
    nodes: Vec<Neuron>,
    incoming: Vec<f64>,
    rng: SmallRng,
}

impl NeuralGraph {
    pub fn new(size: Size, mut rng: SmallRng) -> Self {
        let nodes = (0..NODES)
            .map(|_| Neuron {
                pos: Point::new(
                    rand_between(&mut rng, 0.0, size.w()),
                    rand_between(&mut rng, 0.0, size.h()),
                ),
                vx: rng.gen_range(-0.5..0.5),
                vy: rng.gen_range(-0.5..0.5),
                charge: 0.0,
                hue: rng.gen_range(180.0..260.0),
            })
            .collect();
        Self {
            nodes,
            incoming: vec![0.0; NODES],
            rng,
        }
    }

    pub fn nodes(&self) -> &[Neuron] {
        &self.nodes
    }
}

impl Simulation for NeuralGraph {
    fn step(&mut self, ctx: &mut dyn DrawContext, size: Size) {
        ctx.clear_rect(0.0, 0.0, size.w(), size.h());

        for n in &mut self.nodes {
            (n.pos.x, n.vx) = reflect_axis(n.pos.x + n.vx, n.vx, size.w());
            (n.pos.y, n.vy) = reflect_axis(n.pos.y + n.vy, n.vy, size.h());
            n.charge *= DECAY;
            if self.rng.gen::<f64>() < FIRE_CHANCE {
                n.charge = 1.0;
            }
        }

        self.incoming.iter_mut().for_each(|v| *v = 0.0);
        ctx.set_line_width(1.0);
        for i in 0..self.nodes.len() {
            for j in (i + 1)..self.nodes.len() {
                let (a, b) = (self.nodes[i], self.nodes[j]);
                let d = a.pos.distance(b.pos);
                if d >= LINK_RANGE {
                    continue;
                }
                let closeness = 1.0 - d / LINK_RANGE;
                if a.charge > RELAY_THRESHOLD {
                    self.incoming[j] = self.incoming[j].max(a.charge * RELAY * closeness);
                }
                if b.charge > RELAY_THRESHOLD {
                    self.incoming[i] = self.incoming[i].max(b.charge * RELAY * closeness);
                }

                let glow = a.charge.max(b.charge);
                let alpha = closeness * (0.25 + 0.5 * glow);
                let hue = wrap_hue(a.hue + glow * 60.0);
                ctx.set_stroke_style(&Hsla::new(hue, 80.0, 60.0, alpha).to_string());
                ctx.line(a.pos.x, a.pos.y, b.pos.x, b.pos.y);
            }
        }

        for (n, relay) in self.nodes.iter_mut().zip(&self.incoming) {
            n.charge = n.charge.max(*relay);
            let hue = wrap_hue(n.hue + n.charge * 60.0);
            ctx.set_fill_style(&Hsla::new(hue, 90.0, 50.0 + n.charge * 30.0, 0.9).to_string());
            ctx.fill_circle(n.pos.x, n.pos.y, 2.0 + n.charge * 3.0);
        }
    }

    fn population(&self) -> usize {
        self.nodes.len()
    }
}
