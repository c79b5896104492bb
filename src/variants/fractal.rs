//! Recursive branching tree swaying from the bottom edge.
//!
//! The branch list is regrown from nothing every tick. The only thing that
//! persists is a frame counter, which tilts the trunk.

use std::f64::consts::FRAC_PI_2;

use super::Simulation;
use crate::draw::{DrawContext, Hsla};
use crate::geometry::{wrap_hue, Point, Size};

pub const MAX_DEPTH: u32 = 8;
/// Branches at or below this length are not drawn and do not split.
pub const MIN_LENGTH: f64 = 2.0;
/// Angular offset of each child from its parent.
pub const SPREAD: f64 = 0.5;
/// Length ratio between a child and its parent.
pub const DECAY: f64 = 0.7;
const SWAY: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Branch {
    pub from: Point,
    pub to: Point,
    /// Remaining depth budget; the trunk carries [`MAX_DEPTH`].
    pub depth: u32,
}

/// Append the branch starting at `origin` and all its descendants to `out`.
pub fn grow(origin: Point, length: f64, angle: f64, depth: u32, out: &mut Vec<Branch>) {
    if depth == 0 || length <= MIN_LENGTH {
        return;
    }
    let end = origin.polar(angle, length);
    out.push(Branch {
        from: origin,
        to: end,
        depth,
    });
    grow(end, length * DECAY, angle - SPREAD, depth - 1, out);
    grow(end, length * DECAY, angle + SPREAD, depth - 1, out);
}

/// The whole tree for frame `time` on a surface of `size`.
pub fn tree(size: Size, time: u64) -> Vec<Branch> {
    let root = Point::new(size.w() / 2.0, size.h());
    let trunk = size.min_side() * 0.28;
    let angle = -FRAC_PI_2 + (time as f64 * 0.02).sin() * SWAY;
    let mut branches = Vec::new();
    grow(root, trunk, angle, MAX_DEPTH, &mut branches);
    branches
}

pub struct FractalTree {
    time: u64,
    branches: usize,
}

impl FractalTree {
    pub fn new() -> Self {
        Self { time: 0, branches: 0 }
    }

    pub fn time(&self) -> u64 {
        self.time
    }
}

impl Default for FractalTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation for FractalTree {
    fn step(&mut self, ctx: &mut dyn DrawContext, size: Size) {
        ctx.clear_rect(0.0, 0.0, size.w(), size.h());

        let branches = tree(size, self.time);
        let base_hue = self.time as f64 * 0.5;
        for b in &branches {
            let level = (MAX_DEPTH - b.depth) as f64;
            ctx.set_line_width(b.depth as f64 * 0.8);
            let hue = wrap_hue(base_hue + level * 25.0);
            ctx.set_stroke_style(&Hsla::new(hue, 70.0, 55.0, 0.85).to_string());
            ctx.line(b.from.x, b.from.y, b.to.x, b.to.y);
        }

        self.branches = branches.len();
        self.time += 1;
    }

    fn population(&self) -> usize {
        self.branches
    }
}
