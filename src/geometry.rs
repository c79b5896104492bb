//! Viewport sizes and the small numeric helpers every simulation shares.

use std::cell::Cell;
use std::f64::consts::TAU;
use std::rc::Rc;

use rand::Rng;

/// Pixel dimensions of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const ZERO: Size = Size { width: 0, height: 0 };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn w(self) -> f64 {
        self.width as f64
    }

    #[inline]
    pub fn h(self) -> f64 {
        self.height as f64
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn center(self) -> Point {
        Point::new(self.w() / 2.0, self.h() / 2.0)
    }

    pub fn min_side(self) -> f64 {
        self.w().min(self.h())
    }

    pub fn diagonal(self) -> f64 {
        self.w().hypot(self.h())
    }
}

/// Surface size shared between a surface's resize listener and the tick that
/// reads it. Each tick takes one snapshot with [`Viewport::get`] so a resize
/// can never land in the middle of an update.
#[derive(Debug, Clone, Default)]
pub struct Viewport(Rc<Cell<Size>>);

impl Viewport {
    pub fn new(size: Size) -> Self {
        Self(Rc::new(Cell::new(size)))
    }

    pub fn get(&self) -> Size {
        self.0.get()
    }

    pub fn set(&self, size: Size) {
        self.0.set(size);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Point at `radius` from `self` along `angle` (radians).
    pub fn polar(self, angle: f64, radius: f64) -> Point {
        Point::new(self.x + angle.cos() * radius, self.y + angle.sin() * radius)
    }
}

/// Reflect a coordinate off the `[0, max]` walls.
///
/// The velocity is pointed back inside rather than negated, so an entity that
/// is still outside on the next tick keeps heading inward instead of flipping
/// again.
#[inline]
pub fn reflect_axis(pos: f64, vel: f64, max: f64) -> (f64, f64) {
    if pos < 0.0 {
        ((-pos).min(max), vel.abs())
    } else if pos > max {
        ((2.0 * max - pos).max(0.0), -vel.abs())
    } else {
        (pos, vel)
    }
}

/// Hue on the 0-360 colour wheel, wrapped.
#[inline]
pub fn wrap_hue(hue: f64) -> f64 {
    below(hue.rem_euclid(360.0), 360.0)
}

/// Hue limited to `[lo, hi]` for variants that keep a restricted palette.
#[inline]
pub fn clamp_hue(hue: f64, lo: f64, hi: f64) -> f64 {
    hue.clamp(lo, hi)
}

/// Wrap an accumulating phase into `[0, TAU)`.
#[inline]
pub fn wrap_phase(phase: f64) -> f64 {
    below(phase.rem_euclid(TAU), TAU)
}

// rem_euclid rounds tiny negative inputs up to the modulus itself
#[inline]
fn below(v: f64, max: f64) -> f64 {
    if v >= max {
        0.0
    } else {
        v
    }
}

/// Uniform sample in `[lo, hi)`, or `lo` when the range is empty.
///
/// Viewports can collapse to zero, which turns ranges such as `0..width`
/// into empty ones; `gen_range` panics on those.
#[inline]
pub fn rand_between<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Random point on the surface.
pub fn rand_point<R: Rng + ?Sized>(rng: &mut R, size: Size) -> Point {
    Point::new(rand_between(rng, 0.0, size.w()), rand_between(rng, 0.0, size.h()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn reflect_points_velocity_inward() {
        assert_eq!(reflect_axis(-2.0, -1.5, 100.0), (2.0, 1.5));
        assert_eq!(reflect_axis(103.0, 1.0, 100.0), (97.0, -1.0));
        // already heading inward stays inward
        assert_eq!(reflect_axis(-1.0, 0.5, 100.0), (1.0, 0.5));
        assert_eq!(reflect_axis(50.0, 3.0, 100.0), (50.0, 3.0));
    }

    #[test]
    fn reflect_on_zero_extent_pins_to_origin() {
        assert_eq!(reflect_axis(4.0, 1.0, 0.0), (0.0, -1.0));
        assert_eq!(reflect_axis(-4.0, -1.0, 0.0), (0.0, 1.0));
    }

    #[test]
    fn wrap_helpers() {
        assert_eq!(wrap_hue(370.0), 10.0);
        assert_eq!(wrap_hue(-30.0), 330.0);
        assert_eq!(clamp_hue(200.0, 80.0, 180.0), 180.0);
        assert!(wrap_phase(7.0) < TAU);
    }

    #[test]
    fn empty_range_does_not_panic() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(rand_between(&mut rng, 0.0, 0.0), 0.0);
        assert_eq!(rand_between(&mut rng, 5.0, 1.0), 5.0);
        let p = rand_point(&mut rng, Size::ZERO);
        assert_eq!(p, Point::new(0.0, 0.0));
    }

    #[test]
    fn viewport_clones_share_size() {
        let vp = Viewport::new(Size::new(10, 20));
        let other = vp.clone();
        other.set(Size::new(30, 40));
        assert_eq!(vp.get(), Size::new(30, 40));
    }
}
