//! Immediate-mode 2D drawing seam.
//!
//! Simulations only talk to [`DrawContext`]. In the browser it is backed by a
//! `CanvasRenderingContext2d`; on the host by [`recording::RecordingContext`].

use std::fmt;

/// The capability set a simulation needs from a 2D canvas: rects, paths,
/// arcs, text, glow, and save/restore transforms.
pub trait DrawContext {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    fn set_fill_style(&mut self, style: &str);
    fn set_stroke_style(&mut self, style: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &str);
    fn set_shadow_blur(&mut self, blur: f64);
    fn set_shadow_color(&mut self, color: &str);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64);
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill(&mut self);
    fn stroke(&mut self);

    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);

    /// Filled full circle.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.begin_path();
        self.arc(x, y, radius.max(0.0), 0.0, std::f64::consts::TAU);
        self.fill();
    }

    /// Single stroked segment.
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.begin_path();
        self.move_to(x1, y1);
        self.line_to(x2, y2);
        self.stroke();
    }

    /// Paint the whole surface with a translucent colour so earlier frames
    /// fade out gradually instead of being erased.
    fn fade(&mut self, w: f64, h: f64, overlay: Rgba) {
        self.set_fill_style(&overlay.to_string());
        self.fill_rect(0.0, 0.0, w, h);
    }
}

/// CSS `rgba()` colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Black at the given opacity, the overlay used by trail effects.
    pub const fn black(a: f64) -> Self {
        Self::new(0, 0, 0, a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a.clamp(0.0, 1.0))
    }
}

/// CSS `hsla()` colour. Hue is on the 0-360 wheel; callers decide whether to
/// wrap or clamp it before building the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Hsla {
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({:.1}, {:.0}%, {:.0}%, {:.3})",
            self.h,
            self.s.clamp(0.0, 100.0),
            self.l.clamp(0.0, 100.0),
            self.a.clamp(0.0, 1.0)
        )
    }
}

pub mod recording {
    //! Host-side context that keeps counters instead of pixels.

    use super::DrawContext;
    use crate::geometry::Point;

    /// Tallies of what a tick drew.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct DrawStats {
        pub clear_rects: usize,
        pub fill_rects: usize,
        pub paths: usize,
        pub fills: usize,
        pub strokes: usize,
        pub segments: usize,
        pub arcs: usize,
        pub texts: usize,
        pub transforms: usize,
    }

    #[derive(Debug, Clone, Default)]
    pub struct RecordingContext {
        pub stats: DrawStats,
        pub fill_style: String,
        pub stroke_style: String,
        pub font: String,
        pub line_width: f64,
        pub shadow_blur: f64,
        depth: i32,
        max_depth: i32,
        unbalanced_restores: usize,
        non_finite: usize,
        arc_extent: Option<(Point, Point)>,
    }

    impl RecordingContext {
        pub fn new() -> Self {
            Self {
                line_width: 1.0,
                ..Self::default()
            }
        }

        /// Current save/restore nesting. Zero after a well-behaved tick.
        pub fn depth(&self) -> i32 {
            self.depth
        }

        pub fn max_depth(&self) -> i32 {
            self.max_depth
        }

        pub fn unbalanced_restores(&self) -> usize {
            self.unbalanced_restores
        }

        /// Number of NaN/infinite arguments seen.
        pub fn non_finite(&self) -> usize {
            self.non_finite
        }

        /// Total primitives that would touch pixels.
        pub fn draw_calls(&self) -> usize {
            let s = &self.stats;
            s.fill_rects + s.fills + s.strokes + s.texts
        }

        /// Bounding box `(min, max)` of every arc centre since the last
        /// [`reset_stats`](Self::reset_stats).
        pub fn arc_extent(&self) -> Option<(Point, Point)> {
            self.arc_extent
        }

        pub fn reset_stats(&mut self) {
            self.stats = DrawStats::default();
            self.arc_extent = None;
        }

        fn check(&mut self, values: &[f64]) {
            self.non_finite += values.iter().filter(|v| !v.is_finite()).count();
        }
    }

    impl DrawContext for RecordingContext {
        fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
            self.check(&[x, y, w, h]);
            self.stats.clear_rects += 1;
        }

        fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
            self.check(&[x, y, w, h]);
            self.stats.fill_rects += 1;
        }

        fn set_fill_style(&mut self, style: &str) {
            self.fill_style = style.to_owned();
        }

        fn set_stroke_style(&mut self, style: &str) {
            self.stroke_style = style.to_owned();
        }

        fn set_line_width(&mut self, width: f64) {
            self.check(&[width]);
            self.line_width = width;
        }

        fn set_font(&mut self, font: &str) {
            self.font = font.to_owned();
        }

        fn set_shadow_blur(&mut self, blur: f64) {
            self.check(&[blur]);
            self.shadow_blur = blur;
        }

        fn set_shadow_color(&mut self, _color: &str) {}

        fn begin_path(&mut self) {
            self.stats.paths += 1;
        }

        fn move_to(&mut self, x: f64, y: f64) {
            self.check(&[x, y]);
        }

        fn line_to(&mut self, x: f64, y: f64) {
            self.check(&[x, y]);
            self.stats.segments += 1;
        }

        fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
            self.check(&[x, y, radius, start, end]);
            if radius < 0.0 {
                // canvas throws IndexSizeError on negative radii
                self.non_finite += 1;
            }
            let (lo, hi) = self.arc_extent.unwrap_or((Point::new(x, y), Point::new(x, y)));
            self.arc_extent = Some((
                Point::new(lo.x.min(x), lo.y.min(y)),
                Point::new(hi.x.max(x), hi.y.max(y)),
            ));
            self.stats.arcs += 1;
        }

        fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
            self.check(&[x, y, w, h]);
        }

        fn fill(&mut self) {
            self.stats.fills += 1;
        }

        fn stroke(&mut self) {
            self.stats.strokes += 1;
        }

        fn fill_text(&mut self, _text: &str, x: f64, y: f64) {
            self.check(&[x, y]);
            self.stats.texts += 1;
        }

        fn save(&mut self) {
            self.depth += 1;
            self.max_depth = self.max_depth.max(self.depth);
        }

        fn restore(&mut self) {
            if self.depth == 0 {
                self.unbalanced_restores += 1;
            } else {
                self.depth -= 1;
            }
        }

        fn translate(&mut self, x: f64, y: f64) {
            self.check(&[x, y]);
            self.stats.transforms += 1;
        }

        fn rotate(&mut self, angle: f64) {
            self.check(&[angle]);
            self.stats.transforms += 1;
        }
    }
}
