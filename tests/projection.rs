use live_wallpaper::draw::recording::RecordingContext;
use live_wallpaper::geometry::Point;
use live_wallpaper::variants::stars::{project, Starfield, FAR_PLANE, FOCAL_LENGTH, STAR_COUNT};
use live_wallpaper::variants::Simulation;
use live_wallpaper::Size;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn approx_eq(a: Point, b: Point, eps: f64) -> bool {
    (a.x - b.x).abs() < eps && (a.y - b.y).abs() < eps
}

#[test]
fn centre_is_a_fixed_point() {
    for size in [Size::new(1920, 1080), Size::new(1080, 1920), Size::new(1, 1)] {
        let c = size.center();
        for z in [0.5, 10.0, FOCAL_LENGTH, FAR_PLANE] {
            assert!(approx_eq(project(c, z, size), c, 1e-9), "{size:?} z={z}");
        }
    }
}

#[test]
fn focal_plane_is_identity() {
    let size = Size::new(1280, 720);
    for p in [Point::new(0.0, 0.0), Point::new(1280.0, 720.0), Point::new(100.0, 600.0)] {
        assert!(approx_eq(project(p, FOCAL_LENGTH, size), p, 1e-9));
    }
}

#[test]
fn approaching_stars_move_outward() {
    let size = Size::new(800, 600);
    let c = size.center();
    let p = Point::new(500.0, 200.0);
    let mut last = 0.0;
    for z in (1..=10).rev().map(|i| i as f64 * 100.0) {
        let d = project(p, z, size).distance(c);
        assert!(d > last, "z={z}");
        last = d;
    }
}

#[test]
fn offsets_scale_the_same_on_wide_and_tall_surfaces() {
    let wide = Size::new(1920, 1080);
    let tall = Size::new(1080, 1920);
    let offsets = [(0.0, 0.0), (40.0, 0.0), (0.0, -40.0), (-120.0, 75.0)];
    for (dx, dy) in offsets {
        for z in [50.0, 400.0, 900.0] {
            let (cw, ct) = (wide.center(), tall.center());
            let pw = project(Point::new(cw.x + dx, cw.y + dy), z, wide);
            let pt = project(Point::new(ct.x + dx, ct.y + dy), z, tall);
            let a = Point::new(pw.x - cw.x, pw.y - cw.y);
            let b = Point::new(pt.x - ct.x, pt.y - ct.y);
            assert!(approx_eq(a, b, 1e-9), "a={a:?} b={b:?}");
        }
    }
}

#[test]
fn zero_depth_stays_finite() {
    let p = project(Point::new(10.0, 10.0), 0.0, Size::new(100, 100));
    assert!(p.x.is_finite() && p.y.is_finite());
}

#[test]
fn stars_recycle_at_the_far_plane() {
    let size = Size::new(1024, 768);
    let mut field = Starfield::new(size, SmallRng::seed_from_u64(12));
    let mut ctx = RecordingContext::new();
    for _ in 0..1500 {
        field.step(&mut ctx, size);
        for star in field.stars() {
            assert!(star.z > 0.0 && star.z <= FAR_PLANE);
        }
    }
    assert_eq!(field.population(), STAR_COUNT);
    assert_eq!(ctx.non_finite(), 0);
}
