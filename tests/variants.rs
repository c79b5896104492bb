use live_wallpaper::draw::recording::RecordingContext;
use live_wallpaper::geometry::Point;
use live_wallpaper::variants::aurora::{self, Aurora};
use live_wallpaper::variants::blackhole::{self, GravityWell};
use live_wallpaper::variants::constellation::{self, Constellations};
use live_wallpaper::variants::fractal::{self, FractalTree};
use live_wallpaper::variants::matrix::MatrixRain;
use live_wallpaper::variants::nebula::{self, Nebula};
use live_wallpaper::variants::neural::NeuralGraph;
use live_wallpaper::variants::particles::{FloatingParticles, Particle, PARTICLE_COUNT};
use live_wallpaper::variants::plasma::{self, PlasmaField};
use live_wallpaper::variants::vortex::{self, Vortex};
use live_wallpaper::variants::{Simulation, VariantId};
use live_wallpaper::Size;
use rand::rngs::SmallRng;
use rand::SeedableRng;

const SIZES: [Size; 3] = [Size::new(0, 0), Size::new(1, 1), Size::new(1920, 1080)];

fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

#[test]
fn every_variant_runs_on_degenerate_and_full_surfaces() {
    for variant in VariantId::ALL {
        for size in SIZES {
            let mut sim = variant.instantiate(size, 11);
            let mut ctx = RecordingContext::new();
            for _ in 0..3 {
                sim.step(&mut ctx, size);
            }
            assert_eq!(ctx.non_finite(), 0, "{variant} at {size:?} drew non-finite values");
            assert_eq!(ctx.depth(), 0, "{variant} at {size:?} left a save open");
            assert_eq!(ctx.unbalanced_restores(), 0, "{variant} at {size:?}");
        }
    }
}

#[test]
fn full_size_variants_draw_something() {
    let size = Size::new(1920, 1080);
    for variant in VariantId::ALL {
        let mut sim = variant.instantiate(size, 5);
        let mut ctx = RecordingContext::new();
        for _ in 0..5 {
            sim.step(&mut ctx, size);
        }
        assert!(ctx.draw_calls() > 0, "{variant} drew nothing");
        assert!(sim.population() > 0, "{variant} has no entities");
    }
}

#[test]
fn particles_stay_inside_800_by_600() {
    let size = Size::new(800, 600);
    let mut sim = FloatingParticles::new(size, rng(3));
    assert_eq!(sim.population(), PARTICLE_COUNT);

    let mut ctx = RecordingContext::new();
    for _ in 0..1000 {
        sim.step(&mut ctx, size);
    }
    assert_eq!(sim.particles().len(), 100);
    for p in sim.particles() {
        assert!((0.0..=800.0).contains(&p.x), "x = {}", p.x);
        assert!((0.0..=600.0).contains(&p.y), "y = {}", p.y);
    }
}

#[test]
fn wall_hit_flips_velocity_once() {
    let size = Size::new(800, 600);
    let mut sim = FloatingParticles::from_particles(vec![Particle {
        x: 799.5,
        y: 300.0,
        vx: 1.0,
        vy: 0.0,
        size: 1.0,
    }]);
    let mut ctx = RecordingContext::new();

    sim.step(&mut ctx, size);
    let p = sim.particles()[0];
    assert_eq!(p.vx, -1.0);
    assert!(p.x <= 800.0);

    for _ in 0..10 {
        sim.step(&mut ctx, size);
        assert_eq!(sim.particles()[0].vx, -1.0);
    }
}

#[test]
fn shrinking_surface_pulls_particles_back_in() {
    let mut sim = FloatingParticles::new(Size::new(1920, 1080), rng(8));
    let small = Size::new(100, 100);
    let mut ctx = RecordingContext::new();
    for _ in 0..3 {
        sim.step(&mut ctx, small);
    }
    for p in sim.particles() {
        assert!(p.x >= 0.0 && p.x <= 100.0 && p.y >= 0.0 && p.y <= 100.0);
    }
}

#[test]
fn gravity_well_keeps_population_and_short_trails() {
    let size = Size::new(1920, 1080);
    let center = size.center();
    let mut sim = GravityWell::new(size, rng(21));
    let initial = sim.population();
    assert_eq!(initial, blackhole::PARTICLE_COUNT);

    let mut ctx = RecordingContext::new();
    for _ in 0..5000 {
        sim.step(&mut ctx, size);
        assert_eq!(sim.population(), initial);
        for p in sim.particles() {
            assert!(p.trail.len() <= blackhole::TRAIL_LEN);
            let r = p.pos.distance(center);
            assert!(r >= blackhole::CAPTURE_RADIUS);
            if p.trail.is_empty() {
                // just respawned
                let spawn_band = blackhole::SPAWN_MIN..=blackhole::SPAWN_MAX;
                assert!(spawn_band.contains(&r), "respawned at {r}");
            }
        }
    }
    assert!(sim.captured() > 0, "nothing ever fell in");
}

#[test]
fn constellation_trails_are_capped_and_stars_stay_on_surface() {
    let size = Size::new(640, 480);
    let mut sim = Constellations::new(size, rng(4));
    let mut ctx = RecordingContext::new();
    for _ in 0..2000 {
        sim.step(&mut ctx, size);
    }
    for star in sim.stars() {
        assert!(star.trail.len() <= constellation::TRAIL_LEN);
        assert!(star.pos.x >= 0.0 && star.pos.x <= 640.0);
        assert!(star.pos.y >= 0.0 && star.pos.y <= 480.0);
    }
}

#[test]
fn aurora_hues_stay_clamped() {
    let size = Size::new(800, 400);
    let mut sim = Aurora::new(rng(2));
    let mut ctx = RecordingContext::new();
    for _ in 0..5000 {
        sim.step(&mut ctx, size);
        for hue in sim.hues() {
            assert!((aurora::HUE_MIN..=aurora::HUE_MAX).contains(&hue), "hue {hue}");
        }
    }
}

fn angle(from: Point, to: Point) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

#[test]
fn fractal_is_bounded_by_depth() {
    let branches = fractal::tree(Size::new(1920, 1080), 0);
    // every level splits in two until the depth budget runs out
    assert_eq!(branches.len(), (1 << fractal::MAX_DEPTH) - 1);
    assert_eq!(branches[0].depth, fractal::MAX_DEPTH);
    assert!(branches.iter().all(|b| b.depth >= 1));
    assert!(branches
        .iter()
        .all(|b| b.from.distance(b.to) > fractal::MIN_LENGTH));

    let trunk = angle(branches[0].from, branches[0].to);
    let left = angle(branches[1].from, branches[1].to);
    assert!((trunk - left - fractal::SPREAD).abs() < 1e-9);
    let length = |b: &fractal::Branch| b.from.distance(b.to);
    let ratio = length(&branches[1]) / length(&branches[0]);
    assert!((ratio - fractal::DECAY).abs() < 1e-9);
}

#[test]
fn fractal_stops_at_minimum_length() {
    // trunk 5.6 -> 3.92 -> 2.744 -> 1.92 (too short)
    assert_eq!(fractal::tree(Size::new(20, 20), 0).len(), 7);
    assert!(fractal::tree(Size::ZERO, 0).is_empty());
}

#[test]
fn fractal_rebuilds_from_the_clock() {
    let size = Size::new(800, 600);
    let mut sim = FractalTree::new();
    let mut ctx = RecordingContext::new();
    for _ in 0..40 {
        sim.step(&mut ctx, size);
    }
    assert_eq!(sim.time(), 40);
    assert_eq!(sim.population(), fractal::tree(size, 39).len());
    assert_ne!(fractal::tree(size, 0)[1].to, fractal::tree(size, 40)[1].to);
}

#[test]
fn plasma_grid_follows_surface() {
    let mut sim = PlasmaField::new(Size::ZERO, rng(6));
    assert_eq!(sim.dimensions(), (0, 0));

    let size = Size::new(120, 120);
    let mut ctx = RecordingContext::new();
    for _ in 0..20 {
        sim.step(&mut ctx, size);
    }
    assert_eq!(sim.dimensions(), (10, 10));
    assert!(sim.activator().iter().all(|v| (0.0..=1.0).contains(v)));
}

#[test]
fn matrix_columns_follow_width() {
    let mut sim = MatrixRain::new(Size::new(400, 300), rng(1));
    assert_eq!(sim.drops().len(), 20);
    let mut ctx = RecordingContext::new();
    sim.step(&mut ctx, Size::new(200, 300));
    assert_eq!(sim.drops().len(), 10);
    assert_eq!(ctx.stats.texts, 10);
}

#[test]
fn matrix_drops_wrap_back_to_the_top() {
    let size = Size::new(200, 100);
    let mut sim = MatrixRain::new(size, rng(9));
    let mut ctx = RecordingContext::new();
    let mut restarted = false;
    for _ in 0..2000 {
        sim.step(&mut ctx, size);
        restarted |= sim.drops().iter().any(|&d| d == 1);
        assert!(sim.drops().iter().all(|&d| d <= 5 + 400 + 1));
    }
    assert!(restarted);
}

#[test]
fn plasma_wave_is_sampled_once_per_tick() {
    let size = Size::new(96, 48);
    let mut sim = PlasmaField::new(size, rng(6));
    let mut ctx = RecordingContext::new();
    sim.step(&mut ctx, size);

    let (cols, rows) = sim.dimensions();
    assert_eq!(sim.wave().len(), cols * rows);
    for y in 0..rows {
        for x in 0..cols {
            let expected = plasma::plasma_wave(x as f64 / cols as f64, y as f64 / rows as f64, 0.0);
            assert!((sim.wave()[y * cols + x] as f64 - expected).abs() < 1e-6);
        }
    }
}

#[test]
fn neural_nodes_stay_on_surface() {
    let size = Size::new(800, 600);
    let mut sim = NeuralGraph::new(size, rng(14));
    let mut ctx = RecordingContext::new();
    for _ in 0..5000 {
        sim.step(&mut ctx, size);
    }
    for n in sim.nodes() {
        assert!((0.0..=800.0).contains(&n.pos.x) && (0.0..=600.0).contains(&n.pos.y));
    }

    let small = Size::new(200, 150);
    for _ in 0..3 {
        sim.step(&mut ctx, small);
        for n in sim.nodes() {
            assert!((0.0..=200.0).contains(&n.pos.x), "x = {}", n.pos.x);
            assert!((0.0..=150.0).contains(&n.pos.y), "y = {}", n.pos.y);
        }
    }
    assert_eq!(ctx.non_finite(), 0);
}

#[test]
fn nebula_motes_stay_in_their_band() {
    for size in [Size::ZERO, Size::new(1920, 1080)] {
        let limit = nebula::outer_radius(size) * 1.2;
        let mut sim = Nebula::new(size, rng(31));
        let mut ctx = RecordingContext::new();
        for _ in 0..3000 {
            sim.step(&mut ctx, size);
            for r in sim.radii() {
                assert!((nebula::INNER_RADIUS..=limit).contains(&r), "{size:?}: r = {r}");
            }
        }
    }
}

#[test]
fn vortex_swirlers_stay_between_core_and_rim() {
    for size in [Size::ZERO, Size::new(1920, 1080)] {
        let rim = vortex::rim(size);
        let mut sim = Vortex::new(size, rng(32));
        let mut ctx = RecordingContext::new();
        for _ in 0..3000 {
            sim.step(&mut ctx, size);
            for r in sim.radii() {
                assert!((vortex::CORE..=rim).contains(&r), "{size:?}: r = {r}");
            }
        }
    }
}
