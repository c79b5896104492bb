//! Live-background simulations and the registry that names them.
//!
//! Every simulation is an explicit state struct built from the surface size
//! and advanced by [`Simulation::step`], which updates and draws one frame.
//! Entities are wrapped, reflected or respawned at the surface edges, and
//! any per-entity history is capped.

use std::fmt;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::draw::DrawContext;
use crate::geometry::Size;
use crate::scheduler::TickInterval;

pub mod aurora;
pub mod blackhole;
pub mod constellation;
pub mod dna;
pub mod fractal;
pub mod geometric;
pub mod grid;
pub mod matrix;
pub mod nebula;
pub mod neural;
pub mod particles;
pub mod plasma;
pub mod stars;
pub mod vortex;
pub mod waves;

/// Identifier reserved for uploaded video/GIF wallpapers, which are played by
/// the page and not by this crate.
pub const CUSTOM_ID: &str = "custom";

/// One update+draw routine with its own state.
pub trait Simulation {
    /// Advance one frame and draw it. `size` is the surface size for this
    /// tick and may be zero in either dimension.
    fn step(&mut self, ctx: &mut dyn DrawContext, size: Size);

    /// Number of live entities (particles, nodes, cells, branches).
    fn population(&self) -> usize;
}

/// Built-in live backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantId {
    /// Falling green glyph columns.
    #[default]
    Matrix,
    Particles,
    Waves,
    Stars,
    Geometric,
    Nebula,
    Plasma,
    Vortex,
    Neural,
    Dna,
    Constellation,
    Aurora,
    Fractal,
    Grid,
    Blackhole,
}

impl VariantId {
    pub const ALL: [VariantId; 15] = [
        VariantId::Matrix,
        VariantId::Particles,
        VariantId::Waves,
        VariantId::Stars,
        VariantId::Geometric,
        VariantId::Nebula,
        VariantId::Plasma,
        VariantId::Vortex,
        VariantId::Neural,
        VariantId::Dna,
        VariantId::Constellation,
        VariantId::Aurora,
        VariantId::Fractal,
        VariantId::Grid,
        VariantId::Blackhole,
    ];

    pub fn id(self) -> &'static str {
        match self {
            VariantId::Matrix => "matrix",
            VariantId::Particles => "particles",
            VariantId::Waves => "waves",
            VariantId::Stars => "stars",
            VariantId::Geometric => "geometric",
            VariantId::Nebula => "nebula",
            VariantId::Plasma => "plasma",
            VariantId::Vortex => "vortex",
            VariantId::Neural => "neural",
            VariantId::Dna => "dna",
            VariantId::Constellation => "constellation",
            VariantId::Aurora => "aurora",
            VariantId::Fractal => "fractal",
            VariantId::Grid => "grid",
            VariantId::Blackhole => "blackhole",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VariantId::Matrix => "Matrix Rain",
            VariantId::Particles => "Floating Particles",
            VariantId::Waves => "Sine Waves",
            VariantId::Stars => "Starfield",
            VariantId::Geometric => "Rotating Polygons",
            VariantId::Nebula => "Swirling Nebula",
            VariantId::Plasma => "Plasma Field",
            VariantId::Vortex => "Gravity Vortex",
            VariantId::Neural => "Neural Network",
            VariantId::Dna => "DNA Helix",
            VariantId::Constellation => "Constellations",
            VariantId::Aurora => "Aurora",
            VariantId::Fractal => "Fractal Tree",
            VariantId::Grid => "Pulsing Grid",
            VariantId::Blackhole => "Black Hole",
        }
    }

    /// Exact match on the string id, ignoring surrounding whitespace.
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL.into_iter().find(|v| v.id() == id)
    }

    pub fn interval(self) -> TickInterval {
        match self {
            VariantId::Matrix => TickInterval::RAIN,
            VariantId::Plasma | VariantId::Fractal => TickInterval::DENSE,
            _ => TickInterval::SMOOTH,
        }
    }

    /// Fresh simulation state for a surface of `size`.
    pub fn instantiate(self, size: Size, seed: u64) -> Box<dyn Simulation> {
        let rng = SmallRng::seed_from_u64(seed);
        match self {
            VariantId::Matrix => Box::new(matrix::MatrixRain::new(size, rng)),
            VariantId::Particles => Box::new(particles::FloatingParticles::new(size, rng)),
            VariantId::Waves => Box::new(waves::SineWaves::new()),
            VariantId::Stars => Box::new(stars::Starfield::new(size, rng)),
            VariantId::Geometric => Box::new(geometric::RotatingPolygons::new()),
            VariantId::Nebula => Box::new(nebula::Nebula::new(size, rng)),
            VariantId::Plasma => Box::new(plasma::PlasmaField::new(size, rng)),
            VariantId::Vortex => Box::new(vortex::Vortex::new(size, rng)),
            VariantId::Neural => Box::new(neural::NeuralGraph::new(size, rng)),
            VariantId::Dna => Box::new(dna::Helix::new()),
            VariantId::Constellation => Box::new(constellation::Constellations::new(size, rng)),
            VariantId::Aurora => Box::new(aurora::Aurora::new(rng)),
            VariantId::Fractal => Box::new(fractal::FractalTree::new()),
            VariantId::Grid => Box::new(grid::PulsingGrid::new()),
            VariantId::Blackhole => Box::new(blackhole::GravityWell::new(size, rng)),
        }
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// What a raw wallpaper-type string asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Builtin(VariantId),
    /// Hand over to the page's media player.
    Custom,
}

/// Map a configuration string to a selection. Unknown ids quietly become
/// `fallback`.
pub fn resolve(raw: &str, fallback: VariantId) -> Selection {
    if raw.trim() == CUSTOM_ID {
        return Selection::Custom;
    }
    match VariantId::from_id(raw) {
        Some(id) => Selection::Builtin(id),
        None => {
            log::debug!("unknown live wallpaper {raw:?}, using {fallback}");
            Selection::Builtin(fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for v in VariantId::ALL {
            assert_eq!(VariantId::from_id(v.id()), Some(v));
        }
        assert_eq!(VariantId::from_id(" stars "), Some(VariantId::Stars));
        assert_eq!(VariantId::from_id("Stars"), None);
    }

    #[test]
    fn serde_uses_string_ids() {
        let json = serde_json::to_string(&VariantId::Blackhole).unwrap();
        assert_eq!(json, "\"blackhole\"");
        let v: VariantId = serde_json::from_str("\"dna\"").unwrap();
        assert_eq!(v, VariantId::Dna);
    }

    #[test]
    fn resolve_falls_back_and_reserves_custom() {
        assert_eq!(
            resolve("unknown-type", VariantId::Matrix),
            Selection::Builtin(VariantId::Matrix)
        );
        assert_eq!(resolve("custom", VariantId::Matrix), Selection::Custom);
        assert_eq!(resolve("aurora", VariantId::Matrix), Selection::Builtin(VariantId::Aurora));
    }

    #[test]
    fn dense_effects_are_throttled() {
        assert_eq!(VariantId::Plasma.interval().millis(), 50);
        assert_eq!(VariantId::Fractal.interval().millis(), 50);
        assert_eq!(VariantId::Matrix.interval().millis(), 35);
        assert_eq!(VariantId::Neural.interval().millis(), 16);
    }
}
