//! Mode switching: at most one surface and one timer are ever live.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{BackgroundSettings, BackgroundType, EngineConfig, DEFAULT_SEED};
use crate::error::Result;
use crate::scheduler::{FrameScheduler, TimerHandle};
use crate::surface::{Surface, SurfaceId, SurfaceManager};
use crate::variants::{self, Selection, Simulation, VariantId};

/// Outcome of [`LiveBackground::activate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// A built-in simulation is now running.
    Started(VariantId),
    /// The custom media wallpaper owns the background; nothing was created.
    External,
}

struct ActiveRun<C> {
    variant: VariantId,
    surface: Surface<C>,
    timer: TimerHandle,
    simulation: Rc<RefCell<Box<dyn Simulation>>>,
}

/// Owns the surface manager, the scheduler and the running simulation.
pub struct LiveBackground<M: SurfaceManager, S: FrameScheduler> {
    surfaces: M,
    scheduler: S,
    config: EngineConfig,
    active: Option<ActiveRun<M::Context>>,
    external: bool,
    activations: u64,
}

impl<M: SurfaceManager, S: FrameScheduler> LiveBackground<M, S> {
    pub fn new(surfaces: M, scheduler: S, config: EngineConfig) -> Self {
        Self {
            surfaces,
            scheduler,
            config,
            active: None,
            external: false,
            activations: 0,
        }
    }

    /// Switch to the wallpaper named `raw`, tearing down whatever ran before.
    /// Unknown names run the configured fallback; `custom` hands the
    /// background to the media player.
    pub fn activate(&mut self, raw: &str) -> Result<Activation> {
        self.deactivate();
        match variants::resolve(raw, self.config.fallback) {
            Selection::Custom => {
                log::info!("live wallpaper handed to media playback");
                self.external = true;
                Ok(Activation::External)
            }
            Selection::Builtin(variant) => {
                self.start(variant)?;
                Ok(Activation::Started(variant))
            }
        }
    }

    /// Stop the timer and release the surface. Does nothing when idle.
    pub fn deactivate(&mut self) {
        self.external = false;
        let Some(run) = self.active.take() else {
            return;
        };
        self.scheduler.stop(run.timer);
        self.surfaces.destroy_surface(&run.surface);
        log::debug!("stopped live wallpaper {}", run.variant);
    }

    /// React to a change of the clock's background settings.
    pub fn apply_settings(&mut self, settings: &BackgroundSettings) -> Result<Option<Activation>> {
        if settings.background_type != BackgroundType::Live {
            self.deactivate();
            return Ok(None);
        }
        self.activate(settings.live_wallpaper()).map(Some)
    }

    fn start(&mut self, variant: VariantId) -> Result<()> {
        let surface = self.surfaces.create_surface()?;
        let size = surface.size();
        let simulation = Rc::new(RefCell::new(variant.instantiate(size, self.next_seed())));

        let tick = {
            let simulation = simulation.clone();
            let context = surface.context();
            let viewport = surface.viewport().clone();
            Box::new(move || {
                // one size snapshot per tick keeps resizes out of mid-update
                let size = viewport.get();
                let (Ok(mut sim), Ok(mut ctx)) =
                    (simulation.try_borrow_mut(), context.try_borrow_mut())
                else {
                    return;
                };
                sim.step(&mut *ctx, size);
            })
        };

        let interval = variant.interval();
        let timer = match self.scheduler.start(interval, tick) {
            Ok(timer) => timer,
            Err(err) => {
                self.surfaces.destroy_surface(&surface);
                return Err(err);
            }
        };

        log::info!(
            "live wallpaper {} every {} on {}x{} ({} entities)",
            variant,
            interval,
            size.width,
            size.height,
            simulation.borrow().population()
        );
        self.active = Some(ActiveRun {
            variant,
            surface,
            timer,
            simulation,
        });
        Ok(())
    }

    fn next_seed(&mut self) -> u64 {
        self.activations += 1;
        splitmix64(self.config.seed.unwrap_or(DEFAULT_SEED) ^ self.activations)
    }

    pub fn active_variant(&self) -> Option<VariantId> {
        self.active.as_ref().map(|run| run.variant)
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// True while the custom media wallpaper is selected.
    pub fn is_external(&self) -> bool {
        self.external
    }

    pub fn population(&self) -> Option<usize> {
        self.active.as_ref().map(|run| run.simulation.borrow().population())
    }

    pub fn surface_id(&self) -> Option<SurfaceId> {
        self.active.as_ref().map(|run| run.surface.id())
    }

    pub fn timer(&self) -> Option<TimerHandle> {
        self.active.as_ref().map(|run| run.timer)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn surfaces(&self) -> &M {
        &self.surfaces
    }

    pub fn surfaces_mut(&mut self) -> &mut M {
        &mut self.surfaces
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl<M: SurfaceManager, S: FrameScheduler> Drop for LiveBackground<M, S> {
    fn drop(&mut self) {
        self.deactivate();
    }
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}
