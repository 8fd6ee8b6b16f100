//! Physics - the bridge between element records and the body world
//!
//! Owns the unit converter, the element registry, the simulation world and
//! the optional wall frame. World creation waits for three inputs that reach
//! the bridge independently (viewport size, a non-empty registry and the
//! display density), so every entry point tolerates being called early:
//! missing inputs turn the call into a logged no-op instead of an error.
//!
//! Tolerant entry points (`create_world`, `step`, ...) wrap `try_*`
//! variants that report the exact `PhysicsError`.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::core::error::{PhysicsError, PhysicsResult};
use crate::core::units::UnitConverter;
use crate::domain::registry::ElementRegistry;
use crate::domain::settings::PhysicsSettings;
use crate::systems::body_world::{BodyHandle, BodyWorld};
use crate::systems::bounds::BoundaryWalls;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "step/ticker.rs"]
mod ticker;
#[path = "commands/impulse.rs"]
mod impulse;
#[path = "bounds/bounds.rs"]
mod bounds;

pub use perf_stats::PerfStats;
pub use ticker::FixedTicker;

pub(crate) use perf_timer::PerfTimer;

/// The simulation bridge for one layout session
pub struct Physics {
    settings: PhysicsSettings,
    units: UnitConverter,
    registry: ElementRegistry,
    world: Option<BodyWorld>,
    walls: Option<BoundaryWalls>,
    /// Wall thickness (px) requested by the host, applied once the world exists
    bound_request_px: Option<f32>,
    /// Viewport in pixels; locked by the first positive report
    size: Option<(i32, i32)>,
    gravity: (f32, f32),
    rng: SmallRng,
    steps: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Default for Physics {
    fn default() -> Self {
        Self::new()
    }
}

impl Physics {
    pub fn new() -> Self {
        Self::with_settings(PhysicsSettings::default())
    }

    pub fn with_settings(settings: PhysicsSettings) -> Self {
        Self {
            units: UnitConverter::new(),
            registry: ElementRegistry::new(),
            world: None,
            walls: None,
            bound_request_px: None,
            size: None,
            gravity: (settings.gravity[0], settings.gravity[1]),
            rng: SmallRng::seed_from_u64(settings.seed),
            steps: 0,
            perf_enabled: false,
            perf_stats: PerfStats::default(),
            settings,
        }
    }

    pub fn settings(&self) -> &PhysicsSettings {
        &self.settings
    }

    // === UNITS ===

    pub fn units(&self) -> &UnitConverter {
        &self.units
    }

    /// Configure the converter from the host display density.
    ///
    /// The scale is fixed once the world exists; bodies live in the meter
    /// space they were built in. `restart` unlocks it.
    pub fn set_density(&mut self, density: f32) {
        settings::set_density(self, density);
    }

    pub fn set_pixels_per_meter(&mut self, pixels_per_meter: f32) {
        settings::set_pixels_per_meter(self, pixels_per_meter);
    }

    pub fn density(&self) -> f32 {
        self.units.density()
    }

    pub fn pixels_per_meter(&self) -> f32 {
        self.units.pixels_per_meter()
    }

    pub fn meters_to_pixels(&self, m: f32) -> f32 {
        self.units.meters_to_pixels(m)
    }

    pub fn pixels_to_meters(&self, px: f32) -> f32 {
        self.units.pixels_to_meters(px)
    }

    // === REGISTRY ===

    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ElementRegistry {
        &mut self.registry
    }

    // === LIFECYCLE ===

    /// Report the viewport size in pixels.
    ///
    /// The first positive size wins; later reports are ignored so the world
    /// and its walls keep the geometry they were built with.
    pub fn set_size(&mut self, width: i32, height: i32) {
        init::set_size(self, width, height);
    }

    pub fn size(&self) -> Option<(i32, i32)> {
        self.size
    }

    /// Build one body per record, in index order. Returns false (and logs)
    /// when a precondition is missing or the world already exists.
    pub fn create_world(&mut self, on_body_created: impl FnMut(BodyHandle, usize)) -> bool {
        tolerate("create_world", self.try_create_world(on_body_created)).is_some()
    }

    /// Like `create_world`, returning the number of bodies created
    pub fn try_create_world(
        &mut self,
        on_body_created: impl FnMut(BodyHandle, usize),
    ) -> PhysicsResult<usize> {
        init::create_world(self, on_body_created)
    }

    pub fn is_created(&self) -> bool {
        self.world.is_some()
    }

    /// Drop the world, its walls and every record so a new layout session
    /// can start. Gravity and the bound request survive.
    pub fn restart(&mut self) {
        init::restart(self);
    }

    // === STEPPING ===

    /// Advance one fixed timestep and refresh every record. No-op before
    /// the world exists.
    pub fn step(&mut self) {
        tolerate("step", self.try_step());
    }

    pub fn try_step(&mut self) -> PhysicsResult<()> {
        step::step(self)
    }

    /// Number of completed steps in this session
    pub fn steps(&self) -> u64 {
        self.steps
    }

    // === WORLD MUTATORS ===

    /// Takes effect on the next step; remembered if the world is not built yet
    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    pub fn gravity(&self) -> (f32, f32) {
        self.gravity
    }

    /// Kick every element body in a random direction
    pub fn give_random_impulse(&mut self) {
        tolerate("give_random_impulse", self.try_give_random_impulse());
    }

    /// Returns how many bodies received an impulse
    pub fn try_give_random_impulse(&mut self) -> PhysicsResult<usize> {
        impulse::give_random_impulse(self)
    }

    // === BOUNDS ===

    /// Positive thickness (px) builds or replaces the wall frame;
    /// `None` or a non-positive value removes it.
    pub fn set_bounds_size(&mut self, thickness_px: Option<f32>) {
        bounds::set_bounds_size(self, thickness_px);
    }

    pub fn has_bounds(&self) -> bool {
        self.walls.is_some()
    }

    pub fn bounds(&self) -> Option<&BoundaryWalls> {
        self.walls.as_ref()
    }

    // === QUERIES ===

    /// Center of record `index` in pixels plus its rotation in radians
    pub fn position_px(&self, index: usize) -> Option<(f32, f32, f32)> {
        let record = self.registry.get(index)?;
        Some((
            self.units.meters_to_pixels(record.x),
            self.units.meters_to_pixels(record.y),
            record.rotation,
        ))
    }

    pub fn world(&self) -> Option<&BodyWorld> {
        self.world.as_ref()
    }

    /// Every body in the world, walls included
    pub fn body_count(&self) -> usize {
        self.world.as_ref().map_or(0, |w| w.body_count())
    }

    // === PERF ===

    /// Enable or disable per-step timing (adds a clock read per step)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    pub fn perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }
}

/// Swallow race-tolerated failures, keep everything else visible in logs
fn tolerate<T>(operation: &'static str, result: PhysicsResult<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e @ PhysicsError::PreconditionNotMet(_)) => {
            debug!(operation, reason = %e, "skipped");
            None
        }
        Err(e) => {
            warn!(operation, error = %e, "rejected");
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
