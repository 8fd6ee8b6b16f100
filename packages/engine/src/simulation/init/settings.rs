use tracing::debug;

use super::perf_stats::PerfStats;
use super::Physics;

pub(super) fn set_density(physics: &mut Physics, density: f32) {
    if physics.world.is_some() {
        debug!(density, current = physics.units.density(), "scale is fixed while the world exists");
        return;
    }
    physics.units.set_density(density, physics.settings.dp_per_meter);
}

pub(super) fn set_pixels_per_meter(physics: &mut Physics, pixels_per_meter: f32) {
    if physics.world.is_some() {
        debug!(
            pixels_per_meter,
            current = physics.units.pixels_per_meter(),
            "scale is fixed while the world exists"
        );
        return;
    }
    physics.units.set_pixels_per_meter(pixels_per_meter);
}

pub(super) fn set_gravity(physics: &mut Physics, x: f32, y: f32) {
    if !(x.is_finite() && y.is_finite()) {
        debug!(x, y, "non-finite gravity ignored");
        return;
    }
    physics.gravity = (x, y);
    // Resting bodies are asleep and would ignore the new field otherwise.
    if let Some(world) = physics.world.as_mut() {
        world.wake_all();
    }
}

pub(super) fn enable_perf_metrics(physics: &mut Physics, enabled: bool) {
    physics.perf_enabled = enabled;
    if !enabled {
        physics.perf_stats = PerfStats::default();
    }
}
