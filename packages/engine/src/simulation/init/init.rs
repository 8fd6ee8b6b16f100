use tracing::{debug, info};

use crate::core::error::{PhysicsError, PhysicsResult, Precondition};
use crate::systems::body_world::{BodyHandle, BodyWorld};

use super::bounds::rebuild_walls;
use super::perf_stats::PerfStats;
use super::Physics;

pub(super) fn set_size(physics: &mut Physics, width: i32, height: i32) {
    if width <= 0 || height <= 0 {
        debug!(width, height, "ignoring non-positive viewport size");
        return;
    }
    if physics.world.is_some() || physics.size.is_some() {
        if physics.size != Some((width, height)) {
            debug!(width, height, locked = ?physics.size, "viewport size already fixed for this session");
        }
        return;
    }
    physics.size = Some((width, height));
}

pub(super) fn create_world(
    physics: &mut Physics,
    mut on_body_created: impl FnMut(BodyHandle, usize),
) -> PhysicsResult<usize> {
    if physics.world.is_some() {
        return Err(Precondition::WorldAlreadyCreated.into());
    }
    if !physics.units.is_ready() {
        return Err(Precondition::UnitsUnset.into());
    }
    if physics.registry.is_empty() {
        return Err(Precondition::EmptyRegistry.into());
    }
    if physics.size.is_none() {
        return Err(Precondition::SizeUnknown.into());
    }

    // Bindings are all-or-nothing: refuse before any body exists.
    if physics.registry.iter().any(|r| r.body().is_some()) {
        return Err(PhysicsError::BodyAlreadyBound);
    }

    let units = physics.units;
    let mut world = BodyWorld::new();

    for (index, record) in physics.registry.iter_mut().enumerate() {
        let x = units.pixels_to_meters(record.initial_x);
        let y = units.pixels_to_meters(record.initial_y);
        let half = record.config.half_extents(
            units.pixels_to_meters(record.width as f32),
            units.pixels_to_meters(record.height as f32),
        );

        let handle = world.create_dynamic(x, y, half, &record.config);
        record.bind_body(handle)?;
        record.sync_from(x, y, 0.0);
        on_body_created(handle, index);
    }

    let count = physics.registry.len();
    physics.registry.seal();
    physics.world = Some(world);
    info!(bodies = count, size = ?physics.size, "physics world created");

    if let Some(thickness) = physics.bound_request_px {
        rebuild_walls(physics, thickness);
    }

    Ok(count)
}

pub(super) fn restart(physics: &mut Physics) {
    if let (Some(walls), Some(world)) = (physics.walls.take(), physics.world.as_mut()) {
        walls.remove(world);
    }
    physics.walls = None;
    physics.world = None;
    physics.registry.unseal_and_clear();
    physics.size = None;
    physics.steps = 0;
    physics.perf_stats = PerfStats::default();
    info!("physics session restarted");
}
