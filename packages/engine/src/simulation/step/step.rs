#[cfg(feature = "parallel")]
use rayon::prelude::*;

use rapier2d::prelude::RigidBodySet;

use crate::core::error::{PhysicsResult, Precondition};
use crate::domain::record::ElementPhysicsRecord;
use crate::systems::body_world::read_transform;

use super::{PerfTimer, Physics};

pub(super) fn step(physics: &mut Physics) -> PhysicsResult<()> {
    let Some(world) = physics.world.as_mut() else {
        return Err(Precondition::WorldNotCreated.into());
    };

    let timer = physics.perf_enabled.then(PerfTimer::start);

    world.step(physics.gravity, physics.settings.dt());
    sync_records(world.bodies(), physics.registry.as_mut_slice());
    physics.steps = physics.steps.saturating_add(1);

    if let Some(timer) = timer {
        physics.perf_stats.step_ms = timer.elapsed_ms();
        physics.perf_stats.steps = physics.steps.min(u32::MAX as u64) as u32;
        physics.perf_stats.bodies = world.body_count() as u32;
        physics.perf_stats.records = physics.registry.len() as u32;
    }
    Ok(())
}

/// Copy body transforms into their records (meters / radians)
fn sync_records(bodies: &RigidBodySet, records: &mut [ElementPhysicsRecord]) {
    #[cfg(feature = "parallel")]
    {
        records.par_iter_mut().for_each(|record| sync_record(bodies, record));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for record in records.iter_mut() {
            sync_record(bodies, record);
        }
    }
}

#[inline]
fn sync_record(bodies: &RigidBodySet, record: &mut ElementPhysicsRecord) {
    let Some(handle) = record.body() else {
        return;
    };
    if let Some(t) = read_transform(bodies, handle) {
        record.sync_from(t.x, t.y, t.rotation);
    }
}
