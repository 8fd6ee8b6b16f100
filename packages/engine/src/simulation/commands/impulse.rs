use std::f32::consts::TAU;

use rand::Rng;

use crate::core::error::{PhysicsResult, Precondition};

use super::Physics;

/// Give each element body a velocity change of random direction and a
/// magnitude in `[0, impulse_speed_max]`, scaled by mass so light and heavy
/// elements move alike. Walls are fixed and never touched.
pub(super) fn give_random_impulse(physics: &mut Physics) -> PhysicsResult<usize> {
    let Some(world) = physics.world.as_mut() else {
        return Err(Precondition::WorldNotCreated.into());
    };

    let speed_max = physics.settings.impulse_speed_max.max(0.0);
    let mut kicked = 0;

    for record in physics.registry.iter() {
        let Some(handle) = record.body() else {
            continue;
        };
        if !world.is_dynamic(handle) {
            continue;
        }
        let mass = world.mass(handle).unwrap_or(0.0);
        let angle = physics.rng.gen_range(0.0..TAU);
        let speed = physics.rng.gen_range(0.0..=speed_max);
        let (sin, cos) = angle.sin_cos();

        world.apply_impulse(handle, (cos * speed * mass, sin * speed * mass));
        kicked += 1;
    }

    Ok(kicked)
}
