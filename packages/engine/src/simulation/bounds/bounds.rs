use tracing::{debug, warn};

use crate::systems::bounds::{BoundaryWalls, WallMaterial};

use super::Physics;

pub(super) fn set_bounds_size(physics: &mut Physics, thickness_px: Option<f32>) {
    match thickness_px.filter(|t| t.is_finite() && *t > 0.0) {
        Some(thickness) => {
            physics.bound_request_px = Some(thickness);
            if physics.world.is_some() {
                rebuild_walls(physics, thickness);
            } else {
                debug!(thickness, "bounds deferred until the world exists");
            }
        }
        None => {
            physics.bound_request_px = None;
            remove_walls(physics);
        }
    }
}

/// Replace the current frame (if any) with one of the given thickness
pub(super) fn rebuild_walls(physics: &mut Physics, thickness: f32) {
    let (Some(world), Some((w, h))) = (physics.world.as_mut(), physics.size) else {
        return;
    };

    if let Some(old) = physics.walls.take() {
        old.remove(world);
    }

    let material = WallMaterial {
        friction: physics.settings.wall_friction,
        restitution: physics.settings.wall_restitution,
    };
    match BoundaryWalls::build(world, &physics.units, w as f32, h as f32, thickness, material) {
        Ok(walls) => physics.walls = Some(walls),
        Err(e) => warn!(error = %e, "could not build boundary walls"),
    }
}

fn remove_walls(physics: &mut Physics) {
    let Some(walls) = physics.walls.take() else {
        return;
    };
    if let Some(world) = physics.world.as_mut() {
        walls.remove(world);
    }
    debug!("boundary walls removed");
}
