use approx::assert_abs_diff_eq;

use super::*;
use crate::core::error::Precondition;
use crate::domain::bound::Side;
use crate::domain::config::{PhysicsConfig, PhysicsShape};
use crate::domain::record::ElementPhysicsRecord;

/// Bridge with pixels-per-meter = 10, a 300x500 viewport and one record per
/// `(initial_x, initial_y, width, height)` tuple.
fn bridge(records: &[(f32, f32, i32, i32)]) -> Physics {
    let mut physics = Physics::new();
    physics.set_pixels_per_meter(10.0);
    physics.set_size(300, 500);
    for &(x, y, w, h) in records {
        let mut record = ElementPhysicsRecord::new(PhysicsConfig::default(), x, y);
        record.set_size(w, h);
        physics.registry_mut().push(record).unwrap();
    }
    physics
}

fn three_records() -> Physics {
    bridge(&[
        (60.0, 100.0, 40, 40),
        (150.0, 200.0, 50, 50),
        (240.0, 300.0, 60, 30),
    ])
}

#[test]
fn create_world_binds_one_body_per_record_in_order() {
    let mut physics = three_records();
    let mut seen = Vec::new();

    assert!(physics.create_world(|handle, i| seen.push((handle, i))));

    let indices: Vec<usize> = seen.iter().map(|(_, i)| *i).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    for (handle, i) in &seen {
        assert_eq!(physics.registry().get(*i).unwrap().body(), Some(*handle));
    }
    assert_eq!(physics.body_count(), 3);
}

#[test]
fn records_start_at_their_initial_position_in_meters() {
    let mut physics = three_records();
    physics.create_world(|_, _| {});

    let r = physics.registry().get(1).unwrap();
    assert_abs_diff_eq!(r.x, 15.0, epsilon = 1e-6);
    assert_abs_diff_eq!(r.y, 20.0, epsilon = 1e-6);

    let (px, py, rot) = physics.position_px(1).unwrap();
    assert_abs_diff_eq!(px, 150.0, epsilon = 1e-4);
    assert_abs_diff_eq!(py, 200.0, epsilon = 1e-4);
    assert_eq!(rot, 0.0);
}

#[test]
fn step_updates_every_record() {
    let mut physics = three_records();
    physics.create_world(|_, _| {});
    let before: Vec<f32> = physics.registry().iter().map(|r| r.y).collect();

    physics.step();

    assert_eq!(physics.steps(), 1);
    for (r, y0) in physics.registry().iter().zip(before) {
        assert!(r.y > y0, "gravity should pull every record down");
        assert!(r.rotation.is_finite());
    }
}

#[test]
fn create_world_twice_does_not_duplicate_bodies() {
    let mut physics = three_records();
    assert!(physics.create_world(|_, _| {}));
    let count = physics.body_count();

    let mut called = false;
    assert!(!physics.create_world(|_, _| called = true));
    assert!(!called);
    assert_eq!(physics.body_count(), count);
    assert_eq!(
        physics.try_create_world(|_, _| {}),
        Err(PhysicsError::PreconditionNotMet(Precondition::WorldAlreadyCreated))
    );
}

#[test]
fn create_world_waits_for_every_precondition() {
    let mut no_units = Physics::new();
    no_units.set_size(300, 500);
    no_units
        .registry_mut()
        .push(ElementPhysicsRecord::default())
        .unwrap();
    assert_eq!(
        no_units.try_create_world(|_, _| {}),
        Err(PhysicsError::PreconditionNotMet(Precondition::UnitsUnset))
    );

    let mut empty = bridge(&[]);
    assert_eq!(
        empty.try_create_world(|_, _| {}),
        Err(PhysicsError::PreconditionNotMet(Precondition::EmptyRegistry))
    );

    let mut no_size = Physics::new();
    no_size.set_pixels_per_meter(10.0);
    no_size
        .registry_mut()
        .push(ElementPhysicsRecord::default())
        .unwrap();
    assert!(!no_size.create_world(|_, _| {}));
    assert_eq!(
        no_size.try_create_world(|_, _| {}),
        Err(PhysicsError::PreconditionNotMet(Precondition::SizeUnknown))
    );

    // Inputs arrive late: the same bridge succeeds once the size shows up.
    no_size.set_size(300, 500);
    assert!(no_size.create_world(|_, _| {}));
}

#[test]
fn step_before_create_world_is_a_no_op() {
    let mut physics = three_records();
    let before: Vec<ElementPhysicsRecord> = physics.registry().iter().cloned().collect();

    physics.step();
    physics.give_random_impulse();

    assert_eq!(physics.steps(), 0);
    assert_eq!(
        physics.try_step(),
        Err(PhysicsError::PreconditionNotMet(Precondition::WorldNotCreated))
    );
    let after: Vec<ElementPhysicsRecord> = physics.registry().iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn first_positive_size_wins() {
    let mut physics = Physics::new();
    physics.set_size(0, 0);
    assert_eq!(physics.size(), None);

    physics.set_size(300, 500);
    physics.set_size(800, 600);
    assert_eq!(physics.size(), Some((300, 500)));
}

#[test]
fn no_drift_without_gravity_or_impulse() {
    let mut physics = bridge(&[(150.0, 250.0, 40, 40)]);
    physics.set_gravity(0.0, 0.0);
    physics.create_world(|_, _| {});
    let start = physics.registry().get(0).unwrap().clone();

    for _ in 0..120 {
        physics.step();
    }

    let end = physics.registry().get(0).unwrap();
    assert_abs_diff_eq!(end.x, start.x, epsilon = 1e-6);
    assert_abs_diff_eq!(end.y, start.y, epsilon = 1e-6);
    assert_abs_diff_eq!(end.rotation, start.rotation, epsilon = 1e-6);
}

#[test]
fn free_fall_is_monotonic_without_bounds() {
    let mut physics = bridge(&[(150.0, 50.0, 40, 40)]);
    physics.set_gravity(0.0, 9.8);
    physics.create_world(|_, _| {});

    let mut last = physics.registry().get(0).unwrap().y;
    for _ in 0..200 {
        physics.step();
        let y = physics.registry().get(0).unwrap().y;
        assert!(y >= last, "y went backwards: {} -> {}", last, y);
        last = y;
    }
    // 3.2 s of free fall covers far more than the 50 m viewport.
    assert!(physics.meters_to_pixels(last) > 500.0);
}

#[test]
fn walls_stop_a_falling_body() {
    let mut physics = bridge(&[(150.0, 100.0, 40, 40)]);
    physics.set_bounds_size(Some(20.0));
    physics.create_world(|_, _| {});
    assert!(physics.has_bounds());

    for _ in 0..400 {
        physics.step();
    }

    let (_, y_px, _) = physics.position_px(0).unwrap();
    // Floor surface is at 480 px, the box is 40 px tall.
    assert!(y_px <= 461.0, "body sank into the floor: {}", y_px);
    assert!(y_px >= 440.0, "body never reached the floor: {}", y_px);
}

#[test]
fn bounds_frame_the_viewport() {
    let mut physics = three_records();
    physics.create_world(|_, _| {});
    physics.set_bounds_size(Some(20.0));

    let walls = physics.bounds().unwrap();
    assert_eq!(walls.walls().len(), 4);
    assert_eq!(walls.interior_px(), (260.0, 460.0));
    assert_eq!(physics.world().unwrap().fixed_count(), 4);
    assert_eq!(walls.wall(Side::Bottom).rect_px().y, 480.0);
}

#[test]
fn bounds_can_be_replaced_and_removed() {
    let mut physics = three_records();
    physics.create_world(|_, _| {});

    physics.set_bounds_size(Some(20.0));
    physics.set_bounds_size(Some(10.0));
    assert_eq!(physics.world().unwrap().fixed_count(), 4);
    assert_eq!(physics.bounds().unwrap().thickness_px(), 10.0);

    physics.set_bounds_size(Some(0.0));
    assert!(!physics.has_bounds());
    assert_eq!(physics.world().unwrap().fixed_count(), 0);
    assert_eq!(physics.body_count(), 3);

    physics.set_bounds_size(Some(15.0));
    physics.set_bounds_size(None);
    assert!(!physics.has_bounds());
    assert_eq!(physics.world().unwrap().fixed_count(), 0);
}

#[test]
fn bounds_requested_early_are_built_with_the_world() {
    let mut physics = three_records();
    physics.set_bounds_size(Some(20.0));
    assert!(!physics.has_bounds());

    physics.create_world(|_, _| {});
    assert!(physics.has_bounds());
    assert_eq!(physics.body_count(), 7);
}

#[test]
fn gravity_set_before_creation_is_kept() {
    let mut physics = bridge(&[(150.0, 250.0, 40, 40)]);
    physics.set_gravity(-3.0, 0.0);
    physics.create_world(|_, _| {});
    assert_eq!(physics.gravity(), (-3.0, 0.0));

    let x0 = physics.registry().get(0).unwrap().x;
    physics.step();
    physics.step();
    assert!(physics.registry().get(0).unwrap().x < x0);
}

#[test]
fn non_finite_gravity_is_ignored() {
    let mut physics = Physics::new();
    physics.set_gravity(f32::NAN, 1.0);
    assert_eq!(physics.gravity(), (0.0, 9.8));
}

#[test]
fn random_impulse_moves_bodies() {
    let mut physics = three_records();
    physics.set_gravity(0.0, 0.0);
    physics.create_world(|_, _| {});
    let before: Vec<(f32, f32)> = physics.registry().iter().map(|r| (r.x, r.y)).collect();

    assert_eq!(physics.try_give_random_impulse(), Ok(3));
    for _ in 0..5 {
        physics.step();
    }

    let moved = physics
        .registry()
        .iter()
        .zip(before)
        .filter(|(r, (x, y))| (r.x - x).abs() > 1e-4 || (r.y - y).abs() > 1e-4)
        .count();
    assert!(moved > 0);
}

#[test]
fn random_impulse_skips_walls() {
    let mut physics = three_records();
    physics.set_bounds_size(Some(20.0));
    physics.create_world(|_, _| {});
    assert_eq!(physics.try_give_random_impulse(), Ok(3));
}

#[test]
fn registry_is_sealed_after_creation() {
    let mut physics = three_records();
    physics.create_world(|_, _| {});

    let res = physics.registry_mut().push(ElementPhysicsRecord::default());
    assert!(matches!(res, Err(PhysicsError::StructuralViolation { .. })));
    assert_eq!(physics.registry().len(), 3);

    // Size refreshes are still allowed.
    assert!(physics.registry_mut().update_size(0, 10, 10).is_ok());
}

#[test]
fn circle_records_become_ball_colliders() {
    let mut physics = Physics::new();
    physics.set_pixels_per_meter(10.0);
    physics.set_size(300, 500);
    let mut record = ElementPhysicsRecord::new(
        PhysicsConfig::default().with_shape(PhysicsShape::Circle),
        100.0,
        100.0,
    );
    record.set_size(50, 50);
    physics.registry_mut().push(record).unwrap();
    physics.create_world(|_, _| {});

    let handle = physics.registry().get(0).unwrap().body().unwrap();
    let world = physics.world().unwrap();
    assert_eq!(world.box_half_extents(handle), None);
    assert!(world.is_dynamic(handle));
}

#[test]
fn restart_allows_a_new_session() {
    let mut physics = three_records();
    physics.set_bounds_size(Some(20.0));
    physics.create_world(|_, _| {});
    physics.step();

    physics.restart();
    assert!(!physics.is_created());
    assert!(!physics.has_bounds());
    assert!(physics.registry().is_empty());
    assert_eq!(physics.size(), None);
    assert_eq!(physics.steps(), 0);

    physics.set_size(200, 200);
    physics
        .registry_mut()
        .push(ElementPhysicsRecord::new(PhysicsConfig::default(), 100.0, 100.0))
        .unwrap();
    assert_eq!(physics.try_create_world(|_, _| {}), Ok(1));
    // The bound request survived the restart.
    assert!(physics.has_bounds());
}

#[test]
fn perf_metrics_track_steps() {
    let mut physics = three_records();
    physics.create_world(|_, _| {});
    physics.enable_perf_metrics(true);
    physics.step();
    physics.step();

    let stats = physics.perf_stats();
    assert_eq!(stats.steps(), 2);
    assert_eq!(stats.bodies(), 3);
    assert_eq!(stats.records(), 3);
    assert!(stats.step_ms() >= 0.0);

    physics.enable_perf_metrics(false);
    assert_eq!(physics.perf_stats(), PerfStats::default());
}

#[test]
fn scale_is_locked_while_the_world_exists() {
    let mut physics = three_records();
    physics.create_world(|_, _| {});

    physics.set_pixels_per_meter(20.0);
    physics.set_density(2.0);
    assert_eq!(physics.pixels_per_meter(), 10.0);
    let (px, py, _) = physics.position_px(1).unwrap();
    assert_abs_diff_eq!(px, 150.0, epsilon = 1e-4);
    assert_abs_diff_eq!(py, 200.0, epsilon = 1e-4);

    physics.restart();
    physics.set_pixels_per_meter(20.0);
    assert_eq!(physics.pixels_per_meter(), 20.0);
}

#[test]
fn already_bound_record_aborts_creation_before_any_binding() {
    let mut physics = bridge(&[(60.0, 100.0, 40, 40), (150.0, 200.0, 50, 50)]);
    let mut other = BodyWorld::new();
    let stray = other.create_dynamic(0.0, 0.0, (1.0, 1.0), &PhysicsConfig::default());
    physics.registry_mut().get_mut(1).unwrap().bind_body(stray).unwrap();

    assert_eq!(
        physics.try_create_world(|_, _| {}),
        Err(PhysicsError::BodyAlreadyBound)
    );
    assert!(!physics.is_created());
    assert_eq!(physics.registry().get(0).unwrap().body(), None);
    assert!(physics.registry_mut().push(ElementPhysicsRecord::default()).is_ok());
}
