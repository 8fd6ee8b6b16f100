use rapier2d::prelude::*;

use crate::domain::config::{PhysicsConfig, PhysicsShape, MIN_HALF_EXTENT};

use super::BodyHandle;

/// Position and rotation of a body in meters / radians
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BodyTransform {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
}

/// Owns every rapier structure needed to step a 2D world
pub struct BodyWorld {
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
}

impl Default for BodyWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyWorld {
    pub fn new() -> Self {
        Self {
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    /// Create a dynamic body centered at `(x, y)` meters.
    ///
    /// `half_extents` are in meters; for circles both components hold the radius.
    pub fn create_dynamic(
        &mut self,
        x: f32,
        y: f32,
        half_extents: (f32, f32),
        config: &PhysicsConfig,
    ) -> BodyHandle {
        let rb = RigidBodyBuilder::dynamic()
            .translation(vector![x, y])
            .build();
        let handle = self.bodies.insert(rb);

        let config = config.sanitized();
        let (hw, hh) = clamp_extents(half_extents);
        let builder = match config.shape {
            PhysicsShape::Rectangle => ColliderBuilder::cuboid(hw, hh),
            PhysicsShape::Circle => ColliderBuilder::ball(hw.min(hh)),
        };
        let collider = builder
            .density(config.density)
            .friction(config.friction)
            .restitution(config.restitution)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);

        BodyHandle(handle)
    }

    /// Create an immovable box collider (infinite mass, zero velocity)
    pub fn create_fixed(
        &mut self,
        x: f32,
        y: f32,
        half_extents: (f32, f32),
        friction: f32,
        restitution: f32,
    ) -> BodyHandle {
        let rb = RigidBodyBuilder::fixed().translation(vector![x, y]).build();
        let handle = self.bodies.insert(rb);

        let (hw, hh) = clamp_extents(half_extents);
        let collider = ColliderBuilder::cuboid(hw, hh)
            .friction(friction)
            .restitution(restitution)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);

        BodyHandle(handle)
    }

    /// Remove a body and its colliders. Returns false if it was already gone.
    pub fn remove(&mut self, handle: BodyHandle) -> bool {
        self.bodies
            .remove(
                handle.0,
                &mut self.island_manager,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true,
            )
            .is_some()
    }

    /// Advance the simulation by `dt` seconds under `gravity` (m/s²)
    pub fn step(&mut self, gravity: (f32, f32), dt: f32) {
        self.integration_parameters.dt = dt;
        self.physics_pipeline.step(
            &vector![gravity.0, gravity.1],
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    pub fn transform(&self, handle: BodyHandle) -> Option<BodyTransform> {
        read_transform(&self.bodies, handle)
    }

    pub fn apply_impulse(&mut self, handle: BodyHandle, impulse: (f32, f32)) {
        if let Some(rb) = self.bodies.get_mut(handle.0) {
            rb.apply_impulse(vector![impulse.0, impulse.1], true);
        }
    }

    pub fn mass(&self, handle: BodyHandle) -> Option<f32> {
        self.bodies.get(handle.0).map(|rb| rb.mass())
    }

    pub fn is_dynamic(&self, handle: BodyHandle) -> bool {
        self.bodies
            .get(handle.0)
            .is_some_and(|rb| rb.is_dynamic())
    }

    /// Wake every sleeping body, e.g. after gravity changed under them
    pub fn wake_all(&mut self) {
        for (_, rb) in self.bodies.iter_mut() {
            if rb.is_dynamic() {
                rb.wake_up(true);
            }
        }
    }

    /// Collider half extents of a box body (walls, rectangles)
    pub fn box_half_extents(&self, handle: BodyHandle) -> Option<(f32, f32)> {
        let rb = self.bodies.get(handle.0)?;
        let collider = self.colliders.get(*rb.colliders().first()?)?;
        let cuboid = collider.shape().as_cuboid()?;
        Some((cuboid.half_extents.x, cuboid.half_extents.y))
    }

    /// Shared view of the body set for parallel readers
    pub(crate) fn bodies(&self) -> &RigidBodySet {
        &self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn dynamic_count(&self) -> usize {
        self.bodies.iter().filter(|(_, rb)| rb.is_dynamic()).count()
    }

    pub fn fixed_count(&self) -> usize {
        self.bodies.iter().filter(|(_, rb)| rb.is_fixed()).count()
    }
}

#[inline]
fn clamp_extents((hw, hh): (f32, f32)) -> (f32, f32) {
    (hw.max(MIN_HALF_EXTENT), hh.max(MIN_HALF_EXTENT))
}

/// Read a body transform straight from a shared body set
#[inline]
pub(crate) fn read_transform(bodies: &RigidBodySet, handle: BodyHandle) -> Option<BodyTransform> {
    bodies.get(handle.0).map(|rb| {
        let t = rb.translation();
        BodyTransform {
            x: t.x,
            y: t.y,
            rotation: rb.rotation().angle(),
        }
    })
}
