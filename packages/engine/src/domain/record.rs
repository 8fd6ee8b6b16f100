use crate::core::error::{PhysicsError, PhysicsResult};
use crate::systems::body_world::BodyHandle;

use super::config::PhysicsConfig;

/// Physics state of one tracked UI element
///
/// Positions come in two flavours: `initial_x/initial_y` are what the host
/// declared (pixels, before any conversion) while `x/y` are the simulation's
/// authoritative center in meters, refreshed on every step.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementPhysicsRecord {
    pub config: PhysicsConfig,
    pub initial_x: f32,
    pub initial_y: f32,
    /// Last measured size in pixels
    pub width: i32,
    pub height: i32,
    /// Center in meters
    pub x: f32,
    pub y: f32,
    /// Radians
    pub rotation: f32,
    body: Option<BodyHandle>,
}

impl Default for ElementPhysicsRecord {
    fn default() -> Self {
        Self::new(PhysicsConfig::default(), 0.0, 0.0)
    }
}

impl ElementPhysicsRecord {
    /// Out-of-range materials are sanitized; a non-finite initial position
    /// becomes 0.
    pub fn new(config: PhysicsConfig, initial_x: f32, initial_y: f32) -> Self {
        Self {
            config: config.sanitized(),
            initial_x: if initial_x.is_finite() { initial_x } else { 0.0 },
            initial_y: if initial_y.is_finite() { initial_y } else { 0.0 },
            width: 0,
            height: 0,
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            body: None,
        }
    }

    pub fn body(&self) -> Option<BodyHandle> {
        self.body
    }

    /// Attach the simulation body. Allowed exactly once per session.
    pub fn bind_body(&mut self, handle: BodyHandle) -> PhysicsResult<()> {
        if self.body.is_some() {
            return Err(PhysicsError::BodyAlreadyBound);
        }
        self.body = Some(handle);
        Ok(())
    }

    pub fn set_size(&mut self, width: i32, height: i32) {
        self.width = width.max(0);
        self.height = height.max(0);
    }

    #[inline]
    pub fn sync_from(&mut self, x: f32, y: f32, rotation: f32) {
        self.x = x;
        self.y = y;
        self.rotation = rotation;
    }
}
