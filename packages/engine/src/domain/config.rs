//! Per-element physics material and shape
//!
//! `PhysicsConfig` is a plain `Copy` value. Variants are derived with the
//! `with_*` builders, which return a new config and leave the source alone,
//! so a shared default can be reused across elements safely.
//!
//! Configs deserialized from host JSON skip the builders; `sanitized` brings
//! any config back into the solver's valid range before a body is built.

use serde::{Deserialize, Serialize};

/// Smallest half extent (meters) a collider may get; unmeasured elements
/// would otherwise produce zero-area bodies with infinite inverse mass.
pub const MIN_HALF_EXTENT: f32 = 0.01;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PhysicsShape {
    #[default]
    Rectangle,
    Circle,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicsConfig {
    pub shape: PhysicsShape,
    pub density: f32,
    pub friction: f32,
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            shape: PhysicsShape::Rectangle,
            density: 1.0,
            friction: 0.3,
            restitution: 0.5,
        }
    }
}

impl PhysicsConfig {
    #[must_use]
    pub fn with_shape(self, shape: PhysicsShape) -> Self {
        Self { shape, ..self }
    }

    /// Non-positive or non-finite densities fall back to the default
    #[must_use]
    pub fn with_density(self, density: f32) -> Self {
        Self { density, ..self }.sanitized()
    }

    #[must_use]
    pub fn with_friction(self, friction: f32) -> Self {
        Self { friction, ..self }.sanitized()
    }

    #[must_use]
    pub fn with_restitution(self, restitution: f32) -> Self {
        Self { restitution, ..self }.sanitized()
    }

    /// Density > 0, friction >= 0, restitution in `[0, 1]`; non-finite
    /// values are replaced by the defaults.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let fallback = Self::default();
        let density = if self.density.is_finite() && self.density > 0.0 {
            self.density
        } else {
            fallback.density
        };
        Self {
            shape: self.shape,
            density,
            friction: finite_or(self.friction, fallback.friction).max(0.0),
            restitution: finite_or(self.restitution, fallback.restitution).clamp(0.0, 1.0),
        }
    }

    /// Collider half extents in meters for an element of the given size.
    ///
    /// Circles use half of the smaller side so the body fits inside the
    /// element box; both components are then the radius.
    pub fn half_extents(&self, width_m: f32, height_m: f32) -> (f32, f32) {
        let hw = (width_m * 0.5).max(MIN_HALF_EXTENT);
        let hh = (height_m * 0.5).max(MIN_HALF_EXTENT);
        match self.shape {
            PhysicsShape::Rectangle => (hw, hh),
            PhysicsShape::Circle => {
                let r = hw.min(hh);
                (r, r)
            }
        }
    }
}

#[inline]
fn finite_or(v: f32, fallback: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        fallback
    }
}
