//! Pixel <-> meter conversion
//!
//! Both factors start at the unset sentinel (0.0). Conversions performed
//! before the host reports its display density yield 0.0 instead of dividing
//! by zero; the `try_*` variants report `InvalidUnitConversion`.

use super::error::{PhysicsError, PhysicsResult};

/// Sentinel for "not configured yet"
pub const UNSET: f32 = 0.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitConverter {
    pixels_per_meter: f32,
    density: f32,
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitConverter {
    pub fn new() -> Self {
        Self {
            pixels_per_meter: UNSET,
            density: UNSET,
        }
    }

    /// Configure from the host display density.
    ///
    /// One meter spans `dp_per_meter` density-independent pixels, so
    /// `pixels_per_meter = dp_per_meter * density`.
    pub fn set_density(&mut self, density: f32, dp_per_meter: f32) {
        if !valid_factor(density) || !valid_factor(dp_per_meter) {
            return;
        }
        self.density = density;
        self.pixels_per_meter = dp_per_meter * density;
    }

    /// Override the scale directly (hosts without a density notion)
    pub fn set_pixels_per_meter(&mut self, pixels_per_meter: f32) {
        if valid_factor(pixels_per_meter) {
            self.pixels_per_meter = pixels_per_meter;
            if self.density == UNSET {
                self.density = 1.0;
            }
        }
    }

    pub fn pixels_per_meter(&self) -> f32 {
        self.pixels_per_meter
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    pub fn is_ready(&self) -> bool {
        self.pixels_per_meter > 0.0 && self.density > 0.0
    }

    #[inline]
    pub fn meters_to_pixels(&self, m: f32) -> f32 {
        self.try_meters_to_pixels(m).unwrap_or(0.0)
    }

    #[inline]
    pub fn pixels_to_meters(&self, px: f32) -> f32 {
        self.try_pixels_to_meters(px).unwrap_or(0.0)
    }

    pub fn try_meters_to_pixels(&self, m: f32) -> PhysicsResult<f32> {
        if self.pixels_per_meter <= 0.0 {
            return Err(PhysicsError::InvalidUnitConversion);
        }
        Ok(m * self.pixels_per_meter)
    }

    pub fn try_pixels_to_meters(&self, px: f32) -> PhysicsResult<f32> {
        if self.pixels_per_meter <= 0.0 {
            return Err(PhysicsError::InvalidUnitConversion);
        }
        Ok(px / self.pixels_per_meter)
    }

    /// Density-independent pixels to physical pixels (0 when unset)
    pub fn dp_to_px(&self, dp: f32) -> f32 {
        dp * self.density
    }
}

#[inline]
fn valid_factor(v: f32) -> bool {
    v.is_finite() && v > 0.0
}
