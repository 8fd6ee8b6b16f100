//! Layout adapter - drives the physics bridge from a host layout pass
//!
//! The host calls, in any order and as often as it likes:
//! - `set_density` once the display density is known,
//! - `measure` on every layout pass with the children's measured sizes,
//! - `tick` on every animation frame,
//! - `placements` to position its children.
//!
//! The first `measure` fixes the viewport size and the element list; the
//! world is created as soon as every input is present. Measurement and
//! ticking both take `&mut self`, so a measure pass always finishes its size
//! updates before the next step reads them, and vice versa.

mod facade;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::bound::RectPx;
use crate::domain::config::PhysicsConfig;
use crate::domain::record::ElementPhysicsRecord;
use crate::domain::settings::PhysicsSettings;
use crate::simulation::{FixedTicker, Physics};

pub use facade::PhysicsLayout;

/// Gravity restored by `reset_gravity`, +y pointing down the screen
pub const DEFAULT_GRAVITY: (f32, f32) = (0.0, 9.8);

/// One child as reported by the host measure pass
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChildMeasurement {
    /// `None` for children that did not opt into physics; they still get a
    /// body with the default material so indices stay aligned.
    pub physics: Option<PhysicsConfig>,
    pub initial_x: f32,
    pub initial_y: f32,
    pub width: i32,
    pub height: i32,
}

impl ChildMeasurement {
    pub fn sized(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_physics(config: PhysicsConfig, initial_x: f32, initial_y: f32) -> Self {
        Self {
            physics: Some(config),
            initial_x,
            initial_y,
            ..Self::default()
        }
    }
}

/// Where the host should draw a child: top-left in pixels, rotation in degrees
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub rotation_deg: f32,
}

pub struct PhysicsLayoutCore {
    physics: Physics,
    ticker: FixedTicker,
    /// Set after the first measure pass; the element list is fixed from then on
    initialized: bool,
    bound_size_dp: Option<f32>,
}

impl Default for PhysicsLayoutCore {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsLayoutCore {
    pub fn new() -> Self {
        Self::with_settings(PhysicsSettings::default())
    }

    pub fn with_settings(settings: PhysicsSettings) -> Self {
        Self {
            ticker: FixedTicker::new(settings.timestep_ms, settings.max_steps_per_tick),
            bound_size_dp: settings.bound_size_dp,
            physics: Physics::with_settings(settings),
            initialized: false,
        }
    }

    pub fn physics(&self) -> &Physics {
        &self.physics
    }

    pub fn physics_mut(&mut self) -> &mut Physics {
        &mut self.physics
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Ignored once the world exists; `restart` to change the scale
    pub fn set_density(&mut self, density: f32) {
        if self.physics.is_created() {
            debug!(density, "display density is fixed for this session");
            return;
        }
        self.physics.set_density(density);
        // The bound thickness is in dp and could not be converted before.
        self.apply_bound_size();
        self.ensure_world();
    }

    /// Feed one measure pass. Returns how many children were rejected
    /// because they appeared after the element list was fixed.
    pub fn measure(&mut self, max_width: i32, max_height: i32, children: &[ChildMeasurement]) -> usize {
        // Physics keeps the first positive size; an early 0x0 pass must not
        // stop a later real size from getting through.
        if !self.physics.is_created() {
            self.physics.set_size(max_width, max_height);
        }

        let mut rejected = 0;
        for (index, child) in children.iter().enumerate() {
            if index >= self.physics.registry().len() {
                if self.initialized {
                    rejected += 1;
                    continue;
                }
                let record = ElementPhysicsRecord::new(
                    child.physics.unwrap_or_default(),
                    child.initial_x,
                    child.initial_y,
                );
                if self.physics.registry_mut().push(record).is_err() {
                    rejected += 1;
                    continue;
                }
            }
            if let Some(record) = self.physics.registry_mut().get_mut(index) {
                record.set_size(child.width, child.height);
            }
        }

        if rejected > 0 {
            warn!(
                rejected,
                registered = self.physics.registry().len(),
                "children added after the layout was initialized are not simulated"
            );
        }

        self.initialized = true;
        self.ensure_world();
        rejected
    }

    /// Run the fixed steps owed for `elapsed_ms` of host time
    pub fn tick(&mut self, elapsed_ms: f32) -> u32 {
        self.ensure_world();
        if !self.physics.is_created() {
            self.ticker.reset();
            return 0;
        }
        let due = self.ticker.advance(elapsed_ms);
        for _ in 0..due {
            self.physics.step();
        }
        due
    }

    /// Placement per registry index, in index order
    pub fn placements(&self) -> Vec<Placement> {
        let units = self.physics.units();
        self.physics
            .registry()
            .iter()
            .map(|r| Placement {
                x: units.meters_to_pixels(r.x).round() as i32 - r.width / 2,
                y: units.meters_to_pixels(r.y).round() as i32 - r.height / 2,
                rotation_deg: r.rotation.to_degrees(),
            })
            .collect()
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.physics.set_gravity(x, y);
    }

    pub fn reset_gravity(&mut self) {
        self.physics.set_gravity(DEFAULT_GRAVITY.0, DEFAULT_GRAVITY.1);
    }

    pub fn give_random_impulse(&mut self) {
        self.physics.give_random_impulse();
    }

    /// Wall thickness in dp; `None` or non-positive removes the walls
    pub fn set_bound_size_dp(&mut self, size_dp: Option<f32>) {
        self.bound_size_dp = size_dp;
        self.apply_bound_size();
    }

    pub fn bound_size_dp(&self) -> Option<f32> {
        self.bound_size_dp
    }

    pub fn has_bounds(&self) -> bool {
        self.physics.has_bounds()
    }

    /// Wall rectangles to paint, empty when there are no walls
    pub fn bound_paint_rects(&self) -> Vec<RectPx> {
        self.physics
            .bounds()
            .map(|walls| walls.paint_rects().to_vec())
            .unwrap_or_default()
    }

    /// Forget the element list and world; the next measure starts over
    pub fn restart(&mut self) {
        self.physics.restart();
        self.ticker.reset();
        self.initialized = false;
    }

    fn apply_bound_size(&mut self) {
        match self.bound_size_dp.filter(|s| *s > 0.0) {
            Some(dp) => {
                if self.physics.density() <= 0.0 {
                    debug!(dp, "bound size waits for display density");
                    return;
                }
                let px = self.physics.units().dp_to_px(dp);
                self.physics.set_bounds_size(Some(px));
            }
            None => self.physics.set_bounds_size(None),
        }
    }

    fn ensure_world(&mut self) {
        if !self.initialized || self.physics.is_created() {
            return;
        }
        if self.physics.create_world(|_, _| {}) && self.physics.settings().give_initial_random_impulse {
            self.physics.give_random_impulse();
        }
    }
}
