use wasm_bindgen::prelude::*;

use crate::domain::settings::PhysicsSettings;
use crate::simulation::PerfStats;

use super::{ChildMeasurement, PhysicsLayoutCore};

/// JS-facing handle for one physics layout
#[wasm_bindgen]
pub struct PhysicsLayout {
    core: PhysicsLayoutCore,
}

impl Default for PhysicsLayout {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl PhysicsLayout {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: PhysicsLayoutCore::new(),
        }
    }

    /// Create a layout from a settings JSON object (missing keys use defaults)
    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(json: String) -> Result<PhysicsLayout, JsValue> {
        let settings = PhysicsSettings::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            core: PhysicsLayoutCore::with_settings(settings),
        })
    }

    pub fn settings_json(&self) -> String {
        self.core.physics().settings().to_json()
    }

    /// Display density (physical pixels per dp)
    pub fn set_density(&mut self, density: f32) {
        self.core.set_density(density);
    }

    #[wasm_bindgen(getter)]
    pub fn pixels_per_meter(&self) -> f32 {
        self.core.physics().pixels_per_meter()
    }

    /// Measure pass with full child descriptions:
    /// `[{"physics": {...}, "initialX": 0, "initialY": 0, "width": 40, "height": 40}, ...]`.
    /// Returns the number of rejected children.
    pub fn measure_json(&mut self, max_width: i32, max_height: i32, json: String) -> Result<usize, JsValue> {
        let children: Vec<ChildMeasurement> =
            serde_json::from_str(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(self.core.measure(max_width, max_height, &children))
    }

    /// Cheap measure pass for later frames: `[w0, h0, w1, h1, ...]`
    pub fn measure_sizes(&mut self, max_width: i32, max_height: i32, sizes: &[f32]) -> usize {
        let children: Vec<ChildMeasurement> = sizes
            .chunks_exact(2)
            .map(|wh| ChildMeasurement::sized(wh[0] as i32, wh[1] as i32))
            .collect();
        self.core.measure(max_width, max_height, &children)
    }

    /// Advance by `elapsed_ms` of frame time; returns the number of steps run
    pub fn tick(&mut self, elapsed_ms: f32) -> u32 {
        self.core.tick(elapsed_ms)
    }

    /// Single fixed step regardless of frame time
    pub fn step(&mut self) {
        self.core.physics_mut().step();
    }

    /// Flat `[x, y, rotationDeg, ...]`, one triple per child in index order
    pub fn placements(&self) -> Vec<f32> {
        let placed = self.core.placements();
        let mut out = Vec::with_capacity(placed.len() * 3);
        for p in placed {
            out.extend_from_slice(&[p.x as f32, p.y as f32, p.rotation_deg]);
        }
        out
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    pub fn reset_gravity(&mut self) {
        self.core.reset_gravity();
    }

    pub fn give_random_impulse(&mut self) {
        self.core.give_random_impulse();
    }

    /// Wall thickness in dp; `undefined` or `0` removes the walls
    pub fn set_bound_size(&mut self, size_dp: Option<f32>) {
        self.core.set_bound_size_dp(size_dp);
    }

    #[wasm_bindgen(getter)]
    pub fn has_bounds(&self) -> bool {
        self.core.has_bounds()
    }

    /// Flat `[x, y, w, h] x 4` in pixels; empty without walls
    pub fn bound_rects(&self) -> Vec<f32> {
        self.core
            .bound_paint_rects()
            .iter()
            .flat_map(|r| [r.x, r.y, r.width, r.height])
            .collect()
    }

    pub fn restart(&mut self) {
        self.core.restart();
    }

    #[wasm_bindgen(getter)]
    pub fn initialized(&self) -> bool {
        self.core.is_initialized()
    }

    #[wasm_bindgen(getter)]
    pub fn created(&self) -> bool {
        self.core.physics().is_created()
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.core.physics().body_count()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.physics_mut().enable_perf_metrics(enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.physics().perf_stats()
    }
}
