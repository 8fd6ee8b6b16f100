use wasm_bindgen::prelude::*;

/// Snapshot of the last step (zeros while perf metrics are disabled)
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) steps: u32,
    pub(super) bodies: u32,
    pub(super) records: u32,
}

#[wasm_bindgen]
impl PerfStats {
    /// Duration of the last step including record sync
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }

    /// Steps completed in this session (saturating)
    #[wasm_bindgen(getter)]
    pub fn steps(&self) -> u32 { self.steps }

    /// Bodies in the world, walls included
    #[wasm_bindgen(getter)]
    pub fn bodies(&self) -> u32 { self.bodies }

    #[wasm_bindgen(getter)]
    pub fn records(&self) -> u32 { self.records }
}
