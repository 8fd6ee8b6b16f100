//! Physics Layout - rigid-body physics for declarative UI layouts in WASM
//!
//! Elements declared "physical" stop following layout rules: a 2D rigid-body
//! world decides where they sit and how they are rotated.
//!
//! Architecture:
//! - core/        - Errors, logging, pixel/meter units
//! - domain/      - Element records, registry, materials, walls, settings
//! - systems/     - Body world (rapier2d) and boundary walls
//! - simulation/  - The physics bridge and its fixed-step driver
//! - layout/      - Host layout adapter and the JS facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod layout;

use wasm_bindgen::prelude::*;

// Thread pool for the parallel solver, initialized from JS
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init_logging("info");
    tracing::info!("physics-layout {} initialized", version());
}

/// Raise or lower log verbosity, e.g. `"physics_layout=debug"`
#[wasm_bindgen]
pub fn init_logging(filter: &str) {
    crate::core::logging::init_logging(filter);
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{PhysicsError, PhysicsResult, Precondition, UnitConverter};
pub use domain::{
    Bound, ElementPhysicsRecord, ElementRegistry, PhysicsConfig, PhysicsSettings, PhysicsShape,
    RectPx, Side,
};
pub use layout::{ChildMeasurement, PhysicsLayout, PhysicsLayoutCore, Placement};
pub use simulation::{FixedTicker, PerfStats, Physics};
pub use systems::{BodyHandle, BodyWorld, BoundaryWalls};
