//! Domain types: element records, their registry, materials, walls, settings

pub mod bound;
pub mod config;
pub mod record;
pub mod registry;
pub mod settings;

pub use bound::{Bound, RectPx, Side};
pub use config::{PhysicsConfig, PhysicsShape};
pub use record::ElementPhysicsRecord;
pub use registry::ElementRegistry;
pub use settings::PhysicsSettings;
