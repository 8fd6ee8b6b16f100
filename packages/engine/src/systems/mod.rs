//! Systems operating on the simulation: the body world and its walls

pub mod body_world;
pub mod bounds;

pub use body_world::{BodyHandle, BodyTransform, BodyWorld};
pub use bounds::{BoundaryWalls, WallMaterial};
