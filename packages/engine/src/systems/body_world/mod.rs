//! BodyWorld - the rigid-body simulation backing the layout
//!
//! Wraps the rapier2d pipeline and sets behind a small API expressed in
//! meters. Bodies never leave this module: callers keep `BodyHandle`s,
//! which are plain copyable indices into the body set.

mod world;

use rapier2d::prelude::RigidBodyHandle;

pub use world::{BodyTransform, BodyWorld};
pub(crate) use world::read_transform;

/// Non-owning reference to a body living in a `BodyWorld`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub(crate) RigidBodyHandle);
