//! BoundaryWalls - four static bodies framing the viewport
//!
//! Each wall is `thickness` pixels deep and sits flush with its edge, so
//! the free interior is `(w - 2t) x (h - 2t)`. Walls are plain fixed
//! colliders; bouncing is left to the solver's contact response.

use tracing::debug;

use crate::core::error::{PhysicsError, PhysicsResult};
use crate::core::units::UnitConverter;
use crate::domain::bound::{side_rect, Bound, RectPx, Side};

use super::body_world::BodyWorld;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallMaterial {
    pub friction: f32,
    pub restitution: f32,
}

impl Default for WallMaterial {
    fn default() -> Self {
        Self {
            friction: 0.3,
            restitution: 0.0,
        }
    }
}

#[derive(Debug)]
pub struct BoundaryWalls {
    walls: [Bound; 4],
}

impl BoundaryWalls {
    /// Create the frame for a `width x height` pixel viewport.
    ///
    /// Fails with `InvalidUnitConversion` until the converter is configured.
    pub fn build(
        world: &mut BodyWorld,
        units: &UnitConverter,
        width_px: f32,
        height_px: f32,
        thickness_px: f32,
        material: WallMaterial,
    ) -> PhysicsResult<Self> {
        if !units.is_ready() {
            return Err(PhysicsError::InvalidUnitConversion);
        }

        let walls = Side::ALL.map(|side| {
            let rect = side_rect(side, width_px, height_px, thickness_px);
            let (cx, cy) = rect.center();
            let body = world.create_fixed(
                units.pixels_to_meters(cx),
                units.pixels_to_meters(cy),
                (
                    units.pixels_to_meters(rect.width * 0.5),
                    units.pixels_to_meters(rect.height * 0.5),
                ),
                material.friction,
                material.restitution,
            );
            Bound {
                side,
                width_px,
                height_px,
                thickness_px,
                body,
            }
        });

        debug!(width_px, height_px, thickness_px, "boundary walls built");
        Ok(Self { walls })
    }

    /// Take all four walls out of the world
    pub fn remove(self, world: &mut BodyWorld) {
        for wall in self.walls.iter() {
            world.remove(wall.body);
        }
    }

    pub fn walls(&self) -> &[Bound; 4] {
        &self.walls
    }

    pub fn wall(&self, side: Side) -> &Bound {
        &self.walls[side.index()]
    }

    pub fn thickness_px(&self) -> f32 {
        self.walls[0].thickness_px
    }

    /// Free space left between the walls, in pixels
    pub fn interior_px(&self) -> (f32, f32) {
        let w = &self.walls[0];
        (
            (w.width_px - 2.0 * w.thickness_px).max(0.0),
            (w.height_px - 2.0 * w.thickness_px).max(0.0),
        )
    }

    /// Rectangles for the host to paint, in `Side::ALL` order
    pub fn paint_rects(&self) -> [RectPx; 4] {
        self.walls.map(|w| w.rect_px())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn units(ppm: f32) -> UnitConverter {
        let mut u = UnitConverter::new();
        u.set_pixels_per_meter(ppm);
        u
    }

    #[test]
    fn walls_frame_the_viewport_interior() {
        let mut world = BodyWorld::new();
        let walls = BoundaryWalls::build(
            &mut world,
            &units(10.0),
            300.0,
            500.0,
            20.0,
            WallMaterial::default(),
        )
        .unwrap();

        assert_eq!(world.fixed_count(), 4);
        assert_eq!(walls.interior_px(), (260.0, 460.0));

        let top = walls.wall(Side::Top);
        let t = world.transform(top.body).unwrap();
        assert_relative_eq!(t.x, 15.0);
        assert_relative_eq!(t.y, 1.0);
        let (hw, hh) = world.box_half_extents(top.body).unwrap();
        assert_relative_eq!(hw, 15.0);
        assert_relative_eq!(hh, 1.0);

        let right = walls.wall(Side::Right).rect_px();
        assert_eq!(right, RectPx { x: 280.0, y: 20.0, width: 20.0, height: 460.0 });
    }

    #[test]
    fn remove_clears_every_wall_body() {
        let mut world = BodyWorld::new();
        let walls = BoundaryWalls::build(
            &mut world,
            &units(10.0),
            300.0,
            500.0,
            20.0,
            WallMaterial::default(),
        )
        .unwrap();
        walls.remove(&mut world);
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn building_without_units_is_rejected() {
        let mut world = BodyWorld::new();
        let res = BoundaryWalls::build(
            &mut world,
            &UnitConverter::new(),
            300.0,
            500.0,
            20.0,
            WallMaterial::default(),
        );
        assert_eq!(res.unwrap_err(), PhysicsError::InvalidUnitConversion);
        assert_eq!(world.body_count(), 0);
    }
}
