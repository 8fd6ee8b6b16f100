use crate::systems::body_world::BodyHandle;

/// Which viewport edge a wall hugs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Left,
    Right,
    Bottom,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Left, Side::Right, Side::Bottom];

    /// Position in `Side::ALL`
    pub fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Left => 1,
            Side::Right => 2,
            Side::Bottom => 3,
        }
    }
}

/// Axis-aligned rectangle in pixels (top-left origin)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectPx {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectPx {
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

/// One static wall of the viewport frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bound {
    pub side: Side,
    /// Viewport size the wall was built for
    pub width_px: f32,
    pub height_px: f32,
    pub thickness_px: f32,
    pub body: BodyHandle,
}

impl Bound {
    /// Wall geometry in pixels.
    ///
    /// Top and bottom span the full width; left and right fill the gap
    /// between them, so the four rects tile the frame without overlap.
    pub fn rect_px(&self) -> RectPx {
        side_rect(self.side, self.width_px, self.height_px, self.thickness_px)
    }
}

pub fn side_rect(side: Side, w: f32, h: f32, t: f32) -> RectPx {
    let inner_h = (h - 2.0 * t).max(0.0);
    match side {
        Side::Top => RectPx { x: 0.0, y: 0.0, width: w, height: t },
        Side::Bottom => RectPx { x: 0.0, y: h - t, width: w, height: t },
        Side::Left => RectPx { x: 0.0, y: t, width: t, height: inner_h },
        Side::Right => RectPx { x: w - t, y: t, width: t, height: inner_h },
    }
}
