//! Axis-aligned integer rectangle shared by the paddle and the ball

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in playfield pixels
///
/// `(x, y)` is the top-left corner. Size is fixed once an entity is built;
/// only the position moves. `w` and `h` are never negative when built through
/// [`Rect::new`] or deserialized; writing the public fields directly bypasses
/// that check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RectFields")]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Create a rectangle. Negative sizes are clamped to zero.
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            x,
            y,
            w: if w < 0 { 0 } else { w },
            h: if h < 0 { 0 } else { h },
        }
    }

    /// Top-left corner
    #[inline]
    pub fn origin(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.w, self.h)
    }

    /// Bottom edge (`y + h`)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y.wrapping_add(self.h)
    }

    /// Vertical center line
    #[inline]
    pub fn center_y(&self) -> i32 {
        self.y.wrapping_add(self.h / 2)
    }

    /// Move the top-left corner to `pos`, keeping the size
    #[inline]
    pub fn set_origin(&mut self, pos: IVec2) {
        self.x = pos.x;
        self.y = pos.y;
    }

    /// Shift the rectangle by `delta`
    #[inline]
    pub fn translate(&mut self, delta: IVec2) {
        self.set_origin(self.origin().wrapping_add(delta));
    }
}

/// Wire form of [`Rect`]; deserialization goes through [`Rect::new`]
#[derive(Deserialize)]
struct RectFields {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

impl From<RectFields> for Rect {
    fn from(f: RectFields) -> Self {
        Rect::new(f.x, f.y, f.w, f.h)
    }
}
