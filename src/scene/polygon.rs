use crate::error::Result;
use crate::math::Point2;
use crate::render::{stroke_line, Color, Style, Surface};

use super::{ControlSlot, ShapeId, ShapeStore};

/// Default control polygon stroke.
pub const POLYGON_STYLE: Style = Style::preset(2.0, Color::rgb(0xff, 0x00, 0x00));

/// The control polygon `p0 → p1 → p2 → p3` of a curve, drawn as an overlay.
///
/// Reads its corners through the [`ShapeStore`] on every draw. It has no
/// interaction of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPolygon {
    shape: ShapeId,
    slots: [ControlSlot; 4],
    style: Style,
}

impl ControlPolygon {
    /// Creates an overlay over the control points `0..=3` of `shape`.
    #[must_use]
    pub fn new(shape: ShapeId) -> Self {
        Self {
            shape,
            slots: [
                ControlSlot::Point(0),
                ControlSlot::Point(1),
                ControlSlot::Point(2),
                ControlSlot::Point(3),
            ],
            style: POLYGON_STYLE,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn shape(&self) -> ShapeId {
        self.shape
    }

    /// The live corner positions.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape was removed or lacks a slot.
    pub fn points(&self, store: &ShapeStore) -> Result<[Point2; 4]> {
        let [a, b, c, d] = self.slots;
        Ok([
            store.control_point(self.shape, a)?,
            store.control_point(self.shape, b)?,
            store.control_point(self.shape, c)?,
            store.control_point(self.shape, d)?,
        ])
    }

    /// Strokes the three polygon edges.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape was removed or lacks a slot.
    pub fn draw(&self, store: &ShapeStore, surface: &mut dyn Surface) -> Result<()> {
        let points = self.points(store)?;
        for edge in points.windows(2) {
            stroke_line(surface, edge[0], edge[1], &self.style);
        }
        Ok(())
    }
}
