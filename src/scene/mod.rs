mod bezier_curve;
mod casteljau_curve;
mod circle;
mod config;
mod handle;
mod line;
mod parametric;
mod polygon;

pub use bezier_curve::BezierCurve;
pub use casteljau_curve::CasteljauCurve;
pub use circle::Circle;
pub use config::SamplingConfig;
pub use handle::{ControlHandle, DragEvent, DragState};
pub use line::StraightLine;
pub use parametric::ParametricCurve;
pub use polygon::ControlPolygon;

use std::fmt;

use slotmap::{new_key_type, SlotMap};

use crate::error::{Result, SceneError};
use crate::math::Point2;
use crate::render::{Color, HandleStyle, Style, Surface};

new_key_type! {
    /// Identifier of a shape in a [`ShapeStore`].
    pub struct ShapeId;
}

/// Addresses one editable point of a shape's geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlSlot {
    /// The `n`-th control point (endpoints, center, Bézier control points).
    Point(usize),
    /// A point on a circle's outline that controls the radius.
    Radius,
}

impl fmt::Display for ControlSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point(i) => write!(f, "point {i}"),
            Self::Radius => f.write_str("radius"),
        }
    }
}

/// Result of a draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawOutcome {
    /// Everything was drawn.
    #[default]
    Complete,
    /// Some samples were not finite and were left out.
    Partial { gaps: usize },
}

impl DrawOutcome {
    /// Combines the outcomes of two draw passes.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::Complete, Self::Complete) => Self::Complete,
            (Self::Partial { gaps }, Self::Complete) | (Self::Complete, Self::Partial { gaps }) => {
                Self::Partial { gaps }
            }
            (Self::Partial { gaps: a }, Self::Partial { gaps: b }) => Self::Partial { gaps: a + b },
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// Common interface of everything that can live in a [`ShapeStore`].
pub trait Shape {
    /// Draws the shape from its current state.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape's sampling parameters are invalid.
    fn draw(&self, surface: &mut dyn Surface) -> Result<DrawOutcome>;

    /// Tests whether `position` is on the shape within [`crate::math::HIT_TOLERANCE`].
    ///
    /// # Errors
    ///
    /// Returns an error if the shape's sampling parameters are invalid.
    fn is_hit(&self, position: &Point2) -> Result<bool>;

    /// The editable points of this shape.
    fn control_slots(&self) -> Vec<ControlSlot>;

    /// Reads the live value of a control slot.
    fn control_point(&self, slot: ControlSlot) -> Option<Point2>;

    /// Moves a control slot to `position`.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot does not exist or `position` is not
    /// finite; the shape is left unchanged.
    fn set_control_point(&mut self, slot: ControlSlot, position: Point2) -> Result<()>;

    fn style(&self) -> &Style;

    fn style_mut(&mut self) -> &mut Style;

    fn line_color(&self) -> Color {
        self.style().color()
    }

    fn set_line_color(&mut self, color: Color) {
        self.style_mut().set_color(color);
    }

    fn line_width(&self) -> f64 {
        self.style().width()
    }

    /// Sets the stroke width, keeping the previous width on invalid input.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive and finite.
    fn set_line_width(&mut self, width: f64) -> Result<()> {
        self.style_mut().set_width(width).inspect_err(|e| {
            tracing::warn!(width, error = %e, "rejected line width");
        })
    }

    /// Style of the drag handles of this shape.
    fn handle_style(&self) -> HandleStyle {
        HandleStyle::filled(self.style().color())
    }

    /// Creates one handle per control slot, bound to the shape `id`.
    fn create_handles(&self, id: ShapeId) -> Vec<ControlHandle> {
        let style = self.handle_style();
        self.control_slots()
            .into_iter()
            .map(|slot| ControlHandle::new(id, slot, style))
            .collect()
    }

    /// The control polygon overlay shown while the shape is selected, if any.
    fn control_polygon(&self, _id: ShapeId) -> Option<ControlPolygon> {
        None
    }
}

/// A shape stored in a [`ShapeStore`].
#[derive(Debug)]
pub enum ShapeKind {
    Line(StraightLine),
    Circle(Circle),
    Parametric(ParametricCurve),
    Bezier(BezierCurve),
    Casteljau(CasteljauCurve),
}

impl ShapeKind {
    /// The shape behind this entry.
    #[must_use]
    pub fn as_shape(&self) -> &dyn Shape {
        match self {
            Self::Line(s) => s,
            Self::Circle(s) => s,
            Self::Parametric(s) => s,
            Self::Bezier(s) => s,
            Self::Casteljau(s) => s,
        }
    }

    pub fn as_shape_mut(&mut self) -> &mut dyn Shape {
        match self {
            Self::Line(s) => s,
            Self::Circle(s) => s,
            Self::Parametric(s) => s,
            Self::Bezier(s) => s,
            Self::Casteljau(s) => s,
        }
    }

    /// Sampling settings of curve shapes.
    #[must_use]
    pub fn sampling(&self) -> Option<&SamplingConfig> {
        match self {
            Self::Parametric(c) => Some(c.sampling()),
            Self::Bezier(c) => Some(c.sampling()),
            _ => None,
        }
    }

    pub fn sampling_mut(&mut self) -> Option<&mut SamplingConfig> {
        match self {
            Self::Parametric(c) => Some(c.sampling_mut()),
            Self::Bezier(c) => Some(c.sampling_mut()),
            _ => None,
        }
    }

    /// Short name of the variant, for diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Circle(_) => "circle",
            Self::Parametric(_) => "parametric curve",
            Self::Bezier(_) => "bezier curve",
            Self::Casteljau(_) => "casteljau curve",
        }
    }
}

impl From<StraightLine> for ShapeKind {
    fn from(s: StraightLine) -> Self {
        Self::Line(s)
    }
}

impl From<Circle> for ShapeKind {
    fn from(s: Circle) -> Self {
        Self::Circle(s)
    }
}

impl From<ParametricCurve> for ShapeKind {
    fn from(s: ParametricCurve) -> Self {
        Self::Parametric(s)
    }
}

impl From<BezierCurve> for ShapeKind {
    fn from(s: BezierCurve) -> Self {
        Self::Bezier(s)
    }
}

impl From<CasteljauCurve> for ShapeKind {
    fn from(s: CasteljauCurve) -> Self {
        Self::Casteljau(s)
    }
}

/// Owns every shape of a scene.
///
/// Shapes are addressed by [`ShapeId`]; handles and overlays keep ids rather
/// than references, so the store stays the single owner of all geometry.
/// Draw order is insertion order.
#[derive(Debug, Default)]
pub struct ShapeStore {
    shapes: SlotMap<ShapeId, ShapeKind>,
    order: Vec<ShapeId>,
}

impl ShapeStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a shape on top of the scene and returns its ID.
    pub fn add(&mut self, shape: impl Into<ShapeKind>) -> ShapeId {
        let shape = shape.into();
        let kind = shape.kind_name();
        let id = self.shapes.insert(shape);
        self.order.push(id);
        tracing::debug!(?id, kind, "added shape");
        id
    }

    /// Returns a reference to the shape, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not in the store.
    pub fn get(&self, id: ShapeId) -> Result<&ShapeKind> {
        self.shapes
            .get(id)
            .ok_or_else(|| SceneError::ShapeNotFound.into())
    }

    /// Returns a mutable reference to the shape, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not in the store.
    pub fn get_mut(&mut self, id: ShapeId) -> Result<&mut ShapeKind> {
        self.shapes
            .get_mut(id)
            .ok_or_else(|| SceneError::ShapeNotFound.into())
    }

    /// Removes a shape. Handles bound to it become dangling and report
    /// [`SceneError::ShapeNotFound`].
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not in the store.
    pub fn remove(&mut self, id: ShapeId) -> Result<ShapeKind> {
        let shape = self.shapes.remove(id).ok_or(SceneError::ShapeNotFound)?;
        self.order.retain(|other| *other != id);
        Ok(shape)
    }

    /// Removes every shape.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.order.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Shape IDs in draw order (bottom first).
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = ShapeId> + '_ {
        self.order.iter().copied()
    }

    /// Reads a control point through the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is missing or has no such slot.
    pub fn control_point(&self, id: ShapeId, slot: ControlSlot) -> Result<Point2> {
        self.get(id)?
            .as_shape()
            .control_point(slot)
            .ok_or_else(|| SceneError::InvalidSlot(slot.to_string()).into())
    }

    /// Writes a control point through the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is missing, has no such slot, or the
    /// position is not finite. The shape is unchanged on error.
    pub fn set_control_point(&mut self, id: ShapeId, slot: ControlSlot, position: Point2) -> Result<()> {
        self.get_mut(id)?
            .as_shape_mut()
            .set_control_point(slot, position)
            .inspect_err(|e| tracing::warn!(?id, %slot, error = %e, "rejected control point"))
    }

    /// Creates the drag handles of a shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not in the store.
    pub fn handles(&self, id: ShapeId) -> Result<Vec<ControlHandle>> {
        Ok(self.get(id)?.as_shape().create_handles(id))
    }

    /// Returns the control polygon overlay of a shape, if it has one.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not in the store.
    pub fn control_polygon(&self, id: ShapeId) -> Result<Option<ControlPolygon>> {
        Ok(self.get(id)?.as_shape().control_polygon(id))
    }

    /// Draws all shapes in order.
    ///
    /// # Errors
    ///
    /// Returns the first error a shape reports.
    pub fn draw(&self, surface: &mut dyn Surface) -> Result<DrawOutcome> {
        let mut outcome = DrawOutcome::Complete;
        for id in &self.order {
            outcome = outcome.merge(self.get(*id)?.as_shape().draw(surface)?);
        }
        Ok(outcome)
    }

    /// Returns the topmost shape hit at `position`.
    ///
    /// # Errors
    ///
    /// Returns the first error a shape reports.
    pub fn pick(&self, position: &Point2) -> Result<Option<ShapeId>> {
        for id in self.order.iter().rev() {
            if self.get(*id)?.as_shape().is_hit(position)? {
                return Ok(Some(*id));
            }
        }
        Ok(None)
    }
}
