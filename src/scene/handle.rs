use crate::error::Result;
use crate::math::Point2;
use crate::render::{draw_handle, HandleStyle, Surface};

use super::{ControlSlot, ShapeId, ShapeStore};

/// A pointer drag reported by the scene controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEvent {
    pub position: Point2,
}

/// An interactive handle for one control point of one shape.
///
/// The handle holds no geometry of its own: every read and write goes
/// through the [`ShapeStore`], so handles, overlays and the shape itself
/// always see the same live value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlHandle {
    shape: ShapeId,
    slot: ControlSlot,
    style: HandleStyle,
}

impl ControlHandle {
    /// Creates a handle bound to `slot` of the shape `shape`.
    #[must_use]
    pub fn new(shape: ShapeId, slot: ControlSlot, style: HandleStyle) -> Self {
        Self { shape, slot, style }
    }

    #[must_use]
    pub fn shape(&self) -> ShapeId {
        self.shape
    }

    #[must_use]
    pub fn slot(&self) -> ControlSlot {
        self.slot
    }

    #[must_use]
    pub fn style(&self) -> &HandleStyle {
        &self.style
    }

    /// Reads the live position of the bound control point.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape was removed or lacks the slot.
    pub fn position(&self, store: &ShapeStore) -> Result<Point2> {
        store.control_point(self.shape, self.slot)
    }

    /// Moves the bound control point. Any finite position is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape was removed, lacks the slot, or the
    /// position is not finite.
    pub fn set_position(&self, store: &mut ShapeStore, position: Point2) -> Result<()> {
        store.set_control_point(self.shape, self.slot, position)
    }

    /// Applies a drag event.
    ///
    /// # Errors
    ///
    /// See [`ControlHandle::set_position`].
    pub fn on_drag(&self, store: &mut ShapeStore, event: &DragEvent) -> Result<()> {
        tracing::trace!(shape = ?self.shape, slot = %self.slot, x = event.position.x, y = event.position.y, "drag");
        self.set_position(store, event.position)
    }

    /// Tests whether `position` is on the handle disc.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape was removed or lacks the slot.
    pub fn is_hit(&self, store: &ShapeStore, position: &Point2) -> Result<bool> {
        let center = self.position(store)?;
        Ok((position - center).norm() <= self.style.radius)
    }

    /// Draws the handle at the live control point.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape was removed or lacks the slot.
    pub fn draw(&self, store: &ShapeStore, surface: &mut dyn Surface) -> Result<()> {
        draw_handle(surface, self.position(store)?, &self.style);
        Ok(())
    }
}

/// Per-shape drag state, driven by the scene controller.
///
/// `Idle` → press on a handle → `Dragging` → release → `Idle`. Each pointer
/// move while dragging writes the new position through the handle; the
/// controller redraws afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(ControlHandle),
}

impl DragState {
    /// Starts dragging the topmost handle under `position`.
    ///
    /// Returns `true` if a handle was grabbed. Handles later in `handles`
    /// are considered on top.
    ///
    /// # Errors
    ///
    /// Returns an error if a handle refers to a missing shape or slot.
    pub fn press(&mut self, store: &ShapeStore, handles: &[ControlHandle], position: &Point2) -> Result<bool> {
        for handle in handles.iter().rev() {
            if handle.is_hit(store, position)? {
                *self = Self::Dragging(*handle);
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Forwards a pointer move to the dragged handle.
    ///
    /// Returns `true` if a control point moved and a redraw is due.
    ///
    /// # Errors
    ///
    /// See [`ControlHandle::on_drag`].
    pub fn drag(&self, store: &mut ShapeStore, event: &DragEvent) -> Result<bool> {
        match self {
            Self::Idle => Ok(false),
            Self::Dragging(handle) => {
                handle.on_drag(store, event)?;
                Ok(true)
            }
        }
    }

    /// Ends the drag.
    pub fn release(&mut self) {
        *self = Self::Idle;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}
