//! Pointer drag handling.
//!
//! Pointer coordinates are canvas-relative pixels. A drag starts by recording
//! where inside the element's box the pointer went down, then each move places
//! the box so that the same point stays under the pointer.

use serde::{Deserialize, Serialize};

use crate::device::CanvasSize;
use crate::element::{Element, ElementId, Unit};

/// A point in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset from the canvas' left edge.
    pub x: f32,
    /// Vertical offset from the canvas' top edge.
    pub y: f32,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragState {
    /// The element being dragged.
    pub element: ElementId,
    /// Pointer offset from the element box's top-left corner.
    pub offset: Point,
}

impl DragState {
    /// Begin dragging `element` with the pointer at `pointer`.
    ///
    /// Returns `None` for grid items, which are placed by their grid.
    #[must_use]
    pub fn begin(element: &Element, pointer: Point, canvas: CanvasSize) -> Option<Self> {
        if element.is_grid_item() {
            return None;
        }
        let bounds = element.bounds(canvas);
        Some(Self {
            element: element.id,
            offset: Point::new(pointer.x - bounds.x, pointer.y - bounds.y),
        })
    }

    /// New `(x, y)` position for the dragged element with the pointer at `pointer`.
    ///
    /// Pixel-positioned elements are clamped so their box stays on the canvas
    /// and rounded to whole pixels. Percentage-positioned elements are placed
    /// as a percentage of the canvas without clamping.
    #[must_use]
    pub fn position_for(
        &self,
        element: &Element,
        pointer: Point,
        canvas: CanvasSize,
    ) -> (f32, f32) {
        let left = pointer.x - self.offset.x;
        let top = pointer.y - self.offset.y;

        match element.geometry.position_unit() {
            Unit::Percent => (
                round_to_hundredths(percent_of(left, canvas.width)),
                round_to_hundredths(percent_of(top, canvas.height)),
            ),
            Unit::Px => {
                let bounds = element.bounds(canvas);
                (
                    clamp_to_canvas(left, canvas.width - bounds.width),
                    clamp_to_canvas(top, canvas.height - bounds.height),
                )
            }
        }
    }
}

fn clamp_to_canvas(value: f32, max: f32) -> f32 {
    value.min(max).max(0.0).round()
}

fn percent_of(value: f32, extent: f32) -> f32 {
    if extent == 0.0 {
        0.0
    } else {
        value / extent * 100.0
    }
}

fn round_to_hundredths(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
