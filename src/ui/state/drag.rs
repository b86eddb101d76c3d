// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for the vertex handles, plus the
//! hover highlight that overlaps it. Hover is pinned to the grabbed vertex
//! for as long as a drag is active.

use iced::Point;

/// Manages vertex grab-and-drag state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    /// Vertex index currently being dragged, if any
    active: Option<usize>,

    /// Vertex index currently under the pointer, if any
    hover: Option<usize>,
}

impl DragState {
    /// Starts dragging a vertex. The hover highlight follows the grab.
    pub fn start(&mut self, vertex: usize) {
        self.active = Some(vertex);
        self.hover = Some(vertex);
    }

    /// Stops the drag operation. The hover highlight is left as-is; the
    /// next pointer move refreshes it.
    pub fn stop(&mut self) {
        self.active = None;
    }

    /// Whether a drag operation is currently active
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// The vertex being dragged, if any
    #[must_use]
    pub fn active_vertex(&self) -> Option<usize> {
        self.active
    }

    /// The vertex under the pointer, if any
    #[must_use]
    pub fn hovered_vertex(&self) -> Option<usize> {
        self.hover
    }

    /// Updates the hover highlight. Ignored while dragging, so the
    /// highlight stays pinned to the grabbed vertex until release.
    pub fn set_hover(&mut self, vertex: Option<usize>) {
        if self.active.is_none() {
            self.hover = vertex;
        }
    }
}

/// Clamps a raw pointer position onto the square drawing surface,
/// each axis independently.
#[must_use]
pub fn clamp_to_board(position: Point, board_size: f32) -> Point {
    Point::new(
        position.x.clamp(0.0, board_size),
        position.y.clamp(0.0, board_size),
    )
}
