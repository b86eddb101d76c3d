// SPDX-License-Identifier: MPL-2.0
//! Canvas program that draws the triangle and drives the drag interaction.

use crate::config::{
    BOARD_SIZE, CENTER_MARKER_RADIUS, TRIANGLE_STROKE_WIDTH, VERTEX_HIGHLIGHT_STROKE_WIDTH,
    VERTEX_HIT_RADIUS, VERTEX_RADIUS,
};
use crate::geometry::{CenterKind, Triangle};
use crate::ui::state::drag::DragState;
use crate::ui::theme;

use super::Message;

/// Canvas program used to draw the board and translate pointer events into
/// board messages. All state lives in the board component; the program only
/// reads it.
pub struct BoardCanvas<'a> {
    pub triangle: &'a Triangle,
    pub drag: &'a DragState,
    pub center: CenterKind,
}

/// Finds the vertex handle under `position`, preferring the nearest one
/// when hit circles overlap.
pub(super) fn vertex_at(triangle: &Triangle, position: iced::Point) -> Option<usize> {
    triangle
        .vertices()
        .iter()
        .enumerate()
        .map(|(index, vertex)| (index, vertex.distance(position)))
        .filter(|(_, distance)| *distance <= VERTEX_HIT_RADIUS)
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(index, _)| index)
}

impl BoardCanvas<'_> {
    /// Converts the absolute cursor position to board coordinates. Unlike
    /// `Cursor::position_in`, this also yields a position while the pointer
    /// is outside the canvas bounds.
    fn board_position(
        &self,
        cursor: iced::mouse::Cursor,
        bounds: iced::Rectangle,
    ) -> Option<iced::Point> {
        cursor
            .position()
            .map(|absolute| iced::Point::new(absolute.x - bounds.x, absolute.y - bounds.y))
    }
}

impl iced::widget::canvas::Program<Message> for BoardCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        match event {
            iced::Event::Mouse(iced::mouse::Event::ButtonPressed(iced::mouse::Button::Left)) => {
                if let Some(position) = cursor.position_in(bounds) {
                    if let Some(index) = vertex_at(self.triangle, position) {
                        return Some(Action::publish(Message::VertexGrabbed(index)).and_capture());
                    }
                }
            }
            iced::Event::Mouse(iced::mouse::Event::CursorMoved { .. }) => {
                if self.drag.is_dragging() {
                    if let Some(position) = self.board_position(cursor, bounds) {
                        return Some(Action::publish(Message::VertexDragged(position)).and_capture());
                    }
                } else {
                    let hover = cursor
                        .position_in(bounds)
                        .and_then(|position| vertex_at(self.triangle, position));
                    if hover != self.drag.hovered_vertex() {
                        return Some(Action::publish(Message::HoverChanged(hover)));
                    }
                }
            }
            iced::Event::Mouse(iced::mouse::Event::ButtonReleased(iced::mouse::Button::Left)) => {
                if self.drag.is_dragging() {
                    return Some(Action::publish(Message::DragEnded).and_capture());
                }
            }
            iced::Event::Mouse(iced::mouse::Event::CursorLeft) => {
                // The window-level subscription ends an in-flight drag; here
                // we only drop a stale hover highlight.
                if !self.drag.is_dragging() && self.drag.hovered_vertex().is_some() {
                    return Some(Action::publish(Message::HoverChanged(None)));
                }
            }
            _ => {}
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: iced::Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<iced::widget::canvas::Geometry> {
        use iced::widget::canvas::{Frame, Path, Stroke};

        let mut frame = Frame::new(renderer, bounds.size());
        let vertices = self.triangle.vertices();

        // Triangle body
        let outline = Path::new(|builder| {
            builder.move_to(vertices[0]);
            builder.line_to(vertices[1]);
            builder.line_to(vertices[2]);
            builder.close();
        });
        frame.fill(&outline, theme::triangle_fill_color());
        frame.stroke(
            &outline,
            Stroke::default()
                .with_width(TRIANGLE_STROKE_WIDTH)
                .with_color(theme::triangle_stroke_color()),
        );

        // Vertex handles, highlighted under the pointer or while dragged
        for (index, vertex) in vertices.iter().enumerate() {
            let handle = Path::circle(*vertex, VERTEX_RADIUS);
            let highlighted = self.drag.hovered_vertex() == Some(index);

            let fill = if highlighted {
                theme::vertex_hover_color()
            } else {
                theme::vertex_color()
            };
            frame.fill(&handle, fill);

            if highlighted {
                frame.stroke(
                    &handle,
                    Stroke::default()
                        .with_width(VERTEX_HIGHLIGHT_STROKE_WIDTH)
                        .with_color(theme::vertex_ring_color()),
                );
            }
        }

        // Selected center marker. A degenerate triangle yields non-finite
        // coordinates; the marker is simply not drawn then.
        let center = self.center.position(self.triangle);
        if center.x.is_finite() && center.y.is_finite() {
            let marker = Path::circle(center, CENTER_MARKER_RADIUS);
            frame.fill(&marker, theme::center_color(self.center));
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> iced::mouse::Interaction {
        if self.drag.is_dragging() {
            return iced::mouse::Interaction::Grabbing;
        }

        let over_vertex = cursor
            .position_in(bounds)
            .and_then(|position| vertex_at(self.triangle, position))
            .is_some();

        if over_vertex {
            iced::mouse::Interaction::Pointer
        } else {
            iced::mouse::Interaction::default()
        }
    }
}

const _: () = assert!(VERTEX_HIT_RADIUS < BOARD_SIZE);

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    #[test]
    fn vertex_at_finds_a_handle_within_the_hit_radius() {
        let triangle = Triangle::default();
        let near_first = Point::new(
            triangle.vertex(0).x + VERTEX_HIT_RADIUS - 1.0,
            triangle.vertex(0).y,
        );

        assert_eq!(vertex_at(&triangle, near_first), Some(0));
    }

    #[test]
    fn vertex_at_misses_outside_the_hit_radius() {
        let triangle = Triangle::default();
        let far_away = Point::new(
            triangle.vertex(0).x + VERTEX_HIT_RADIUS * 2.0,
            triangle.vertex(0).y + VERTEX_HIT_RADIUS * 2.0,
        );

        assert_eq!(vertex_at(&triangle, far_away), None);
    }

    #[test]
    fn vertex_at_prefers_the_nearest_of_overlapping_handles() {
        let triangle = Triangle::new(
            Point::new(100.0, 100.0),
            Point::new(100.0 + VERTEX_HIT_RADIUS, 100.0),
            Point::new(300.0, 300.0),
        );

        // Two hit circles overlap; the press lands closer to vertex 1.
        let press = Point::new(100.0 + VERTEX_HIT_RADIUS - 2.0, 100.0);
        assert_eq!(vertex_at(&triangle, press), Some(1));
    }
}
