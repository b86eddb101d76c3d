// SPDX-License-Identifier: MPL-2.0
//! The explorer board: triangle state, drag handling, and its view.
//!
//! The board owns the triangle, the selected center kind, and the transient
//! drag/hover state. Every state change goes through [`State::handle_message`],
//! and the selected center is recomputed from scratch on each view pass, so
//! there is no cached value to invalidate.

mod canvas;
mod controls;

use crate::config::BOARD_SIZE;
use crate::geometry::{CenterKind, Triangle};
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::state::drag::{clamp_to_board, DragState};
use crate::ui::theme;
use crate::ui::theming::ColorScheme;
use canvas::BoardCanvas;
use iced::widget::{container, text, Canvas, Column};
use iced::{Alignment, Element, Length, Point};

/// Messages produced by the board canvas and controls.
#[derive(Debug, Clone)]
pub enum Message {
    /// A vertex handle was pressed.
    VertexGrabbed(usize),
    /// The pointer moved while a drag is active. Carries the raw board
    /// position, which may lie outside the board.
    VertexDragged(Point),
    /// The pointer was released (or left the window) during a drag.
    DragEnded,
    /// The vertex under the pointer changed while idle.
    HoverChanged(Option<usize>),
    /// A different center kind was picked.
    CenterSelected(CenterKind),
}

/// Explorer board state.
#[derive(Debug, Clone, Default)]
pub struct State {
    triangle: Triangle,
    center: CenterKind,
    drag: DragState,
}

impl State {
    pub fn new(center: CenterKind) -> Self {
        Self {
            center,
            ..Self::default()
        }
    }

    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    pub fn selected_center(&self) -> CenterKind {
        self.center
    }

    /// The currently displayed center point; non-finite for a degenerate
    /// triangle.
    pub fn center_position(&self) -> Point {
        self.center.position(&self.triangle)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn hovered_vertex(&self) -> Option<usize> {
        self.drag.hovered_vertex()
    }

    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::VertexGrabbed(index) => {
                self.drag.start(index);
            }
            Message::VertexDragged(position) => {
                if let Some(index) = self.drag.active_vertex() {
                    self.triangle
                        .set_vertex(index, clamp_to_board(position, BOARD_SIZE));
                }
            }
            Message::DragEnded => {
                self.drag.stop();
            }
            Message::HoverChanged(hover) => {
                self.drag.set_hover(hover);
            }
            Message::CenterSelected(center) => {
                self.center = center;
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &I18n, scheme: &ColorScheme) -> Element<'a, Message> {
        let board = container(
            Canvas::new(BoardCanvas {
                triangle: &self.triangle,
                drag: &self.drag,
                center: self.center,
            })
            .width(Length::Fixed(BOARD_SIZE))
            .height(Length::Fixed(BOARD_SIZE)),
        )
        .style(theme::board_style(scheme));

        let hint = text(i18n.tr("drag-hint"))
            .size(typography::TEXT_MD)
            .color(scheme.brand_secondary);

        Column::new()
            .push(controls::selector(i18n, self.center))
            .push(hint)
            .push(board)
            .push(controls::readout(
                i18n,
                self.center,
                self.center_position(),
                scheme,
            ))
            .push(controls::description(i18n, self.center, scheme))
            .spacing(spacing::MD)
            .align_x(Alignment::Center)
            .width(Length::Fill)
            .into()
    }
}
