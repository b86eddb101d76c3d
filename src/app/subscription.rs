// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only native events the app needs beyond what the board canvas sees
//! are the ones that finish a drag outside the canvas. The subscription is
//! registered when a drag starts and dropped the moment the board returns
//! to idle, so the window-level listener lives exactly as long as the drag.

use super::Message;
use crate::ui::board;
use iced::{event, mouse, Subscription};

/// Creates the drag-scoped window event subscription.
///
/// While a vertex is being dragged, a release (or the pointer leaving the
/// window entirely) must end the drag no matter where it happens. Pointer
/// moves are not routed here; the canvas program already receives them,
/// including moves past the canvas edge.
pub fn create_drag_subscription(is_dragging: bool) -> Subscription<Message> {
    if is_dragging {
        event::listen_with(|event, _status, _window| match event {
            event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | event::Event::Mouse(mouse::Event::CursorLeft) => {
                Some(Message::Board(board::Message::DragEnded))
            }
            _ => None,
        })
    } else {
        Subscription::none()
    }
}
