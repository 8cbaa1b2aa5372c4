// SPDX-License-Identifier: MPL-2.0
//! Keyboard subscription for the lightbox.
//!
//! The listener is scoped to the modal's lifetime: it is only returned while
//! a selection is active, so closing the lightbox releases it instead of
//! leaving a global handler behind. Arrow keys map to the same navigation
//! requests as the on-screen arrows; the state machine's re-entrancy guard
//! applies to both equally.

use super::Message;
use crate::lightbox::{Direction, Lightbox};
use crate::ui::gallery;
use iced::keyboard::{self, key::Named, Key};
use iced::Subscription;

/// Creates the keyboard subscription for the current lightbox state.
pub fn keyboard(lightbox: &Lightbox) -> Subscription<Message> {
    if lightbox.selection().is_none() {
        return Subscription::none();
    }

    keyboard::listen().filter_map(|event| match event {
        keyboard::Event::KeyPressed { key, .. } => match key {
            Key::Named(Named::ArrowRight) => Some(Message::Gallery(
                gallery::Message::NavigateRequested(Direction::Next),
            )),
            Key::Named(Named::ArrowLeft) => Some(Message::Gallery(
                gallery::Message::NavigateRequested(Direction::Previous),
            )),
            Key::Named(Named::Escape) => Some(Message::Gallery(gallery::Message::CloseRequested)),
            _ => None,
        },
        _ => None,
    })
}
