// SPDX-License-Identifier: MPL-2.0
//! Single-slot toast notification channel.
//!
//! At most one message is live at a time. A new [`State::notify`] supersedes
//! the current message and its pending auto-clear: the previous timer task is
//! aborted through its stored handle, and a generation counter rejects any
//! expiry that was already in the message queue when it was superseded. The
//! message itself is a Fluent key resolved at render time, so the channel is
//! locale-independent.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Container, Row, Text};
use iced::{alignment, task, Element, Length, Task};
use std::fmt;
use std::time::Duration;

/// How long a toast stays visible before auto-clearing.
pub const DISPLAY_DURATION: Duration = Duration::from_millis(2000);

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The display timer for the given generation elapsed.
    Expired(u64),
    /// Manual dismiss from the UI.
    Dismiss,
}

/// Toast slot with its cancellable display timer.
#[derive(Default)]
pub struct State {
    /// Fluent key of the live message, if any.
    message: Option<String>,
    /// Bumped on every `notify`; expiries carrying an older generation are stale.
    generation: u64,
    /// Handle of the pending auto-clear task, aborted on supersede.
    timer: Option<task::Handle>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("message", &self.message)
            .field("generation", &self.generation)
            .finish()
    }
}

impl State {
    /// Creates an empty toast slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current message and restarts the display timer.
    ///
    /// The previous timer is aborted so only the most recent message's timer
    /// is ever honored. The returned task must be handed to the runtime.
    pub fn notify(&mut self, message_key: impl Into<String>) -> Task<Message> {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }

        self.generation += 1;
        self.message = Some(message_key.into());

        let generation = self.generation;
        let (task, handle) = Task::perform(
            async move {
                tokio::time::sleep(DISPLAY_DURATION).await;
                generation
            },
            Message::Expired,
        )
        .abortable();
        self.timer = Some(handle);
        task
    }

    /// Handles a toast message, clearing the slot when appropriate.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            // Aborting the timer on supersede does not recall an expiry that
            // was already delivered to the queue; the generation check drops
            // those so a stale clear never hides a newer message.
            Message::Expired(generation) => {
                if generation == self.generation {
                    self.clear();
                }
            }
            Message::Dismiss => self.clear(),
        }
    }

    fn clear(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.message = None;
    }

    /// The Fluent key of the live message, or `None` when the slot is empty.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns whether a toast is currently visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }
}

/// Renders the toast overlay, anchored bottom-center.
///
/// Returns an empty shrink container when no message is live so the overlay
/// takes no space in the stack.
pub fn view<'a>(state: &'a State, i18n: &I18n) -> Element<'a, Message> {
    let Some(key) = state.message() else {
        return Container::new(Text::new(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    };

    let message_widget = Text::new(i18n.tr(key)).size(typography::BODY);

    let dismiss_button = button(Text::new("✕").size(typography::SMALL))
        .on_press(Message::Dismiss)
        .padding(spacing::XXS)
        .style(styles::button::plain);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(message_widget)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss_button);

    let card = Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::toast);

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::XXL)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_slot_is_empty() {
        let state = State::new();
        assert!(!state.is_visible());
        assert_eq!(state.message(), None);
    }

    #[test]
    fn notify_sets_message() {
        let mut state = State::new();
        let _task = state.notify("toast-added-to-cart");

        assert!(state.is_visible());
        assert_eq!(state.message(), Some("toast-added-to-cart"));
    }

    #[test]
    fn expiry_of_current_generation_clears_message() {
        let mut state = State::new();
        let _task = state.notify("toast-added-to-cart");
        let generation = state.generation;

        state.handle_message(Message::Expired(generation));
        assert!(!state.is_visible());
    }

    #[test]
    fn stale_expiry_never_clears_newer_message() {
        let mut state = State::new();
        let _task = state.notify("x");
        let first_generation = state.generation;
        let _task = state.notify("y");

        // The first message's timer fires late: it must be ignored.
        state.handle_message(Message::Expired(first_generation));
        assert_eq!(state.message(), Some("y"));

        // The second message's own timer still works.
        state.handle_message(Message::Expired(state.generation));
        assert!(!state.is_visible());
    }

    #[test]
    fn notify_replaces_previous_message() {
        let mut state = State::new();
        let _task = state.notify("x");
        let _task = state.notify("y");

        assert_eq!(state.message(), Some("y"));
    }

    #[test]
    fn dismiss_clears_immediately() {
        let mut state = State::new();
        let _task = state.notify("toast-added-to-cart");

        state.handle_message(Message::Dismiss);
        assert!(!state.is_visible());
    }

    #[test]
    fn expiry_on_empty_slot_is_harmless() {
        let mut state = State::new();
        state.handle_message(Message::Expired(0));
        assert!(!state.is_visible());
    }

    #[test]
    fn view_renders_with_and_without_message() {
        let i18n = I18n::default();
        let mut state = State::new();
        let _element = view(&state, &i18n);
        drop(_element);

        let _task = state.notify("toast-added-to-cart");
        let _element = view(&state, &i18n);
    }
}
