// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only subscription is the per-frame tick that drives the decorative
//! background. Returning `Subscription::none()` when the animation is off
//! tears the frame loop down entirely; nothing keeps ticking in the
//! background.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval between animation frames (~60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Creates the animation frame subscription, or none while disabled.
pub fn create_animation_subscription(animate: bool) -> Subscription<Message> {
    if animate {
        time::every(FRAME_INTERVAL).map(Message::AnimationTick)
    } else {
        Subscription::none()
    }
}
