// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only recurring work is the periodic tick driving scene animation and
//! notification auto-dismiss. The tick runs fast while the scene animates,
//! slow while only notifications need it, and not at all otherwise so an
//! idle window schedules nothing.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Tick interval while the decorative scene is animating.
pub const SCENE_TICK: Duration = Duration::from_millis(33);

/// Tick interval while only notification timers are pending.
pub const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

/// Creates the periodic tick subscription.
///
/// Returns `Subscription::none()` when nothing on screen needs time.
pub fn create_tick_subscription(
    scene_animating: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if scene_animating {
        time::every(SCENE_TICK).map(Message::Tick)
    } else if has_notifications {
        time::every(NOTIFICATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
