// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications are queued through the [`Manager`], rendered as toasts in
//! the bottom-right corner, and auto-dismissed according to their severity.

pub mod manager;
pub mod notification;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
