// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to inform users about actions (report
//! saved, invalid photo, etc.) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with kinds and phases
//! - [`center`] - `NotificationCenter` owning the active list and deadlines
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Lifecycle
//!
//! A toast enters hidden, flips visible after a fixed 10ms entrance delay,
//! auto-dismisses after its duration (default 4s; zero means sticky), and
//! lingers 300ms in a removing phase while its exit transition plays. All
//! deadlines are driven by `tick`, never by detached timers.

mod center;
mod notification;
mod toast;

pub use center::{Message, NotificationCenter};
pub use notification::{
    Kind, Notification, NotificationId, Phase, DEFAULT_DURATION, ENTRANCE_DELAY, EXIT_DELAY,
};
pub use toast::Toast;
