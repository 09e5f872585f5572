// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `NotificationCenter` owns the active toast list and drives every
//! deferred effect (entrance flip, auto-dismiss, exit removal) from
//! explicit deadlines checked in [`NotificationCenter::tick`]. There are
//! no free-running timers, so a center dropped mid-transition cannot leak
//! a callback firing against freed state.

use super::notification::{Notification, NotificationId, Phase, ENTRANCE_DELAY, EXIT_DELAY};
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID (close button).
    Dismiss(NotificationId),
}

/// Manages the active toast list.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    active: Vec<Notification>,
}

impl NotificationCenter {
    /// Creates a new empty notification center.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a notification and returns its handle.
    pub fn show(&mut self, notification: Notification) -> NotificationId {
        self.show_at(notification, Instant::now())
    }

    /// Shows a notification with an explicit clock, for deterministic tests.
    pub fn show_at(&mut self, mut notification: Notification, now: Instant) -> NotificationId {
        notification.set_phase(Phase::Entering, now);
        let id = notification.id();
        self.active.push(notification);
        id
    }

    /// Starts dismissing a notification: it switches to the removing phase
    /// and leaves the list once the exit transition has played.
    ///
    /// Returns `true` if the notification was found and not already
    /// removing; dismissing twice is a harmless no-op.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.dismiss_at(id, Instant::now())
    }

    /// Dismisses with an explicit clock, for deterministic tests.
    pub fn dismiss_at(&mut self, id: NotificationId, now: Instant) -> bool {
        match self.active.iter_mut().find(|n| n.id() == id) {
            Some(n) if n.phase() != Phase::Removing => {
                n.set_phase(Phase::Removing, now);
                true
            }
            _ => false,
        }
    }

    /// Dismisses every active notification.
    pub fn dismiss_all(&mut self) {
        let now = Instant::now();
        let ids: Vec<NotificationId> = self.active.iter().map(Notification::id).collect();
        for id in ids {
            self.dismiss_at(id, now);
        }
    }

    /// Advances all lifecycle deadlines that have passed by `now`:
    /// entering toasts become visible after the entrance delay, expired
    /// toasts start removing, and removing toasts are dropped once the
    /// exit delay has elapsed.
    pub fn tick(&mut self, now: Instant) {
        for n in &mut self.active {
            if n.phase() == Phase::Entering && n.phase_elapsed(now) >= ENTRANCE_DELAY {
                n.set_phase(Phase::Visible, now);
            }
        }

        let expired: Vec<NotificationId> = self
            .active
            .iter()
            .filter(|n| n.phase() != Phase::Removing && n.is_expired(now))
            .map(Notification::id)
            .collect();
        for id in expired {
            self.dismiss_at(id, now);
        }

        self.active
            .retain(|n| n.phase() != Phase::Removing || n.phase_elapsed(now) < EXIT_DELAY);
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Returns the currently tracked notifications (including removing ones).
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Returns whether any toast is alive; drives the tick subscription.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn at(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    #[test]
    fn new_center_is_empty() {
        let center = NotificationCenter::new();
        assert!(center.is_empty());
        assert!(!center.has_notifications());
    }

    #[test]
    fn show_returns_handle_to_entering_toast() {
        let mut center = NotificationCenter::new();
        let start = Instant::now();
        let id = center.show_at(Notification::success("saved"), start);

        assert_eq!(center.len(), 1);
        let toast = center.iter().find(|n| n.id() == id).unwrap();
        assert_eq!(toast.phase(), Phase::Entering);
    }

    #[test]
    fn tick_promotes_entering_to_visible_after_entrance_delay() {
        let mut center = NotificationCenter::new();
        let start = Instant::now();
        let id = center.show_at(Notification::info("hello"), start);

        center.tick(at(start, 5));
        assert_eq!(
            center.iter().find(|n| n.id() == id).unwrap().phase(),
            Phase::Entering
        );

        center.tick(at(start, 10));
        assert_eq!(
            center.iter().find(|n| n.id() == id).unwrap().phase(),
            Phase::Visible
        );
    }

    #[test]
    fn auto_dismiss_removes_toast_after_duration_plus_exit_delay() {
        let mut center = NotificationCenter::new();
        let start = Instant::now();
        let id = center.show_at(Notification::success("Saved"), start);

        // Still visible right before the 4s default duration.
        center.tick(at(start, 3900));
        assert_eq!(center.len(), 1);

        // At the deadline the toast starts its exit transition.
        center.tick(at(start, 4000));
        assert_eq!(
            center.iter().find(|n| n.id() == id).unwrap().phase(),
            Phase::Removing
        );

        // Gone once the 300ms exit transition has played.
        center.tick(at(start, 4300));
        assert!(center.is_empty());
    }

    #[test]
    fn zero_duration_toast_persists_until_dismissed() {
        let mut center = NotificationCenter::new();
        let start = Instant::now();
        let id = center.show_at(
            Notification::error("pinned").duration(Duration::ZERO),
            start,
        );

        center.tick(at(start, 60_000));
        assert_eq!(center.len(), 1);

        center.dismiss_at(id, at(start, 60_000));
        center.tick(at(start, 60_300));
        assert!(center.is_empty());
    }

    #[test]
    fn dismiss_twice_is_a_noop_and_produces_one_removal() {
        let mut center = NotificationCenter::new();
        let start = Instant::now();
        let id = center.show_at(Notification::info("x"), start);

        assert!(center.dismiss_at(id, at(start, 100)));
        assert!(!center.dismiss_at(id, at(start, 150)));

        // The second dismiss must not have reset the exit deadline.
        center.tick(at(start, 400));
        assert!(center.is_empty());
    }

    #[test]
    fn dismiss_unknown_id_is_a_noop() {
        let mut center = NotificationCenter::new();
        let stray = Notification::info("never shown").id();
        assert!(!center.dismiss(stray));
    }

    #[test]
    fn dismiss_all_eventually_empties_the_list() {
        let mut center = NotificationCenter::new();
        let start = Instant::now();
        for i in 0..4 {
            center.show_at(
                Notification::info(format!("toast-{i}")).duration(Duration::ZERO),
                start,
            );
        }

        center.dismiss_all();
        assert_eq!(center.len(), 4);
        assert!(center.iter().all(|n| n.phase() == Phase::Removing));

        center.tick(Instant::now() + EXIT_DELAY);
        assert!(center.is_empty());
    }

    #[test]
    fn handle_message_dismisses_by_id() {
        let mut center = NotificationCenter::new();
        let start = Instant::now();
        let id = center.show_at(Notification::warning("careful"), start);

        center.handle_message(&Message::Dismiss(id));
        assert_eq!(
            center.iter().find(|n| n.id() == id).unwrap().phase(),
            Phase::Removing
        );
    }

    #[test]
    fn expired_sticky_check_does_not_affect_other_toasts() {
        let mut center = NotificationCenter::new();
        let start = Instant::now();
        let short = center.show_at(
            Notification::info("short").duration(Duration::from_millis(1000)),
            start,
        );
        let pinned = center.show_at(
            Notification::info("pinned").duration(Duration::ZERO),
            start,
        );

        center.tick(at(start, 1300));
        assert!(center.iter().all(|n| n.id() != short));
        assert!(center.iter().any(|n| n.id() == pinned));
    }
}
