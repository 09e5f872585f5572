// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, its `Kind`, and the
//! lifecycle `Phase` a toast moves through between `show` and removal.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Delay between insertion and the visible state, so the entrance
/// transition has an observable initial frame.
pub const ENTRANCE_DELAY: Duration = Duration::from_millis(10);

/// How long a dismissed toast stays around while its exit transition plays.
pub const EXIT_DELAY: Duration = Duration::from_millis(300);

/// Auto-dismiss duration applied when the caller does not pick one.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(4000);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind determines the accent color, icon glyph, and default title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Kind {
    /// Parses a kind name; anything unknown falls back to `Info`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Kind::Success,
            "error" => Kind::Error,
            "warning" => Kind::Warning,
            _ => Kind::Info,
        }
    }

    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Info => palette::INFO_500,
        }
    }

    /// Returns the icon glyph rendered next to the message.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Kind::Success => "✓",
            Kind::Error => "✕",
            Kind::Warning => "⚠",
            Kind::Info => "ℹ",
        }
    }

    /// Returns the title used when the caller does not supply one.
    #[must_use]
    pub fn default_title(self) -> &'static str {
        match self {
            Kind::Success => "Success",
            Kind::Error => "Error",
            Kind::Warning => "Warning",
            Kind::Info => "Information",
        }
    }
}

/// Lifecycle phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Just inserted; rendered in its hidden initial state.
    Entering,
    /// Fully shown.
    Visible,
    /// Exit transition playing; removed once it finishes.
    Removing,
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    message: String,
    /// Custom title; `None` falls back to the kind default.
    title: Option<String>,
    /// Auto-dismiss duration. `Duration::ZERO` means the toast persists
    /// until it is dismissed manually.
    duration: Duration,
    created_at: Instant,
    phase: Phase,
    phase_since: Instant,
}

impl Notification {
    /// Creates a notification with the default kind (info), default
    /// duration, and no custom title.
    pub fn new(message: impl Into<String>) -> Self {
        let now = Instant::now();
        Self {
            id: NotificationId::new(),
            kind: Kind::default(),
            message: message.into(),
            title: None,
            duration: DEFAULT_DURATION,
            created_at: now,
            phase: Phase::Entering,
            phase_since: now,
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).kind(Kind::Success)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).kind(Kind::Error)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).kind(Kind::Warning)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message).kind(Kind::Info)
    }

    #[must_use]
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets a custom title, overriding the kind default. An empty title is
    /// treated as absent.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = if title.is_empty() { None } else { Some(title) };
        self
    }

    /// Sets the auto-dismiss duration. `Duration::ZERO` disables
    /// auto-dismissal entirely.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn notification_kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the effective title: the custom one, or the kind default.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(self.kind.default_title())
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.duration.is_zero()
    }

    pub(super) fn set_phase(&mut self, phase: Phase, now: Instant) {
        self.phase = phase;
        self.phase_since = now;
    }

    pub(super) fn phase_elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.phase_since)
    }

    /// Whether the auto-dismiss deadline (measured from `show`) has passed.
    pub(super) fn is_expired(&self, now: Instant) -> bool {
        !self.is_sticky() && now.saturating_duration_since(self.created_at) >= self.duration
    }
}
