// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::ItemId;
use crate::ui::{dialog, navbar, notifications, report, search};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Search(search::Message),
    Report(report::Message),
    Dialog(dialog::Event),
    Notification(notifications::Message),
    /// Periodic tick driving notification lifecycle deadlines.
    Tick(Instant),
    /// Escape closes the dialog while one is open.
    EscapePressed,
    /// Ask for confirmation before claiming an item.
    ClaimRequested(ItemId),
    /// Confirmation accepted; mark the item as claimed.
    ClaimConfirmed(ItemId),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `FINDERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
