// SPDX-License-Identifier: MPL-2.0

/// Top-level screens reachable from the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Browse and filter the reported items.
    #[default]
    Search,
    /// Report a lost or found item.
    Report,
}
