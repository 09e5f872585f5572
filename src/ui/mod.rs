// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`search`] - Inventory search with live filtering and sorting
//! - [`report`] - Report form with photo attachment and validation
//!
//! # Shared Infrastructure
//!
//! - [`dialog`] - Reusable modal dialog (free-form, confirm, alert)
//! - [`notifications`] - Toast notification center for user feedback
//! - [`navbar`] - Top navigation bar with screen switching
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod dialog;
pub mod navbar;
pub mod notifications;
pub mod report;
pub mod search;
pub mod styles;
pub mod theming;
