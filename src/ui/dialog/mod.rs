// SPDX-License-Identifier: MPL-2.0
//! Reusable modal dialog.
//!
//! A single dialog surface per application: opening while already open
//! overwrites the displayed content in place, and closing only hides it.
//! Besides free-form content, two canned flows are provided: a two-button
//! confirmation and a single-button alert. Button callbacks are expressed
//! as host messages emitted after the dialog has closed, so exactly one
//! fires per interaction.
//!
//! Dismissal routes: the × control in the header, a click on the backdrop
//! (clicks on the dialog surface itself are captured and never close), and
//! the Escape key (wired through the application's event subscription).

mod controller;
mod view;

pub use controller::{ButtonRole, Content, Dialog, DialogButton, Event};
pub use view::view;
