// SPDX-License-Identifier: MPL-2.0
//! `findery` is a small lost & found desk application built with the Iced
//! GUI framework.
//!
//! It lets staff report items that were handed in or declared missing and
//! search the current inventory. User feedback flows through a toast
//! notification center and a reusable modal dialog, both owned by the
//! application state rather than any global.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;
