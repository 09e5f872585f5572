// SPDX-License-Identifier: MPL-2.0
//! Top-level view composition: navbar, current screen, and the overlay
//! layers (dialog, toasts) stacked above it.

use super::{Message, Screen};
use crate::domain::ItemStore;
use crate::ui::dialog::{self, Dialog};
use crate::ui::navbar;
use crate::ui::notifications::{NotificationCenter, Toast};
use crate::ui::report::Report;
use crate::ui::search::Search;
use crate::ui::theming::ThemeMode;
use iced::widget::{Column, Stack};
use iced::{Element, Length};

/// Read-only state snapshot handed to the view layer.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub theme_mode: ThemeMode,
    pub store: &'a ItemStore,
    pub search: &'a Search,
    pub report: &'a Report,
    pub dialog: &'a Dialog<Message>,
    pub notifications: &'a NotificationCenter,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = match ctx.screen {
        Screen::Search => ctx.search.view(ctx.store).map(Message::Search),
        Screen::Report => ctx.report.view().map(Message::Report),
    };

    let navbar = navbar::view(navbar::ViewContext {
        screen: ctx.screen,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let base = Column::new().push(navbar).push(content);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if ctx.dialog.is_open() {
        layers = layers.push(dialog::view(ctx.dialog).map(Message::Dialog));
    }

    if ctx.notifications.has_notifications() {
        layers = layers.push(Toast::view_overlay(ctx.notifications).map(Message::Notification));
    }

    layers.into()
}
