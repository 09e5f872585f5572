// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts appear as small cards with a kind-colored accent border, an icon
//! glyph, a title/message column, and a dismiss button.

use super::center::{Message, NotificationCenter};
use super::notification::{Notification, Phase};
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(notification: &Notification) -> Element<'_, Message> {
        let kind = notification.notification_kind();
        let accent_color = kind.color();

        // An entering toast renders in its hidden initial state so the
        // transition to visible is observable.
        let alpha = match notification.phase() {
            Phase::Entering => opacity::TRANSPARENT,
            Phase::Visible => opacity::OPAQUE,
            Phase::Removing => opacity::OVERLAY_SUBTLE,
        };

        let icon_widget = Text::new(kind.glyph())
            .size(sizing::ICON_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(Color { a: alpha, ..accent_color }),
            });

        let title_widget = Text::new(notification.display_title())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(Color {
                    a: alpha,
                    ..theme.palette().text
                }),
            });

        let message_widget = Text::new(notification.message())
            .size(typography::CAPTION)
            .style(move |theme: &Theme| text::Style {
                color: Some(Color {
                    a: alpha,
                    ..theme.palette().text
                }),
            });

        let dismiss_button = button(Text::new("×").size(sizing::ICON_SM))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(styles::button_bare);

        // Layout: [icon] [title / message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .width(Length::Fill)
                    .push(title_widget)
                    .push(message_widget),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, alpha))
            .into()
    }

    /// Renders the toast overlay with all active notifications.
    ///
    /// Positions toasts in the top-right corner, stacked vertically.
    pub fn view_overlay(center: &NotificationCenter) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = center.iter().map(Self::view).collect();

        if toasts.is_empty() {
            // Empty container that takes no space.
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding(spacing::MD)
                .into()
        }
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color { a: alpha, ..bg_color })),
        border: iced::Border {
            color: Color {
                a: alpha,
                ..accent_color
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
