// SPDX-License-Identifier: MPL-2.0
//! Modal overlay rendering: dimmed backdrop plus centered dialog surface.

use super::controller::{ButtonRole, Content, Dialog, DialogButton, Event};
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, container, mouse_area, opaque, Column, Container, Row, Text};
use iced::{alignment, Background, Color, Element, Length, Theme};

/// Renders the full-screen dialog overlay. The caller stacks this above
/// the current screen while the dialog is open.
pub fn view<M: Clone>(dialog: &Dialog<M>) -> Element<'_, Event> {
    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(Text::new(dialog.title()).size(typography::TITLE_MD))
                .width(Length::Fill),
        )
        .push(
            button(Text::new("×").size(sizing::ICON_MD))
                .on_press(Event::CloseRequested)
                .padding(spacing::XXS)
                .style(styles::button_bare),
        );

    let mut surface = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(render_content(dialog.body(), Event::BodyButtonPressed));

    // A `None` footer hides the footer row entirely.
    if let Some(footer) = dialog.footer() {
        surface = surface.push(render_content(footer, Event::FooterButtonPressed));
    }

    let card = Container::new(surface)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(surface_style);

    // The inner `opaque` captures clicks on the surface so they never
    // reach the backdrop; the outer one blocks the underlying screen.
    let backdrop = mouse_area(center(opaque(card))).on_press(Event::BackdropPressed);

    opaque(
        container(backdrop)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(backdrop_style),
    )
}

fn render_content<M: Clone>(
    content: &Content<M>,
    on_press: fn(usize) -> Event,
) -> Element<'_, Event> {
    match content {
        Content::Text(text) => Text::new(text.as_str()).size(typography::BODY).into(),
        Content::Buttons(buttons) => {
            let mut row = Row::new().spacing(spacing::MD);
            for (index, DialogButton { label, role, .. }) in buttons.iter().enumerate() {
                let style = match role {
                    ButtonRole::Primary => styles::button_primary,
                    ButtonRole::Secondary => styles::button_secondary,
                };
                row = row.push(
                    button(Text::new(label.as_str()).size(typography::BODY))
                        .on_press(on_press(index))
                        .padding([spacing::XS, spacing::MD])
                        .style(style),
                );
            }
            Container::new(row)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .into()
        }
    }
}

fn surface_style(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(Background::Color(base.color)),
        border: iced::Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn backdrop_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_is_semi_transparent() {
        let style = backdrop_style(&Theme::Dark);
        match style.background {
            Some(Background::Color(color)) => {
                assert!(color.a > 0.0 && color.a < 1.0);
            }
            _ => panic!("expected a color backdrop"),
        }
    }

    #[test]
    fn view_renders_open_dialog_without_panicking() {
        let mut dialog: Dialog<()> = Dialog::new();
        dialog.alert("Notice", "All good", None);
        let _element = view(&dialog);
    }
}
