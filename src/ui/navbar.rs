// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with screen tabs and the theme mode toggle.

use crate::app::Screen;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext {
    pub screen: Screen,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    SwitchScreen(Screen),
    ToggleTheme,
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let brand = Text::new("Findery").size(typography::TITLE_SM);

    let tab = |label: &'static str, target: Screen| {
        button(Text::new(label).size(typography::BODY))
            .on_press(Message::SwitchScreen(target))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button_toggle(ctx.screen == target))
    };

    let theme_button = button(
        Text::new(format!("Theme: {}", ctx.theme_mode.label())).size(typography::CAPTION),
    )
    .on_press(Message::ToggleTheme)
    .padding([spacing::XS, spacing::SM])
    .style(styles::button_secondary);

    let bar = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(brand).padding([0.0, spacing::SM]))
        .push(tab("Search", Screen::Search))
        .push(tab("Report", Screen::Report))
        .push(Container::new(theme_button).width(Length::Fill).align_x(alignment::Horizontal::Right));

    Container::new(bar)
        .width(Length::Fill)
        .padding(spacing::SM)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_renders_for_both_screens() {
        for screen in [Screen::Search, Screen::Report] {
            let _element = view(ViewContext {
                screen,
                theme_mode: ThemeMode::System,
            });
        }
    }
}
