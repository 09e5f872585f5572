// SPDX-License-Identifier: MPL-2.0
//! Search screen: query input, status filter, sort toggles and the
//! result list. Pressing a result asks the host to open its detail
//! dialog.

use crate::domain::{filter_and_sort, Item, ItemId, ItemStore, SortKey, StatusFilter};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, mouse_area, pick_list, text_input, Column, Container, Row, Scrollable, Text,
};
use iced::{alignment, Element, Length};

/// Search screen state. The item inventory itself lives with the host;
/// only the view parameters are kept here.
#[derive(Debug, Default)]
pub struct Search {
    query: String,
    filter: StatusFilter,
    sort: SortKey,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    FilterPicked(StatusFilter),
    SortPicked(SortKey),
    ItemPressed(ItemId),
}

/// Outcomes the host application reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// Open the detail dialog for this item.
    OpenItem(ItemId),
    /// The sort order changed; the host persists it.
    SortChanged(SortKey),
}

impl Search {
    #[must_use]
    pub fn new(sort: SortKey) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::QueryChanged(query) => {
                self.query = query;
                Event::None
            }
            Message::FilterPicked(filter) => {
                self.filter = filter;
                Event::None
            }
            Message::SortPicked(sort) => {
                self.sort = sort;
                Event::SortChanged(sort)
            }
            Message::ItemPressed(id) => Event::OpenItem(id),
        }
    }

    #[must_use]
    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn view<'a>(&'a self, store: &'a ItemStore) -> Element<'a, Message> {
        let results = filter_and_sort(store, &self.query, self.filter, self.sort);

        let controls = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(
                text_input("Search by name, description or location", &self.query)
                    .on_input(Message::QueryChanged)
                    .padding(spacing::XS)
                    .width(Length::Fill),
            )
            .push(
                pick_list(&StatusFilter::ALL[..], Some(self.filter), Message::FilterPicked)
                    .padding(spacing::XS),
            )
            .push(self.sort_toggle());

        let count = match results.len() {
            1 => "1 item found".to_string(),
            n => format!("{n} items found"),
        };

        let mut list = Column::new()
            .spacing(spacing::SM)
            .push(Text::new(count).size(typography::CAPTION));

        if results.is_empty() {
            list = list.push(
                Container::new(Text::new("No items match your search.").size(typography::BODY))
                    .width(Length::Fill)
                    .padding(spacing::XL)
                    .align_x(alignment::Horizontal::Center),
            );
        } else {
            for item in results {
                list = list.push(result_card(item));
            }
        }

        let content = Column::new()
            .spacing(spacing::MD)
            .push(Text::new("Lost and found").size(typography::TITLE_LG))
            .push(controls)
            .push(Scrollable::new(list).height(Length::Fill));

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG)
            .into()
    }

    fn sort_toggle(&self) -> Element<'_, Message> {
        let mut row = Row::new().spacing(spacing::XXS);
        for key in SortKey::ALL {
            row = row.push(
                button(Text::new(key.label()).size(typography::CAPTION))
                    .on_press(Message::SortPicked(key))
                    .padding([spacing::XS, spacing::SM])
                    .style(styles::button_toggle(self.sort == key)),
            );
        }
        row.into()
    }
}

fn result_card(item: &Item) -> Element<'_, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(Text::new(item.name.as_str()).size(typography::TITLE_SM)).width(Length::Fill))
        .push(Text::new(item.status.label()).size(typography::CAPTION));

    let meta = format!("{} · reported {}", item.location, item.reported_on.format("%Y-%m-%d"));

    let mut body = Column::new()
        .spacing(spacing::XXS)
        .push(header)
        .push(Text::new(meta).size(typography::CAPTION));

    if !item.description.is_empty() {
        body = body.push(Text::new(item.description.as_str()).size(typography::BODY));
    }

    let card = Container::new(body)
        .width(Length::Fill)
        .max_width(sizing::FORM_WIDTH + sizing::CARD_WIDTH)
        .padding(spacing::MD)
        .style(styles::card);

    mouse_area(card).on_press(Message::ItemPressed(item.id())).into()
}
