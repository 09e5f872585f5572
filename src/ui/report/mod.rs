// SPDX-License-Identifier: MPL-2.0
//! Report screen: the form for declaring a lost or found item.
//!
//! Validation feedback never lives inside the form itself; the host
//! application turns [`Event`] values into toasts or dialogs.

mod photo;

pub use photo::{load_preview, PhotoPreview, MAX_PHOTO_BYTES};

use crate::domain::{ItemDraft, ItemStatus};
use crate::error::PhotoError;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use chrono::NaiveDate;
use iced::widget::{button, pick_list, text_input, Column, Container, Image, Row, Scrollable, Text};
use iced::{alignment, Element, Length, Task};
use std::path::PathBuf;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Form state for the report screen.
#[derive(Debug)]
pub struct Report {
    name: String,
    description: String,
    location: String,
    contact: String,
    status: ItemStatus,
    date_input: String,
    photo: Option<PhotoPreview>,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            location: String::new(),
            contact: String::new(),
            status: ItemStatus::default(),
            date_input: chrono::Local::now().date_naive().format(DATE_FORMAT).to_string(),
            photo: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    DescriptionChanged(String),
    LocationChanged(String),
    ContactChanged(String),
    StatusPicked(ItemStatus),
    DateChanged(String),
    BrowsePhoto,
    PhotoPicked(Option<PathBuf>),
    PhotoLoaded(Result<PhotoPreview, PhotoError>),
    RemovePhoto,
    Submit,
}

/// Outcomes the host application reacts to.
#[derive(Debug)]
pub enum Event {
    None,
    /// The form validated; the draft is ready to be stored.
    Submitted(Box<ItemDraft>),
    /// A selected photo failed validation or decoding.
    PhotoRejected(PhotoError),
    /// Submission failed validation; the message is user-facing.
    Invalid(&'static str),
}

impl Report {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::NameChanged(value) => {
                self.name = value;
                (Event::None, Task::none())
            }
            Message::DescriptionChanged(value) => {
                self.description = value;
                (Event::None, Task::none())
            }
            Message::LocationChanged(value) => {
                self.location = value;
                (Event::None, Task::none())
            }
            Message::ContactChanged(value) => {
                self.contact = value;
                (Event::None, Task::none())
            }
            Message::StatusPicked(status) => {
                self.status = status;
                (Event::None, Task::none())
            }
            Message::DateChanged(value) => {
                self.date_input = value;
                (Event::None, Task::none())
            }
            Message::BrowsePhoto => {
                let task = Task::perform(
                    async {
                        rfd::AsyncFileDialog::new()
                            .set_title("Select a photo")
                            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
                            .pick_file()
                            .await
                            .map(|handle| handle.path().to_path_buf())
                    },
                    Message::PhotoPicked,
                );
                (Event::None, task)
            }
            Message::PhotoPicked(Some(path)) => {
                let task = Task::perform(photo::load_preview(path), Message::PhotoLoaded);
                (Event::None, task)
            }
            Message::PhotoPicked(None) => (Event::None, Task::none()),
            Message::PhotoLoaded(Ok(preview)) => {
                self.photo = Some(preview);
                (Event::None, Task::none())
            }
            Message::PhotoLoaded(Err(error)) => (Event::PhotoRejected(error), Task::none()),
            Message::RemovePhoto => {
                self.photo = None;
                (Event::None, Task::none())
            }
            Message::Submit => (self.submit(), Task::none()),
        }
    }

    /// Validates the fields and, on success, resets the form and hands
    /// back the draft.
    fn submit(&mut self) -> Event {
        let name = self.name.trim();
        let location = self.location.trim();
        let contact = self.contact.trim();

        if name.is_empty() || location.is_empty() || contact.is_empty() {
            return Event::Invalid("Please fill in all required fields");
        }

        let Ok(reported_on) = NaiveDate::parse_from_str(self.date_input.trim(), DATE_FORMAT) else {
            return Event::Invalid("Please enter a valid date (YYYY-MM-DD)");
        };

        let draft = ItemDraft {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            location: location.to_string(),
            contact: contact.to_string(),
            status: self.status,
            reported_on,
            photo: self.photo.as_ref().map(|preview| preview.path.clone()),
        };

        *self = Self::default();
        Event::Submitted(Box::new(draft))
    }

    #[must_use]
    pub fn photo(&self) -> Option<&PhotoPreview> {
        self.photo.as_ref()
    }

    pub fn view(&self) -> Element<'_, Message> {
        fn field<'a>(label: &'static str, input: Element<'a, Message>) -> Column<'a, Message> {
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(label).size(typography::CAPTION))
                .push(input)
        }

        let form = Column::new()
            .spacing(spacing::MD)
            .push(Text::new("Report an item").size(typography::TITLE_LG))
            .push(field(
                "Item name *",
                text_input("What was lost or found?", &self.name)
                    .on_input(Message::NameChanged)
                    .padding(spacing::XS)
                    .into(),
            ))
            .push(field(
                "Description",
                text_input("Color, brand, distinguishing marks", &self.description)
                    .on_input(Message::DescriptionChanged)
                    .padding(spacing::XS)
                    .into(),
            ))
            .push(field(
                "Location *",
                text_input("Where was it last seen?", &self.location)
                    .on_input(Message::LocationChanged)
                    .padding(spacing::XS)
                    .into(),
            ))
            .push(field(
                "Contact *",
                text_input("Email or phone number", &self.contact)
                    .on_input(Message::ContactChanged)
                    .padding(spacing::XS)
                    .into(),
            ))
            .push(field(
                "Status",
                pick_list(
                    &ItemStatus::REPORTABLE[..],
                    Some(self.status),
                    Message::StatusPicked,
                )
                .padding(spacing::XS)
                .into(),
            ))
            .push(field(
                "Date *",
                text_input("YYYY-MM-DD", &self.date_input)
                    .on_input(Message::DateChanged)
                    .padding(spacing::XS)
                    .into(),
            ))
            .push(self.photo_section())
            .push(
                Container::new(
                    button(Text::new("Submit report").size(typography::BODY))
                        .on_press(Message::Submit)
                        .padding([spacing::XS, spacing::LG])
                        .style(styles::button_primary),
                )
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
            );

        let panel = Container::new(form)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .padding(spacing::LG)
            .style(styles::card);

        Scrollable::new(
            Container::new(panel)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .padding(spacing::LG),
        )
        .into()
    }

    fn photo_section(&self) -> Element<'_, Message> {
        let mut column = Column::new()
            .spacing(spacing::XS)
            .push(Text::new("Photo").size(typography::CAPTION));

        match &self.photo {
            Some(preview) => {
                column = column
                    .push(
                        Image::new(preview.handle.clone())
                            .height(Length::Fixed(sizing::PHOTO_PREVIEW_HEIGHT)),
                    )
                    .push(
                        Row::new()
                            .spacing(spacing::SM)
                            .push(
                                button(Text::new("Replace").size(typography::CAPTION))
                                    .on_press(Message::BrowsePhoto)
                                    .padding([spacing::XXS, spacing::SM])
                                    .style(styles::button_secondary),
                            )
                            .push(
                                button(Text::new("Remove").size(typography::CAPTION))
                                    .on_press(Message::RemovePhoto)
                                    .padding([spacing::XXS, spacing::SM])
                                    .style(styles::button_secondary),
                            ),
                    );
            }
            None => {
                column = column.push(
                    button(Text::new("Attach a photo…").size(typography::BODY))
                        .on_press(Message::BrowsePhoto)
                        .padding([spacing::XS, spacing::MD])
                        .style(styles::button_secondary),
                );
            }
        }

        column.into()
    }
}
