// SPDX-License-Identifier: MPL-2.0
//! Dialog state machine and content model.

/// Visual role of a dialog button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRole {
    Primary,
    Secondary,
}

/// A button rendered inside dialog content.
///
/// `on_press` is the host message emitted after the dialog closes; `None`
/// means the button only closes the dialog.
#[derive(Debug, Clone)]
pub struct DialogButton<M> {
    pub label: String,
    pub role: ButtonRole,
    pub on_press: Option<M>,
}

impl<M> DialogButton<M> {
    pub fn primary(label: impl Into<String>, on_press: Option<M>) -> Self {
        Self {
            label: label.into(),
            role: ButtonRole::Primary,
            on_press,
        }
    }

    pub fn secondary(label: impl Into<String>, on_press: Option<M>) -> Self {
        Self {
            label: label.into(),
            role: ButtonRole::Secondary,
            on_press,
        }
    }
}

/// Dialog body or footer content: either plain text (never interpreted as
/// markup) or a row of buttons.
#[derive(Debug, Clone)]
pub enum Content<M> {
    Text(String),
    Buttons(Vec<DialogButton<M>>),
}

/// Interaction events produced by the dialog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The × control in the header was pressed.
    CloseRequested,
    /// The dimmed area outside the dialog surface was pressed.
    BackdropPressed,
    /// A button inside the body content was pressed.
    BodyButtonPressed(usize),
    /// A button inside the footer content was pressed.
    FooterButtonPressed(usize),
}

/// The modal dialog: one instance per application, only ever hidden, never
/// destroyed.
#[derive(Debug)]
pub struct Dialog<M> {
    is_open: bool,
    title: String,
    body: Content<M>,
    footer: Option<Content<M>>,
}

impl<M> Default for Dialog<M> {
    fn default() -> Self {
        Self {
            is_open: false,
            title: String::new(),
            body: Content::Text(String::new()),
            footer: None,
        }
    }
}

impl<M: Clone> Dialog<M> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the dialog with the given content, replacing whatever was
    /// displayed before. A `None` footer hides the footer row entirely.
    pub fn open(&mut self, title: impl Into<String>, body: Content<M>, footer: Option<Content<M>>) {
        self.title = title.into();
        self.body = body;
        self.footer = footer;
        self.is_open = true;
    }

    /// Hides the dialog. Content is retained until the next `open`.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Canned confirmation flow: Cancel/Confirm footer. Confirming closes
    /// the dialog and emits `on_confirm`; cancelling closes and emits
    /// `on_cancel` if provided.
    pub fn confirm(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        on_confirm: M,
        on_cancel: Option<M>,
    ) {
        let footer = Content::Buttons(vec![
            DialogButton::secondary("Cancel", on_cancel),
            DialogButton::primary("Confirm", Some(on_confirm)),
        ]);
        self.open(title, Content::Text(message.into()), Some(footer));
    }

    /// Canned alert flow: a single OK button that closes the dialog and
    /// emits `on_close` if provided.
    pub fn alert(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        on_close: Option<M>,
    ) {
        let footer = Content::Buttons(vec![DialogButton::primary("OK", on_close)]);
        self.open(title, Content::Text(message.into()), Some(footer));
    }

    /// Routes an interaction event. Every path closes the dialog first;
    /// button presses then hand back the host message to emit, so at most
    /// one callback fires per interaction.
    pub fn update(&mut self, event: Event) -> Option<M> {
        match event {
            Event::CloseRequested | Event::BackdropPressed => {
                self.close();
                None
            }
            Event::BodyButtonPressed(index) => self.press_button(index, true),
            Event::FooterButtonPressed(index) => self.press_button(index, false),
        }
    }

    fn press_button(&mut self, index: usize, in_body: bool) -> Option<M> {
        let content = if in_body {
            Some(&self.body)
        } else {
            self.footer.as_ref()
        };
        let message = match content {
            Some(Content::Buttons(buttons)) => {
                buttons.get(index).and_then(|b| b.on_press.clone())
            }
            _ => None,
        };
        self.close();
        message
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body(&self) -> &Content<M> {
        &self.body
    }

    /// Returns the footer content, or `None` when the footer row is hidden.
    #[must_use]
    pub fn footer(&self) -> Option<&Content<M>> {
        self.footer.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum HostMessage {
        Confirmed,
        Cancelled,
        Acknowledged,
    }

    #[test]
    fn starts_closed() {
        let dialog: Dialog<HostMessage> = Dialog::new();
        assert!(!dialog.is_open());
    }

    #[test]
    fn open_sets_content_and_close_hides() {
        let mut dialog: Dialog<HostMessage> = Dialog::new();
        dialog.open("Details", Content::Text("body".into()), None);

        assert!(dialog.is_open());
        assert_eq!(dialog.title(), "Details");
        assert!(dialog.footer().is_none());

        dialog.close();
        assert!(!dialog.is_open());
    }

    #[test]
    fn reopen_replaces_body_and_footer_in_place() {
        let mut dialog: Dialog<HostMessage> = Dialog::new();
        dialog.open("First", Content::Text("one".into()), None);
        assert!(dialog.footer().is_none());

        dialog.open(
            "Second",
            Content::Text("two".into()),
            Some(Content::Text("footer".into())),
        );

        assert!(dialog.is_open());
        assert_eq!(dialog.title(), "Second");
        match dialog.body() {
            Content::Text(text) => assert_eq!(text, "two"),
            Content::Buttons(_) => panic!("expected text body"),
        }
        assert!(dialog.footer().is_some());
    }

    #[test]
    fn backdrop_and_close_control_both_close_without_emitting() {
        let mut dialog: Dialog<HostMessage> = Dialog::new();

        dialog.open("A", Content::Text(String::new()), None);
        assert_eq!(dialog.update(Event::BackdropPressed), None);
        assert!(!dialog.is_open());

        dialog.open("B", Content::Text(String::new()), None);
        assert_eq!(dialog.update(Event::CloseRequested), None);
        assert!(!dialog.is_open());
    }

    #[test]
    fn confirm_emits_exactly_the_confirm_message() {
        let mut dialog: Dialog<HostMessage> = Dialog::new();
        dialog.confirm(
            "Delete item",
            "Delete?",
            HostMessage::Confirmed,
            Some(HostMessage::Cancelled),
        );

        // Footer layout is [Cancel, Confirm].
        let emitted = dialog.update(Event::FooterButtonPressed(1));
        assert_eq!(emitted, Some(HostMessage::Confirmed));
        assert!(!dialog.is_open());
    }

    #[test]
    fn cancel_emits_the_cancel_message_only() {
        let mut dialog: Dialog<HostMessage> = Dialog::new();
        dialog.confirm(
            "Delete item",
            "Delete?",
            HostMessage::Confirmed,
            Some(HostMessage::Cancelled),
        );

        let emitted = dialog.update(Event::FooterButtonPressed(0));
        assert_eq!(emitted, Some(HostMessage::Cancelled));
        assert!(!dialog.is_open());
    }

    #[test]
    fn cancel_without_callback_just_closes() {
        let mut dialog: Dialog<HostMessage> = Dialog::new();
        dialog.confirm("T", "M", HostMessage::Confirmed, None);

        assert_eq!(dialog.update(Event::FooterButtonPressed(0)), None);
        assert!(!dialog.is_open());
    }

    #[test]
    fn alert_ok_closes_then_emits() {
        let mut dialog: Dialog<HostMessage> = Dialog::new();
        dialog.alert("Notice", "Done", Some(HostMessage::Acknowledged));

        let emitted = dialog.update(Event::FooterButtonPressed(0));
        assert_eq!(emitted, Some(HostMessage::Acknowledged));
        assert!(!dialog.is_open());
    }

    #[test]
    fn out_of_range_button_press_closes_without_emitting() {
        let mut dialog: Dialog<HostMessage> = Dialog::new();
        dialog.alert("Notice", "Done", Some(HostMessage::Acknowledged));

        assert_eq!(dialog.update(Event::FooterButtonPressed(7)), None);
        assert!(!dialog.is_open());
    }
}
