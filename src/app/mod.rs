// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens and the
//! overlay layers.
//!
//! The `App` struct wires together the domains (inventory, search, report)
//! and translates component events into side effects like config
//! persistence, dialog prompts, or toast notifications. Policy decisions
//! (window size, persistence format, claim confirmation) stay close to the
//! main update loop so user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::domain::{Item, ItemId, ItemStore};
use crate::ui::dialog::{Content, Dialog, DialogButton};
use crate::ui::notifications::{Notification, NotificationCenter};
use crate::ui::report::{self, Report};
use crate::ui::search::{self, Search};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 600;
pub const MIN_WINDOW_HEIGHT: u32 = 500;

/// Root Iced application state bridging the screens, the modal dialog,
/// and toast notifications.
#[derive(Debug)]
pub struct App {
    screen: Screen,
    config: Config,
    theme_mode: ThemeMode,
    store: ItemStore,
    search: Search,
    report: Report,
    dialog: Dialog<Message>,
    notifications: NotificationCenter,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    config::init_cli_override(flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::Search,
            config: Config::default(),
            theme_mode: ThemeMode::System,
            store: ItemStore::with_samples(),
            search: Search::new(Config::default().sort_order.unwrap_or_default()),
            report: Report::new(),
            dialog: Dialog::new(),
            notifications: NotificationCenter::new(),
        }
    }
}

impl App {
    /// Initializes application state from the persisted config.
    fn new(_flags: Flags) -> (Self, Task<Message>) {
        let mut app = App::default();

        match config::load() {
            Ok(loaded) => {
                app.theme_mode = loaded.theme_mode;
                app.search = Search::new(loaded.sort_order.unwrap_or_default());
                app.config = loaded;
            }
            Err(_) => {
                app.notifications.show(Notification::warning(
                    "Could not read settings, using defaults",
                ));
            }
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Findery")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_escape_subscription(self.dialog.is_open()),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(crate::ui::navbar::Message::SwitchScreen(target)) => {
                self.screen = target;
                Task::none()
            }
            Message::Navbar(crate::ui::navbar::Message::ToggleTheme) => {
                self.theme_mode = self.theme_mode.next();
                self.config.theme_mode = self.theme_mode;
                self.persist_config();
                Task::none()
            }
            Message::Search(search_message) => {
                match self.search.update(search_message) {
                    search::Event::None => {}
                    search::Event::OpenItem(id) => self.open_item_dialog(id),
                    search::Event::SortChanged(key) => {
                        self.config.sort_order = Some(key);
                        self.persist_config();
                    }
                }
                Task::none()
            }
            Message::Report(report_message) => {
                let (event, task) = self.report.update(report_message);
                match event {
                    report::Event::None => {}
                    report::Event::Submitted(draft) => {
                        self.store.insert(Item::from_draft(*draft));
                        self.notifications
                            .show(Notification::success("Report submitted. Thank you!"));
                        self.screen = Screen::Search;
                    }
                    report::Event::PhotoRejected(error) => {
                        self.notifications
                            .show(Notification::error(error.user_message()));
                    }
                    report::Event::Invalid(message) => {
                        self.notifications.show(Notification::error(message));
                    }
                }
                task.map(Message::Report)
            }
            Message::Dialog(event) => {
                // The dialog closes itself first; a button may hand back a
                // host message to run as a follow-up.
                if let Some(follow_up) = self.dialog.update(event) {
                    return self.update(follow_up);
                }
                Task::none()
            }
            Message::EscapePressed => {
                self.dialog.close();
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
            Message::ClaimRequested(id) => {
                let name = self
                    .store
                    .get(id)
                    .map(|item| item.name.clone())
                    .unwrap_or_default();
                self.dialog.confirm(
                    "Claim item",
                    format!("Mark \"{name}\" as claimed? This cannot be undone."),
                    Message::ClaimConfirmed(id),
                    None,
                );
                Task::none()
            }
            Message::ClaimConfirmed(id) => {
                if self.store.mark_claimed(id) {
                    self.notifications
                        .show(Notification::success("Item marked as claimed"));
                } else {
                    self.notifications
                        .show(Notification::error("This item no longer exists"));
                }
                Task::none()
            }
        }
    }

    /// Opens the detail dialog for an item. Unclaimed items get a
    /// "Mark as claimed" action in the footer.
    fn open_item_dialog(&mut self, id: ItemId) {
        let Some(item) = self.store.get(id) else {
            self.notifications
                .show(Notification::error("This item no longer exists"));
            return;
        };

        let mut body = format!(
            "Status: {}\nLocation: {}\nReported: {}\nContact: {}",
            item.status,
            item.location,
            item.reported_on.format("%Y-%m-%d"),
            item.contact,
        );
        if !item.description.is_empty() {
            body.push_str("\n\n");
            body.push_str(&item.description);
        }

        let footer = if item.is_claimed() {
            Content::Buttons(vec![DialogButton::primary("Close", None)])
        } else {
            Content::Buttons(vec![
                DialogButton::secondary("Close", None),
                DialogButton::primary("Mark as claimed", Some(Message::ClaimRequested(id))),
            ])
        };

        self.dialog
            .open(item.name.clone(), Content::Text(body), Some(footer));
    }

    fn persist_config(&mut self) {
        if config::save(&self.config).is_err() {
            self.notifications
                .show(Notification::warning("Could not save settings"));
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            theme_mode: self.theme_mode,
            store: &self.store,
            search: &self.search,
            report: &self.report,
            dialog: &self.dialog,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SortKey;
    use crate::ui::dialog;
    use crate::ui::navbar;
    use std::fs;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var(config::ENV_CONFIG_DIR).ok();
        std::env::set_var(config::ENV_CONFIG_DIR, temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var(config::ENV_CONFIG_DIR, value);
        } else {
            std::env::remove_var(config::ENV_CONFIG_DIR);
        }
    }

    fn first_item_id(app: &App) -> ItemId {
        app.store.iter().next().expect("sample items").id()
    }

    #[test]
    fn new_starts_on_search_with_sample_items() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.screen, Screen::Search);
            assert!(!app.store.is_empty());
            assert!(!app.dialog.is_open());
        });
    }

    #[test]
    fn navbar_switches_screens() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::SwitchScreen(Screen::Report)));
        assert_eq!(app.screen, Screen::Report);
    }

    #[test]
    fn theme_toggle_persists_the_new_mode() {
        with_temp_config_dir(|config_root| {
            let mut app = App::default();
            assert_eq!(app.theme_mode, ThemeMode::System);

            let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));

            assert_eq!(app.theme_mode, ThemeMode::Light);
            let contents =
                fs::read_to_string(config_root.join("settings.toml")).expect("config written");
            assert!(contents.contains("light"));
        });
    }

    #[test]
    fn sort_change_is_persisted() {
        with_temp_config_dir(|config_root| {
            let mut app = App::default();
            let _ = app.update(Message::Search(search::Message::SortPicked(SortKey::Name)));

            let contents =
                fs::read_to_string(config_root.join("settings.toml")).expect("config written");
            assert!(contents.contains("name"));
        });
    }

    #[test]
    fn pressing_an_item_opens_its_detail_dialog() {
        let mut app = App::default();
        let id = first_item_id(&app);

        let _ = app.update(Message::Search(search::Message::ItemPressed(id)));

        assert!(app.dialog.is_open());
        assert_eq!(app.dialog.title(), app.store.get(id).unwrap().name);
    }

    #[test]
    fn escape_closes_the_dialog() {
        let mut app = App::default();
        let id = first_item_id(&app);
        let _ = app.update(Message::Search(search::Message::ItemPressed(id)));
        assert!(app.dialog.is_open());

        let _ = app.update(Message::EscapePressed);
        assert!(!app.dialog.is_open());
    }

    #[test]
    fn claim_flow_requires_confirmation() {
        with_temp_config_dir(|_| {
            let mut app = App::default();
            let id = first_item_id(&app);

            // Asking to claim opens the confirmation, nothing changes yet.
            let _ = app.update(Message::ClaimRequested(id));
            assert!(app.dialog.is_open());
            assert!(!app.store.get(id).unwrap().is_claimed());

            // Footer layout of the canned confirm flow is [Cancel, Confirm].
            let _ = app.update(Message::Dialog(dialog::Event::FooterButtonPressed(1)));

            assert!(!app.dialog.is_open());
            assert!(app.store.get(id).unwrap().is_claimed());
            assert!(app.notifications.has_notifications());
        });
    }

    #[test]
    fn cancelling_the_claim_leaves_the_item_untouched() {
        let mut app = App::default();
        let id = first_item_id(&app);

        let _ = app.update(Message::ClaimRequested(id));
        let _ = app.update(Message::Dialog(dialog::Event::FooterButtonPressed(0)));

        assert!(!app.dialog.is_open());
        assert!(!app.store.get(id).unwrap().is_claimed());
    }

    #[test]
    fn claimed_item_dialog_has_no_claim_action() {
        let mut app = App::default();
        let id = first_item_id(&app);
        app.store.mark_claimed(id);

        let _ = app.update(Message::Search(search::Message::ItemPressed(id)));

        match app.dialog.footer() {
            Some(Content::Buttons(buttons)) => assert_eq!(buttons.len(), 1),
            other => panic!("expected a single close button, got {other:?}"),
        }
    }

    #[test]
    fn invalid_report_submission_shows_an_error_toast() {
        let mut app = App::default();
        let _ = app.update(Message::Report(report::Message::Submit));

        assert!(app.notifications.has_notifications());
        assert_eq!(app.store.len(), ItemStore::with_samples().len());
    }

    #[test]
    fn valid_report_submission_adds_the_item_and_returns_to_search() {
        let mut app = App::default();
        app.screen = Screen::Report;
        let before = app.store.len();

        let _ = app.update(Message::Report(report::Message::NameChanged("Gloves".into())));
        let _ = app.update(Message::Report(report::Message::LocationChanged(
            "Bus stop".into(),
        )));
        let _ = app.update(Message::Report(report::Message::ContactChanged(
            "kim@example.com".into(),
        )));
        let _ = app.update(Message::Report(report::Message::Submit));

        assert_eq!(app.store.len(), before + 1);
        assert_eq!(app.screen, Screen::Search);
        assert!(app.store.iter().any(|item| item.name == "Gloves"));
    }

    #[test]
    fn backdrop_press_closes_the_detail_dialog() {
        let mut app = App::default();
        let id = first_item_id(&app);
        let _ = app.update(Message::Search(search::Message::ItemPressed(id)));

        let _ = app.update(Message::Dialog(dialog::Event::BackdropPressed));
        assert!(!app.dialog.is_open());
    }
}
