// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the explorer and
//! settings views.
//!
//! The `App` struct wires together the domains (board, localization,
//! theming) and translates messages into side effects like config
//! persistence. Policy decisions (window sizing, what gets persisted and
//! when) stay close to the main update loop so user-facing behavior is
//! easy to audit.

mod message;
mod screen;
mod subscription;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::i18n::I18n;
use crate::ui::board;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::settings;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::{button, container, space, text, Column, Row};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state that bridges the explorer board,
/// localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    board: board::State,
    config: Config,
    config_dir: Option<PathBuf>,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("center", &self.board.selected_center())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 560;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 780;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 700;

/// Builds the window settings
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

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
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
            i18n: I18n::default(),
            screen: Screen::Explorer,
            board: board::State::default(),
            config: Config::default(),
            config_dir: None,
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    /// Initializes application state from `Flags` received from the
    /// launcher and the persisted configuration.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);

        if let Some(key) = config_warning {
            eprintln!("{}", i18n.tr(&key));
        }

        let board = board::State::new(config.board.center.unwrap_or_default());
        let theme_mode = config.general.theme_mode;

        let app = App {
            i18n,
            board,
            theme_mode,
            config,
            config_dir,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_drag_subscription(self.board.is_dragging())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Board(board_message) => {
                let persist = matches!(board_message, board::Message::CenterSelected(_));
                self.board.handle_message(board_message);
                if persist {
                    self.persist_preferences();
                }
            }
            Message::Settings(settings::Message::LanguageSelected(locale)) => {
                self.i18n.set_locale(locale);
                self.persist_preferences();
            }
            Message::Settings(settings::Message::ThemeModeSelected(mode)) => {
                self.theme_mode = mode;
                self.persist_preferences();
            }
            Message::SwitchScreen(target) => {
                self.screen = target;
            }
        }

        Task::none()
    }

    /// Writes the current UI preferences back to `settings.toml`. Drag
    /// gestures never land here; only explicit selections are persisted.
    fn persist_preferences(&mut self) {
        self.config.general.language = Some(self.i18n.current_locale().to_string());
        self.config.general.theme_mode = self.theme_mode;
        self.config.board.center = Some(self.board.selected_center());

        if let Err(err) = config::save_with_override(&self.config, self.config_dir.clone()) {
            eprintln!("Failed to save settings: {err}");
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let scheme = ColorScheme::from_mode(self.theme_mode);

        let (nav_label_key, nav_target) = match self.screen {
            Screen::Explorer => ("settings-button", Screen::Settings),
            Screen::Settings => ("back-button", Screen::Explorer),
        };

        let navbar = Row::new()
            .push(
                text(self.i18n.tr("window-title"))
                    .size(typography::TEXT_LG)
                    .color(scheme.text_primary),
            )
            .push(space::horizontal())
            .push(
                button(text(self.i18n.tr(nav_label_key)).size(typography::TEXT_SM))
                    .style(button::secondary)
                    .on_press(Message::SwitchScreen(nav_target)),
            )
            .align_y(iced::Alignment::Center)
            .width(Length::Fill);

        let content: Element<'_, Message> = match self.screen {
            Screen::Explorer => self.board.view(&self.i18n, &scheme).map(Message::Board),
            Screen::Settings => {
                settings::view(&self.i18n, self.theme_mode).map(Message::Settings)
            }
        };

        container(
            Column::new()
                .push(navbar)
                .push(content)
                .spacing(spacing::LG),
        )
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BOARD_SIZE;
    use crate::geometry::CenterKind;
    use iced::Point;
    use std::fs;
    use tempfile::tempdir;

    fn app_with_temp_config(config_root: &std::path::Path) -> App {
        let (app, _task) = App::new(Flags {
            lang: Some("en-US".to_string()),
            i18n_dir: None,
            config_dir: Some(config_root.to_string_lossy().into_owned()),
        });
        app
    }

    #[test]
    fn new_starts_on_the_explorer_screen_with_the_default_triangle() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let app = app_with_temp_config(temp_dir.path());

        assert_eq!(app.screen, Screen::Explorer);
        assert_eq!(app.board.selected_center(), CenterKind::Centroid);
        assert!(!app.board.is_dragging());
    }

    #[test]
    fn title_uses_the_selected_language() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let app = app_with_temp_config(temp_dir.path());

        assert_eq!(app.title(), "Triangle Centers Explorer");
    }

    #[test]
    fn drag_gesture_moves_exactly_one_vertex() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut app = app_with_temp_config(temp_dir.path());
        let before = *app.board.triangle().vertices();

        let _ = app.update(Message::Board(board::Message::VertexGrabbed(1)));
        let _ = app.update(Message::Board(board::Message::VertexDragged(Point::new(
            222.0, 111.0,
        ))));
        let _ = app.update(Message::Board(board::Message::DragEnded));

        assert_eq!(app.board.triangle().vertex(0), before[0]);
        assert_eq!(app.board.triangle().vertex(1), Point::new(222.0, 111.0));
        assert_eq!(app.board.triangle().vertex(2), before[2]);
        assert!(!app.board.is_dragging());
    }

    #[test]
    fn dragging_outside_the_board_clamps_the_vertex() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut app = app_with_temp_config(temp_dir.path());

        let _ = app.update(Message::Board(board::Message::VertexGrabbed(2)));
        let _ = app.update(Message::Board(board::Message::VertexDragged(Point::new(
            -500.0, 9000.0,
        ))));

        assert_eq!(app.board.triangle().vertex(2), Point::new(0.0, BOARD_SIZE));
    }

    #[test]
    fn drag_state_drives_the_window_listener_lifetime() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut app = app_with_temp_config(temp_dir.path());

        // The window-level listener is derived from the dragging flag on
        // every subscription pass; exercise both branches.
        assert!(!app.board.is_dragging());
        let _ = app.subscription();

        let _ = app.update(Message::Board(board::Message::VertexGrabbed(0)));
        assert!(app.board.is_dragging());
        let _ = app.subscription();

        let _ = app.update(Message::Board(board::Message::DragEnded));
        assert!(!app.board.is_dragging());
    }

    #[test]
    fn selecting_a_center_persists_it() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut app = app_with_temp_config(temp_dir.path());

        let _ = app.update(Message::Board(board::Message::CenterSelected(
            CenterKind::Incenter,
        )));

        let contents = fs::read_to_string(temp_dir.path().join("settings.toml"))
            .expect("config should be written");
        assert!(contents.contains("incenter"));
    }

    #[test]
    fn selecting_a_center_does_not_move_the_triangle() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut app = app_with_temp_config(temp_dir.path());
        let before = *app.board.triangle().vertices();

        let _ = app.update(Message::Board(board::Message::CenterSelected(
            CenterKind::Circumcenter,
        )));

        assert_eq!(app.board.triangle().vertices(), &before);
        assert_eq!(app.board.selected_center(), CenterKind::Circumcenter);
    }

    #[test]
    fn persisted_center_is_restored_on_the_next_start() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let mut app = app_with_temp_config(temp_dir.path());
        let _ = app.update(Message::Board(board::Message::CenterSelected(
            CenterKind::Orthocenter,
        )));
        drop(app);

        let app = app_with_temp_config(temp_dir.path());
        assert_eq!(app.board.selected_center(), CenterKind::Orthocenter);
    }

    #[test]
    fn language_selected_updates_config_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut app = app_with_temp_config(temp_dir.path());
        let target_locale: unic_langid::LanguageIdentifier = app
            .i18n
            .available_locales
            .iter()
            .find(|locale| locale.to_string() == "fr")
            .cloned()
            .unwrap_or_else(|| app.i18n.current_locale().clone());

        let _ = app.update(Message::Settings(settings::Message::LanguageSelected(
            target_locale.clone(),
        )));

        let config_path = temp_dir.path().join("settings.toml");
        assert!(config_path.exists());
        let contents = fs::read_to_string(config_path).expect("config should be readable");
        assert!(contents.contains(&target_locale.to_string()));
    }

    #[test]
    fn theme_mode_selection_changes_the_theme() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut app = app_with_temp_config(temp_dir.path());

        let _ = app.update(Message::Settings(settings::Message::ThemeModeSelected(
            ThemeMode::Light,
        )));
        assert!(matches!(app.theme(), Theme::Light));

        let _ = app.update(Message::Settings(settings::Message::ThemeModeSelected(
            ThemeMode::Dark,
        )));
        assert!(matches!(app.theme(), Theme::Dark));
    }

    #[test]
    fn switch_screen_toggles_between_explorer_and_settings() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut app = app_with_temp_config(temp_dir.path());

        let _ = app.update(Message::SwitchScreen(Screen::Settings));
        assert_eq!(app.screen, Screen::Settings);

        let _ = app.update(Message::SwitchScreen(Screen::Explorer));
        assert_eq!(app.screen, Screen::Explorer);
    }
}
