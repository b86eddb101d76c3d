// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language selection and theme mode.

use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Horizontal,
    widget::{button, Button, Column, Row, Text},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
}

pub fn view<'a>(i18n: &I18n, theme_mode: ThemeMode) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("settings-title")).size(typography::TEXT_TITLE);

    let mut language_selection_column = Column::new()
        .push(Text::new(i18n.tr("select-language-label")).size(typography::TEXT_MD))
        .spacing(spacing::XS);

    for locale in &i18n.available_locales {
        let display_name = locale.to_string(); // Fallback to string representation

        // Check for specific translation for the language name, e.g., "language-name-en-US"
        let translated_name_key = format!("language-name-{}", locale);
        let translated_name = i18n.tr(&translated_name_key);
        let button_text = if translated_name.starts_with("MISSING:") {
            display_name.clone() // Use raw locale if translation missing
        } else {
            format!("{} ({})", translated_name, display_name)
        };

        let is_current_locale = i18n.current_locale() == locale;
        let mut language_button = Button::new(Text::new(button_text))
            .on_press(Message::LanguageSelected(locale.clone()));

        if is_current_locale {
            language_button = language_button.style(button::primary); // Highlight current language
        } else {
            language_button = language_button.style(button::secondary);
        }

        language_selection_column = language_selection_column.push(language_button);
    }

    let mut theme_row = Row::new().spacing(spacing::XS);
    for mode in ThemeMode::ALL {
        let mut mode_button =
            Button::new(Text::new(i18n.tr(mode.i18n_key()))).on_press(Message::ThemeModeSelected(mode));

        if mode == theme_mode {
            mode_button = mode_button.style(button::primary);
        } else {
            mode_button = mode_button.style(button::secondary);
        }

        theme_row = theme_row.push(mode_button);
    }

    let theme_selection_column = Column::new()
        .push(Text::new(i18n.tr("theme-mode-label")).size(typography::TEXT_MD))
        .push(theme_row)
        .spacing(spacing::XS);

    Column::new()
        .push(title)
        .push(language_selection_column)
        .push(theme_selection_column)
        .spacing(spacing::LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}
