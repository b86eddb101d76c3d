// SPDX-License-Identifier: MPL-2.0
//! Selector, coordinate readout, and explanatory text for the board.

use crate::geometry::CenterKind;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theme;
use crate::ui::theming::ColorScheme;
use iced::widget::{container, pick_list, text, Column, Row};
use iced::{Alignment, Element, Length, Point};
use std::fmt;

use super::Message;

/// Wrapper pairing a center kind with its localized label, so the pick
/// list can display translated names.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterOption {
    pub kind: CenterKind,
    label: String,
}

impl CenterOption {
    fn new(kind: CenterKind, i18n: &I18n) -> Self {
        Self {
            kind,
            label: i18n.tr(kind.name_key()),
        }
    }
}

impl fmt::Display for CenterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// The center-kind picker row.
pub fn selector<'a>(i18n: &I18n, selected: CenterKind) -> Element<'a, Message> {
    let options: Vec<CenterOption> = CenterKind::ALL
        .iter()
        .map(|kind| CenterOption::new(*kind, i18n))
        .collect();

    let picker = pick_list(options, Some(CenterOption::new(selected, i18n)), |option| {
        Message::CenterSelected(option.kind)
    })
    .text_size(typography::TEXT_MD);

    Row::new()
        .push(text(i18n.tr("center-picker-label")).size(typography::TEXT_MD))
        .push(picker)
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .into()
}

/// The two-line coordinate readout for the selected center.
pub fn readout<'a>(
    i18n: &I18n,
    kind: CenterKind,
    position: Point,
    scheme: &ColorScheme,
) -> Element<'a, Message> {
    let title = text(format!(
        "{} {}",
        i18n.tr(kind.name_key()),
        i18n.tr("center-coordinates-label")
    ))
    .size(typography::TEXT_MD)
    .color(scheme.text_primary);

    let value = if position.x.is_finite() && position.y.is_finite() {
        text(format!("({:.2}, {:.2})", position.x, position.y))
            .size(typography::TEXT_LG)
            .color(scheme.brand_primary)
    } else {
        text(i18n.tr("center-undefined"))
            .size(typography::TEXT_MD)
            .color(scheme.text_secondary)
    };

    Column::new()
        .push(title)
        .push(value)
        .spacing(spacing::XXS)
        .align_x(Alignment::Center)
        .into()
}

/// The explanatory paragraph for the selected center kind.
pub fn description<'a>(
    i18n: &I18n,
    kind: CenterKind,
    scheme: &ColorScheme,
) -> Element<'a, Message> {
    container(text(i18n.tr(kind.description_key())).size(typography::TEXT_SM))
        .style(theme::description_panel_style(scheme))
        .padding(spacing::MD)
        .width(Length::Fill)
        .into()
}
