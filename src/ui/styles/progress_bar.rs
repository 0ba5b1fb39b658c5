// SPDX-License-Identifier: MPL-2.0
//! Progress bar styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::progress_bar;
use iced::{Background, Border, Theme};

/// Horizontal probability bar in the prediction breakdown.
pub fn prediction(theme: &Theme) -> progress_bar::Style {
    progress_bar::Style {
        background: Background::Color(theme.extended_palette().background.strong.color),
        bar: Background::Color(palette::PRIMARY_500),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
    }
}
