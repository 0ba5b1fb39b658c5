// SPDX-License-Identifier: MPL-2.0
//! Guidance card showing which kind of slice the models expect.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Column, Container, Row, Text},
    Color, Element, Length,
};

struct Example {
    badge_key: &'static str,
    caption_key: &'static str,
    tile_key: &'static str,
    glyph: &'static str,
    accent: Color,
}

const EXAMPLES: [Example; 2] = [
    Example {
        badge_key: "examples-supported",
        caption_key: "examples-supported-caption",
        tile_key: "examples-supported-tile",
        glyph: "✓",
        accent: palette::SUCCESS_500,
    },
    Example {
        badge_key: "examples-unsupported",
        caption_key: "examples-unsupported-caption",
        tile_key: "examples-unsupported-tile",
        glyph: "⚠",
        accent: palette::WARNING_500,
    },
];

pub(super) fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let tiles = EXAMPLES.iter().fold(Row::new().spacing(spacing::LG), |row, example| {
        row.push(example_column(example, i18n))
    });

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(Text::new(i18n.tr("examples-title")).size(typography::TITLE_MD))
            .push(tiles),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::panel)
    .into()
}

fn example_column<'a>(example: &Example, i18n: &I18n) -> Element<'a, Message> {
    let badge = Container::new(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(Text::new(example.glyph))
            .push(Text::new(i18n.tr(example.badge_key)).size(typography::BODY_SM)),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::container::accent(example.accent));

    let tile = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(Text::new(example.glyph).size(typography::TITLE_LG).color(example.accent))
            .push(Text::new(i18n.tr(example.tile_key)).size(typography::BODY_SM)),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fixed(sizing::EXAMPLE_TILE_HEIGHT))
    .style(styles::container::accent(example.accent));

    Column::new()
        .width(Length::FillPortion(1))
        .spacing(spacing::SM)
        .push(badge)
        .push(Text::new(i18n.tr(example.caption_key)).size(typography::BODY_SM))
        .push(tile)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_keys_are_translated() {
        let i18n = I18n::default();
        for example in &EXAMPLES {
            for key in [example.badge_key, example.caption_key, example.tile_key] {
                assert!(!i18n.tr(key).starts_with("MISSING"), "{key}");
            }
        }
    }
}
