// SPDX-License-Identifier: MPL-2.0
//! Results card for a completed scan.

use super::{Message, ViewContext};
use crate::domain::classification::{format_percent, ConfidenceTier, Prediction};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, progress_bar, Column, Container, Row, Space, Text},
    Color, Element, Length,
};

/// Accent color of the outcome card.
pub(super) fn tier_color(tier: ConfidenceTier) -> Color {
    match tier {
        ConfidenceTier::Certain => palette::SUCCESS_500,
        ConfidenceTier::Uncertain => palette::WARNING_500,
    }
}

/// Returns `None` unless the controller holds a completed outcome.
pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let controller = ctx.controller;
    let outcome = controller.outcome()?;
    let i18n = ctx.i18n;
    let accent = tier_color(outcome.tier);

    let glyph = Container::new(
        Text::new(if outcome.offers_disclosure() { "⚠" } else { "✓" })
            .size(typography::TITLE_MD)
            .color(accent),
    )
    .center_x(Length::Fixed(sizing::ICON_XL))
    .center_y(Length::Fixed(sizing::ICON_XL))
    .style(styles::container::accent(accent));

    let badge = Container::new(
        Text::new(i18n.tr_with_args(
            "results-confidence-badge",
            &[("percent", outcome.confidence_label().as_str())],
        ))
        .size(typography::BODY_SM),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::container::accent(accent));

    let headline = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(i18n.tr(outcome.stage.i18n_key())).size(typography::TITLE_LG))
        .push(badge);

    let mut details = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(headline)
        .push(Text::new(outcome.description.as_ref()).size(typography::BODY));

    if controller.disclosure_available() {
        details = details.push(
            button(Text::new(format!("? {}", i18n.tr("results-show-most-likely"))).size(typography::BODY))
                .on_press(Message::RevealAllPredictions)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::outline),
        );
    }

    if let Some(breakdown) = controller.visible_breakdown() {
        details = details.push(breakdown_block(breakdown, i18n));
    }

    let card = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Top)
        .push(glyph)
        .push(details);

    Some(
        Container::new(card)
            .padding(spacing::LG)
            .width(Length::Fill)
            .style(styles::container::panel)
            .into(),
    )
}

fn breakdown_block<'a>(breakdown: &[Prediction], i18n: &I18n) -> Element<'a, Message> {
    let rows = breakdown.iter().fold(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr("results-all-predictions")).size(typography::BODY)),
        |col, prediction| {
            let label = Row::new()
                .push(Text::new(i18n.tr(prediction.stage.i18n_key())).size(typography::BODY_SM))
                .push(Space::new().width(Length::Fill))
                .push(
                    Text::new(format!("{}%", format_percent(prediction.confidence_percent)))
                        .size(typography::CAPTION),
                );
            let bar = progress_bar(0.0..=1.0, prediction.bar_fraction())
                .girth(sizing::PREDICTION_BAR_HEIGHT)
                .style(styles::progress_bar::prediction);
            col.push(Column::new().spacing(spacing::XXS).push(label).push(bar))
        },
    );

    Container::new(rows)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::inset)
        .into()
}
