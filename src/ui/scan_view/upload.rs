// SPDX-License-Identifier: MPL-2.0
//! Upload card: status line, model selector, action button and drop zone.

use super::{Message, ViewContext};
use crate::domain::classification::ModelProfile;
use crate::scan::{ScanController, ScanStatus};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, image::Image, pick_list, Column, Container, Row, Space, Stack, Text},
    ContentFit, Element, Length, Theme,
};

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let controller = ctx.controller;

    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(status_line(ctx))
        .push(model_selector(ctx))
        .push(Space::new().width(Length::Fill))
        .push(action_button(ctx));

    let body: Element<'a, Message> = if controller.preview_handle().is_some() {
        preview(ctx)
    } else {
        drop_zone(ctx)
    };

    Container::new(Column::new().spacing(spacing::LG).push(header).push(body))
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn status_glyph(status: ScanStatus) -> &'static str {
    match status {
        ScanStatus::AwaitingUpload => "⇪",
        ScanStatus::ReadyForScan => "▣",
        ScanStatus::Analyzing => "…",
        ScanStatus::Complete => "✓",
        ScanStatus::CompleteUncertain => "⚠",
    }
}

fn status_line<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let status = ctx.controller.status();
    let glyph: Element<'a, Message> = match status {
        ScanStatus::Analyzing => AnimatedSpinner::new(palette::PRIMARY_400, ctx.spinner_rotation)
            .size(sizing::ICON_SM)
            .into_element(),
        ScanStatus::Complete => Text::new(status_glyph(status))
            .color(palette::SUCCESS_500)
            .into(),
        ScanStatus::CompleteUncertain => Text::new(status_glyph(status))
            .color(palette::WARNING_500)
            .into(),
        _ => Text::new(status_glyph(status)).into(),
    };

    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(glyph)
        .push(Text::new(ctx.i18n.tr(status.i18n_key())).size(typography::BODY_LG))
        .into()
}

fn model_selector<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let controller: &ScanController = ctx.controller;
    if controller.is_scanning() {
        // Locked while a scan is running.
        return Container::new(Text::new(controller.model().to_string()).size(typography::BODY))
            .padding(spacing::XS)
            .width(Length::Fixed(sizing::PICK_LIST_WIDTH))
            .style(styles::container::inset)
            .into();
    }

    pick_list(ModelProfile::ALL, Some(controller.model()), Message::ModelSelected)
        .placeholder(ctx.i18n.tr("scan-model-placeholder"))
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::PICK_LIST_WIDTH))
        .into()
}

fn action_button<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    match ctx.controller.status() {
        ScanStatus::ReadyForScan => button(Text::new(i18n.tr("scan-run-button")))
            .on_press(Message::RunScan)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary)
            .into(),
        ScanStatus::Analyzing => button(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(
                    AnimatedSpinner::new(palette::GRAY_200, ctx.spinner_rotation)
                        .size(sizing::ICON_SM)
                        .into_element(),
                )
                .push(Text::new(i18n.tr("scan-scanning-button"))),
        )
        .padding([spacing::XS, spacing::MD])
        .style(|theme: &Theme, _status| styles::button::disabled(theme))
        .into(),
        ScanStatus::Complete | ScanStatus::CompleteUncertain => {
            button(Text::new(i18n.tr("scan-new-button")))
                .on_press(Message::NewScan)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::outline)
                .into()
        }
        ScanStatus::AwaitingUpload => Space::new().into(),
    }
}

fn drop_zone<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let hint = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(Text::new("⇪").size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("upload-drop-hint")).size(typography::BODY_LG))
        .push(Text::new(i18n.tr("upload-supported-formats")).size(typography::BODY_SM));

    let zone = Container::new(hint)
        .center_x(Length::Fill)
        .center_y(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
        .style(styles::container::drop_zone(ctx.drag_hovering));

    button(zone)
        .padding(0)
        .width(Length::Fill)
        .on_press(Message::OpenFilePicker)
        .style(styles::button::bare)
        .into()
}

fn preview<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let controller = ctx.controller;
    let Some(handle) = controller.preview_handle() else {
        return Space::new().into();
    };

    let picture = Container::new(
        Image::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .max_width(sizing::PREVIEW_MAX_WIDTH)
    .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
    .style(styles::container::preview_frame);

    let mut layers = Stack::new().push(picture);

    match controller.status() {
        ScanStatus::ReadyForScan => {
            let clear = button(Text::new("×").size(typography::BODY_LG))
                .on_press(Message::ClearImage)
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::preview_overlay);
            layers = layers.push(
                Container::new(clear)
                    .width(Length::Fill)
                    .align_x(Horizontal::Right)
                    .padding(spacing::SM),
            );
        }
        ScanStatus::Analyzing => {
            let veil = Column::new()
                .spacing(spacing::SM)
                .align_x(Horizontal::Center)
                .push(
                    AnimatedSpinner::new(palette::PRIMARY_400, ctx.spinner_rotation)
                        .size(sizing::ICON_XL)
                        .into_element(),
                )
                .push(Text::new(ctx.i18n.tr("scan-analyzing-overlay")).size(typography::BODY));
            layers = layers.push(
                Container::new(veil)
                    .center(Length::Fill)
                    .style(styles::container::scanning_veil),
            );
        }
        _ => {}
    }

    let file_name = controller
        .image()
        .map(|img| img.name.clone())
        .unwrap_or_default();

    Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(Container::new(layers).center_x(Length::Fill))
        .push(Text::new(file_name).size(typography::CAPTION))
        .into()
}
