// SPDX-License-Identifier: MPL-2.0
//! Header bar with the brand and the Scan/About tabs.
//!
//! The navbar only reports which tab was requested. Switching tabs never
//! touches scan state; the parent keeps the controller alive across tabs.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, container, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Tabs offered by the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Scan,
    About,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Scan, Tab::About];

    fn i18n_key(self) -> &'static str {
        match self {
            Tab::Scan => "navbar-tab-scan",
            Tab::About => "navbar-tab-about",
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Tab,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    SelectTab(Tab),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    SwitchTo(Tab),
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: Message, active: Tab) -> Event {
    match message {
        Message::SelectTab(tab) if tab == active => Event::None,
        Message::SelectTab(tab) => Event::SwitchTo(tab),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let tabs = Tab::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, tab| {
            let label = Text::new(ctx.i18n.tr(tab.i18n_key())).size(typography::BODY);
            let style = if tab == ctx.active {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            row.push(
                button(label)
                    .padding([spacing::XS, spacing::MD])
                    .on_press(Message::SelectTab(tab))
                    .style(style),
            )
        });

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::SM, spacing::MD])
        .align_y(Vertical::Center)
        .push(build_brand(ctx.i18n))
        .push(Space::new().width(Length::Fill))
        .push(tabs);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::bar)
        .into()
}

fn build_brand<'a>(i18n: &I18n) -> Element<'a, Message> {
    let mark = Container::new(Text::new("CS").size(typography::BODY_LG))
        .width(Length::Fixed(sizing::ICON_XL))
        .height(Length::Fixed(sizing::ICON_XL))
        .center_x(Length::Fixed(sizing::ICON_XL))
        .center_y(Length::Fixed(sizing::ICON_XL))
        .style(|_theme| container::Style {
            background: Some(palette::PRIMARY_500.scale_alpha(0.1).into()),
            text_color: Some(palette::PRIMARY_400),
            border: iced::Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let words = Column::new()
        .push(Text::new(i18n.tr("app-title")).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr("app-tagline")).size(typography::CAPTION));

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(mark)
        .push(words)
        .into()
}
