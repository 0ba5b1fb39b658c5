// SPDX-License-Identifier: MPL-2.0
//! About screen describing the demonstration, its limits and its authors.
//!
//! Everything here is static. Profile links are shown as plain text; the
//! screen never opens a browser.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{rule, scrollable, Column, Container, Row, Text},
    Color, Element, Length,
};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A member of the development team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub profile_url: &'static str,
}

impl TeamMember {
    /// Uppercase initials of the first and last name parts.
    #[must_use]
    pub fn initials(&self) -> String {
        let mut parts = self.name.split_whitespace();
        let first = parts.next().and_then(|p| p.chars().next());
        let last = parts.next_back().and_then(|p| p.chars().next());
        first
            .into_iter()
            .chain(last)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

pub const TEAM: [TeamMember; 5] = [
    TeamMember {
        name: "Fatma Al-Zahraa Emad",
        profile_url: "https://www.linkedin.com/in/fatma-al-zahraa-emad-326b64234/",
    },
    TeamMember {
        name: "Gehad Mohamed",
        profile_url: "https://www.linkedin.com/in/gehad-mohamed-2a4946252/",
    },
    TeamMember {
        name: "Youssef Mostafa",
        profile_url: "https://www.linkedin.com/in/youssef-mostafa-6ab6b224b/",
    },
    TeamMember {
        name: "Mohamed Asem",
        profile_url: "https://www.linkedin.com/in/mohamed-asem-73b0b9220/",
    },
    TeamMember {
        name: "Luai Badr",
        profile_url: "https://www.linkedin.com/in/luai-badr-02b40421a/",
    },
];

/// Supervisors as (name, role key).
const SUPERVISORS: [(&str, &str); 2] = [
    ("Prof. Muhammad Sayed Hammad", "about-role-supervisor"),
    ("Eng. Heidi Ahmed", "about-role-assistant"),
];

const CAPABILITY_KEYS: [&str; 4] = [
    "about-does-slices",
    "about-does-stages",
    "about-does-scores",
    "about-does-uncertain",
];

const DISCLAIMER_KEYS: [&str; 4] = [
    "about-disclaimer-educational",
    "about-disclaimer-not-clinical",
    "about-disclaimer-consult",
    "about-disclaimer-verify",
];

/// Contextual data needed to render the about screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the about screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a, Message: 'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .push(build_overview_card(&ctx))
        .push(build_supervision_card(&ctx))
        .push(build_team_card(&ctx));

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .center_x(Length::Fill),
    )
    .into()
}

fn build_overview_card<'a, Message: 'a>(ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let intro = Column::new()
        .spacing(spacing::XS)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(Text::new(i18n.tr("app-title")).size(typography::TITLE_MD))
                .push(Text::new(format!("v{APP_VERSION}")).size(typography::BODY_SM)),
        )
        .push(Text::new(i18n.tr("about-intro")).size(typography::BODY_LG));

    let does = build_bullet_block(
        i18n.tr("about-section-does"),
        &CAPABILITY_KEYS,
        i18n,
        palette::SUCCESS_500,
    );
    let disclaimer = build_bullet_block(
        i18n.tr("about-section-disclaimer"),
        &DISCLAIMER_KEYS,
        i18n,
        palette::WARNING_500,
    );

    let how = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr("about-section-how")).size(typography::BODY_LG))
            .push(Text::new(i18n.tr("about-how-body")).size(typography::BODY)),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::inset);

    let body = Column::new()
        .spacing(spacing::MD)
        .push(intro)
        .push(
            Row::new()
                .spacing(spacing::MD)
                .push(does)
                .push(disclaimer),
        )
        .push(how);

    build_card(i18n.tr("about-title"), body.into())
}

fn build_bullet_block<'a, Message: 'a>(
    title: String,
    keys: &[&str],
    i18n: &I18n,
    accent: Color,
) -> Element<'a, Message> {
    let header = Text::new(title).size(typography::BODY_LG).color(accent);
    let list = keys.iter().fold(Column::new().spacing(spacing::XXS), |col, key| {
        col.push(Text::new(format!("• {}", i18n.tr(key))).size(typography::BODY))
    });

    Container::new(Column::new().spacing(spacing::XS).push(header).push(list))
        .padding(spacing::MD)
        .width(Length::FillPortion(1))
        .style(styles::container::inset)
        .into()
}

fn build_supervision_card<'a, Message: 'a>(ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let people = SUPERVISORS
        .iter()
        .fold(Row::new().spacing(spacing::MD), |row, (name, role_key)| {
            row.push(
                Container::new(
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(Text::new(*name).size(typography::BODY_LG))
                        .push(Text::new(ctx.i18n.tr(role_key)).size(typography::BODY_SM)),
                )
                .padding(spacing::MD)
                .width(Length::FillPortion(1))
                .style(styles::container::inset),
            )
        });

    build_card(ctx.i18n.tr("about-section-supervision"), people.into())
}

fn build_team_card<'a, Message: 'a>(ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let members = TEAM.iter().fold(Row::new().spacing(spacing::MD), |row, member| {
        let avatar = Container::new(Text::new(member.initials()).size(typography::TITLE_MD))
            .center_x(Length::Fixed(sizing::AVATAR))
            .center_y(Length::Fixed(sizing::AVATAR))
            .style(styles::container::avatar);

        row.push(
            Column::new()
                .width(Length::FillPortion(1))
                .spacing(spacing::XS)
                .align_x(Horizontal::Center)
                .push(avatar)
                .push(
                    Text::new(member.name)
                        .size(typography::BODY)
                        .align_x(Horizontal::Center),
                )
                .push(
                    Text::new(member.profile_url)
                        .size(typography::CAPTION)
                        .align_x(Horizontal::Center),
                ),
        )
    });

    build_card(ctx.i18n.tr("about-section-team"), members.into())
}

/// Build a card with a title, a divider and content.
fn build_card<'a, Message: 'a>(
    title: String,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let inner = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(rule::horizontal(1))
        .push(content);

    Container::new(inner)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}
