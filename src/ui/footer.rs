// SPDX-License-Identifier: MPL-2.0
//! Footer carrying the educational-use notice.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{Container, Text},
    Element, Length,
};

pub fn view<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    Container::new(
        Text::new(i18n.tr("footer-notice"))
            .size(typography::BODY_SM)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::bar)
    .into()
}
