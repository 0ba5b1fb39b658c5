// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The header, the active screen and the footer are stacked vertically,
//! with the toast overlay layered on top.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::scan::ScanController;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::footer;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::scan_view::{self, ViewContext as ScanViewContext};
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub scan: &'a ScanController,
    pub notifications: &'a notifications::Manager,
    pub drag_hovering: bool,
    pub spinner_rotation: f32,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        active: ctx.screen.tab(),
    })
    .map(Message::Navbar);

    // Only the active screen is mounted.
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Scan => scan_view::view(ScanViewContext {
            i18n: ctx.i18n,
            controller: ctx.scan,
            drag_hovering: ctx.drag_hovering,
            spinner_rotation: ctx.spinner_rotation,
        })
        .map(Message::Scan),
        Screen::About => about::view(AboutViewContext { i18n: ctx.i18n }),
    };

    let page = Column::new()
        .push(navbar_view)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(footer::view(ctx.i18n))
        .width(Length::Fill)
        .height(Length::Fill);

    Stack::new()
        .push(page)
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
