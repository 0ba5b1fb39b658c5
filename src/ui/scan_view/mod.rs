// SPDX-License-Identifier: MPL-2.0
//! Scan screen: upload card, results card and example guidance.
//!
//! Messages mutate the [`ScanController`] directly. Anything that needs the
//! runtime (running the classifier, opening a dialog, persisting the model
//! choice) is returned to the parent as an [`Event`].

mod examples;
mod results;
mod upload;

use crate::domain::classification::ModelProfile;
use crate::i18n::fluent::I18n;
use crate::scan::{ScanController, ScanTicket};
use crate::ui::design_tokens::{sizing, spacing};
use iced::{
    widget::{scrollable, Column, Container},
    Element, Length,
};

/// Contextual data needed to render the scan screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub controller: &'a ScanController,
    /// Whether a file is currently dragged over the window.
    pub drag_hovering: bool,
    pub spinner_rotation: f32,
}

/// Messages emitted by the scan screen.
#[derive(Debug, Clone)]
pub enum Message {
    RunScan,
    NewScan,
    ClearImage,
    OpenFilePicker,
    ModelSelected(ModelProfile),
    RevealAllPredictions,
}

/// Side effects requested from the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    StartScan(ScanTicket),
    OpenFilePicker,
    ModelChanged(ModelProfile),
}

/// Applies a scan screen message to the controller.
pub fn update(controller: &mut ScanController, message: Message) -> Event {
    match message {
        Message::RunScan => controller
            .begin_scan()
            .map_or(Event::None, Event::StartScan),
        Message::NewScan | Message::ClearImage => {
            controller.reset();
            Event::None
        }
        Message::OpenFilePicker => {
            if controller.is_scanning() {
                Event::None
            } else {
                Event::OpenFilePicker
            }
        }
        Message::ModelSelected(model) => {
            if controller.model() == model || !controller.select_model(model) {
                Event::None
            } else {
                Event::ModelChanged(model)
            }
        }
        Message::RevealAllPredictions => {
            controller.reveal_all_predictions();
            Event::None
        }
    }
}

/// Render the scan screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .push(upload::view(&ctx));

    if let Some(card) = results::view(&ctx) {
        content = content.push(card);
    }
    content = content.push(examples::view(ctx.i18n));

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .center_x(Length::Fill),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classification::catalog;
    use crate::domain::upload::{ImageCandidate, UploadSource};
    use crate::scan::ScanState;

    fn ready() -> ScanController {
        let mut controller = ScanController::default();
        controller
            .accept_file(ImageCandidate::new(
                "a.png",
                "image/png",
                vec![0x89, b'P', b'N', b'G'],
                UploadSource::FilePicker,
            ))
            .expect("accept");
        controller
    }

    #[test]
    fn run_scan_from_ready_starts_scan() {
        let mut controller = ready();
        let event = update(&mut controller, Message::RunScan);
        assert!(matches!(event, Event::StartScan(ref t) if t.cycle == controller.cycle()));
        assert!(controller.is_scanning());
    }

    #[test]
    fn run_scan_when_idle_does_nothing() {
        let mut controller = ScanController::default();
        assert!(matches!(update(&mut controller, Message::RunScan), Event::None));
        assert_eq!(controller.state(), &ScanState::Idle);
    }

    #[test]
    fn clear_and_new_scan_reset() {
        let mut controller = ready();
        update(&mut controller, Message::ClearImage);
        assert_eq!(controller.state(), &ScanState::Idle);
        assert_eq!(controller.previews().live_count(), 0);
    }

    #[test]
    fn picker_is_suppressed_while_scanning() {
        let mut controller = ready();
        assert!(matches!(
            update(&mut controller, Message::OpenFilePicker),
            Event::OpenFilePicker
        ));
        update(&mut controller, Message::RunScan);
        assert!(matches!(
            update(&mut controller, Message::OpenFilePicker),
            Event::None
        ));
    }

    #[test]
    fn model_change_is_reported_once() {
        let mut controller = ScanController::default();
        assert!(matches!(
            update(&mut controller, Message::ModelSelected(ModelProfile::Orion)),
            Event::ModelChanged(ModelProfile::Orion)
        ));
        assert!(matches!(
            update(&mut controller, Message::ModelSelected(ModelProfile::Orion)),
            Event::None
        ));
    }

    #[test]
    fn view_renders_in_every_state() {
        let i18n = I18n::default();
        let mut controller = ready();
        let ticket = controller.begin_scan().expect("ticket");
        {
            let _scanning = view(ViewContext {
                i18n: &i18n,
                controller: &controller,
                drag_hovering: false,
                spinner_rotation: 0.0,
            });
        }
        let outcome = catalog::get("mild").expect("mild").outcome.clone();
        controller.complete_scan(ticket.cycle, Ok(outcome));
        controller.reveal_all_predictions();
        let _complete = view(ViewContext {
            i18n: &i18n,
            controller: &controller,
            drag_hovering: true,
            spinner_rotation: 1.0,
        });
    }
}
