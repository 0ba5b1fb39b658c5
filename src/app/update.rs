// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers mutate state through an [`UpdateContext`] and return the
//! `Task`s that run blocking work (file reads, clipboard access,
//! classification) off the UI thread.

use super::{Message, Screen};
use crate::application::port::{Classifier, ClassifierError};
use crate::config::{self, Config};
use crate::domain::classification::{ClassificationOutcome, ModelProfile};
use crate::domain::upload::{ImageCandidate, RejectedUpload, UploadLimit, UploadSource};
use crate::infrastructure::intake;
use crate::scan::{ScanCompletion, ScanController, ScanTicket};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::scan_view::{self, Event as ScanEvent};
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;

const BYTES_PER_MIB: u64 = 1024 * 1024;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub scan: &'a mut ScanController,
    pub classifier: &'a Arc<dyn Classifier>,
    pub config: &'a mut Config,
    pub notifications: &'a mut notifications::Manager,
    pub drag_hovering: &'a mut bool,
}

// =============================================================================
// Navigation
// =============================================================================

/// Handles navbar messages. Switching tabs never touches scan state.
pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.screen.tab()) {
        NavbarEvent::None => {}
        NavbarEvent::SwitchTo(tab) => {
            tracing::debug!(?tab, "switching screen");
            *ctx.screen = Screen::from(tab);
            *ctx.drag_hovering = false;
        }
    }
    Task::none()
}

// =============================================================================
// Scan screen
// =============================================================================

/// Handles scan screen messages and runs the effects they request.
pub fn handle_scan_message(ctx: &mut UpdateContext<'_>, message: scan_view::Message) -> Task<Message> {
    match scan_view::update(ctx.scan, message) {
        ScanEvent::None => Task::none(),
        ScanEvent::StartScan(ticket) => run_scan(Arc::clone(ctx.classifier), ticket),
        ScanEvent::OpenFilePicker => open_file_picker(),
        ScanEvent::ModelChanged(model) => {
            persist_model(ctx, model);
            Task::none()
        }
    }
}

/// Runs the classifier on the blocking pool and reports back with the cycle id.
pub fn run_scan(classifier: Arc<dyn Classifier>, ticket: ScanTicket) -> Task<Message> {
    let ScanTicket {
        cycle,
        cancel,
        request,
    } = ticket;

    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || classifier.classify(&request, &cancel))
                .await
                .unwrap_or_else(|err| Err(ClassifierError::Transport(err.to_string())))
        },
        move |result| Message::ScanFinished { cycle, result },
    )
}

/// Applies a classifier answer.
pub fn handle_scan_finished(
    ctx: &mut UpdateContext<'_>,
    cycle: u64,
    result: Result<ClassificationOutcome, ClassifierError>,
) -> Task<Message> {
    match ctx.scan.complete_scan(cycle, result) {
        ScanCompletion::Completed | ScanCompletion::Stale => {}
        ScanCompletion::Failed(ClassifierError::Cancelled) => {}
        ScanCompletion::Failed(err) => {
            ctx.notifications.push(failure_notification(&err));
        }
    }
    Task::none()
}

fn persist_model(ctx: &mut UpdateContext<'_>, model: ModelProfile) {
    ctx.config.scan.default_model = Some(model.id().to_string());
    if let Err(err) = config::save(ctx.config) {
        tracing::warn!(%err, "failed to persist model selection");
        ctx.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
}

// =============================================================================
// Upload channels
// =============================================================================

fn open_file_picker() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("MRI image", intake::PICKER_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::FilePicked,
    )
}

/// Handles the result of the open file dialog.
pub fn handle_file_picked(ctx: &mut UpdateContext<'_>, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };
    load_from_path(ctx, path, UploadSource::FilePicker)
}

/// Handles a file dropped on the window.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    *ctx.drag_hovering = false;
    load_from_path(ctx, path, UploadSource::DragDrop)
}

/// Handles the paste shortcut.
pub fn handle_paste(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if *ctx.screen != Screen::Scan {
        return Task::none();
    }
    if ctx.scan.is_scanning() {
        push_rejection(ctx.notifications, &RejectedUpload::ScanInProgress);
        return Task::none();
    }
    let limit = ctx.scan.upload_limit();
    Task::perform(
        blocking_intake(move || intake::candidate_from_clipboard(limit)),
        Message::CandidateLoaded,
    )
}

/// Reads `path` into a candidate on the blocking pool.
pub fn load_from_path(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    source: UploadSource,
) -> Task<Message> {
    if ctx.scan.is_scanning() {
        push_rejection(ctx.notifications, &RejectedUpload::ScanInProgress);
        return Task::none();
    }
    let limit: UploadLimit = ctx.scan.upload_limit();
    tracing::debug!(path = %path.display(), ?source, "reading upload");
    Task::perform(
        blocking_intake(move || intake::candidate_from_path(&path, source, limit)),
        Message::CandidateLoaded,
    )
}

async fn blocking_intake<F>(read: F) -> Result<ImageCandidate, RejectedUpload>
where
    F: FnOnce() -> Result<ImageCandidate, RejectedUpload> + Send + 'static,
{
    tokio::task::spawn_blocking(read)
        .await
        .unwrap_or_else(|err| Err(RejectedUpload::Unreadable(err.to_string())))
}

/// Feeds a loaded candidate to the controller.
///
/// Reads that finish after the user left the scan screen are dropped, so a
/// slow clipboard never changes the scan behind the about screen.
pub fn handle_candidate_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<ImageCandidate, RejectedUpload>,
) -> Task<Message> {
    if *ctx.screen != Screen::Scan {
        tracing::debug!(accepted = result.is_ok(), "dropping upload read outside the scan screen");
        return Task::none();
    }
    let accepted = result.and_then(|candidate| {
        let source = candidate.source;
        ctx.scan.accept_file(candidate).map(|()| source)
    });

    match accepted {
        Ok(source) => {
            ctx.notifications.clear_upload_rejections();
            if source == UploadSource::Clipboard {
                ctx.notifications
                    .push(Notification::info("notification-upload-pasted"));
            }
        }
        Err(rejection) => push_rejection(ctx.notifications, &rejection),
    }
    Task::none()
}

// =============================================================================
// Notifications
// =============================================================================

fn push_rejection(notifications: &mut notifications::Manager, rejection: &RejectedUpload) {
    notifications.push(rejection_notification(rejection));
}

/// Builds the warning toast for a rejected upload.
#[must_use]
pub fn rejection_notification(rejection: &RejectedUpload) -> Notification {
    let notification = Notification::warning(rejection.i18n_key());
    match rejection {
        RejectedUpload::NotAnImage { mime } => notification.with_arg("mime", mime.as_str()),
        RejectedUpload::TooLarge { size, max } => notification
            .with_arg("size", format_mebibytes(*size))
            .with_arg("max", format_mebibytes(*max)),
        RejectedUpload::Unreadable(reason) => notification.with_arg("reason", reason.as_str()),
        RejectedUpload::ScanInProgress | RejectedUpload::EmptyClipboard => notification,
    }
}

/// Builds the error toast for a failed scan.
#[must_use]
pub fn failure_notification(err: &ClassifierError) -> Notification {
    let notification = Notification::error(err.i18n_key());
    match err {
        ClassifierError::Service { status } => notification.with_arg("status", status.to_string()),
        ClassifierError::Transport(reason) | ClassifierError::InvalidResponse(reason) => {
            notification.with_arg("reason", reason.as_str())
        }
        ClassifierError::Cancelled | ClassifierError::Timeout => notification,
    }
}

#[allow(clippy::cast_precision_loss)] // display only
fn format_mebibytes(bytes: u64) -> String {
    format!("{:.1}", bytes as f64 / BYTES_PER_MIB as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mebibytes_have_one_decimal() {
        assert_eq!(format_mebibytes(25 * BYTES_PER_MIB), "25.0");
        assert_eq!(format_mebibytes(BYTES_PER_MIB + BYTES_PER_MIB / 2), "1.5");
    }

    #[test]
    fn rejection_toast_is_a_warning_with_args() {
        let notification = rejection_notification(&RejectedUpload::NotAnImage {
            mime: "application/pdf".into(),
        });
        assert_eq!(notification.severity(), notifications::Severity::Warning);
        assert_eq!(notification.message_key(), "notification-upload-not-image");
        assert_eq!(
            notification.message_args(),
            &[("mime".to_string(), "application/pdf".to_string())]
        );
    }

    #[test]
    fn failure_toast_is_an_error() {
        let notification = failure_notification(&ClassifierError::Service { status: 503 });
        assert_eq!(notification.severity(), notifications::Severity::Error);
        assert_eq!(notification.message_key(), "notification-scan-service-error");
        assert_eq!(
            notification.message_args(),
            &[("status".to_string(), "503".to_string())]
        );
    }
}
