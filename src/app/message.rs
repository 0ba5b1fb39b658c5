// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::ClassifierError;
use crate::domain::classification::ClassificationOutcome;
use crate::domain::upload::{ImageCandidate, RejectedUpload};
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::scan_view;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Scan(scan_view::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the open file dialog.
    FilePicked(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// A file started or stopped hovering over the window.
    DragHover(bool),
    /// Ctrl+V (Cmd+V on macOS) on the Scan screen.
    PasteRequested,
    /// A candidate was read from disk or the clipboard.
    CandidateLoaded(Result<ImageCandidate, RejectedUpload>),
    /// The classifier answered for scan cycle `cycle`.
    ScanFinished {
        cycle: u64,
        result: Result<ClassificationOutcome, ClassifierError>,
    },
    /// Periodic tick for the spinner and notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path accepted as the first upload.
    pub file_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CEREBRO_SCAN_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
