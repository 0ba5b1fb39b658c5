// SPDX-License-Identifier: MPL-2.0
//! Scan lifecycle: one uploaded image, one classification at a time.
//!
//! [`ScanController`] owns the state machine (Idle → Ready → Scanning →
//! Complete) and the preview resources. It never blocks: a scan is started
//! with [`ScanController::begin_scan`], run elsewhere, and its answer handed
//! back through [`ScanController::complete_scan`].

mod controller;
mod preview;

pub use controller::{ScanCompletion, ScanController, ScanState, ScanStatus, ScanTicket, UploadedImage};
pub use preview::{PreviewId, PreviewRegistry};
