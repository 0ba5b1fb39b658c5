// SPDX-License-Identifier: MPL-2.0
//! The scan lifecycle state machine.

use super::preview::{PreviewId, PreviewRegistry};
use crate::application::port::classifier::{
    cancel, new_cancellation_token, CancellationToken, ClassificationRequest, ClassifierError,
};
use crate::domain::classification::{ClassificationOutcome, ModelProfile, Prediction};
use crate::domain::upload::{self, ImageCandidate, RejectedUpload, UploadLimit};
use iced::widget::image::Handle;
use std::sync::Arc;

/// Lifecycle state. The outcome lives inside `Complete` so it cannot
/// outlive the cycle that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanState {
    Idle,
    Ready,
    Scanning,
    Complete(ClassificationOutcome),
}

/// Status line shown above the drop zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStatus {
    AwaitingUpload,
    ReadyForScan,
    Analyzing,
    Complete,
    CompleteUncertain,
}

impl ScanStatus {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ScanStatus::AwaitingUpload => "status-idle",
            ScanStatus::ReadyForScan => "status-ready",
            ScanStatus::Analyzing => "status-scanning",
            ScanStatus::Complete => "status-complete",
            ScanStatus::CompleteUncertain => "status-complete-uncertain",
        }
    }
}

/// The accepted upload of the current cycle.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub name: String,
    pub mime: String,
    pub bytes: Arc<Vec<u8>>,
    pub preview: PreviewId,
}

/// Everything needed to run one classification off the UI thread.
#[derive(Debug, Clone)]
pub struct ScanTicket {
    pub cycle: u64,
    pub cancel: CancellationToken,
    pub request: ClassificationRequest,
}

/// What [`ScanController::complete_scan`] did with an answer.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanCompletion {
    /// The outcome was stored; state is `Complete`.
    Completed,
    /// The classifier failed; state is back to `Ready` with the image kept.
    Failed(ClassifierError),
    /// The answer belongs to a cycle that was reset or superseded; ignored.
    Stale,
}

#[derive(Debug)]
pub struct ScanController {
    state: ScanState,
    image: Option<UploadedImage>,
    previews: PreviewRegistry,
    model: ModelProfile,
    show_all_predictions: bool,
    cycle: u64,
    in_flight: Option<CancellationToken>,
    upload_limit: UploadLimit,
}

impl Default for ScanController {
    fn default() -> Self {
        Self::new(ModelProfile::default(), UploadLimit::default())
    }
}

impl ScanController {
    #[must_use]
    pub fn new(model: ModelProfile, upload_limit: UploadLimit) -> Self {
        Self {
            state: ScanState::Idle,
            image: None,
            previews: PreviewRegistry::new(),
            model,
            show_all_predictions: false,
            cycle: 0,
            in_flight: None,
            upload_limit,
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Accepts an upload candidate and moves to `Ready`.
    ///
    /// Rejections leave every field untouched. A previous image, outcome and
    /// disclosure are discarded on success.
    pub fn accept_file(&mut self, candidate: ImageCandidate) -> Result<(), RejectedUpload> {
        if self.is_scanning() {
            return Err(RejectedUpload::ScanInProgress);
        }
        upload::validate(&candidate, self.upload_limit)?;

        self.release_image();
        let ImageCandidate {
            name, mime, bytes, ..
        } = candidate;
        let preview = self.previews.create(bytes.clone());
        tracing::debug!(%name, %mime, size = bytes.len(), "image accepted");

        self.image = Some(UploadedImage {
            name,
            mime,
            bytes: Arc::new(bytes),
            preview,
        });
        self.show_all_predictions = false;
        self.state = ScanState::Ready;
        Ok(())
    }

    /// Starts a scan. Only valid from `Ready`; returns `None` elsewhere.
    pub fn begin_scan(&mut self) -> Option<ScanTicket> {
        if self.state != ScanState::Ready {
            return None;
        }
        let image = self.image.as_ref()?;

        self.cycle += 1;
        let token = new_cancellation_token();
        self.in_flight = Some(Arc::clone(&token));
        self.show_all_predictions = false;
        self.state = ScanState::Scanning;
        tracing::debug!(cycle = self.cycle, model = self.model.id(), "scan started");

        Some(ScanTicket {
            cycle: self.cycle,
            cancel: token,
            request: ClassificationRequest {
                file_name: image.name.clone(),
                mime: image.mime.clone(),
                bytes: Arc::clone(&image.bytes),
                model: self.model,
            },
        })
    }

    /// Applies a classifier answer for `cycle`.
    pub fn complete_scan(
        &mut self,
        cycle: u64,
        result: Result<ClassificationOutcome, ClassifierError>,
    ) -> ScanCompletion {
        if cycle != self.cycle || !self.is_scanning() {
            tracing::debug!(cycle, current = self.cycle, "ignoring stale scan answer");
            return ScanCompletion::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(outcome) => {
                tracing::debug!(cycle, stage = %outcome.stage, tier = outcome.tier.as_str(), "scan complete");
                self.show_all_predictions = false;
                self.state = ScanState::Complete(outcome);
                ScanCompletion::Completed
            }
            Err(err) => {
                tracing::warn!(cycle, %err, "scan failed");
                self.state = ScanState::Ready;
                ScanCompletion::Failed(err)
            }
        }
    }

    /// Returns to `Idle` from any state, cancelling an in-flight scan.
    pub fn reset(&mut self) {
        if let Some(token) = self.in_flight.take() {
            cancel(&token);
            tracing::debug!(cycle = self.cycle, "in-flight scan cancelled");
        }
        self.cycle += 1;
        self.release_image();
        self.show_all_predictions = false;
        self.state = ScanState::Idle;
    }

    /// Changes the model profile. Refused while scanning.
    pub fn select_model(&mut self, model: ModelProfile) -> bool {
        if self.is_scanning() {
            return false;
        }
        self.model = model;
        true
    }

    /// Reveals the full breakdown of an uncertain outcome.
    pub fn reveal_all_predictions(&mut self) -> bool {
        match &self.state {
            ScanState::Complete(outcome) if outcome.offers_disclosure() => {
                self.show_all_predictions = true;
                true
            }
            _ => false,
        }
    }

    fn release_image(&mut self) {
        if let Some(image) = self.image.take() {
            self.previews.release(image.preview);
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    #[must_use]
    pub fn is_scanning(&self) -> bool {
        self.state == ScanState::Scanning
    }

    #[must_use]
    pub fn image(&self) -> Option<&UploadedImage> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&ClassificationOutcome> {
        match &self.state {
            ScanState::Complete(outcome) => Some(outcome),
            _ => None,
        }
    }

    #[must_use]
    pub fn model(&self) -> ModelProfile {
        self.model
    }

    #[must_use]
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    #[must_use]
    pub fn upload_limit(&self) -> UploadLimit {
        self.upload_limit
    }

    #[must_use]
    pub fn show_all_predictions(&self) -> bool {
        self.show_all_predictions
    }

    /// Whether the "show most likely result" control should be offered.
    #[must_use]
    pub fn disclosure_available(&self) -> bool {
        !self.show_all_predictions && self.outcome().is_some_and(ClassificationOutcome::offers_disclosure)
    }

    /// The breakdown to display, in stored order, once revealed.
    #[must_use]
    pub fn visible_breakdown(&self) -> Option<&[Prediction]> {
        if !self.show_all_predictions {
            return None;
        }
        self.outcome().map(|outcome| outcome.breakdown.as_ref())
    }

    #[must_use]
    pub fn status(&self) -> ScanStatus {
        match &self.state {
            ScanState::Idle => ScanStatus::AwaitingUpload,
            ScanState::Ready => ScanStatus::ReadyForScan,
            ScanState::Scanning => ScanStatus::Analyzing,
            ScanState::Complete(outcome) if outcome.offers_disclosure() => {
                ScanStatus::CompleteUncertain
            }
            ScanState::Complete(_) => ScanStatus::Complete,
        }
    }

    #[must_use]
    pub fn preview_handle(&self) -> Option<&Handle> {
        self.image
            .as_ref()
            .and_then(|image| self.previews.get(image.preview))
    }

    #[must_use]
    pub fn previews(&self) -> &PreviewRegistry {
        &self.previews
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::classifier::is_cancelled;
    use crate::domain::classification::catalog;
    use crate::domain::upload::UploadSource;

    fn jpeg(name: &str) -> ImageCandidate {
        ImageCandidate::new(name, "image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xE0], UploadSource::DragDrop)
    }

    fn outcome(key: &str) -> ClassificationOutcome {
        catalog::get(key).map(|e| e.outcome.clone()).expect("catalog key")
    }

    fn completed(key: &str) -> ScanController {
        let mut controller = ScanController::default();
        controller.accept_file(jpeg("a.jpg")).expect("accept");
        let ticket = controller.begin_scan().expect("ticket");
        assert_eq!(
            controller.complete_scan(ticket.cycle, Ok(outcome(key))),
            ScanCompletion::Completed
        );
        controller
    }

    #[test]
    fn starts_idle() {
        let controller = ScanController::default();
        assert_eq!(controller.state(), &ScanState::Idle);
        assert_eq!(controller.status(), ScanStatus::AwaitingUpload);
        assert!(controller.image().is_none());
        assert_eq!(controller.previews().live_count(), 0);
    }

    #[test]
    fn non_image_leaves_state_unchanged() {
        for start in ["idle", "ready", "complete"] {
            let mut controller = match start {
                "idle" => ScanController::default(),
                "ready" => {
                    let mut c = ScanController::default();
                    c.accept_file(jpeg("a.jpg")).expect("accept");
                    c
                }
                _ => completed("mild"),
            };
            let state_before = controller.state().clone();
            let image_before = controller.image().map(|i| i.preview);
            let pdf = ImageCandidate::new("a.pdf", "application/pdf", vec![1], UploadSource::FilePicker);

            assert!(matches!(
                controller.accept_file(pdf),
                Err(RejectedUpload::NotAnImage { .. })
            ));
            assert_eq!(controller.state(), &state_before);
            assert_eq!(controller.image().map(|i| i.preview), image_before);
        }
    }

    #[test]
    fn valid_image_moves_to_ready_and_creates_preview() {
        let mut controller = ScanController::default();
        controller.accept_file(jpeg("slice.jpg")).expect("accept");

        assert_eq!(controller.state(), &ScanState::Ready);
        assert_eq!(controller.status(), ScanStatus::ReadyForScan);
        assert_eq!(controller.image().map(|i| i.name.as_str()), Some("slice.jpg"));
        assert!(controller.preview_handle().is_some());
        assert_eq!(controller.previews().live_count(), 1);
    }

    #[test]
    fn new_file_after_complete_clears_outcome_and_disclosure() {
        let mut controller = completed("mild");
        assert!(controller.reveal_all_predictions());

        controller.accept_file(jpeg("b.jpg")).expect("accept");
        assert_eq!(controller.state(), &ScanState::Ready);
        assert!(controller.outcome().is_none());
        assert!(!controller.show_all_predictions());
        assert_eq!(controller.previews().live_count(), 1);
    }

    #[test]
    fn replacing_image_releases_previous_preview() {
        let mut controller = ScanController::default();
        controller.accept_file(jpeg("a.jpg")).expect("accept");
        let first = controller.image().map(|i| i.preview).expect("image");
        controller.accept_file(jpeg("b.jpg")).expect("accept");

        assert!(controller.previews().get(first).is_none());
        assert_eq!(controller.previews().live_count(), 1);
    }

    #[test]
    fn begin_scan_only_from_ready() {
        let mut controller = ScanController::default();
        assert!(controller.begin_scan().is_none());

        controller.accept_file(jpeg("a.jpg")).expect("accept");
        let ticket = controller.begin_scan().expect("ticket");
        assert_eq!(controller.state(), &ScanState::Scanning);
        assert_eq!(controller.status(), ScanStatus::Analyzing);
        assert_eq!(ticket.request.file_name, "a.jpg");
        assert_eq!(ticket.request.model, ModelProfile::Atlas);

        assert!(controller.begin_scan().is_none());
        controller.complete_scan(ticket.cycle, Ok(outcome("normal")));
        assert!(controller.begin_scan().is_none());
    }

    #[test]
    fn accepting_while_scanning_is_refused() {
        let mut controller = ScanController::default();
        controller.accept_file(jpeg("a.jpg")).expect("accept");
        controller.begin_scan().expect("ticket");

        assert_eq!(
            controller.accept_file(jpeg("b.jpg")),
            Err(RejectedUpload::ScanInProgress)
        );
        assert_eq!(controller.image().map(|i| i.name.as_str()), Some("a.jpg"));
    }

    #[test]
    fn certain_outcome_never_offers_disclosure() {
        for key in ["normal", "moderate"] {
            let mut controller = completed(key);
            assert_eq!(controller.status(), ScanStatus::Complete);
            assert!(!controller.disclosure_available());
            assert!(!controller.reveal_all_predictions());
            assert!(controller.visible_breakdown().is_none());
        }
    }

    #[test]
    fn uncertain_outcome_reveals_breakdown_in_stored_order() {
        let mut controller = completed("mild");
        assert_eq!(controller.status(), ScanStatus::CompleteUncertain);
        assert!(controller.disclosure_available());
        assert!(controller.visible_breakdown().is_none());

        assert!(controller.reveal_all_predictions());
        assert!(!controller.disclosure_available());
        let breakdown = controller.visible_breakdown().expect("breakdown");
        assert_eq!(breakdown, outcome("mild").breakdown.as_ref());
    }

    #[test]
    fn failure_returns_to_ready_with_image_kept() {
        let mut controller = ScanController::default();
        controller.accept_file(jpeg("a.jpg")).expect("accept");
        let ticket = controller.begin_scan().expect("ticket");

        let completion = controller.complete_scan(ticket.cycle, Err(ClassifierError::Timeout));
        assert_eq!(completion, ScanCompletion::Failed(ClassifierError::Timeout));
        assert_eq!(controller.state(), &ScanState::Ready);
        assert!(controller.preview_handle().is_some());
        assert!(controller.begin_scan().is_some());
    }

    #[test]
    fn reset_from_every_state_returns_to_idle() {
        let mut idle = ScanController::default();
        let mut ready = ScanController::default();
        ready.accept_file(jpeg("a.jpg")).expect("accept");
        let mut scanning = ScanController::default();
        scanning.accept_file(jpeg("a.jpg")).expect("accept");
        scanning.begin_scan().expect("ticket");
        let mut complete = completed("mild");
        complete.reveal_all_predictions();

        for controller in [&mut idle, &mut ready, &mut scanning, &mut complete] {
            controller.reset();
            assert_eq!(controller.state(), &ScanState::Idle);
            assert!(controller.image().is_none());
            assert!(controller.outcome().is_none());
            assert!(!controller.show_all_predictions());
            assert_eq!(controller.previews().live_count(), 0);
        }
    }

    #[test]
    fn reset_cancels_in_flight_scan_and_ignores_its_answer() {
        let mut controller = ScanController::default();
        controller.accept_file(jpeg("a.jpg")).expect("accept");
        let ticket = controller.begin_scan().expect("ticket");

        controller.reset();
        assert!(is_cancelled(&ticket.cancel));
        assert_eq!(
            controller.complete_scan(ticket.cycle, Ok(outcome("normal"))),
            ScanCompletion::Stale
        );
        assert_eq!(controller.state(), &ScanState::Idle);
    }

    #[test]
    fn stale_answer_never_touches_newer_cycle() {
        let mut controller = ScanController::default();
        controller.accept_file(jpeg("a.jpg")).expect("accept");
        let old = controller.begin_scan().expect("ticket");
        controller.reset();
        controller.accept_file(jpeg("b.jpg")).expect("accept");
        let current = controller.begin_scan().expect("ticket");

        assert_eq!(
            controller.complete_scan(old.cycle, Err(ClassifierError::Cancelled)),
            ScanCompletion::Stale
        );
        assert_eq!(controller.state(), &ScanState::Scanning);
        assert_eq!(
            controller.complete_scan(current.cycle, Ok(outcome("moderate"))),
            ScanCompletion::Completed
        );
    }

    #[test]
    fn model_is_locked_while_scanning() {
        let mut controller = ScanController::default();
        assert!(controller.select_model(ModelProfile::Pulse));
        controller.accept_file(jpeg("a.jpg")).expect("accept");
        let ticket = controller.begin_scan().expect("ticket");
        assert_eq!(ticket.request.model, ModelProfile::Pulse);

        assert!(!controller.select_model(ModelProfile::Orion));
        assert_eq!(controller.model(), ModelProfile::Pulse);
        controller.complete_scan(ticket.cycle, Ok(outcome("normal")));
        assert!(controller.select_model(ModelProfile::Orion));
        assert_eq!(controller.state(), &ScanState::Complete(outcome("normal")));
    }

    #[test]
    fn upload_limit_is_enforced() {
        let mut controller = ScanController::new(ModelProfile::Atlas, UploadLimit::from_mebibytes(1));
        let big = ImageCandidate::new(
            "big.png",
            "image/png",
            vec![0u8; 1024 * 1024 + 1],
            UploadSource::Clipboard,
        );
        assert!(matches!(
            controller.accept_file(big),
            Err(RejectedUpload::TooLarge { .. })
        ));
        assert_eq!(controller.state(), &ScanState::Idle);
    }
}
