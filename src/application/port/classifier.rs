// SPDX-License-Identifier: MPL-2.0
//! Classifier port definition.
//!
//! The scan lifecycle does not know whether an outcome comes from the canned
//! catalog or from an inference service. Adapters implement [`Classifier`]
//! and are swapped through configuration.
//!
//! # Design Notes
//!
//! - `classify` blocks; the presentation layer runs it on the blocking pool
//! - Cancellation is cooperative through a shared [`CancellationToken`]

use crate::domain::classification::{ClassificationOutcome, ModelProfile};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag used to abort an in-flight classification.
pub type CancellationToken = Arc<AtomicBool>;

/// Creates a fresh, non-cancelled token.
#[must_use]
pub fn new_cancellation_token() -> CancellationToken {
    Arc::new(AtomicBool::new(false))
}

/// Returns true once [`cancel`] has been called on the token.
#[must_use]
pub fn is_cancelled(token: &CancellationToken) -> bool {
    token.load(Ordering::SeqCst)
}

/// Signals cancellation to whoever holds a clone of the token.
pub fn cancel(token: &CancellationToken) {
    token.store(true, Ordering::SeqCst);
}

// =============================================================================
// ClassifierError
// =============================================================================

/// Why a scan failed. Every variant maps to the user-visible `ScanFailed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    /// The scan was cancelled before an answer arrived.
    Cancelled,

    /// The service did not answer in time.
    Timeout,

    /// The service answered with a non-success HTTP status.
    Service { status: u16 },

    /// The request could not be delivered.
    Transport(String),

    /// The answer could not be understood.
    InvalidResponse(String),
}

impl ClassifierError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ClassifierError::Cancelled => "notification-scan-cancelled",
            ClassifierError::Timeout => "notification-scan-timeout",
            ClassifierError::Service { .. } => "notification-scan-service-error",
            ClassifierError::Transport(_) => "notification-scan-transport-error",
            ClassifierError::InvalidResponse(_) => "notification-scan-invalid-response",
        }
    }
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifierError::Cancelled => write!(f, "scan cancelled"),
            ClassifierError::Timeout => write!(f, "classifier timed out"),
            ClassifierError::Service { status } => {
                write!(f, "classifier service answered with status {status}")
            }
            ClassifierError::Transport(msg) => write!(f, "could not reach classifier: {msg}"),
            ClassifierError::InvalidResponse(msg) => {
                write!(f, "classifier answer was malformed: {msg}")
            }
        }
    }
}

impl std::error::Error for ClassifierError {}

// =============================================================================
// Request / Descriptor
// =============================================================================

/// Everything a classifier needs to analyze one image.
#[derive(Clone)]
pub struct ClassificationRequest {
    pub file_name: String,
    pub mime: String,
    pub bytes: Arc<Vec<u8>>,
    pub model: ModelProfile,
}

impl fmt::Debug for ClassificationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassificationRequest")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("bytes", &self.bytes.len())
            .field("model", &self.model)
            .finish()
    }
}

/// Describes a classifier backend for logs and the about screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierDescriptor {
    /// Short backend name, e.g. `"mock"`.
    pub backend: &'static str,
    /// Whether outcomes are canned rather than computed.
    pub simulated: bool,
}

// =============================================================================
// Classifier Trait
// =============================================================================

/// Port for MRI stage classification.
///
/// # Example
///
/// ```ignore
/// use cerebro_scan::application::port::classifier::*;
///
/// fn run(classifier: &dyn Classifier, request: &ClassificationRequest) {
///     let token = new_cancellation_token();
///     match classifier.classify(request, &token) {
///         Ok(outcome) => println!("{}: {}%", outcome.stage, outcome.confidence_label()),
///         Err(err) => eprintln!("{err}"),
///     }
/// }
/// ```
pub trait Classifier: Send + Sync {
    /// Classifies one image, blocking until an answer, a failure, or cancellation.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::Cancelled`] if `cancel` is set before an
    /// answer is produced, or another variant when the backend fails.
    fn classify(
        &self,
        request: &ClassificationRequest,
        cancel: &CancellationToken,
    ) -> Result<ClassificationOutcome, ClassifierError>;

    /// Describes this backend.
    fn descriptor(&self) -> ClassifierDescriptor;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_starts_clear_and_latches() {
        let token = new_cancellation_token();
        let clone = Arc::clone(&token);
        assert!(!is_cancelled(&token));
        cancel(&clone);
        assert!(is_cancelled(&token));
    }

    #[test]
    fn every_error_has_a_distinct_key() {
        let errors = [
            ClassifierError::Cancelled,
            ClassifierError::Timeout,
            ClassifierError::Service { status: 503 },
            ClassifierError::Transport("refused".into()),
            ClassifierError::InvalidResponse("eof".into()),
        ];
        let mut keys: Vec<_> = errors.iter().map(ClassifierError::i18n_key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), errors.len());
    }

    #[test]
    fn service_error_mentions_status() {
        assert!(ClassifierError::Service { status: 502 }.to_string().contains("502"));
    }
}
