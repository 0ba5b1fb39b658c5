// SPDX-License-Identifier: MPL-2.0
//! Adapters implementing the [`Classifier`] port trait.
//!
//! - [`MockClassifier`]: draws a catalog outcome after a fixed delay
//! - [`RemoteClassifier`]: posts the image to an inference service
//!
//! [`Classifier`]: crate::application::port::Classifier

mod mock;
mod remote;

pub use mock::MockClassifier;
pub use remote::RemoteClassifier;

use crate::application::port::Classifier;
use crate::config::{ClassifierBackend, ClassifierConfig};
use std::sync::Arc;

/// Builds the classifier selected by configuration.
#[must_use]
pub fn build_classifier(config: &ClassifierConfig) -> Arc<dyn Classifier> {
    match config.backend {
        ClassifierBackend::Mock => Arc::new(MockClassifier::new(config.simulated_delay())),
        ClassifierBackend::Remote => Arc::new(RemoteClassifier::new(
            config.endpoint().to_string(),
            config.timeout(),
        )),
    }
}
