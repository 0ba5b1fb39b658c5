// SPDX-License-Identifier: MPL-2.0
//! Catalog-backed classifier used for demonstrations.

use crate::application::port::classifier::{
    is_cancelled, CancellationToken, ClassificationRequest, Classifier, ClassifierDescriptor,
    ClassifierError,
};
use crate::domain::classification::{catalog, ClassificationOutcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Granularity of the cancellation check while waiting out the delay.
const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Returns a uniformly random catalog outcome after a fixed delay.
///
/// The image content and selected model are ignored.
pub struct MockClassifier {
    delay: Duration,
    rng: Mutex<StdRng>,
}

impl MockClassifier {
    /// Creates a mock seeded from the operating system.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Creates a mock with a deterministic draw sequence.
    #[must_use]
    pub fn seeded(seed: u64, delay: Duration) -> Self {
        Self {
            delay,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn wait(&self, cancel: &CancellationToken) -> Result<(), ClassifierError> {
        let deadline = Instant::now() + self.delay;
        loop {
            if is_cancelled(cancel) {
                return Err(ClassifierError::Cancelled);
            }
            let now = Instant::now();
            if now >= deadline {
                return Ok(());
            }
            std::thread::sleep(CANCEL_POLL_INTERVAL.min(deadline - now));
        }
    }

    fn draw(&self) -> ClassificationOutcome {
        let entries = catalog::entries();
        let index = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .random_range(0..entries.len());
        entries[index].outcome.clone()
    }
}

impl Classifier for MockClassifier {
    fn classify(
        &self,
        request: &ClassificationRequest,
        cancel: &CancellationToken,
    ) -> Result<ClassificationOutcome, ClassifierError> {
        tracing::debug!(
            file = %request.file_name,
            model = request.model.id(),
            delay_ms = self.delay.as_millis() as u64,
            "simulating classification"
        );
        self.wait(cancel)?;
        // The answer may arrive just as a reset lands.
        if is_cancelled(cancel) {
            return Err(ClassifierError::Cancelled);
        }
        Ok(self.draw())
    }

    fn descriptor(&self) -> ClassifierDescriptor {
        ClassifierDescriptor {
            backend: "mock",
            simulated: true,
        }
    }
}
