// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`classifier`]: Stage classification of an uploaded MRI slice
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no HTTP types)
//! - Traits are `Send + Sync` so adapters can run on the blocking pool
//! - No `async fn` - callers wrap blocking calls in an Iced `Task`

pub mod classifier;

pub use classifier::{
    CancellationToken, ClassificationRequest, Classifier, ClassifierDescriptor, ClassifierError,
};
