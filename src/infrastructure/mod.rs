// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`, plus the I/O that turns paths and clipboard contents
//! into upload candidates.
//!
//! # Available Adapters
//!
//! - [`classifier`]: Catalog-backed mock and HTTP inference service (implement [`Classifier`])
//! - [`intake`]: File, drag-and-drop and clipboard reading
//!
//! [`Classifier`]: crate::application::port::Classifier

pub mod classifier;
pub mod intake;

pub use classifier::{build_classifier, MockClassifier, RemoteClassifier};
