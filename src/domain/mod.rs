// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core classification types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It depends on `std` only so it can be tested without a window, a runtime
//! or a network.
//!
//! # Modules
//!
//! - [`classification`]: Outcomes, stages, confidence tiers, the canned
//!   [`catalog`](classification::catalog) and [`ModelProfile`](classification::ModelProfile)
//! - [`upload`]: Upload candidates and the [`RejectedUpload`](upload::RejectedUpload) signal

pub mod classification;
pub mod upload;
