// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer drives the ports through the scan controller
//!
//! # Example
//!
//! ```ignore
//! use cerebro_scan::application::port::Classifier;
//!
//! struct LocalModel { /* ... */ }
//! impl Classifier for LocalModel { /* ... */ }
//! ```

pub mod port;
