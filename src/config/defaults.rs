// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Upload**: Maximum accepted file size
//! - **Classifier**: Simulated delay, service endpoint and timeout

// ==========================================================================
// Upload Defaults
// ==========================================================================

pub use crate::domain::upload::{DEFAULT_MAX_UPLOAD_MB, MAX_MAX_UPLOAD_MB, MIN_MAX_UPLOAD_MB};

// ==========================================================================
// Classifier Defaults
// ==========================================================================

/// Default simulated analysis time of the mock classifier (in milliseconds).
pub const DEFAULT_SIMULATED_DELAY_MS: u64 = 2500;

/// Minimum simulated delay (in milliseconds).
pub const MIN_SIMULATED_DELAY_MS: u64 = 0;

/// Maximum simulated delay (in milliseconds).
pub const MAX_SIMULATED_DELAY_MS: u64 = 60_000;

/// Default inference service endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/classify";

/// Default inference request timeout (in seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Minimum inference request timeout (in seconds).
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum inference request timeout (in seconds).
pub const MAX_TIMEOUT_SECS: u64 = 300;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MAX_UPLOAD_MB > 0);
    assert!(DEFAULT_MAX_UPLOAD_MB >= MIN_MAX_UPLOAD_MB);
    assert!(DEFAULT_MAX_UPLOAD_MB <= MAX_MAX_UPLOAD_MB);

    assert!(DEFAULT_SIMULATED_DELAY_MS >= MIN_SIMULATED_DELAY_MS);
    assert!(DEFAULT_SIMULATED_DELAY_MS <= MAX_SIMULATED_DELAY_MS);

    assert!(MIN_TIMEOUT_SECS > 0);
    assert!(DEFAULT_TIMEOUT_SECS >= MIN_TIMEOUT_SECS);
    assert!(DEFAULT_TIMEOUT_SECS <= MAX_TIMEOUT_SECS);
};
