// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded in the binary at build time.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, then system settings
//! - Language-only fallback (`fr-CA` uses the `fr` bundle)
//! - Per-key fallback to `en-US` when a translation is missing
//! - Placeholder substitution through [`fluent::I18n::tr_with_args`]

pub mod fluent;

pub use fluent::I18n;
