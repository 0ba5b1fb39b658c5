// SPDX-License-Identifier: MPL-2.0
//! `cerebro_scan` is an educational desktop demonstration of Alzheimer's
//! stage classification from brain MRI slices, built with the Iced GUI
//! framework.
//!
//! The default classifier is simulated: after a fixed delay it picks one of
//! three canned outcomes. A remote inference service can be configured in
//! its place. Nothing here is a diagnostic tool.
//!
//! # Layout
//!
//! - [`domain`] - outcomes, model profiles and upload validation
//! - [`application`] - the classifier port
//! - [`infrastructure`] - classifier adapters and file/clipboard intake
//! - [`scan`] - the scan lifecycle controller and preview registry
//! - [`ui`] and [`app`] - the Iced front end

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod scan;
pub mod ui;
