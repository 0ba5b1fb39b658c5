// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`scan_view`] - Upload, scan and results
//! - [`about`] - Project description, disclaimer and credits
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Brand and tab shell
//! - [`footer`] - Educational-use notice
//! - [`notifications`] - Toast notification system for user feedback
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, bars)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod about;
pub mod design_tokens;
pub mod footer;
pub mod navbar;
pub mod notifications;
pub mod scan_view;
pub mod styles;
pub mod theming;
pub mod widgets;
