// SPDX-License-Identifier: MPL-2.0
//! Classification value objects and the demonstration catalog.

pub mod catalog;
mod model;
mod outcome;

pub use model::ModelProfile;
pub use outcome::{
    format_percent, ClassificationOutcome, ConfidenceTier, Prediction, Stage, UnknownStage,
};
