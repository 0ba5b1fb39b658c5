// SPDX-License-Identifier: MPL-2.0
//! Classification outcome value objects.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Stage
// =============================================================================

/// Dementia stage recognized by the classifier.
///
/// The set is closed: the models are trained on exactly these four classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Normal,
    VeryMildDementia,
    MildDementia,
    ModerateDementia,
}

impl Stage {
    /// All stages, from least to most severe.
    pub const ALL: [Stage; 4] = [
        Stage::Normal,
        Stage::VeryMildDementia,
        Stage::MildDementia,
        Stage::ModerateDementia,
    ];

    /// Canonical English label, as exchanged with inference services.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Stage::Normal => "Normal",
            Stage::VeryMildDementia => "Very Mild Dementia",
            Stage::MildDementia => "Mild Dementia",
            Stage::ModerateDementia => "Moderate Dementia",
        }
    }

    /// Returns the i18n message key for the localized label.
    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Stage::Normal => "stage-normal",
            Stage::VeryMildDementia => "stage-very-mild",
            Stage::MildDementia => "stage-mild",
            Stage::ModerateDementia => "stage-moderate",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a stage label is not one of the four known stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStage(pub String);

impl fmt::Display for UnknownStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown stage label: {}", self.0)
    }
}

impl std::error::Error for UnknownStage {}

impl FromStr for Stage {
    type Err = UnknownStage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Stage::ALL
            .into_iter()
            .find(|stage| stage.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownStage(trimmed.to_string()))
    }
}

// =============================================================================
// ConfidenceTier
// =============================================================================

/// Coarse certainty flag gating the "show all predictions" disclosure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    Certain,
    Uncertain,
}

impl ConfidenceTier {
    /// Wire representation (`"certain"` / `"uncertain"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ConfidenceTier::Certain => "certain",
            ConfidenceTier::Uncertain => "uncertain",
        }
    }

    #[must_use]
    pub fn is_uncertain(self) -> bool {
        self == ConfidenceTier::Uncertain
    }
}

impl FromStr for ConfidenceTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "certain" => Ok(ConfidenceTier::Certain),
            "uncertain" => Ok(ConfidenceTier::Uncertain),
            other => Err(format!("unknown confidence tier: {other}")),
        }
    }
}

// =============================================================================
// Prediction / ClassificationOutcome
// =============================================================================

/// One row of the probability breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub stage: Stage,
    /// Confidence in percent (0–100).
    pub confidence_percent: f64,
}

impl Prediction {
    #[must_use]
    pub const fn new(stage: Stage, confidence_percent: f64) -> Self {
        Self {
            stage,
            confidence_percent,
        }
    }

    /// Fraction of a full bar this prediction occupies, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn bar_fraction(&self) -> f32 {
        (self.confidence_percent / 100.0).clamp(0.0, 1.0) as f32
    }
}

/// Result of classifying one image.
///
/// Catalog outcomes borrow `'static` data; outcomes received from an
/// inference service own theirs. The breakdown keeps the order it was
/// produced in and its percentages need not sum to 100.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationOutcome {
    pub stage: Stage,
    /// Confidence of `stage` in percent (0–100).
    pub confidence_percent: f64,
    pub description: Cow<'static, str>,
    pub tier: ConfidenceTier,
    pub breakdown: Cow<'static, [Prediction]>,
}

impl ClassificationOutcome {
    /// Whether the presenter may offer the full breakdown.
    #[must_use]
    pub fn offers_disclosure(&self) -> bool {
        self.tier.is_uncertain()
    }

    /// Confidence formatted with one decimal place (e.g. `"67.3"`).
    #[must_use]
    pub fn confidence_label(&self) -> String {
        format_percent(self.confidence_percent)
    }
}

/// Formats a percentage with exactly one decimal place.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}")
}
