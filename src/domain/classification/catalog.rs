// SPDX-License-Identifier: MPL-2.0
//! Fixed catalog of demonstration outcomes.
//!
//! The mock classifier draws from these three entries. Every field is
//! `'static`, so the catalog lives in read-only memory and outcomes taken
//! from it compare bit-for-bit with the values below.

use std::borrow::Cow;

use super::outcome::{ClassificationOutcome, ConfidenceTier, Prediction, Stage};

/// A keyed catalog outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub key: &'static str,
    pub outcome: ClassificationOutcome,
}

const NORMAL_BREAKDOWN: [Prediction; 4] = [
    Prediction::new(Stage::Normal, 94.2),
    Prediction::new(Stage::VeryMildDementia, 3.8),
    Prediction::new(Stage::MildDementia, 1.5),
    Prediction::new(Stage::ModerateDementia, 0.5),
];

const MILD_BREAKDOWN: [Prediction; 4] = [
    Prediction::new(Stage::VeryMildDementia, 67.3),
    Prediction::new(Stage::Normal, 22.1),
    Prediction::new(Stage::MildDementia, 8.4),
    Prediction::new(Stage::ModerateDementia, 2.2),
];

const MODERATE_BREAKDOWN: [Prediction; 4] = [
    Prediction::new(Stage::ModerateDementia, 88.7),
    Prediction::new(Stage::MildDementia, 7.2),
    Prediction::new(Stage::VeryMildDementia, 3.1),
    Prediction::new(Stage::Normal, 1.0),
];

/// The catalog, in its fixed order: `normal`, `mild`, `moderate`.
pub static CATALOG: [CatalogEntry; 3] = [
    CatalogEntry {
        key: "normal",
        outcome: ClassificationOutcome {
            stage: Stage::Normal,
            confidence_percent: 94.2,
            description: Cow::Borrowed("No significant signs of cognitive impairment detected."),
            tier: ConfidenceTier::Certain,
            breakdown: Cow::Borrowed(&NORMAL_BREAKDOWN),
        },
    },
    CatalogEntry {
        key: "mild",
        outcome: ClassificationOutcome {
            stage: Stage::VeryMildDementia,
            confidence_percent: 67.3,
            description: Cow::Borrowed(
                "Early signs of cognitive decline detected. Further evaluation recommended.",
            ),
            tier: ConfidenceTier::Uncertain,
            breakdown: Cow::Borrowed(&MILD_BREAKDOWN),
        },
    },
    CatalogEntry {
        key: "moderate",
        outcome: ClassificationOutcome {
            stage: Stage::ModerateDementia,
            confidence_percent: 88.7,
            description: Cow::Borrowed(
                "Significant neurological changes consistent with moderate-stage Alzheimer's disease.",
            ),
            tier: ConfidenceTier::Certain,
            breakdown: Cow::Borrowed(&MODERATE_BREAKDOWN),
        },
    },
];

/// Returns all catalog entries in their fixed order.
#[must_use]
pub fn entries() -> &'static [CatalogEntry] {
    &CATALOG
}

/// Looks up an entry by key (`"normal"`, `"mild"`, `"moderate"`).
#[must_use]
pub fn get(key: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.key == key)
}

/// Whether `outcome` is exactly one of the catalog outcomes.
#[must_use]
pub fn contains(outcome: &ClassificationOutcome) -> bool {
    CATALOG.iter().any(|entry| &entry.outcome == outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn catalog_order_is_fixed() {
        let keys: Vec<_> = entries().iter().map(|e| e.key).collect();
        assert_eq!(keys, ["normal", "mild", "moderate"]);
    }

    #[test]
    fn only_mild_entry_is_uncertain() {
        for entry in entries() {
            assert_eq!(entry.outcome.offers_disclosure(), entry.key == "mild");
        }
    }

    #[test]
    fn headline_matches_first_breakdown_row() {
        for entry in entries() {
            let first = entry.outcome.breakdown[0];
            assert_eq!(first.stage, entry.outcome.stage);
            assert_eq!(
                first.confidence_percent.to_bits(),
                entry.outcome.confidence_percent.to_bits()
            );
        }
    }

    #[test]
    fn breakdowns_cover_every_stage_and_sum_to_hundred() {
        for entry in entries() {
            let total: f64 = entry.outcome.breakdown.iter().map(|p| p.confidence_percent).sum();
            assert_relative_eq!(total, 100.0, epsilon = 1e-9);
            for stage in Stage::ALL {
                assert!(entry.outcome.breakdown.iter().any(|p| p.stage == stage));
            }
        }
    }

    #[test]
    fn lookup_by_key() {
        let mild = get("mild").expect("mild entry");
        assert_eq!(mild.outcome.stage, Stage::VeryMildDementia);
        assert_eq!(mild.outcome.confidence_label(), "67.3");
        assert!(get("severe").is_none());
    }

    #[test]
    fn contains_rejects_altered_outcome() {
        let mut outcome = entries()[0].outcome.clone();
        assert!(contains(&outcome));
        outcome.confidence_percent = 94.3;
        assert!(!contains(&outcome));
    }
}
