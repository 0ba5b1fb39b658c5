// SPDX-License-Identifier: MPL-2.0
//! Selectable model profiles.

use std::fmt;

/// A model profile the user can choose before scanning.
///
/// The profile travels with each classification request; the mock backend
/// ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelProfile {
    #[default]
    Atlas,
    Orion,
    Pulse,
}

impl ModelProfile {
    /// All profiles, in presentation order.
    pub const ALL: [ModelProfile; 3] = [ModelProfile::Atlas, ModelProfile::Orion, ModelProfile::Pulse];

    /// Stable identifier, used in config files and service requests.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            ModelProfile::Atlas => "atlas",
            ModelProfile::Orion => "orion",
            ModelProfile::Pulse => "pulse",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ModelProfile::Atlas => "Atlas",
            ModelProfile::Orion => "Orion",
            ModelProfile::Pulse => "Pulse",
        }
    }

    #[must_use]
    pub const fn architecture(self) -> &'static str {
        match self {
            ModelProfile::Atlas => "ResNet-50",
            ModelProfile::Orion => "ResNet-101",
            ModelProfile::Pulse => "EfficientNet-B2",
        }
    }

    /// Parses an identifier; matching is case-insensitive.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL.into_iter().find(|profile| profile.id().eq_ignore_ascii_case(id))
    }
}

impl fmt::Display for ModelProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} – {}", self.name(), self.architecture())
    }
}
