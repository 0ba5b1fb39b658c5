// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::ui::navbar::Tab;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Scan,
    About,
}

impl Screen {
    /// The navbar tab that shows this screen.
    #[must_use]
    pub fn tab(self) -> Tab {
        match self {
            Screen::Scan => Tab::Scan,
            Screen::About => Tab::About,
        }
    }
}

impl From<Tab> for Screen {
    fn from(tab: Tab) -> Self {
        match tab {
            Tab::Scan => Screen::Scan,
            Tab::About => Screen::About,
        }
    }
}
