// SPDX-License-Identifier: MPL-2.0
//! Top-level navigation: the active tab plus an optional detail selection.
//!
//! While a record is selected, the detail view replaces the tab content.
//! Navigation is not persisted; every launch starts on Today.

use crate::apod::PictureRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Today,
    DatePick,
    Recent,
    Favorites,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Today, Tab::DatePick, Tab::Recent, Tab::Favorites];

    /// Returns the i18n key for the tab label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Tab::Today => "tab-today",
            Tab::DatePick => "tab-date",
            Tab::Recent => "tab-recent",
            Tab::Favorites => "tab-favorites",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Navigation {
    active_tab: Tab,
    selected: Option<PictureRecord>,
}

impl Navigation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches tab. Any detail selection is cleared, including when `tab`
    /// is already active.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.selected = None;
    }

    /// Opens the detail view for `record`, keeping the active tab.
    pub fn select_item(&mut self, record: PictureRecord) {
        self.selected = Some(record);
    }

    /// Closes the detail view, keeping the active tab.
    pub fn close_selection(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    #[must_use]
    pub fn selected(&self) -> Option<&PictureRecord> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }
}
