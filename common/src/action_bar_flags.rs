//! Boolean inputs of the action bar.

use serde::{Deserialize, Serialize};

/// Capability and presentation flags supplied by the host on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ActionBarFlags {
    /// Recognized text exists. Gates copy, edit, share, download and save.
    pub has_text: bool,
    /// An extraction record exists. Gates bookmark and delete.
    pub has_extraction: bool,
    pub show_full_buttons: bool,
    pub is_bookmarked: bool,
    pub is_dark: bool,
    pub is_edit_mode: bool,
}

impl ActionBarFlags {
    pub fn new(has_text: bool, has_extraction: bool) -> Self {
        Self {
            has_text,
            has_extraction,
            ..Self::default()
        }
    }

    pub fn with_full_buttons(mut self, show_full_buttons: bool) -> Self {
        self.show_full_buttons = show_full_buttons;
        self
    }

    pub fn with_bookmarked(mut self, is_bookmarked: bool) -> Self {
        self.is_bookmarked = is_bookmarked;
        self
    }

    pub fn with_dark(mut self, is_dark: bool) -> Self {
        self.is_dark = is_dark;
        self
    }

    pub fn with_edit_mode(mut self, is_edit_mode: bool) -> Self {
        self.is_edit_mode = is_edit_mode;
        self
    }
}
