//! Light and dark colour palettes.

use serde::{Deserialize, Serialize};

/// Bookmark indicator when the extraction is bookmarked. Same in both themes.
pub const BOOKMARK_ACTIVE: &str = "#EAB308";
/// Delete control colour. Same in both themes.
pub const DELETE_WARNING: &str = "#DC2626";
/// Delete control colour while disabled.
pub const DELETE_WARNING_MUTED: &str = "#F87171";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark { Theme::Dark } else { Theme::Light }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT_PALETTE,
            Theme::Dark => &DARK_PALETTE,
        }
    }
}

/// Every themed colour the bar uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub bar_background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub muted_text: &'static str,
    pub border: &'static str,
    pub muted_border: &'static str,
    pub hover_background: &'static str,
    /// Fill of the edit control while edit mode is on.
    pub accent: &'static str,
    pub accent_hover: &'static str,
    pub on_accent: &'static str,
    /// Save control colour while there are unsaved edits.
    pub pending: &'static str,
    pub pending_hover_background: &'static str,
    pub danger_hover_background: &'static str,
    /// Keyboard focus outline.
    pub focus_ring: &'static str,
}

pub static LIGHT_PALETTE: Palette = Palette {
    bar_background: "#F8FCFF",
    surface: "#FFFFFF",
    text: "#1F2937",
    text_secondary: "#4B5563",
    muted_text: "#9CA3AF",
    border: "#D1D5DB",
    muted_border: "#E5E7EB",
    hover_background: "#F3F4F6",
    accent: "#4F46E5",
    accent_hover: "#4338CA",
    on_accent: "#FFFFFF",
    pending: "#059669",
    pending_hover_background: "#ECFDF5",
    danger_hover_background: "#FEF2F2",
    focus_ring: "#4F46E5",
};

pub static DARK_PALETTE: Palette = Palette {
    bar_background: "#1C212D",
    surface: "#111827",
    text: "#F3F4F6",
    text_secondary: "#D1D5DB",
    muted_text: "#6B7280",
    border: "#4B5563",
    muted_border: "#374151",
    hover_background: "#374151",
    accent: "#6366F1",
    accent_hover: "#818CF8",
    on_accent: "#FFFFFF",
    pending: "#34D399",
    pending_hover_background: "#064E3B",
    danger_hover_background: "#450A0A",
    focus_ring: "#818CF8",
};
