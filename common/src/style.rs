//! Style resolution for action bar controls.
//!
//! `resolve_style` is a pure function of the control role and its visual state,
//! so any renderer (inline CSS, a terminal, a canvas) can share it.

use serde::{Deserialize, Serialize};

use crate::theme::{BOOKMARK_ACTIVE, DELETE_WARNING, DELETE_WARNING_MUTED, Theme};

/// Opacity applied to disabled controls.
pub const DISABLED_OPACITY: f32 = 0.55;

/// Styling family of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlRole {
    /// Copy, share, download.
    Neutral,
    Edit,
    Bookmark,
    Save,
    Delete,
}

/// Everything the style of a control depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlState {
    pub enabled: bool,
    /// Edit mode for edit and save, bookmarked for the bookmark toggle.
    pub active: bool,
    pub theme: Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cursor {
    Pointer,
    NotAllowed,
}

impl Cursor {
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Pointer => "pointer",
            Cursor::NotAllowed => "not-allowed",
        }
    }
}

/// Resolved presentation of one control.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTokens {
    /// Text and icon colour.
    pub color: &'static str,
    pub border_color: &'static str,
    pub background: &'static str,
    pub hover_background: &'static str,
    pub cursor: Cursor,
    pub opacity: f32,
    /// Attention-drawing pulse animation.
    pub pulse: bool,
    /// Colour of the pulse ring.
    pub pulse_color: &'static str,
    pub focus_ring: &'static str,
}

impl StyleTokens {
    /// Inline CSS declarations. Colours the stylesheet needs for `:hover`,
    /// `:focus-visible` and the pulse keyframes are exposed as the
    /// `--action-hover-bg`, `--action-focus` and `--action-pulse` custom properties.
    pub fn to_inline_css(&self) -> String {
        format!(
            "color: {}; border-color: {}; background: {}; --action-hover-bg: {}; --action-focus: {}; --action-pulse: {}; cursor: {}; opacity: {};",
            self.color,
            self.border_color,
            self.background,
            self.hover_background,
            self.focus_ring,
            self.pulse_color,
            self.cursor.as_css(),
            self.opacity,
        )
    }
}

pub fn resolve_style(role: ControlRole, state: ControlState) -> StyleTokens {
    let palette = state.theme.palette();
    let enabled = state.enabled;

    let mut tokens = StyleTokens {
        color: if enabled { palette.text } else { palette.muted_text },
        border_color: if enabled { palette.border } else { palette.muted_border },
        background: palette.surface,
        hover_background: if enabled { palette.hover_background } else { palette.surface },
        cursor: if enabled { Cursor::Pointer } else { Cursor::NotAllowed },
        opacity: if enabled { 1.0 } else { DISABLED_OPACITY },
        pulse: false,
        pulse_color: palette.pending,
        focus_ring: palette.focus_ring,
    };

    match role {
        ControlRole::Neutral => {}
        ControlRole::Edit => {
            if state.active {
                tokens.color = palette.on_accent;
                tokens.border_color = palette.accent;
                tokens.background = palette.accent;
                tokens.hover_background = if enabled { palette.accent_hover } else { palette.accent };
            }
        }
        ControlRole::Bookmark => {
            tokens.color = match (state.active, enabled) {
                (true, _) => BOOKMARK_ACTIVE,
                (false, true) => palette.text_secondary,
                (false, false) => palette.muted_text,
            };
        }
        ControlRole::Save => {
            if state.active {
                tokens.color = palette.pending;
                tokens.border_color = palette.pending;
                if enabled {
                    tokens.hover_background = palette.pending_hover_background;
                }
                tokens.pulse = true;
            }
        }
        ControlRole::Delete => {
            tokens.color = if enabled { DELETE_WARNING } else { DELETE_WARNING_MUTED };
            if enabled {
                tokens.hover_background = palette.danger_hover_background;
            }
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::theme::{DARK_PALETTE, LIGHT_PALETTE};

    fn state(enabled: bool, active: bool, theme: Theme) -> ControlState {
        ControlState { enabled, active, theme }
    }

    #[test]
    fn neutral_colors_follow_the_theme_palette() {
        let light = resolve_style(ControlRole::Neutral, state(true, false, Theme::Light));
        let dark = resolve_style(ControlRole::Neutral, state(true, false, Theme::Dark));
        assert_eq!(light.color, LIGHT_PALETTE.text);
        assert_eq!(dark.color, DARK_PALETTE.text);
        assert_eq!(light.border_color, LIGHT_PALETTE.border);
        assert_eq!(dark.hover_background, DARK_PALETTE.hover_background);
    }

    #[test]
    fn disabled_controls_are_muted_and_not_clickable_looking() {
        let tokens = resolve_style(ControlRole::Neutral, state(false, false, Theme::Light));
        assert_eq!(tokens.color, LIGHT_PALETTE.muted_text);
        assert_eq!(tokens.cursor, Cursor::NotAllowed);
        assert_eq!(tokens.opacity, DISABLED_OPACITY);
        assert_eq!(tokens.hover_background, tokens.background);
    }

    #[rstest]
    #[case(Theme::Light, true)]
    #[case(Theme::Light, false)]
    #[case(Theme::Dark, true)]
    #[case(Theme::Dark, false)]
    fn bookmarked_is_yellow_in_every_theme(#[case] theme: Theme, #[case] enabled: bool) {
        let tokens = resolve_style(ControlRole::Bookmark, state(enabled, true, theme));
        assert_eq!(tokens.color, BOOKMARK_ACTIVE);
    }

    #[test]
    fn unbookmarked_uses_neutral_colour_dimmed_when_disabled() {
        let enabled = resolve_style(ControlRole::Bookmark, state(true, false, Theme::Dark));
        let disabled = resolve_style(ControlRole::Bookmark, state(false, false, Theme::Dark));
        assert_eq!(enabled.color, DARK_PALETTE.text_secondary);
        assert_eq!(disabled.color, DARK_PALETTE.muted_text);
    }

    #[test]
    fn delete_is_red_with_reduced_intensity_when_disabled() {
        let enabled = resolve_style(ControlRole::Delete, state(true, false, Theme::Light));
        let disabled = resolve_style(ControlRole::Delete, state(false, false, Theme::Light));
        assert_eq!(enabled.color, DELETE_WARNING);
        assert_eq!(disabled.color, DELETE_WARNING_MUTED);
        assert!(disabled.opacity < enabled.opacity);
    }

    #[test]
    fn active_edit_is_filled_with_the_accent() {
        let tokens = resolve_style(ControlRole::Edit, state(true, true, Theme::Light));
        assert_eq!(tokens.background, LIGHT_PALETTE.accent);
        assert_eq!(tokens.color, LIGHT_PALETTE.on_accent);
        let idle = resolve_style(ControlRole::Edit, state(true, false, Theme::Light));
        assert_eq!(idle.background, LIGHT_PALETTE.surface);
    }

    #[test]
    fn save_pulses_only_in_edit_mode() {
        let pending = resolve_style(ControlRole::Save, state(true, true, Theme::Dark));
        assert!(pending.pulse);
        assert_eq!(pending.color, DARK_PALETTE.pending);
        let idle = resolve_style(ControlRole::Save, state(true, false, Theme::Dark));
        assert!(!idle.pulse);
        assert_eq!(idle.color, DARK_PALETTE.text);
    }

    #[test]
    fn inline_css_carries_every_token() {
        let css = resolve_style(ControlRole::Delete, state(true, false, Theme::Light)).to_inline_css();
        assert!(css.contains("color: #DC2626;"));
        assert!(css.contains("--action-hover-bg: #FEF2F2;"));
        assert!(css.contains("cursor: pointer;"));
        assert!(css.contains("opacity: 1;"));
        assert!(css.contains("--action-focus: #4F46E5;"));
    }

    #[rstest]
    #[case(Theme::Light, "#059669", "#4F46E5")]
    #[case(Theme::Dark, "#34D399", "#818CF8")]
    fn pulse_and_focus_colours_follow_the_theme(#[case] theme: Theme, #[case] pulse: &str, #[case] focus: &str) {
        let tokens = resolve_style(ControlRole::Save, state(true, true, theme));
        assert_eq!(tokens.pulse_color, pulse);
        assert_eq!(tokens.focus_ring, focus);
        let css = tokens.to_inline_css();
        assert!(css.contains(&format!("--action-pulse: {pulse};")), "{css}");
        assert!(css.contains(&format!("--action-focus: {focus};")), "{css}");
    }
}
