//! Responsive layout of the action bar.

use serde::{Deserialize, Serialize};

use crate::action::ActionZone;
use crate::action_bar_flags::ActionBarFlags;
use crate::control::{ActionBarModel, ControlDescriptor};
use crate::style::{ControlState, StyleTokens, resolve_style};
use crate::theme::Theme;

/// Widths below this many CSS pixels count as narrow.
pub const NARROW_MAX_WIDTH_PX: f64 = 640.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Breakpoint {
    #[default]
    Narrow,
    Wide,
}

impl Breakpoint {
    pub fn from_width(width_px: f64) -> Self {
        if width_px < NARROW_MAX_WIDTH_PX {
            Breakpoint::Narrow
        } else {
            Breakpoint::Wide
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PresentationForm {
    IconOnly,
    IconWithLabel,
}

/// Secondary controls are always icon-only. Primary controls carry their label
/// only on wide viewports, and only when the host asked for full buttons.
pub fn presentation_form(zone: ActionZone, breakpoint: Breakpoint, show_full_buttons: bool) -> PresentationForm {
    match (zone, breakpoint, show_full_buttons) {
        (ActionZone::Primary, Breakpoint::Wide, true) => PresentationForm::IconWithLabel,
        _ => PresentationForm::IconOnly,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutControl {
    pub descriptor: ControlDescriptor,
    pub form: PresentationForm,
    pub style: StyleTokens,
}

impl LaidOutControl {
    pub fn shows_label(&self) -> bool {
        self.form == PresentationForm::IconWithLabel
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActionBarLayout {
    /// Left-aligned.
    pub primary: Vec<LaidOutControl>,
    /// Right-aligned.
    pub secondary: Vec<LaidOutControl>,
}

impl ActionBarLayout {
    pub fn iter(&self) -> impl Iterator<Item = &LaidOutControl> {
        self.primary.iter().chain(self.secondary.iter())
    }
}

pub fn lay_out(model: &ActionBarModel, flags: &ActionBarFlags, breakpoint: Breakpoint) -> ActionBarLayout {
    let theme = Theme::from_dark_flag(flags.is_dark);
    let place = |descriptor: &ControlDescriptor| LaidOutControl {
        form: presentation_form(descriptor.zone, breakpoint, flags.show_full_buttons),
        style: resolve_style(
            descriptor.role,
            ControlState {
                enabled: descriptor.enabled,
                active: descriptor.active,
                theme,
            },
        ),
        descriptor: descriptor.clone(),
    };
    ActionBarLayout {
        primary: model.zone(ActionZone::Primary).map(place).collect(),
        secondary: model.zone(ActionZone::Secondary).map(place).collect(),
    }
}
