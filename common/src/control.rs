//! Declarative control table and the per-render action bar model.

use serde::{Deserialize, Serialize};

use crate::action::{ActionKind, ActionZone, IconId};
use crate::action_bar_flags::ActionBarFlags;
use crate::action_handlers::{ActionHandlers, HandlerPresence};
use crate::style::ControlRole;

/// When a control is part of the bar at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Presence {
    Always,
    WhenHandlerSupplied,
}

/// The flag that makes a control interactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gate {
    HasText,
    HasExtraction,
}

impl Gate {
    pub fn is_open(self, flags: &ActionBarFlags) -> bool {
        match self {
            Gate::HasText => flags.has_text,
            Gate::HasExtraction => flags.has_extraction,
        }
    }
}

/// The state flag that switches a control into its "active" look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveWhen {
    Never,
    EditMode,
    Bookmarked,
}

impl ActiveWhen {
    pub fn is_active(self, flags: &ActionBarFlags) -> bool {
        match self {
            ActiveWhen::Never => false,
            ActiveWhen::EditMode => flags.is_edit_mode,
            ActiveWhen::Bookmarked => flags.is_bookmarked,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlRule {
    pub kind: ActionKind,
    pub role: ControlRole,
    pub presence: Presence,
    pub gate: Gate,
    pub active_when: ActiveWhen,
}

/// Every control the bar can show, in render order.
pub const CONTROL_TABLE: [ControlRule; 7] = [
    ControlRule {
        kind: ActionKind::Copy,
        role: ControlRole::Neutral,
        presence: Presence::Always,
        gate: Gate::HasText,
        active_when: ActiveWhen::Never,
    },
    ControlRule {
        kind: ActionKind::Edit,
        role: ControlRole::Edit,
        presence: Presence::Always,
        gate: Gate::HasText,
        active_when: ActiveWhen::EditMode,
    },
    ControlRule {
        kind: ActionKind::Share,
        role: ControlRole::Neutral,
        presence: Presence::WhenHandlerSupplied,
        gate: Gate::HasText,
        active_when: ActiveWhen::Never,
    },
    ControlRule {
        kind: ActionKind::Download,
        role: ControlRole::Neutral,
        presence: Presence::WhenHandlerSupplied,
        gate: Gate::HasText,
        active_when: ActiveWhen::Never,
    },
    ControlRule {
        kind: ActionKind::ToggleBookmark,
        role: ControlRole::Bookmark,
        presence: Presence::WhenHandlerSupplied,
        gate: Gate::HasExtraction,
        active_when: ActiveWhen::Bookmarked,
    },
    ControlRule {
        kind: ActionKind::Save,
        role: ControlRole::Save,
        presence: Presence::WhenHandlerSupplied,
        gate: Gate::HasText,
        active_when: ActiveWhen::EditMode,
    },
    ControlRule {
        kind: ActionKind::Delete,
        role: ControlRole::Delete,
        presence: Presence::WhenHandlerSupplied,
        gate: Gate::HasExtraction,
        active_when: ActiveWhen::Never,
    },
];

impl ControlRule {
    pub fn is_present(&self, presence: &HandlerPresence) -> bool {
        match self.presence {
            Presence::Always => true,
            Presence::WhenHandlerSupplied => presence.is_supplied(self.kind),
        }
    }

    pub fn describe(&self, flags: &ActionBarFlags) -> ControlDescriptor {
        let active = self.active_when.is_active(flags);
        let (icon, label, tooltip) = visuals(self.kind, active);
        ControlDescriptor {
            kind: self.kind,
            zone: self.kind.zone(),
            role: self.role,
            icon,
            label,
            tooltip,
            enabled: self.gate.is_open(flags),
            active,
            pulsing: self.role == ControlRole::Save && active,
        }
    }
}

fn visuals(kind: ActionKind, active: bool) -> (IconId, &'static str, &'static str) {
    match (kind, active) {
        (ActionKind::Copy, _) => (IconId::Copy, "Copy", "Copy text"),
        (ActionKind::Edit, false) => (IconId::Edit, "Edit", "Edit text"),
        (ActionKind::Edit, true) => (IconId::EditDone, "Done editing", "Finish editing"),
        (ActionKind::Share, _) => (IconId::Share, "Share", "Share"),
        (ActionKind::Download, _) => (IconId::Download, "Download", "Download as text file"),
        (ActionKind::ToggleBookmark, false) => (IconId::BookmarkOutline, "Bookmark", "Bookmark"),
        (ActionKind::ToggleBookmark, true) => (IconId::BookmarkFilled, "Bookmarked", "Remove bookmark"),
        (ActionKind::Save, false) => (IconId::Save, "Save", "Save"),
        (ActionKind::Save, true) => (IconId::Save, "Save edits", "Save edits"),
        (ActionKind::Delete, _) => (IconId::Delete, "Delete", "Delete extraction"),
    }
}

/// One rendered control, independent of how it is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlDescriptor {
    pub kind: ActionKind,
    pub zone: ActionZone,
    pub role: ControlRole,
    pub icon: IconId,
    pub label: &'static str,
    pub tooltip: &'static str,
    pub enabled: bool,
    pub active: bool,
    /// Unsaved edits: the save control draws attention to itself.
    pub pulsing: bool,
}

impl ControlDescriptor {
    /// Edit and bookmark switch between two states; the rest are one-shot actions.
    pub fn is_toggle(&self) -> bool {
        matches!(self.role, ControlRole::Edit | ControlRole::Bookmark)
    }
}

/// The controls of one render pass, in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionBarModel {
    controls: Vec<ControlDescriptor>,
}

impl ActionBarModel {
    pub fn build(flags: &ActionBarFlags, presence: &HandlerPresence) -> Self {
        let controls = CONTROL_TABLE
            .iter()
            .filter(|rule| rule.is_present(presence))
            .map(|rule| rule.describe(flags))
            .collect();
        Self { controls }
    }

    pub fn controls(&self) -> &[ControlDescriptor] {
        &self.controls
    }

    pub fn zone(&self, zone: ActionZone) -> impl Iterator<Item = &ControlDescriptor> {
        self.controls.iter().filter(move |c| c.zone == zone)
    }

    pub fn get(&self, kind: ActionKind) -> Option<&ControlDescriptor> {
        self.controls.iter().find(|c| c.kind == kind)
    }

    /// The handler an activation of `kind` should run. `None` when the control is
    /// absent or disabled.
    pub fn dispatch<'h, H>(&self, kind: ActionKind, handlers: &'h ActionHandlers<H>) -> Option<&'h H> {
        let Some(control) = self.get(kind) else {
            tracing::debug!("ignoring activation of absent control {:?}", kind);
            return None;
        };
        if !control.enabled {
            tracing::debug!("ignoring activation of disabled control {:?}", kind);
            return None;
        }
        handlers.handler(kind)
    }
}

impl<F: Fn()> ActionHandlers<F> {
    /// Dispatch and run the handler. Returns whether a handler ran.
    pub fn trigger(&self, model: &ActionBarModel, kind: ActionKind) -> bool {
        match model.dispatch(kind, self) {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}
