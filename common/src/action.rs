//! Action kinds offered by the OCR result action bar.

use serde::{Deserialize, Serialize};

/// One user-facing action of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Copy,
    Edit,
    Share,
    Download,
    ToggleBookmark,
    Save,
    Delete,
}

impl ActionKind {
    /// Every action, in render order: primary zone first, then secondary.
    pub const ALL: [ActionKind; 7] = [
        ActionKind::Copy,
        ActionKind::Edit,
        ActionKind::Share,
        ActionKind::Download,
        ActionKind::ToggleBookmark,
        ActionKind::Save,
        ActionKind::Delete,
    ];

    pub fn zone(self) -> ActionZone {
        match self {
            ActionKind::Copy | ActionKind::Edit | ActionKind::Share | ActionKind::Download => ActionZone::Primary,
            ActionKind::ToggleBookmark | ActionKind::Save | ActionKind::Delete => ActionZone::Secondary,
        }
    }

    /// Copy and edit must always be wired by the host.
    pub fn is_required(self) -> bool {
        matches!(self, ActionKind::Copy | ActionKind::Edit)
    }

    /// Stable identifier, used for element ids and keys.
    pub fn slug(self) -> &'static str {
        match self {
            ActionKind::Copy => "copy",
            ActionKind::Edit => "edit",
            ActionKind::Share => "share",
            ActionKind::Download => "download",
            ActionKind::ToggleBookmark => "bookmark",
            ActionKind::Save => "save",
            ActionKind::Delete => "delete",
        }
    }
}

/// Which end of the bar an action sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionZone {
    /// Left-aligned, responsive density.
    Primary,
    /// Right-aligned, icon-only at every width.
    Secondary,
}

/// Icon shown for a control. Renderers map these onto their own icon sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconId {
    Copy,
    Edit,
    EditDone,
    Share,
    Download,
    BookmarkFilled,
    BookmarkOutline,
    Save,
    Delete,
}
