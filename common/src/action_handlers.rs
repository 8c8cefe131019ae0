//! Host-supplied callbacks, one per action.

use crate::action::ActionKind;

/// The callback set wired into the bar.
///
/// `H` is whatever the renderer calls: a Dioxus `Callback<()>` in the frontend,
/// a plain closure in tests. Copy and edit are required by construction; the
/// other handlers decide whether their control exists at all.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionHandlers<H> {
    pub on_copy: H,
    pub on_edit: H,
    pub on_share: Option<H>,
    pub on_download: Option<H>,
    pub on_toggle_bookmark: Option<H>,
    pub on_save: Option<H>,
    pub on_delete: Option<H>,
}

impl<H> ActionHandlers<H> {
    /// Only the required handlers; every optional control is omitted.
    pub fn new(on_copy: H, on_edit: H) -> Self {
        Self {
            on_copy,
            on_edit,
            on_share: None,
            on_download: None,
            on_toggle_bookmark: None,
            on_save: None,
            on_delete: None,
        }
    }

    pub fn handler(&self, kind: ActionKind) -> Option<&H> {
        match kind {
            ActionKind::Copy => Some(&self.on_copy),
            ActionKind::Edit => Some(&self.on_edit),
            ActionKind::Share => self.on_share.as_ref(),
            ActionKind::Download => self.on_download.as_ref(),
            ActionKind::ToggleBookmark => self.on_toggle_bookmark.as_ref(),
            ActionKind::Save => self.on_save.as_ref(),
            ActionKind::Delete => self.on_delete.as_ref(),
        }
    }

    pub fn presence(&self) -> HandlerPresence {
        HandlerPresence {
            share: self.on_share.is_some(),
            download: self.on_download.is_some(),
            toggle_bookmark: self.on_toggle_bookmark.is_some(),
            save: self.on_save.is_some(),
            delete: self.on_delete.is_some(),
        }
    }
}

/// Which optional handlers were supplied, detached from the handlers themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandlerPresence {
    pub share: bool,
    pub download: bool,
    pub toggle_bookmark: bool,
    pub save: bool,
    pub delete: bool,
}

impl HandlerPresence {
    /// Every optional handler supplied.
    pub fn all() -> Self {
        Self {
            share: true,
            download: true,
            toggle_bookmark: true,
            save: true,
            delete: true,
        }
    }

    pub fn is_supplied(&self, kind: ActionKind) -> bool {
        match kind {
            ActionKind::Copy | ActionKind::Edit => true,
            ActionKind::Share => self.share,
            ActionKind::Download => self.download,
            ActionKind::ToggleBookmark => self.toggle_bookmark,
            ActionKind::Save => self.save,
            ActionKind::Delete => self.delete,
        }
    }
}
