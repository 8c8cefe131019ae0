//! Host-side state of an OCR result view.

use serde::{Deserialize, Serialize};

use crate::action_bar_flags::ActionBarFlags;

/// A stored OCR extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    pub id: u64,
    pub filename: String,
    pub extracted_text: String,
    pub source_type: String,
    pub ocr_model: String,
    pub language: String,
    pub is_bookmarked: bool,
}

impl ExtractionRecord {
    pub fn new(id: u64, filename: impl Into<String>, extracted_text: impl Into<String>) -> Self {
        Self {
            id,
            filename: filename.into(),
            extracted_text: extracted_text.into(),
            source_type: "image".to_string(),
            ocr_model: "tesseract".to_string(),
            language: "auto".to_string(),
            is_bookmarked: false,
        }
    }
}

/// Presentation preferences that ride along in the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ViewPrefs {
    pub is_dark: bool,
    pub show_full_buttons: bool,
}

impl ViewPrefs {
    pub fn toggled_dark(self) -> Self {
        Self { is_dark: !self.is_dark, ..self }
    }

    pub fn toggled_full_buttons(self) -> Self {
        Self { show_full_buttons: !self.show_full_buttons, ..self }
    }
}

/// What the result view shows: the recognized text, the record it came from
/// (if it is stored), and the pending edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ResultViewState {
    pub text: String,
    pub record: Option<ExtractionRecord>,
    /// Set while edit mode is on.
    pub draft: Option<String>,
}

impl ResultViewState {
    pub fn from_record(record: ExtractionRecord) -> Self {
        Self {
            text: record.extracted_text.clone(),
            record: Some(record),
            draft: None,
        }
    }

    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn is_edit_mode(&self) -> bool {
        self.draft.is_some()
    }

    pub fn is_bookmarked(&self) -> bool {
        self.record.as_ref().is_some_and(|r| r.is_bookmarked)
    }

    pub fn action_bar_flags(&self, prefs: &ViewPrefs) -> ActionBarFlags {
        ActionBarFlags {
            has_text: self.has_text(),
            has_extraction: self.record.is_some(),
            show_full_buttons: prefs.show_full_buttons,
            is_bookmarked: self.is_bookmarked(),
            is_dark: prefs.is_dark,
            is_edit_mode: self.is_edit_mode(),
        }
    }

    /// Enters edit mode with a draft seeded from the current text.
    pub fn begin_edit(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(self.text.clone());
        }
    }

    /// Leaves edit mode without committing. Returns the discarded draft.
    pub fn finish_edit(&mut self) -> Option<String> {
        self.draft.take()
    }

    /// What the edit control does: begin editing, or finish and drop the draft.
    pub fn toggle_edit(&mut self) {
        if self.is_edit_mode() {
            self.finish_edit();
        } else {
            self.begin_edit();
        }
    }

    pub fn set_draft(&mut self, draft: String) {
        if let Some(current) = self.draft.as_mut() {
            *current = draft;
        }
    }

    /// Commits the draft, if any, and leaves edit mode. Returns whether the text changed.
    pub fn save_edits(&mut self) -> bool {
        let Some(draft) = self.draft.take() else {
            return false;
        };
        let changed = draft != self.text;
        self.text = draft;
        if let Some(record) = self.record.as_mut() {
            record.extracted_text = self.text.clone();
        }
        changed
    }

    /// Flips the bookmark and returns the new state. No-op without a record.
    pub fn toggle_bookmark(&mut self) -> Option<bool> {
        let record = self.record.as_mut()?;
        record.is_bookmarked = !record.is_bookmarked;
        Some(record.is_bookmarked)
    }

    /// Drops the stored record. The recognized text stays on screen.
    pub fn delete(&mut self) -> Option<ExtractionRecord> {
        self.record.take()
    }

    /// Name for the downloaded `.txt`: the record filename with its extension
    /// replaced.
    pub fn download_filename(&self) -> String {
        let stem = self
            .record
            .as_ref()
            .map(|r| r.filename.as_str())
            .map(|name| name.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(name))
            .filter(|stem| !stem.is_empty());
        match stem {
            Some(stem) => format!("{stem}.txt"),
            None => "extracted_text.txt".to_string(),
        }
    }
}
