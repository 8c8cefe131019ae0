//! OCR result view: recognized text with its action bar.

use std::time::Duration;

use common::extraction::{ExtractionRecord, ResultViewState, ViewPrefs};
use common::theme::Theme;
use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_primitives::toast::{ToastOptions, consume_toast};

use crate::api::browser_api::{copy_to_clipboard, current_href, download_text_file};
use crate::components::action_bar::ActionBar;
use crate::data_definitions::url_param::UrlParam;

const SAMPLE_TEXT: &str = "GROCERY MARKET\n\n2x Apples          3.20\n1x Bread           2.10\n1x Milk 1L         1.15\n\nTOTAL              6.45\nTHANK YOU!";

fn sample_record() -> ExtractionRecord {
    ExtractionRecord::new(1, "receipt.png", SAMPLE_TEXT)
}

fn notify(title: &str, description: &str) {
    consume_toast().info(
        title.to_string(),
        ToastOptions::new()
            .description(description)
            .duration(Duration::from_secs(5))
            .permanent(false),
    );
}

/// Result view with default preferences.
#[component]
pub fn ResultViewPage() -> Element {
    rsx! {
        Title { "OCR Result" }
        ResultView { prefs: ViewPrefs::default() }
    }
}

/// Result view with preferences taken from the URL.
#[component]
pub fn ResultViewPageWithPrefs(prefs: UrlParam<ViewPrefs>) -> Element {
    rsx! {
        Title { "OCR Result" }
        ResultView { prefs: prefs.into_inner() }
    }
}

#[component]
fn ResultView(prefs: ReadSignal<ViewPrefs>) -> Element {
    let mut view = use_signal(|| ResultViewState::from_record(sample_record()));
    let mut copied = use_signal(|| false);

    let on_copy = use_callback(move |_: ()| {
        let text = view.read().text.clone();
        spawn(async move {
            match copy_to_clipboard(&text).await {
                Ok(()) => {
                    tracing::info!("Copied {} characters to clipboard", text.len());
                    copied.set(true);
                    gloo_timers::future::TimeoutFuture::new(1_500).await;
                    copied.set(false);
                }
                Err(e) => {
                    tracing::warn!("Copy failed: {e:#}");
                    notify("Copy failed.", "The text could not be written to the clipboard.");
                }
            }
        });
    });

    let on_edit = use_callback(move |_: ()| {
        view.write().toggle_edit();
        tracing::info!("Edit mode: {}", view.read().is_edit_mode());
    });

    let on_share = use_callback(move |_: ()| {
        let href = match current_href() {
            Ok(href) => href,
            Err(e) => {
                tracing::warn!("Share failed: {e:#}");
                return;
            }
        };
        spawn(async move {
            match copy_to_clipboard(&href).await {
                Ok(()) => notify("Link copied to clipboard.", "The result link has been copied to your clipboard."),
                Err(e) => tracing::warn!("Share failed: {e:#}"),
            }
        });
    });

    let on_download = use_callback(move |_: ()| {
        let (filename, text) = {
            let view = view.read();
            (view.download_filename(), view.text.clone())
        };
        match download_text_file(&filename, &text) {
            Ok(()) => notify("Download started.", &format!("Saving {filename}.")),
            Err(e) => tracing::warn!("Download failed: {e:#}"),
        }
    });

    let on_toggle_bookmark = use_callback(move |_: ()| {
        let bookmarked = view.write().toggle_bookmark();
        tracing::info!("Bookmark toggled: {bookmarked:?}");
        if let Some(bookmarked) = bookmarked {
            let title = if bookmarked { "Bookmarked." } else { "Bookmark removed." };
            notify(title, "The extraction bookmark has been updated.");
        }
    });

    let on_save = use_callback(move |_: ()| {
        let was_editing = view.read().is_edit_mode();
        let changed = view.write().save_edits();
        tracing::info!("Save: editing={was_editing} changed={changed}");
        if changed {
            notify("Edits saved.", "The recognized text has been updated.");
        } else if was_editing {
            notify("Nothing to save.", "The text was not changed.");
        } else {
            notify("Saved.", "The recognized text is up to date.");
        }
    });

    let on_delete = use_callback(move |_: ()| {
        let deleted = view.write().delete();
        if let Some(record) = deleted {
            tracing::info!("Deleted extraction {}", record.id);
            notify("Extraction deleted.", &format!("{} was removed from your history.", record.filename));
        }
    });

    let prefs_now = prefs();
    let flags = view.read().action_bar_flags(&prefs_now);
    let palette = Theme::from_dark_flag(prefs_now.is_dark).palette();
    let text_color = palette.text;
    let muted_color = palette.muted_text;
    let border_color = palette.border;
    let surface = palette.surface;
    let filename = view
        .read()
        .record
        .as_ref()
        .map(|r| r.filename.clone())
        .unwrap_or_else(|| "unsaved result".to_string());

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
                color: {text_color};
                background-color: {surface};
            ",

            ActionBar {
                has_text: flags.has_text,
                has_extraction: flags.has_extraction,
                show_full_buttons: flags.show_full_buttons,
                is_bookmarked: flags.is_bookmarked,
                is_dark: flags.is_dark,
                is_edit_mode: flags.is_edit_mode,
                on_copy,
                on_edit,
                on_share,
                on_download,
                on_save,
                on_delete,
                on_toggle_bookmark,
            }

            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 12px;
                    padding: 8px 16px;
                    font-size: 14px;
                    color: {muted_color};
                ",
                span { "{filename}" }
                if copied() {
                    span { style: "color: {text_color};", "Copied" }
                }
                // empty space
                div { style: "flex-grow: 1;" }
                button {
                    class: "ocr-hover-shadow-background",
                    style: "
                        font-size: 13px;
                        border: 1px solid {border_color};
                        border-radius: 8px;
                        background: transparent;
                        color: {text_color};
                        padding: 2px 10px;
                        cursor: pointer;
                    ",
                    onclick: move |_| view.set(ResultViewState::default()),
                    "Clear"
                }
                button {
                    class: "ocr-hover-shadow-background",
                    style: "
                        font-size: 13px;
                        border: 1px solid {border_color};
                        border-radius: 8px;
                        background: transparent;
                        color: {text_color};
                        padding: 2px 10px;
                        cursor: pointer;
                    ",
                    onclick: move |_| view.set(ResultViewState::from_record(sample_record())),
                    "Load sample"
                }
            }

            ResultText { view, text_color: text_color.to_string(), border_color: border_color.to_string() }
        }
    }
}

#[component]
fn ResultText(view: Signal<ResultViewState>, text_color: String, border_color: String) -> Element {
    let mut view = view;
    let draft = view.read().draft.clone();
    let text = view.read().text.clone();

    let body_style = format!(
        "flex-grow: 1; margin: 0 16px 16px 16px; padding: 12px; border: 1px solid {border_color}; border-radius: 8px; \
         font-family: 'Roboto Mono', monospace; font-size: 15px; line-height: 22px; color: {text_color}; \
         background: transparent; white-space: pre-wrap; overflow: auto;"
    );

    match draft {
        Some(draft) => rsx! {
            textarea {
                style: "{body_style} resize: none;",
                value: "{draft}",
                oninput: move |e| view.write().set_draft(e.value()),
            }
        },
        None if text.trim().is_empty() => rsx! {
            div {
                style: "{body_style} opacity: 0.6;",
                "No text recognized."
            }
        },
        None => rsx! {
            pre {
                style: "{body_style}",
                "{text}"
            }
        },
    }
}
