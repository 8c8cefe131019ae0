//! Action bar for an OCR result view: copy, edit, share, download on the left,
//! bookmark, save, delete on the right.

pub mod action_button;
pub mod control_icon;

use common::action_bar_flags::ActionBarFlags;
use common::action_handlers::ActionHandlers;
use common::control::ActionBarModel;
use common::layout::{Breakpoint, LaidOutControl, lay_out};
use common::theme::Theme;
use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::components::action_bar::action_button::ActionButton;

/// The action bar.
///
/// Copy and edit are always shown. Every other control is shown only when its
/// callback is supplied. Text actions are enabled by `has_text`, bookmark and
/// delete by `has_extraction`; disabled controls stay visible.
#[component]
pub fn ActionBar(
    has_text: bool,
    has_extraction: bool,
    #[props(default)] show_full_buttons: bool,
    #[props(default)] is_bookmarked: bool,
    #[props(default)] is_dark: bool,
    #[props(default)] is_edit_mode: bool,
    on_copy: Callback<()>,
    on_edit: Callback<()>,
    on_share: Option<Callback<()>>,
    on_download: Option<Callback<()>>,
    on_save: Option<Callback<()>>,
    on_delete: Option<Callback<()>>,
    on_toggle_bookmark: Option<Callback<()>>,
) -> Element {
    let flags = ActionBarFlags {
        has_text,
        has_extraction,
        show_full_buttons,
        is_bookmarked,
        is_dark,
        is_edit_mode,
    };
    let handlers = ActionHandlers {
        on_copy,
        on_edit,
        on_share,
        on_download,
        on_toggle_bookmark,
        on_save,
        on_delete,
    };

    let mut bar_width = use_signal(initial_viewport_width);
    let breakpoint = Breakpoint::from_width(bar_width());

    let model = ActionBarModel::build(&flags, &handlers.presence());
    let layout = lay_out(&model, &flags, breakpoint);
    let primary = wire_controls(&layout.primary, &model, &handlers);
    let secondary = wire_controls(&layout.secondary, &model, &handlers);

    let palette = Theme::from_dark_flag(is_dark).palette();
    let bar_background = palette.bar_background;
    let bar_border = palette.border;

    rsx! {
        div {
            class: "ocr-action-bar",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: space-between;
                gap: 12px;
                width: 100%;
                min-height: 52px;
                padding: 8px 12px;
                box-sizing: border-box;
                background-color: {bar_background};
                border-bottom: 1px solid {bar_border};
            ",
            onresize: move |e| {
                let Ok(size) = e.data().get_border_box_size() else {
                    tracing::warn!("Failed to get action bar size: {:#?}", e.data());
                    return;
                };
                bar_width.set(size.width);
            },

            // PRIMARY ACTIONS
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 6px;
                ",
                for (slug, control, on_activate) in primary {
                    ActionButton { key: "{slug}", control, on_activate }
                }
            }

            // SECONDARY ACTIONS
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 6px;
                ",
                for (slug, control, on_activate) in secondary {
                    ActionButton { key: "{slug}", control, on_activate }
                }
            }
        }
    }
}

/// Pairs every laid-out control with the handler a click may invoke. Disabled
/// controls get `None`.
fn wire_controls<H: Copy>(
    controls: &[LaidOutControl],
    model: &ActionBarModel,
    handlers: &ActionHandlers<H>,
) -> Vec<(&'static str, LaidOutControl, Option<H>)> {
    controls
        .iter()
        .map(|control| {
            let kind = control.descriptor.kind;
            (kind.slug(), control.clone(), model.dispatch(kind, handlers).copied())
        })
        .collect()
}

/// Assumed bar width when no browser viewport can be asked.
const FALLBACK_WIDTH_PX: f64 = 1024.0;

/// Width used before the first resize event arrives.
#[cfg(target_arch = "wasm32")]
fn initial_viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(FALLBACK_WIDTH_PX)
}

#[cfg(not(target_arch = "wasm32"))]
fn initial_viewport_width() -> f64 {
    FALLBACK_WIDTH_PX
}

#[cfg(test)]
mod tests {
    use common::action::ActionKind;

    use super::*;

    fn noop() {}

    fn wired(flags: ActionBarFlags, handlers: &ActionHandlers<fn()>) -> Vec<(&'static str, LaidOutControl, Option<fn()>)> {
        let model = ActionBarModel::build(&flags, &handlers.presence());
        let layout = lay_out(&model, &flags, Breakpoint::Wide);
        let mut all = wire_controls(&layout.primary, &model, handlers);
        all.extend(wire_controls(&layout.secondary, &model, handlers));
        all
    }

    #[test]
    fn disabled_controls_are_wired_to_nothing() {
        let handlers: ActionHandlers<fn()> = ActionHandlers {
            on_copy: noop,
            on_edit: noop,
            on_share: Some(noop),
            on_download: Some(noop),
            on_toggle_bookmark: Some(noop),
            on_save: Some(noop),
            on_delete: Some(noop),
        };
        let controls = wired(ActionBarFlags::new(false, true), &handlers);
        assert_eq!(controls.len(), 7);
        for (slug, control, handler) in &controls {
            assert_eq!(handler.is_some(), control.descriptor.enabled, "{slug}");
            let needs_extraction = matches!(control.descriptor.kind, ActionKind::ToggleBookmark | ActionKind::Delete);
            assert_eq!(control.descriptor.enabled, needs_extraction, "{slug}");
        }
    }

    #[test]
    fn absent_callbacks_leave_no_control() {
        let handlers: ActionHandlers<fn()> = ActionHandlers::new(noop, noop);
        let controls = wired(ActionBarFlags::new(true, false), &handlers);
        let slugs: Vec<_> = controls.iter().map(|(slug, _, _)| *slug).collect();
        assert_eq!(slugs, vec!["copy", "edit"]);
        assert!(controls.iter().all(|(_, _, handler)| handler.is_some()));
    }

    /// Opening tag of the button with the given slug, if rendered.
    fn button_tag<'a>(html: &'a str, slug: &str) -> Option<&'a str> {
        let id_at = html.find(&format!("id=\"ocr-action-{slug}\""))?;
        let start = html[..id_at].rfind("<button")?;
        let end = id_at + html[id_at..].find('>')?;
        Some(&html[start..end])
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[component]
    fn RecordWithoutText() -> Element {
        let noop = Callback::new(|_: ()| {});
        rsx! {
            ActionBar {
                has_text: false,
                has_extraction: true,
                show_full_buttons: true,
                on_copy: noop,
                on_edit: noop,
                on_share: noop,
                on_download: noop,
                on_save: noop,
                on_delete: noop,
                on_toggle_bookmark: noop,
            }
        }
    }

    #[component]
    fn TextWithoutRecord() -> Element {
        let noop = Callback::new(|_: ()| {});
        rsx! {
            ActionBar {
                has_text: true,
                has_extraction: false,
                on_copy: noop,
                on_edit: noop,
            }
        }
    }

    #[component]
    fn EditingBookmarked() -> Element {
        let noop = Callback::new(|_: ()| {});
        rsx! {
            ActionBar {
                has_text: true,
                has_extraction: true,
                is_bookmarked: true,
                is_edit_mode: true,
                is_dark: true,
                on_copy: noop,
                on_edit: noop,
                on_save: noop,
                on_toggle_bookmark: noop,
            }
        }
    }

    #[test]
    fn renders_disabled_text_actions_without_text() {
        let html = render(RecordWithoutText);
        for slug in ["copy", "edit", "share", "download", "save"] {
            let tag = button_tag(&html, slug).unwrap_or_else(|| panic!("{slug} missing in {html}"));
            assert!(tag.contains(" disabled"), "{slug} should be disabled: {tag}");
        }
        for slug in ["bookmark", "delete"] {
            let tag = button_tag(&html, slug).unwrap_or_else(|| panic!("{slug} missing in {html}"));
            assert!(!tag.contains(" disabled"), "{slug} should be enabled: {tag}");
        }
        assert!(html.contains("<span>Copy</span>"), "{html}");
        assert!(!html.contains("<span>Delete</span>"), "{html}");
    }

    #[test]
    fn renders_only_copy_and_edit_without_optional_callbacks() {
        let html = render(TextWithoutRecord);
        for slug in ["copy", "edit"] {
            let tag = button_tag(&html, slug).unwrap_or_else(|| panic!("{slug} missing in {html}"));
            assert!(!tag.contains(" disabled"), "{slug} should be enabled: {tag}");
        }
        for slug in ["share", "download", "bookmark", "save", "delete"] {
            assert!(button_tag(&html, slug).is_none(), "{slug} should be absent: {html}");
        }
        assert!(!html.contains("<span>Copy</span>"), "{html}");
    }

    #[test]
    fn only_toggles_carry_aria_pressed() {
        let html = render(EditingBookmarked);
        let copy = button_tag(&html, "copy").unwrap_or_default();
        let save = button_tag(&html, "save").unwrap_or_default();
        assert!(!copy.contains("aria-pressed"), "{copy}");
        assert!(!save.contains("aria-pressed"), "{save}");
        let edit = button_tag(&html, "edit").unwrap_or_default();
        let bookmark = button_tag(&html, "bookmark").unwrap_or_default();
        assert!(edit.contains("aria-pressed=\"true\""), "{edit}");
        assert!(bookmark.contains("aria-pressed=\"true\""), "{bookmark}");
        assert!(save.contains("ocr-action-pulse"), "{save}");
        assert!(save.contains("--action-pulse: #34D399;"), "{save}");
    }
}
