//! A single action bar control.

use common::layout::LaidOutControl;
use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::components::action_bar::control_icon::ControlIcon;

/// Renders one laid-out control as a button, icon-only or with its label.
///
/// `on_activate` is `None` when the control must not do anything; the button is
/// also rendered `disabled` in that case, and the click guard refuses to call
/// through even if the browser delivers the event.
#[component]
pub fn ActionButton(control: LaidOutControl, #[props(!optional)] on_activate: Option<Callback<()>>) -> Element {
    let kind = control.descriptor.kind;
    let enabled = control.descriptor.enabled;
    let icon = control.descriptor.icon;
    let label = control.descriptor.label;
    let tooltip = control.descriptor.tooltip;
    // Only two-state controls expose a pressed state.
    let pressed = control.descriptor.is_toggle().then(|| control.descriptor.active.to_string());
    let show_label = control.shows_label();
    let tokens_css = control.style.to_inline_css();
    let class = if control.style.pulse {
        "ocr-action-button ocr-action-pulse"
    } else {
        "ocr-action-button"
    };
    let sizing = if show_label {
        "padding: 0 12px; gap: 6px;"
    } else {
        "width: 36px; padding: 0;"
    };

    rsx! {
        button {
            id: "ocr-action-{kind.slug()}",
            class: class,
            title: "{tooltip}",
            aria_label: "{tooltip}",
            aria_pressed: pressed,
            disabled: !enabled,
            style: "
                height: 36px;
                border: 1px solid;
                border-radius: 8px;
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                font-size: 14px;
                font-weight: 500;
                {sizing}
                {tokens_css}
            ",
            onclick: move |e| {
                e.prevent_default();
                e.stop_propagation();
                if !enabled {
                    return;
                }
                let Some(on_activate) = on_activate else {
                    return;
                };
                tracing::debug!("action bar: {:?} activated", kind);
                on_activate.call(());
            },
            ControlIcon { icon }
            if show_label {
                span { "{label}" }
            }
        }
    }
}
