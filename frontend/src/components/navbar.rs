//! Top bar with the view preference toggles.

use common::theme::Theme;
use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


/// Shared layout: header on top, routed page below.
#[component]
pub fn Navbar() -> Element {
    let route = use_route::<Route>();
    let prefs = route.view_prefs();
    let palette = Theme::from_dark_flag(prefs.is_dark).palette();
    let header_background = palette.bar_background;
    let header_text = palette.text;
    let page_background = palette.surface;
    let theme_label = if prefs.is_dark { "Light theme" } else { "Dark theme" };
    let density_label = if prefs.show_full_buttons { "Compact buttons" } else { "Full buttons" };

    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
                background-color: {page_background};
            ",

            div {
                id: "x-nav-header",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 12px;
                    height: 54px;
                    padding: 0 16px;
                    box-sizing: border-box;
                    background-color: {header_background};
                    color: {header_text};
                    border-bottom: 1px solid rgba(0, 0, 0, 0.3);
                ",
                span {
                    style: "font-size: 20px; font-weight: 500;",
                    "OCR Result"
                }
                // empty space
                div {
                    style: "flex-grow: 1;"
                }
                PrefsToggle {
                    label: theme_label.to_string(),
                    color: header_text.to_string(),
                    target: Route::result_view(prefs.toggled_dark()),
                }
                PrefsToggle {
                    label: density_label.to_string(),
                    color: header_text.to_string(),
                    target: Route::result_view(prefs.toggled_full_buttons()),
                }
            }

            div {
                id: "x-page-container",
                style: "flex-grow: 1; min-height: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn PrefsToggle(label: String, target: Route, color: String) -> Element {
    rsx! {
        Link {
            to: target,
            span {
                class: "ocr-hover-shadow-background",
                style: "
                    display: inline-block;
                    color: {color};
                    font-size: 14px;
                    border: 1px solid currentColor;
                    border-radius: 8px;
                    padding: 4px 10px;
                ",
                "{label}"
            }
        }
    }
}
