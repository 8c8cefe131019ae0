//! Error boundary for rendering failures.

use dioxus::logger::tracing;
use dioxus::prelude::*;

/// Replaces its children with an error panel when any of them fails to render.
#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                let error_txt = format!("{err:#?}");
                tracing::error!("Render error in boundary {}: {}", boundary_name(), error_txt);
                rsx! {
                    div {
                        style: "
                            display: flex;
                            flex-direction: column;
                            gap: 12px;
                            margin: 15px;
                            padding: 10px;
                            border: 1px solid #DC2626;
                            border-radius: 5px;
                        ",
                        h1 {
                            style: "color: #DC2626; font-size: 34px;",
                            "Something went wrong",
                        }
                        p {
                            style: "color: darkred; font-size: 18px;",
                            "Boundary: {boundary_name}"
                        }
                        pre {
                            style: "color: black; text-wrap: auto; max-height: 400px; overflow-y: auto;",
                            "{error_txt}"
                        }
                        button {
                            style: "align-self: flex-start; color: blue; font-size: 18px; border: 1px solid blue; padding: 6px 10px; border-radius: 5px; background: white; cursor: pointer;",
                            onclick: move |_| err.clear_errors(),
                            "Try Again"
                        }
                    }
                }
            },
            {children}
        }
    }
}
