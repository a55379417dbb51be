use crate::utils::{QueryPanel, Theme};
use dioxus::prelude::*;

#[component]
pub fn ResponseCard(theme: Signal<Theme>, panel: ReadSignal<QueryPanel>) -> Element {
    let _ = theme.read();
    let state = panel.read().state.clone();

    if !state.is_visible() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "mt-8 bg-[var(--color-base-200)] rounded-lg shadow-md p-6 border border-[var(--color-base-300)]",

            h2 {
                class: "text-2xl font-semibold text-[var(--color-base-content)] mb-4",
                "🤖 Response"
            }

            div {
                class: "bg-[var(--color-base-100)] p-4 rounded-lg",
                class: if state.is_failure() { "border-2 border-red-500/50" } else { "" },
                // Backend output is shown exactly as received
                p {
                    class: "text-[var(--color-base-content)] whitespace-pre-wrap",
                    "{state.text()}"
                }
            }

            if let Some(details) = state.details() {
                div {
                    class: "mt-2 pt-2 border-t border-[var(--color-base-300)] text-xs text-[var(--color-base-content)]/60",
                    "{details}"
                }
            }
        }
    }
}
