use crate::utils::{InputSettings, QueryPanel, Theme};
use dioxus::prelude::*;

#[component]
pub fn QueryForm(
    theme: Signal<Theme>,
    mut prompt: Signal<String>,
    panel: ReadSignal<QueryPanel>,
    input_settings: Signal<InputSettings>,
    on_submit: EventHandler<()>,
) -> Element {
    let _ = theme.read();
    let querying = panel.read().in_flight;
    let can_submit = panel.read().can_submit(&prompt.read());

    // The prompt stays in the box after submitting so it can be refined.
    let handle_keydown = move |evt: KeyboardEvent| {
        let settings = *input_settings.read();
        let ctrl = evt.modifiers().contains(Modifiers::CONTROL);
        if settings.submits_on(evt.key() == Key::Enter, ctrl)
            && panel.read().can_submit(&prompt.read())
        {
            evt.prevent_default();
            on_submit.call(());
        }
    };

    rsx! {
        div {
            class: "bg-[var(--color-base-200)] rounded-lg shadow-md p-6 border border-[var(--color-base-300)]",

            h2 {
                class: "text-2xl font-semibold text-[var(--color-base-content)] mb-4",
                "💬 Ask Questions"
            }

            div {
                class: "space-y-4",

                div {
                    label {
                        class: "block text-sm font-medium text-[var(--color-base-content)]/80 mb-2",
                        r#for: "prompt",
                        "What would you like to know?"
                    }
                    textarea {
                        id: "prompt",
                        rows: "4",
                        value: "{prompt}",
                        oninput: move |evt| prompt.set(evt.value()),
                        onkeydown: handle_keydown,
                        placeholder: "Ask a question about your uploaded documents...",
                        class: "w-full px-3 py-2 rounded-lg bg-[var(--color-base-100)] text-[var(--color-base-content)] border-[var(--color-base-300)] border-2 focus:outline-none focus:ring-2 focus:ring-[var(--color-primary)] focus:border-transparent resize-none",
                    }
                    div {
                        class: "text-xs text-[var(--color-base-content)]/60 mt-1",
                        if input_settings.read().ctrl_enter_submit {
                            "Ctrl+Enter to ask, Enter for new line"
                        } else {
                            "Enter to ask, Ctrl+Enter for new line"
                        }
                    }
                }

                button {
                    r#type: "button",
                    onclick: move |_| on_submit.call(()),
                    disabled: !can_submit,
                    class: "w-full bg-[var(--color-success)] hover:bg-[var(--color-success)]/90 text-[var(--color-success-content)] font-semibold py-2 px-4 rounded-lg transition duration-200 disabled:bg-[var(--color-base-300)] disabled:text-[var(--color-base-content)]/50 disabled:cursor-not-allowed",
                    if querying { "Thinking..." } else { "Ask Question" }
                }
            }
        }
    }
}
