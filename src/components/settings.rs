use crate::utils::{normalize_base_url, InputSettings, Settings as AppSettings, Theme};
use dioxus::prelude::*;

#[component]
pub fn Settings(
    theme: Signal<Theme>,
    app_settings: Signal<AppSettings>,
    input_settings: Signal<InputSettings>,
    on_settings_change: EventHandler<InputSettings>,
    on_backend_url_save: EventHandler<String>,
    on_close: EventHandler<()>,
) -> Element {
    let _ = theme.read();
    let current_settings = *input_settings.read();
    let saved_url = app_settings.read().backend_url.clone();
    let (endpoint_hint, override_hint) = {
        let settings = app_settings.read();
        (settings.endpoint_hint(), settings.override_hint())
    };

    let mut url_draft = use_signal(|| saved_url.clone());
    let mut url_error = use_signal(|| None::<String>);

    let save_url = move |_| {
        let normalized = normalize_base_url(&url_draft.read());
        match normalized {
            Ok(url) => {
                url_error.set(None);
                url_draft.set(url.clone());
                on_backend_url_save.call(url);
            }
            Err(e) => url_error.set(Some(e)),
        }
    };

    let is_dirty = url_draft.read().trim() != saved_url;

    rsx! {
        div {
            class: "flex flex-col",

            div {
                class: "w-full p-6",

                // Header
                div {
                    class: "flex items-center justify-between mb-8",
                    h1 {
                        class: "text-3xl font-bold text-[var(--color-base-content)]",
                        "Settings"
                    }
                    button {
                        onclick: move |_| on_close.call(()),
                        class: "p-2 hover:bg-[var(--color-base-300)] rounded-lg transition-colors",
                        title: "Close settings",
                        img {
                            src: asset!("/assets/close.svg"),
                            class: "w-6 h-6",
                            alt: "Close"
                        }
                    }
                }

                div {
                    class: "space-y-6",

                    // Backend
                    div {
                        class: "bg-[var(--color-base-200)] rounded-lg p-6 border border-[var(--color-base-300)]",

                        h2 {
                            class: "text-xl font-semibold text-[var(--color-base-content)] mb-4",
                            "Backend"
                        }

                        label {
                            class: "block text-sm font-medium text-[var(--color-base-content)] mb-2",
                            r#for: "backend-url",
                            "Base URL"
                        }
                        div {
                            class: "flex gap-2",
                            input {
                                id: "backend-url",
                                r#type: "text",
                                value: "{url_draft}",
                                oninput: move |evt| url_draft.set(evt.value()),
                                placeholder: "http://localhost:8000",
                                class: "flex-1 px-3 py-2 rounded-lg bg-[var(--color-base-100)] text-[var(--color-base-content)] border-2 border-[var(--color-base-300)] focus:outline-none focus:ring-2 focus:ring-[var(--color-primary)] focus:border-transparent text-sm",
                            }
                            button {
                                onclick: save_url,
                                disabled: !is_dirty,
                                class: "px-4 py-2 rounded-lg bg-[var(--color-primary)] text-[var(--color-primary-content)] text-sm font-medium hover:bg-[var(--color-primary)]/90 disabled:opacity-50 disabled:cursor-not-allowed",
                                "Save"
                            }
                        }
                        if let Some(err) = url_error() {
                            p {
                                class: "text-sm text-red-500 mt-2",
                                "{err}"
                            }
                        } else {
                            p {
                                class: "text-sm text-[var(--color-base-content)]/70 mt-2",
                                "{endpoint_hint}"
                            }
                            if let Some(hint) = override_hint {
                                p {
                                    class: "text-xs text-amber-500 mt-1",
                                    "{hint}"
                                }
                            }
                        }
                    }

                    // Input settings
                    div {
                        class: "bg-[var(--color-base-200)] rounded-lg p-6 border border-[var(--color-base-300)]",

                        h2 {
                            class: "text-xl font-semibold text-[var(--color-base-content)] mb-4",
                            "Input Settings"
                        }

                        label {
                            class: "flex items-start gap-3 cursor-pointer",
                            input {
                                r#type: "checkbox",
                                checked: current_settings.ctrl_enter_submit,
                                onchange: move |evt| {
                                    on_settings_change.call(InputSettings {
                                        ctrl_enter_submit: evt.checked(),
                                    });
                                },
                                class: "mt-1 w-4 h-4 accent-[var(--color-primary)]"
                            }
                            div {
                                div {
                                    class: "font-medium text-[var(--color-base-content)]",
                                    "Use Ctrl+Enter to ask"
                                }
                                div {
                                    class: "text-sm text-[var(--color-base-content)]/70 mt-1",
                                    if current_settings.ctrl_enter_submit {
                                        "Ctrl+Enter sends the question, Enter creates new lines"
                                    } else {
                                        "Enter sends the question, Ctrl+Enter creates new lines"
                                    }
                                }
                            }
                        }
                    }

                    // About section
                    div {
                        class: "bg-[var(--color-base-200)] rounded-lg p-6 border border-[var(--color-base-300)]",

                        h2 {
                            class: "text-xl font-semibold text-[var(--color-base-content)] mb-4",
                            "About"
                        }

                        div {
                            class: "space-y-2 text-sm text-[var(--color-base-content)]/70",
                            p { "RAG Demo - upload documents and ask questions about them" }
                            p { "Retrieval and generation run on the backend; this app only sends files and questions." }
                        }
                    }
                }
            }
        }
    }
}
