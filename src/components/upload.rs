use crate::utils::{Theme, UploadPanel, ACCEPTED_EXTENSIONS};
use dioxus::prelude::*;

#[component]
pub fn UploadForm(
    theme: Signal<Theme>,
    panel: ReadSignal<UploadPanel>,
    on_choose_file: EventHandler<()>,
    on_upload: EventHandler<()>,
) -> Element {
    let _ = theme.read();
    let panel_val = panel();
    let can_upload = panel_val.can_upload();
    let UploadPanel {
        selected_file: file,
        status: status_val,
        in_flight: uploading,
    } = panel_val;

    let accepted = ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(", ");

    rsx! {
        div {
            class: "bg-[var(--color-base-200)] rounded-lg shadow-md p-6 border border-[var(--color-base-300)]",

            h2 {
                class: "text-2xl font-semibold text-[var(--color-base-content)] mb-4",
                "📄 Upload Document"
            }

            div {
                class: "space-y-4",

                // File picker
                div {
                    label {
                        class: "block text-sm font-medium text-[var(--color-base-content)]/80 mb-2",
                        "Select a text file to upload"
                    }
                    div {
                        class: "flex items-center gap-3",
                        button {
                            r#type: "button",
                            onclick: move |_| on_choose_file.call(()),
                            disabled: uploading,
                            class: "shrink-0 px-4 py-2 rounded-full text-sm font-semibold bg-[var(--color-primary)]/10 text-[var(--color-primary)] hover:bg-[var(--color-primary)]/20 transition-colors disabled:opacity-50 disabled:cursor-not-allowed",
                            "Choose File"
                        }
                        if let Some(doc) = &file {
                            div {
                                class: "min-w-0 text-sm text-[var(--color-base-content)]",
                                div {
                                    class: "truncate font-medium",
                                    title: "{doc.path().display()}",
                                    "{doc.name()}"
                                }
                                if let Some(size) = doc.size_label() {
                                    div {
                                        class: "text-xs text-[var(--color-base-content)]/60",
                                        "{size}"
                                    }
                                }
                            }
                        } else {
                            span {
                                class: "text-sm text-[var(--color-base-content)]/60",
                                "No file chosen"
                            }
                        }
                    }
                    p {
                        class: "text-xs text-[var(--color-base-content)]/60 mt-2",
                        "Accepted: {accepted}"
                    }
                }

                button {
                    r#type: "button",
                    onclick: move |_| on_upload.call(()),
                    disabled: !can_upload,
                    class: "w-full bg-[var(--color-primary)] hover:bg-[var(--color-primary)]/90 text-[var(--color-primary-content)] font-semibold py-2 px-4 rounded-lg transition duration-200 disabled:bg-[var(--color-base-300)] disabled:text-[var(--color-base-content)]/50 disabled:cursor-not-allowed",
                    if uploading { "Processing..." } else { "Upload & Process" }
                }

                if status_val.is_visible() {
                    div {
                        class: "text-sm p-3 rounded",
                        class: "{status_val.tone().class()}",
                        div { "{status_val.text()}" }
                        if let Some(details) = status_val.details() {
                            div {
                                class: "text-xs opacity-70 mt-1",
                                "{details}"
                            }
                        }
                    }
                }
            }
        }
    }
}
