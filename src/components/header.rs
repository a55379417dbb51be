use crate::utils::{HealthState, Theme};
use dioxus::prelude::*;

#[component]
pub fn Header(
    theme: Signal<Theme>,
    health: ReadSignal<HealthState>,
    backend_url: String,
    on_refresh_health: EventHandler<()>,
    on_toggle_mode: EventHandler<()>,
    on_settings: EventHandler<()>,
) -> Element {
    let theme_val = *theme.read();
    let is_dark = theme_val.is_dark();
    let mut health_dropdown_open = use_signal(|| false);
    let health_val = health();
    let is_checking = matches!(health_val, HealthState::Checking);

    rsx! {
        header {
            class: "sticky top-0 z-30 before:absolute before:inset-0 before:backdrop-blur-md before:bg-[var(--color-base-200)]/90 before:-z-10 after:absolute after:h-px after:inset-x-0 after:top-full after:border-[var(--color-base-300)] after:-z-10",

            div {
                class: "px-4 sm:px-6 lg:px-8",

                div {
                    class: "flex items-center justify-between h-16",

                    // Left side - Title
                    div {
                        class: "flex items-center gap-2",
                        span {
                            class: "text-xl font-bold text-[var(--color-base-content)]",
                            "RAG Demo"
                        }
                    }

                    // Right side - Controls
                    div {
                        class: "flex items-center gap-3",

                        // Backend health dropdown
                        div {
                            class: "relative",

                            button {
                                onclick: move |_| health_dropdown_open.set(!health_dropdown_open()),
                                class: "px-3 py-1.5 rounded-lg bg-[var(--color-base-300)] text-[var(--color-base-content)] text-sm font-medium border border-[var(--color-base-300)] hover:bg-[var(--color-base-300)]/80 focus:outline-none focus:ring-2 focus:ring-[var(--color-primary)] transition-all cursor-pointer flex items-center gap-2",

                                span {
                                    class: "w-2 h-2 rounded-full",
                                    class: "{health_val.dot_class()}",
                                }
                                "{health_val.label()}"
                                span {
                                    class: "text-[10px] opacity-50",
                                    if *health_dropdown_open.read() { "▲" } else { "▼" }
                                }
                            }

                            if *health_dropdown_open.read() {
                                div {
                                    class: "absolute right-0 mt-2 w-72 bg-[var(--color-base-200)] border border-[var(--color-base-300)] rounded-lg shadow-lg z-50 overflow-hidden",

                                    div {
                                        class: "p-3 space-y-2 border-b border-[var(--color-base-300)] text-xs",

                                        div {
                                            class: "flex justify-between gap-2",
                                            span {
                                                class: "text-[var(--color-base-content)]/70",
                                                "Endpoint:"
                                            }
                                            span {
                                                class: "font-medium text-[var(--color-base-content)] truncate",
                                                title: "{backend_url}",
                                                "{backend_url}"
                                            }
                                        }

                                        match &health_val {
                                            HealthState::Online(info) => rsx! {
                                                div {
                                                    class: "flex justify-between",
                                                    span {
                                                        class: "text-[var(--color-base-content)]/70",
                                                        "Backend:"
                                                    }
                                                    span {
                                                        class: "font-medium text-[var(--color-base-content)]",
                                                        "{info.backend}"
                                                    }
                                                }
                                                div {
                                                    class: "flex justify-between",
                                                    span {
                                                        class: "text-[var(--color-base-content)]/70",
                                                        "Tracing:"
                                                    }
                                                    span {
                                                        class: "font-medium text-[var(--color-base-content)]",
                                                        if info.langsmith { "LangSmith" } else { "off" }
                                                    }
                                                }
                                            },
                                            HealthState::Offline(reason) => rsx! {
                                                div {
                                                    class: "text-red-500 break-words",
                                                    "{reason}"
                                                }
                                            },
                                            HealthState::Checking => rsx! {
                                                div {
                                                    class: "text-[var(--color-base-content)]/70",
                                                    "Contacting backend..."
                                                }
                                            },
                                            HealthState::Unknown => rsx! {
                                                div {
                                                    class: "text-[var(--color-base-content)]/70",
                                                    "Not checked yet"
                                                }
                                            },
                                        }
                                    }

                                    button {
                                        onclick: move |_| on_refresh_health.call(()),
                                        class: "w-full px-3 py-2 text-left text-sm hover:bg-[var(--color-base-300)] transition-colors flex items-center gap-2",
                                        disabled: is_checking,

                                        img {
                                            src: asset!("/assets/refresh.svg"),
                                            class: "w-4 h-4",
                                            class: if is_checking { "animate-spin" } else { "" },
                                            alt: "Refresh"
                                        }

                                        span {
                                            class: "text-[var(--color-base-content)]",
                                            if is_checking { "Checking..." } else { "Check Again" }
                                        }
                                    }
                                }
                            }
                        }

                        // Dark/Light mode toggle
                        button {
                            onclick: move |_| on_toggle_mode.call(()),
                            class: "w-8 h-8 flex items-center justify-center hover:bg-[var(--color-base-300)]/50 rounded-full transition-colors",
                            title: "Switch to {theme_val.toggled().name()} theme",

                            if is_dark {
                                img {
                                    src: asset!("/assets/light.svg"),
                                    class: "w-4 h-4",
                                    alt: "Light mode"
                                }
                            } else {
                                img {
                                    src: asset!("/assets/dark.svg"),
                                    class: "w-4 h-4",
                                    alt: "Dark mode"
                                }
                            }
                        }

                        // Settings button
                        button {
                            onclick: move |_| on_settings.call(()),
                            class: "w-8 h-8 flex items-center justify-center hover:bg-[var(--color-base-300)]/50 rounded-full transition-colors",
                            title: "Settings",
                            img {
                                src: asset!("/assets/settings.svg"),
                                class: "w-4 h-4",
                                alt: "Settings"
                            }
                        }
                    }
                }
            }
        }
    }
}
