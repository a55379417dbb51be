use crate::utils::Theme;
use dioxus::prelude::*;

#[component]
pub fn Modal(
    theme: Signal<Theme>,
    open: bool,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    let _ = theme.read();

    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 z-[9998] flex items-center justify-center p-4",
            tabindex: "-1",
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },

            // Panel swallows its own clicks; only the backdrop closes
            div {
                class: "bg-[var(--color-base-100)] rounded-lg shadow-xl max-w-2xl w-full max-h-[90vh] overflow-auto relative",
                onclick: move |e| e.stop_propagation(),

                {children}
            }
        }
    }
}
