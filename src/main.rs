use dioxus::prelude::*;

mod components;
mod utils;

use components::{Header, Home, Modal, Settings as SettingsView};
use std::sync::Arc;
use tracing::{error, info, warn};
use utils::{AppView, HealthState, InputSettings, RagClient, Settings};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    utils::logging::init();
    dioxus::launch(App);
}

fn build_client(base_url: &str) -> Option<Arc<RagClient>> {
    match RagClient::new(base_url) {
        Ok(client) => {
            info!(backend_url = client.base_url(), "backend client ready");
            Some(Arc::new(client))
        }
        Err(e) => {
            error!("Failed to create backend client: {}", e);
            None
        }
    }
}

#[component]
fn App() -> Element {
    // Settings file, then RAG_BACKEND_URL
    let mut app_settings = use_signal(Settings::load_or_default);

    let mut rag_client =
        use_signal(|| build_client(app_settings.read().effective_backend_url()));

    let mut theme = use_signal(|| app_settings.read().theme);

    let mut input_settings = use_signal(|| app_settings.read().input_settings());

    let mut current_view = use_signal(|| AppView::Home);

    let mut health = use_signal(HealthState::default);

    let mut check_health = move || {
        let Some(client) = rag_client() else {
            health.set(HealthState::Offline(
                "No backend client configured".to_string(),
            ));
            return;
        };
        health.set(HealthState::Checking);
        spawn(async move {
            match client.status().await {
                Ok(info) => health.set(HealthState::Online(info)),
                Err(e) => {
                    warn!("Backend health check failed: {}", e);
                    health.set(HealthState::Offline(e.to_string()));
                }
            }
        });
    };

    // Re-probe whenever the client is rebuilt
    use_effect(move || check_health());

    let toggle_mode = move |_| {
        let new_theme = theme.read().toggled();
        theme.set(new_theme);

        let mut settings = app_settings.write();
        settings.theme = new_theme;
        if let Err(e) = settings.save() {
            warn!("Failed to save theme: {}", e);
        }
    };

    let change_input_settings = move |new_settings: InputSettings| {
        input_settings.set(new_settings);

        let mut settings = app_settings.write();
        settings.ctrl_enter_submit = new_settings.ctrl_enter_submit;
        if let Err(e) = settings.save() {
            warn!("Failed to save input settings: {}", e);
        }
    };

    let save_backend_url = move |url: String| {
        let effective = {
            let mut settings = app_settings.write();
            if let Err(e) = settings.set_backend_url(&url) {
                warn!("Rejected backend URL: {}", e);
                return;
            }
            if let Err(e) = settings.save() {
                error!("Failed to save backend URL: {}", e);
            }
            settings.effective_backend_url().to_string()
        };

        rag_client.set(build_client(&effective));
    };

    let open_settings = move |_| current_view.set(AppView::Settings);
    let close_settings = move |_| current_view.set(AppView::Home);

    let data_theme = theme.read().data_theme();
    let settings_open = *current_view.read() == AppView::Settings;
    let backend_url = app_settings.read().effective_backend_url().to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        div {
            "data-theme": "{data_theme}",
            class: "font-inter antialiased bg-[var(--color-base-100)] text-[var(--color-base-content)]",

            div {
                class: "flex flex-col h-screen overflow-hidden",

                Header {
                    theme,
                    health,
                    backend_url,
                    on_refresh_health: move |_| check_health(),
                    on_toggle_mode: toggle_mode,
                    on_settings: open_settings,
                }

                // Home stays mounted under the settings modal so in-flight requests finish
                main {
                    class: "grow min-h-0",

                    Home {
                        theme,
                        client: rag_client.read().clone(),
                        input_settings,
                    }
                }
            }

            Modal {
                theme,
                open: settings_open,
                on_close: close_settings,

                SettingsView {
                    theme,
                    app_settings,
                    input_settings,
                    on_settings_change: change_input_settings,
                    on_backend_url_save: save_backend_url,
                    on_close: close_settings,
                }
            }
        }
    }
}
