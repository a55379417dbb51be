use super::{QueryForm, ResponseCard, UploadForm};
use crate::utils::{
    pick_document, ClientError, InputSettings, QueryPanel, RagClient, SelectedDocument, Theme,
    UploadPanel,
};
use dioxus::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

const NO_CLIENT: &str = "no backend client configured, check the backend URL in settings";

#[derive(Props, Clone)]
pub struct HomeProps {
    theme: Signal<Theme>,
    client: Option<Arc<RagClient>>,
    input_settings: Signal<InputSettings>,
}

impl PartialEq for HomeProps {
    fn eq(&self, other: &Self) -> bool {
        self.theme == other.theme
            && self.input_settings == other.input_settings
            && self.client == other.client
    }
}

/// The single page: upload on the left, question on the right, answer below.
#[component]
pub fn Home(props: HomeProps) -> Element {
    let theme = props.theme;
    let input_settings = props.input_settings;

    let mut upload_panel = use_signal(UploadPanel::default);
    let prompt = use_signal(String::new);
    let mut query_panel = use_signal(QueryPanel::default);

    let choose_file = move |_| {
        spawn(async move {
            let Some(path) = pick_document().await else {
                return;
            };
            let picked = SelectedDocument::from_path(&path);
            match &picked {
                Ok(document) => info!(file = document.name(), "document selected"),
                Err(reason) => warn!(path = %path.display(), "{}", reason),
            }
            upload_panel.write().choose(picked);
        });
    };

    let client_for_upload = props.client.clone();
    let upload = move |_| {
        let Some(document) = upload_panel.write().begin() else {
            return;
        };
        let client = client_for_upload.clone();

        spawn(async move {
            let started = Instant::now();
            let outcome = match client {
                Some(client) => client.ingest(&document).await,
                None => Err(ClientError::Client(NO_CLIENT.to_string())),
            };
            if let Err(e) = &outcome {
                error!(file = document.name(), error = %e, "upload failed");
            }

            upload_panel
                .write()
                .finish(&document, outcome, started.elapsed());
        });
    };

    let client_for_query = props.client.clone();
    let submit_prompt = move |_| {
        let Some(text) = query_panel.write().begin(&prompt.read()) else {
            return;
        };
        let client = client_for_query.clone();

        spawn(async move {
            let started = Instant::now();
            let outcome = match client {
                Some(client) => client.prompt(&text).await,
                None => Err(ClientError::Client(NO_CLIENT.to_string())),
            };
            if let Err(e) = &outcome {
                error!(error = %e, "query failed");
            }

            query_panel.write().finish(outcome, started.elapsed());
        });
    };

    rsx! {
        div {
            class: "h-full overflow-y-auto bg-[var(--color-base-100)]",

            div {
                class: "max-w-4xl mx-auto px-4 py-8",

                div {
                    class: "text-center mb-8",
                    h1 {
                        class: "text-4xl font-bold text-[var(--color-base-content)] mb-2",
                        "RAG Demo"
                    }
                    p {
                        class: "text-lg text-[var(--color-base-content)]/70",
                        "Upload documents and ask questions about them"
                    }
                }

                div {
                    class: "grid md:grid-cols-2 gap-8",

                    UploadForm {
                        theme,
                        panel: upload_panel,
                        on_choose_file: choose_file,
                        on_upload: upload,
                    }

                    QueryForm {
                        theme,
                        prompt,
                        panel: query_panel,
                        input_settings,
                        on_submit: submit_prompt,
                    }
                }

                ResponseCard {
                    theme,
                    panel: query_panel,
                }
            }
        }
    }
}
