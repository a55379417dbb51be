mod document;
mod error;
pub mod logging;
mod page;
mod rag_client;
mod settings;
mod status;
mod theme;
mod types;

pub use document::{pick_document, SelectedDocument, ACCEPTED_EXTENSIONS};
pub use error::ClientError;
pub use rag_client::*;
pub use page::{QueryPanel, UploadPanel};
pub use settings::Settings;
pub use theme::Theme;
pub use types::{AppView, HealthState, InputSettings};
