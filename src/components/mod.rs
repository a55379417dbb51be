mod header;
mod home;
mod modal;
mod query;
mod response;
mod settings;
mod upload;

pub use header::Header;
pub use home::Home;
pub use modal::Modal;
pub use query::QueryForm;
pub use response::ResponseCard;
pub use settings::Settings;
pub use upload::UploadForm;
