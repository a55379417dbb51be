use crate::utils::{normalize_base_url, InputSettings, Theme, DEFAULT_BACKEND_URL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Replaces `backend_url` for the current run without touching the file.
pub const BACKEND_URL_ENV: &str = "RAG_BACKEND_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub backend_url: String,
    pub theme: Theme,
    pub ctrl_enter_submit: bool,
    /// Set from the environment; never written back to disk.
    #[serde(skip)]
    pub backend_url_override: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            theme: Theme::Dark,
            ctrl_enter_submit: true,
            backend_url_override: None,
        }
    }
}

impl Settings {
    /// Get the platform-specific settings directory
    pub fn settings_dir() -> Result<PathBuf, String> {
        let config_dir = if cfg!(any(target_os = "windows", target_os = "macos")) {
            // %APPDATA%\rag-demo, ~/Library/Application Support/rag-demo
            dirs::config_dir()
                .ok_or("Could not find config directory")?
                .join("rag-demo")
        } else {
            // Linux/Unix: $HOME/.rag-demo
            dirs::home_dir()
                .ok_or("Could not find home directory")?
                .join(".rag-demo")
        };

        Ok(config_dir)
    }

    pub fn settings_path() -> Result<PathBuf, String> {
        Ok(Self::settings_dir()?.join("settings.toml"))
    }

    /// Settings for this run: the file (or defaults), then env overrides.
    pub fn load_or_default() -> Self {
        let settings = match Self::settings_path().and_then(|path| Self::load_from(&path)) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Falling back to default settings: {}", e);
                Self::default()
            }
        };
        settings.with_backend_override(std::env::var(BACKEND_URL_ENV).ok())
    }

    pub fn load_from(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read settings file: {}", e))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse settings file: {}", e))
    }

    pub fn save(&self) -> Result<(), String> {
        self.save_to(&Self::settings_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)
                    .map_err(|e| format!("Failed to create settings directory: {}", e))?;
            }
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        fs::write(path, contents).map_err(|e| format!("Failed to write settings file: {}", e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)
                .map_err(|e| format!("Failed to get file metadata: {}", e))?
                .permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms)
                .map_err(|e| format!("Failed to set file permissions: {}", e))?;
        }

        info!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// Applies a backend URL override if it is a usable URL.
    pub fn with_backend_override(mut self, url: Option<String>) -> Self {
        if let Some(raw) = url {
            match normalize_base_url(&raw) {
                Ok(url) => {
                    info!(backend_url = %url, "backend URL overridden from {}", BACKEND_URL_ENV);
                    self.backend_url_override = Some(url);
                }
                Err(e) => warn!("Ignoring {}: {}", BACKEND_URL_ENV, e),
            }
        }
        self
    }

    /// The URL requests actually go to for this run.
    pub fn effective_backend_url(&self) -> &str {
        self.backend_url_override
            .as_deref()
            .unwrap_or(&self.backend_url)
    }

    /// Validates and stores a backend URL typed into the settings view.
    /// An explicit choice replaces any environment override.
    pub fn set_backend_url(&mut self, raw: &str) -> Result<(), String> {
        self.backend_url = normalize_base_url(raw)?;
        self.backend_url_override = None;
        Ok(())
    }

    pub fn endpoint_hint(&self) -> String {
        let url = self.effective_backend_url();
        format!("Requests go to {url}/api/ingest and {url}/api/prompt")
    }

    pub fn override_hint(&self) -> Option<String> {
        self.backend_url_override.as_ref().map(|_| {
            format!(
                "Set by {} for this run; saved URL is {}. Saving replaces it.",
                BACKEND_URL_ENV, self.backend_url
            )
        })
    }

    pub fn input_settings(&self) -> InputSettings {
        InputSettings {
            ctrl_enter_submit: self.ctrl_enter_submit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.backend_url, "http://localhost:8000");
        assert_eq!(settings.theme, Theme::Dark);
        assert!(settings.input_settings().ctrl_enter_submit);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let mut settings = Settings::default();
        settings.set_backend_url("http://rag.internal:9000/").unwrap();
        settings.theme = Theme::Light;
        settings.ctrl_enter_submit = false;
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.backend_url, "http://rag.internal:9000");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "theme = \"light\"\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.backend_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "backend_url = [").unwrap();

        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn test_backend_override() {
        let mut settings =
            Settings::default().with_backend_override(Some(" https://rag.example.com/ ".into()));
        assert_eq!(settings.effective_backend_url(), "https://rag.example.com");
        assert_eq!(settings.backend_url, DEFAULT_BACKEND_URL);

        // The override never reaches the file
        let contents = toml::to_string_pretty(&settings).unwrap();
        assert!(!contents.contains("rag.example.com"));

        settings.set_backend_url("http://10.0.0.5:8000").unwrap();
        assert_eq!(settings.effective_backend_url(), "http://10.0.0.5:8000");

        let settings = Settings::default().with_backend_override(Some("ftp://nope".into()));
        assert_eq!(settings.effective_backend_url(), DEFAULT_BACKEND_URL);

        let settings = Settings::default().with_backend_override(None);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_hints_name_the_effective_url() {
        let settings = Settings::default();
        assert_eq!(
            settings.endpoint_hint(),
            "Requests go to http://localhost:8000/api/ingest and http://localhost:8000/api/prompt"
        );
        assert_eq!(settings.override_hint(), None);

        let mut settings =
            Settings::default().with_backend_override(Some("https://rag.example.com".into()));
        assert_eq!(
            settings.endpoint_hint(),
            "Requests go to https://rag.example.com/api/ingest and https://rag.example.com/api/prompt"
        );
        assert_eq!(
            settings.override_hint().unwrap(),
            "Set by RAG_BACKEND_URL for this run; saved URL is http://localhost:8000. Saving replaces it."
        );

        settings.set_backend_url("http://10.0.0.5:8000").unwrap();
        assert!(settings.endpoint_hint().contains("http://10.0.0.5:8000/api/prompt"));
        assert_eq!(settings.override_hint(), None);
    }

    #[test]
    fn test_set_backend_url_rejects_garbage() {
        let mut settings = Settings::default();
        assert!(settings.set_backend_url("   ").is_err());
        assert_eq!(settings.backend_url, DEFAULT_BACKEND_URL);
    }
}
