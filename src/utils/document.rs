use crate::utils::ClientError;
use std::path::{Path, PathBuf};

/// File types the upload form offers in its picker.
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["txt", "md", "doc", "docx"];

/// A file the user picked for upload. Content is read only when uploading.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedDocument {
    path: PathBuf,
    name: String,
    size: Option<u64>,
}

impl SelectedDocument {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| format!("Not a file: {}", path.display()))?;

        if !is_accepted(path) {
            let ext = path
                .extension()
                .map(|e| format!(".{}", e.to_string_lossy()))
                .unwrap_or_else(|| "files without an extension".to_string());
            return Err(format!("Unsupported file type: {}", ext));
        }

        let size = std::fs::metadata(path).ok().map(|m| m.len());

        Ok(Self {
            path: path.to_path_buf(),
            name,
            size,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Human readable size, when it was known at selection time.
    pub fn size_label(&self) -> Option<String> {
        self.size.map(format_size)
    }

    pub async fn read(&self) -> Result<Vec<u8>, ClientError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| ClientError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

pub fn is_accepted(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(e))
        })
        .unwrap_or(false)
}

fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let b = bytes as f64;
    if b < KB {
        format!("{} B", bytes)
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / MB)
    }
}

fn default_upload_dir() -> Option<PathBuf> {
    dirs::document_dir()
        .or_else(dirs::download_dir)
        .or_else(dirs::home_dir)
}

/// Opens the native file dialog. `None` when the user cancels.
pub async fn pick_document() -> Option<PathBuf> {
    let mut dialog = rfd::AsyncFileDialog::new()
        .set_title("Select a text file to upload")
        .add_filter("Documents", &ACCEPTED_EXTENSIONS);
    if let Some(dir) = default_upload_dir() {
        dialog = dialog.set_directory(dir);
    }

    dialog
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_extensions() {
        assert!(is_accepted(Path::new("notes.txt")));
        assert!(is_accepted(Path::new("README.MD")));
        assert!(is_accepted(Path::new("/tmp/report.docx")));
        assert!(!is_accepted(Path::new("paper.pdf")));
        assert!(!is_accepted(Path::new("Makefile")));
    }

    #[test]
    fn test_from_path_rejects_unsupported() {
        let err = SelectedDocument::from_path("slides.pdf").unwrap_err();
        assert_eq!(err, "Unsupported file type: .pdf");

        let err = SelectedDocument::from_path("LICENSE").unwrap_err();
        assert_eq!(err, "Unsupported file type: files without an extension");
    }

    #[test]
    fn test_from_path_records_name_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("handbook.md");
        std::fs::write(&path, vec![b'a'; 2048]).unwrap();

        let document = SelectedDocument::from_path(&path).unwrap();
        assert_eq!(document.name(), "handbook.md");
        assert_eq!(document.path(), path.as_path());
        assert_eq!(document.size_label().as_deref(), Some("2.0 KB"));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }
}
