use super::status::{QueryState, UploadStatus};
use crate::utils::{ClientError, IngestReceipt, PromptAnswer, SelectedDocument};
use std::time::Duration;

// ============================================================================
// Upload panel
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadPanel {
    pub selected_file: Option<SelectedDocument>,
    pub status: UploadStatus,
    pub in_flight: bool,
}

impl UploadPanel {
    /// Result of the native picker. A rejected file also clears the previous choice.
    pub fn choose(&mut self, picked: Result<SelectedDocument, String>) {
        match picked {
            Ok(document) => self.selected_file = Some(document),
            Err(reason) => {
                self.selected_file = None;
                self.status = UploadStatus::Rejected(reason);
            }
        }
    }

    pub fn can_upload(&self) -> bool {
        self.selected_file.is_some() && !self.in_flight
    }

    /// Returns the document to send, or `None` when no request should go out.
    pub fn begin(&mut self) -> Option<SelectedDocument> {
        if self.in_flight {
            return None;
        }
        let Some(document) = self.selected_file.clone() else {
            self.status = UploadStatus::MissingFile;
            return None;
        };

        self.in_flight = true;
        self.status = UploadStatus::Uploading;
        Some(document)
    }

    /// A successful upload clears the choice, unless another file was picked meanwhile.
    pub fn finish(
        &mut self,
        sent: &SelectedDocument,
        outcome: Result<IngestReceipt, ClientError>,
        elapsed: Duration,
    ) {
        if outcome.is_ok() && self.selected_file.as_ref() == Some(sent) {
            self.selected_file = None;
        }
        self.status = UploadStatus::from_outcome(outcome, elapsed);
        self.in_flight = false;
    }
}

// ============================================================================
// Query panel
// ============================================================================

/// The prompt text itself lives with the textarea and is never cleared here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryPanel {
    pub state: QueryState,
    pub in_flight: bool,
}

impl QueryPanel {
    pub fn can_submit(&self, prompt: &str) -> bool {
        !prompt.trim().is_empty() && !self.in_flight
    }

    /// Returns the text to send exactly as typed, or `None` for a no-op.
    pub fn begin(&mut self, prompt: &str) -> Option<String> {
        if !self.can_submit(prompt) {
            return None;
        }

        self.in_flight = true;
        self.state = QueryState::Thinking;
        Some(prompt.to_string())
    }

    pub fn finish(&mut self, outcome: Result<PromptAnswer, ClientError>, elapsed: Duration) {
        self.state = QueryState::from_outcome(outcome, elapsed);
        self.in_flight = false;
    }
}
