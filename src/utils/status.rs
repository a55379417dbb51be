use crate::utils::{ClientError, IngestReceipt, PromptAnswer};
use std::time::Duration;

pub const MISSING_FILE: &str = "Please select a file";
pub const UPLOADING: &str = "Uploading and processing file...";
pub const UPLOAD_FAILED: &str = "❌ Upload failed";
pub const UPLOAD_ERROR: &str = "❌ Error uploading file";
pub const THINKING: &str = "Thinking...";
pub const RESPONSE_FAILED: &str = "❌ Error getting response";
pub const CONNECTION_FAILED: &str = "❌ Error connecting to backend";

/// Colour family of a status line, derived from its marker.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tone {
    Info,
    Success,
    Error,
}

impl Tone {
    pub fn of(text: &str) -> Self {
        if text.contains('✅') {
            Tone::Success
        } else if text.contains('❌') {
            Tone::Error
        } else {
            Tone::Info
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Tone::Success => "bg-green-500/15 text-green-700 dark:text-green-300",
            Tone::Error => "bg-red-500/15 text-red-700 dark:text-red-300",
            Tone::Info => "bg-blue-500/15 text-blue-700 dark:text-blue-300",
        }
    }
}

// ============================================================================
// Upload flow
// ============================================================================

#[derive(Clone, Debug, PartialEq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    MissingFile,
    Rejected(String),
    Uploading,
    Ingested {
        receipt: IngestReceipt,
        elapsed: Duration,
    },
    HttpFailure,
    TransportFailure,
    BackendError(String),
}

impl UploadStatus {
    pub fn from_outcome(outcome: Result<IngestReceipt, ClientError>, elapsed: Duration) -> Self {
        match outcome {
            Ok(receipt) => UploadStatus::Ingested { receipt, elapsed },
            Err(ClientError::Backend(message)) => UploadStatus::BackendError(message),
            Err(e) if e.is_http_failure() => UploadStatus::HttpFailure,
            Err(_) => UploadStatus::TransportFailure,
        }
    }

    pub fn text(&self) -> String {
        match self {
            UploadStatus::Idle => String::new(),
            UploadStatus::MissingFile => MISSING_FILE.to_string(),
            UploadStatus::Rejected(reason) => format!("❌ {}", reason),
            UploadStatus::Uploading => UPLOADING.to_string(),
            UploadStatus::Ingested { receipt, .. } => format!("✅ {}", receipt.message),
            UploadStatus::HttpFailure => UPLOAD_FAILED.to_string(),
            UploadStatus::TransportFailure => UPLOAD_ERROR.to_string(),
            UploadStatus::BackendError(message) => format!("❌ {}", message),
        }
    }

    pub fn tone(&self) -> Tone {
        Tone::of(&self.text())
    }

    pub fn is_visible(&self) -> bool {
        !self.text().is_empty()
    }

    /// Secondary line shown under a successful upload.
    pub fn details(&self) -> Option<String> {
        let UploadStatus::Ingested { receipt, elapsed } = self else {
            return None;
        };

        let mut parts = Vec::new();
        if let Some(chunks) = receipt.chunks_created {
            parts.push(if chunks == 1 {
                "1 chunk".to_string()
            } else {
                format!("{} chunks", chunks)
            });
        }
        if let Some(ms) = receipt.processing_time_ms.and_then(millis) {
            parts.push(format!("processed in {}", format_duration(ms)));
        }
        parts.push(format!("round trip {}", format_duration(*elapsed)));
        if let Some(trace) = &receipt.trace_id {
            parts.push(format!("trace {}", short_trace(trace)));
        }

        Some(parts.join(" · "))
    }
}

// ============================================================================
// Query flow
// ============================================================================

#[derive(Clone, Debug, PartialEq, Default)]
pub enum QueryState {
    #[default]
    Idle,
    Thinking,
    Answered {
        answer: PromptAnswer,
        elapsed: Duration,
    },
    HttpFailure,
    TransportFailure,
    BackendError(String),
}

impl QueryState {
    pub fn from_outcome(outcome: Result<PromptAnswer, ClientError>, elapsed: Duration) -> Self {
        match outcome {
            Ok(answer) => QueryState::Answered { answer, elapsed },
            Err(ClientError::Backend(message)) => QueryState::BackendError(message),
            Err(e) if e.is_http_failure() => QueryState::HttpFailure,
            Err(_) => QueryState::TransportFailure,
        }
    }

    /// What the response card shows. Answers are returned untouched.
    pub fn text(&self) -> String {
        match self {
            QueryState::Idle => String::new(),
            QueryState::Thinking => THINKING.to_string(),
            QueryState::Answered { answer, .. } => answer.response.clone(),
            QueryState::HttpFailure => RESPONSE_FAILED.to_string(),
            QueryState::TransportFailure => CONNECTION_FAILED.to_string(),
            QueryState::BackendError(message) => format!("❌ {}", message),
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.text().is_empty()
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            QueryState::HttpFailure | QueryState::TransportFailure | QueryState::BackendError(_)
        )
    }

    pub fn details(&self) -> Option<String> {
        let QueryState::Answered { answer, elapsed } = self else {
            return None;
        };

        let mut parts = Vec::new();
        if let Some(docs) = answer.retrieved_docs_count {
            parts.push(if docs == 1 {
                "1 source".to_string()
            } else {
                format!("{} sources", docs)
            });
        }
        if let Some(ms) = answer.response_time_ms.and_then(millis) {
            parts.push(format!("generated in {}", format_duration(ms)));
        }
        parts.push(format!("round trip {}", format_duration(*elapsed)));
        if let Some(trace) = &answer.trace_id {
            parts.push(format!("trace {}", short_trace(trace)));
        }

        Some(parts.join(" · "))
    }
}

// ============================================================================
// Formatting
// ============================================================================

pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{}ms", millis)
    } else {
        let secs = duration.as_secs_f64();
        if secs < 60.0 {
            format!("{:.2}s", secs)
        } else {
            format!("{:.1}m", secs / 60.0)
        }
    }
}

/// Backend timings are untrusted: negative, NaN or overflowing values are dropped.
fn millis(ms: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(ms / 1000.0).ok()
}

fn short_trace(trace: &str) -> &str {
    trace.get(..8).unwrap_or(trace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn receipt(message: &str) -> IngestReceipt {
        IngestReceipt {
            message: message.to_string(),
            chunks_created: None,
            processing_time_ms: None,
            trace_id: None,
        }
    }

    fn answer(response: &str) -> PromptAnswer {
        PromptAnswer {
            response: response.to_string(),
            trace_id: None,
            response_time_ms: None,
            retrieved_docs_count: None,
        }
    }

    #[test]
    fn test_upload_status_strings() {
        assert_eq!(UploadStatus::Idle.text(), "");
        assert_eq!(UploadStatus::MissingFile.text(), "Please select a file");
        assert_eq!(UploadStatus::Uploading.text(), "Uploading and processing file...");
        assert_eq!(UploadStatus::HttpFailure.text(), "❌ Upload failed");
        assert_eq!(UploadStatus::TransportFailure.text(), "❌ Error uploading file");

        let done = UploadStatus::from_outcome(
            Ok(receipt("Successfully ingested notes.txt")),
            Duration::from_millis(5),
        );
        assert_eq!(done.text(), "✅ Successfully ingested notes.txt");
    }

    #[test]
    fn test_upload_outcome_mapping() {
        let elapsed = Duration::ZERO;
        assert_eq!(
            UploadStatus::from_outcome(Err(ClientError::Status(StatusCode::BAD_REQUEST)), elapsed),
            UploadStatus::HttpFailure
        );
        assert_eq!(
            UploadStatus::from_outcome(Err(ClientError::Decode("eof".to_string())), elapsed),
            UploadStatus::TransportFailure
        );
        assert_eq!(
            UploadStatus::from_outcome(
                Err(ClientError::Io {
                    path: "a.txt".into(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                }),
                elapsed
            ),
            UploadStatus::TransportFailure
        );
        let backend = UploadStatus::from_outcome(
            Err(ClientError::Backend("Supabase credentials not configured".to_string())),
            elapsed,
        );
        assert_eq!(backend.text(), "❌ Supabase credentials not configured");
    }

    #[test]
    fn test_tone_follows_marker() {
        assert_eq!(UploadStatus::MissingFile.tone(), Tone::Info);
        assert_eq!(UploadStatus::Uploading.tone(), Tone::Info);
        assert_eq!(UploadStatus::HttpFailure.tone(), Tone::Error);
        assert_eq!(UploadStatus::Rejected("Unsupported file type: .pdf".into()).tone(), Tone::Error);
        assert_eq!(
            UploadStatus::Ingested {
                receipt: receipt("ok"),
                elapsed: Duration::ZERO
            }
            .tone(),
            Tone::Success
        );
    }

    #[test]
    fn test_query_state_strings() {
        assert!(!QueryState::Idle.is_visible());
        assert_eq!(QueryState::Thinking.text(), "Thinking...");
        assert_eq!(QueryState::HttpFailure.text(), "❌ Error getting response");
        assert_eq!(QueryState::TransportFailure.text(), "❌ Error connecting to backend");
        assert!(QueryState::TransportFailure.is_failure());

        let state = QueryState::from_outcome(
            Ok(answer("  first\n\nsecond  ")),
            Duration::from_millis(10),
        );
        assert_eq!(state.text(), "  first\n\nsecond  ");
        assert!(!state.is_failure());
    }

    #[test]
    fn test_empty_answer_hides_card() {
        let state = QueryState::from_outcome(Ok(answer("")), Duration::ZERO);
        assert!(!state.is_visible());
    }

    #[test]
    fn test_details() {
        let status = UploadStatus::Ingested {
            receipt: IngestReceipt {
                message: "Successfully ingested a.txt".to_string(),
                chunks_created: Some(4),
                processing_time_ms: Some(1530.0),
                trace_id: Some("0b6f3c1e-8d2a-4f7b-9c1e-2a3b4c5d6e7f".to_string()),
            },
            elapsed: Duration::from_millis(1712),
        };
        assert_eq!(
            status.details().unwrap(),
            "4 chunks · processed in 1.53s · round trip 1.71s · trace 0b6f3c1e"
        );

        let state = QueryState::Answered {
            answer: PromptAnswer {
                response: "x".to_string(),
                trace_id: None,
                response_time_ms: Some(f64::NAN),
                retrieved_docs_count: Some(1),
            },
            elapsed: Duration::from_millis(250),
        };
        assert_eq!(state.details().unwrap(), "1 source · round trip 250ms");
        assert_eq!(QueryState::Thinking.details(), None);
    }

    #[test]
    fn test_details_skip_out_of_range_timings() {
        assert_eq!(millis(1500.0), Some(Duration::from_millis(1500)));
        assert_eq!(millis(-1.0), None);
        assert_eq!(millis(f64::INFINITY), None);
        assert_eq!(millis(1e300), None);
        assert_eq!(millis(u64::MAX as f64 * 1e3), None);

        let status = UploadStatus::Ingested {
            receipt: IngestReceipt {
                processing_time_ms: Some(1e300),
                ..receipt("Successfully ingested big.txt")
            },
            elapsed: Duration::from_millis(40),
        };
        assert_eq!(status.details().unwrap(), "round trip 40ms");

        let state = QueryState::Answered {
            answer: PromptAnswer {
                response_time_ms: Some(u64::MAX as f64 * 1e3),
                ..answer("x")
            },
            elapsed: Duration::from_millis(40),
        };
        assert_eq!(state.details().unwrap(), "round trip 40ms");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(999)), "999ms");
        assert_eq!(format_duration(Duration::from_millis(2500)), "2.50s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1.5m");
    }
}
