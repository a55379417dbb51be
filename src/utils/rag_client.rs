use crate::utils::{ClientError, SelectedDocument};
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

// ============================================================================
// Constants
// ============================================================================

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const INGEST_PATH: &str = "/api/ingest";
const PROMPT_PATH: &str = "/api/prompt";
const STATUS_PATH: &str = "/status";
const REQUEST_ID_HEADER: &str = "X-Request-Id";
const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// API Types - Request
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PromptRequest<'a> {
    pub prompt: &'a str,
}

// ============================================================================
// API Types - Response
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
struct IngestBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    chunks_created: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    processing_time_ms: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    trace_id: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct PromptBody {
    #[serde(default)]
    response: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    trace_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    response_time_ms: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    retrieved_docs_count: Option<u64>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct StatusBody {
    backend: String,
    #[serde(default)]
    observability: Option<ObservabilityBody>,
}

#[derive(Debug, Clone, Deserialize)]
struct ObservabilityBody {
    #[serde(default)]
    langsmith: bool,
}

/// Informational extras never decide success: a value of the wrong type reads as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Successful `/api/ingest` result.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestReceipt {
    pub message: String,
    pub chunks_created: Option<u64>,
    pub processing_time_ms: Option<f64>,
    pub trace_id: Option<String>,
}

/// Successful `/api/prompt` result. `response` is kept exactly as sent.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptAnswer {
    pub response: String,
    pub trace_id: Option<String>,
    pub response_time_ms: Option<f64>,
    pub retrieved_docs_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackendHealth {
    pub backend: String,
    pub langsmith: bool,
}

impl IngestBody {
    fn into_receipt(self) -> Result<IngestReceipt, ClientError> {
        match (self.message, self.error) {
            (Some(message), _) => Ok(IngestReceipt {
                message,
                chunks_created: self.chunks_created,
                processing_time_ms: self.processing_time_ms,
                trace_id: self.trace_id,
            }),
            (None, Some(error)) => Err(ClientError::Backend(error)),
            (None, None) => Err(ClientError::Decode("missing `message` field".to_string())),
        }
    }
}

impl PromptBody {
    fn into_answer(self) -> Result<PromptAnswer, ClientError> {
        match (self.response, self.error) {
            (Some(response), _) => Ok(PromptAnswer {
                response,
                trace_id: self.trace_id,
                response_time_ms: self.response_time_ms,
                retrieved_docs_count: self.retrieved_docs_count,
            }),
            (None, Some(error)) => Err(ClientError::Backend(error)),
            (None, None) => Err(ClientError::Decode("missing `response` field".to_string())),
        }
    }
}

// ============================================================================
// RAG Backend Client
// ============================================================================

#[derive(Clone)]
pub struct RagClient {
    client: Client,
    base_url: Arc<String>,
}

impl PartialEq for RagClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl std::fmt::Debug for RagClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RagClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl RagClient {
    /// One attempt per call: no timeout, retry or backoff is configured.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = normalize_base_url(base_url).map_err(ClientError::Client)?;

        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| ClientError::Client(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: Arc::new(base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ========================================================================
    // Document Ingestion
    // ========================================================================

    /// Reads the document from disk and uploads it.
    pub async fn ingest(&self, document: &SelectedDocument) -> Result<IngestReceipt, ClientError> {
        let bytes = document.read().await?;
        self.ingest_bytes(document.name(), bytes).await
    }

    pub async fn ingest_bytes(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<IngestReceipt, ClientError> {
        let request_id = Uuid::new_v4();
        let span = info_span!(
            "ingest",
            %request_id,
            file_name,
            size = bytes.len()
        );

        async move {
            let mime = mime_guess::from_path(file_name).first_or_octet_stream();
            let part = Part::bytes(bytes)
                .file_name(file_name.to_string())
                .mime_str(mime.as_ref())?;
            let form = Form::new().part("file", part);

            let started = Instant::now();
            let response = self
                .client
                .post(self.endpoint(INGEST_PATH))
                .header(REQUEST_ID_HEADER, request_id.to_string())
                .multipart(form)
                .send()
                .await
                .inspect_err(|e| warn!(error = %e, "ingest request failed"))?;

            let body: IngestBody = decode_success(response, started).await?;
            body.into_receipt()
        }
        .instrument(span)
        .await
    }

    // ========================================================================
    // Prompting
    // ========================================================================

    /// Sends the prompt as typed; callers decide whether it is worth sending.
    pub async fn prompt(&self, prompt: &str) -> Result<PromptAnswer, ClientError> {
        let request_id = Uuid::new_v4();
        let span = info_span!("prompt", %request_id, prompt_len = prompt.len());

        async move {
            let started = Instant::now();
            let response = self
                .client
                .post(self.endpoint(PROMPT_PATH))
                .header(REQUEST_ID_HEADER, request_id.to_string())
                .header(CONTENT_TYPE, "application/json")
                .json(&PromptRequest { prompt })
                .send()
                .await
                .inspect_err(|e| warn!(error = %e, "prompt request failed"))?;

            let body: PromptBody = decode_success(response, started).await?;
            body.into_answer()
        }
        .instrument(span)
        .await
    }

    // ========================================================================
    // Health
    // ========================================================================

    pub async fn status(&self) -> Result<BackendHealth, ClientError> {
        let request_id = Uuid::new_v4();
        let span = info_span!("status", %request_id);

        async move {
            let started = Instant::now();
            let response = self
                .client
                .get(self.endpoint(STATUS_PATH))
                .header(REQUEST_ID_HEADER, request_id.to_string())
                .send()
                .await?;

            let body: StatusBody = decode_success(response, started).await?;
            Ok::<_, ClientError>(BackendHealth {
                backend: body.backend,
                langsmith: body.observability.map(|o| o.langsmith).unwrap_or(false),
            })
        }
        .instrument(span)
        .await
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Failure bodies are never read; success bodies must be JSON.
async fn decode_success<T: DeserializeOwned>(
    response: Response,
    started: Instant,
) -> Result<T, ClientError> {
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if !status.is_success() {
        warn!(%status, elapsed_ms, "backend rejected request");
        return Err(ClientError::Status(status));
    }

    let bytes = response.bytes().await?;
    info!(%status, elapsed_ms, body_len = bytes.len(), "backend responded");

    serde_json::from_slice(&bytes).map_err(|e| {
        warn!(error = %e, "could not decode backend response");
        ClientError::Decode(e.to_string())
    })
}

/// Trims whitespace and trailing slashes; only http(s) URLs are accepted.
pub fn normalize_base_url(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim().trim_end_matches('/');

    if trimmed.is_empty() {
        return Err("Backend URL cannot be empty".to_string());
    }

    let rest = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .ok_or_else(|| format!("Backend URL must start with http:// or https:// (got {})", trimmed))?;

    if rest.is_empty() {
        return Err("Backend URL is missing a host".to_string());
    }

    Ok(trimmed.to_string())
}
