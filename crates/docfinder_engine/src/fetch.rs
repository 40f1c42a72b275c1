use std::time::Duration;

use finder_logging::{finder_debug, finder_info, finder_warn};

use crate::{DoctorRecord, EngineEvent, FailureKind, FetchError, FetchProgress};

/// The published directory document.
pub const DEFAULT_ENDPOINT: &str =
    "https://srijandubey.github.io/campus-api-mock/SRM-C1-25.json";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    /// Per-attempt ceiling; a slow response is cancelled and retried.
    pub request_timeout: Duration,
    pub max_retries: u32,
    /// Fixed pause between attempts. Linear on purpose: the delay never
    /// grows, matching the client contract this engine implements.
    pub retry_delay: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_delay: Duration::from_secs(1),
        }
    }
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelProgressSink {
    tx: std::sync::mpsc::Sender<EngineEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: std::sync::mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

#[async_trait::async_trait]
pub trait DoctorSource: Send + Sync {
    async fn fetch(&self, sink: &dyn ProgressSink) -> Result<Vec<DoctorRecord>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSource {
    settings: FetchSettings,
}

impl ReqwestSource {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::NetworkUnavailable, err.to_string()))
    }

    async fn attempt(
        &self,
        client: &reqwest::Client,
        url: &reqwest::Url,
        sink: &dyn ProgressSink,
    ) -> Result<Vec<DoctorRecord>, FetchError> {
        let response = client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                format!("HTTP error {status}"),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        sink.emit(EngineEvent::Progress(FetchProgress::Decoding {
            bytes: body.len() as u64,
        }));

        serde_json::from_slice(&body).map_err(|err| {
            FetchError::new(
                FailureKind::Parse,
                format!("malformed doctor payload: {err}"),
            )
        })
    }
}

#[async_trait::async_trait]
impl DoctorSource for ReqwestSource {
    /// Runs up to `max_retries` attempts, sleeping `retry_delay` between
    /// them. Every failure is retryable while attempts remain; the last
    /// failure decides the terminal error kind.
    async fn fetch(&self, sink: &dyn ProgressSink) -> Result<Vec<DoctorRecord>, FetchError> {
        let url = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| FetchError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        let client = self.build_client()?;
        let max = self.settings.max_retries.max(1);

        let mut last_error: Option<FetchError> = None;
        for attempt in 1..=max {
            sink.emit(EngineEvent::Progress(FetchProgress::Attempt {
                number: attempt,
                max,
            }));
            finder_debug!("doctor fetch attempt {}/{}", attempt, max);

            match self.attempt(&client, &url, sink).await {
                Ok(records) => {
                    finder_info!("doctor fetch succeeded with {} records", records.len());
                    return Ok(records);
                }
                Err(error) => {
                    finder_warn!("doctor fetch attempt {}/{} failed: {}", attempt, max, error);
                    last_error = Some(error);
                }
            }

            if attempt < max {
                sink.emit(EngineEvent::Progress(FetchProgress::RetryScheduled {
                    delay: self.settings.retry_delay,
                }));
                tokio::time::sleep(self.settings.retry_delay).await;
            }
        }

        let error = last_error.unwrap_or_else(|| {
            FetchError::new(FailureKind::NetworkUnavailable, "no fetch attempt was made")
        });
        Err(finalize_error(error))
    }
}

/// Rewrites the last attempt's error into the user-facing terminal
/// failure for its kind.
fn finalize_error(error: FetchError) -> FetchError {
    match error.kind {
        FailureKind::Timeout => FetchError::new(
            FailureKind::Timeout,
            "Request timed out after multiple attempts. The server might be down or unreachable.",
        ),
        FailureKind::NetworkUnavailable => FetchError::new(
            FailureKind::NetworkUnavailable,
            "Network error: please check your internet connection.",
        ),
        _ => error,
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_connect() {
        return FetchError::new(FailureKind::NetworkUnavailable, err.to_string());
    }
    FetchError::new(FailureKind::NetworkUnavailable, err.to_string())
}
