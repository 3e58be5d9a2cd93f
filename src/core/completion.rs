use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

use tracing::{debug, warn};

use crate::api::{ChatRequest, ChatResponse};
use crate::core::render::RenderedText;
use crate::core::sanitize::strip_reasoning;

/// Shown when the endpoint answers without usable content.
pub const FALLBACK_CONTENT: &str = "Sorry, I couldn't process that request.";

pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(1);

const ERROR_BODY_PREVIEW_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first one. Values below 1 are treated as 1.
    pub max_attempts: u32,
    pub timeout: Duration,
    /// Constant delay between attempts.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            timeout: DEFAULT_TIMEOUT,
            backoff: DEFAULT_BACKOFF,
        }
    }
}

/// Why a single attempt failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptError {
    /// The endpoint answered with a non-2xx status.
    Status { status: u16, body: String },
    /// Connection, DNS, TLS or body read failure.
    Transport(String),
    /// The attempt did not settle within the per-attempt timeout.
    Timeout(Duration),
    /// A 2xx body that is not JSON.
    Decode(String),
}

impl fmt::Display for AttemptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptError::Status { status, body } => match summarize_error_body(body) {
                Some(summary) => write!(f, "API request failed with status {status}: {summary}"),
                None => write!(f, "API request failed with status {status}"),
            },
            AttemptError::Transport(message) => write!(f, "Request failed: {message}"),
            AttemptError::Timeout(timeout) => {
                write!(f, "Request timed out after {}", format_duration(*timeout))
            }
            AttemptError::Decode(message) => write!(f, "Invalid response body: {message}"),
        }
    }
}

impl StdError for AttemptError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    /// Every attempt failed. `last` is the error of the final attempt.
    ExhaustedRetries { attempts: u32, last: AttemptError },
}

impl CompletionError {
    pub fn attempts(&self) -> u32 {
        match self {
            CompletionError::ExhaustedRetries { attempts, .. } => *attempts,
        }
    }
}

impl fmt::Display for CompletionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionError::ExhaustedRetries { attempts, last } => {
                let noun = if *attempts == 1 { "attempt" } else { "attempts" };
                write!(f, "Giving up after {attempts} {noun}: {last}")
            }
        }
    }
}

impl StdError for CompletionError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            CompletionError::ExhaustedRetries { last, .. } => Some(last),
        }
    }
}

/// Sends prompts to a chat-completion endpoint, retrying transient failures.
#[derive(Clone)]
pub struct CompletionClient {
    client: reqwest::Client,
    endpoint: String,
    policy: RetryPolicy,
}

impl CompletionClient {
    pub fn new(endpoint: impl Into<String>, policy: RetryPolicy) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint, policy)
    }

    pub fn with_client(
        client: reqwest::Client,
        endpoint: impl Into<String>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            policy,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Fetch a completion for `prompt`, strip reasoning and render it.
    pub async fn complete(&self, prompt: &str) -> Result<RenderedText, CompletionError> {
        let content = self.fetch_with_retry(prompt).await?;
        Ok(RenderedText::from_markdown(strip_reasoning(&content)))
    }

    /// One attempt, no retry, no sanitation.
    pub async fn fetch_raw(&self, prompt: &str) -> Result<String, AttemptError> {
        self.attempt(prompt).await
    }

    async fn fetch_with_retry(&self, prompt: &str) -> Result<String, CompletionError> {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            debug!(attempt, max_attempts, endpoint = %self.endpoint, "sending completion request");

            let last = match self.attempt(prompt).await {
                Ok(content) => {
                    debug!(attempt, chars = content.len(), "completion received");
                    return Ok(content);
                }
                Err(err) => err,
            };

            if attempt >= max_attempts {
                warn!(attempt, error = %last, "completion failed, no attempts left");
                return Err(CompletionError::ExhaustedRetries {
                    attempts: attempt,
                    last,
                });
            }

            warn!(
                attempt,
                error = %last,
                backoff_ms = self.policy.backoff.as_millis() as u64,
                "completion attempt failed, retrying"
            );
            tokio::time::sleep(self.policy.backoff).await;
        }
    }

    async fn attempt(&self, prompt: &str) -> Result<String, AttemptError> {
        let request = ChatRequest::single_user_message(prompt);

        let exchange = async {
            let response = self
                .client
                .post(&self.endpoint)
                .header("Content-Type", "application/json")
                .json(&request)
                .send()
                .await
                .map_err(|err| AttemptError::Transport(err.to_string()))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|err| AttemptError::Transport(err.to_string()))?;

            if !status.is_success() {
                return Err(AttemptError::Status {
                    status: status.as_u16(),
                    body,
                });
            }
            Ok::<_, AttemptError>(body)
        };

        let body = tokio::time::timeout(self.policy.timeout, exchange)
            .await
            .map_err(|_| AttemptError::Timeout(self.policy.timeout))??;

        extract_content(&body)
    }
}

/// Pull `choices[0].message.content` out of a completion body.
///
/// A body that is not JSON, or is JSON `null`, is an error. Any other shape
/// falls back to [`FALLBACK_CONTENT`].
pub fn extract_content(body: &str) -> Result<String, AttemptError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|err| AttemptError::Decode(err.to_string()))?;
    if value.is_null() {
        return Err(AttemptError::Decode("response body is null".to_string()));
    }
    let response: ChatResponse = serde_json::from_value(value).unwrap_or_default();

    Ok(response
        .first_content()
        .unwrap_or(FALLBACK_CONTENT)
        .to_string())
}

fn summarize_error_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    let summary = serde_json::from_str::<serde_json::Value>(trimmed)
        .ok()
        .and_then(|value| {
            value
                .pointer("/error/message")
                .and_then(|v| v.as_str())
                .map(str::to_owned)
                .or_else(|| {
                    value
                        .get("error")
                        .and_then(|v| v.as_str().map(str::to_owned))
                })
                .or_else(|| {
                    value
                        .get("message")
                        .and_then(|v| v.as_str().map(str::to_owned))
                })
        })
        .unwrap_or_else(|| trimmed.to_string());

    let collapsed = summary.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() > ERROR_BODY_PREVIEW_CHARS {
        let preview: String = collapsed.chars().take(ERROR_BODY_PREVIEW_CHARS).collect();
        Some(format!("{preview}…"))
    } else {
        Some(collapsed)
    }
}

fn format_duration(duration: Duration) -> String {
    if duration.subsec_millis() == 0 {
        format!("{}s", duration.as_secs())
    } else {
        format!("{}ms", duration.as_millis())
    }
}
