use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::completion::{
    RetryPolicy, DEFAULT_BACKOFF, DEFAULT_MAX_ATTEMPTS, DEFAULT_TIMEOUT,
};
use crate::utils::url::construct_api_url;

pub const DEFAULT_BASE_URL: &str = "https://ai.hackclub.com";
pub const COMPLETIONS_PATH: &str = "chat/completions";

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the completion service; `chat/completions` is appended
    pub base_url: Option<String>,
    /// Total attempts per generation, including the first
    pub max_attempts: Option<u32>,
    /// Per-attempt timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Constant delay between attempts in milliseconds
    pub backoff_ms: Option<u64>,
    /// Ask for the full eight-point concept brief
    pub detailed_brief: Option<bool>,
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
///
/// # Examples
/// - Unix: `/home/user/.config/appspark/config.toml` → `~/.config/appspark/config.toml`
/// - macOS: `/Users/user/Library/Application Support/...` → `~/Library/Application Support/...`
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}

impl Config {
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn endpoint(&self) -> String {
        construct_api_url(self.base_url(), COMPLETIONS_PATH)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS),
            timeout: self
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TIMEOUT),
            backoff: self
                .backoff_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_BACKOFF),
        }
    }

    pub fn detailed_brief(&self) -> bool {
        self.detailed_brief.unwrap_or(false)
    }
}
