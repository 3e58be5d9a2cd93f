use std::fmt;

use crate::core::generator::GenerateError;
use crate::core::selection::SelectionError;

pub const FEATURE_LIMIT_MESSAGE: &str = "You can only select up to 3 core features.";
pub const NO_THEME_MESSAGE: &str = "Please select a theme for your app idea.";
pub const CLIPBOARD_FAILURE_MESSAGE: &str = "Failed to copy to clipboard";
pub const COPIED_MESSAGE: &str = "Copied!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    fn prefix(self) -> &'static str {
        match self {
            NoticeLevel::Info => "✅",
            NoticeLevel::Warning => "⚠️ ",
            NoticeLevel::Error => "❌",
        }
    }
}

/// A short, non-blocking message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn feature_limit() -> Self {
        Self::warning(FEATURE_LIMIT_MESSAGE)
    }

    pub fn no_theme() -> Self {
        Self::warning(NO_THEME_MESSAGE)
    }

    pub fn clipboard_failure(detail: &str) -> Self {
        Self::error(format!("{CLIPBOARD_FAILURE_MESSAGE}: {detail}"))
    }

    pub fn print(&self) {
        eprintln!("{self}");
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.level.prefix(), self.message)
    }
}

impl From<&SelectionError> for Notice {
    fn from(err: &SelectionError) -> Self {
        match err {
            SelectionError::LimitExceeded { .. } => Notice::feature_limit(),
        }
    }
}

/// Notice for errors that do not warrant the failure panel.
pub fn notice_for(err: &GenerateError) -> Option<Notice> {
    match err {
        GenerateError::NoThemeSelected => Some(Notice::no_theme()),
        GenerateError::Busy => Some(Notice::warning(err.to_string())),
        GenerateError::Completion(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::completion::{AttemptError, CompletionError};

    #[test]
    fn notices_carry_level_prefixes() {
        assert_eq!(
            Notice::feature_limit().to_string(),
            "⚠️  You can only select up to 3 core features."
        );
        assert_eq!(
            Notice::clipboard_failure("no xclip").to_string(),
            "❌ Failed to copy to clipboard: no xclip"
        );
        assert_eq!(Notice::info(COPIED_MESSAGE).to_string(), "✅ Copied!");
    }

    #[test]
    fn selection_limit_maps_to_warning() {
        let err = SelectionError::LimitExceeded {
            rejected: "REST API".to_string(),
        };
        assert_eq!(Notice::from(&err), Notice::feature_limit());
    }

    #[test]
    fn only_transient_generate_errors_become_notices() {
        assert_eq!(
            notice_for(&GenerateError::NoThemeSelected),
            Some(Notice::no_theme())
        );
        assert_eq!(
            notice_for(&GenerateError::Busy).map(|notice| notice.level),
            Some(NoticeLevel::Warning)
        );
        let exhausted = GenerateError::Completion(CompletionError::ExhaustedRetries {
            attempts: 5,
            last: AttemptError::Transport("reset".to_string()),
        });
        assert_eq!(notice_for(&exhausted), None);
    }
}
