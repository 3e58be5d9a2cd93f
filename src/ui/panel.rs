use std::io::{self, BufRead, Write};

use crate::core::completion::CompletionError;

/// Persistent failure view shown once the retry budget is spent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPanel {
    pub attempts: u32,
    pub detail: String,
}

impl ErrorPanel {
    pub const TITLE: &'static str = "Generation Failed";
    pub const RETRY_QUESTION: &'static str = "Try again? [y/N] ";

    pub fn from_error(err: &CompletionError) -> Self {
        match err {
            CompletionError::ExhaustedRetries { attempts, last } => Self {
                attempts: *attempts,
                detail: last.to_string(),
            },
        }
    }

    pub fn render(&self) -> String {
        let times = if self.attempts == 1 {
            "once".to_string()
        } else {
            format!("{} times", self.attempts)
        };
        format!(
            "❌ {}\n   We tried {} but encountered an issue while generating your app idea. Please try again.\n   Last error: {}",
            Self::TITLE,
            times,
            self.detail
        )
    }

    pub fn print(&self) {
        eprintln!("{}", self.render());
    }
}

/// Ask whether to retry. Anything other than `y`/`yes` (or EOF) means no.
pub fn confirm_retry<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    write!(output, "{}", ErrorPanel::RETRY_QUESTION)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(matches!(
        line.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
