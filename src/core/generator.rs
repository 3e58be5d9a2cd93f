use std::error::Error as StdError;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info};

use crate::core::completion::{CompletionClient, CompletionError};
use crate::core::prompt::{build_prompt, PromptError, PromptOptions};
use crate::core::render::RenderedText;
use crate::core::selection::Selection;

#[derive(Debug)]
pub enum GenerateError {
    NoThemeSelected,
    /// Another generation from the same generator has not finished yet.
    Busy,
    Completion(CompletionError),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::NoThemeSelected => write!(f, "Please select a theme for your app idea."),
            GenerateError::Busy => write!(f, "A generation is already in progress."),
            GenerateError::Completion(err) => write!(f, "{err}"),
        }
    }
}

impl StdError for GenerateError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            GenerateError::Completion(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PromptError> for GenerateError {
    fn from(err: PromptError) -> Self {
        match err {
            PromptError::NoThemeSelected => GenerateError::NoThemeSelected,
        }
    }
}

impl From<CompletionError> for GenerateError {
    fn from(err: CompletionError) -> Self {
        GenerateError::Completion(err)
    }
}

#[derive(Debug, Clone)]
pub struct Generation {
    pub prompt: String,
    pub result: RenderedText,
}

/// Owns the selection and drives prompt building and completion for it.
pub struct Generator {
    selection: Selection,
    options: PromptOptions,
    client: CompletionClient,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag on every exit path.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Generator {
    pub fn new(client: CompletionClient, options: PromptOptions) -> Self {
        Self {
            selection: Selection::new(),
            options,
            client,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    pub fn options(&self) -> &PromptOptions {
        &self.options
    }

    pub fn client(&self) -> &CompletionClient {
        &self.client
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Build the prompt for the current selection and fetch a result.
    ///
    /// Without a theme no request is made. Overlapping calls are rejected
    /// with [`GenerateError::Busy`] instead of queued.
    pub async fn generate(&self) -> Result<Generation, GenerateError> {
        let prompt = build_prompt(&self.selection, &self.options)?;
        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or(GenerateError::Busy)?;

        info!(
            theme = self.selection.theme().unwrap_or_default(),
            features = self.selection.features().len(),
            "generating app idea"
        );
        debug!(%prompt, "prompt built");

        let result = self.client.complete(&prompt).await?;
        Ok(Generation { prompt, result })
    }
}
