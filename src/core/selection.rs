use std::error::Error as StdError;
use std::fmt;

pub const MAX_FEATURES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// A fourth feature was requested while three were already selected.
    LimitExceeded { rejected: String },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::LimitExceeded { rejected } => write!(
                f,
                "Cannot add '{rejected}': at most {MAX_FEATURES} features can be selected"
            ),
        }
    }
}

impl StdError for SelectionError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureToggle {
    Added,
    Removed,
}

/// The user's current theme and feature picks.
///
/// Features keep insertion order because the prompt lists them in the order
/// they were chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    theme: Option<String>,
    features: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn is_feature_selected(&self, name: &str) -> bool {
        self.features.iter().any(|feature| feature == name)
    }

    /// Single-select: last write wins.
    pub fn set_theme(&mut self, name: impl Into<String>) {
        self.theme = Some(name.into());
    }

    pub fn toggle_feature(&mut self, name: &str) -> Result<FeatureToggle, SelectionError> {
        if let Some(index) = self.features.iter().position(|feature| feature == name) {
            self.features.remove(index);
            return Ok(FeatureToggle::Removed);
        }

        if self.features.len() >= MAX_FEATURES {
            return Err(SelectionError::LimitExceeded {
                rejected: name.to_string(),
            });
        }

        self.features.push(name.to_string());
        Ok(FeatureToggle::Added)
    }

    pub fn clear(&mut self) {
        self.theme = None;
        self.features.clear();
    }
}
