use std::error::Error as StdError;
use std::fmt;

use crate::core::selection::Selection;

/// Outline appended when a detailed brief is requested.
pub const DETAILED_BRIEF_OUTLINE: &str = "Please provide a comprehensive app concept including: \
1. A catchy, memorable app name \
2. Clear target audience and market positioning \
3. Core value proposition and unique selling points \
4. Detailed feature breakdown and user experience \
5. Technical architecture overview \
6. Monetization strategy \
7. Potential challenges and solutions \
8. Market opportunity and competitive advantages \
Format the response with clear headings and make it engaging and professional, \
don't continue the conversation.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    NoThemeSelected,
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::NoThemeSelected => write!(f, "No theme selected"),
        }
    }
}

impl StdError for PromptError {}

#[derive(Debug, Clone, Default)]
pub struct PromptOptions {
    /// Free-text project vision supplied by the user.
    pub goal: Option<String>,
    pub detailed_brief: bool,
}

pub fn build_prompt(selection: &Selection, options: &PromptOptions) -> Result<String, PromptError> {
    let theme = selection.theme().ok_or(PromptError::NoThemeSelected)?;

    let mut prompt = format!("Come up with a unique APP concept with a {theme} theme.");

    if !selection.features().is_empty() {
        prompt.push_str(&format!(
            " Include these features: {}.",
            selection.features().join(", ")
        ));
    }

    if let Some(goal) = options.goal.as_deref().map(str::trim) {
        if !goal.is_empty() {
            prompt.push_str(&format!(" Project vision and goals: {goal}."));
        }
    }

    if options.detailed_brief {
        prompt.push(' ');
        prompt.push_str(DETAILED_BRIEF_OUTLINE);
    }

    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space_with_two_features() -> Selection {
        let mut selection = Selection::new();
        selection.set_theme("Space");
        selection.toggle_feature("Real-time Chat").unwrap();
        selection.toggle_feature("Maps & Geolocation").unwrap();
        selection
    }

    #[test]
    fn theme_and_features_produce_expected_prompt() {
        let prompt = build_prompt(&space_with_two_features(), &PromptOptions::default())
            .expect("prompt should build");
        assert_eq!(
            prompt,
            "Come up with a unique APP concept with a Space theme. Include these features: Real-time Chat, Maps & Geolocation."
        );
    }

    #[test]
    fn theme_only_omits_feature_sentence() {
        let mut selection = Selection::new();
        selection.set_theme("Retro");
        let prompt = build_prompt(&selection, &PromptOptions::default()).unwrap();
        assert_eq!(prompt, "Come up with a unique APP concept with a Retro theme.");
    }

    #[test]
    fn missing_theme_is_an_error() {
        let mut selection = Selection::new();
        selection.toggle_feature("REST API").unwrap();
        assert_eq!(
            build_prompt(&selection, &PromptOptions::default()),
            Err(PromptError::NoThemeSelected)
        );
    }

    #[test]
    fn goal_is_appended_when_present() {
        let options = PromptOptions {
            goal: Some("  make it super cool ".to_string()),
            detailed_brief: false,
        };
        let prompt = build_prompt(&space_with_two_features(), &options).unwrap();
        assert!(prompt.ends_with(
            "Maps & Geolocation. Project vision and goals: make it super cool."
        ));
    }

    #[test]
    fn blank_goal_is_ignored() {
        let options = PromptOptions {
            goal: Some("   ".to_string()),
            detailed_brief: false,
        };
        let plain = build_prompt(&space_with_two_features(), &PromptOptions::default()).unwrap();
        let with_blank = build_prompt(&space_with_two_features(), &options).unwrap();
        assert_eq!(plain, with_blank);
    }

    #[test]
    fn detailed_brief_appends_outline_last() {
        let options = PromptOptions {
            goal: Some("help astronauts".to_string()),
            detailed_brief: true,
        };
        let prompt = build_prompt(&space_with_two_features(), &options).unwrap();
        assert!(prompt.ends_with(DETAILED_BRIEF_OUTLINE));
        assert!(prompt.contains("Project vision and goals: help astronauts. Please provide"));
    }
}
