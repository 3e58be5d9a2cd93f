use clap::ValueEnum;

use crate::core::formatter::format_response;
use crate::core::render::RenderedText;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Sanitized markdown as returned by the model
    #[default]
    Text,
    /// CommonMark rendered to HTML
    Html,
    /// HTML with the built-in utility-class styling
    Styled,
}

/// Produce the text shown for a result in the requested format.
pub fn present(result: &RenderedText, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => result.markdown.clone(),
        OutputFormat::Html => result.html.clone(),
        OutputFormat::Styled => format_response(&result.markdown),
    }
}

/// Text placed on the clipboard: the readable result, without markup.
pub fn clipboard_text(result: &RenderedText) -> &str {
    &result.markdown
}
