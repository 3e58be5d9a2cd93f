//! Styled HTML for a completion, built from a fixed list of substitutions.
//!
//! Supported patterns, applied in this order:
//!
//! 1. `**bold**`
//! 2. `*italic*`
//! 3. `### heading`, `## heading`, `# heading` (up to end of line)
//! 4. `1. numbered` and `- bulleted` lines
//! 5. blank line as a paragraph break, remaining newlines as `<br>`
//!
//! Line-based patterns treat `\r\n` as a line ending, so a carriage return
//! never ends up inside a heading or list item.
//!
//! Everything else (links, code fences, tables, nested lists) passes through
//! untouched. The substitutions feed into each other, so [`format_response`]
//! is not idempotent and must run once per response.

use regex::Regex;
use std::sync::LazyLock;

const PARAGRAPH_OPEN: &str = r#"<p class="mb-4">"#;
const PARAGRAPH_CLOSE: &str = "</p>";
const PARAGRAPH_BREAK: &str = r#"</p><p class="mb-4">"#;
const LINE_BREAK: &str = "<br>";

struct Substitution {
    pattern: Regex,
    replacement: &'static str,
}

impl Substitution {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("valid formatter regex"),
            replacement,
        }
    }
}

static SUBSTITUTIONS: LazyLock<Vec<Substitution>> = LazyLock::new(|| {
    vec![
        Substitution::new(
            r"(?R)\*\*(.*?)\*\*",
            r#"<strong class="text-slate-800 font-bold">${1}</strong>"#,
        ),
        Substitution::new(
            r"(?R)\*(.*?)\*",
            r#"<em class="text-slate-700 italic">${1}</em>"#,
        ),
        Substitution::new(
            r"(?mR)#{3}\s*(.*?)$",
            r#"<h3 class="text-xl font-bold text-slate-800 mt-6 mb-3 border-b-2 border-blue-200 pb-2">${1}</h3>"#,
        ),
        Substitution::new(
            r"(?mR)#{2}\s*(.*?)$",
            r#"<h2 class="text-2xl font-bold text-slate-800 mt-8 mb-4 text-blue-700">${1}</h2>"#,
        ),
        Substitution::new(
            r"(?mR)#\s*(.*?)$",
            r#"<h1 class="text-3xl font-bold text-slate-800 mt-8 mb-6 text-purple-700">${1}</h1>"#,
        ),
        Substitution::new(
            r"(?mR)^\d+\.\s*(.*?)$",
            r#"<div class="flex items-start mb-3"><span class="inline-flex items-center justify-center w-6 h-6 bg-blue-100 text-blue-800 text-sm font-semibold rounded-full mr-3 mt-0.5 flex-shrink-0">•</span><span>${1}</span></div>"#,
        ),
        Substitution::new(
            r"(?mR)^-\s*(.*?)$",
            r#"<div class="flex items-start mb-2"><span class="text-purple-600 mr-3 mt-1">▸</span><span>${1}</span></div>"#,
        ),
    ]
});

pub fn format_response(text: &str) -> String {
    let mut out = text.to_string();
    for substitution in SUBSTITUTIONS.iter() {
        out = substitution
            .pattern
            .replace_all(&out, substitution.replacement)
            .into_owned();
    }

    let out = out.replace("\n\n", PARAGRAPH_BREAK).replace('\n', LINE_BREAK);
    format!("{PARAGRAPH_OPEN}{out}{PARAGRAPH_CLOSE}")
}
