use regex::Regex;
use std::sync::LazyLock;

pub const REASONING_OPEN: &str = "<think>";
pub const REASONING_CLOSE: &str = "</think>";

static REASONING_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<think>.*?</think>").expect("valid reasoning regex"));

/// Drop model reasoning from a completion before it is shown.
///
/// When a closing tag is present only the text between the first and the
/// second closing tag is kept. A single paired block left in it is then
/// removed.
pub fn strip_reasoning(content: &str) -> String {
    let after_close = match content.split_once(REASONING_CLOSE) {
        Some((_, rest)) => rest
            .split(REASONING_CLOSE)
            .next()
            .unwrap_or_default()
            .trim(),
        None => content,
    };

    REASONING_BLOCK
        .replacen(after_close, 1, "")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_reasoning_block_is_removed() {
        assert_eq!(strip_reasoning("<think>ignored</think>KEEP"), "KEEP");
    }

    #[test]
    fn untagged_text_is_only_trimmed() {
        assert_eq!(strip_reasoning("  # Idea\n\nBody  \n"), "# Idea\n\nBody");
    }

    #[test]
    fn stray_close_tag_discards_everything_before_it() {
        assert_eq!(
            strip_reasoning("planning the answer...\n</think>\n\nFinal answer"),
            "Final answer"
        );
    }

    #[test]
    fn multiline_reasoning_is_removed() {
        let raw = "<think>\nline one\nline two\n</think>\n\n**AstroChat**";
        assert_eq!(strip_reasoning(raw), "**AstroChat**");
    }

    #[test]
    fn text_after_second_close_tag_is_dropped() {
        assert_eq!(strip_reasoning("<think>a</think>B</think>C"), "B");

        let raw = "<think>a</think>Intro <think>b</think> outro <think>c</think> end";
        assert_eq!(strip_reasoning(raw), "Intro <think>b");
    }

    #[test]
    fn segment_ends_at_the_next_close_tag() {
        let raw = "plan</think> Intro <think>x</think> mid </think>rest";
        assert_eq!(strip_reasoning(raw), "Intro <think>x");
    }

    #[test]
    fn unclosed_open_tag_is_left_alone() {
        assert_eq!(strip_reasoning("<think>never closed"), "<think>never closed");
    }
}
