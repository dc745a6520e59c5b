//! Fenced code block extraction from reply text.

use std::sync::OnceLock;

use regex::Regex;

/// Matches one triple-backtick fence: optional language tag, newline, body.
/// Non-greedy so adjacent fences stay separate blocks.
const FENCE_PATTERN: &str = r"(?s)```([A-Za-z0-9_+-]*)\r?\n(.*?)```";

static FENCE_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn fence_re() -> Option<&'static Regex> {
    FENCE_RE.get_or_init(|| Regex::new(FENCE_PATTERN).ok()).as_ref()
}

/// One fenced code block lifted out of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Language tag from the opening fence, if any
    pub language: Option<String>,
    /// Body between the fences, as written
    pub code: String,
}

impl CodeBlock {
    /// First non-empty line of the body, for list previews.
    pub fn preview(&self) -> &str {
        self.code
            .lines()
            .find(|line| !line.trim().is_empty())
            .unwrap_or("")
    }
}

/// Collects every complete fenced block in `text`, in order of appearance.
///
/// An opening fence without a closing one yields nothing. Text outside the
/// fences is ignored.
pub fn extract_code_blocks(text: &str) -> Vec<CodeBlock> {
    let Some(re) = fence_re() else {
        return Vec::new();
    };
    re.captures_iter(text)
        .map(|caps| CodeBlock {
            language: caps
                .get(1)
                .map(|m| m.as_str())
                .filter(|tag| !tag.is_empty())
                .map(str::to_string),
            code: caps
                .get(2)
                .map(|m| m.as_str())
                .unwrap_or_default()
                .to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("```python\nprint(1)\n```", Some("python"), "print(1)\n")]
    #[case("```\nls -la\n```", None, "ls -la\n")]
    #[case("before\n```rust\nfn main() {}\n```\nafter", Some("rust"), "fn main() {}\n")]
    fn extracts_one_block(#[case] text: &str, #[case] language: Option<&str>, #[case] code: &str) {
        let blocks = extract_code_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].language.as_deref(), language);
        assert_eq!(blocks[0].code, code);
    }

    #[test]
    fn keeps_blocks_in_order() {
        let text = "first:\n```python\na = 1\n```\nthen:\n```sh\necho hi\n```\n";
        let blocks = extract_code_blocks(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].language.as_deref(), Some("python"));
        assert_eq!(blocks[1].language.as_deref(), Some("sh"));
        assert_eq!(blocks[1].code, "echo hi\n");
    }

    #[test]
    fn plain_text_has_no_blocks() {
        assert!(extract_code_blocks("no fences here").is_empty());
    }

    #[test]
    fn unterminated_fence_is_ignored() {
        assert!(extract_code_blocks("```python\nprint(1)").is_empty());
    }

    #[test]
    fn multiline_bodies_survive_intact() {
        let text = "```python\ndef greet(name):\n    print(name)\n\ngreet('cat')\n```";
        let blocks = extract_code_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].code, "def greet(name):\n    print(name)\n\ngreet('cat')\n");
    }

    #[test]
    fn crlf_fences_are_accepted() {
        let blocks = extract_code_blocks("```python\r\nprint(1)\n```");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].language.as_deref(), Some("python"));
    }

    #[test]
    fn preview_skips_blank_lines() {
        let block = CodeBlock {
            language: None,
            code: "\n\n  x = 1\n".to_string(),
        };
        assert_eq!(block.preview(), "  x = 1");
    }
}
