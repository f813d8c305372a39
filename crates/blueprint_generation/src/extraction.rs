//! Text and JSON-candidate extraction from backend replies.

use blueprint_core::{Completion, ContentFragment};
use blueprint_error::ParseError;
use regex::Regex;
use std::sync::LazyLock;

static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:json)?(.+?)```").expect("fenced block pattern is valid"));

/// Joins the textual fragments of a reply, in order, separated by newlines.
/// Non-textual fragments are skipped.
pub fn collect_text(completion: &Completion) -> String {
    completion
        .fragments()
        .iter()
        .filter_map(ContentFragment::as_text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Locates the JSON object embedded in `text`.
///
/// Rules, applied in order to the trimmed text:
/// 1. the interior of the first fenced block (optionally tagged `json`), else the whole text;
/// 2. if it does not start with `{`, drop everything before the first `{`;
/// 3. if it does not end with `}`, drop everything after the last `}`.
///
/// Two top-level JSON-like substrings will be merged into one invalid
/// candidate; that case surfaces later as a parse failure.
///
/// # Examples
///
/// ```
/// use blueprint_generation::extract_candidate;
///
/// let text = "Here is the result: {\"a\":1} Hope that helps!";
/// assert_eq!(extract_candidate(text).unwrap(), "{\"a\":1}");
/// assert!(extract_candidate("I cannot help with that.").is_err());
/// ```
pub fn extract_candidate(text: &str) -> Result<&str, ParseError> {
    let trimmed = text.trim();

    let mut candidate = match FENCED_BLOCK.captures(trimmed).and_then(|caps| caps.get(1)) {
        Some(block) => block.as_str().trim(),
        None => trimmed,
    };

    if !candidate.starts_with('{') {
        let start = candidate
            .find('{')
            .ok_or_else(|| ParseError::new("No JSON object found in reply"))?;
        candidate = &candidate[start..];
    }

    if !candidate.ends_with('}') {
        let end = candidate
            .rfind('}')
            .ok_or_else(|| ParseError::new("No closing brace found in reply"))?;
        candidate = &candidate[..=end];
    }

    Ok(candidate)
}
