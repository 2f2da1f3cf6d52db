//! Best-effort recovery of a JSON object from free-form model output.
//!
//! Completions are asked to reply with bare JSON but routinely wrap it in
//! prose or markdown fences, or get cut off by the token budget. Nothing here
//! fails loudly: when no object can be recovered the caller gets `None`.

use serde::de::DeserializeOwned;
use tracing::debug;

/// The span from the first `{` to the last `}` in `text`, inclusive.
pub fn widest_brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Every top-level brace-balanced span in `text`, in order of appearance.
///
/// Braces inside JSON string literals are ignored, including after escaped
/// quotes. A span still open at the end of the text is dropped.
pub fn balanced_objects(text: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, ch) in text.char_indices() {
        if depth > 0 && in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '{' => {
                if depth == 0 {
                    start = i;
                }
                depth += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    spans.push(&text[start..=i]);
                }
            }
            '"' if depth > 0 => in_string = true,
            _ => {}
        }
    }

    spans
}

/// Recover a `T` from `text`.
///
/// The widest brace span is tried first. If it does not parse (several
/// objects, trailing junk after a stray `}`), each balanced span is tried in
/// order and the first that parses wins.
pub fn extract_json<T: DeserializeOwned>(text: &str) -> Option<T> {
    if let Some(span) = widest_brace_span(text) {
        match serde_json::from_str(span) {
            Ok(value) => return Some(value),
            Err(e) => debug!("Widest brace span did not parse: {}", e),
        }
    }

    balanced_objects(text)
        .into_iter()
        .find_map(|span| serde_json::from_str(span).ok())
}
