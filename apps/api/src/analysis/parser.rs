//! Response parser — best-effort extraction of a JSON object from raw model
//! output.
//!
//! The model is instructed to return bare JSON but will still sometimes wrap
//! it in markdown fences or surround it with prose. This layer digs the object
//! out; what happens when it cannot is the caller's per-variant fallback
//! policy, not decided here.

use serde_json::Value;
use tracing::warn;

/// Extracts the first-`{`-to-last-`}` JSON object from `raw`.
///
/// Markdown code fences (```` ```json ```` or bare ```` ``` ````) are removed
/// as substrings wherever they occur. Returns `None` when no object can be
/// found or the candidate text is not valid JSON; never panics. Pure apart
/// from diagnostic logging.
pub fn extract_json(raw: &str) -> Option<Value> {
    let cleaned = raw.replace("```json", "").replace("```", "");
    let trimmed = cleaned.trim();

    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    if end < start {
        return None;
    }

    let candidate = &trimmed[start..=end];
    match serde_json::from_str(candidate) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Failed to parse model response as JSON: {e}; raw text: {raw}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_json_object() {
        let value = extract_json(r#"{"score": 80, "issues": []}"#).unwrap();
        assert_eq!(value, json!({"score": 80, "issues": []}));
    }

    #[test]
    fn test_fenced_json_with_language_tag() {
        let raw = "```json\n{\"score\": 80, \"issues\": []}\n```";
        let value = extract_json(raw).unwrap();
        assert_eq!(value, json!({"score": 80, "issues": []}));
    }

    #[test]
    fn test_fenced_json_without_language_tag() {
        let raw = "```\n{\"score\": 42}\n```";
        assert_eq!(extract_json(raw).unwrap(), json!({"score": 42}));
    }

    #[test]
    fn test_fences_match_unfenced_result() {
        let bare = r#"{"mistakes": [{"title": "Typos"}]}"#;
        let fenced = format!("```json\n{bare}\n```");
        assert_eq!(extract_json(bare), extract_json(&fenced));
    }

    #[test]
    fn test_fences_in_the_middle_are_removed() {
        // Fences are stripped as substrings, not just trimmed from the ends.
        let raw = "Sure!\n```json\n{\"score\": 7}\n```\nLet me know.";
        assert_eq!(extract_json(raw).unwrap(), json!({"score": 7}));
    }

    #[test]
    fn test_prose_around_object_is_ignored() {
        let raw = r#"Here is your result: {"cover_letter": "Dear..."}  Hope this helps!"#;
        let value = extract_json(raw).unwrap();
        assert_eq!(value, json!({"cover_letter": "Dear..."}));
    }

    #[test]
    fn test_no_braces_is_none() {
        assert!(extract_json("not json at all").is_none());
        assert!(extract_json("").is_none());
        assert!(extract_json("   \n  ").is_none());
    }

    #[test]
    fn test_only_open_brace_is_none() {
        assert!(extract_json("{\"truncated\": ").is_none());
    }

    #[test]
    fn test_close_before_open_is_none() {
        assert!(extract_json("} backwards {").is_none());
    }

    #[test]
    fn test_malformed_json_is_none() {
        assert!(extract_json(r#"{"score": 80,}"#).is_none());
        assert!(extract_json(r#"{"a": "unterminated}"#).is_none());
    }

    #[test]
    fn test_nested_objects_survive_first_to_last_slice() {
        let raw = r#"{"outer": {"inner": [1, 2, {"deep": true}]}}"#;
        let value = extract_json(raw).unwrap();
        assert_eq!(value["outer"]["inner"][2]["deep"], json!(true));
    }

    #[test]
    fn test_idempotent_on_same_input() {
        let raw = "```json\n{\"score\": 65}\n```";
        assert_eq!(extract_json(raw), extract_json(raw));
    }
}
