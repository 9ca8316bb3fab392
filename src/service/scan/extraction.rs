//! Two-stage verdict extraction from free-text model output
//!
//! The model is not trusted to emit only JSON; it routinely wraps the verdict
//! object in prose or markdown fences. Stage one locates the first balanced
//! `{...}` substring, stage two strict-decodes it against the verdict schema.
//! Each stage is independently testable and replaceable.

use crate::model::Verdict;

/// Locate the first balanced `{...}` object substring in free text
///
/// Brace depth is tracked with JSON string and escape awareness, so braces
/// inside string values do not terminate the candidate early. If the earliest
/// `{` never balances, later open braces are tried in order.
pub fn extract_json_candidate(text: &str) -> Option<&str> {
    for (start, _) in text.char_indices().filter(|&(_, c)| c == '{') {
        if let Some(len) = balanced_object_len(&text[start..]) {
            return Some(&text[start..start + len]);
        }
    }
    None
}

/// Length of the balanced object starting at the first byte of `s`, which
/// must be `{`; `None` if the object never closes.
fn balanced_object_len(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + c.len_utf8());
                }
            }
            _ => {}
        }
    }

    None
}

/// Strict-decode a candidate substring against the verdict schema
///
/// Unknown extra fields are ignored; a missing field or an unrecognized enum
/// value fails the decode and sends the caller to the parse fallback.
pub fn decode_verdict(candidate: &str) -> Option<Verdict> {
    serde_json::from_str(candidate).ok()
}
