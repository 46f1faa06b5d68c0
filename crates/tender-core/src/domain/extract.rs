//! First-object JSON extraction from a free-text reply.
//!
//! Reasoning services wrap their JSON in prose or code fences more often
//! than not. The contract is a named, testable heuristic: take the first
//! balanced `{...}` substring, honoring string literals and escapes so a
//! brace inside a quoted reason does not end the object early.

/// Return the first balanced `{...}` substring of `text`, or `None` when
/// no opening brace exists or the braces never balance.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth: usize = 0;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_object_is_returned_whole() {
        let text = r#"{"action":"none","reason":"ok"}"#;
        assert_eq!(extract_json_object(text), Some(text));
    }

    #[test]
    fn object_is_found_inside_prose() {
        let text = "Sure! Here is my decision:\n{\"action\":\"pump\",\"command\":\"on\"}\nLet me know.";
        assert_eq!(
            extract_json_object(text),
            Some(r#"{"action":"pump","command":"on"}"#)
        );
    }

    #[test]
    fn code_fences_are_skipped_over() {
        let text = "```json\n{\"action\":\"servo\",\"command\":\"open\"}\n```";
        assert_eq!(
            extract_json_object(text),
            Some(r#"{"action":"servo","command":"open"}"#)
        );
    }

    #[test]
    fn nested_objects_stay_balanced() {
        let text = r#"prefix {"a":{"b":1},"c":2} suffix {"d":3}"#;
        assert_eq!(extract_json_object(text), Some(r#"{"a":{"b":1},"c":2}"#));
    }

    #[test]
    fn braces_inside_strings_do_not_close_the_object() {
        let text = r#"{"reason":"risk of {overflow}", "action":"none"}"#;
        assert_eq!(extract_json_object(text), Some(text));
    }

    #[test]
    fn escaped_quote_does_not_end_the_string() {
        let text = r#"{"reason":"said \"open\" twice","action":"none"}"#;
        assert_eq!(extract_json_object(text), Some(text));
    }

    #[test]
    fn no_brace_means_no_candidate() {
        assert_eq!(extract_json_object("all conditions optimal"), None);
    }

    #[test]
    fn unbalanced_braces_mean_no_candidate() {
        assert_eq!(extract_json_object(r#"{"action":"pump""#), None);
    }

    #[test]
    fn empty_input_means_no_candidate() {
        assert_eq!(extract_json_object(""), None);
    }
}
