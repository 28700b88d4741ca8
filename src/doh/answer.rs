//! Answer section extraction.
//!
//! Parsing is permissive on purpose: an unexpected body shape yields an empty
//! answer list instead of an error, which the resolvers treat as "no record".

use serde_json::Value;

/// Parses a DoH JSON body and returns the answer data strings.
///
/// A body that is not JSON at all is treated like a response without an
/// `Answer` section.
pub fn parse_answers(body: &[u8]) -> Vec<String> {
    match serde_json::from_slice::<Value>(body) {
        Ok(json) => answer_data(&json),
        Err(e) => {
            log::debug!("Ignoring non-JSON DoH response body: {e}");
            Vec::new()
        }
    }
}

/// Extracts `Answer[].data` from an already decoded response.
///
/// Missing or non-array `Answer` gives an empty list. Answers without a string
/// `data` field, or with an empty one, are dropped.
pub fn answer_data(json: &Value) -> Vec<String> {
    json.get("Answer")
        .and_then(Value::as_array)
        .map(|answers| {
            answers
                .iter()
                .filter_map(|answer| answer.get("data").and_then(Value::as_str))
                .filter(|data| !data.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_answer_data_extracts_in_order() {
        let body = json!({
            "Status": 0,
            "Answer": [
                {"name": "example.com", "type": 2, "TTL": 300, "data": "ns1.example.com."},
                {"name": "example.com", "type": 2, "TTL": 300, "data": "ns2.example.com."}
            ]
        });
        assert_eq!(
            answer_data(&body),
            vec!["ns1.example.com.".to_string(), "ns2.example.com.".to_string()]
        );
    }

    #[test]
    fn test_answer_data_missing_answer_section() {
        let body = json!({"Status": 3, "Authority": [{"data": "a.iana-servers.net."}]});
        assert!(answer_data(&body).is_empty());
    }

    #[test]
    fn test_answer_data_non_array_answer() {
        assert!(answer_data(&json!({"Answer": "nope"})).is_empty());
        assert!(answer_data(&json!({"Answer": null})).is_empty());
        assert!(answer_data(&json!([1, 2, 3])).is_empty());
    }

    #[test]
    fn test_answer_data_drops_falsy_entries() {
        let body = json!({
            "Answer": [
                {"data": ""},
                {"type": 1},
                {"data": null},
                {"data": 42},
                "garbage",
                {"data": "93.184.216.34"}
            ]
        });
        assert_eq!(answer_data(&body), vec!["93.184.216.34".to_string()]);
    }

    #[test]
    fn test_parse_answers_invalid_json_is_empty() {
        assert!(parse_answers(b"<html>502 Bad Gateway</html>").is_empty());
        assert!(parse_answers(b"").is_empty());
    }

    #[test]
    fn test_parse_answers_valid_body() {
        let body = br#"{"Answer":[{"data":"example.org."}]}"#;
        assert_eq!(parse_answers(body), vec!["example.org.".to_string()]);
    }
}
