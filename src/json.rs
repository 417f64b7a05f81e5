//! JSON format predicates

use serde_json::Value;

/// Check whether text parses as a single JSON value
///
/// Accepts anything the JSON grammar calls a value, including bare
/// scalars (`"5"`, `"true"`, `"null"`). Surrounding whitespace is fine;
/// trailing content is not.
pub fn is_json(text: &str) -> bool {
    serde_json::from_str::<Value>(text).is_ok()
}

/// Check whether text parses as a JSON object (`{...}`)
pub fn is_json_object(text: &str) -> bool {
    matches!(serde_json::from_str::<Value>(text), Ok(Value::Object(_)))
}

/// Check whether text parses as a JSON array (`[...]`)
pub fn is_json_array(text: &str) -> bool {
    matches!(serde_json::from_str::<Value>(text), Ok(Value::Array(_)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_json_values() {
        assert!(is_json("{\"a\": 1}"));
        assert!(is_json("[1, 2, 3]"));
        assert!(is_json("\"text\""));
        assert!(is_json("5"));
        assert!(is_json("true"));
        assert!(is_json("null"));
    }

    #[test]
    fn test_invalid_json() {
        assert!(!is_json(""));
        assert!(!is_json("{broken"));
        assert!(!is_json("{'single': 'quotes'}"));
        assert!(!is_json("{} trailing"));
        assert!(!is_json("[1, 2,]"));
    }

    #[test]
    fn test_surrounding_whitespace_accepted() {
        assert!(is_json("  {\"a\": 1}  "));
        assert!(is_json("\n[1]\n"));
    }

    #[test]
    fn test_object_predicate() {
        assert!(is_json_object("{\"a\": 1}"));
        assert!(is_json_object("{}"));
        assert!(!is_json_object("[1]"));
        assert!(!is_json_object("5"));
        assert!(!is_json_object("{bad"));
    }

    #[test]
    fn test_array_predicate() {
        assert!(is_json_array("[1, {\"a\": 2}]"));
        assert!(is_json_array("[]"));
        assert!(!is_json_array("{}"));
        assert!(!is_json_array("\"[]\""));
    }
}
