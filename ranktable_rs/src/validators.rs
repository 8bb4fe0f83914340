//! Predicates over primitive values.
//!
//! All functions are total: they never panic and have no side effects.

use serde_json::Value;

/// True when `value` is a finite number `>= 0`.
///
/// NaN and infinities are rejected. Used as the guard before any numeric
/// formatting.
pub fn is_positive_number(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// True when `value` is a JSON array with at least one element.
pub fn is_non_empty_collection(value: &Value) -> bool {
    value.as_array().is_some_and(|items| !items.is_empty())
}

/// True when `value` is a string with non-whitespace content.
pub fn is_non_empty_string(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.trim().is_empty())
}

/// Inclusive range check. NaN is never in range.
pub fn is_in_range(value: f64, min: f64, max: f64) -> bool {
    min <= value && value <= max
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn positive_number_accepts_zero_and_rejects_non_finite() {
        assert!(is_positive_number(0.0));
        assert!(is_positive_number(4.5));
        assert!(!is_positive_number(-0.1));
        assert!(!is_positive_number(f64::NAN));
        assert!(!is_positive_number(f64::INFINITY));
    }

    #[test]
    fn collection_requires_array_with_items() {
        assert!(is_non_empty_collection(&json!([null])));
        assert!(!is_non_empty_collection(&json!([])));
        assert!(!is_non_empty_collection(&json!({"a": 1})));
        assert!(!is_non_empty_collection(&Value::Null));
    }

    #[test]
    fn string_must_have_content_after_trim() {
        assert!(is_non_empty_string(Some("exclusive")));
        assert!(!is_non_empty_string(Some("   ")));
        assert!(!is_non_empty_string(None));
    }

    #[test]
    fn range_is_inclusive() {
        assert!(is_in_range(0.0, 0.0, 5.0));
        assert!(is_in_range(5.0, 0.0, 5.0));
        assert!(!is_in_range(5.01, 0.0, 5.0));
        assert!(!is_in_range(f64::NAN, 0.0, 5.0));
    }
}
