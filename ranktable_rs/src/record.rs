//! Untrusted bookmaker records.
//!
//! A record arrives as arbitrary JSON. [`BookmakerRecord::from_value`] is the
//! only place fields are inspected: mistyped or out-of-range values are logged
//! and replaced by their defaults, so nothing downstream validates again.

use serde_json::{Map, Value};
use tracing::warn;

use crate::config::RenderConfig;
use crate::error::RowError;
use crate::stars::MAX_RATING;
use crate::validators::{is_in_range, is_positive_number};

/// A validated record. `None` means "absent"; the accessor methods apply the
/// display defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookmakerRecord {
    pub id: Option<String>,
    pub logo: Option<String>,
    /// Always within `[0, 5]`
    pub rating: f64,
    /// Always `>= 0`
    pub review_count: f64,
    /// Present only when strictly positive
    pub bonus_amount: Option<f64>,
    pub badge: Option<String>,
    pub internal_link: Option<String>,
    pub external_link: Option<String>,
}

/// Shown in place of a missing identifier
pub const UNKNOWN_OPERATOR: &str = "Неизвестный";
/// Fallback target for missing links
pub const PLACEHOLDER_HREF: &str = "#";

impl BookmakerRecord {
    /// Parse and validate one record.
    pub fn from_value(value: &Value, config: &RenderConfig) -> Result<Self, RowError> {
        let Value::Object(fields) = value else {
            return Err(RowError::Malformed {
                kind: json_kind(value),
            });
        };

        let rating = match number_field(fields, "rating") {
            Some(r) if is_positive_number(r) && is_in_range(r, 0.0, MAX_RATING) => r,
            Some(r) => {
                warn!(rating = r, "rating out of range, using default");
                config.default_rating
            }
            None => config.default_rating,
        };

        let review_count = match number_field(fields, "review_count") {
            Some(n) if is_positive_number(n) => n,
            Some(n) => {
                warn!(review_count = n, "negative review count, using 0");
                0.0
            }
            None => 0.0,
        };

        let bonus_amount = number_field(fields, "bonus_amount")
            .filter(|amount| is_positive_number(*amount) && *amount > 0.0);

        Ok(Self {
            id: id_field(fields),
            logo: string_field(fields, "logo"),
            rating,
            review_count,
            bonus_amount,
            badge: string_field(fields, "badge"),
            internal_link: string_field(fields, "internal_link"),
            external_link: string_field(fields, "external_link"),
        })
    }

    /// Identifier for display, or [`UNKNOWN_OPERATOR`].
    pub fn display_id(&self) -> &str {
        self.id.as_deref().unwrap_or(UNKNOWN_OPERATOR)
    }

    /// Logo URL, empty when absent.
    pub fn logo_url(&self) -> &str {
        self.logo.as_deref().unwrap_or("")
    }

    pub fn details_href(&self) -> &str {
        self.internal_link.as_deref().unwrap_or(PLACEHOLDER_HREF)
    }

    pub fn site_href(&self) -> &str {
        self.external_link.as_deref().unwrap_or(PLACEHOLDER_HREF)
    }

    pub fn has_bonus(&self) -> bool {
        self.bonus_amount.is_some()
    }
}

/// JSON type name, for diagnostics.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn number_field(fields: &Map<String, Value>, key: &str) -> Option<f64> {
    match fields.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => n.as_f64(),
        Some(other) => {
            warn!(field = key, found = json_kind(other), "ignoring non-numeric field");
            None
        }
    }
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            warn!(field = key, found = json_kind(other), "ignoring non-string field");
            None
        }
    }
}

// Numeric ids are common in exported data; print them as-is.
fn id_field(fields: &Map<String, Value>) -> Option<String> {
    match fields.get("id") {
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => string_field(fields, "id"),
    }
}
