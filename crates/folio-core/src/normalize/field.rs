use serde_json::Value;

/// A raw agent field after a best-effort JSON decode.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedField {
    /// Missing or empty.
    Absent,
    /// The text was valid JSON.
    Json(Value),
    /// Not JSON; the input text unchanged.
    Text(String),
}

impl NormalizedField {
    /// The field as plain text, if it is text or a JSON string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            NormalizedField::Text(s) => Some(s),
            NormalizedField::Json(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// The field as a list of JSON values, if it decoded to an array.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            NormalizedField::Json(Value::Array(items)) => Some(items),
            _ => None,
        }
    }
}

/// Decodes `raw` as JSON when possible, otherwise keeps the text.
///
/// Agent output has no fixed format, so a parse failure is not an error.
pub fn normalize_field(raw: Option<&str>) -> NormalizedField {
    match raw {
        None | Some("") => NormalizedField::Absent,
        Some(text) => match serde_json::from_str::<Value>(text) {
            Ok(value) => NormalizedField::Json(value),
            Err(_) => NormalizedField::Text(text.to_string()),
        },
    }
}

/// String form of a JSON value: strings unquoted, everything else as JSON.
pub(crate) fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_inputs() {
        assert_eq!(normalize_field(None), NormalizedField::Absent);
        assert_eq!(normalize_field(Some("")), NormalizedField::Absent);
    }

    #[test]
    fn test_json_is_decoded() {
        assert_eq!(
            normalize_field(Some(r#"["a", "b"]"#)),
            NormalizedField::Json(json!(["a", "b"]))
        );
        assert_eq!(normalize_field(Some("42")), NormalizedField::Json(json!(42)));
    }

    #[test]
    fn test_freeform_text_is_kept() {
        let field = normalize_field(Some("Hope, Identity"));
        assert_eq!(field, NormalizedField::Text("Hope, Identity".to_string()));
        assert_eq!(field.as_text(), Some("Hope, Identity"));
    }

    #[test]
    fn test_json_string_reads_as_text() {
        let field = normalize_field(Some(r#""Faith, Doubt""#));
        assert_eq!(field.as_text(), Some("Faith, Doubt"));
        assert!(field.as_list().is_none());
    }
}
