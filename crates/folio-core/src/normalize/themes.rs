use super::field::{NormalizedField, normalize_field, value_to_text};

/// Parses a themes field into an ordered list of theme names.
///
/// Accepts a JSON array (each element stringified) or a comma/newline
/// separated string. Any other shape yields an empty list.
pub fn parse_themes(raw: Option<&str>) -> Vec<String> {
    let field = normalize_field(raw);

    if let Some(items) = field.as_list() {
        return items.iter().map(value_to_text).collect();
    }

    match field.as_text() {
        Some(text) => split_themes(text),
        None => {
            if !matches!(field, NormalizedField::Absent) {
                tracing::debug!("[Normalize] Ignoring themes field with unsupported shape");
            }
            Vec::new()
        }
    }
}

fn split_themes(text: &str) -> Vec<String> {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
