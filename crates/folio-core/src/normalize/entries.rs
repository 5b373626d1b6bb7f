use super::field::{normalize_field, value_to_text};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Separator between heading and body in the line form.
pub const ENTRY_SEPARATOR: &str = " - ";

/// One chapter of an outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterEntry {
    pub title: String,
    pub description: String,
}

/// One related verse of a scripture lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseEntry {
    pub reference: String,
    pub text: String,
}

/// Parses a chapters field.
///
/// JSON objects take `title` then `chapter_title` for the title and
/// `summary` then `description` for the description. Lines are split on the
/// first `" - "`.
pub fn parse_chapters(raw: Option<&str>) -> Vec<ChapterEntry> {
    parse_entries(raw, &["title", "chapter_title"], &["summary", "description"])
        .into_iter()
        .map(|(title, description)| ChapterEntry { title, description })
        .collect()
}

/// Parses a related-verses field with keys `reference` and `text`.
pub fn parse_related_verses(raw: Option<&str>) -> Vec<VerseEntry> {
    parse_entries(raw, &["reference"], &["text"])
        .into_iter()
        .map(|(reference, text)| VerseEntry { reference, text })
        .collect()
}

fn parse_entries(
    raw: Option<&str>,
    head_keys: &[&str],
    body_keys: &[&str],
) -> Vec<(String, String)> {
    let field = normalize_field(raw);

    if let Some(items) = field.as_list() {
        return items
            .iter()
            .map(|item| {
                let head = first_non_empty(item, head_keys).unwrap_or_else(|| value_to_text(item));
                let body = first_non_empty(item, body_keys).unwrap_or_default();
                (head, body)
            })
            .collect();
    }

    match field.as_text() {
        Some(text) => text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(split_line)
            .collect(),
        None => Vec::new(),
    }
}

fn first_non_empty(item: &Value, keys: &[&str]) -> Option<String> {
    let object = item.as_object()?;
    keys.iter().find_map(|key| match object.get(*key) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value_to_text(value)).filter(|s| !s.is_empty()),
    })
}

/// Splits at the first separator; later separators stay in the body.
fn split_line(line: &str) -> (String, String) {
    match line.split_once(ENTRY_SEPARATOR) {
        Some((head, body)) => (head.trim().to_string(), body.trim().to_string()),
        None => (line.trim().to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter(title: &str, description: &str) -> ChapterEntry {
        ChapterEntry {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_chapters_from_json_objects() {
        let parsed = parse_chapters(Some(r#"[{"title":"Ch1","summary":"Intro"}]"#));
        assert_eq!(parsed, vec![chapter("Ch1", "Intro")]);
    }

    #[test]
    fn test_chapters_fallback_keys() {
        let parsed = parse_chapters(Some(
            r#"[{"chapter_title":"Arrival","description":"Lena lands"},
                {"title":"","chapter_title":"Second","summary":"","description":"Fallback"}]"#,
        ));
        assert_eq!(
            parsed,
            vec![chapter("Arrival", "Lena lands"), chapter("Second", "Fallback")]
        );
    }

    #[test]
    fn test_chapters_element_without_keys_uses_string_form() {
        let parsed = parse_chapters(Some(r#"["Prologue - Before it all", 3]"#));
        assert_eq!(
            parsed,
            vec![chapter("Prologue - Before it all", ""), chapter("3", "")]
        );
    }

    #[test]
    fn test_chapters_from_lines_split_on_first_separator() {
        let parsed = parse_chapters(Some(
            "Chapter 1: Intro - Sets the scene\nChapter 2: Turn - Plans fail - badly",
        ));
        assert_eq!(
            parsed,
            vec![
                chapter("Chapter 1: Intro", "Sets the scene"),
                chapter("Chapter 2: Turn", "Plans fail - badly"),
            ]
        );
    }

    #[test]
    fn test_line_without_separator_is_kept() {
        let parsed = parse_chapters(Some("Epilogue\n\nChapter 9 - End"));
        assert_eq!(parsed, vec![chapter("Epilogue", ""), chapter("Chapter 9", "End")]);
    }

    #[test]
    fn test_hyphen_without_spaces_is_not_a_separator() {
        let parsed = parse_chapters(Some("Self-Doubt-Rising"));
        assert_eq!(parsed, vec![chapter("Self-Doubt-Rising", "")]);
    }

    #[test]
    fn test_absent_or_scalar_is_empty() {
        assert!(parse_chapters(None).is_empty());
        assert!(parse_chapters(Some("")).is_empty());
        assert!(parse_chapters(Some("12")).is_empty());
    }

    #[test]
    fn test_verses_from_lines() {
        let parsed = parse_related_verses(Some(
            "Romans 8:28 - \"And we know\"\r\nPsalm 23",
        ));
        assert_eq!(
            parsed,
            vec![
                VerseEntry {
                    reference: "Romans 8:28".into(),
                    text: "\"And we know\"".into(),
                },
                VerseEntry {
                    reference: "Psalm 23".into(),
                    text: String::new(),
                },
            ]
        );
    }

    #[test]
    fn test_verses_from_json() {
        let parsed = parse_related_verses(Some(
            r#"[{"reference":"John 3:16","text":"For God so loved"},{"reference":"Jude 1"}]"#,
        ));
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].reference, "John 3:16");
        assert_eq!(parsed[0].text, "For God so loved");
        assert_eq!(parsed[1].text, "");
    }

    #[test]
    fn test_order_is_preserved() {
        let parsed = parse_chapters(Some("C - 3\nA - 1\nB - 2"));
        let titles: Vec<_> = parsed.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
    }
}
