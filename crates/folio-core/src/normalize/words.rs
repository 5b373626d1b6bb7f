/// Counts whitespace-delimited words. Absent or blank text counts as zero.
pub fn count_words(text: Option<&str>) -> usize {
    text.map(|t| t.split_whitespace().count()).unwrap_or(0)
}

/// Sum of [`count_words`] over several fields.
pub fn count_words_in<'a>(fields: impl IntoIterator<Item = Option<&'a str>>) -> usize {
    fields.into_iter().map(count_words).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_tokens() {
        assert_eq!(count_words(Some("one two  three")), 3);
        assert_eq!(count_words(Some("  leading\tand\ntrailing  ")), 3);
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(count_words(None), 0);
        assert_eq!(count_words(Some("")), 0);
        assert_eq!(count_words(Some("   \n ")), 0);
    }

    #[test]
    fn test_sum_over_fields() {
        assert_eq!(count_words_in([Some("a b"), None, Some("c")]), 3);
    }
}
