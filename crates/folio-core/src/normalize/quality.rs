use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_QUALITY: f64 = 0.0;
pub const MAX_QUALITY: f64 = 10.0;

static SCORE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?|\.[0-9]+").expect("invalid score regex"));

/// Extracts a quality score in `[0, 10]` from freeform text.
///
/// Only digits and decimal points are considered; the first decimal number
/// wins, so "9/10" reads as 9 and "8.5 out of 10" as 8.5. Anything that does
/// not contain a number scores 0.
pub fn parse_quality_score(raw: Option<&str>) -> f64 {
    let Some(text) = raw else {
        return MIN_QUALITY;
    };

    SCORE_RE
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .map(|n| n.clamp(MIN_QUALITY, MAX_QUALITY))
        .unwrap_or(MIN_QUALITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_is_zero() {
        assert_eq!(parse_quality_score(None), 0.0);
        assert_eq!(parse_quality_score(Some("")), 0.0);
    }

    #[test]
    fn test_fraction_notation() {
        assert_eq!(parse_quality_score(Some("9/10")), 9.0);
        assert_eq!(parse_quality_score(Some("8.5 out of 10")), 8.5);
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_quality_score(Some("7")), 7.0);
        assert_eq!(parse_quality_score(Some("Score: 6.25")), 6.25);
        assert_eq!(parse_quality_score(Some(".5")), 0.5);
    }

    #[test]
    fn test_non_numeric_is_zero() {
        assert_eq!(parse_quality_score(Some("abc")), 0.0);
        assert_eq!(parse_quality_score(Some("...")), 0.0);
    }

    #[test]
    fn test_clamped_to_range() {
        assert_eq!(parse_quality_score(Some("42")), 10.0);
        assert_eq!(parse_quality_score(Some("-3")), 3.0);
        assert_eq!(parse_quality_score(Some("99999999999999999999")), 10.0);
    }

    #[test]
    fn test_always_within_bounds() {
        let inputs = [
            "", "0", "10", "10.0001", "1e9", "NaN", "inf", "∞", "١٢", "8/10 (was 6/10)",
            "   ", "3..4", "0000.0001",
        ];
        for input in inputs {
            let score = parse_quality_score(Some(input));
            assert!(
                (MIN_QUALITY..=MAX_QUALITY).contains(&score),
                "{input:?} -> {score}"
            );
        }
    }
}
