// Utility functions

/// Parses a decimal written with either a period or a comma separator.
/// Only the first comma is treated as the separator, so `1.234,56` is rejected.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let normalized = text.trim().replacen(',', ".", 1);
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_and_period_separators() {
        assert_eq!(parse_decimal("12,50"), Some(12.5));
        assert_eq!(parse_decimal("12.50"), Some(12.5));
        assert_eq!(parse_decimal(" 7 "), Some(7.0));
    }

    #[test]
    fn garbage_is_none() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("1.234,56"), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("inf"), None);
        assert_eq!(parse_decimal("infinity"), None);
        assert_eq!(parse_decimal("+inf"), None);
    }
}
