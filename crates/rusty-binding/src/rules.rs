// File: src/rules.rs
// Purpose: Primitive rule checks shared by validators

/// Non-blank check used by "required" rules: whitespace-only counts as absent
pub fn has_text(value: Option<&str>) -> bool {
    value.map(|s| !s.trim().is_empty()).unwrap_or(false)
}

/// Value is present and within `[min, max]` inclusive
pub fn in_range<T: PartialOrd>(value: Option<T>, min: T, max: T) -> bool {
    match value {
        Some(v) => v >= min && v <= max,
        None => false,
    }
}

/// Value is present and strictly below `bound`
pub fn below<T: PartialOrd>(value: Option<T>, bound: T) -> bool {
    match value {
        Some(v) => v < bound,
        None => false,
    }
}

/// Product of two optional integers, computed without overflow.
///
/// `None` unless both are present.
pub fn product(a: Option<i32>, b: Option<i32>) -> Option<i64> {
    Some(i64::from(a?) * i64::from(b?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_has_text() {
        assert!(has_text(Some("a")));
        assert!(has_text(Some(" a ")));
        assert!(!has_text(Some("")));
        assert!(!has_text(Some(" \t\n")));
        assert!(!has_text(None));
    }

    #[rstest]
    #[case(Some(5), true)]
    #[case(Some(1), true)]
    #[case(Some(10), true)]
    #[case(Some(0), false)]
    #[case(Some(11), false)]
    #[case(None, false)]
    fn test_in_range(#[case] value: Option<i32>, #[case] expected: bool) {
        assert_eq!(in_range(value, 1, 10), expected);
    }

    #[test]
    fn test_below() {
        assert!(below(Some(9998), 9999));
        assert!(!below(Some(9999), 9999));
        assert!(!below(None, 9999));

        assert!(below(Some(99.9), 100.0));
        assert!(!below(Some(100.1), 100.0));
    }

    #[test]
    fn test_product() {
        assert_eq!(product(Some(1_000_000), Some(9999)), Some(9_999_000_000));
        assert_eq!(product(Some(500), None), None);
        assert_eq!(product(None, None), None);
    }
}
