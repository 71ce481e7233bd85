//! Predicate evaluation of descriptors against cell text.

use super::descriptor::FilterDescriptor;

impl FilterDescriptor {
    /// Returns true if the cell satisfies this descriptor.
    ///
    /// Evaluation never fails: a cell that cannot be read the way the
    /// descriptor needs it - a non-numeric cell under `#range:`, say -
    /// simply does not match.
    pub fn matches(&self, cell: &str) -> bool {
        match self {
            FilterDescriptor::Always => true,
            FilterDescriptor::Substring(needle) | FilterDescriptor::Contains(needle) => {
                cell.to_lowercase().contains(needle)
            }
            FilterDescriptor::StartsWith(needle) => cell.to_lowercase().starts_with(needle),
            FilterDescriptor::EndsWith(needle) => cell.to_lowercase().ends_with(needle),
            FilterDescriptor::Equals(needle) => cell.to_lowercase() == *needle,
            FilterDescriptor::Not(needle) => !cell.to_lowercase().contains(needle),
            FilterDescriptor::Range { low, high } => {
                in_range(cell, *low, *high).unwrap_or(false)
            }
            FilterDescriptor::NotRange { low, high } => {
                in_range(cell, *low, *high).is_some_and(|inside| !inside)
            }
            FilterDescriptor::Regex(pattern) => pattern.is_match(cell),
            FilterDescriptor::InSet(values) => {
                let cell = cell.trim().to_lowercase();
                values.iter().any(|v| *v == cell)
            }
        }
    }
}

/// Parses the cell as a number and tests it against the normalized
/// interval. `None` when the cell is not numeric.
fn in_range(cell: &str, low: f64, high: f64) -> Option<bool> {
    let value: f64 = cell.trim().parse().ok()?;
    let (lo, hi) = if low <= high { (low, high) } else { (high, low) };
    Some(value >= lo && value <= hi)
}

#[cfg(test)]
mod tests {
    use super::super::FilterParser;
    use super::*;

    #[test]
    fn test_always_matches_everything() {
        assert!(FilterDescriptor::Always.matches(""));
        assert!(FilterDescriptor::Always.matches("anything"));
        assert!(FilterDescriptor::Always.matches("42"));
    }

    #[test]
    fn test_substring_case_insensitive() {
        let descriptor = FilterDescriptor::substring("App");
        assert!(descriptor.matches("Apple"));
        assert!(descriptor.matches("pineapple"));
        assert!(!descriptor.matches("orange"));
    }

    #[test]
    fn test_equals_case_insensitive() {
        let descriptor = FilterParser::parse("#equals: apple");
        assert!(descriptor.matches("Apple"));
        assert!(descriptor.matches("APPLE"));
        assert!(!descriptor.matches("Appl"));
        assert!(!descriptor.matches("apples"));
    }

    #[test]
    fn test_starts_with() {
        let descriptor = FilterParser::parse("#startswith: app");
        assert!(descriptor.matches("Apple"));
        assert!(!descriptor.matches("pineapple"));
    }

    #[test]
    fn test_ends_with() {
        let descriptor = FilterParser::parse("#endswith: ple");
        assert!(descriptor.matches("Apple"));
        assert!(descriptor.matches("pineapple"));
        assert!(!descriptor.matches("plenty"));
    }

    #[test]
    fn test_contains() {
        let descriptor = FilterParser::parse("#contains: neap");
        assert!(descriptor.matches("Pineapple"));
        assert!(!descriptor.matches("Apple"));
    }

    #[test]
    fn test_not_excludes_matches() {
        let descriptor = FilterParser::parse("#not: baz");
        assert!(descriptor.matches("foo bar"));
        assert!(!descriptor.matches("foo baz"));
        assert!(!descriptor.matches("BAZAAR"));
    }

    #[test]
    fn test_range_inclusive() {
        let descriptor = FilterParser::parse("#range: 10,50");
        assert!(descriptor.matches("42"));
        assert!(descriptor.matches("10"));
        assert!(descriptor.matches("50"));
        assert!(!descriptor.matches("9.99"));
        assert!(!descriptor.matches("50.01"));
    }

    #[test]
    fn test_range_non_numeric_cell_does_not_match() {
        let descriptor = FilterParser::parse("#range: 10,50");
        assert!(!descriptor.matches("abc"));
        assert!(!descriptor.matches(""));
    }

    #[test]
    fn test_range_normalizes_reversed_bounds() {
        let descriptor = FilterParser::parse("#range: 50,10");
        assert!(descriptor.matches("42"));
        assert!(!descriptor.matches("5"));
    }

    #[test]
    fn test_range_accepts_signs_decimals_and_whitespace() {
        let descriptor = FilterParser::parse("#range: -1.5, 2.5");
        assert!(descriptor.matches("-1.5"));
        assert!(descriptor.matches("0"));
        assert!(descriptor.matches(" 2.5 "));
        assert!(!descriptor.matches("-2"));
    }

    #[test]
    fn test_notrange_complements_range() {
        let descriptor = FilterParser::parse("#notrange: 10,50");
        assert!(descriptor.matches("9"));
        assert!(descriptor.matches("51"));
        assert!(!descriptor.matches("30"));
        // Non-numeric cells do not match either way.
        assert!(!descriptor.matches("abc"));
    }

    #[test]
    fn test_regex_search_semantics() {
        let descriptor = FilterParser::parse("#regex: a.c");
        assert!(descriptor.matches("xxabcxx"));
        assert!(descriptor.matches("A-C"));
        assert!(!descriptor.matches("ac"));
    }

    #[test]
    fn test_regex_case_insensitive() {
        let descriptor = FilterParser::parse("#regex: ^apple$");
        assert!(descriptor.matches("Apple"));
        assert!(descriptor.matches("APPLE"));
        assert!(!descriptor.matches("apples"));
    }

    #[test]
    fn test_in_set_trims_and_ignores_case() {
        let descriptor = FilterParser::parse("#in: a, b");
        assert!(descriptor.matches("A"));
        assert!(descriptor.matches(" a "));
        assert!(descriptor.matches("b"));
        assert!(!descriptor.matches("c"));
        assert!(!descriptor.matches("ab"));
    }

    #[test]
    fn test_in_set_of_discarded_empties_matches_nothing() {
        let descriptor = FilterParser::parse("#in: ,,");
        assert!(!descriptor.matches(""));
        assert!(!descriptor.matches("a"));
    }

    #[test]
    fn test_substring_fallback_matches_raw_text() {
        // An unknown command degrades to searching for the raw text itself.
        let descriptor = FilterParser::parse("#frobnicate: x");
        assert!(descriptor.matches("see #frobnicate: x here"));
        assert!(!descriptor.matches("ordinary cell"));
    }
}
