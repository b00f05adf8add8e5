//! Coordinate-pair matching.
//!
//! A pair is two decimal numbers separated by a comma, a newline and any
//! number of spaces, as found in array-literal map data:
//!
//! ```text
//! 43.435093,
//!       -9043.90345
//! ```
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::position::{Position, Span, span_to_positions};

/// Source text of the pair pattern. Group 1 is the first number, group 2 the second.
///
/// Each number is an optional minus sign, ASCII digits, a point, ASCII digits.
pub const PAIR_PATTERN: &str = r"(-?[0-9]+\.[0-9]+),\n *(-?[0-9]+\.[0-9]+)";

/// Replacement template: second number, comma, newline, first number.
pub const PAIR_REPLACEMENT: &str = "${2},\n${1}";

pub static PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(PAIR_PATTERN).unwrap_or_else(|_| panic!("Invalid regex pattern: {PAIR_PATTERN}"))
});

/// One matched coordinate pair in the document it was found in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoordinatePair {
    /// Whole match, from the first digit (or sign) of A to the last digit of B
    pub span: Span,
    /// First number as written
    pub first: String,
    /// Second number as written
    pub second: String,
}

/// Where a pair sits in its document, for reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairLocation {
    pub first: String,
    pub second: String,
    pub start: Position,
    /// Position just past the last digit of the second number
    pub end: Position,
}

impl CoordinatePair {
    fn from_captures(caps: &regex::Captures<'_>) -> Option<Self> {
        Some(CoordinatePair {
            span: caps.get(0)?.into(),
            first: caps.get(1)?.as_str().to_string(),
            second: caps.get(2)?.as_str().to_string(),
        })
    }

    /// Line/column location of this pair within `text`, the document it was found in
    pub fn locate(&self, text: &str) -> PairLocation {
        let (start, end) = span_to_positions(text, self.span);
        PairLocation {
            first: self.first.clone(),
            second: self.second.clone(),
            start,
            end,
        }
    }
}

impl std::fmt::Display for PairLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}-{}:{} {} <-> {}",
            self.start.line,
            self.start.column,
            self.end.line,
            self.end.column,
            self.first,
            self.second
        )
    }
}

/// Find every coordinate pair in `text`, left to right, non-overlapping.
pub fn find_pairs(text: &str) -> Vec<CoordinatePair> {
    PAIR_RE
        .captures_iter(text)
        .filter_map(|caps| CoordinatePair::from_captures(&caps))
        .collect()
}

/// First coordinate pair in `text`, wherever it starts.
pub fn find_first(text: &str) -> Option<CoordinatePair> {
    PAIR_RE
        .captures(text)
        .and_then(|caps| CoordinatePair::from_captures(&caps))
}

/// Coordinate pair starting at byte 0 of `text`, if any.
pub fn match_at_start(text: &str) -> Option<CoordinatePair> {
    find_first(text).filter(|pair| pair.span.byte_start == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_simple_pair() {
        let pairs = find_pairs("12.34,\n  -56.78");

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].first, "12.34");
        assert_eq!(pairs[0].second, "-56.78");
        assert_eq!(pairs[0].span, Span { byte_start: 0, byte_end: 15 });
    }

    #[test]
    fn test_find_embedded_pair() {
        let text = "oijf43.435093,\n-9043.90345jkkh";
        let pairs = find_pairs(text);

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].span.slice(text), "43.435093,\n-9043.90345");
    }

    #[test]
    fn test_rejects_malformed_numbers() {
        // no fractional part, no integer part, exponent, tab indentation
        assert!(find_pairs("12,\n34.5").is_empty());
        assert!(find_pairs(".5,\n34.5").is_empty());
        assert!(find_pairs("12.5,\n34.").is_empty());
        assert!(find_pairs("12.5,\n\t34.5").is_empty());
        assert!(find_pairs("12.5, 34.5").is_empty());
    }

    #[test]
    fn test_crlf_separator_is_not_a_pair() {
        assert!(find_pairs("12.5,\r\n34.5").is_empty());
        assert!(find_pairs("1.5,\r\n  2.5").is_empty());
    }

    #[test]
    fn test_exponent_is_not_part_of_number() {
        // A must be followed directly by the comma
        let pairs = find_pairs("1.5e3,\n2.0");
        assert!(pairs.is_empty());

        let pairs = find_pairs("1.5,\n2.0e3");
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].second, "2.0");
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        assert!(find_pairs("١٢.٣,\n4.5").is_empty());
    }

    #[test]
    fn test_pairs_are_non_overlapping() {
        // The middle number can only belong to the first pair
        let pairs = find_pairs("1.0,\n2.0,\n3.0");

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].first, "1.0");
        assert_eq!(pairs[0].second, "2.0");
    }

    #[test]
    fn test_match_at_start() {
        assert!(match_at_start("oijf43.435093,\n-9043.90345jkkh").is_none());
        assert!(find_first("oijf43.435093,\n-9043.90345jkkh").is_some());
        assert!(match_at_start("43.435093,\n-9043.90345jkkh").is_some());
    }

    #[test]
    fn test_locate_pair() {
        let text = "[\n  [\n    -122.4194,\n    37.7749\n  ]\n]";
        let pairs = find_pairs(text);
        let location = pairs[0].locate(text);

        assert_eq!(location.start, Position { line: 3, column: 5 });
        assert_eq!(location.end, Position { line: 4, column: 12 });
        assert_eq!(location.to_string(), "3:5-4:12 -122.4194 <-> 37.7749");
    }
}
