//! Fixed-arity pair combinator with delimiter disambiguation.
//!
//! [`TupleCodec`] formats a pair as `A<separator>B`. The parse side has to find
//! the one split point the format side would have produced even though the
//! delimiter character may also occur inside a component (a comma as a digit
//! group separator, a hyphen in a negative number). It scans left to right over
//! a set of candidate delimiter literals
//! and accepts the first occurrence whose two sides are structurally plausible
//! and actually parse. No regex engine, no global state.
//!
//! ## Examples
//!
//! ```rust
//! use numform::{Codec, NumberCodec, ParseableCodec, TupleCodec};
//!
//! let pair = TupleCodec::new(NumberCodec::<i32>::new(), NumberCodec::<i32>::new(), ", ");
//! assert_eq!(pair.format(&(1, 2)), "1, 2");
//! assert_eq!(pair.parse("1,2").unwrap(), (1, 2));
//! assert_eq!(pair.parse("1 , 2").unwrap(), (1, 2));
//! assert!(pair.parse("1,").is_err());
//! assert!(pair.parse(",1").is_err());
//! ```

use crate::{Codec, Error, ParseableCodec, Result};

fn is_horizontal_ws(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Formats and parses a fixed 2-tuple.
///
/// Parsing tries each configured delimiter candidate at each position, left to
/// right; candidates default to the trimmed format separator. In the default
/// mode, horizontal whitespace around the delimiter is absorbed into it, so
/// `"1 , 2"` splits into `"1"` and `"2"`. In
/// [`disallowing_whitespace`](TupleCodec::disallowing_whitespace) mode the
/// characters adjacent to the delimiter must be non-whitespace, which keeps
/// component-internal whitespace from being mistaken for the separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TupleCodec<A, B> {
    first: A,
    second: B,
    separator: String,
    delimiters: Vec<String>,
    disallow_whitespace: bool,
}

impl<A, B> TupleCodec<A, B> {
    /// Creates a tuple codec. The parse delimiter set defaults to the trimmed
    /// `separator` (or `separator` itself if trimming would leave it empty).
    #[must_use]
    pub fn new(first: A, second: B, separator: &str) -> Self {
        let trimmed = separator.trim();
        let delimiter = if trimmed.is_empty() {
            separator.to_string()
        } else {
            trimmed.to_string()
        };
        TupleCodec {
            first,
            second,
            separator: separator.to_string(),
            delimiters: vec![delimiter],
            disallow_whitespace: false,
        }
    }

    /// Replaces the format separator and resets the parse delimiter set to its
    /// trimmed form, as [`new`](TupleCodec::new) does.
    #[must_use]
    pub fn with_separator(mut self, separator: &str) -> Self {
        let trimmed = separator.trim();
        self.delimiters = vec![if trimmed.is_empty() {
            separator.to_string()
        } else {
            trimmed.to_string()
        }];
        self.separator = separator.to_string();
        self
    }

    /// Replaces the parse delimiter candidates. Order matters: at each scan
    /// position the first matching candidate wins.
    #[must_use]
    pub fn with_delimiters<I, S>(mut self, delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.delimiters = delimiters.into_iter().map(Into::into).collect();
        self
    }

    /// Requires the delimiter to touch non-whitespace on both sides.
    #[must_use]
    pub fn disallowing_whitespace(mut self) -> Self {
        self.disallow_whitespace = true;
        self
    }

    /// Candidate split points in scan order.
    fn splits<'a>(&self, input: &'a str) -> Vec<(&'a str, &'a str)> {
        let mut found = Vec::new();
        for (at, _) in input.char_indices() {
            for delimiter in &self.delimiters {
                if !input[at..].starts_with(delimiter.as_str()) {
                    continue;
                }
                let left = &input[..at];
                let right = &input[at + delimiter.len()..];
                if self.disallow_whitespace {
                    let left_ok = left.chars().next_back().is_some_and(|c| !is_horizontal_ws(c));
                    let right_ok = right.chars().next().is_some_and(|c| !is_horizontal_ws(c));
                    if left_ok && right_ok {
                        found.push((left, right));
                    }
                } else {
                    let left = left.trim_end_matches(is_horizontal_ws);
                    let right = right.trim_start_matches(is_horizontal_ws);
                    if !left.is_empty() && !right.is_empty() {
                        found.push((left, right));
                    }
                }
            }
        }
        found
    }
}

impl<A: Codec, B: Codec> Codec for TupleCodec<A, B> {
    type Value = (A::Value, B::Value);

    fn format(&self, value: &Self::Value) -> String {
        format!(
            "{}{}{}",
            self.first.format(&value.0),
            self.separator,
            self.second.format(&value.1),
        )
    }
}

impl<A: ParseableCodec, B: ParseableCodec> ParseableCodec for TupleCodec<A, B> {
    /// Accepts the first candidate split whose both sides parse.
    ///
    /// When a structurally valid split's component parse fails, scanning
    /// continues with the next candidate; this is what lets a nested value
    /// contain the delimiter, as long as some split works. If every candidate
    /// fails, the first component error is returned unchanged.
    fn parse(&self, input: &str) -> Result<Self::Value> {
        let mut first_err = None;
        for (left, right) in self.splits(input) {
            let attempt = self
                .first
                .parse(left)
                .and_then(|a| Ok((a, self.second.parse(right)?)));
            match attempt {
                Ok(pair) => return Ok(pair),
                Err(err) => {
                    first_err.get_or_insert(err);
                }
            }
        }
        Err(first_err.unwrap_or_else(|| {
            Error::parse(format!(
                "no {} delimiter splits {input:?} into two components",
                self.delimiters
                    .iter()
                    .map(|d| format!("{d:?}"))
                    .collect::<Vec<_>>()
                    .join(" or "),
            ))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NumberCodec;

    fn pair() -> TupleCodec<NumberCodec<i32>, NumberCodec<i32>> {
        TupleCodec::new(NumberCodec::new(), NumberCodec::new(), ", ")
    }

    #[test]
    fn whitespace_around_delimiter_is_absorbed() {
        for input in ["1,2", "1 ,2", "1, 2", "1 , 2"] {
            assert_eq!(pair().parse(input).unwrap(), (1, 2), "input {input:?}");
        }
    }

    #[test]
    fn one_sided_input_fails() {
        assert!(pair().parse("1,").is_err());
        assert!(pair().parse(",1").is_err());
        assert!(pair().parse("12").is_err());
    }

    #[test]
    fn disallowing_whitespace_rejects_padded_delimiters() {
        let strict = pair().disallowing_whitespace();
        assert_eq!(strict.parse("1,2").unwrap(), (1, 2));
        assert!(strict.parse("1, 2").is_err());
        assert!(strict.parse("1 ,2").is_err());
    }

    #[test]
    fn delimiter_candidates_are_tried_in_order() {
        let codec = pair().with_delimiters([";", ","]);
        assert_eq!(codec.parse("1;2").unwrap(), (1, 2));
        assert_eq!(codec.parse("1,2").unwrap(), (1, 2));
    }

    #[test]
    fn internal_delimiter_is_skipped_when_a_later_split_parses() {
        // The first "-" is the sign of the left component, not the separator.
        let codec = TupleCodec::new(NumberCodec::<i32>::new(), NumberCodec::<i32>::new(), " - ");
        assert_eq!(codec.parse("-1 - 2").unwrap(), (-1, 2));
    }
}
