//! Closed-range codec.
//!
//! Formats `lower..=upper` as `lower ... upper` and parses it back, trying each
//! configured delimiter candidate in order (default `"..."` then `"-"`), so
//! `"1 ... 2"`, `"1...2"` and `"1 - 2"` all parse. The candidate scan is the
//! tuple combinator's, which is why a leading minus sign on a bound is not
//! mistaken for the `-` delimiter.
//!
//! ## Examples
//!
//! ```rust
//! use numform::{Codec, NumberCodec, ParseableCodec, RangeCodec};
//!
//! let codec = RangeCodec::new(NumberCodec::<i32>::new());
//! assert_eq!(codec.format(&(1..=2)), "1 ... 2");
//! assert_eq!(codec.parse("1 - 2").unwrap(), 1..=2);
//! assert!(codec.parse("1 2").is_err());
//! ```

use std::ops::RangeInclusive;

use crate::{Codec, Error, ParseableCodec, Result, TupleCodec};

/// Formats and parses a `RangeInclusive` of any partially ordered bound type.
///
/// Parsing rejects an inverted pair: when the bounds compare and
/// `lower > upper`, the result is a parse error rather than a silently empty
/// range. Bounds that do not compare (NaN) are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeCodec<C> {
    bound: C,
    delimiter: String,
    delimiters: Vec<String>,
}

impl<C> RangeCodec<C> {
    /// Creates a range codec formatting with `"..."` and parsing `"..."` or
    /// `"-"`.
    #[must_use]
    pub fn new(bound: C) -> Self {
        RangeCodec {
            bound,
            delimiter: "...".to_string(),
            delimiters: vec!["...".to_string(), "-".to_string()],
        }
    }

    /// Sets the delimiter used when formatting.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: &str) -> Self {
        self.delimiter = delimiter.to_string();
        self
    }

    /// Replaces the parse delimiter candidates; the first match wins.
    #[must_use]
    pub fn with_parse_delimiters<I, S>(mut self, delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.delimiters = delimiters.into_iter().map(Into::into).collect();
        self
    }
}

impl<C: Codec> Codec for RangeCodec<C> {
    type Value = RangeInclusive<C::Value>;

    fn format(&self, value: &Self::Value) -> String {
        format!(
            "{} {} {}",
            self.bound.format(value.start()),
            self.delimiter,
            self.bound.format(value.end()),
        )
    }
}

impl<C: ParseableCodec> ParseableCodec for RangeCodec<C>
where
    C::Value: PartialOrd,
{
    fn parse(&self, input: &str) -> Result<Self::Value> {
        let (lower, upper) = TupleCodec::new(&self.bound, &self.bound, " ... ")
            .with_delimiters(self.delimiters.iter().cloned())
            .parse(input)?;
        if lower > upper {
            return Err(Error::parse(format!(
                "range lower bound {} exceeds upper bound {}",
                self.bound.format(&lower),
                self.bound.format(&upper),
            )));
        }
        Ok(lower..=upper)
    }
}
