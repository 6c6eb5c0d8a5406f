//! Ordered-list combinator.
//!
//! [`ListCodec`] formats a sequence of values by formatting each element with its
//! element codec and joining the results with a separator; parsing is the exact
//! inverse. It is the backbone of every other combinator in the crate: a matrix
//! is a list of lists of scalars, a mapping is a list of `key: value` pairs.
//!
//! ## Examples
//!
//! ```rust
//! use numform::{Codec, FloatCodec, ListCodec, ParseableCodec};
//!
//! let codec = ListCodec::new(FloatCodec::new());
//! assert_eq!(codec.format(&vec![1.1, 2.2, 3.3]), "1.1, 2.2, 3.3");
//! assert_eq!(codec.parse("1.1, 2.2, 3.3").unwrap(), vec![1.1, 2.2, 3.3]);
//! ```
//!
//! Nested lists can share one input when the outer codec uses a different
//! separator:
//!
//! ```rust
//! use numform::{FloatCodec, ListCodec, ParseableCodec};
//!
//! let rows = ListCodec::new(ListCodec::new(FloatCodec::new())).with_separator("\n");
//! assert_eq!(
//!     rows.parse("1,2,3\n4,5").unwrap(),
//!     vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]],
//! );
//! ```

use crate::{Codec, CountRange, Error, IncrementalCodec, ParseableCodec, Result};

/// Formats and parses an ordered sequence of values.
///
/// The format separator (default `", "`) joins element output; the parse side
/// splits on the trimmed form of that separator (default `","`), so that
/// `"1, 2"` and `"1,2"` both parse. Leading/trailing whitespace inside the split
/// parts is left for the element codec to handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCodec<C> {
    element: C,
    separator: String,
    split: String,
    prefix: Option<String>,
    suffix: Option<String>,
    count: CountRange,
}

impl<C> ListCodec<C> {
    /// Creates a list codec with separator `", "` and an unconstrained count.
    #[must_use]
    pub fn new(element: C) -> Self {
        ListCodec {
            element,
            separator: ", ".to_string(),
            split: ",".to_string(),
            prefix: None,
            suffix: None,
            count: CountRange::any(),
        }
    }

    /// Sets the separator. Formatting joins with `separator` verbatim; parsing
    /// splits on its trimmed form (or on `separator` itself if trimming would
    /// leave it empty, as with `"\n"` or `" "`).
    #[must_use]
    pub fn with_separator(mut self, separator: &str) -> Self {
        let trimmed = separator.trim();
        self.split = if trimmed.is_empty() {
            separator.to_string()
        } else {
            trimmed.to_string()
        };
        self.separator = separator.to_string();
        self
    }

    /// Constrains how many elements a parse may yield.
    #[must_use]
    pub fn with_count(mut self, count: CountRange) -> Self {
        self.count = count;
        self
    }

    /// Wraps formatted output in `prefix`; parsing requires it.
    #[must_use]
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    /// Wraps formatted output in `suffix`; parsing requires it.
    #[must_use]
    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.suffix = Some(suffix.to_string());
        self
    }
}

impl<C: Codec> ListCodec<C> {
    /// Formats a slice of elements without requiring an owned `Vec`.
    pub fn format_items(&self, items: &[C::Value]) -> String {
        let body = items
            .iter()
            .map(|item| self.element.format(item))
            .collect::<Vec<_>>()
            .join(&self.separator);
        match (&self.prefix, &self.suffix) {
            (None, None) => body,
            (prefix, suffix) => format!(
                "{}{}{}",
                prefix.as_deref().unwrap_or(""),
                body,
                suffix.as_deref().unwrap_or(""),
            ),
        }
    }
}

impl<C: Codec> Codec for ListCodec<C> {
    type Value = Vec<C::Value>;

    fn format(&self, value: &Self::Value) -> String {
        self.format_items(value)
    }
}

impl<C: ParseableCodec> ParseableCodec for ListCodec<C> {
    /// Splits on the parse separator, parses every part, then checks the count.
    ///
    /// Empty parts are never omitted: an empty field is itself a value to be
    /// parsed, and its failure is surfaced. In particular an empty input string
    /// splits into **one empty part**, not zero parts, so a length-0 collection
    /// does not round-trip; this is a documented invariant of the split
    /// algorithm.
    fn parse(&self, input: &str) -> Result<Self::Value> {
        let input = self.strip_wrappers(input)?;
        let items = input
            .split(self.split.as_str())
            .map(|part| self.element.parse(part))
            .collect::<Result<Vec<_>>>()?;
        if !self.count.contains(items.len()) {
            return Err(Error::count(self.count.min, self.count.max, items.len()));
        }
        Ok(items)
    }
}

impl<C: ParseableCodec> IncrementalCodec for ListCodec<C> {
    /// Consumes at most `count.max` elements from the front of `input`.
    ///
    /// The separator following each consumed element is consumed too, so after
    /// taking three elements from `"1, 2, 3, 4, 5"` the remainder is `" 4, 5"`.
    /// The configured prefix/suffix are ignored here: prefix parsing exists for
    /// stream composition, where no wrapper is meaningful.
    fn parse_prefix(&self, input: &mut &str) -> Result<Self::Value> {
        let mut rest = *input;
        let mut items = Vec::new();
        while items.len() < self.count.max {
            match rest.find(self.split.as_str()) {
                Some(at) => {
                    items.push(self.element.parse(&rest[..at])?);
                    rest = &rest[at + self.split.len()..];
                }
                None => {
                    items.push(self.element.parse(rest)?);
                    rest = &rest[rest.len()..];
                    break;
                }
            }
        }
        if items.len() < self.count.min {
            return Err(Error::count(self.count.min, self.count.max, items.len()));
        }
        *input = rest;
        Ok(items)
    }
}

impl<C> ListCodec<C> {
    fn strip_wrappers<'a>(&self, mut input: &'a str) -> Result<&'a str> {
        if let Some(prefix) = &self.prefix {
            input = input
                .strip_prefix(prefix.as_str())
                .ok_or_else(|| Error::parse(format!("expected leading {prefix:?}")))?;
        }
        if let Some(suffix) = &self.suffix {
            input = input
                .strip_suffix(suffix.as_str())
                .ok_or_else(|| Error::parse(format!("expected trailing {suffix:?}")))?;
        }
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FloatCodec;

    #[test]
    fn empty_input_is_one_empty_element() {
        let codec = ListCodec::new(FloatCodec::new());
        // "" splits into [""], and "" is not a number.
        assert!(matches!(codec.parse(""), Err(Error::Parse { .. })));
    }

    #[test]
    fn wrappers_are_required_on_parse() {
        let codec = ListCodec::new(FloatCodec::new())
            .with_prefix("(")
            .with_suffix(")");
        assert_eq!(codec.format(&vec![1.0, 2.0]), "(1, 2)");
        assert_eq!(codec.parse("(1, 2)").unwrap(), vec![1.0, 2.0]);
        assert!(codec.parse("1, 2").is_err());
    }

    #[test]
    fn count_is_checked_after_elements() {
        let codec = ListCodec::new(FloatCodec::new()).with_count(CountRange::exactly(3));
        assert_eq!(codec.parse("1,2,3").unwrap(), vec![1.0, 2.0, 3.0]);
        assert_eq!(
            codec.parse("1,2,3,4,5").unwrap_err(),
            Error::count(3, 3, 5)
        );
        // A bad leaf surfaces the leaf error, not a count error.
        assert!(matches!(codec.parse("1,x"), Err(Error::Parse { .. })));
    }
}
