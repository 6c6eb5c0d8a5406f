//! Leaf codecs for plain numbers.
//!
//! The combinator layer is generic over any scalar codec supplying
//! `format(scalar) -> String` and `parse(&str) -> Result<scalar>`; locale-aware
//! formatting can be plugged in from outside through that contract. This module
//! ships the plain leaves most callers want:
//!
//! - [`NumberCodec<T>`]: any `Display + FromStr` number, formatted with `Display`,
//!   parsed after trimming surrounding whitespace.
//! - [`FloatCodec`]: `f64` with an optional cap on fraction digits.
//!
//! ## Examples
//!
//! ```rust
//! use numform::{Codec, FloatCodec, NumberCodec, ParseableCodec};
//!
//! let int = NumberCodec::<i32>::new();
//! assert_eq!(int.format(&42), "42");
//! assert_eq!(int.parse(" 42 ").unwrap(), 42);
//!
//! let two_places = FloatCodec::new().with_max_fraction_digits(2);
//! assert_eq!(two_places.format(&0.785398), "0.79");
//! assert_eq!(two_places.format(&1.0), "1");
//! ```

use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::{Codec, Error, ParseableCodec, Result};

/// A leaf codec for any number that implements `Display` and `FromStr`.
///
/// Parsing trims surrounding whitespace first, so list and tuple splits may hand
/// this codec parts like `" 2.2"` without pre-cleaning them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberCodec<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> NumberCodec<T> {
    #[must_use]
    pub fn new() -> Self {
        NumberCodec {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for NumberCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Display> Codec for NumberCodec<T> {
    type Value = T;

    fn format(&self, value: &T) -> String {
        value.to_string()
    }
}

impl<T: Display + FromStr> ParseableCodec for NumberCodec<T> {
    fn parse(&self, input: &str) -> Result<T> {
        input
            .trim()
            .parse()
            .map_err(|_| Error::parse(format!("{input:?} is not a number")))
    }
}

/// A leaf codec for `f64` with an optional precision cap.
///
/// Without a cap, values format with `Display`: the shortest representation
/// that parses back to the identical float, so round-trips are exact. With
/// [`with_max_fraction_digits`](FloatCodec::with_max_fraction_digits), output is
/// rounded to at most that many fraction digits and trailing zeros are trimmed
/// (`0.79`, `1`, `0.5`); a rounded `-0` normalizes to `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FloatCodec {
    max_fraction_digits: Option<usize>,
}

impl FloatCodec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps formatted output at `digits` fraction digits.
    #[must_use]
    pub fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = Some(digits);
        self
    }
}

impl Codec for FloatCodec {
    type Value = f64;

    fn format(&self, value: &f64) -> String {
        match self.max_fraction_digits {
            None => value.to_string(),
            Some(digits) => {
                let mut s = format!("{value:.digits$}");
                if s.contains('.') {
                    while s.ends_with('0') {
                        s.pop();
                    }
                    if s.ends_with('.') {
                        s.pop();
                    }
                }
                if s == "-0" {
                    s = "0".to_string();
                }
                s
            }
        }
    }
}

impl ParseableCodec for FloatCodec {
    fn parse(&self, input: &str) -> Result<f64> {
        input
            .trim()
            .parse()
            .map_err(|_| Error::parse(format!("{input:?} is not a number")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_precision_trims_trailing_zeros() {
        let codec = FloatCodec::new().with_max_fraction_digits(2);
        assert_eq!(codec.format(&0.785398), "0.79");
        assert_eq!(codec.format(&0.382683), "0.38");
        assert_eq!(codec.format(&1.0), "1");
        assert_eq!(codec.format(&0.0), "0");
        assert_eq!(codec.format(&-0.001), "0");
        assert_eq!(codec.format(&0.5), "0.5");
    }

    #[test]
    fn number_parse_trims_whitespace() {
        let codec = NumberCodec::<i32>::new();
        assert_eq!(codec.parse(" 7 ").unwrap(), 7);
        assert!(codec.parse("seven").is_err());
        assert!(codec.parse("").is_err());
    }
}
