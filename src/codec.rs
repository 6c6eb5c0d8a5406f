//! Core codec traits and the identity codec.
//!
//! A codec is a paired format/parse capability for one value type. The pairing is
//! split across three traits so that parseability is a *static* capability:
//!
//! - [`Codec`]: `format` only; total, never fails.
//! - [`ParseableCodec`]: adds `parse`. A combinator implements it only when all of
//!   its component codecs do, so "this composition cannot round-trip" is a compile
//!   error rather than a runtime surprise.
//! - [`IncrementalCodec`]: adds `parse_prefix`, which consumes a bounded prefix of
//!   a shared input and leaves the remainder for a subsequent codec.
//!
//! Codecs are immutable value objects: construct one per call site, share it freely
//! across threads, and compose it by value or by reference (blanket impls cover
//! `&C`).

use crate::Result;

/// The format half of a codec: renders a value of `Self::Value` as text.
///
/// Formatting is total. Given a value that satisfies its type's invariants, it
/// always produces a string, and that string is exactly what the paired parse
/// direction accepts.
pub trait Codec {
    /// The value type this codec formats.
    type Value;

    /// Renders `value` as text.
    fn format(&self, value: &Self::Value) -> String;
}

/// The parse half of a codec: the inverse of [`Codec::format`].
pub trait ParseableCodec: Codec {
    /// Parses `input`, which must be exactly one formatted value.
    ///
    /// # Errors
    ///
    /// Returns a typed [`Error`](crate::Error) describing the first failure
    /// encountered; malformed input never panics.
    fn parse(&self, input: &str) -> Result<Self::Value>;
}

/// A codec that can consume a bounded prefix of a shared input stream.
///
/// `parse_prefix` advances `input` past the consumed text, leaving the remainder
/// (including any text after the last consumed separator) for another codec to
/// continue on the same buffer. The mutation is confined to the single call.
///
/// # Examples
///
/// ```rust
/// use numform::{CountRange, FloatCodec, IncrementalCodec, ListCodec};
///
/// let codec = ListCodec::new(FloatCodec::new()).with_count(CountRange::exactly(3));
/// let mut input = "1, 2, 3, 4, 5";
/// assert_eq!(codec.parse_prefix(&mut input).unwrap(), vec![1.0, 2.0, 3.0]);
/// assert_eq!(input, " 4, 5");
/// ```
pub trait IncrementalCodec: ParseableCodec {
    /// Parses a bounded prefix of `input`, leaving the unconsumed remainder in it.
    ///
    /// # Errors
    ///
    /// Returns an error if the consumed prefix does not parse; `input` is left in
    /// an unspecified intermediate position in that case.
    fn parse_prefix(&self, input: &mut &str) -> Result<Self::Value>;
}

impl<C: Codec + ?Sized> Codec for &C {
    type Value = C::Value;

    fn format(&self, value: &Self::Value) -> String {
        (**self).format(value)
    }
}

impl<C: ParseableCodec + ?Sized> ParseableCodec for &C {
    fn parse(&self, input: &str) -> Result<Self::Value> {
        (**self).parse(input)
    }
}

impl<C: IncrementalCodec + ?Sized> IncrementalCodec for &C {
    fn parse_prefix(&self, input: &mut &str) -> Result<Self::Value> {
        (**self).parse_prefix(input)
    }
}

/// The trivial codec whose value type is `String`.
///
/// Formatting clones the string and parsing copies the input verbatim. Used as
/// the key codec in [`MappingCodec`](crate::MappingCodec) and wherever a
/// combinator needs to pass text through unchanged.
///
/// # Examples
///
/// ```rust
/// use numform::{Codec, IdentityCodec, ParseableCodec};
///
/// let id = IdentityCodec;
/// assert_eq!(id.format(&"x".to_string()), "x");
/// assert_eq!(id.parse("x").unwrap(), "x");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityCodec;

impl Codec for IdentityCodec {
    type Value = String;

    fn format(&self, value: &Self::Value) -> String {
        value.clone()
    }
}

impl ParseableCodec for IdentityCodec {
    fn parse(&self, input: &str) -> Result<Self::Value> {
        Ok(input.to_string())
    }
}
