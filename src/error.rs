//! Error types for formatting and parsing.
//!
//! Formatting is total and never fails; every error in this module comes from the
//! parse direction. Parse failures are expected, recoverable outcomes; malformed
//! user input must never panic.
//!
//! ## Error Categories
//!
//! - **Parse**: generic syntactic mismatch (wrong delimiter, unparsable leaf value)
//! - **Count**: a list parse produced the wrong number of elements for its
//!   configured [`CountRange`](crate::CountRange)
//! - **MissingKeys**: a mapping-style parse is missing required named fields
//! - **UnknownUnit**: an angle value carried no recognizable unit suffix
//!
//! ## Propagation
//!
//! Combinators return the first failure from a nested codec unchanged, without
//! wrapping or rewording it. A combinator raises its own kind (`Count`,
//! `MissingKeys`) only after all of its children parsed successfully.
//!
//! ## Examples
//!
//! ```rust
//! use numform::{CountRange, Error, FloatCodec, ListCodec, ParseableCodec};
//!
//! let codec = ListCodec::new(FloatCodec::new()).with_count(CountRange::exactly(3));
//! let err = codec.parse("1, 2, 3, 4, 5").unwrap_err();
//! assert!(matches!(err, Error::Count { found: 5, .. }));
//! ```

use std::fmt;
use thiserror::Error;

/// All failures that can occur while parsing a formatted value.
///
/// Each variant carries the context a caller needs to report the problem;
/// nothing in this crate logs or retries on its own.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Generic syntactic mismatch: a delimiter was not found where expected,
    /// or a leaf value could not be parsed.
    #[error("parse error: {msg}")]
    Parse { msg: String },

    /// A list parse yielded a number of elements outside the configured range.
    #[error("expected between {min} and {max} elements, found {found}")]
    Count {
        min: usize,
        max: usize,
        found: usize,
    },

    /// A mapping-style parse is missing one or more required named fields.
    #[error("missing required keys: {}", .keys.join(", "))]
    MissingKeys { keys: Vec<String> },

    /// An angle could not be parsed because its unit suffix was absent or
    /// unrecognized and no assumed unit was configured.
    #[error("cannot determine unit of {input:?}")]
    UnknownUnit { input: String },
}

impl Error {
    /// Creates a generic parse error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numform::Error;
    ///
    /// let err = Error::parse("expected a delimiter");
    /// assert!(err.to_string().contains("delimiter"));
    /// ```
    pub fn parse<T: fmt::Display>(msg: T) -> Self {
        Error::Parse {
            msg: msg.to_string(),
        }
    }

    /// Creates a count error from the violated bounds and the observed length.
    pub fn count(min: usize, max: usize, found: usize) -> Self {
        Error::Count { min, max, found }
    }

    /// Creates a missing-keys error listing every absent field name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numform::Error;
    ///
    /// let err = Error::missing_keys(["y", "z"]);
    /// assert_eq!(err.to_string(), "missing required keys: y, z");
    /// ```
    pub fn missing_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Error::MissingKeys {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates an unknown-unit error for an angle with no recognizable suffix.
    pub fn unknown_unit(input: &str) -> Self {
        Error::UnknownUnit {
            input: input.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
