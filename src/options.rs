//! Shared configuration value types.
//!
//! - [`CompositeStyle`]: positional (`1, 2, 3`) vs. named-field (`x: 1, y: 2, z: 3`)
//!   layout for multi-field values, shared by the vector and quaternion codecs.
//! - [`CountRange`]: closed integer range constraining how many elements a list
//!   parse may yield.
//!
//! Both derive `Serialize`/`Deserialize` so codec configurations can be stored
//! alongside the documents they describe.
//!
//! ## Examples
//!
//! ```rust
//! use numform::{Codec, CompositeStyle, FloatCodec, VectorCodec};
//!
//! let v = [1.0, 2.0];
//! let mapping = VectorCodec::<_, 2>::new(FloatCodec::new());
//! assert_eq!(mapping.format(&v), "x: 1, y: 2");
//!
//! let list = mapping.with_style(CompositeStyle::List);
//! assert_eq!(list.format(&v), "1, 2");
//! ```

use serde::{Deserialize, Serialize};

/// Textual layout for multi-field values.
///
/// `List` emits fields positionally; `Mapping` emits them by canonical name. The
/// same choice drives both format and parse, so the two directions always agree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeStyle {
    /// Positional: `1, 2, 3`.
    List,
    /// Named fields: `x: 1, y: 2, z: 3`.
    #[default]
    Mapping,
}

/// A closed range constraining the number of elements a list parse may yield.
///
/// A violated count is an [`Error::Count`](crate::Error::Count), never a panic.
/// The upper bound also caps how many elements
/// [`parse_prefix`](crate::IncrementalCodec::parse_prefix) consumes.
///
/// # Examples
///
/// ```rust
/// use numform::CountRange;
///
/// assert!(CountRange::any().contains(0));
/// assert!(CountRange::exactly(3).contains(3));
/// assert!(!CountRange::exactly(3).contains(4));
/// assert!(CountRange::between(2, 4).contains(2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
}

impl CountRange {
    /// Any number of elements, including zero.
    #[must_use]
    pub const fn any() -> Self {
        CountRange {
            min: 0,
            max: usize::MAX,
        }
    }

    /// Exactly `n` elements.
    #[must_use]
    pub const fn exactly(n: usize) -> Self {
        CountRange { min: n, max: n }
    }

    /// Between `min` and `max` elements, inclusive.
    #[must_use]
    pub const fn between(min: usize, max: usize) -> Self {
        CountRange { min, max }
    }

    /// Whether `n` falls inside this range.
    #[must_use]
    pub const fn contains(&self, n: usize) -> bool {
        self.min <= n && n <= self.max
    }
}

impl Default for CountRange {
    fn default() -> Self {
        Self::any()
    }
}
