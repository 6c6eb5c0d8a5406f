//! Vector codec for 2, 3 and 4 component values.
//!
//! Built entirely from the combinators: list style delegates to [`ListCodec`],
//! mapping style to [`MappingCodec`] with the canonical component names
//! `x, y, z, w` taken by arity. The same [`CompositeStyle`] drives both format
//! and parse, so the two directions always agree on layout.
//!
//! ## Examples
//!
//! ```rust
//! use numform::{Codec, CompositeStyle, FloatCodec, ParseableCodec, VectorCodec};
//!
//! let codec = VectorCodec::<_, 3>::new(FloatCodec::new());
//! assert_eq!(codec.format(&[0.0, 1.0, 2.0]), "x: 0, y: 1, z: 2");
//! assert_eq!(codec.parse("x: 0, y: 1, z: 2").unwrap(), [0.0, 1.0, 2.0]);
//!
//! let list = codec.with_style(CompositeStyle::List);
//! assert_eq!(list.format(&[0.0, 1.0, 2.0]), "0, 1, 2");
//! ```

use crate::mapping::require_keys;
use crate::{
    Codec, CompositeStyle, CountRange, Error, IdentityCodec, ListCodec, MappingCodec,
    ParseableCodec, Result,
};

/// Canonical component names, taken by arity: `x, y` / `x, y, z` / `x, y, z, w`.
pub const COMPONENT_NAMES: [&str; 4] = ["x", "y", "z", "w"];

/// Formats and parses an `N`-component vector (`N` in 2..=4) as either a
/// positional list or a named-field mapping.
///
/// Mapping-style parse requires every canonical name for the arity (missing
/// ones are a [`MissingKeys`](Error::MissingKeys) failure; extra keys are
/// ignored). List-style parse requires exactly `N` scalars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorCodec<C, const N: usize> {
    scalar: C,
    style: CompositeStyle,
}

impl<C, const N: usize> VectorCodec<C, N> {
    /// Creates a mapping-style vector codec.
    ///
    /// # Panics
    ///
    /// Panics if `N` is outside 2..=4; there is no canonical name for a fifth
    /// component.
    #[must_use]
    pub fn new(scalar: C) -> Self {
        assert!(
            (2..=4).contains(&N),
            "vector codecs support 2 to 4 components, not {N}"
        );
        VectorCodec {
            scalar,
            style: CompositeStyle::Mapping,
        }
    }

    /// Selects list (positional) or mapping (named-field) layout.
    #[must_use]
    pub fn with_style(mut self, style: CompositeStyle) -> Self {
        self.style = style;
        self
    }
}

impl<C: Codec, const N: usize> Codec for VectorCodec<C, N>
where
    C::Value: Clone,
{
    type Value = [C::Value; N];

    fn format(&self, value: &Self::Value) -> String {
        match self.style {
            CompositeStyle::List => ListCodec::new(&self.scalar).format_items(value),
            CompositeStyle::Mapping => {
                let pairs: Vec<(String, C::Value)> = COMPONENT_NAMES
                    .iter()
                    .zip(value.iter())
                    .map(|(name, scalar)| (name.to_string(), scalar.clone()))
                    .collect();
                MappingCodec::new(IdentityCodec, &self.scalar).format_pairs(&pairs)
            }
        }
    }
}

impl<C: ParseableCodec, const N: usize> ParseableCodec for VectorCodec<C, N>
where
    C::Value: Clone,
{
    fn parse(&self, input: &str) -> Result<Self::Value> {
        let scalars = match self.style {
            CompositeStyle::List => ListCodec::new(&self.scalar)
                .with_count(CountRange::exactly(N))
                .parse(input)?,
            CompositeStyle::Mapping => {
                let lookup =
                    MappingCodec::new(IdentityCodec, &self.scalar).parse_lookup(input)?;
                require_keys(&lookup, &COMPONENT_NAMES[..N])?
            }
        };
        let found = scalars.len();
        scalars.try_into().map_err(|_| Error::count(N, N, found))
    }
}
