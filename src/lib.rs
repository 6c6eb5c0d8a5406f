//! # numform
//!
//! Composable, bidirectional text codecs for structured numeric values: angles,
//! 2D/3D/4D vectors, NxM matrices, quaternions, closed ranges and key/value
//! mappings.
//!
//! ## What is a codec?
//!
//! A codec is a paired format/parse capability for one value type. Both
//! directions are driven by the same configuration, so whatever a codec formats,
//! the same codec parses back; there is no way to configure the two halves
//! apart.
//!
//! ## Key Features
//!
//! - **Combinators**: the generic building blocks [`ListCodec`], [`TupleCodec`]
//!   and [`MappingCodec`] nest arbitrarily; a matrix is a list of lists of
//!   scalars, a vector is a mapping of named scalars
//! - **Static round-trip capability**: a composite codec implements
//!   [`ParseableCodec`] only when every component codec does, checked at compile
//!   time rather than at runtime
//! - **Delimiter disambiguation**: tuple splitting skips delimiter characters
//!   that belong to a component (a minus sign, a comma inside a nested value)
//! - **Incremental parsing**: [`IncrementalCodec::parse_prefix`] consumes a
//!   bounded prefix of a shared input and leaves the remainder for the next
//!   codec
//! - **Typed failures**: malformed input yields [`Error`] values, never panics
//! - **No unsafe code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use numform::{Codec, CompositeStyle, FloatCodec, ParseableCodec, VectorCodec};
//!
//! let codec = VectorCodec::<_, 3>::new(FloatCodec::new());
//! assert_eq!(codec.format(&[0.0, 1.0, 2.0]), "x: 0, y: 1, z: 2");
//! assert_eq!(codec.parse("x: 0, y: 1, z: 2").unwrap(), [0.0, 1.0, 2.0]);
//!
//! let positional = codec.with_style(CompositeStyle::List);
//! assert_eq!(positional.format(&[0.0, 1.0, 2.0]), "0, 1, 2");
//! ```
//!
//! ## Grammar
//!
//! The textual grammar is small and fixed:
//!
//! | Shape | Text |
//! |-------|------|
//! | List | `elem1, elem2, elem3` |
//! | Mapping | `key1: value1, key2: value2` |
//! | Tuple / Range | `a ... b` or `a - b` (configurable candidates) |
//! | Matrix | lines joined by `\n`, scalars by `, ` |
//! | Quaternion | `real: r, ix: x, iy: y, iz: z`, or the literal `identity` |
//!
//! ## Plugging in your own scalars
//!
//! Everything above the leaves is generic: any type implementing [`Codec`] and
//! [`ParseableCodec`] for its scalar, including a locale-aware number
//! formatter, slots into the combinators unchanged. The built-in
//! [`NumberCodec`] and [`FloatCodec`] cover the plain cases.
//!
//! ## Scope
//!
//! The crate is pure value transformation: no I/O and no global state. Codecs
//! are immutable and freely shareable across
//! threads. Inputs are small, human-authored strings; work is bounded by the
//! declared structure size via [`CountRange`].

pub mod angle;
pub mod codec;
pub mod error;
pub mod list;
pub mod mapping;
pub mod matrix;
pub mod options;
pub mod quaternion;
pub mod range;
pub mod scalar;
pub mod tuple;
pub mod vector;

pub use angle::{AngleCodec, AngleUnit};
pub use codec::{Codec, IdentityCodec, IncrementalCodec, ParseableCodec};
pub use error::{Error, Result};
pub use list::ListCodec;
pub use mapping::{require_keys, MappingCodec};
pub use matrix::{MatrixCodec, MatrixOrder};
pub use options::{CompositeStyle, CountRange};
pub use quaternion::{Quaternion, QuaternionCodec, QuaternionStyle};
pub use range::RangeCodec;
pub use scalar::{FloatCodec, NumberCodec};
pub use tuple::TupleCodec;
pub use vector::{VectorCodec, COMPONENT_NAMES};
