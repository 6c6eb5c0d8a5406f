//! Quaternion value type and codec.
//!
//! A quaternion has four textual presentations, all built from the combinators:
//!
//! - [`QuaternionStyle::Components`] (default): `real: r, ix: x, iy: y, iz: z`
//! - [`QuaternionStyle::Vector`]: `x, y, z, w` via [`VectorCodec`]
//! - [`QuaternionStyle::AngleAxis`]: `angle: a, x: ax, y: ay, z: az`
//! - [`QuaternionStyle::ImaginaryReal`] (legacy): `real: r, imaginary: x: ...`,
//!   a tuple whose second component is a nested mapping-style vector, parseable
//!   because the tuple split retries until both sides parse
//!
//! When the `human_readable` flag is set (the default), the identity quaternion
//! formats as the literal `identity` and parse accepts that token
//! case-insensitively.
//!
//! ## Examples
//!
//! ```rust
//! use numform::{Codec, FloatCodec, ParseableCodec, Quaternion, QuaternionCodec};
//!
//! let codec = QuaternionCodec::new(FloatCodec::new().with_max_fraction_digits(2));
//! let q = Quaternion::from_angle_axis(std::f64::consts::FRAC_PI_4, [0.0, 0.0, 1.0]);
//! assert_eq!(codec.format(&q), "real: 0.92, ix: 0, iy: 0, iz: 0.38");
//! assert_eq!(codec.format(&Quaternion::IDENTITY), "identity");
//! assert_eq!(codec.parse("Identity").unwrap(), Quaternion::IDENTITY);
//! ```

use serde::{Deserialize, Serialize};

use crate::mapping::require_keys;
use crate::{
    Codec, CompositeStyle, Error, IdentityCodec, MappingCodec, ParseableCodec, Result,
    TupleCodec, VectorCodec,
};

/// A rotation quaternion with `f64` components.
///
/// Stored as the real part plus the three imaginary components. The angle/axis
/// accessors assume a unit quaternion, which is what every parseable textual
/// form produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub real: f64,
    pub ix: f64,
    pub iy: f64,
    pub iz: f64,
}

impl Quaternion {
    /// The identity rotation: real part 1, imaginary parts 0.
    pub const IDENTITY: Quaternion = Quaternion {
        real: 1.0,
        ix: 0.0,
        iy: 0.0,
        iz: 0.0,
    };

    /// Builds the rotation of `angle` radians about `axis` (assumed unit length).
    #[must_use]
    pub fn from_angle_axis(angle: f64, axis: [f64; 3]) -> Self {
        let half = angle / 2.0;
        let s = half.sin();
        Quaternion {
            real: half.cos(),
            ix: axis[0] * s,
            iy: axis[1] * s,
            iz: axis[2] * s,
        }
    }

    /// Builds a quaternion from `[x, y, z, w]` component order.
    #[must_use]
    pub fn from_vector(v: [f64; 4]) -> Self {
        Quaternion {
            real: v[3],
            ix: v[0],
            iy: v[1],
            iz: v[2],
        }
    }

    /// Components in `[x, y, z, w]` order.
    #[must_use]
    pub fn vector(&self) -> [f64; 4] {
        [self.ix, self.iy, self.iz, self.real]
    }

    /// Rotation angle in radians.
    #[must_use]
    pub fn angle(&self) -> f64 {
        2.0 * self.real.clamp(-1.0, 1.0).acos()
    }

    /// Rotation axis. A rotation too close to identity has no defined axis;
    /// `[0, 0, 1]` is returned for it so the angle-axis form stays total.
    #[must_use]
    pub fn axis(&self) -> [f64; 3] {
        let s = (1.0 - self.real * self.real).max(0.0).sqrt();
        if s < 1e-9 {
            [0.0, 0.0, 1.0]
        } else {
            [self.ix / s, self.iy / s, self.iz / s]
        }
    }
}

/// Which of the four textual presentations a [`QuaternionCodec`] uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuaternionStyle {
    /// `real: r, ix: x, iy: y, iz: z`
    #[default]
    Components,
    /// `real: r, imaginary: x: ix, y: iy, z: iz` (legacy layout)
    ImaginaryReal,
    /// `x, y, z, w`, laid out per the configured [`CompositeStyle`]
    Vector,
    /// `angle: a, x: ax, y: ay, z: az`
    AngleAxis,
}

/// A single `name: value` field, used to compose the legacy imaginary/real
/// layout out of the tuple combinator.
#[derive(Debug, Clone)]
struct FieldCodec<C> {
    name: &'static str,
    inner: C,
}

impl<C: Codec> Codec for FieldCodec<C> {
    type Value = C::Value;

    fn format(&self, value: &Self::Value) -> String {
        format!("{}: {}", self.name, self.inner.format(value))
    }
}

impl<C: ParseableCodec> ParseableCodec for FieldCodec<C> {
    fn parse(&self, input: &str) -> Result<Self::Value> {
        let (key, value) = TupleCodec::new(IdentityCodec, &self.inner, ": ").parse(input)?;
        if key.trim() != self.name {
            return Err(Error::missing_keys([self.name]));
        }
        Ok(value)
    }
}

/// Formats and parses a [`Quaternion`] in one of four styles.
///
/// Generic over the scalar codec used for each component; every component is a
/// double, so the scalar value type is fixed to `f64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuaternionCodec<C> {
    scalar: C,
    style: QuaternionStyle,
    composite_style: CompositeStyle,
    human_readable: bool,
}

impl<C> QuaternionCodec<C> {
    /// Creates a components-style, human-readable codec.
    #[must_use]
    pub fn new(scalar: C) -> Self {
        QuaternionCodec {
            scalar,
            style: QuaternionStyle::Components,
            composite_style: CompositeStyle::Mapping,
            human_readable: true,
        }
    }

    /// Selects the presentation style.
    #[must_use]
    pub fn with_style(mut self, style: QuaternionStyle) -> Self {
        self.style = style;
        self
    }

    /// Selects positional vs. named layout for the [`QuaternionStyle::Vector`]
    /// presentation. The other styles have fixed layouts.
    #[must_use]
    pub fn with_composite_style(mut self, style: CompositeStyle) -> Self {
        self.composite_style = style;
        self
    }

    /// Enables or disables the `identity` literal shortcut (on by default).
    #[must_use]
    pub fn human_readable(mut self, human_readable: bool) -> Self {
        self.human_readable = human_readable;
        self
    }
}

const COMPONENT_KEYS: [&str; 4] = ["real", "ix", "iy", "iz"];
const ANGLE_AXIS_KEYS: [&str; 4] = ["angle", "x", "y", "z"];
const IDENTITY_TOKEN: &str = "identity";

impl<C: Codec<Value = f64>> Codec for QuaternionCodec<C> {
    type Value = Quaternion;

    fn format(&self, value: &Quaternion) -> String {
        if self.human_readable && *value == Quaternion::IDENTITY {
            return IDENTITY_TOKEN.to_string();
        }
        match self.style {
            QuaternionStyle::Components => {
                let pairs: Vec<(String, f64)> = COMPONENT_KEYS
                    .iter()
                    .zip([value.real, value.ix, value.iy, value.iz])
                    .map(|(name, scalar)| (name.to_string(), scalar))
                    .collect();
                MappingCodec::new(IdentityCodec, &self.scalar).format_pairs(&pairs)
            }
            QuaternionStyle::ImaginaryReal => {
                TupleCodec::new(self.real_field(), self.imaginary_field(), ", ")
                    .format(&(value.real, [value.ix, value.iy, value.iz]))
            }
            QuaternionStyle::Vector => VectorCodec::<_, 4>::new(&self.scalar)
                .with_style(self.composite_style)
                .format(&value.vector()),
            QuaternionStyle::AngleAxis => {
                let axis = value.axis();
                let pairs: Vec<(String, f64)> = ANGLE_AXIS_KEYS
                    .iter()
                    .zip([value.angle(), axis[0], axis[1], axis[2]])
                    .map(|(name, scalar)| (name.to_string(), scalar))
                    .collect();
                MappingCodec::new(IdentityCodec, &self.scalar).format_pairs(&pairs)
            }
        }
    }
}

impl<C: ParseableCodec<Value = f64>> ParseableCodec for QuaternionCodec<C> {
    fn parse(&self, input: &str) -> Result<Quaternion> {
        if self.human_readable && input.trim().eq_ignore_ascii_case(IDENTITY_TOKEN) {
            return Ok(Quaternion::IDENTITY);
        }
        match self.style {
            QuaternionStyle::Components => {
                let lookup =
                    MappingCodec::new(IdentityCodec, &self.scalar).parse_lookup(input)?;
                let parts = require_keys(&lookup, &COMPONENT_KEYS)?;
                Ok(Quaternion {
                    real: parts[0],
                    ix: parts[1],
                    iy: parts[2],
                    iz: parts[3],
                })
            }
            QuaternionStyle::ImaginaryReal => {
                let (real, [ix, iy, iz]) =
                    TupleCodec::new(self.real_field(), self.imaginary_field(), ", ")
                        .parse(input)?;
                Ok(Quaternion { real, ix, iy, iz })
            }
            QuaternionStyle::Vector => {
                let v = VectorCodec::<_, 4>::new(&self.scalar)
                    .with_style(self.composite_style)
                    .parse(input)?;
                Ok(Quaternion::from_vector(v))
            }
            QuaternionStyle::AngleAxis => {
                let lookup =
                    MappingCodec::new(IdentityCodec, &self.scalar).parse_lookup(input)?;
                let parts = require_keys(&lookup, &ANGLE_AXIS_KEYS)?;
                Ok(Quaternion::from_angle_axis(
                    parts[0],
                    [parts[1], parts[2], parts[3]],
                ))
            }
        }
    }
}

impl<C> QuaternionCodec<C> {
    fn real_field(&self) -> FieldCodec<&C> {
        FieldCodec {
            name: "real",
            inner: &self.scalar,
        }
    }

    fn imaginary_field(&self) -> FieldCodec<VectorCodec<&C, 3>> {
        FieldCodec {
            name: "imaginary",
            inner: VectorCodec::new(&self.scalar),
        }
    }
}
