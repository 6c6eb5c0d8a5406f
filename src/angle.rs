//! Angle leaf codec with unit suffixes.
//!
//! The value is always an angle in radians; [`AngleUnit`] only controls the
//! textual presentation. Formatting converts into the display unit and appends
//! its suffix (`°` for degrees, ` rad` for radians). Parsing recognizes the
//! suffixes `°`, `deg` and `rad`; input with no suffix uses the configured
//! assumed unit, or fails with
//! [`UnknownUnit`](crate::Error::UnknownUnit) when none is set.
//!
//! ## Examples
//!
//! ```rust
//! use numform::{AngleCodec, AngleUnit, Codec, FloatCodec, ParseableCodec};
//!
//! let codec = AngleCodec::new(FloatCodec::new().with_max_fraction_digits(2));
//! assert_eq!(codec.format(&std::f64::consts::FRAC_PI_4), "45°");
//! let parsed = codec.parse("45°").unwrap();
//! assert!((parsed - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
//! assert!(codec.parse("45").is_err());
//!
//! let lenient = codec.assuming(AngleUnit::Degrees);
//! assert!(lenient.parse("45").is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::{Codec, Error, ParseableCodec, Result};

/// Angular unit used for textual presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

pub(crate) fn degrees_to_radians(value: f64) -> f64 {
    value * std::f64::consts::PI / 180.0
}

pub(crate) fn radians_to_degrees(value: f64) -> f64 {
    value * 180.0 / std::f64::consts::PI
}

/// Formats and parses an angle held in radians.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AngleCodec<C> {
    scalar: C,
    unit: AngleUnit,
    assumed: Option<AngleUnit>,
}

impl<C> AngleCodec<C> {
    /// Creates a codec that formats in degrees and requires a unit suffix on
    /// parse.
    #[must_use]
    pub fn new(scalar: C) -> Self {
        AngleCodec {
            scalar,
            unit: AngleUnit::Degrees,
            assumed: None,
        }
    }

    /// Sets the unit used when formatting.
    #[must_use]
    pub fn with_unit(mut self, unit: AngleUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Accepts suffix-less input as `unit` instead of failing.
    #[must_use]
    pub fn assuming(mut self, unit: AngleUnit) -> Self {
        self.assumed = Some(unit);
        self
    }
}

impl<C: Codec<Value = f64>> Codec for AngleCodec<C> {
    type Value = f64;

    fn format(&self, radians: &f64) -> String {
        match self.unit {
            AngleUnit::Degrees => {
                format!("{}°", self.scalar.format(&radians_to_degrees(*radians)))
            }
            AngleUnit::Radians => format!("{} rad", self.scalar.format(radians)),
        }
    }
}

impl<C: ParseableCodec<Value = f64>> ParseableCodec for AngleCodec<C> {
    fn parse(&self, input: &str) -> Result<f64> {
        let trimmed = input.trim();
        let (number, unit) = if let Some(rest) = trimmed.strip_suffix('°') {
            (rest, AngleUnit::Degrees)
        } else if let Some(rest) = trimmed.strip_suffix("deg") {
            (rest, AngleUnit::Degrees)
        } else if let Some(rest) = trimmed.strip_suffix("rad") {
            (rest, AngleUnit::Radians)
        } else if let Some(assumed) = self.assumed {
            (trimmed, assumed)
        } else {
            return Err(Error::unknown_unit(input));
        };
        let value = self.scalar.parse(number)?;
        Ok(match unit {
            AngleUnit::Degrees => degrees_to_radians(value),
            AngleUnit::Radians => value,
        })
    }
}
