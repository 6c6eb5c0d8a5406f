//! Matrix codec: rows of scalars, one row per line.
//!
//! A matrix is exactly a list of lists: lines joined by `"\n"`, each line's
//! scalars joined by `", "`. [`MatrixOrder`] selects whether a line is a row or
//! a column; format and parse apply the same order, so elements land on
//! identical `(row, col)` coordinates regardless of traversal.
//!
//! ## Examples
//!
//! ```rust
//! use numform::{Codec, FloatCodec, MatrixCodec, ParseableCodec};
//!
//! let codec = MatrixCodec::<_, 2, 2>::new(FloatCodec::new());
//! let m = [[0.0, 1.0], [2.0, 3.0]];
//! assert_eq!(codec.format(&m), "0, 1\n2, 3");
//! assert_eq!(codec.parse("0, 1\n2, 3").unwrap(), m);
//! ```

use serde::{Deserialize, Serialize};

use crate::{Codec, CountRange, Error, ListCodec, ParseableCodec, Result};

/// Traversal order for matrix text: which axis becomes a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixOrder {
    /// Each line is a row (the default).
    #[default]
    RowMajor,
    /// Each line is a column.
    ColumnMajor,
}

/// Formats and parses an `R`×`COLS` matrix stored row-major as `[[S; COLS]; R]`.
///
/// The invariant both directions uphold: for every matrix `m` and order `o`,
/// `parse(format(m, o), o) == m`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixCodec<C, const R: usize, const COLS: usize> {
    scalar: C,
    order: MatrixOrder,
}

impl<C, const R: usize, const COLS: usize> MatrixCodec<C, R, COLS> {
    /// Creates a row-major matrix codec.
    #[must_use]
    pub fn new(scalar: C) -> Self {
        MatrixCodec {
            scalar,
            order: MatrixOrder::RowMajor,
        }
    }

    /// Selects the traversal order.
    #[must_use]
    pub fn with_order(mut self, order: MatrixOrder) -> Self {
        self.order = order;
        self
    }

    /// Lines per formatted matrix and scalars per line, given the order.
    fn line_shape(&self) -> (usize, usize) {
        match self.order {
            MatrixOrder::RowMajor => (R, COLS),
            MatrixOrder::ColumnMajor => (COLS, R),
        }
    }
}

impl<C: Codec, const R: usize, const COLS: usize> Codec for MatrixCodec<C, R, COLS>
where
    C::Value: Clone,
{
    type Value = [[C::Value; COLS]; R];

    fn format(&self, value: &Self::Value) -> String {
        let (lines, per_line) = self.line_shape();
        let elements: Vec<Vec<C::Value>> = (0..lines)
            .map(|line| {
                (0..per_line)
                    .map(|at| match self.order {
                        MatrixOrder::RowMajor => value[line][at].clone(),
                        MatrixOrder::ColumnMajor => value[at][line].clone(),
                    })
                    .collect()
            })
            .collect();
        ListCodec::new(ListCodec::new(&self.scalar))
            .with_separator("\n")
            .format_items(&elements)
    }
}

impl<C: ParseableCodec, const R: usize, const COLS: usize> ParseableCodec
    for MatrixCodec<C, R, COLS>
where
    C::Value: Clone,
{
    fn parse(&self, input: &str) -> Result<Self::Value> {
        let (lines, per_line) = self.line_shape();
        let inner = ListCodec::new(&self.scalar).with_count(CountRange::exactly(per_line));
        let elements = ListCodec::new(inner)
            .with_separator("\n")
            .with_count(CountRange::exactly(lines))
            .parse(input)?;
        let rows: Vec<[C::Value; COLS]> = (0..R)
            .map(|row| {
                let scalars: Vec<C::Value> = (0..COLS)
                    .map(|col| match self.order {
                        MatrixOrder::RowMajor => elements[row][col].clone(),
                        MatrixOrder::ColumnMajor => elements[col][row].clone(),
                    })
                    .collect();
                scalars
                    .try_into()
                    .map_err(|_| Error::count(COLS, COLS, per_line))
            })
            .collect::<Result<_>>()?;
        let found = rows.len();
        rows.try_into().map_err(|_| Error::count(R, R, found))
    }
}
