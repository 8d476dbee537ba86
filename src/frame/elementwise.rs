// src/frame/elementwise.rs

use crate::error::FrameError;
use crate::frame::{DataFrame, Plain};
use crate::value::Value;
use regex::Regex;

/// Right-hand side of an elementwise binary combination.
///
/// Only scalars broadcast. Two frames are an explicit gap (`NotSupported`)
/// and a bare sequence is rejected (`BadRightHandSide`) rather than silently
/// approximated.
#[derive(Debug, Clone)]
pub enum Rhs {
    Scalar(Value),
    Seq(Vec<Value>),
    Frame(DataFrame),
}

impl From<Value> for Rhs {
    fn from(v: Value) -> Self {
        Rhs::Scalar(v)
    }
}

impl From<i64> for Rhs {
    fn from(v: i64) -> Self {
        Rhs::Scalar(v.into())
    }
}

impl From<i32> for Rhs {
    fn from(v: i32) -> Self {
        Rhs::Scalar(v.into())
    }
}

impl From<f64> for Rhs {
    fn from(v: f64) -> Self {
        Rhs::Scalar(v.into())
    }
}

impl From<&str> for Rhs {
    fn from(v: &str) -> Self {
        Rhs::Scalar(v.into())
    }
}

impl From<bool> for Rhs {
    fn from(v: bool) -> Self {
        Rhs::Scalar(v.into())
    }
}

impl From<Vec<Value>> for Rhs {
    fn from(v: Vec<Value>) -> Self {
        Rhs::Seq(v)
    }
}

impl From<DataFrame> for Rhs {
    fn from(f: DataFrame) -> Self {
        Rhs::Frame(f)
    }
}

impl From<&DataFrame> for Rhs {
    fn from(f: &DataFrame) -> Self {
        Rhs::Frame(f.clone())
    }
}

impl DataFrame {
    /// New frame of identical shape and names with every cell replaced by
    /// `f(cell)`.
    pub fn map(&self, f: impl Fn(&Value) -> Value) -> DataFrame {
        let data = self
            .data
            .iter()
            .map(|row| row.iter().map(&f).collect())
            .collect();
        DataFrame::assemble(data, self.row_names.clone(), self.col_names.clone())
    }

    /// `map`, mutating in place.
    pub fn map_in_place(&mut self, f: impl Fn(&Value) -> Value) {
        for row in &mut self.data {
            for cell in row {
                *cell = f(cell);
            }
        }
    }

    /// Elementwise binary combination. A scalar right-hand side broadcasts
    /// `f(cell, scalar)` over every cell.
    pub fn zip_with(
        &self,
        rhs: impl Into<Rhs>,
        f: impl Fn(&Value, &Value) -> Result<Value, FrameError>,
    ) -> Result<DataFrame, FrameError> {
        let scalar = match rhs.into() {
            Rhs::Frame(_) => {
                return Err(FrameError::NotSupported(
                    "elementwise combination of two frames".to_string(),
                ))
            }
            Rhs::Seq(_) => {
                return Err(FrameError::BadRightHandSide(
                    "elementwise combination with a bare sequence; wrap it in a frame".to_string(),
                ))
            }
            Rhs::Scalar(v) => v,
        };
        let data = self
            .data
            .iter()
            .map(|row| row.iter().map(|cell| f(cell, &scalar)).collect())
            .collect::<Result<Vec<Vec<Value>>, FrameError>>()?;
        Ok(DataFrame::assemble(
            data,
            self.row_names.clone(),
            self.col_names.clone(),
        ))
    }

    /// Elementwise addition.
    pub fn add(&self, rhs: impl Into<Rhs>) -> Result<DataFrame, FrameError> {
        self.zip_with(rhs, |a, b| a.try_add(b))
    }

    /// Elementwise subtraction.
    pub fn sub(&self, rhs: impl Into<Rhs>) -> Result<DataFrame, FrameError> {
        self.zip_with(rhs, |a, b| a.try_sub(b))
    }

    /// Elementwise multiplication.
    pub fn mul(&self, rhs: impl Into<Rhs>) -> Result<DataFrame, FrameError> {
        self.zip_with(rhs, |a, b| a.try_mul(b))
    }

    /// Elementwise logical and, under value truthiness.
    pub fn and(&self, rhs: impl Into<Rhs>) -> Result<DataFrame, FrameError> {
        self.zip_with(rhs, |a, b| Ok(Value::Bool(a.truthy() && b.truthy())))
    }

    /// Elementwise logical or, under value truthiness.
    pub fn or(&self, rhs: impl Into<Rhs>) -> Result<DataFrame, FrameError> {
        self.zip_with(rhs, |a, b| Ok(Value::Bool(a.truthy() || b.truthy())))
    }

    /// Elementwise logical not.
    pub fn not(&self) -> DataFrame {
        self.map(|v| Value::Bool(!v.truthy()))
    }

    /// Elementwise pattern match coerced to booleans; non-string cells never
    /// match.
    pub fn matches(&self, re: &Regex) -> DataFrame {
        self.map(|v| Value::Bool(v.as_str().map(|s| re.is_match(s)).unwrap_or(false)))
    }

    /// Elementwise equality against a scalar, as a boolean frame.
    pub fn eq_elementwise(&self, value: &Value) -> DataFrame {
        self.map(|v| Value::Bool(v == value))
    }

    /// Compare the singleton-collapsed projection against a bare sequence.
    pub fn plain_eq(&self, seq: &[Value]) -> bool {
        match self.to_plain() {
            Plain::Cell(v) => seq.len() == 1 && seq[0] == v,
            Plain::Seq(s) => s == seq,
            Plain::Matrix(_) => false,
        }
    }

    /// Row-major iterator over every cell.
    pub fn cells(&self) -> impl Iterator<Item = &Value> {
        self.data.iter().flatten()
    }

    /// Row-major `(row, col)` position pairs.
    pub fn indices(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.num_cols();
        (0..self.num_rows()).flat_map(move |r| (0..cols).map(move |c| (r, c)))
    }

    /// Row-major `(row_name, col_name)` pairs.
    pub fn named_indices(&self) -> impl Iterator<Item = (&str, &str)> {
        self.row_names.iter().flat_map(move |r| {
            self.col_names.iter().map(move |c| (r.as_str(), c.as_str()))
        })
    }

    /// True if any cell satisfies the predicate.
    pub fn any(&self, pred: impl Fn(&Value) -> bool) -> bool {
        self.cells().any(|v| pred(v))
    }

    /// True if every cell satisfies the predicate.
    pub fn all(&self, pred: impl Fn(&Value) -> bool) -> bool {
        self.cells().all(|v| pred(v))
    }
}

/// Frames compare by matrix contents alone; axis names do not participate.
/// Shape mismatch is simply inequality.
impl PartialEq for DataFrame {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}
