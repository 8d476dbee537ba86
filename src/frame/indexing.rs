// src/frame/indexing.rs

use crate::error::FrameError;
use crate::frame::DataFrame;
use crate::selector::{Axis, Selector};
use crate::value::Value;

/// Result of a read: a single cell for atomic selector pairs, a sub-frame
/// otherwise. "No match" and empty selections read as `Cell(Null)`, never as
/// an empty frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Cell(Value),
    Frame(DataFrame),
}

impl Selection {
    pub fn is_null(&self) -> bool {
        matches!(self, Selection::Cell(Value::Null))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Selection::Cell(v) => Some(v),
            Selection::Frame(_) => None,
        }
    }

    pub fn as_frame(&self) -> Option<&DataFrame> {
        match self {
            Selection::Cell(_) => None,
            Selection::Frame(f) => Some(f),
        }
    }

    pub fn into_frame(self) -> Option<DataFrame> {
        match self {
            Selection::Cell(_) => None,
            Selection::Frame(f) => Some(f),
        }
    }
}

impl PartialEq<Value> for Selection {
    fn eq(&self, other: &Value) -> bool {
        matches!(self, Selection::Cell(v) if v == other)
    }
}

impl PartialEq<DataFrame> for Selection {
    fn eq(&self, other: &DataFrame) -> bool {
        matches!(self, Selection::Frame(f) if f == other)
    }
}

/// Right-hand side of a slice write. A bare sequence is unrepresentable by
/// design; callers wrap one in a single-row or single-column frame first.
#[derive(Debug, Clone)]
pub enum Assign {
    Scalar(Value),
    Frame(DataFrame),
}

impl From<Value> for Assign {
    fn from(v: Value) -> Self {
        Assign::Scalar(v)
    }
}

impl From<i64> for Assign {
    fn from(v: i64) -> Self {
        Assign::Scalar(v.into())
    }
}

impl From<i32> for Assign {
    fn from(v: i32) -> Self {
        Assign::Scalar(v.into())
    }
}

impl From<f64> for Assign {
    fn from(v: f64) -> Self {
        Assign::Scalar(v.into())
    }
}

impl From<&str> for Assign {
    fn from(v: &str) -> Self {
        Assign::Scalar(v.into())
    }
}

impl From<bool> for Assign {
    fn from(v: bool) -> Self {
        Assign::Scalar(v.into())
    }
}

impl From<DataFrame> for Assign {
    fn from(f: DataFrame) -> Self {
        Assign::Frame(f)
    }
}

impl From<&DataFrame> for Assign {
    fn from(f: &DataFrame) -> Self {
        Assign::Frame(f.clone())
    }
}

impl DataFrame {
    /// Read the slice addressed by a selector pair.
    ///
    /// Two atomic selectors read a single cell (`Cell(Null)` when either side
    /// has no match or is out of range). Any other combination reads a new,
    /// fully independent sub-frame in resolved order, with names copied from
    /// the source; an empty resolution reads as `Cell(Null)`.
    pub fn get(
        &self,
        row: impl Into<Selector>,
        col: impl Into<Selector>,
    ) -> Result<Selection, FrameError> {
        let row = row.into();
        let col = col.into();
        let atomic = row.is_atomic() && col.is_atomic();
        let rows = self.resolve(Axis::Row, &row)?;
        let cols = self.resolve(Axis::Col, &col)?;
        if atomic {
            return Ok(match (rows, cols) {
                (Some(rows), Some(cols)) => Selection::Cell(self.cell_or_null(rows[0], cols[0])),
                _ => Selection::Cell(Value::Null),
            });
        }
        match (rows, cols) {
            (Some(rows), Some(cols)) if !rows.is_empty() && !cols.is_empty() => {
                Ok(Selection::Frame(self.slice(&rows, &cols)))
            }
            _ => Ok(Selection::Cell(Value::Null)),
        }
    }

    /// Write the slice addressed by a selector pair.
    ///
    /// Growth runs first: out-of-range integer and unknown-name selectors
    /// enlarge the frame so resolution succeeds. An empty resolved axis is an
    /// error, a scalar broadcasts over the whole region, and a frame value
    /// must match the region's shape exactly.
    pub fn set(
        &mut self,
        row: impl Into<Selector>,
        col: impl Into<Selector>,
        value: impl Into<Assign>,
    ) -> Result<(), FrameError> {
        let row = row.into();
        let col = col.into();
        self.expand_to_fit(&row, &col)?;

        let rows = self.checked_positions(Axis::Row, &row)?;
        let cols = self.checked_positions(Axis::Col, &col)?;

        match value.into() {
            Assign::Scalar(v) => {
                for &r in &rows {
                    for &c in &cols {
                        self.data[r][c] = v.clone();
                    }
                }
            }
            Assign::Frame(frame) => {
                if frame.num_rows() != rows.len() || frame.num_cols() != cols.len() {
                    return Err(FrameError::IncompatibleDimension(format!(
                        "target slice is {}x{}, value is {}x{}",
                        rows.len(),
                        cols.len(),
                        frame.num_rows(),
                        frame.num_cols()
                    )));
                }
                for (ri, &r) in rows.iter().enumerate() {
                    for (ci, &c) in cols.iter().enumerate() {
                        self.data[r][c] = frame.data[ri][ci].clone();
                    }
                }
            }
        }
        Ok(())
    }

    fn cell_or_null(&self, row: i64, col: i64) -> Value {
        if row < 0 || col < 0 {
            return Value::Null;
        }
        self.value_at(row as usize, col as usize)
            .cloned()
            .unwrap_or(Value::Null)
    }

    /// Cartesian-product copy of the resolved region. Out-of-range positions
    /// read as null cells under auto-generated names.
    pub(crate) fn slice(&self, rows: &[i64], cols: &[i64]) -> DataFrame {
        let row_names = copied_names(&self.row_names, rows);
        let col_names = copied_names(&self.col_names, cols);
        let data = rows
            .iter()
            .map(|&r| cols.iter().map(|&c| self.cell_or_null(r, c)).collect())
            .collect();
        DataFrame::assemble(data, row_names, col_names)
    }

    /// Write-path resolution: no-match and empty axes are dimension errors,
    /// and every position must be in range by now (growth already ran; only
    /// non-growing forms such as ranges can still miss).
    fn checked_positions(&self, axis: Axis, selector: &Selector) -> Result<Vec<usize>, FrameError> {
        let positions = self.resolve(axis, selector)?.unwrap_or_default();
        if positions.is_empty() {
            return Err(FrameError::IncompatibleDimension(format!(
                "target slice has no {}s",
                axis.label()
            )));
        }
        let len = self.axis_len(axis) as i64;
        positions
            .into_iter()
            .map(|p| {
                if p < 0 || p >= len {
                    Err(FrameError::OutOfRange(p))
                } else {
                    Ok(p as usize)
                }
            })
            .collect()
    }

    /// Pre-expand the frame so the write-path selectors resolve. Element-wise
    /// and left to right for sequence forms; growth already performed is kept
    /// when a later element fails.
    fn expand_to_fit(&mut self, row: &Selector, col: &Selector) -> Result<(), FrameError> {
        self.expand_axis(Axis::Row, row)?;
        self.expand_axis(Axis::Col, col)
    }

    fn expand_axis(&mut self, axis: Axis, selector: &Selector) -> Result<(), FrameError> {
        match selector {
            Selector::Pos(p) if *p < 0 => Err(FrameError::OutOfRange(*p)),
            Selector::Pos(p) => {
                while self.axis_len(axis) <= *p as usize {
                    self.grow_one(axis, None)?;
                }
                Ok(())
            }
            Selector::Name(name) => {
                if self.axis_index(axis).lookup(name).is_none() {
                    self.grow_one(axis, Some(name.as_str()))?;
                }
                Ok(())
            }
            Selector::List(selectors) => {
                for sel in selectors {
                    self.expand_axis(axis, sel)?;
                }
                Ok(())
            }
            Selector::Values(values) => {
                // a mask-shaped sequence contains only booleans, which the
                // element recursion skips, so no special case is needed here
                for value in values {
                    match value {
                        Value::Int(p) => self.expand_axis(axis, &Selector::Pos(*p))?,
                        Value::String(name) => {
                            self.expand_axis(axis, &Selector::Name(name.clone()))?
                        }
                        _ => {}
                    }
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn grow_one(&mut self, axis: Axis, name: Option<&str>) -> Result<(), FrameError> {
        match axis {
            Axis::Row => {
                let row = vec![Value::Null; self.num_cols()];
                self.add_row(row, name)
            }
            Axis::Col => self.add_col(name),
        }
    }
}

fn copied_names(source: &[String], positions: &[i64]) -> Vec<String> {
    positions
        .iter()
        .enumerate()
        .map(|(target, &p)| {
            usize::try_from(p)
                .ok()
                .and_then(|p| source.get(p).cloned())
                .unwrap_or_else(|| format!("_{}", target))
        })
        .collect()
}
