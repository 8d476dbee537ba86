// src/frame.rs

mod elementwise;
mod indexing;
mod plain;
mod structural;

pub use elementwise::Rhs;
pub use indexing::{Assign, Selection};
pub use plain::Plain;

use crate::error::FrameError;
use crate::index::NameIndex;
use crate::selector::Axis;
use crate::value::Value;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Designates one column of an ingested matrix to be consumed as row names
/// instead of data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameCol {
    Pos(usize),
    Name(String),
}

/// Two-dimensional labeled container, addressable by integer position and by
/// string name on both axes.
///
/// Invariants held between public calls: the matrix is rectangular,
/// `data.len() == row_names.len()`, every row is `col_names.len()` wide, and
/// each name index agrees with its axis-name sequence.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DataFrame {
    pub(crate) data: Vec<Vec<Value>>,
    pub(crate) row_names: Vec<String>,
    pub(crate) col_names: Vec<String>,
    #[serde(skip)]
    pub(crate) row_index: NameIndex,
    #[serde(skip)]
    pub(crate) col_index: NameIndex,
}

impl DataFrame {
    /// Build from a raw matrix with optional (possibly short) axis names.
    /// Missing names are filled in as `"_<position>"`.
    pub fn new(
        data: Vec<Vec<Value>>,
        row_names: Vec<String>,
        col_names: Vec<String>,
    ) -> Result<Self, FrameError> {
        let num_cols = match data.first() {
            Some(first) => first.len(),
            None => col_names.len(),
        };
        for (r, row) in data.iter().enumerate() {
            if row.len() != num_cols {
                return Err(FrameError::IncompatibleDimension(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    num_cols
                )));
            }
        }
        let num_rows = data.len();
        let row_names = fill_names(row_names, num_rows, Axis::Row)?;
        let col_names = fill_names(col_names, num_cols, Axis::Col)?;
        Ok(Self::assemble(data, row_names, col_names))
    }

    /// Build from an ordered sequence of name→value mappings, one per row.
    /// The column set is the union of all keys, in ascending name order.
    pub fn from_records(
        records: Vec<BTreeMap<String, Value>>,
        row_names: Option<Vec<String>>,
    ) -> Result<Self, FrameError> {
        let mut frame = DataFrame::default();
        for (r, record) in records.into_iter().enumerate() {
            let name = row_names
                .as_ref()
                .and_then(|names| names.get(r))
                .map(|s| s.as_str());
            frame.add_row_map(record, name)?;
        }
        Ok(frame)
    }

    /// Build from a mapping of row name → (column name → value). Row and
    /// column names end up in ascending order; missing cells are null.
    pub fn from_nested(
        rows: BTreeMap<String, BTreeMap<String, Value>>,
    ) -> Result<Self, FrameError> {
        let mut col_set = BTreeSet::new();
        for row in rows.values() {
            col_set.extend(row.keys().cloned());
        }
        let col_names: Vec<String> = col_set.into_iter().collect();
        let mut row_names = Vec::with_capacity(rows.len());
        let mut data = Vec::with_capacity(rows.len());
        for (name, row) in rows {
            data.push(
                col_names
                    .iter()
                    .map(|c| row.get(c).cloned().unwrap_or(Value::Null))
                    .collect(),
            );
            row_names.push(name);
        }
        Ok(Self::assemble(data, row_names, col_names))
    }

    /// Ingestion contract: a plain matrix, optional ordered column names, and
    /// an optional designation of one column to be consumed as row names.
    /// Header order is preserved. Designating the name column by name without
    /// headers is an error.
    pub fn from_matrix(
        matrix: Vec<Vec<Value>>,
        headers: Option<Vec<String>>,
        name_col: Option<NameCol>,
    ) -> Result<Self, FrameError> {
        let mut frame = DataFrame::default();
        match headers {
            Some(headers) => {
                let name_pos = match &name_col {
                    Some(NameCol::Pos(p)) => {
                        if *p >= headers.len() {
                            return Err(FrameError::InvalidArgument(format!(
                                "name column {} out of {} headers",
                                p,
                                headers.len()
                            )));
                        }
                        Some(*p)
                    }
                    Some(NameCol::Name(n)) => Some(
                        headers.iter().position(|h| h == n).ok_or_else(|| {
                            FrameError::InvalidArgument(format!("no header named {:?}", n))
                        })?,
                    ),
                    None => None,
                };
                for (c, header) in headers.iter().enumerate() {
                    if name_pos != Some(c) {
                        frame.add_col(Some(header.as_str()))?;
                    }
                }
                for (r, mut row) in matrix.into_iter().enumerate() {
                    if row.len() != headers.len() {
                        return Err(FrameError::IncompatibleDimension(format!(
                            "row {} has {} cells, expected {}",
                            r,
                            row.len(),
                            headers.len()
                        )));
                    }
                    let name = name_pos.map(|p| stringify(row.remove(p)));
                    frame.add_row(row, name.as_deref())?;
                }
            }
            None => {
                let name_pos = match name_col {
                    Some(NameCol::Pos(p)) => Some(p),
                    Some(NameCol::Name(_)) => {
                        return Err(FrameError::InvalidArgument(
                            "name column designated by name requires headers".to_string(),
                        ))
                    }
                    None => None,
                };
                let width = matrix.first().map(|row| row.len()).unwrap_or(0);
                if let Some(p) = name_pos {
                    if !matrix.is_empty() && p >= width {
                        return Err(FrameError::InvalidArgument(format!(
                            "name column {} out of {} columns",
                            p, width
                        )));
                    }
                }
                let data_width = match name_pos {
                    Some(_) if width > 0 => width - 1,
                    _ => width,
                };
                for _ in 0..data_width {
                    frame.add_col(None)?;
                }
                for (r, mut row) in matrix.into_iter().enumerate() {
                    if row.len() != width {
                        return Err(FrameError::IncompatibleDimension(format!(
                            "row {} has {} cells, expected {}",
                            r,
                            row.len(),
                            width
                        )));
                    }
                    let name = name_pos.map(|p| stringify(row.remove(p)));
                    frame.add_row(row, name.as_deref())?;
                }
            }
        }
        Ok(frame)
    }

    /// Internal constructor for data whose invariants hold by construction
    /// (slices, transposes, permutations). Rebuilds both indexes.
    pub(crate) fn assemble(
        data: Vec<Vec<Value>>,
        row_names: Vec<String>,
        col_names: Vec<String>,
    ) -> Self {
        let mut frame = Self {
            data,
            row_names,
            col_names,
            row_index: NameIndex::new(),
            col_index: NameIndex::new(),
        };
        frame.reindex();
        frame
    }

    /// Rebuild both name indexes from the current axis-name sequences.
    pub(crate) fn reindex(&mut self) {
        self.row_index.rebuild(&self.row_names);
        self.col_index.rebuild(&self.col_names);
    }

    pub fn num_rows(&self) -> usize {
        self.data.len()
    }

    pub fn num_cols(&self) -> usize {
        self.col_names.len()
    }

    /// (rows, cols)
    pub fn size(&self) -> (usize, usize) {
        (self.num_rows(), self.num_cols())
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn row_names(&self) -> &[String] {
        &self.row_names
    }

    pub fn col_names(&self) -> &[String] {
        &self.col_names
    }

    /// Raw positional access; None when out of range.
    pub fn value_at(&self, row: usize, col: usize) -> Option<&Value> {
        self.data.get(row).and_then(|r| r.get(col))
    }

    /// Single named column as an N x 1 frame. Unlike selector reads, an
    /// unknown name here is an error, not a null result.
    pub fn column(&self, name: &str) -> Result<DataFrame, FrameError> {
        let c = self
            .col_index
            .lookup(name)
            .ok_or_else(|| FrameError::InvalidArgument(format!("no column named {:?}", name)))?;
        let data = self.data.iter().map(|row| vec![row[c].clone()]).collect();
        Ok(Self::assemble(
            data,
            self.row_names.clone(),
            vec![self.col_names[c].clone()],
        ))
    }

    pub(crate) fn axis_len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.num_rows(),
            Axis::Col => self.num_cols(),
        }
    }

    pub(crate) fn axis_names(&self, axis: Axis) -> &[String] {
        match axis {
            Axis::Row => &self.row_names,
            Axis::Col => &self.col_names,
        }
    }

    pub(crate) fn axis_index(&self, axis: Axis) -> &NameIndex {
        match axis {
            Axis::Row => &self.row_index,
            Axis::Col => &self.col_index,
        }
    }
}

fn fill_names(
    mut names: Vec<String>,
    len: usize,
    axis: Axis,
) -> Result<Vec<String>, FrameError> {
    if names.len() > len {
        return Err(FrameError::IncompatibleDimension(format!(
            "{} {} names for {} {}s",
            names.len(),
            axis.label(),
            len,
            axis.label()
        )));
    }
    for pos in names.len()..len {
        names.push(format!("_{}", pos));
    }
    Ok(names)
}

fn stringify(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
