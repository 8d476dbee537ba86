// src/frame/structural.rs

use crate::error::FrameError;
use crate::frame::DataFrame;
use crate::value::Value;
use itertools::Itertools;
use std::cmp::Ordering;
use std::collections::BTreeMap;

impl DataFrame {
    /// Append a row given as an ordered value sequence. The length must equal
    /// the current column count. A missing name auto-names as `"_<n>"`.
    pub fn add_row(&mut self, values: Vec<Value>, name: Option<&str>) -> Result<(), FrameError> {
        if values.len() != self.num_cols() {
            return Err(FrameError::IncompatibleDimension(format!(
                "adding row of length {} to frame with {} cols",
                values.len(),
                self.num_cols()
            )));
        }
        let name = match name {
            Some(name) => name.to_string(),
            None => format!("_{}", self.row_names.len()),
        };
        if self.row_index.contains(&name) {
            return Err(FrameError::DuplicateId(name));
        }
        self.data.push(values);
        self.row_names.push(name.clone());
        self.row_index.insert(&name, self.row_names.len() - 1);
        Ok(())
    }

    /// Append a row given as a column-name → value mapping. Unknown keys
    /// create their columns first (in ascending name order, null-filled for
    /// existing rows); current columns absent from the mapping get null.
    ///
    /// A missing or `"_"`-prefixed name is auto-named, so rows that were
    /// auto-named once keep getting fresh names when re-appended elsewhere.
    pub fn add_row_map(
        &mut self,
        values: BTreeMap<String, Value>,
        name: Option<&str>,
    ) -> Result<(), FrameError> {
        let name = match name {
            Some(name) if !name.starts_with('_') => name.to_string(),
            _ => format!("_{}", self.row_names.len()),
        };
        if self.row_index.contains(&name) {
            return Err(FrameError::DuplicateId(name));
        }

        let new_cols: Vec<String> = values
            .keys()
            .filter(|k| !self.col_index.contains(k))
            .cloned()
            .collect();
        for col in &new_cols {
            self.add_col(Some(col.as_str()))?;
        }

        let row = self
            .col_names
            .iter()
            .map(|c| values.get(c).cloned().unwrap_or(Value::Null))
            .collect();
        self.add_row(row, Some(name.as_str()))
    }

    /// Append a null-filled column. A missing name auto-names as `"_<n>"`.
    pub fn add_col(&mut self, name: Option<&str>) -> Result<(), FrameError> {
        let name = match name {
            Some(name) => name.to_string(),
            None => format!("_{}", self.col_names.len()),
        };
        if self.col_index.contains(&name) {
            return Err(FrameError::DuplicateId(name));
        }
        self.col_names.push(name.clone());
        self.col_index.insert(&name, self.col_names.len() - 1);
        for row in &mut self.data {
            row.push(Value::Null);
        }
        Ok(())
    }

    /// Row-wise concatenation: every row of `other` is re-added through the
    /// mapping path, so columns align by name and gaps fill with null.
    pub fn append(&mut self, other: &DataFrame) -> Result<(), FrameError> {
        for (r, name) in other.row_names.iter().enumerate() {
            let record: BTreeMap<String, Value> = other
                .col_names
                .iter()
                .cloned()
                .zip(other.data[r].iter().cloned())
                .collect();
            self.add_row_map(record, Some(name.as_str()))?;
        }
        Ok(())
    }

    /// Column-wise concatenation. Row-name sequences must match exactly;
    /// column names must be disjoint. `other`'s columns land on the right,
    /// rows paired positionally.
    pub fn merge_by_row(&mut self, other: &DataFrame) -> Result<(), FrameError> {
        if self.row_names != other.row_names {
            return Err(FrameError::IncompatibleDimension(
                "row names of the merged frames differ".to_string(),
            ));
        }
        let overlap: Vec<&String> = self
            .col_names
            .iter()
            .chain(other.col_names.iter())
            .duplicates()
            .collect();
        if !overlap.is_empty() {
            return Err(FrameError::DuplicateId(overlap.iter().join(", ")));
        }
        for (row, other_row) in self.data.iter_mut().zip(&other.data) {
            row.extend(other_row.iter().cloned());
        }
        for name in &other.col_names {
            self.col_names.push(name.clone());
            self.col_index.insert(name, self.col_names.len() - 1);
        }
        Ok(())
    }

    /// Independent copy with axes swapped.
    pub fn transpose(&self) -> DataFrame {
        let mut data = vec![Vec::with_capacity(self.num_rows()); self.num_cols()];
        for row in &self.data {
            for (c, value) in row.iter().enumerate() {
                data[c].push(value.clone());
            }
        }
        DataFrame::assemble(data, self.col_names.clone(), self.row_names.clone())
    }

    /// New frame with rows permuted by a comparator over single-row
    /// sub-frames. Stable; names move with their rows; source untouched.
    pub fn sort_rows(&self, cmp: impl Fn(&DataFrame, &DataFrame) -> Ordering) -> DataFrame {
        let all_cols: Vec<i64> = (0..self.num_cols() as i64).collect();
        let singles: Vec<DataFrame> = (0..self.num_rows())
            .map(|r| self.slice(&[r as i64], &all_cols))
            .collect();
        let mut order: Vec<usize> = (0..self.num_rows()).collect();
        order.sort_by(|&a, &b| cmp(&singles[a], &singles[b]));
        self.permute_rows(&order)
    }

    /// New frame with columns permuted by a comparator over single-column
    /// sub-frames. Stable; names move with their columns; source untouched.
    pub fn sort_cols(&self, cmp: impl Fn(&DataFrame, &DataFrame) -> Ordering) -> DataFrame {
        let all_rows: Vec<i64> = (0..self.num_rows() as i64).collect();
        let singles: Vec<DataFrame> = (0..self.num_cols())
            .map(|c| self.slice(&all_rows, &[c as i64]))
            .collect();
        let mut order: Vec<usize> = (0..self.num_cols()).collect();
        order.sort_by(|&a, &b| cmp(&singles[a], &singles[b]));
        self.permute_cols(&order)
    }

    /// Rows reordered by one column's values. Descending reverses the
    /// comparator, not the result, so equal runs keep their original order.
    pub fn sort_rows_by_col(
        &self,
        col_name: &str,
        ascending: bool,
    ) -> Result<DataFrame, FrameError> {
        let c = self.col_index.lookup(col_name).ok_or_else(|| {
            FrameError::InvalidArgument(format!("no column named {:?}", col_name))
        })?;
        let mut order: Vec<usize> = (0..self.num_rows()).collect();
        order.sort_by(|&a, &b| {
            let ord = self.data[a][c]
                .compare(&self.data[b][c])
                .unwrap_or(Ordering::Equal);
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        });
        Ok(self.permute_rows(&order))
    }

    /// Columns reordered by one row's values.
    pub fn sort_cols_by_row(
        &self,
        row_name: &str,
        ascending: bool,
    ) -> Result<DataFrame, FrameError> {
        let r = self
            .row_index
            .lookup(row_name)
            .ok_or_else(|| FrameError::InvalidArgument(format!("no row named {:?}", row_name)))?;
        let mut order: Vec<usize> = (0..self.num_cols()).collect();
        order.sort_by(|&a, &b| {
            let ord = self.data[r][a]
                .compare(&self.data[r][b])
                .unwrap_or(Ordering::Equal);
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        });
        Ok(self.permute_cols(&order))
    }

    /// In-place reorder of rows by ascending name order. Matrix, names and
    /// index move as one step; already-sorted frames return after an O(n)
    /// scan.
    pub fn resort_rows(&mut self) {
        if self.row_names.windows(2).all(|w| w[0] <= w[1]) {
            return;
        }
        let mut order: Vec<usize> = (0..self.num_rows()).collect();
        order.sort_by(|&a, &b| self.row_names[a].cmp(&self.row_names[b]));
        let data = order
            .iter()
            .map(|&r| std::mem::take(&mut self.data[r]))
            .collect();
        let row_names = order.iter().map(|&r| self.row_names[r].clone()).collect();
        self.data = data;
        self.row_names = row_names;
        self.row_index.rebuild(&self.row_names);
    }

    /// In-place reorder of columns by ascending name order.
    pub fn resort_cols(&mut self) {
        if self.col_names.windows(2).all(|w| w[0] <= w[1]) {
            return;
        }
        let mut order: Vec<usize> = (0..self.num_cols()).collect();
        order.sort_by(|&a, &b| self.col_names[a].cmp(&self.col_names[b]));
        for row in &mut self.data {
            let cells = order.iter().map(|&c| std::mem::take(&mut row[c])).collect();
            *row = cells;
        }
        let col_names = order.iter().map(|&c| self.col_names[c].clone()).collect();
        self.col_names = col_names;
        self.col_index.rebuild(&self.col_names);
    }

    /// Sort both axes by name order.
    pub fn resort(&mut self) {
        self.resort_rows();
        self.resort_cols();
    }

    /// Stable ascending sort by the named column, then one callback per run
    /// of consecutive equal values, in ascending value order.
    pub fn group_by(
        &self,
        col_name: &str,
        mut callback: impl FnMut(&DataFrame),
    ) -> Result<(), FrameError> {
        let c = self.col_index.lookup(col_name).ok_or_else(|| {
            FrameError::InvalidArgument(format!("no column named {:?}", col_name))
        })?;
        if self.num_rows() == 0 {
            return Ok(());
        }
        let sorted = self.sort_rows_by_col(col_name, true)?;
        let all_cols: Vec<i64> = (0..sorted.num_cols() as i64).collect();
        for (_, run) in &(0..sorted.num_rows() as i64).chunk_by(|&r| sorted.data[r as usize][c].clone())
        {
            let rows: Vec<i64> = run.collect();
            callback(&sorted.slice(&rows, &all_cols));
        }
        Ok(())
    }

    /// Prepend a common prefix to every column name, e.g. before merging a
    /// slice back into its source.
    pub fn prefix_col_names(&mut self, prefix: &str) {
        for name in &mut self.col_names {
            *name = format!("{}{}", prefix, name);
        }
        self.col_index.rebuild(&self.col_names);
    }

    fn permute_rows(&self, order: &[usize]) -> DataFrame {
        let data = order.iter().map(|&r| self.data[r].clone()).collect();
        let row_names = order.iter().map(|&r| self.row_names[r].clone()).collect();
        DataFrame::assemble(data, row_names, self.col_names.clone())
    }

    fn permute_cols(&self, order: &[usize]) -> DataFrame {
        let data = self
            .data
            .iter()
            .map(|row| order.iter().map(|&c| row[c].clone()).collect())
            .collect();
        let col_names = order.iter().map(|&c| self.col_names[c].clone()).collect();
        DataFrame::assemble(data, self.row_names.clone(), col_names)
    }
}
