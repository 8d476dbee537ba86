// src/frame/plain.rs

use crate::frame::DataFrame;
use crate::value::Value;
use serde::Serialize;
use std::collections::BTreeMap;

/// Plain-data projection of a frame, for serializers and other consumers
/// outside the core. Singleton dimensions collapse: 1x1 to a scalar, a
/// single row or column to a flat sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Plain {
    Cell(Value),
    Seq(Vec<Value>),
    Matrix(Vec<Vec<Value>>),
}

impl DataFrame {
    /// Project with singleton collapse.
    pub fn to_plain(&self) -> Plain {
        if self.num_rows() == 1 && self.num_cols() == 1 {
            Plain::Cell(self.data[0][0].clone())
        } else if self.num_rows() == 1 {
            Plain::Seq(self.data[0].clone())
        } else if self.num_cols() == 1 {
            Plain::Seq(self.data.iter().map(|row| row[0].clone()).collect())
        } else {
            Plain::Matrix(self.data.clone())
        }
    }

    /// Row-major matrix, dimensions always preserved.
    pub fn to_matrix(&self) -> Vec<Vec<Value>> {
        self.data.clone()
    }

    /// Rows as column-name → value mappings. Row names are dropped.
    pub fn rows(&self) -> Vec<BTreeMap<String, Value>> {
        self.data
            .iter()
            .map(|row| {
                self.col_names
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect()
    }

    /// Rows as `(row_name, mapping)` pairs.
    pub fn named_rows(&self) -> Vec<(String, BTreeMap<String, Value>)> {
        self.row_names
            .iter()
            .cloned()
            .zip(self.rows())
            .collect()
    }

    /// Columns as a column-name → values mapping.
    pub fn cols(&self) -> BTreeMap<String, Vec<Value>> {
        let mut cols = BTreeMap::new();
        for row in &self.data {
            for (c, value) in row.iter().enumerate() {
                cols.entry(self.col_names[c].clone())
                    .or_insert_with(Vec::new)
                    .push(value.clone());
            }
        }
        cols
    }
}
