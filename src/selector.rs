// src/selector.rs

use crate::error::FrameError;
use crate::frame::{DataFrame, Plain};
use crate::value::Value;
use regex::Regex;
use std::fmt;

/// One of the two dimensions of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

impl Axis {
    pub fn label(&self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::Col => "col",
        }
    }
}

/// A value describing which position(s) along one axis to target.
///
/// `Pos` and `Name` are the atomic forms: addressing a cell with two atomic
/// selectors reads or writes a single value instead of a sub-frame.
pub enum Selector {
    /// Single integer position. Not bounds-checked on reads; negative values
    /// are rejected on the write path before any growth happens.
    Pos(i64),
    /// Single axis name.
    Name(String),
    /// Ordered sequence of selectors, resolved recursively and concatenated.
    List(Vec<Selector>),
    /// Ordered sequence of literal values. An all-boolean sequence whose
    /// length equals the axis size is a positional mask; anything else is
    /// resolved element-wise (integers as positions, strings as names).
    Values(Vec<Value>),
    /// Contiguous span of positions.
    Range(std::ops::Range<usize>),
    /// Positional mask; length must equal the axis size.
    Mask(Vec<bool>),
    /// Every position, in axis order.
    All,
    /// No position.
    None,
    /// Positions of axis names satisfying the predicate, in axis order.
    Pred(Box<dyn Fn(&str) -> bool>),
    /// Positions of axis names matching the pattern, in axis order.
    Pattern(Regex),
    /// Another frame's values, reduced to a 1-D sequence and resolved as
    /// `Values`. The frame must have a singleton dimension.
    Frame(DataFrame),
}

impl Selector {
    /// Atomic selectors address a single cell rather than a sub-frame.
    pub fn is_atomic(&self) -> bool {
        matches!(self, Selector::Pos(_) | Selector::Name(_))
    }

    /// Compile a regex pattern selector.
    pub fn pattern(pattern: &str) -> Result<Self, FrameError> {
        Regex::new(pattern)
            .map(Selector::Pattern)
            .map_err(|e| FrameError::InvalidArgument(format!("bad pattern {:?}: {}", pattern, e)))
    }

    /// Wrap a predicate over axis names.
    pub fn pred(f: impl Fn(&str) -> bool + 'static) -> Self {
        Selector::Pred(Box::new(f))
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Pos(i) => write!(f, "Pos({})", i),
            Selector::Name(s) => write!(f, "Name({:?})", s),
            Selector::List(v) => write!(f, "List({:?})", v),
            Selector::Values(v) => write!(f, "Values({:?})", v),
            Selector::Range(r) => write!(f, "Range({:?})", r),
            Selector::Mask(m) => write!(f, "Mask({:?})", m),
            Selector::All => write!(f, "All"),
            Selector::None => write!(f, "None"),
            Selector::Pred(_) => write!(f, "Pred(..)"),
            Selector::Pattern(re) => write!(f, "Pattern({:?})", re.as_str()),
            Selector::Frame(d) => write!(f, "Frame({}x{})", d.num_rows(), d.num_cols()),
        }
    }
}

impl DataFrame {
    /// Resolve a selector into concrete positions along one axis.
    ///
    /// `Ok(None)` means "no match" (absent name, `Selector::None`), a valid
    /// outcome on the read path. Returned positions are not bounds-checked;
    /// the read path turns out-of-range positions into nulls and the write
    /// path runs growth before resolution.
    pub(crate) fn resolve(
        &self,
        axis: Axis,
        selector: &Selector,
    ) -> Result<Option<Vec<i64>>, FrameError> {
        match selector {
            Selector::Pos(i) => Ok(Some(vec![*i])),
            Selector::Name(name) => Ok(self
                .axis_index(axis)
                .lookup(name)
                .map(|p| vec![p as i64])),
            Selector::List(selectors) => {
                let mut out = Vec::new();
                for sel in selectors {
                    match self.resolve(axis, sel)? {
                        Some(positions) => out.extend(positions),
                        None => return Ok(None),
                    }
                }
                Ok(Some(out))
            }
            Selector::Values(values) => self.resolve_values(axis, values),
            Selector::Range(range) => Ok(Some(range.clone().map(|i| i as i64).collect())),
            Selector::Mask(mask) => {
                if mask.len() != self.axis_len(axis) {
                    return Err(FrameError::InvalidArgument(format!(
                        "mask length {} does not match {} count {}",
                        mask.len(),
                        axis.label(),
                        self.axis_len(axis)
                    )));
                }
                Ok(Some(mask_positions(mask)))
            }
            Selector::All => Ok(Some((0..self.axis_len(axis) as i64).collect())),
            Selector::None => Ok(None),
            Selector::Pred(pred) => Ok(Some(
                self.axis_names(axis)
                    .iter()
                    .enumerate()
                    .filter(|(_, name)| pred(name))
                    .map(|(pos, _)| pos as i64)
                    .collect(),
            )),
            Selector::Pattern(re) => Ok(Some(
                self.axis_names(axis)
                    .iter()
                    .enumerate()
                    .filter(|(_, name)| re.is_match(name))
                    .map(|(pos, _)| pos as i64)
                    .collect(),
            )),
            Selector::Frame(frame) => {
                let values = match frame.to_plain() {
                    Plain::Cell(v) => vec![v],
                    Plain::Seq(v) => v,
                    Plain::Matrix(_) => {
                        return Err(FrameError::InvalidArgument(
                            "selector frame must have a singleton dimension".to_string(),
                        ))
                    }
                };
                self.resolve_values(axis, &values)
            }
        }
    }

    /// Literal value sequences: mask interpretation only for an all-boolean
    /// sequence exactly matching a non-empty axis; 0/1 integers never mask.
    fn resolve_values(
        &self,
        axis: Axis,
        values: &[Value],
    ) -> Result<Option<Vec<i64>>, FrameError> {
        let axis_size = self.axis_len(axis);
        if axis_size > 0
            && values.len() == axis_size
            && values.iter().all(|v| matches!(v, Value::Bool(_)))
        {
            let mask: Vec<bool> = values
                .iter()
                .map(|v| matches!(v, Value::Bool(true)))
                .collect();
            return Ok(Some(mask_positions(&mask)));
        }

        let mut out = Vec::with_capacity(values.len());
        for value in values {
            match value {
                Value::Int(i) => out.push(*i),
                Value::String(name) => match self.axis_index(axis).lookup(name) {
                    Some(pos) => out.push(pos as i64),
                    None => return Ok(None),
                },
                other => {
                    return Err(FrameError::InvalidArgument(format!(
                        "cannot select {} by value {:?}",
                        axis.label(),
                        other
                    )))
                }
            }
        }
        Ok(Some(out))
    }
}

fn mask_positions(mask: &[bool]) -> Vec<i64> {
    mask.iter()
        .enumerate()
        .filter(|(_, keep)| **keep)
        .map(|(pos, _)| pos as i64)
        .collect()
}

impl From<i64> for Selector {
    fn from(v: i64) -> Self {
        Selector::Pos(v)
    }
}

impl From<i32> for Selector {
    fn from(v: i32) -> Self {
        Selector::Pos(v as i64)
    }
}

impl From<usize> for Selector {
    fn from(v: usize) -> Self {
        Selector::Pos(v as i64)
    }
}

impl From<&str> for Selector {
    fn from(v: &str) -> Self {
        Selector::Name(v.to_string())
    }
}

impl From<String> for Selector {
    fn from(v: String) -> Self {
        Selector::Name(v)
    }
}

impl From<bool> for Selector {
    fn from(v: bool) -> Self {
        if v {
            Selector::All
        } else {
            Selector::None
        }
    }
}

impl From<std::ops::Range<usize>> for Selector {
    fn from(r: std::ops::Range<usize>) -> Self {
        Selector::Range(r)
    }
}

impl From<std::ops::RangeInclusive<usize>> for Selector {
    fn from(r: std::ops::RangeInclusive<usize>) -> Self {
        Selector::Range(*r.start()..*r.end() + 1)
    }
}

impl From<Vec<&str>> for Selector {
    fn from(v: Vec<&str>) -> Self {
        Selector::List(v.into_iter().map(Selector::from).collect())
    }
}

impl From<Vec<String>> for Selector {
    fn from(v: Vec<String>) -> Self {
        Selector::List(v.into_iter().map(Selector::from).collect())
    }
}

impl From<Vec<usize>> for Selector {
    fn from(v: Vec<usize>) -> Self {
        Selector::List(v.into_iter().map(Selector::from).collect())
    }
}

impl From<Vec<i32>> for Selector {
    fn from(v: Vec<i32>) -> Self {
        Selector::List(v.into_iter().map(Selector::from).collect())
    }
}

impl From<Vec<i64>> for Selector {
    fn from(v: Vec<i64>) -> Self {
        Selector::List(v.into_iter().map(Selector::from).collect())
    }
}

impl From<Vec<bool>> for Selector {
    fn from(v: Vec<bool>) -> Self {
        Selector::Mask(v)
    }
}

impl From<Vec<Value>> for Selector {
    fn from(v: Vec<Value>) -> Self {
        Selector::Values(v)
    }
}

impl From<Regex> for Selector {
    fn from(re: Regex) -> Self {
        Selector::Pattern(re)
    }
}

impl From<&DataFrame> for Selector {
    fn from(frame: &DataFrame) -> Self {
        Selector::Frame(frame.clone())
    }
}

impl From<DataFrame> for Selector {
    fn from(frame: DataFrame) -> Self {
        Selector::Frame(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_forms() {
        assert!(Selector::from(3).is_atomic());
        assert!(Selector::from("snake").is_atomic());
        assert!(!Selector::from(vec!["snake"]).is_atomic());
        assert!(!Selector::All.is_atomic());
    }

    #[test]
    fn test_bool_conversion() {
        assert!(matches!(Selector::from(true), Selector::All));
        assert!(matches!(Selector::from(false), Selector::None));
    }

    #[test]
    fn test_inclusive_range_conversion() {
        match Selector::from(1..=2) {
            Selector::Range(r) => assert_eq!(r, 1..3),
            other => panic!("unexpected selector {:?}", other),
        }
    }

    #[test]
    fn test_bad_pattern() {
        assert!(Selector::pattern("(").is_err());
        assert!(Selector::pattern("nak").is_ok());
    }
}
