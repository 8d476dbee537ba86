// src/lib.rs

//! In-memory two-dimensional labeled data container.
//!
//! A [`DataFrame`] is addressable simultaneously by integer position and by
//! string name on both axes, with heterogeneous selector forms (position,
//! name, list, range, boolean mask, pattern, predicate, or another frame's
//! values) for reading and writing rectangular sub-regions. Writes grow the
//! frame on out-of-range positions and unknown names.
//!
//! ```
//! use dataframe::{DataFrame, Value};
//!
//! let mut d = DataFrame::new(
//!     vec![
//!         vec![Value::Int(10), Value::Int(1)],
//!         vec![Value::Int(3), Value::Int(10)],
//!     ],
//!     vec!["snake".into(), "giraffe".into()],
//!     vec!["length".into(), "height".into()],
//! )
//! .unwrap();
//!
//! assert_eq!(d.get("snake", "length").unwrap(), Value::Int(10));
//! assert_eq!(d.get("giraffe", 1).unwrap(), Value::Int(10));
//!
//! // writing to an out-of-range position grows the frame
//! d.set(2, 5, 42).unwrap();
//! assert_eq!(d.size(), (3, 6));
//! ```

pub mod error;
pub mod frame;
pub mod index;
pub mod selector;
pub mod value;

pub use error::FrameError;
pub use frame::{Assign, DataFrame, NameCol, Plain, Rhs, Selection};
pub use index::NameIndex;
pub use selector::{Axis, Selector};
pub use value::Value;
