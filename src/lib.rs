//! nparray - N-dimensional arrays with lossless npy persistence
//!
//! A dense array container for a closed set of numeric element kinds,
//! stored in either row-major or column-major order, that reads and writes
//! the numpy `.npy` binary format.
//!
//! # Features
//!
//! - Row-major and column-major indexing with full bounds checking
//! - npy format versions 1.0 and 2.0, payload aligned to 64 bytes
//! - Byte-order reconciliation between file and host
//! - Integer, float and complex element kinds
//! - Optional conversions to and from `ndarray` (`ndarray` feature)
//!
//! # Example
//!
//! ```rust
//! use nparray::{Layout, NpArray};
//!
//! let mut arr = NpArray::<f64>::with_layout(vec![2, 3], Layout::ColumnMajor).unwrap();
//! arr[[1, 2]] = 4.5;
//! assert_eq!(arr.linear_index(&[1, 2]).unwrap(), 5);
//!
//! // Write to bytes and read back
//! let mut bytes = Vec::new();
//! arr.write_to(&mut bytes).unwrap();
//! let back = NpArray::<f64>::read_from(&mut bytes.as_slice()).unwrap();
//! assert_eq!(back, arr);
//! ```

pub mod endian;
pub mod error;
pub mod index;
pub mod parser;
pub mod types;
pub mod writer;

#[cfg(feature = "ndarray")]
pub mod ndarray_ext;

// Re-export common types at crate root
pub use error::{ErrorKind, NpyError, Result};
pub use parser::{load, peek};
pub use types::{AnyArray, DType, Element, FormatVersion, Header, Layout, MAGIC, NpArray};
pub use writer::save;

pub use num_complex::Complex;
