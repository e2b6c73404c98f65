//! Core types for nparray

mod any;
mod array;
mod dtype;
mod element;
mod header;
mod layout;

pub use any::AnyArray;
pub use array::NpArray;
pub use dtype::DType;
pub use element::Element;
pub(crate) use element::{from_ne_bytes, to_ne_bytes};
pub use header::{ALIGNMENT, FormatVersion, Header, MAGIC};
pub use layout::Layout;
