//! Element kinds and their wire descriptors

use crate::error::{NpyError, Result};
use std::fmt;

/// Element kind of an array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    I8,
    U8,
    I16,
    I32,
    I64,
    U16,
    U32,
    U64,
    F32,
    F64,
    Complex64,
    Complex128,
}

impl DType {
    /// Every supported element kind
    pub const ALL: [DType; 12] = [
        DType::I8,
        DType::U8,
        DType::I16,
        DType::I32,
        DType::I64,
        DType::U16,
        DType::U32,
        DType::U64,
        DType::F32,
        DType::F64,
        DType::Complex64,
        DType::Complex128,
    ];

    /// Size in bytes of a single element
    pub fn element_size(self) -> usize {
        match self {
            DType::I8 | DType::U8 => 1,
            DType::I16 | DType::U16 => 2,
            DType::I32 | DType::U32 | DType::F32 => 4,
            DType::I64 | DType::U64 | DType::F64 | DType::Complex64 => 8,
            DType::Complex128 => 16,
        }
    }

    /// Size in bytes of one scalar component; differs from
    /// [`element_size`](Self::element_size) only for complex kinds
    pub fn scalar_size(self) -> usize {
        match self {
            DType::Complex64 => 4,
            DType::Complex128 => 8,
            other => other.element_size(),
        }
    }

    /// Descriptor token, without the byte-order marker
    pub fn descriptor(self) -> &'static str {
        match self {
            DType::I8 => "b1",
            DType::U8 => "B1",
            DType::I16 => "i2",
            DType::I32 => "i4",
            DType::I64 => "i8",
            DType::U16 => "u2",
            DType::U32 => "u4",
            DType::U64 => "u8",
            DType::F32 => "f4",
            DType::F64 => "f8",
            DType::Complex64 => "c8",
            DType::Complex128 => "c16",
        }
    }

    /// Resolve a descriptor token (without byte-order marker)
    pub fn from_descriptor(token: &str) -> Result<Self> {
        DType::ALL
            .into_iter()
            .find(|dtype| dtype.descriptor() == token)
            .ok_or_else(|| NpyError::UnsupportedType(token.to_string()))
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor())
    }
}
