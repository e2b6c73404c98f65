//! Header constants and structure

use super::{DType, Layout};
use crate::endian::Endianness;

/// Magic bytes identifying an npy file
pub const MAGIC: &[u8; 6] = b"\x93NUMPY";

/// The payload of every written file starts at a multiple of this many bytes
pub const ALIGNMENT: usize = 64;

/// Format version, selecting the width of the header-length field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatVersion {
    /// 2-byte header length
    V1,
    /// 4-byte header length
    V2,
}

impl FormatVersion {
    pub fn major(self) -> u8 {
        match self {
            FormatVersion::V1 => 1,
            FormatVersion::V2 => 2,
        }
    }

    /// Width in bytes of the header-length field
    pub fn length_field_size(self) -> usize {
        match self {
            FormatVersion::V1 => 2,
            FormatVersion::V2 => 4,
        }
    }

    /// Bytes preceding the header text: magic, version and length field
    pub fn prefix_size(self) -> usize {
        MAGIC.len() + 2 + self.length_field_size()
    }
}

/// Decoded header dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub dtype: DType,
    pub shape: Vec<usize>,
    pub layout: Layout,
    /// Byte order of the payload
    pub endianness: Endianness,
}

impl Header {
    /// Total number of elements, `None` on overflow
    pub fn num_elements(&self) -> Option<u64> {
        self.shape
            .iter()
            .try_fold(1u64, |acc, &dim| acc.checked_mul(dim as u64))
    }

    /// Expected payload size in bytes, `None` on overflow
    pub fn payload_size(&self) -> Option<u64> {
        self.num_elements()?
            .checked_mul(self.dtype.element_size() as u64)
    }
}
