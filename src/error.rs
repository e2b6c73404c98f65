//! Error types for nparray

use crate::types::DType;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::io;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, NpyError>;

/// Coarse classification of an [`NpyError`], for callers that only need to branch on the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty shape, or shape incompatible with the element count
    Shape,
    /// Wrong index arity or an index past the extent of its axis
    Index,
    /// Descriptor token outside the supported set
    UnsupportedType,
    /// File element kind differs from the requested one
    DTypeMismatch,
    /// Structurally invalid file
    MalformedFile,
    /// Byte swap requested for an element width without a swap routine
    UnsupportedWidth,
    /// Underlying I/O failure
    Io,
}

/// nparray error type
#[derive(Debug)]
pub enum NpyError {
    /// Shape is empty, overflows, or does not match the number of elements
    Shape(Cow<'static, str>),
    /// Number of indices differs from the array rank
    IndexArity { expected: usize, actual: usize },
    /// Index is past the extent of its axis
    IndexOutOfRange {
        axis: usize,
        index: usize,
        extent: usize,
    },
    /// Unknown descriptor token
    UnsupportedType(String),
    /// Element kind in the file differs from the requested one
    DTypeMismatch { expected: DType, actual: DType },
    /// Invalid magic bytes
    InvalidMagic,
    /// Unsupported format version
    UnsupportedVersion { major: u8, minor: u8 },
    /// Header text could not be parsed
    MalformedHeader {
        message: Cow<'static, str>,
        position: usize,
    },
    /// Header text is not valid UTF-8
    InvalidUtf8,
    /// Fewer bytes available than required
    DataSizeMismatch { expected: u64, actual: u64 },
    /// No swap routine for this element width
    UnsupportedWidth(usize),
    /// Wrapped I/O error
    Io(io::Error),
}

impl NpyError {
    pub(crate) fn shape(message: impl Into<Cow<'static, str>>) -> Self {
        NpyError::Shape(message.into())
    }

    pub(crate) fn header(message: impl Into<Cow<'static, str>>, position: usize) -> Self {
        NpyError::MalformedHeader {
            message: message.into(),
            position,
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            NpyError::Shape(_) => ErrorKind::Shape,
            NpyError::IndexArity { .. } | NpyError::IndexOutOfRange { .. } => ErrorKind::Index,
            NpyError::UnsupportedType(_) => ErrorKind::UnsupportedType,
            NpyError::DTypeMismatch { .. } => ErrorKind::DTypeMismatch,
            NpyError::InvalidMagic
            | NpyError::UnsupportedVersion { .. }
            | NpyError::MalformedHeader { .. }
            | NpyError::InvalidUtf8
            | NpyError::DataSizeMismatch { .. } => ErrorKind::MalformedFile,
            NpyError::UnsupportedWidth(_) => ErrorKind::UnsupportedWidth,
            NpyError::Io(_) => ErrorKind::Io,
        }
    }
}

impl fmt::Display for NpyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NpyError::Shape(message) => write!(f, "Invalid shape: {}", message),
            NpyError::IndexArity { expected, actual } => write!(
                f,
                "Improper number of indices: expected {}, got {}",
                expected, actual
            ),
            NpyError::IndexOutOfRange {
                axis,
                index,
                extent,
            } => write!(
                f,
                "Index {} out of range for axis {} with extent {}",
                index, axis, extent
            ),
            NpyError::UnsupportedType(descr) => write!(f, "Unknown data type: {:?}", descr),
            NpyError::DTypeMismatch { expected, actual } => write!(
                f,
                "DType mismatch: expected {:?}, file contains {:?}",
                expected, actual
            ),
            NpyError::InvalidMagic => write!(f, "Invalid magic bytes, not an npy file"),
            NpyError::UnsupportedVersion { major, minor } => {
                write!(f, "Unsupported npy version: {}.{}", major, minor)
            }
            NpyError::MalformedHeader { message, position } => {
                write!(f, "Malformed header: {} at position {}", message, position)
            }
            NpyError::InvalidUtf8 => write!(f, "Invalid UTF-8 in header"),
            NpyError::DataSizeMismatch { expected, actual } => write!(
                f,
                "Data size mismatch: expected {} bytes, got {}",
                expected, actual
            ),
            NpyError::UnsupportedWidth(width) => {
                write!(f, "Cannot swap bytes for elements of size {}", width)
            }
            NpyError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl Error for NpyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NpyError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for NpyError {
    fn from(e: io::Error) -> Self {
        NpyError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(NpyError::shape("empty").kind(), ErrorKind::Shape);
        assert_eq!(
            NpyError::IndexArity {
                expected: 2,
                actual: 1
            }
            .kind(),
            ErrorKind::Index
        );
        assert_eq!(NpyError::InvalidMagic.kind(), ErrorKind::MalformedFile);
        assert_eq!(NpyError::header("bad", 3).kind(), ErrorKind::MalformedFile);
        assert_eq!(NpyError::UnsupportedWidth(3).kind(), ErrorKind::UnsupportedWidth);
        assert_eq!(
            NpyError::from(io::Error::new(io::ErrorKind::NotFound, "gone")).kind(),
            ErrorKind::Io
        );
    }

    #[test]
    fn display_mentions_details() {
        let err = NpyError::DTypeMismatch {
            expected: DType::I32,
            actual: DType::F64,
        };
        assert!(err.to_string().contains("DType mismatch"));

        let err = NpyError::header("expected ':'", 12);
        assert_eq!(
            err.to_string(),
            "Malformed header: expected ':' at position 12"
        );
    }

    #[test]
    fn io_error_is_source() {
        let err = NpyError::from(io::Error::new(io::ErrorKind::Other, "disk"));
        assert!(err.source().is_some());
        assert!(NpyError::InvalidUtf8.source().is_none());
    }
}
