//! Decoding of npy files
//!
//! A single linear pass: magic, version, header length, header dictionary,
//! then the payload. Byte order is reconciled with the host after reading.

mod dict;
mod primitives;

pub use dict::{Literal, parse_dict, parse_header_dict};

use crate::endian::{Endianness, swap_bytes};
use crate::error::{NpyError, Result};
use crate::types::{Element, Header, MAGIC, NpArray, from_ne_bytes};
use primitives::{take, take_vec, u8_parser, u16_le, u32_le};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub(crate) fn open(path: &Path) -> Result<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}

/// Load an array from the npy file at `path`
pub fn load<T: Element>(path: impl AsRef<Path>) -> Result<NpArray<T>> {
    let path = path.as_ref();
    log::debug!("loading npy file {}", path.display());
    read_npy(&mut open(path)?)
}

/// Decode only the header of the npy file at `path`
pub fn peek(path: impl AsRef<Path>) -> Result<Header> {
    read_header(&mut open(path.as_ref())?)
}

/// Read an array in npy format, requiring the element kind of `T`
pub fn read_npy<T: Element, R: Read>(reader: &mut R) -> Result<NpArray<T>> {
    let header = read_header(reader)?;
    read_payload(reader, &header)
}

/// Read the preamble, leaving `reader` positioned at the payload
pub fn read_header<R: Read>(reader: &mut R) -> Result<Header> {
    let magic = take::<6, R>(reader).map_err(|e| match e {
        NpyError::DataSizeMismatch { .. } => NpyError::InvalidMagic,
        e => e,
    })?;
    if &magic != MAGIC {
        return Err(NpyError::InvalidMagic);
    }

    let major = u8_parser(reader)?;
    let minor = u8_parser(reader)?;

    let header_len = match major {
        1 => u16_le(reader)? as u64,
        2 | 3 => u32_le(reader)? as u64,
        _ => return Err(NpyError::UnsupportedVersion { major, minor }),
    };

    let text = take_vec(reader, header_len)?;
    let text = std::str::from_utf8(&text).map_err(|_| NpyError::InvalidUtf8)?;
    let header = parse_header_dict(text)?;

    log::debug!(
        "read npy v{}.{} header: dtype={} shape={:?} layout={:?} byte order={:?}",
        major,
        minor,
        header.dtype,
        header.shape,
        header.layout,
        header.endianness
    );
    Ok(header)
}

/// Read the payload described by `header` into an array of `T`
pub fn read_payload<T: Element, R: Read>(reader: &mut R, header: &Header) -> Result<NpArray<T>> {
    if header.dtype != T::DTYPE {
        return Err(NpyError::DTypeMismatch {
            expected: T::DTYPE,
            actual: header.dtype,
        });
    }
    if header.shape.is_empty() {
        return Err(NpyError::shape("shape must have at least one dimension"));
    }

    let n_bytes = header
        .payload_size()
        .ok_or_else(|| NpyError::shape(format!("payload of {:?} overflows", header.shape)))?;
    let mut payload = take_vec(reader, n_bytes)?;

    if header.endianness != Endianness::host() {
        // Complex components are swapped independently so they keep their positions
        let width = header.dtype.scalar_size();
        let n = payload.len() / width;
        swap_bytes(&mut payload, n, width)?;
    }

    NpArray::from_shape_vec_with_layout(header.shape.clone(), from_ne_bytes(&payload), header.layout)
}
