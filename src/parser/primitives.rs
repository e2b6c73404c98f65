//! Primitive binary readers

use crate::endian::{host_is_little_endian, swap_two_bytes, swap_four_bytes};
use crate::error::{NpyError, Result};
use std::io::{self, Read};

/// Read exactly `N` bytes; running out of input is a malformed file
pub fn take<const N: usize, R: Read>(reader: &mut R) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => NpyError::DataSizeMismatch {
            expected: N as u64,
            actual: 0,
        },
        _ => NpyError::Io(e),
    })?;
    Ok(buf)
}

/// Read a u8
pub fn u8_parser<R: Read>(reader: &mut R) -> Result<u8> {
    let [b] = take::<1, R>(reader)?;
    Ok(b)
}

/// Read a little-endian u16
pub fn u16_le<R: Read>(reader: &mut R) -> Result<u16> {
    let mut bytes = take::<2, R>(reader)?;
    if !host_is_little_endian() {
        swap_two_bytes(&mut bytes);
    }
    Ok(u16::from_ne_bytes(bytes))
}

/// Read a little-endian u32
pub fn u32_le<R: Read>(reader: &mut R) -> Result<u32> {
    let mut bytes = take::<4, R>(reader)?;
    if !host_is_little_endian() {
        swap_four_bytes(&mut bytes);
    }
    Ok(u32::from_ne_bytes(bytes))
}

/// Read up to `count` bytes; fewer bytes than requested is a malformed file
pub fn take_vec<R: Read>(reader: &mut R, count: u64) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.take(count).read_to_end(&mut buf)?;
    if (buf.len() as u64) < count {
        return Err(NpyError::DataSizeMismatch {
            expected: count,
            actual: buf.len() as u64,
        });
    }
    Ok(buf)
}
