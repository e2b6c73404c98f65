//! Host byte-order detection and in-place byte swapping

use crate::error::{NpyError, Result};

/// Byte order of a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    /// Byte order of the running host
    pub fn host() -> Self {
        if host_is_little_endian() {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }

    /// Marker character used in the `descr` field
    pub fn marker(self) -> char {
        match self {
            Endianness::Little => '<',
            Endianness::Big => '>',
        }
    }

    /// Interpret a `descr` marker; only `>` denotes big-endian
    pub fn from_marker(marker: Option<char>) -> Self {
        match marker {
            Some('>') => Endianness::Big,
            _ => Endianness::Little,
        }
    }
}

/// Probe the host byte order
pub fn host_is_little_endian() -> bool {
    1u16.to_ne_bytes()[0] == 1
}

/// Reverse the byte order of each of the first `n_elements` elements of
/// `data`, each `element_width` bytes wide
///
/// Widths 1, 2, 4, 8 and 16 are supported; width 1 is a no-op.
pub fn swap_bytes(data: &mut [u8], n_elements: usize, element_width: usize) -> Result<()> {
    let n_bytes = n_elements
        .checked_mul(element_width)
        .ok_or_else(|| NpyError::shape("element count overflows byte length"))?;
    if n_bytes > data.len() {
        return Err(NpyError::DataSizeMismatch {
            expected: n_bytes as u64,
            actual: data.len() as u64,
        });
    }

    log::trace!(
        "swapping byte order of {} elements of width {}",
        n_elements,
        element_width
    );

    let data = &mut data[..n_bytes];
    match element_width {
        1 => {}
        2 => swap_each(data, swap_two_bytes),
        4 => swap_each(data, swap_four_bytes),
        8 => swap_each(data, swap_eight_bytes),
        16 => swap_each(data, swap_sixteen_bytes),
        other => return Err(NpyError::UnsupportedWidth(other)),
    }
    Ok(())
}

fn swap_each<const N: usize>(data: &mut [u8], swap: fn(&mut [u8; N])) {
    let (chunks, rest) = data.as_chunks_mut::<N>();
    debug_assert!(rest.is_empty());
    chunks.iter_mut().for_each(swap);
}

pub fn swap_two_bytes(bytes: &mut [u8; 2]) {
    bytes.swap(0, 1);
}

pub fn swap_four_bytes(bytes: &mut [u8; 4]) {
    bytes.reverse();
}

pub fn swap_eight_bytes(bytes: &mut [u8; 8]) {
    bytes.reverse();
}

/// Reverses the whole 16-byte span. For a complex element this also
/// exchanges the two components; swap each component at its own width instead.
pub fn swap_sixteen_bytes(bytes: &mut [u8; 16]) {
    bytes.reverse();
}
