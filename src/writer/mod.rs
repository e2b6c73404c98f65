//! Encoding of npy files
//!
//! The payload is written in host byte order; the `descr` marker records
//! which order that is.

mod header;

pub use header::{header_text, pad_header};

use crate::endian::{host_is_little_endian, swap_bytes};
use crate::error::Result;
use crate::types::{Element, FormatVersion, MAGIC, NpArray, to_ne_bytes};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub(crate) fn create(path: &Path) -> Result<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}

/// Save `array` to exactly `path`
pub fn save<T: Element>(array: &NpArray<T>, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    log::debug!("saving npy file {}", path.display());
    let mut w = create(path)?;
    write_npy(&mut w, array)?;
    w.flush()?;
    Ok(())
}

/// Write `array` in npy format
pub fn write_npy<W: Write, T: Element>(writer: &mut W, array: &NpArray<T>) -> Result<()> {
    let text = header_text(T::DTYPE, array.layout(), array.shape());
    let (version, header) = pad_header(&text);

    log::debug!(
        "writing npy v{}.0 header of {} bytes for dtype={} shape={:?}",
        version.major(),
        header.len(),
        T::DTYPE,
        array.shape()
    );

    writer.write_all(MAGIC)?;
    writer.write_all(&[version.major(), 0])?;
    writer.write_all(&length_field(version, header.len())?)?;
    writer.write_all(header.as_bytes())?;
    writer.write_all(&to_ne_bytes(array.as_slice()))?;
    Ok(())
}

/// Little-endian header length, sized for `version`
fn length_field(version: FormatVersion, len: usize) -> Result<Vec<u8>> {
    let mut bytes = match version {
        FormatVersion::V1 => (len as u16).to_ne_bytes().to_vec(),
        FormatVersion::V2 => (len as u32).to_ne_bytes().to_vec(),
    };
    if !host_is_little_endian() {
        swap_bytes(&mut bytes, 1, version.length_field_size())?;
    }
    Ok(bytes)
}
