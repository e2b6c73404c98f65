//! Header text construction and version selection

use crate::endian::Endianness;
use crate::types::{ALIGNMENT, DType, FormatVersion, Layout};

/// Unpadded header dictionary, describing a payload in host byte order
pub fn header_text(dtype: DType, layout: Layout, shape: &[usize]) -> String {
    let mut text = String::from("{'descr': '");
    text.push(Endianness::host().marker());
    text.push_str(dtype.descriptor());
    text.push_str("', 'fortran_order': ");
    text.push_str(if layout.is_fortran_order() { "True" } else { "False" });
    text.push_str(", 'shape': (");
    for dim in shape {
        text.push_str(&dim.to_string());
        text.push(',');
    }
    text.push_str("), }");
    text
}

/// Pad `text` with spaces and a final newline so the payload starts on an
/// [`ALIGNMENT`] boundary, choosing the smallest version whose length field fits
pub fn pad_header(text: &str) -> (FormatVersion, String) {
    let padded = pad_for(FormatVersion::V1, text);
    if padded.len() <= u16::MAX as usize {
        return (FormatVersion::V1, padded);
    }
    (FormatVersion::V2, pad_for(FormatVersion::V2, text))
}

fn pad_for(version: FormatVersion, text: &str) -> String {
    let unpadded = version.prefix_size() + text.len() + 1;
    let padding = (ALIGNMENT - unpadded % ALIGNMENT) % ALIGNMENT;

    let mut padded = String::with_capacity(text.len() + padding + 1);
    padded.push_str(text);
    padded.extend(std::iter::repeat_n(' ', padding));
    padded.push('\n');
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_layout() {
        let text = header_text(DType::F64, Layout::RowMajor, &[2, 3]);
        let marker = Endianness::host().marker();
        assert_eq!(
            text,
            format!(
                "{{'descr': '{}f8', 'fortran_order': False, 'shape': (2,3,), }}",
                marker
            )
        );

        let text = header_text(DType::Complex128, Layout::ColumnMajor, &[5]);
        assert!(text.contains("c16'"));
        assert!(text.contains("'fortran_order': True"));
        assert!(text.ends_with("'shape': (5,), }"));
    }

    #[test]
    fn v1_padding_aligns_payload() {
        let text = header_text(DType::I32, Layout::RowMajor, &[4, 4]);
        let (version, padded) = pad_header(&text);
        assert_eq!(version, FormatVersion::V1);
        assert_eq!((10 + padded.len()) % ALIGNMENT, 0);
        assert!(padded.ends_with('\n'));
        assert!(padded.starts_with(&text));
        assert!(padded[text.len()..padded.len() - 1].bytes().all(|b| b == b' '));
    }

    #[test]
    fn exact_fit_gets_no_spaces() {
        // 10 prefix bytes + 53 text bytes + newline == 64
        let text = "x".repeat(53);
        let padded = pad_for(FormatVersion::V1, &text);
        assert_eq!(padded.len(), 54);
    }

    #[test]
    fn oversized_header_selects_v2() {
        let shape = vec![1usize; 40_000];
        let text = header_text(DType::U8, Layout::RowMajor, &shape);
        assert!(text.len() > u16::MAX as usize);

        let (version, padded) = pad_header(&text);
        assert_eq!(version, FormatVersion::V2);
        assert_eq!((12 + padded.len()) % ALIGNMENT, 0);
    }
}
