//! Binding between Rust scalar types and element kinds

use super::DType;
use num_complex::Complex;
use std::fmt::Debug;

/// Trait for types that can be stored in an [`NpArray`](super::NpArray)
///
/// Implemented for the twelve supported element kinds only. Byte conversion
/// uses host byte order; the codec handles byte-order reconciliation.
pub trait Element: Copy + Default + PartialEq + Debug + 'static {
    const DTYPE: DType;

    /// Append the host-order bytes of this element
    fn extend_ne_bytes(&self, out: &mut Vec<u8>);

    /// Decode one element from exactly `DTYPE.element_size()` host-order bytes
    fn from_ne_slice(bytes: &[u8]) -> Self;
}

macro_rules! impl_element {
    ($($ty:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$dtype;

                fn extend_ne_bytes(&self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_ne_bytes());
                }

                fn from_ne_slice(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$ty>()];
                    buf.copy_from_slice(bytes);
                    <$ty>::from_ne_bytes(buf)
                }
            }
        )*
    };
}

impl_element! {
    i8 => I8,
    u8 => U8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

impl Element for Complex<f32> {
    const DTYPE: DType = DType::Complex64;

    fn extend_ne_bytes(&self, out: &mut Vec<u8>) {
        self.re.extend_ne_bytes(out);
        self.im.extend_ne_bytes(out);
    }

    fn from_ne_slice(bytes: &[u8]) -> Self {
        let (re, im) = bytes.split_at(4);
        Complex::new(f32::from_ne_slice(re), f32::from_ne_slice(im))
    }
}

impl Element for Complex<f64> {
    const DTYPE: DType = DType::Complex128;

    fn extend_ne_bytes(&self, out: &mut Vec<u8>) {
        self.re.extend_ne_bytes(out);
        self.im.extend_ne_bytes(out);
    }

    fn from_ne_slice(bytes: &[u8]) -> Self {
        let (re, im) = bytes.split_at(8);
        Complex::new(f64::from_ne_slice(re), f64::from_ne_slice(im))
    }
}

/// Serialize a slice of elements into host-order bytes
pub(crate) fn to_ne_bytes<T: Element>(elements: &[T]) -> Vec<u8> {
    let mut out = Vec::with_capacity(elements.len() * T::DTYPE.element_size());
    for element in elements {
        element.extend_ne_bytes(&mut out);
    }
    out
}

/// Decode host-order bytes into elements; trailing partial elements are ignored
pub(crate) fn from_ne_bytes<T: Element>(bytes: &[u8]) -> Vec<T> {
    bytes
        .chunks_exact(T::DTYPE.element_size())
        .map(T::from_ne_slice)
        .collect()
}
