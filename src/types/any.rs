//! Arrays whose element kind is only known at runtime

use super::{DType, Layout, NpArray};
use crate::error::Result;
use crate::{parser, writer};
use num_complex::Complex;
use std::io::{Read, Write};
use std::path::Path;

macro_rules! any_array {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        /// An [`NpArray`] of any supported element kind, tagged by [`DType`]
        #[derive(Debug, Clone, PartialEq)]
        pub enum AnyArray {
            $($variant(NpArray<$ty>),)*
        }

        impl AnyArray {
            /// Element kind of the wrapped array
            pub fn dtype(&self) -> DType {
                match self {
                    $(AnyArray::$variant(_) => DType::$variant,)*
                }
            }

            pub fn shape(&self) -> &[usize] {
                match self {
                    $(AnyArray::$variant(a) => a.shape(),)*
                }
            }

            pub fn layout(&self) -> Layout {
                match self {
                    $(AnyArray::$variant(a) => a.layout(),)*
                }
            }

            /// Number of elements
            pub fn size(&self) -> usize {
                match self {
                    $(AnyArray::$variant(a) => a.size(),)*
                }
            }

            /// Write the wrapped array in npy format
            pub fn write_to<W: Write>(&self, w: &mut W) -> Result<()> {
                match self {
                    $(AnyArray::$variant(a) => writer::write_npy(w, a),)*
                }
            }

            /// Read an array of whatever element kind the header declares
            pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
                let header = parser::read_header(reader)?;
                Ok(match header.dtype {
                    $(DType::$variant => AnyArray::$variant(parser::read_payload(reader, &header)?),)*
                })
            }
        }

        $(
            impl From<NpArray<$ty>> for AnyArray {
                fn from(a: NpArray<$ty>) -> Self {
                    AnyArray::$variant(a)
                }
            }
        )*
    };
}

any_array! {
    I8(i8),
    U8(u8),
    I16(i16),
    I32(i32),
    I64(i64),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Complex64(Complex<f32>),
    Complex128(Complex<f64>),
}

impl AnyArray {
    /// Load an npy file without knowing its element kind in advance
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let mut reader = parser::open(path.as_ref())?;
        Self::read_from(&mut reader)
    }

    /// Save to exactly `path`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut w = writer::create(path.as_ref())?;
        self.write_to(&mut w)?;
        w.flush()?;
        Ok(())
    }
}
