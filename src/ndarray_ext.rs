//! ndarray integration for nparray arrays
//!
//! Conversions between [`NpArray`] and ndarray's dynamic-dimension arrays.
//! Column-major arrays map to Fortran-strided ndarray arrays, so logical
//! indexing agrees on both sides.
//!
//! Enable with the `ndarray` feature flag.

use crate::error::{NpyError, Result};
use crate::types::{Element, Layout, NpArray};
use ndarray::{ArrayD, IxDyn, ShapeBuilder};

// =============================================================================
// From ndarray to nparray
// =============================================================================

impl<T: Element> NpArray<T> {
    /// Create an NpArray from an ndarray ArrayD
    ///
    /// Fortran-contiguous inputs keep their memory order and become
    /// column-major; everything else is copied out in row-major order.
    pub fn from_ndarray(arr: ArrayD<T>) -> Result<Self> {
        if arr.ndim() == 0 {
            return Err(NpyError::shape("zero-dimensional arrays are not supported"));
        }

        let shape = arr.shape().to_vec();
        let fortran = arr.ndim() > 1 && !arr.is_standard_layout() && arr.t().is_standard_layout();

        if fortran {
            let data = arr.t().iter().copied().collect();
            NpArray::from_shape_vec_with_layout(shape, data, Layout::ColumnMajor)
        } else {
            let data = arr.iter().copied().collect();
            NpArray::from_shape_vec(shape, data)
        }
    }
}

impl<T: Element> TryFrom<ArrayD<T>> for NpArray<T> {
    type Error = NpyError;

    fn try_from(arr: ArrayD<T>) -> Result<Self> {
        NpArray::from_ndarray(arr)
    }
}

// =============================================================================
// From nparray to ndarray
// =============================================================================

impl<T: Element> NpArray<T> {
    /// Convert to an ndarray ArrayD
    pub fn to_ndarray(&self) -> Result<ArrayD<T>> {
        self.clone().into_ndarray()
    }

    /// Convert into an ndarray ArrayD without copying the buffer
    pub fn into_ndarray(self) -> Result<ArrayD<T>> {
        let shape = IxDyn(self.shape());
        let layout = self.layout();
        let data = self.into_vec();

        let result = match layout {
            Layout::RowMajor => ArrayD::from_shape_vec(shape, data),
            Layout::ColumnMajor => ArrayD::from_shape_vec(shape.f(), data),
        };
        result.map_err(|e| NpyError::shape(e.to_string()))
    }
}
