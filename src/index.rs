//! Address linearization for row-major and column-major storage
//!
//! Pure functions over a shape and an index tuple. Callers validate with
//! [`check_indices`] before computing an address; [`linear_index`] does both.

use crate::error::{NpyError, Result};
use crate::types::Layout;

/// Number of elements described by `shape`
///
/// Fails for an empty shape or when the product overflows `usize`.
pub fn num_elements(shape: &[usize]) -> Result<usize> {
    if shape.is_empty() {
        return Err(NpyError::shape("shape must have at least one dimension"));
    }
    shape
        .iter()
        .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
        .ok_or_else(|| NpyError::shape(format!("element count of {:?} overflows", shape)))
}

/// Validate an index tuple against `shape`
///
/// An empty shape has no addressable elements and is rejected.
pub fn check_indices(shape: &[usize], indices: &[usize]) -> Result<()> {
    if shape.is_empty() {
        return Err(NpyError::shape("shape must have at least one dimension"));
    }
    if indices.len() != shape.len() {
        return Err(NpyError::IndexArity {
            expected: shape.len(),
            actual: indices.len(),
        });
    }

    for (axis, (&index, &extent)) in indices.iter().zip(shape).enumerate() {
        if index >= extent {
            return Err(NpyError::IndexOutOfRange {
                axis,
                index,
                extent,
            });
        }
    }

    Ok(())
}

/// Flat offset of `indices` when the last axis varies fastest
///
/// Indices must already be validated.
pub fn row_major_index(shape: &[usize], indices: &[usize]) -> usize {
    let rank = shape.len();
    let mut idx = indices[rank - 1];
    let mut coeff = 1;
    for i in (1..rank).rev() {
        coeff *= shape[i];
        idx += coeff * indices[i - 1];
    }
    idx
}

/// Flat offset of `indices` when the first axis varies fastest
///
/// Indices must already be validated.
pub fn column_major_index(shape: &[usize], indices: &[usize]) -> usize {
    let rank = shape.len();
    let mut idx = indices[0];
    let mut coeff = 1;
    for i in 0..rank - 1 {
        coeff *= shape[i];
        idx += coeff * indices[i + 1];
    }
    idx
}

/// Validate `indices` and map them to a flat offset under `layout`
pub fn linear_index(shape: &[usize], layout: Layout, indices: &[usize]) -> Result<usize> {
    check_indices(shape, indices)?;
    Ok(match layout {
        Layout::RowMajor => row_major_index(shape, indices),
        Layout::ColumnMajor => column_major_index(shape, indices),
    })
}
