//! Owned N-dimensional array

use super::{DType, Element, Layout};
use crate::error::{NpyError, Result};
use crate::index;
use crate::{parser, writer};
use std::io::{Read, Write};
use std::ops::{Index, IndexMut};
use std::path::Path;

/// Dense N-dimensional array with a fixed storage layout
///
/// The flat buffer always holds exactly `product(shape)` elements.
#[derive(Debug, Clone, PartialEq)]
pub struct NpArray<T> {
    data: Vec<T>,
    shape: Vec<usize>,
    layout: Layout,
}

impl<T: Element> NpArray<T> {
    /// Zero-initialized row-major array
    pub fn new(shape: impl Into<Vec<usize>>) -> Result<Self> {
        Self::with_layout(shape, Layout::RowMajor)
    }

    /// Zero-initialized array with the given layout
    pub fn with_layout(shape: impl Into<Vec<usize>>, layout: Layout) -> Result<Self> {
        let shape = shape.into();
        let n = index::num_elements(&shape)?;
        Ok(Self {
            data: vec![T::default(); n],
            shape,
            layout,
        })
    }

    /// Row-major array over `data`, which must hold exactly `product(shape)` elements
    pub fn from_shape_vec(shape: impl Into<Vec<usize>>, data: Vec<T>) -> Result<Self> {
        Self::from_shape_vec_with_layout(shape, data, Layout::RowMajor)
    }

    /// Array over `data` stored in `layout` order
    pub fn from_shape_vec_with_layout(
        shape: impl Into<Vec<usize>>,
        data: Vec<T>,
        layout: Layout,
    ) -> Result<Self> {
        let shape = shape.into();
        let n = index::num_elements(&shape)?;
        if n != data.len() {
            return Err(NpyError::shape(format!(
                "shape {:?} needs {} elements, got {}",
                shape,
                n,
                data.len()
            )));
        }
        Ok(Self {
            data,
            shape,
            layout,
        })
    }

    /// Load an array from an npy file
    ///
    /// Fails with [`NpyError::DTypeMismatch`] if the file holds another element kind.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        parser::load(path)
    }

    /// Read an array in npy format from `reader`
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        parser::read_npy(reader)
    }

    /// Save to exactly `path`; no extension is appended
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        writer::save(self, path)
    }

    /// Write the array in npy format to `writer`
    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<()> {
        writer::write_npy(w, self)
    }

    /// Element kind
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of dimensions
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Number of elements
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// True if stored in row-major (C) order
    pub fn is_row_major(&self) -> bool {
        self.layout == Layout::RowMajor
    }

    /// Flat offset of `indices` under this array's layout
    pub fn linear_index(&self, indices: &[usize]) -> Result<usize> {
        index::linear_index(&self.shape, self.layout, indices)
    }

    pub fn get(&self, indices: &[usize]) -> Result<&T> {
        let i = self.linear_index(indices)?;
        Ok(&self.data[i])
    }

    pub fn get_mut(&mut self, indices: &[usize]) -> Result<&mut T> {
        let i = self.linear_index(indices)?;
        Ok(&mut self.data[i])
    }

    /// Flat buffer in storage order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over elements in storage order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consume the array, returning the flat buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Set every element to `value`
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Reinterpret the buffer under `new_shape`, which must keep the element count
    ///
    /// On failure the array is left unchanged.
    pub fn reshape(&mut self, new_shape: impl Into<Vec<usize>>) -> Result<()> {
        let new_shape = new_shape.into();
        let n = index::num_elements(&new_shape)?;
        if n != self.data.len() {
            return Err(NpyError::shape(format!(
                "cannot reshape {} elements into {:?}",
                self.data.len(),
                new_shape
            )));
        }
        self.shape = new_shape;
        Ok(())
    }

    /// Resize the buffer to fit `new_shape`
    ///
    /// Growing appends zeroed elements; shrinking drops trailing elements in flat order.
    pub fn reallocate(&mut self, new_shape: impl Into<Vec<usize>>) -> Result<()> {
        let new_shape = new_shape.into();
        let n = index::num_elements(&new_shape)?;
        self.data.resize(n, T::default());
        self.shape = new_shape;
        Ok(())
    }
}

impl<T: Element> Index<usize> for NpArray<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T: Element> IndexMut<usize> for NpArray<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T: Element, const N: usize> Index<[usize; N]> for NpArray<T> {
    type Output = T;

    fn index(&self, indices: [usize; N]) -> &T {
        match self.get(&indices) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Element, const N: usize> IndexMut<[usize; N]> for NpArray<T> {
    fn index_mut(&mut self, indices: [usize; N]) -> &mut T {
        match self.get_mut(&indices) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, T: Element> IntoIterator for &'a NpArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
