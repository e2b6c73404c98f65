//! Property tests for byte swapping and address linearization

use nparray::endian::swap_bytes;
use nparray::index::{column_major_index, linear_index, row_major_index};
use nparray::{Layout, NpArray};
use quickcheck::{TestResult, quickcheck};

/// Small shape derived from arbitrary input, rank 1..=4, extents 1..=5
fn small_shape(dims: Vec<u8>) -> Vec<usize> {
    let mut shape: Vec<usize> = dims.into_iter().take(4).map(|d| 1 + (d % 5) as usize).collect();
    if shape.is_empty() {
        shape.push(1);
    }
    shape
}

/// Every index tuple of `shape`, last axis fastest
fn all_indices(shape: &[usize]) -> Vec<Vec<usize>> {
    let mut out = vec![vec![]];
    for &extent in shape {
        out = out
            .into_iter()
            .flat_map(|prefix| {
                (0..extent).map(move |i| {
                    let mut next = prefix.clone();
                    next.push(i);
                    next
                })
            })
            .collect();
    }
    out
}

quickcheck! {
    fn swap_twice_is_identity(data: Vec<u8>) -> bool {
        [2usize, 4, 8, 16].iter().all(|&width| {
            let n = data.len() / width;
            let mut swapped = data.clone();
            swap_bytes(&mut swapped, n, width).unwrap();
            swap_bytes(&mut swapped, n, width).unwrap();
            swapped == data
        })
    }

    fn swap_reverses_each_element(data: Vec<u8>) -> bool {
        let n = data.len() / 4;
        let mut swapped = data.clone();
        swap_bytes(&mut swapped, n, 4).unwrap();
        swapped
            .chunks_exact(4)
            .zip(data.chunks_exact(4))
            .all(|(a, b)| a.iter().eq(b.iter().rev()))
    }

    fn row_major_is_a_bijection(dims: Vec<u8>) -> bool {
        let shape = small_shape(dims);
        let offsets: Vec<usize> = all_indices(&shape)
            .iter()
            .map(|idx| row_major_index(&shape, idx))
            .collect();
        // Enumerating with the last axis fastest visits offsets in order
        offsets.iter().copied().eq(0..offsets.len())
    }

    fn column_major_is_a_bijection(dims: Vec<u8>) -> bool {
        let shape = small_shape(dims);
        let mut offsets: Vec<usize> = all_indices(&shape)
            .iter()
            .map(|idx| column_major_index(&shape, idx))
            .collect();
        offsets.sort_unstable();
        offsets.iter().copied().eq(0..offsets.len())
    }

    fn layouts_agree_on_transposed_shape(dims: Vec<u8>) -> bool {
        let shape = small_shape(dims);
        let reversed: Vec<usize> = shape.iter().rev().copied().collect();
        all_indices(&shape).iter().all(|idx| {
            let rev_idx: Vec<usize> = idx.iter().rev().copied().collect();
            column_major_index(&shape, idx) == row_major_index(&reversed, &rev_idx)
        })
    }

    fn out_of_range_always_rejected(dims: Vec<u8>, axis: usize, excess: u8) -> TestResult {
        let shape = small_shape(dims);
        let axis = axis % shape.len();
        let mut idx = vec![0; shape.len()];
        idx[axis] = shape[axis] + excess as usize;
        TestResult::from_bool(
            linear_index(&shape, Layout::RowMajor, &idx).is_err()
                && linear_index(&shape, Layout::ColumnMajor, &idx).is_err(),
        )
    }

    fn file_roundtrip_preserves_values(values: Vec<i64>, column_major: bool) -> bool {
        let layout = if column_major { Layout::ColumnMajor } else { Layout::RowMajor };
        let shape = vec![values.len()];
        let arr = NpArray::from_shape_vec_with_layout(shape, values, layout).unwrap();

        let mut bytes = Vec::new();
        arr.write_to(&mut bytes).unwrap();
        NpArray::<i64>::read_from(&mut bytes.as_slice()).unwrap() == arr
    }
}
