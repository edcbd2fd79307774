//! Derivative work of [`core::slice::sort`] licensed under `MIT OR Apache-2.0`.
//!
//! [`core::slice::sort`]: https://doc.rust-lang.org/src/core/slice/sort.rs.html

use crate::sift::{build_heap, sift_down};
use ndarray::{ArrayViewMut1, s};

/// Sorts `v` in place using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
///
/// Pops minimal elements from a min-heap into a growing suffix, which leaves `v` in descending
/// order, then reverses `v` in place. No auxiliary memory is allocated.
pub fn heap_sort<T, F>(mut v: ArrayViewMut1<'_, T>, mut is_less: F)
where
	F: FnMut(&T, &T) -> bool,
{
	log::trace!("heap-sorting {} elements", v.len());

	// Build the heap in linear time.
	build_heap(v.view_mut(), &mut is_less);

	// Pop minimal elements from the heap.
	for i in (1..v.len()).rev() {
		v.swap(0, i);
		sift_down(v.slice_mut(s![..i]), 0, &mut is_less);
	}

	reverse(v);
}

/// Reverses `v` in place.
fn reverse<T>(mut v: ArrayViewMut1<'_, T>) {
	let len = v.len();
	for i in 0..len / 2 {
		v.swap(i, len - 1 - i);
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::heap_sort;
	use ndarray::{Array1, arr1, s};
	use quickcheck_macros::quickcheck;

	#[test]
	fn ascending() {
		let mut array = arr1(&[9, 25, 86, 3, 29, 5, 55]);
		heap_sort(array.view_mut(), u32::lt);
		assert_eq!(array, arr1(&[3, 5, 9, 25, 29, 55, 86]));
	}

	#[test]
	fn column() {
		let mut matrix = ndarray::arr2(&[[4, 0], [1, 0], [3, 0], [2, 0]]);
		heap_sort(matrix.column_mut(0), i32::lt);
		assert_eq!(matrix.column(0), arr1(&[1, 2, 3, 4]));
		assert_eq!(matrix.slice(s![.., 1]), arr1(&[0, 0, 0, 0]));
	}

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		heap_sort(array.view_mut(), u32::lt);
		assert_eq!(array, sorted);
	}
}
