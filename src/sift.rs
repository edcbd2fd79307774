//! Derivative work of [`core::slice::sort`] licensed under `MIT OR Apache-2.0`.
//!
//! [`core::slice::sort`]: https://doc.rust-lang.org/src/core/slice/sort.rs.html

use ndarray::{ArrayView1, ArrayViewMut1};

/// Moves `v[node]` towards the root while it is less than its parent.
///
/// This binary heap respects the invariant `parent <= child` under `is_less`.
pub fn sift_up<T, F>(mut v: ArrayViewMut1<'_, T>, mut node: usize, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	while node > 0 {
		let parent = (node - 1) / 2;

		// Stop if the invariant holds at `node`.
		if !is_less(&v[node], &v[parent]) {
			break;
		}

		v.swap(node, parent);
		node = parent;
	}
}

/// Moves `v[node]` towards the leaves while one of its children is less than it.
///
/// Indices at or beyond `v.len()` are treated as nonexistent, so a live prefix of a larger array
/// is restored by slicing the view first.
pub fn sift_down<T, F>(mut v: ArrayViewMut1<'_, T>, mut node: usize, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	loop {
		// Children of `node`.
		let mut child = 2 * node + 1;
		if child >= v.len() {
			break;
		}

		// Choose the lesser child.
		if child + 1 < v.len() && is_less(&v[child + 1], &v[child]) {
			child += 1;
		}

		// Stop if the invariant holds at `node`.
		if !is_less(&v[child], &v[node]) {
			break;
		}

		// Swap `node` with the lesser child, move one step down, and continue sifting.
		v.swap(node, child);
		node = child;
	}
}

/// Builds the heap in linear time, from the last internal node down to the root.
pub fn build_heap<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	for i in (0..v.len() / 2).rev() {
		sift_down(v.view_mut(), i, is_less);
	}
}

/// Whether no child in `v` is less than its parent.
pub fn is_heap<T, F>(v: ArrayView1<'_, T>, is_less: &mut F) -> bool
where
	F: FnMut(&T, &T) -> bool,
{
	(1..v.len()).all(|child| !is_less(&v[child], &v[(child - 1) / 2]))
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{build_heap, is_heap, sift_down, sift_up};
	use ndarray::{Array1, arr1, s};
	use quickcheck_macros::quickcheck;

	#[test]
	fn built() {
		let mut array = arr1(&[5, 3, 8, 1, 9, 2]);
		build_heap(array.view_mut(), &mut u32::lt);
		assert!(is_heap(array.view(), &mut u32::lt));
		assert_eq!(array[0], 1);
	}

	#[test]
	fn bounded() {
		let mut array = arr1(&[9, 1, 2, 0]);
		// The trailing `0` lies beyond the bound and must stay put.
		sift_down(array.slice_mut(s![..3]), 0, &mut i32::lt);
		assert_eq!(array, arr1(&[1, 9, 2, 0]));
	}

	#[test]
	fn strided() {
		let mut array = arr1(&[7, 0, 4, 0, 6, 0, 1, 0]);
		build_heap(array.slice_mut(s![..;2]), &mut i32::lt);
		assert_eq!(array.slice(s![1..;2]), arr1(&[0, 0, 0, 0]));
		assert!(is_heap(array.slice(s![..;2]), &mut i32::lt));
		assert_eq!(array[0], 1);
	}

	#[quickcheck]
	fn built_heap(xs: Vec<u32>) -> bool {
		let mut array = Array1::from_vec(xs);
		build_heap(array.view_mut(), &mut u32::lt);
		is_heap(array.view(), &mut u32::lt)
	}

	#[quickcheck]
	fn pushed_heap(xs: Vec<i16>) -> bool {
		let mut array = Array1::from_vec(xs);
		for i in 0..array.len() {
			sift_up(array.slice_mut(s![..i + 1]), i, &mut i16::lt);
		}
		is_heap(array.view(), &mut i16::lt)
	}
}
