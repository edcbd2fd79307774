#![cfg(feature = "alloc")]

use crate::quick_sort::insertion_sort;
use ndarray::{ArrayViewMut1, Axis};

#[cfg(not(feature = "std"))]
extern crate alloc as no_std_alloc;
#[cfg(not(feature = "std"))]
use no_std_alloc::vec::Vec;

/// Runs of up to this length get sorted using insertion sort.
const MAX_INSERTION: usize = 16;

/// Sorts `v` using top-down merge sort, which is stable and *O*(*n* \* log(*n*)) worst-case.
///
/// Allocates a buffer of half the length of `v`.
pub fn merge_sort<T, F>(v: ArrayViewMut1<'_, T>, mut is_less: F)
where
	T: Clone,
	F: FnMut(&T, &T) -> bool,
{
	let mut buf = Vec::with_capacity(v.len() / 2);
	recurse(v, &mut buf, &mut is_less);
}

fn recurse<T, F>(mut v: ArrayViewMut1<'_, T>, buf: &mut Vec<T>, is_less: &mut F)
where
	T: Clone,
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	if len <= MAX_INSERTION {
		insertion_sort(v, is_less);
		return;
	}
	let mid = len / 2;
	{
		let (left, right) = v.view_mut().split_at(Axis(0), mid);
		recurse(left, buf, is_less);
		recurse(right, buf, is_less);
	}
	merge(v, mid, buf, is_less);
}

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` using `buf` as temporary storage, and
/// stores the result into `v[..]`.
///
/// If equal, the left run is preferred to maintain stability.
pub fn merge<T, F>(mut v: ArrayViewMut1<'_, T>, mid: usize, buf: &mut Vec<T>, is_less: &mut F)
where
	T: Clone,
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	// Already in order.
	if mid == 0 || mid == len || !is_less(&v[mid], &v[mid - 1]) {
		return;
	}

	buf.clear();
	buf.extend(v.iter().take(mid).cloned());

	let (mut left, mut right, mut out) = (0, mid, 0);
	while left < buf.len() && right < len {
		if is_less(&v[right], &buf[left]) {
			v[out] = v[right].clone();
			right += 1;
		} else {
			v[out] = buf[left].clone();
			left += 1;
		}
		out += 1;
	}
	// Whatever is left of the right run is already in place.
	for x in buf.drain(left..) {
		v[out] = x;
		out += 1;
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{merge, merge_sort};
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;

	#[test]
	fn merged() {
		let mut array = arr1(&[1, 4, 9, 2, 3, 10]);
		merge(array.view_mut(), 3, &mut Vec::new(), &mut u32::lt);
		assert_eq!(array, arr1(&[1, 2, 3, 4, 9, 10]));
	}

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		merge_sort(array.view_mut(), u32::lt);
		assert_eq!(array, sorted);
	}

	#[quickcheck]
	fn stably_sorted(xs: Vec<u8>) {
		let xs = xs
			.into_iter()
			.map(|x| x % 8)
			.enumerate()
			.collect::<Vec<(usize, u8)>>();
		let mut sorted = xs.clone();
		sorted.sort_by_key(|&(_, value)| value);
		let mut array = Array1::from_vec(xs);
		merge_sort(array.view_mut(), |a: &(usize, u8), b: &(usize, u8)| a.1 < b.1);
		assert!(array.iter().eq(&sorted));
	}
}
