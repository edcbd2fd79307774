use crate::heap_sort::heap_sort;
use core::{cmp, mem};
use ndarray::{ArrayViewMut1, Axis, IndexLonger};

/// Slices of up to this length get sorted using insertion sort.
pub const MAX_INSERTION: usize = 16;

/// Sorts `v` in place using quicksort, which is *O*(*n* \* log(*n*)) worst-case.
///
/// Falls back to heap-sort after too many imbalanced partitions.
pub fn quick_sort<T, F>(v: ArrayViewMut1<'_, T>, mut is_less: F)
where
	F: FnMut(&T, &T) -> bool,
{
	// Sorting has no meaningful behavior on zero-sized types.
	if mem::size_of::<T>() == 0 {
		return;
	}

	let limit = imbalance_limit(v.len());
	recurse(v, &mut is_less, None, limit);
}

/// Number of allowed imbalanced partitions, `floor(log2(len)) + 1`.
#[inline]
pub fn imbalance_limit(len: usize) -> u32 {
	usize::BITS - len.leading_zeros()
}

/// Sorts `v` recursively.
///
/// If the slice had a predecessor in the original array, it is specified as `pred`.
///
/// `limit` is the number of allowed imbalanced partitions before switching to `heap_sort`.
fn recurse<'a, T, F>(
	mut v: ArrayViewMut1<'a, T>,
	is_less: &mut F,
	mut pred: Option<&'a T>,
	mut limit: u32,
) where
	F: FnMut(&T, &T) -> bool,
{
	loop {
		let len = v.len();

		if len <= MAX_INSERTION {
			insertion_sort(v, is_less);
			return;
		}

		// Guarantee `O(n * log(n))` worst-case.
		if limit == 0 {
			heap_sort(v, is_less);
			return;
		}

		let pivot = choose_pivot(v.view_mut(), is_less);

		// If the chosen pivot is equal to the predecessor, then it's the smallest element in the
		// slice. Skip over all elements equal to it.
		if let Some(p) = pred {
			if !is_less(p, &v[pivot]) {
				let mid = partition_equal(v.view_mut(), pivot, is_less);
				let (_, new_v) = v.split_at(Axis(0), mid);
				v = new_v;
				continue;
			}
		}

		let mid = partition(v.view_mut(), pivot, is_less);
		if cmp::min(mid, len - mid) < len / 8 {
			limit -= 1;
		}

		// Split the slice into `left`, `pivot`, and `right`.
		let (left, right) = v.split_at(Axis(0), mid);
		let (pivot, right) = right.split_at(Axis(0), 1);
		let pivot = pivot.index(0);

		// Recurse into the shorter side only in order to minimize the total number of recursive
		// calls and consume less stack space. Then just continue with the longer side.
		if left.len() < right.len() {
			grow(|| recurse(left, is_less, pred, limit));
			v = right;
			pred = Some(pivot);
		} else {
			grow(|| recurse(right, is_less, Some(pivot), limit));
			v = left;
		}
	}
}

#[inline]
fn grow<R>(f: impl FnOnce() -> R) -> R {
	#[cfg(feature = "stacker")]
	{
		stacker::maybe_grow(32 * 1024, 1024 * 1024, f)
	}
	#[cfg(not(feature = "stacker"))]
	{
		f()
	}
}

/// Orders the first, middle, and last element, then moves the median to the end.
///
/// Returns the index of the pivot, which is the last index. `v` must not be empty.
pub fn choose_pivot<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F) -> usize
where
	F: FnMut(&T, &T) -> bool,
{
	let last = v.len() - 1;
	let mid = last / 2;

	// Sort `v[0] <= v[mid] <= v[last]`.
	if is_less(&v[mid], &v[0]) {
		v.swap(mid, 0);
	}
	if is_less(&v[last], &v[mid]) {
		v.swap(last, mid);
		if is_less(&v[mid], &v[0]) {
			v.swap(mid, 0);
		}
	}

	v.swap(mid, last);
	last
}

/// Partitions `v` into elements less than `v[pivot]`, followed by the pivot, followed by all
/// other elements.
///
/// Returns the final index of the pivot.
pub fn partition<T, F>(mut v: ArrayViewMut1<'_, T>, pivot: usize, is_less: &mut F) -> usize
where
	F: FnMut(&T, &T) -> bool,
{
	let last = v.len() - 1;
	v.swap(pivot, last);

	let mut store = 0;
	for i in 0..last {
		if is_less(&v[i], &v[last]) {
			v.swap(i, store);
			store += 1;
		}
	}
	v.swap(store, last);
	store
}

/// Partitions `v` into elements not greater than `v[pivot]`, followed by all elements greater.
///
/// Returns the number of elements not greater than the pivot, the pivot included.
pub fn partition_equal<T, F>(mut v: ArrayViewMut1<'_, T>, pivot: usize, is_less: &mut F) -> usize
where
	F: FnMut(&T, &T) -> bool,
{
	let last = v.len() - 1;
	v.swap(pivot, last);

	let mut store = 0;
	for i in 0..last {
		if !is_less(&v[last], &v[i]) {
			v.swap(i, store);
			store += 1;
		}
	}
	v.swap(store, last);
	store + 1
}

/// Sorts `v` using insertion sort, which is *O*(*n*^2) worst-case.
pub fn insertion_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	for i in 1..v.len() {
		let mut j = i;
		while j > 0 && is_less(&v[j], &v[j - 1]) {
			v.swap(j, j - 1);
			j -= 1;
		}
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{choose_pivot, partition, partition_equal, quick_sort};
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;

	/// Sorts `0..len` arranged by `arrange` and returns the number of comparisons.
	fn comparisons(len: i32, arrange: impl Fn(i32) -> i32) -> usize {
		let mut array = Array1::from_iter((0..len).map(arrange));
		let mut sorted = array.to_vec();
		sorted.sort_unstable();
		let mut count = 0;
		quick_sort(array.view_mut(), |a: &i32, b: &i32| {
			count += 1;
			a < b
		});
		assert!(array.iter().eq(&sorted));
		count
	}

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		quick_sort(array.view_mut(), u32::lt);
		assert_eq!(array, sorted);
	}

	#[quickcheck]
	fn sorted_with_duplicates(xs: Vec<u8>) {
		let xs = xs.into_iter().map(|x| x % 4).collect::<Vec<u8>>();
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let mut array = Array1::from_vec(xs);
		quick_sort(array.view_mut(), u8::lt);
		assert!(array.iter().eq(&sorted));
	}

	#[quickcheck]
	fn partitioned(xs: Vec<i8>) -> bool {
		if xs.is_empty() {
			return true;
		}
		let mut array = Array1::from_vec(xs);
		let pivot = choose_pivot(array.view_mut(), &mut i8::lt);
		let mid = partition(array.view_mut(), pivot, &mut i8::lt);
		let pivot = array[mid];
		array.iter().take(mid).all(|&x| x < pivot) && array.iter().skip(mid).all(|&x| x >= pivot)
	}

	#[test]
	fn median_of_three() {
		let mut array = Array1::from_iter(1..=9);
		let pivot = choose_pivot(array.view_mut(), &mut i32::lt);
		assert_eq!(array[pivot], 5);
		let mut array = arr1(&[9, 1, 5]);
		let pivot = choose_pivot(array.view_mut(), &mut i32::lt);
		assert_eq!(array[pivot], 5);
	}

	#[test]
	fn equal_partitioned() {
		let mut array = arr1(&[3, 1, 4, 1, 5, 1]);
		let mid = partition_equal(array.view_mut(), 1, &mut i32::lt);
		assert_eq!(mid, 3);
		assert!(array.iter().take(mid).all(|&x| x == 1));
	}

	#[test]
	fn ascending_in_linearithmic_comparisons() {
		// `20_000 * log2(20_000)` is about `286_000`.
		assert!(comparisons(20_000, |x| x) < 2_000_000);
	}

	#[test]
	fn descending_in_linearithmic_comparisons() {
		assert!(comparisons(20_000, |x| 20_000 - x) < 2_000_000);
	}

	#[test]
	fn equal_in_linear_comparisons() {
		assert!(comparisons(20_000, |_| 7) < 100_000);
	}

	#[test]
	fn few_distinct_in_linearithmic_comparisons() {
		assert!(comparisons(20_000, |x| x % 3) < 2_000_000);
	}
}
