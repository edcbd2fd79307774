use crate::{
	heap_sort::heap_sort,
	quick_sort::{
		MAX_INSERTION, choose_pivot, imbalance_limit, insertion_sort, partition, partition_equal,
	},
};
use core::{cmp, mem};
use ndarray::{ArrayViewMut1, Axis, IndexLonger};

/// If both partitions are up to this length, we continue sequentially. This number is as small as
/// possible but so that the overhead of Rayon's task scheduling is still negligible.
const MAX_SEQUENTIAL: usize = 2000;

/// Sorts `v` in place using parallel quicksort, which is *O*(*n* \* log(*n*)) worst-case.
pub fn par_quick_sort<T, F>(v: ArrayViewMut1<'_, T>, is_less: F)
where
	T: Send,
	F: Fn(&T, &T) -> bool + Sync,
{
	// Sorting has no meaningful behavior on zero-sized types.
	if mem::size_of::<T>() == 0 {
		return;
	}

	let limit = imbalance_limit(v.len());
	recurse(v, &is_less, None, limit);
}

/// Sorts `v` recursively.
///
/// If the slice had a predecessor in the original array, it is specified as `pred`.
///
/// `limit` is the number of allowed imbalanced partitions before switching to `heap_sort`.
fn recurse<'a, T, F>(
	mut v: ArrayViewMut1<'a, T>,
	is_less: &F,
	mut pred: Option<&'a mut T>,
	mut limit: u32,
) where
	T: Send,
	F: Fn(&T, &T) -> bool + Sync,
{
	let mut lt = |a: &T, b: &T| is_less(a, b);

	loop {
		let len = v.len();

		if len <= MAX_INSERTION {
			insertion_sort(v, &mut lt);
			return;
		}

		// Guarantee `O(n * log(n))` worst-case.
		if limit == 0 {
			heap_sort(v, lt);
			return;
		}

		let pivot = choose_pivot(v.view_mut(), &mut lt);

		// If the chosen pivot is equal to the predecessor, then it's the smallest element in the
		// slice. Skip over all elements equal to it.
		if let Some(ref p) = pred {
			if !is_less(p, &v[pivot]) {
				let mid = partition_equal(v.view_mut(), pivot, &mut lt);
				let (_, new_v) = v.split_at(Axis(0), mid);
				v = new_v;
				continue;
			}
		}

		let mid = partition(v.view_mut(), pivot, &mut lt);
		if cmp::min(mid, len - mid) < len / 8 {
			limit -= 1;
		}

		// Split the slice into `left`, `pivot`, and `right`.
		let (left, right) = v.split_at(Axis(0), mid);
		let (pivot, right) = right.split_at(Axis(0), 1);
		let pivot = pivot.index(0);

		if cmp::max(left.len(), right.len()) <= MAX_SEQUENTIAL {
			// Recurse into the shorter side and continue with the longer one.
			if left.len() < right.len() {
				recurse(left, is_less, pred, limit);
				v = right;
				pred = Some(pivot);
			} else {
				recurse(right, is_less, Some(pivot), limit);
				v = left;
			}
		} else {
			// Sort the left and right half in parallel.
			rayon::join(
				|| recurse(left, is_less, pred, limit),
				|| recurse(right, is_less, Some(pivot), limit),
			);
			break;
		}
	}
}

#[cfg(test)]
mod test {
	use super::par_quick_sort;
	use core::sync::atomic::{AtomicUsize, Ordering};
	use ndarray::Array1;
	use quickcheck_macros::quickcheck;

	#[cfg_attr(miri, ignore)]
	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		par_quick_sort(array.view_mut(), u32::lt);
		assert_eq!(array, sorted);
	}

	#[cfg_attr(miri, ignore)]
	#[test]
	fn equal_large() {
		let mut array = Array1::from_elem(50_000, 7u32);
		let count = AtomicUsize::new(0);
		par_quick_sort(array.view_mut(), |a: &u32, b: &u32| {
			count.fetch_add(1, Ordering::Relaxed);
			a < b
		});
		assert!(array.iter().all(|&x| x == 7));
		assert!(count.into_inner() < 250_000);
	}

	#[cfg_attr(miri, ignore)]
	#[test]
	fn sorted_large() {
		let mut array = Array1::from_iter((0..100_000u64).map(|x| x * 7919 % 100_003));
		par_quick_sort(array.view_mut(), u64::lt);
		assert!(array.windows(2).into_iter().all(|w| w[0] <= w[1]));
	}
}
