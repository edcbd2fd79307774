use crate::merge_sort::{merge, merge_sort};
use ndarray::{ArrayViewMut1, Axis};

/// If the slice is up to this length, it gets sorted sequentially.
const MAX_SEQUENTIAL: usize = 5000;

/// Sorts `v` using parallel top-down merge sort, which is stable and *O*(*n* \* log(*n*))
/// worst-case.
///
/// Both halves are sorted in parallel, each merge allocates a buffer of half its length.
pub fn par_merge_sort<T, F>(v: ArrayViewMut1<'_, T>, is_less: F)
where
	T: Clone + Send,
	F: Fn(&T, &T) -> bool + Sync,
{
	recurse(v, &is_less);
}

fn recurse<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &F)
where
	T: Clone + Send,
	F: Fn(&T, &T) -> bool + Sync,
{
	let len = v.len();
	if len <= MAX_SEQUENTIAL {
		merge_sort(v, is_less);
		return;
	}
	let mid = len / 2;
	{
		let (left, right) = v.view_mut().split_at(Axis(0), mid);
		rayon::join(|| recurse(left, is_less), || recurse(right, is_less));
	}
	let mut buf = Vec::with_capacity(mid);
	merge(v, mid, &mut buf, &mut |a, b| is_less(a, b));
}

#[cfg(test)]
mod test {
	use super::par_merge_sort;
	use ndarray::Array1;
	use quickcheck_macros::quickcheck;

	#[cfg_attr(miri, ignore)]
	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		par_merge_sort(array.view_mut(), u32::lt);
		assert_eq!(array, sorted);
	}

	#[cfg_attr(miri, ignore)]
	#[test]
	fn stably_sorted_large() {
		let xs = (0..50_000u32).map(|x| (x * 7919 % 64, x)).collect::<Vec<_>>();
		let mut sorted = xs.clone();
		sorted.sort_by_key(|&(key, _)| key);
		let mut array = Array1::from_vec(xs);
		par_merge_sort(array.view_mut(), |a: &(u32, u32), b: &(u32, u32)| a.0 < b.0);
		assert!(array.iter().eq(&sorted));
	}
}
