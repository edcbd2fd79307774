//! Array-backed binary [min-heap] with priority tiebreaks and in-place [heap-sort] for
//! non-contiguous (sub)views into *n*-dimensional arrays.
//!
//! [`MinHeap`] stores its entries as an implicit complete binary tree in a growable array. Each
//! [`Entry`] pairs a value with a priority, the priority ordering entries first and the value
//! breaking ties. The heap exposes its restoration primitives ([`MinHeap::swap`],
//! [`MinHeap::heapify_subtree`], [`MinHeap::build_heap`]) so that sorting routines can treat its
//! backing array as the array being sorted.
//!
//! The same primitives work on any [`ndarray`] 1-dimensional array or (sub)view via the
//! [`Heap1Ext`] extension trait, alongside merge sort and quicksort as reference baselines.
//!
//! # Example
//!
//! ```
//! use ndarray_heap::{ndarray::arr2, Heap1Ext, MinHeap};
//!
//! let mut heap: MinHeap<&str> = MinHeap::new();
//! heap.insert_with_priority("low", 2);
//! heap.insert_with_priority("urgent", -1);
//! heap.insert("normal");
//! assert_eq!(heap.delete_min(), Ok("urgent"));
//! assert_eq!(heap.delete_min(), Ok("normal"));
//!
//! // Due to row-major memory layout, columns are non-contiguous.
//! let mut v = arr2(&[[9, 0],
//!                    [3, 1],
//!                    [5, 2]]);
//! v.column_mut(0).heap_sort();
//! assert!(v == arr2(&[[3, 0],
//!                     [5, 1],
//!                     [9, 2]]));
//! ```
//!
//! # Current Implementation
//!
//! Complexities where *n* is the length of the heap or (sub)view.
//!
//! | Resource | Complexity | Heap-sort        | Merge sort (stable) | Quicksort           |
//! |----------|------------|------------------|---------------------|---------------------|
//! | Time     | Best       | *O*(*n* log *n*) | *O*(*n*)            | *O*(*n* log *n*)    |
//! | Time     | Average    | *O*(*n* log *n*) | *O*(*n* log *n*)    | *O*(*n* log *n*)    |
//! | Time     | Worst      | *O*(*n* log *n*) | *O*(*n* log *n*)    | *O*(*n* log *n*)    |
//! | Space    | Worst      | *O*(1)           | *O*(*n*/2)          | *O*(log *n*)        |
//!
//! [min-heap]: https://en.wikipedia.org/wiki/Binary_heap
//! [heap-sort]: https://en.wikipedia.org/wiki/Heapsort
//!
//! # Features
//!
//!   * `alloc` for [`MinHeap`] and stable `merge_sort`. Enabled by `std`.
//!   * `std` for [`std::error::Error`] on [`HeapError`]. Enabled by `default`, `rayon`, or
//!     `stacker`.
//!   * `rayon` for parallel `par_merge_sort`/`par_quick_sort`.
//!   * `stacker` for growing the stack on deep quicksort recursion. Enabled by `default`.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod entry;
mod error;
mod heap;
mod heap_sort;
mod merge_sort;
mod quick_sort;
mod sift;

#[cfg(feature = "rayon")]
mod par;
#[cfg(feature = "rayon")]
use par::{merge_sort::par_merge_sort, quick_sort::par_quick_sort};

#[cfg(feature = "alloc")]
use crate::merge_sort::merge_sort;

use crate::{
	heap_sort::heap_sort,
	quick_sort::quick_sort,
	sift::{build_heap, is_heap},
};
use core::cmp::Ordering::{self, Less};
use ndarray::{ArrayBase, Data, DataMut, Ix1};

pub use entry::Entry;
pub use error::HeapError;
#[cfg(feature = "alloc")]
pub use heap::{MinHeap, Values};
pub use ndarray;

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing binary heap and [sorting] methods.
///
/// Heaps built by these methods are min-heaps: no element is less than its parent.
///
/// [sorting]: https://en.wikipedia.org/wiki/Sorting_algorithm
pub trait Heap1Ext<A, S>
where
	S: Data<Elem = A>,
{
	/// Rearranges the array into a min-heap in *O*(*n*).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heap::{ndarray::arr1, Heap1Ext};
	///
	/// let mut v = arr1(&[5, 3, 8, 1, 9, 2]);
	/// assert!(!v.is_heap());
	///
	/// v.build_heap();
	/// assert!(v.is_heap());
	/// assert_eq!(v[0], 1);
	/// ```
	fn build_heap(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Rearranges the array into a min-heap in *O*(*n*) with a comparator function.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heap::{ndarray::arr1, Heap1Ext};
	///
	/// let mut v = arr1(&[5, 3, 8, 1, 9, 2]);
	///
	/// // Max-heap by reversed comparison.
	/// v.build_heap_by(|a, b| b.cmp(a));
	/// assert_eq!(v[0], 9);
	/// assert!(v.is_heap_by(|a, b| b.cmp(a)));
	/// ```
	fn build_heap_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;
	/// Checks if the array is a min-heap, i.e., no element is less than its parent.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heap::{ndarray::arr1, Heap1Ext};
	///
	/// assert!(arr1(&[1, 2, 3, 2]).is_heap());
	/// assert!(!arr1(&[2, 1]).is_heap());
	///
	/// let empty: [i32; 0] = [];
	/// assert!(arr1(&empty).is_heap());
	/// ```
	fn is_heap(&self) -> bool
	where
		A: Ord;
	/// Checks if the array is a min-heap using the given comparator function.
	fn is_heap_by<F>(&self, compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Ordering;
	/// Sorts the array in place using heap-sort.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not
	/// allocate), and *O*(*n* \* log(*n*)) worst-case.
	///
	/// # Current Implementation
	///
	/// Builds a min-heap, then repeatedly swaps the root into a growing suffix and restores the
	/// shrinking live prefix, leaving the array descending. A final in-place reversal makes it
	/// ascending.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heap::{ndarray::arr1, Heap1Ext};
	///
	/// let mut v = arr1(&[9, 25, 86, 3, 29, 5, 55]);
	///
	/// v.heap_sort();
	/// assert!(v == arr1(&[3, 5, 9, 25, 29, 55, 86]));
	/// ```
	fn heap_sort(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array in place using heap-sort with a comparator function.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heap::{ndarray::arr1, Heap1Ext};
	///
	/// let mut v = arr1(&[5, 4, 1, 3, 2]);
	/// v.heap_sort_by(|a, b| b.cmp(a));
	/// assert!(v == arr1(&[5, 4, 3, 2, 1]));
	/// ```
	fn heap_sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;
	/// Sorts the array in place using heap-sort with a key extraction function.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heap::{ndarray::arr1, Heap1Ext};
	///
	/// let mut v = arr1(&[-5i32, 4, 1, -3, 2]);
	/// v.heap_sort_by_key(|k| k.abs());
	/// assert!(v == arr1(&[1, 2, -3, 4, -5]));
	/// ```
	fn heap_sort_by_key<K, F>(&mut self, f: F)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut;
	/// Sorts the array using top-down merge sort.
	///
	/// This sort is stable and *O*(*n* \* log(*n*)) worst-case. It allocates temporary storage
	/// half the size of `self` and clones elements into it.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heap::{ndarray::arr1, Heap1Ext};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	/// v.merge_sort();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	#[cfg(feature = "alloc")]
	fn merge_sort(&mut self)
	where
		A: Ord + Clone,
		S: DataMut;
	/// Sorts the array using top-down merge sort with a comparator function.
	#[cfg(feature = "alloc")]
	fn merge_sort_by<F>(&mut self, compare: F)
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;
	/// Sorts the array in parallel using top-down merge sort.
	///
	/// This sort is stable and *O*(*n* \* log(*n*)) worst-case.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heap::{ndarray::arr1, Heap1Ext};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	/// v.par_merge_sort();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	#[cfg(feature = "rayon")]
	fn par_merge_sort(&mut self)
	where
		A: Ord + Clone + Send,
		S: DataMut;
	/// Sorts the array in place using quicksort.
	///
	/// This sort is unstable and *O*(*n* \* log(*n*)) worst-case.
	///
	/// # Current Implementation
	///
	/// Partitions around the median of the first, middle, and last element, recursing into the
	/// shorter side and iterating on the longer one. Runs of elements equal to a preceding pivot
	/// are skipped in one pass, short slices use insertion sort, and too many imbalanced
	/// partitions fall back to heap-sort.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heap::{ndarray::arr1, Heap1Ext};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	/// v.quick_sort();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	fn quick_sort(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array in place using quicksort with a comparator function.
	fn quick_sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;
	/// Sorts the array in parallel using quicksort.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heap::{ndarray::arr1, Heap1Ext};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	/// v.par_quick_sort();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	#[cfg(feature = "rayon")]
	fn par_quick_sort(&mut self)
	where
		A: Ord + Send,
		S: DataMut;
}

impl<A, S> Heap1Ext<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[inline]
	fn build_heap(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		build_heap(self.view_mut(), &mut A::lt);
	}
	#[inline]
	fn build_heap_by<F>(&mut self, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		build_heap(self.view_mut(), &mut |a: &A, b: &A| compare(a, b) == Less);
	}
	#[inline]
	fn is_heap(&self) -> bool
	where
		A: Ord,
	{
		is_heap(self.view(), &mut A::lt)
	}
	#[inline]
	fn is_heap_by<F>(&self, mut compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Ordering,
	{
		is_heap(self.view(), &mut |a: &A, b: &A| compare(a, b) == Less)
	}
	#[inline]
	fn heap_sort(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		heap_sort(self.view_mut(), A::lt);
	}
	#[inline]
	fn heap_sort_by<F>(&mut self, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		heap_sort(self.view_mut(), |a: &A, b: &A| compare(a, b) == Less);
	}
	#[inline]
	fn heap_sort_by_key<K, F>(&mut self, mut f: F)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut,
	{
		heap_sort(self.view_mut(), |a: &A, b: &A| f(a).lt(&f(b)));
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn merge_sort(&mut self)
	where
		A: Ord + Clone,
		S: DataMut,
	{
		merge_sort(self.view_mut(), A::lt);
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn merge_sort_by<F>(&mut self, mut compare: F)
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		merge_sort(self.view_mut(), |a: &A, b: &A| compare(a, b) == Less);
	}
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_merge_sort(&mut self)
	where
		A: Ord + Clone + Send,
		S: DataMut,
	{
		par_merge_sort(self.view_mut(), A::lt);
	}
	#[inline]
	fn quick_sort(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		quick_sort(self.view_mut(), A::lt);
	}
	#[inline]
	fn quick_sort_by<F>(&mut self, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		quick_sort(self.view_mut(), |a: &A, b: &A| compare(a, b) == Less);
	}
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_quick_sort(&mut self)
	where
		A: Ord + Send,
		S: DataMut,
	{
		par_quick_sort(self.view_mut(), A::lt);
	}
}
