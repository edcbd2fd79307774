#![cfg(feature = "alloc")]

use crate::{
	entry::Entry,
	error::HeapError,
	sift::{self, sift_down, sift_up},
};
use core::slice;
use ndarray::{ArrayView1, ArrayViewMut1, s};

#[cfg(not(feature = "std"))]
extern crate alloc as no_std_alloc;
#[cfg(not(feature = "std"))]
use no_std_alloc::vec::Vec;

/// Binary min-heap stored as an implicit complete binary tree in a growable array.
///
/// The root lives at index `0`, the children of index `i` at `2 * i + 1` and `2 * i + 2`. No
/// entry is greater than either of its children under the lexicographic order of [`Entry`].
///
/// # Current Implementation
///
/// | Operation          | Best   | Worst            |
/// |--------------------|--------|------------------|
/// | [`insert`]         | *O*(1) | *O*(log *n*)     |
/// | [`get_min`]        | *O*(1) | *O*(1)           |
/// | [`delete_min`]     | *O*(1) | *O*(log *n*)     |
/// | [`replace_min`]    | *O*(1) | *O*(log *n*)     |
/// | [`build_heap`]     | *O*(*n*) | *O*(*n*)       |
/// | [`sort_in_place`]  | *O*(*n* log *n*) | *O*(*n* log *n*) |
///
/// [`insert`]: MinHeap::insert
/// [`get_min`]: MinHeap::get_min
/// [`delete_min`]: MinHeap::delete_min
/// [`replace_min`]: MinHeap::replace_min
/// [`build_heap`]: MinHeap::build_heap
/// [`sort_in_place`]: MinHeap::sort_in_place
///
/// # Examples
///
/// ```
/// use ndarray_heap::MinHeap;
///
/// let mut heap: MinHeap<u32> = MinHeap::from_values([9, 25, 86, 3, 29, 5, 55]);
/// assert_eq!(heap.get_min(), Ok(&3));
///
/// heap.insert_with_priority(100, -1);
/// assert_eq!(heap.delete_min(), Ok(100));
/// assert_eq!(heap.delete_min(), Ok(3));
/// assert_eq!(heap.size(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct MinHeap<V, P = i32> {
	entries: Vec<Entry<V, P>>,
}

impl<V, P> Default for MinHeap<V, P> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<V, P> MinHeap<V, P> {
	/// Creates an empty heap.
	#[inline]
	pub const fn new() -> Self {
		Self {
			entries: Vec::new(),
		}
	}
	/// Creates an empty heap with space for at least `capacity` entries.
	#[inline]
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			entries: Vec::with_capacity(capacity),
		}
	}
	/// Loads `values` with default priority directly into the backing array, bypassing
	/// [`insert`](Self::insert).
	///
	/// The heap order does not hold until [`build_heap`](Self::build_heap) is called.
	pub fn from_unordered<I>(values: I) -> Self
	where
		I: IntoIterator<Item = V>,
		P: Default,
	{
		Self::from_unordered_entries(values.into_iter().map(Entry::new))
	}
	/// Loads `entries` directly into the backing array, bypassing [`push`](Self::push).
	///
	/// The heap order does not hold until [`build_heap`](Self::build_heap) is called.
	pub fn from_unordered_entries<I>(entries: I) -> Self
	where
		I: IntoIterator<Item = Entry<V, P>>,
	{
		Self {
			entries: entries.into_iter().collect(),
		}
	}
	/// Whether the heap holds no entry.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
	/// Number of entries.
	#[inline]
	pub fn size(&self) -> usize {
		self.entries.len()
	}
	/// Number of entries, same as [`size`](Self::size).
	#[inline]
	pub fn len(&self) -> usize {
		self.size()
	}
	/// The backing array in storage order.
	#[inline]
	pub fn entries(&self) -> &[Entry<V, P>] {
		&self.entries
	}
	/// Iterates the payloads in storage order.
	#[inline]
	pub fn values(&self) -> Values<'_, V, P> {
		Values {
			iter: self.entries.iter(),
		}
	}
	/// Unwraps the backing array in storage order.
	#[inline]
	pub fn into_entries(self) -> Vec<Entry<V, P>> {
		self.entries
	}
	/// Unwraps the payloads in storage order.
	pub fn into_values(self) -> Vec<V> {
		self.entries.into_iter().map(Entry::into_value).collect()
	}
	/// The root entry.
	///
	/// # Errors
	///
	/// Fails with [`HeapError::Empty`] if the heap is empty.
	#[inline]
	pub fn peek_min_entry(&self) -> Result<&Entry<V, P>, HeapError> {
		self.entries.first().ok_or(HeapError::Empty)
	}
	/// The value of the root entry without removing it.
	///
	/// # Errors
	///
	/// Fails with [`HeapError::Empty`] if the heap is empty.
	#[inline]
	pub fn get_min(&self) -> Result<&V, HeapError> {
		self.peek_min_entry().map(Entry::value)
	}
	/// Exchanges the entries at indices `i` and `j`.
	///
	/// Gives sorting routines direct control over the backing array. Swapping may break the heap
	/// order, see [`heapify_subtree`](Self::heapify_subtree) and [`build_heap`](Self::build_heap).
	///
	/// # Panics
	///
	/// Panics if `i` or `j` is out of bounds.
	#[inline]
	pub fn swap(&mut self, i: usize, j: usize) {
		self.entries.swap(i, j);
	}
	#[inline]
	fn view(&self) -> ArrayView1<'_, Entry<V, P>> {
		ArrayView1::from(self.entries.as_slice())
	}
	#[inline]
	fn view_mut(&mut self) -> ArrayViewMut1<'_, Entry<V, P>> {
		ArrayViewMut1::from(self.entries.as_mut_slice())
	}
	#[inline]
	fn last_index(&self) -> Option<usize> {
		self.entries.len().checked_sub(1)
	}
	fn checked_index(&self, index: usize) -> Result<usize, HeapError> {
		match self.last_index() {
			Some(last) if index <= last => Ok(index),
			_ => Err(HeapError::InvalidIndex {
				index,
				len: self.entries.len(),
			}),
		}
	}
	fn parent_index(&self, index: usize) -> Result<usize, HeapError> {
		if index == 0 {
			return Err(HeapError::InvalidIndex {
				index,
				len: self.entries.len(),
			});
		}
		Ok((index - 1) >> 1)
	}
	#[inline]
	const fn left_child_index(index: usize) -> usize {
		(index << 1) + 1
	}
	#[inline]
	const fn right_child_index(index: usize) -> usize {
		(index << 1) + 2
	}
}

impl<V: Ord, P: Ord> MinHeap<V, P> {
	/// Creates a heap by inserting `values` with default priority one at a time.
	///
	/// This is *O*(*n* log *n*), see [`from_unordered`](Self::from_unordered) followed by
	/// [`build_heap`](Self::build_heap) for *O*(*n*).
	pub fn from_values<I>(values: I) -> Self
	where
		I: IntoIterator<Item = V>,
		P: Default,
	{
		Self::from_entries(values.into_iter().map(Entry::new))
	}
	/// Creates a heap by pushing `entries` one at a time.
	pub fn from_entries<I>(entries: I) -> Self
	where
		I: IntoIterator<Item = Entry<V, P>>,
	{
		let mut heap = Self::new();
		heap.extend(entries);
		heap
	}
	/// Inserts `value` with default priority.
	#[inline]
	pub fn insert(&mut self, value: V)
	where
		P: Default,
	{
		self.push(Entry::new(value));
	}
	/// Inserts `value` with `priority`.
	#[inline]
	pub fn insert_with_priority(&mut self, value: V, priority: P) {
		self.push(Entry::with_priority(value, priority));
	}
	/// Appends `entry` as the next leaf and bubbles it up until its parent is not greater.
	pub fn push(&mut self, entry: Entry<V, P>) {
		self.entries.push(entry);
		let last = self.entries.len() - 1;
		if let Err(error) = self.bubble_up(last) {
			unreachable!("{error}");
		}
	}
	/// Removes and returns the value of the root entry.
	///
	/// The last leaf takes the place of the root and bubbles down.
	///
	/// # Errors
	///
	/// Fails with [`HeapError::Empty`] if the heap is empty.
	pub fn delete_min(&mut self) -> Result<V, HeapError> {
		let last = self.entries.pop().ok_or(HeapError::Empty)?;
		if self.entries.is_empty() {
			return Ok(last.into_value());
		}
		let min = core::mem::replace(&mut self.entries[0], last);
		if self.entries.len() > 1 {
			self.bubble_down(0)?;
		}
		Ok(min.into_value())
	}
	/// Replaces the root with `value` of default priority and returns the former root value.
	///
	/// # Errors
	///
	/// Fails with [`HeapError::Empty`] if the heap is empty.
	#[inline]
	pub fn replace_min(&mut self, value: V) -> Result<V, HeapError>
	where
		P: Default,
	{
		self.replace_min_entry(Entry::new(value))
	}
	/// Replaces the root with `value` of `priority` and returns the former root value.
	///
	/// # Errors
	///
	/// Fails with [`HeapError::Empty`] if the heap is empty.
	#[inline]
	pub fn replace_min_with_priority(&mut self, value: V, priority: P) -> Result<V, HeapError> {
		self.replace_min_entry(Entry::with_priority(value, priority))
	}
	/// Replaces the root with `entry` and returns the former root value.
	///
	/// Cheaper than [`delete_min`](Self::delete_min) followed by [`push`](Self::push) as the
	/// array neither shrinks nor grows and only a single restoration pass is performed.
	///
	/// # Errors
	///
	/// Fails with [`HeapError::Empty`] if the heap is empty.
	pub fn replace_min_entry(&mut self, entry: Entry<V, P>) -> Result<V, HeapError> {
		let root = self.entries.first_mut().ok_or(HeapError::Empty)?;
		let min = core::mem::replace(root, entry);
		if self.entries.len() > 1 {
			self.bubble_down(0)?;
		}
		Ok(min.into_value())
	}
	/// Sifts the entry at `root` down within the live prefix `[0, bound)`.
	///
	/// Indices at or beyond `bound` are treated as nonexistent, so heap-sort can grow a sorted
	/// suffix without truncating the array. A `root` at or beyond `bound` is left untouched.
	///
	/// # Panics
	///
	/// Panics if `bound > self.size()`.
	pub fn heapify_subtree(&mut self, root: usize, bound: usize) {
		sift_down(self.view_mut().slice_move(s![..bound]), root, &mut Entry::lt);
	}
	/// Restores the heap order of an arbitrary backing array in *O*(*n*).
	pub fn build_heap(&mut self) {
		log::trace!("building heap of {} entries", self.entries.len());
		for root in (0..self.entries.len() / 2).rev() {
			self.heapify_subtree(root, self.entries.len());
		}
	}
	/// Whether no entry is greater than either of its children.
	pub fn is_heap(&self) -> bool {
		sift::is_heap(self.view(), &mut Entry::lt)
	}
	/// Sorts the backing array ascending in place using heap-sort.
	///
	/// Builds the heap, then repeatedly swaps the root into the sorted suffix and restores the
	/// shrinking live prefix. This leaves the array descending, which is reversed in place. An
	/// ascending array is a valid heap, so the heap stays usable.
	///
	/// ```
	/// use ndarray_heap::MinHeap;
	///
	/// let mut heap: MinHeap<u32> = MinHeap::from_unordered([9, 25, 86, 3, 29, 5, 55]);
	/// heap.sort_in_place();
	/// assert!(heap.values().eq(&[3, 5, 9, 25, 29, 55, 86]));
	/// assert!(heap.is_heap());
	/// ```
	pub fn sort_in_place(&mut self) {
		log::trace!("sorting heap of {} entries", self.entries.len());
		self.build_heap();
		for last in (1..self.entries.len()).rev() {
			self.swap(0, last);
			self.heapify_subtree(0, last);
		}
		self.entries.reverse();
	}
	fn bubble_up(&mut self, index: usize) -> Result<(), HeapError> {
		if index == 0 {
			return Ok(());
		}
		let index = self.checked_index(index)?;
		let parent = self.parent_index(index)?;
		if self.entries[index] < self.entries[parent] {
			self.swap(index, parent);
			sift_up(self.view_mut(), parent, &mut Entry::lt);
		}
		Ok(())
	}
	fn bubble_down(&mut self, index: usize) -> Result<(), HeapError> {
		let index = self.checked_index(index)?;
		let (left, right) = (Self::left_child_index(index), Self::right_child_index(index));
		let Some(last) = self.last_index().filter(|&last| left <= last) else {
			// Leaf.
			return Ok(());
		};
		let child = if right <= last && self.entries[right] < self.entries[left] {
			right
		} else {
			left
		};
		if self.entries[child] < self.entries[index] {
			self.swap(index, child);
			sift_down(self.view_mut(), child, &mut Entry::lt);
		}
		Ok(())
	}
}

impl<V: Ord, P: Ord> Extend<Entry<V, P>> for MinHeap<V, P> {
	fn extend<I: IntoIterator<Item = Entry<V, P>>>(&mut self, entries: I) {
		let entries = entries.into_iter();
		self.entries.reserve(entries.size_hint().0);
		for entry in entries {
			self.push(entry);
		}
	}
}

impl<V: Ord, P: Ord> FromIterator<Entry<V, P>> for MinHeap<V, P> {
	#[inline]
	fn from_iter<I: IntoIterator<Item = Entry<V, P>>>(entries: I) -> Self {
		Self::from_entries(entries)
	}
}

impl<V: Ord, P: Ord> From<Vec<Entry<V, P>>> for MinHeap<V, P> {
	/// Takes over `entries` as backing array and builds the heap in *O*(*n*).
	fn from(entries: Vec<Entry<V, P>>) -> Self {
		let mut heap = Self { entries };
		heap.build_heap();
		heap
	}
}

/// Iterator over the payloads of a [`MinHeap`] in storage order.
///
/// Created by [`MinHeap::values`].
#[derive(Debug, Clone)]
pub struct Values<'a, V, P> {
	iter: slice::Iter<'a, Entry<V, P>>,
}

impl<'a, V, P> Iterator for Values<'a, V, P> {
	type Item = &'a V;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		self.iter.next().map(Entry::value)
	}
	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.iter.size_hint()
	}
}

impl<V, P> ExactSizeIterator for Values<'_, V, P> {}
