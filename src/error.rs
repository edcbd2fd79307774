use thiserror::Error;

/// Failures of [`MinHeap`](crate::MinHeap) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
	/// The heap holds no entry to return.
	#[error("heap is empty and has no minimum entry")]
	Empty,
	/// An index outside of the occupied range, or the parent of the root, was requested.
	///
	/// Only internal restoration steps validate indices, so this never surfaces through the
	/// public API of a correct heap.
	#[error("invalid heap index {index} for heap of length {len}")]
	InvalidIndex {
		/// Requested index.
		index: usize,
		/// Heap length at the time of the request.
		len: usize,
	},
}
