use core::cmp::Ordering;

/// Payload paired with the priority it is ordered by.
///
/// Entries are ordered lexicographically: the priority is the primary key and the value breaks
/// ties between equal priorities. The default priority is `P::default()` (e.g., `0` for the
/// default `i32` priority).
///
/// ```
/// use ndarray_heap::Entry;
///
/// let low: Entry<char> = Entry::with_priority('z', -1);
/// let high: Entry<char> = Entry::new('a');
/// assert!(low < high);
/// assert!(Entry::<char>::new('a') < Entry::new('b'));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Entry<V, P = i32> {
	value: V,
	priority: P,
}

impl<V, P> Entry<V, P> {
	/// Creates an entry of `value` with default priority.
	#[inline]
	pub fn new(value: V) -> Self
	where
		P: Default,
	{
		Self::with_priority(value, P::default())
	}
	/// Creates an entry of `value` with explicit `priority`.
	#[inline]
	pub const fn with_priority(value: V, priority: P) -> Self {
		Self { value, priority }
	}
	/// The payload.
	#[inline]
	pub const fn value(&self) -> &V {
		&self.value
	}
	/// The priority.
	#[inline]
	pub const fn priority(&self) -> &P {
		&self.priority
	}
	/// Unwraps the payload.
	#[inline]
	pub fn into_value(self) -> V {
		self.value
	}
	/// Unwraps the `(value, priority)` pair.
	#[inline]
	pub fn into_parts(self) -> (V, P) {
		(self.value, self.priority)
	}
}

impl<V, P> From<(V, P)> for Entry<V, P> {
	#[inline]
	fn from((value, priority): (V, P)) -> Self {
		Self::with_priority(value, priority)
	}
}

impl<V: Ord, P: Ord> Ord for Entry<V, P> {
	#[inline]
	fn cmp(&self, other: &Self) -> Ordering {
		self.priority
			.cmp(&other.priority)
			.then_with(|| self.value.cmp(&other.value))
	}
}

impl<V: Ord, P: Ord> PartialOrd for Entry<V, P> {
	#[inline]
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

#[cfg(test)]
mod test {
	use super::Entry;
	use quickcheck_macros::quickcheck;

	#[test]
	fn priority_before_value() {
		let a = Entry::with_priority(9, 0);
		let b = Entry::with_priority(1, 1);
		// Priority order and value order disagree.
		assert!(a < b);
		assert!(Entry::with_priority(1, 0) < Entry::with_priority(9, 0));
	}

	#[test]
	fn default_priority() {
		let entry: Entry<&str> = Entry::new("x");
		assert_eq!(*entry.priority(), 0);
		assert_eq!(entry, Entry::from(("x", 0)));
	}

	#[quickcheck]
	fn lexicographic(a: (u8, i8), b: (u8, i8)) -> bool {
		let ordering = Entry::from(a).cmp(&Entry::from(b));
		ordering == (a.1, a.0).cmp(&(b.1, b.0))
	}
}
