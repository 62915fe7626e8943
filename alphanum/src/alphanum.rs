use crate::alphanum_cmp;
use std::{
	cmp::Ordering,
	fmt::{Debug, Display, Formatter},
	ops::Deref,
};

/// Orders the wrapped string in alphanumeric order.
///
/// Useful wherever an [`Ord`] key is needed: `BTreeSet`, `sort_by_key`, `max`.
/// Equality follows the ordering, so `Alphanum("a7") == Alphanum("a007")`. For the
/// same reason there are no `Hash` or `Borrow` implementations.
#[derive(Clone, Copy, Default)]
pub struct Alphanum<T>(pub T);

impl<T> Alphanum<T> {
	#[must_use]
	pub fn into_inner(self) -> T {
		self.0
	}
}

impl<T: AsRef<str>> PartialEq for Alphanum<T> {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl<T: AsRef<str>> Eq for Alphanum<T> {}

impl<T: AsRef<str>> PartialOrd for Alphanum<T> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<T: AsRef<str>> Ord for Alphanum<T> {
	fn cmp(&self, other: &Self) -> Ordering {
		alphanum_cmp(self.0.as_ref(), other.0.as_ref())
	}
}

impl<T: Debug> Debug for Alphanum<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T: Display> Display for Alphanum<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> AsRef<T> for Alphanum<T> {
	fn as_ref(&self) -> &T {
		&self.0
	}
}

impl<T> Deref for Alphanum<T> {
	type Target = T;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl<T> From<T> for Alphanum<T> {
	fn from(value: T) -> Self {
		Self(value)
	}
}
