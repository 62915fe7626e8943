use crate::alphanum_cmp;

/// Sorts slices of strings in alphanumeric order using the standard slice sorts.
pub trait AlphanumSortExt<T> {
	/// Stable: elements that compare equal (`"a7"`, `"a007"`) keep their order.
	fn alphanum_sort(&mut self)
	where
		T: AsRef<str>;

	fn alphanum_sort_unstable(&mut self)
	where
		T: AsRef<str>;

	fn alphanum_sort_by_key<K: AsRef<str>>(&mut self, f: impl FnMut(&T) -> K);
}

impl<T> AlphanumSortExt<T> for [T] {
	fn alphanum_sort(&mut self)
	where
		T: AsRef<str>,
	{
		self.sort_by(|a, b| alphanum_cmp(a.as_ref(), b.as_ref()));
	}

	fn alphanum_sort_unstable(&mut self)
	where
		T: AsRef<str>,
	{
		self.sort_unstable_by(|a, b| alphanum_cmp(a.as_ref(), b.as_ref()));
	}

	fn alphanum_sort_by_key<K: AsRef<str>>(&mut self, mut f: impl FnMut(&T) -> K) {
		self.sort_by(|a, b| alphanum_cmp(f(a).as_ref(), f(b).as_ref()));
	}
}
