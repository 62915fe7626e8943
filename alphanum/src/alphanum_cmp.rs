use crate::{Error, Operand, chunk::next_chunk};
use std::cmp::Ordering;

/// Compares two strings in alphanumeric ("natural") order.
///
/// Both strings are walked chunk by chunk, a chunk being a maximal run of ASCII digits
/// or of non-digits. Two digit chunks compare by numeric magnitude, so `"item2"` sorts
/// before `"item10"` and `"item007"` equals `"item7"`; any other pair of chunks compares
/// literally. A string that runs out of chunks first sorts first.
///
/// ```
/// use alphanum::alphanum_cmp;
/// use std::cmp::Ordering;
///
/// assert_eq!(alphanum_cmp("item2", "item10"), Ordering::Less);
/// assert_eq!(alphanum_cmp("x__2", "x_1"), Ordering::Greater);
/// ```
#[must_use]
pub fn alphanum_cmp(a: &str, b: &str) -> Ordering {
	alphanum_cmp_bytes(a.as_bytes(), b.as_bytes())
}

/// [`alphanum_cmp`] over raw bytes, for inputs such as `OsStr::as_encoded_bytes`.
#[must_use]
pub fn alphanum_cmp_bytes(a: &[u8], b: &[u8]) -> Ordering {
	let mut a_offset = 0;
	let mut b_offset = 0;

	while a_offset < a.len() || b_offset < b.len() {
		if a_offset >= a.len() {
			return Ordering::Less;
		}

		if b_offset >= b.len() {
			return Ordering::Greater;
		}

		let (a_chunk, a_next) = next_chunk(a, a_offset);
		let (b_chunk, b_next) = next_chunk(b, b_offset);
		a_offset = a_next;
		b_offset = b_next;

		match chunk_cmp(a_chunk, b_chunk) {
			Ordering::Equal => {}
			ord => return ord,
		}
	}

	Ordering::Equal
}

/// [`alphanum_cmp`] for operands that may be absent.
///
/// # Errors
///
/// Returns [`Error::MissingOperand`] naming the first absent operand.
pub fn try_alphanum_cmp(a: Option<&str>, b: Option<&str>) -> Result<Ordering, Error> {
	let a = a.ok_or(Error::MissingOperand(Operand::Left))?;
	let b = b.ok_or(Error::MissingOperand(Operand::Right))?;

	Ok(alphanum_cmp(a, b))
}

fn chunk_cmp(a: &[u8], b: &[u8]) -> Ordering {
	match (a.first(), b.first()) {
		(Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => magnitude_cmp(a, b),
		_ => a.cmp(b),
	}
}

// digit runs of any length, no integer parsing
fn magnitude_cmp(a: &[u8], b: &[u8]) -> Ordering {
	let (_, a) = cut(a, |&c| c != b'0');
	let (_, b) = cut(b, |&c| c != b'0');

	a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn cut(s: &[u8], f: impl Fn(&u8) -> bool) -> (&[u8], &[u8]) {
	s.iter().position(f).map_or((s, &[]), |i| s.split_at(i))
}

#[cfg(test)]
mod tests {
	use super::*;
	use Ordering::{Equal, Greater, Less};

	#[test]
	fn digit_runs_compare_by_magnitude() {
		assert_eq!(alphanum_cmp("item2", "item10"), Less);
		assert_eq!(alphanum_cmp("item10", "item2"), Greater);
		assert_eq!(alphanum_cmp("item007", "item7"), Equal);
		assert_eq!(alphanum_cmp("x1", "x10"), Less);
		assert_eq!(alphanum_cmp("0", "000"), Equal);
		assert_eq!(alphanum_cmp("file2.txt", "file10.t"), Less);
		assert_eq!(alphanum_cmp("1.1.2", "1.2.1"), Less);
		assert_eq!(alphanum_cmp("101235555", "10406325"), Greater);
	}

	#[test]
	fn other_chunks_compare_literally() {
		assert_eq!(alphanum_cmp("abc", "abd"), Less);
		assert_eq!(alphanum_cmp("B", "a"), Less);
		assert_eq!(alphanum_cmp("a-1", "a_1"), Less);
		assert_eq!(alphanum_cmp("a1", "ab"), Less);
		assert_eq!(alphanum_cmp("1a", "a1"), Less);
	}

	#[test]
	fn shorter_prefix_sorts_first() {
		assert_eq!(alphanum_cmp("", ""), Equal);
		assert_eq!(alphanum_cmp("", "x"), Less);
		assert_eq!(alphanum_cmp("x", ""), Greater);
		assert_eq!(alphanum_cmp("x", "x1"), Less);
		assert_eq!(alphanum_cmp("x1", "x"), Greater);
		assert_eq!(alphanum_cmp("x1", "x1y"), Less);
	}

	#[test]
	fn separators_are_kept() {
		assert_eq!(alphanum_cmp("x_1", "x_2"), Less);
		assert_eq!(alphanum_cmp("x__2", "x_1"), Greater);
		assert_eq!(alphanum_cmp("a b", "ab"), Less);
	}

	#[test]
	fn long_digit_runs_do_not_overflow() {
		let u64_max = u64::MAX.to_string();
		let past_u64 = "18446744073709551616";
		let huge = format!("v{}", "9".repeat(200));
		let huger = format!("v1{}", "0".repeat(200));

		assert_eq!(alphanum_cmp(&u64_max, past_u64), Less);
		assert_eq!(alphanum_cmp(&huge, &huger), Less);
		assert_eq!(alphanum_cmp(&huger, &format!("v000{}", &huger[1..])), Equal);
	}

	#[test]
	fn multi_chunk_sort() {
		let mut v = ["hello world", "hello world 2", "hello 2 world"];
		v.sort_by(|a, b| alphanum_cmp(a, b));

		assert_eq!(v, ["hello 2 world", "hello world", "hello world 2"]);
	}

	#[test]
	fn bytes_match_str() {
		assert_eq!(alphanum_cmp_bytes(b"track9.wav", b"track10.wav"), Less);
		assert_eq!(alphanum_cmp_bytes(b"\xff1", b"\xff01"), Equal);
	}

	#[test]
	fn absent_operands_are_rejected() {
		assert_eq!(try_alphanum_cmp(Some("a2"), Some("a10")), Ok(Less));
		assert_eq!(
			try_alphanum_cmp(None, Some("a")),
			Err(Error::MissingOperand(Operand::Left))
		);
		assert_eq!(
			try_alphanum_cmp(Some("a"), None),
			Err(Error::MissingOperand(Operand::Right))
		);
		assert_eq!(
			try_alphanum_cmp(None, None),
			Err(Error::MissingOperand(Operand::Left))
		);
	}
}
