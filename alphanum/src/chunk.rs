/// Whether `c` continues a chunk that started with `first`.
///
/// Chunks are maximal runs of either ASCII digits or non-digits; any byte that is not
/// `0..=9` (punctuation, whitespace, every byte of a multi-byte UTF-8 sequence) counts
/// as a non-digit.
#[must_use]
pub const fn same_kind(c: u8, first: u8) -> bool {
	c.is_ascii_digit() == first.is_ascii_digit()
}

/// Splits off the chunk starting at `offset`.
///
/// Returns the chunk and the offset right after it. At or past the end of `s` the
/// chunk is empty and the offset is returned unchanged.
#[must_use]
pub fn next_chunk(s: &[u8], offset: usize) -> (&[u8], usize) {
	let Some(rest) = s.get(offset..).filter(|rest| !rest.is_empty()) else {
		return (&[], offset);
	};

	let first = rest[0];
	let len = rest
		.iter()
		.position(|&c| !same_kind(c, first))
		.unwrap_or(rest.len());

	(&rest[..len], offset + len)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn classifies_by_digit_only() {
		assert!(same_kind(b'1', b'9'));
		assert!(same_kind(b'a', b'_'));
		assert!(same_kind(b' ', b'Z'));
		assert!(!same_kind(b'0', b'a'));
		assert!(!same_kind(b'-', b'5'));
	}

	#[test]
	fn splits_maximal_runs() {
		let s = b"item007-b";

		assert_eq!(next_chunk(s, 0), (&b"item"[..], 4));
		assert_eq!(next_chunk(s, 4), (&b"007"[..], 7));
		assert_eq!(next_chunk(s, 7), (&b"-b"[..], 9));
	}

	#[test]
	fn starts_mid_run() {
		assert_eq!(next_chunk(b"abc12", 1), (&b"bc"[..], 3));
		assert_eq!(next_chunk(b"abc12", 4), (&b"2"[..], 5));
	}

	#[test]
	fn exhausted_offsets_yield_empty_chunks() {
		assert_eq!(next_chunk(b"", 0), (&b""[..], 0));
		assert_eq!(next_chunk(b"ab", 2), (&b""[..], 2));
		assert_eq!(next_chunk(b"ab", 7), (&b""[..], 7));
	}

	#[test]
	fn multibyte_chars_stay_whole() {
		let s = "caf\u{e9}2".as_bytes();
		let (chunk, next) = next_chunk(s, 0);

		assert_eq!(std::str::from_utf8(chunk), Ok("caf\u{e9}"));
		assert_eq!(next_chunk(s, next), (&b"2"[..], s.len()));
	}
}
