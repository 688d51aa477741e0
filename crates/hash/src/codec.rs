// Copyright 2025 Irreducible Inc.

//! Conversions between message bytes and words.

use crate::word::Word;

/// Byte order of words on the wire: big-endian for SHA, little-endian for RIPEMD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
	Big,
	Little,
}

/// Decodes `bytes` into `words`; `bytes` must hold exactly `words.len()` words.
#[inline]
pub fn decode<W: Word>(endian: Endian, bytes: &[u8], words: &mut [W]) {
	debug_assert_eq!(bytes.len(), words.len() * W::BYTES);

	for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(W::BYTES)) {
		*word = match endian {
			Endian::Big => W::from_be_slice(chunk),
			Endian::Little => W::from_le_slice(chunk),
		};
	}
}

/// Encodes leading `words` into `out`.
///
/// `out` may end in the middle of a word, in which case only the leading bytes of that word (in
/// wire order) are written.
#[inline]
pub fn encode<W: Word>(endian: Endian, words: &[W], out: &mut [u8]) {
	debug_assert!(out.len() <= words.len() * W::BYTES);

	for (chunk, &word) in out.chunks_mut(W::BYTES).zip(words) {
		if chunk.len() == W::BYTES {
			write(endian, word, chunk);
		} else {
			let mut full = [0u8; 16];
			write(endian, word, &mut full[..W::BYTES]);
			chunk.copy_from_slice(&full[..chunk.len()]);
		}
	}
}

#[inline(always)]
fn write<W: Word>(endian: Endian, word: W, out: &mut [u8]) {
	match endian {
		Endian::Big => word.write_be(out),
		Endian::Little => word.write_le(out),
	}
}

/// Writes the message length `bits` into the `out.len()` byte length field.
pub fn encode_count(endian: Endian, bits: u128, out: &mut [u8]) {
	let len = out.len();
	match endian {
		Endian::Big => out.copy_from_slice(&bits.to_be_bytes()[16 - len..]),
		Endian::Little => out.copy_from_slice(&bits.to_le_bytes()[..len]),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_decode_both_orders() {
		let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

		let mut words = [0u32; 2];
		decode(Endian::Big, &bytes, &mut words);
		assert_eq!(words, [0x01020304, 0x05060708]);

		decode(Endian::Little, &bytes, &mut words);
		assert_eq!(words, [0x04030201, 0x08070605]);
	}

	#[test]
	fn test_encode_partial_word() {
		let words = [0x0102030405060708u64, 0x1112131415161718];
		let mut out = [0u8; 12];
		encode(Endian::Big, &words, &mut out);
		assert_eq!(out, [1, 2, 3, 4, 5, 6, 7, 8, 0x11, 0x12, 0x13, 0x14]);
	}

	#[test]
	fn test_encode_count() {
		let mut out = [0u8; 8];
		encode_count(Endian::Big, 0x18, &mut out);
		assert_eq!(out, [0, 0, 0, 0, 0, 0, 0, 0x18]);

		encode_count(Endian::Little, 0x0200, &mut out);
		assert_eq!(out, [0, 2, 0, 0, 0, 0, 0, 0]);
	}
}
