// Copyright 2025 Irreducible Inc.

//! Padding templates.
//!
//! A padded message ends with a sentinel `1` bit, zeros, and the message length in bits in the
//! last two words of the final block. Every hash of a statically known shape (one block, one
//! half block, one digest) finishes with the same words, so those are computed once per algorithm;
//! the one that always follows a whole block is stored already expanded.

use super::{schedule::schedule, zeroed_buffer, Params, Sha, BLOCK_WORDS, COUNT_WORDS};
use crate::word::{Word, WordArray, WordOps};

/// The padding templates of one SHA variant.
#[derive(Debug)]
pub struct Pads<H: Sha> {
	block: H::Buffer<H::Word>,
	chunk: [H::Word; BLOCK_WORDS],
	digest: [H::Word; BLOCK_WORDS],
	stream: [H::Word; BLOCK_WORDS],
}

impl<H: Sha> Pads<H> {
	pub fn new() -> Self {
		let block_words = template::<H::Word>(0, Params::<H>::BLOCK_BITS);
		let mut block = zeroed_buffer::<H, H::Word>();
		block.as_mut()[..BLOCK_WORDS].copy_from_slice(&block_words);
		schedule::<H, H::Word>(&mut block);

		Self {
			block,
			chunk: template(Params::<H>::CHUNK_WORDS, (Params::<H>::CHUNK_BYTES * 8) as u128),
			digest: template(Params::<H>::DIGEST_WORDS, (H::DIGEST_BYTES * 8) as u128),
			stream: template(0, 0),
		}
	}

	/// The block that follows a message of exactly one block, expanded.
	pub fn block_pad(&self) -> &H::Buffer<H::Word> {
		&self.block
	}

	/// The padding that completes a block whose first half is message data.
	pub fn chunk_pad(&self) -> &[H::Word] {
		&self.chunk[Params::<H>::CHUNK_WORDS..]
	}

	/// The padding that completes a block whose leading words hold a digest.
	pub fn digest_pad(&self) -> &[H::Word] {
		&self.digest[Params::<H>::DIGEST_WORDS..]
	}

	/// The unexpanded final block of a message of `blocks` whole blocks.
	pub fn stream_pad(&self, blocks: u64) -> [H::Word; BLOCK_WORDS] {
		let mut words = self.stream;
		write_count(&mut words, blocks as u128 * Params::<H>::BLOCK_BITS);
		words
	}

	/// The expanded final block of a message of `blocks` whole blocks.
	pub fn count_pad(&self, blocks: u64) -> H::Buffer<H::Word> {
		if blocks == 1 {
			return self.block;
		}

		let mut buffer = zeroed_buffer::<H, H::Word>();
		buffer.as_mut()[..BLOCK_WORDS].copy_from_slice(&self.stream_pad(blocks));
		schedule::<H, H::Word>(&mut buffer);
		buffer
	}

	/// Overwrites the last `words.len()` words of the block in `buffer` with `words`, broadcast
	/// to all lanes.
	#[inline]
	pub(crate) fn load<T: WordOps<Scalar = H::Word>>(buffer: &mut H::Buffer<T>, words: &[H::Word]) {
		let from = BLOCK_WORDS - words.len();
		for (i, &word) in words.iter().enumerate() {
			buffer[from + i] = T::splat(word);
		}
	}

	/// The expanded block pad, broadcast to all lanes.
	pub(crate) fn block_pad_lanes<T: WordOps<Scalar = H::Word>>(&self) -> H::Buffer<T> {
		<H::Buffer<T> as WordArray<T>>::from_fn(|i| T::splat(self.block[i]))
	}
}

impl<H: Sha> Default for Pads<H> {
	fn default() -> Self {
		Self::new()
	}
}

/// A block of `data_words` words of message followed by its padding, with the message words
/// left zero.
fn template<W: Word>(data_words: usize, bits: u128) -> [W; BLOCK_WORDS] {
	let mut words = [W::default(); BLOCK_WORDS];
	if data_words < BLOCK_WORDS - COUNT_WORDS {
		words[data_words] = W::truncate(1 << (W::BITS - 1));
	}
	write_count(&mut words, bits);
	words
}

fn write_count<W: Word>(words: &mut [W; BLOCK_WORDS], bits: u128) {
	words[BLOCK_WORDS - 2] = W::truncate(bits >> W::BITS);
	words[BLOCK_WORDS - 1] = W::truncate(bits);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::sha::{H160, H256, H384, H512};

	#[test]
	fn test_sha256_templates() {
		let pads = H256::pads();

		let mut expected_chunk = [0u32; 8];
		expected_chunk[0] = 0x8000_0000;
		expected_chunk[7] = 256;
		assert_eq!(pads.chunk_pad(), expected_chunk);

		// The digest fills exactly half a block, so the two pads agree.
		assert_eq!(pads.digest_pad(), pads.chunk_pad());

		let stream = pads.stream_pad(3);
		assert_eq!(stream[0], 0x8000_0000);
		assert_eq!(stream[14], 0);
		assert_eq!(stream[15], 3 * 512);
	}

	#[test]
	fn test_sha1_digest_pad_follows_five_words() {
		let pads = H160::pads();
		let digest_pad = pads.digest_pad();
		assert_eq!(digest_pad.len(), 11);
		assert_eq!(digest_pad[0], 0x8000_0000);
		assert_eq!(digest_pad[10], 160);
	}

	#[test]
	fn test_sha512_count_uses_two_words() {
		let stream = H512::pads().stream_pad(u64::MAX);
		let bits = u64::MAX as u128 * 1024;
		assert_eq!(stream[14], (bits >> 64) as u64);
		assert_eq!(stream[15], bits as u64);

		let digest_pad = H384::pads().digest_pad();
		assert_eq!(digest_pad.len(), 10);
		assert_eq!(digest_pad[9], 384);
	}

	#[test]
	fn test_count_pad_of_one_block_is_block_pad() {
		let pads = H256::pads();
		assert_eq!(pads.count_pad(1), *pads.block_pad());

		let mut expected = [0u32; 64];
		expected[..16].copy_from_slice(&pads.stream_pad(1));
		schedule::<H256, u32>(&mut expected);
		assert_eq!(*pads.block_pad(), expected);
	}
}
