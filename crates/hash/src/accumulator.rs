// Copyright 2025 Irreducible Inc.

//! Streaming hashing of byte messages of any length.

use std::{cmp::min, fmt, io};

use bitsys_utils::ensure;
use bytemuck::Zeroable;
use digest::{
	core_api::BlockSizeUser, FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser,
	Reset, Update,
};

use crate::hasher::{HashError, Hasher};

/// Buffers a byte stream into whole blocks and compresses each as soon as it is complete.
///
/// Implements the [`digest`] traits, so an `Accumulator<A>` is a [`digest::Digest`].
pub struct Accumulator<A: Hasher> {
	state: A::State,
	buffer: A::Block,
	/// Bytes of `buffer` holding message data, always less than a block.
	pending: usize,
	/// Whole blocks compressed into `state`.
	blocks: u64,
}

impl<A: Hasher> Accumulator<A> {
	pub fn new() -> Self {
		Self {
			state: A::initial(),
			buffer: A::Block::zeroed(),
			pending: 0,
			blocks: 0,
		}
	}

	/// An accumulator that has already absorbed `block`.
	pub(crate) fn with_block(block: &A::Block) -> Self {
		let mut accumulator = Self::new();
		A::accumulate(&mut accumulator.state, block);
		accumulator.blocks = 1;
		accumulator
	}

	/// Bytes written so far.
	pub fn size(&self) -> u64 {
		self.blocks * A::BLOCK_BYTES as u64 + self.pending as u64
	}

	/// Appends `data` to the message.
	///
	/// Fails without consuming anything when the message would outgrow the length field.
	pub fn write(&mut self, mut data: &[u8]) -> Result<(), HashError> {
		let attempted = self.size() as u128 + data.len() as u128;
		ensure!(
			attempted <= A::LIMIT_BYTES as u128,
			HashError::LimitExceeded {
				limit: A::LIMIT_BYTES,
				attempted,
			}
		);

		if self.pending > 0 {
			let fill = min(A::BLOCK_BYTES - self.pending, data.len());
			self.buffer.as_mut()[self.pending..self.pending + fill].copy_from_slice(&data[..fill]);
			self.advance(fill);
			data = &data[fill..];
		}

		let whole = data.len() - data.len() % A::BLOCK_BYTES;
		if whole > 0 {
			let blocks: &[A::Block] = bytemuck::cast_slice(&data[..whole]);
			A::accumulate_blocks(&mut self.state, blocks);
			self.blocks += blocks.len() as u64;
		}

		let tail = &data[whole..];
		self.buffer.as_mut()[self.pending..self.pending + tail.len()].copy_from_slice(tail);
		self.pending += tail.len();
		Ok(())
	}

	/// Finalizes the message and resets the accumulator.
	pub fn flush(&mut self) -> A::Digest {
		let digest = if self.pending == 0 {
			A::finalize(self.state, self.blocks)
		} else {
			A::finish(self.state, &self.buffer.as_ref()[..self.pending], self.size())
		};
		self.reset();
		digest
	}

	/// Finalizes the message, hashes the digest again and resets the accumulator.
	pub fn double_flush(&mut self) -> A::Digest {
		A::rehash(&self.flush())
	}

	pub fn finalize(mut self) -> A::Digest {
		self.flush()
	}

	pub fn reset(&mut self) {
		*self = Self::new();
	}

	/// Bytes buffered towards the next block.
	pub(crate) fn pending(&self) -> usize {
		self.pending
	}

	/// The running state, for callers that compress whole blocks themselves.
	///
	/// Only valid while nothing is pending; `blocks` is added to the block count.
	pub(crate) fn state_for_blocks(&mut self, blocks: u64) -> &mut A::State {
		debug_assert_eq!(self.pending, 0);
		self.blocks += blocks;
		&mut self.state
	}

	/// The unfilled part of the block buffer.
	pub(crate) fn spare_mut(&mut self) -> &mut [u8] {
		&mut self.buffer.as_mut()[self.pending..]
	}

	/// Marks `count` more bytes of the block buffer as message data, compressing a completed block.
	pub(crate) fn advance(&mut self, count: usize) {
		self.pending += count;
		debug_assert!(self.pending <= A::BLOCK_BYTES);

		if self.pending == A::BLOCK_BYTES {
			A::accumulate(&mut self.state, &self.buffer);
			self.blocks += 1;
			self.pending = 0;
		}
	}
}

impl<A: Hasher> Default for Accumulator<A> {
	fn default() -> Self {
		Self::new()
	}
}

impl<A: Hasher> Clone for Accumulator<A> {
	fn clone(&self) -> Self {
		Self {
			state: self.state,
			buffer: self.buffer,
			pending: self.pending,
			blocks: self.blocks,
		}
	}
}

impl<A: Hasher> fmt::Debug for Accumulator<A> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Accumulator")
			.field("algorithm", &A::NAME)
			.field("size", &self.size())
			.finish_non_exhaustive()
	}
}

impl<A: Hasher> HashMarker for Accumulator<A> {}

impl<A: Hasher> OutputSizeUser for Accumulator<A> {
	type OutputSize = A::OutputSize;
}

impl<A: Hasher> BlockSizeUser for Accumulator<A> {
	type BlockSize = A::BlockSize;
}

impl<A: Hasher> Update for Accumulator<A> {
	/// # Panics
	/// Panics if the message outgrows the length field of the algorithm.
	fn update(&mut self, data: &[u8]) {
		if let Err(err) = self.write(data) {
			panic!("{err}");
		}
	}
}

impl<A: Hasher> FixedOutput for Accumulator<A> {
	fn finalize_into(mut self, out: &mut Output<Self>) {
		out.copy_from_slice(self.flush().as_ref());
	}
}

impl<A: Hasher> FixedOutputReset for Accumulator<A> {
	fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
		out.copy_from_slice(self.flush().as_ref());
	}
}

impl<A: Hasher> Reset for Accumulator<A> {
	fn reset(&mut self) {
		Accumulator::reset(self);
	}
}

impl<A: Hasher> io::Write for Accumulator<A> {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		Accumulator::write(self, buf)
			.map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;
	use bytes::BufMut;
	use digest::Digest;
	use proptest::prelude::*;

	use super::*;
	use crate::{serialization::HashWriter, Rmd160, Sha1, Sha256, Sha512};

	fn check_split<A: Hasher>(data: &[u8], split: usize) {
		let split = split.min(data.len());
		let mut accumulator = Accumulator::<A>::new();
		accumulator.write(&data[..split]).unwrap();
		accumulator.write(&data[split..]).unwrap();
		assert_eq!(accumulator.size(), data.len() as u64);
		assert_eq!(accumulator.flush(), A::hash_bytes(data));
		assert_eq!(accumulator.size(), 0);
	}

	proptest! {
		#[test]
		fn test_split_writes_match_single_shot(
			data in prop::collection::vec(any::<u8>(), 0..400),
			split in 0usize..400,
		) {
			check_split::<Sha1>(&data, split);
			check_split::<Sha256>(&data, split);
			check_split::<Sha512>(&data, split);
			check_split::<Rmd160>(&data, split);
		}
	}

	#[test]
	fn test_pad_spills_into_second_block() {
		// 56 bytes leave no room for the sentinel and an eight byte count.
		let data = [0x61u8; 56];
		let mut accumulator = Accumulator::<Sha256>::new();
		accumulator.write(&data).unwrap();
		assert_eq!(accumulator.flush()[..], sha2::Sha256::digest(data)[..]);
	}

	#[test]
	fn test_digest_traits() {
		let mut hasher = <Accumulator<Sha512> as Digest>::new();
		Digest::update(&mut hasher, b"ab");
		Digest::update(&mut hasher, b"c");
		let first = hasher.finalize_reset();
		assert_eq!(first[..], Sha512::hash_bytes(b"abc")[..]);
		assert_eq!(hasher.finalize()[..], Sha512::hash_bytes(b"")[..]);
		assert_eq!(<Accumulator<Sha512> as Digest>::output_size(), 64);
	}

	#[test]
	fn test_io_write_and_double_flush() {
		let mut accumulator = Accumulator::<Sha256>::new();
		io::Write::write_all(&mut accumulator, b"hello").unwrap();
		assert_eq!(accumulator.double_flush(), Sha256::double_hash_bytes(b"hello"));
	}

	#[test]
	fn test_limit_is_enforced() {
		let mut accumulator = Accumulator::<Sha256>::new();
		accumulator.blocks = <Sha256 as Hasher>::LIMIT_BYTES / 64;
		let size = accumulator.size();

		assert_matches!(
			accumulator.write(&[0; 64]),
			Err(HashError::LimitExceeded { limit, .. }) if limit == u64::MAX / 8
		);
		assert_eq!(accumulator.size(), size);
		accumulator.write(&[0; 63]).unwrap();
	}

	#[test]
	fn test_writer_reports_remaining_bytes() {
		let mut accumulator = Accumulator::<Sha256>::new();
		accumulator.blocks = <Sha256 as Hasher>::LIMIT_BYTES / 64;

		let mut writer = HashWriter::new(&mut accumulator);
		assert_eq!(writer.remaining_mut(), 63);
		writer.put_slice(&[0; 63]);
		assert_eq!(writer.remaining_mut(), 0);
	}

	#[test]
	#[should_panic]
	fn test_writer_enforces_limit() {
		let mut accumulator = Accumulator::<Sha256>::new();
		accumulator.blocks = <Sha256 as Hasher>::LIMIT_BYTES / 64;

		HashWriter::new(&mut accumulator).put_slice(&[0; 64]);
	}
}
