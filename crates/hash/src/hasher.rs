// Copyright 2025 Irreducible Inc.

use std::fmt::Debug;

use bytemuck::Zeroable;
use digest::generic_array::ArrayLength;

use crate::{
	codec::{encode_count, Endian},
	word::ByteArray,
};

/// The streaming contract shared by every algorithm of the crate.
///
/// An implementation compresses whole blocks into a running state and knows how to pad and
/// serialize it. Everything that deals with messages of arbitrary byte length (the
/// [`Accumulator`](crate::Accumulator), HMAC, PBKDF2) is written against this trait alone.
pub trait Hasher: Sized + Send + Sync + 'static {
	type State: Copy + Debug + Send + Sync;
	type Block: ByteArray;
	type Digest: ByteArray;

	type OutputSize: ArrayLength<u8> + 'static;
	type BlockSize: ArrayLength<u8> + 'static;

	const NAME: &'static str;
	const BLOCK_BYTES: usize = <Self::Block as ByteArray>::SIZE;
	const DIGEST_BYTES: usize = <Self::Digest as ByteArray>::SIZE;
	/// Width of the message length field at the end of the final block.
	const COUNT_BYTES: usize;
	const COUNT_ENDIAN: Endian;
	/// The longest message, in bytes, whose bit length fits the length field.
	const LIMIT_BYTES: u64;

	fn initial() -> Self::State;

	fn accumulate(state: &mut Self::State, block: &Self::Block);

	/// Equivalent to calling [`Hasher::accumulate`] on every block in order.
	fn accumulate_blocks(state: &mut Self::State, blocks: &[Self::Block]);

	/// Pads a message of exactly `blocks` whole blocks and serializes the result.
	fn finalize(state: Self::State, blocks: u64) -> Self::Digest;

	/// Serializes a state without padding it.
	fn normalize(state: &Self::State) -> Self::Digest;

	/// Hashes a digest of this algorithm.
	fn rehash(digest: &Self::Digest) -> Self::Digest {
		Self::hash_bytes(digest.as_ref())
	}

	/// Pads and finalizes a message of `total_bytes` bytes whose whole blocks are already in
	/// `state` and whose remaining bytes are `tail`.
	fn finish(mut state: Self::State, tail: &[u8], total_bytes: u64) -> Self::Digest {
		debug_assert!(tail.len() < Self::BLOCK_BYTES);

		let mut block = <Self::Block as Zeroable>::zeroed();
		block.as_mut()[..tail.len()].copy_from_slice(tail);
		block.as_mut()[tail.len()] = 0x80;

		if tail.len() + 1 + Self::COUNT_BYTES > Self::BLOCK_BYTES {
			Self::accumulate(&mut state, &block);
			block = <Self::Block as Zeroable>::zeroed();
		}

		let count_start = Self::BLOCK_BYTES - Self::COUNT_BYTES;
		encode_count(
			Self::COUNT_ENDIAN,
			total_bytes as u128 * 8,
			&mut block.as_mut()[count_start..],
		);
		Self::accumulate(&mut state, &block);
		Self::normalize(&state)
	}

	/// Hashes a message of any length.
	fn hash_bytes(data: &[u8]) -> Self::Digest {
		let whole = data.len() - data.len() % Self::BLOCK_BYTES;
		let blocks: &[Self::Block] = bytemuck::cast_slice(&data[..whole]);

		let mut state = Self::initial();
		Self::accumulate_blocks(&mut state, blocks);
		Self::finish(state, &data[whole..], data.len() as u64)
	}

	fn double_hash_bytes(data: &[u8]) -> Self::Digest {
		Self::rehash(&Self::hash_bytes(data))
	}
}

#[derive(Debug, thiserror::Error)]
pub enum HashError {
	#[error("message length limit exceeded (limit {limit} bytes, attempted {attempted} bytes)")]
	LimitExceeded { limit: u64, attempted: u128 },
	#[error("invalid length (expected at most {expected}, got {actual})")]
	InvalidLength { expected: usize, actual: usize },
}
