// Copyright 2025 Irreducible Inc.

//! Single-shot, double and streaming hashing over a SHA descriptor.

use std::{marker::PhantomData, slice};

use bytemuck::Zeroable;

use super::{
	compress::compress,
	schedule::schedule,
	vectorize::{accumulate_batch, accumulate_scheduled, hash_batch, BatchKind},
	zeroed_buffer, Pads, Params, Sha, BLOCK_WORDS,
};
use crate::{
	codec::{decode, encode, Endian},
	dispatch::Strategy,
	hasher::Hasher,
};

/// The hashing API of the SHA variant `H`.
///
/// Every function is stateless; a streaming computation threads an explicit `H::State` from
/// [`Algorithm::initial`] through [`Algorithm::accumulate`] to [`Algorithm::finalize`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Algorithm<H>(PhantomData<H>);

type StateOf<H> = <H as Sha>::State<<H as Sha>::Word>;
type BufferOf<H> = <H as Sha>::Buffer<<H as Sha>::Word>;

impl<H: Sha> Algorithm<H> {
	#[inline]
	pub fn initial() -> StateOf<H> {
		H::H
	}

	/// Compresses one block into `state`.
	#[inline]
	pub fn accumulate(state: &mut StateOf<H>, block: &H::Block) {
		if H::compress_native(state, slice::from_ref(block)) {
			return;
		}
		Self::accumulate_scalar(state, block);
	}

	/// Compresses `blocks` into `state` in order.
	pub fn accumulate_blocks(state: &mut StateOf<H>, blocks: &[H::Block]) {
		Self::accumulate_blocks_with(state, blocks, Strategy::detected());
	}

	/// [`Algorithm::accumulate_blocks`] with an explicit batch strategy.
	///
	/// Hardware compression, when present, still takes precedence.
	pub fn accumulate_blocks_with(
		state: &mut StateOf<H>,
		blocks: &[H::Block],
		strategy: Strategy,
	) {
		if blocks.is_empty() || H::compress_native(state, blocks) {
			return;
		}

		match (strategy, blocks.len()) {
			(Strategy::Vectorized, 2..) => accumulate_scheduled::<H>(state, blocks, strategy),
			_ => {
				for block in blocks {
					Self::accumulate_scalar(state, block);
				}
			}
		}
	}

	/// Compresses blocks that are not contiguous in memory.
	pub fn accumulate_block_refs(state: &mut StateOf<H>, blocks: &[&H::Block]) {
		for block in blocks {
			Self::accumulate(state, block);
		}
	}

	#[inline]
	fn accumulate_scalar(state: &mut StateOf<H>, block: &H::Block) {
		let mut buffer = zeroed_buffer::<H, H::Word>();
		input_block::<H>(&mut buffer, block);
		schedule::<H, H::Word>(&mut buffer);
		compress::<H, H::Word>(state, &buffer);
	}

	/// Pads a message of `blocks` whole blocks, already accumulated into `state`.
	#[inline]
	fn pad_blocks(state: &mut StateOf<H>, blocks: u64) {
		let pads = H::pads();
		if blocks == 1 {
			compress::<H, H::Word>(state, pads.block_pad());
		} else {
			compress::<H, H::Word>(state, &pads.count_pad(blocks));
		}
	}

	/// Finalizes a message of `blocks` whole blocks.
	pub fn finalize(mut state: StateOf<H>, blocks: u64) -> H::Digest {
		Self::pad_blocks(&mut state, blocks);
		Self::normalize(&state)
	}

	/// Finalizes a message of `blocks` whole blocks and hashes the resulting digest.
	pub fn finalize_double(mut state: StateOf<H>, blocks: u64) -> H::Digest {
		Self::pad_blocks(&mut state, blocks);
		Self::hash_state(&state)
	}

	/// Serializes the leading digest bytes of `state`.
	#[inline]
	pub fn normalize(state: &StateOf<H>) -> H::Digest {
		let mut digest = H::Digest::zeroed();
		encode(Endian::Big, state.as_ref(), digest.as_mut());
		digest
	}

	pub fn hash_block(block: &H::Block) -> H::Digest {
		let mut state = H::H;
		Self::accumulate(&mut state, block);
		Self::finalize(state, 1)
	}

	/// Hashes exactly half a block.
	pub fn hash_half(half: &H::Half) -> H::Digest {
		let mut state = H::H;
		Self::compress_half(&mut state, half);
		Self::normalize(&state)
	}

	/// Hashes the concatenation of two half blocks, i.e. one block.
	pub fn hash_pair(left: &H::Half, right: &H::Half) -> H::Digest {
		Self::hash_block(&join::<H>(left, right))
	}

	pub fn hash_blocks(blocks: &[H::Block]) -> H::Digest {
		let mut state = H::H;
		Self::accumulate_blocks(&mut state, blocks);
		Self::finalize(state, blocks.len() as u64)
	}

	pub fn hash_block_refs(blocks: &[&H::Block]) -> H::Digest {
		let mut state = H::H;
		Self::accumulate_block_refs(&mut state, blocks);
		Self::finalize(state, blocks.len() as u64)
	}

	pub fn hash_array<const N: usize>(blocks: &[H::Block; N]) -> H::Digest {
		Self::hash_blocks(blocks)
	}

	/// Hashes the digest that `state` serializes to.
	///
	/// When the digest is made of whole words the state words are fed to the schedule directly,
	/// without a trip through bytes.
	pub fn hash_state(state: &StateOf<H>) -> H::Digest {
		if !Params::<H>::DIGEST_ALIGNED {
			return Self::hash_bytes(Self::normalize(state).as_ref());
		}

		let mut buffer = zeroed_buffer::<H, H::Word>();
		buffer.as_mut()[..Params::<H>::DIGEST_WORDS]
			.copy_from_slice(&state.as_ref()[..Params::<H>::DIGEST_WORDS]);
		Pads::<H>::load(&mut buffer, H::pads().digest_pad());
		schedule::<H, H::Word>(&mut buffer);

		let mut next = H::H;
		compress::<H, H::Word>(&mut next, &buffer);
		Self::normalize(&next)
	}

	/// Hashes a message of any length.
	pub fn hash_bytes(data: &[u8]) -> H::Digest {
		<Self as Hasher>::hash_bytes(data)
	}

	pub fn double_hash_block(block: &H::Block) -> H::Digest {
		let mut state = H::H;
		Self::accumulate(&mut state, block);
		Self::finalize_double(state, 1)
	}

	pub fn double_hash_half(half: &H::Half) -> H::Digest {
		let mut state = H::H;
		Self::compress_half(&mut state, half);
		Self::hash_state(&state)
	}

	pub fn double_hash_pair(left: &H::Half, right: &H::Half) -> H::Digest {
		Self::double_hash_block(&join::<H>(left, right))
	}

	pub fn double_hash_blocks(blocks: &[H::Block]) -> H::Digest {
		let mut state = H::H;
		Self::accumulate_blocks(&mut state, blocks);
		Self::finalize_double(state, blocks.len() as u64)
	}

	pub fn double_hash_bytes(data: &[u8]) -> H::Digest {
		<Self as Hasher>::double_hash_bytes(data)
	}

	/// Hashes every block independently, `out[i]` receiving the digest of `blocks[i]`.
	///
	/// # Panics
	/// Panics if `blocks` and `out` differ in length.
	pub fn batch_hash(blocks: &[H::Block], out: &mut [H::Digest]) {
		hash_batch::<H>(blocks, out, BatchKind::Hash, Strategy::detected());
	}

	/// Double hashes every block independently, `out[i]` receiving the result for `blocks[i]`.
	///
	/// # Panics
	/// Panics if `blocks` and `out` differ in length.
	pub fn batch_double_hash(blocks: &[H::Block], out: &mut [H::Digest]) {
		hash_batch::<H>(blocks, out, BatchKind::DoubleHash, Strategy::detected());
	}

	/// Compresses `blocks[i]` into `states[i]`, every state belonging to a separate message.
	///
	/// # Panics
	/// Panics if `states` and `blocks` differ in length.
	pub fn batch_accumulate(states: &mut [StateOf<H>], blocks: &[H::Block]) {
		accumulate_batch::<H>(states, blocks, Strategy::detected());
	}

	/// [`Algorithm::batch_hash`] and [`Algorithm::batch_double_hash`] with an explicit strategy.
	pub fn batch_hash_with(
		blocks: &[H::Block],
		out: &mut [H::Digest],
		double: bool,
		strategy: Strategy,
	) {
		let kind = if double {
			BatchKind::DoubleHash
		} else {
			BatchKind::Hash
		};
		hash_batch::<H>(blocks, out, kind, strategy);
	}

	/// The complete single-block hash of a half block: data words, then the chunk pad.
	#[inline]
	fn compress_half(state: &mut StateOf<H>, half: &H::Half) {
		let mut buffer = zeroed_buffer::<H, H::Word>();
		decode(
			Endian::Big,
			half.as_ref(),
			&mut buffer.as_mut()[..Params::<H>::CHUNK_WORDS],
		);
		Pads::<H>::load(&mut buffer, H::pads().chunk_pad());
		schedule::<H, H::Word>(&mut buffer);
		compress::<H, H::Word>(state, &buffer);
	}
}

#[inline]
fn input_block<H: Sha>(buffer: &mut BufferOf<H>, block: &H::Block) {
	decode(Endian::Big, block.as_ref(), &mut buffer.as_mut()[..BLOCK_WORDS]);
}

#[inline]
fn join<H: Sha>(left: &H::Half, right: &H::Half) -> H::Block {
	let mut block = H::Block::zeroed();
	let (first, second) = block.as_mut().split_at_mut(Params::<H>::CHUNK_BYTES);
	first.copy_from_slice(left.as_ref());
	second.copy_from_slice(right.as_ref());
	block
}

impl<H: Sha> Hasher for Algorithm<H> {
	type State = StateOf<H>;
	type Block = H::Block;
	type Digest = H::Digest;
	type OutputSize = H::OutputSize;
	type BlockSize = H::BlockSize;

	const NAME: &'static str = H::NAME;
	const COUNT_BYTES: usize = Params::<H>::COUNT_BYTES;
	const COUNT_ENDIAN: Endian = Endian::Big;
	// An eight byte length field counts bits, a sixteen byte one is bounded by the byte counter.
	const LIMIT_BYTES: u64 = if Params::<H>::COUNT_BYTES == 8 {
		u64::MAX / 8
	} else {
		u64::MAX
	};

	#[inline]
	fn initial() -> Self::State {
		H::H
	}

	#[inline]
	fn accumulate(state: &mut Self::State, block: &Self::Block) {
		Algorithm::<H>::accumulate(state, block)
	}

	#[inline]
	fn accumulate_blocks(state: &mut Self::State, blocks: &[Self::Block]) {
		Algorithm::<H>::accumulate_blocks(state, blocks)
	}

	#[inline]
	fn finalize(state: Self::State, blocks: u64) -> Self::Digest {
		Algorithm::<H>::finalize(state, blocks)
	}

	#[inline]
	fn normalize(state: &Self::State) -> Self::Digest {
		Algorithm::<H>::normalize(state)
	}

	fn rehash(digest: &Self::Digest) -> Self::Digest {
		if !Params::<H>::DIGEST_ALIGNED {
			return <Self as Hasher>::hash_bytes(digest.as_ref());
		}

		let mut state = H::H;
		decode(
			Endian::Big,
			digest.as_ref(),
			&mut state.as_mut()[..Params::<H>::DIGEST_WORDS],
		);
		Algorithm::<H>::hash_state(&state)
	}
}

#[cfg(test)]
mod tests {
	use hex_literal::hex;

	use super::*;
	use crate::sha::{H160, H224, H256, H384, H512, H512_224, H512_256};

	fn abc_block<H: Sha>() -> H::Block {
		let mut block = H::Block::zeroed();
		block.as_mut()[..3].copy_from_slice(b"abc");
		block
	}

	#[test]
	fn test_hash_bytes_of_abc() {
		assert_eq!(
			Algorithm::<H256>::hash_bytes(b"abc"),
			hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
		);
		assert_eq!(
			Algorithm::<H160>::hash_bytes(b"abc"),
			hex!("a9993e364706816aba3e25717850c26c9cd0d89d")
		);
		assert_eq!(
			Algorithm::<H224>::hash_bytes(b"abc"),
			hex!("23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7")
		);
		assert_eq!(
			Algorithm::<H512_256>::hash_bytes(b"abc"),
			hex!("53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23")
		);
	}

	#[test]
	fn test_empty_message_is_one_pad_block() {
		assert_eq!(
			Algorithm::<H256>::hash_blocks(&[]),
			hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
		);
		assert_eq!(Algorithm::<H512>::hash_blocks(&[]), Algorithm::<H512>::hash_bytes(b""));
	}

	fn check_single_block_paths<H: Sha>() {
		let block = abc_block::<H>();
		let single = Algorithm::<H>::hash_block(&block);

		let mut state = Algorithm::<H>::initial();
		Algorithm::<H>::accumulate(&mut state, &block);
		assert_eq!(single, Algorithm::<H>::finalize(state, 1));
		assert_eq!(single, Algorithm::<H>::hash_blocks(slice::from_ref(&block)));
		assert_eq!(single, Algorithm::<H>::hash_block_refs(&[&block]));
		assert_eq!(single, Algorithm::<H>::hash_array(&[block]));
		assert_eq!(single, Algorithm::<H>::hash_bytes(block.as_ref()));
	}

	#[test]
	fn test_single_block_paths_agree() {
		check_single_block_paths::<H160>();
		check_single_block_paths::<H224>();
		check_single_block_paths::<H256>();
		check_single_block_paths::<H384>();
		check_single_block_paths::<H512>();
		check_single_block_paths::<H512_224>();
		check_single_block_paths::<H512_256>();
	}

	fn check_double_hash<H: Sha>() {
		let block = abc_block::<H>();
		let first = Algorithm::<H>::hash_block(&block);
		let expected = Algorithm::<H>::hash_bytes(first.as_ref());

		assert_eq!(Algorithm::<H>::double_hash_block(&block), expected);
		assert_eq!(Algorithm::<H>::double_hash_blocks(slice::from_ref(&block)), expected);
		assert_eq!(Algorithm::<H>::double_hash_bytes(block.as_ref()), expected);
		assert_eq!(<Algorithm<H> as Hasher>::rehash(&first), expected);
	}

	#[test]
	fn test_double_hash_is_hash_of_digest() {
		check_double_hash::<H160>();
		check_double_hash::<H224>();
		check_double_hash::<H256>();
		check_double_hash::<H384>();
		check_double_hash::<H512>();
		check_double_hash::<H512_224>();
		check_double_hash::<H512_256>();
	}

	#[test]
	fn test_half_and_pair() {
		let half = [0x42u8; 32];
		assert_eq!(Algorithm::<H256>::hash_half(&half), Algorithm::<H256>::hash_bytes(&half));
		assert_eq!(
			Algorithm::<H256>::double_hash_half(&half),
			Algorithm::<H256>::double_hash_bytes(&half)
		);

		let right = [0x17u8; 32];
		let mut joined = [0u8; 64];
		joined[..32].copy_from_slice(&half);
		joined[32..].copy_from_slice(&right);
		assert_eq!(
			Algorithm::<H256>::hash_pair(&half, &right),
			Algorithm::<H256>::hash_bytes(&joined)
		);
		assert_eq!(
			Algorithm::<H256>::double_hash_pair(&half, &right),
			Algorithm::<H256>::double_hash_bytes(&joined)
		);
	}

	#[test]
	fn test_strategies_accumulate_identically() {
		let blocks: Vec<[u8; 128]> = (0..37u8).map(|i| [i.wrapping_mul(29); 128]).collect();

		let mut scalar = Algorithm::<H512>::initial();
		Algorithm::<H512>::accumulate_blocks_with(&mut scalar, &blocks, Strategy::Scalar);
		let mut vectorized = Algorithm::<H512>::initial();
		Algorithm::<H512>::accumulate_blocks_with(&mut vectorized, &blocks, Strategy::Vectorized);
		assert_eq!(scalar, vectorized);
	}
}
